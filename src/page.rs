//! Assembles full output pages: the main index page (heading, contributing
//! section, and the unfiltered contents table) and one page per tag (heading
//! and the contents table filtered to that tag).

use crate::record::{Record, TagIndex};
use crate::render::{render_table, Links, Result};
use std::path::{Component, Path, PathBuf};
use tracing::warn;

const TAG_PAGE_EXTENSION: &str = ".md";

/// An output Markdown file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    /// The target location on disk for the output file.
    pub file_path: PathBuf,

    /// The tag the page is filtered on, or `None` for the main index page.
    pub tag: Option<String>,

    /// The rendered Markdown.
    pub contents: String,
}

/// Responsible for assembling [`Page`]s from [`Record`]s.
pub struct Assembler<'a> {
    /// The top-level heading text, e.g., `Architectural Decision Records
    /// (ADRs)`. Tag pages append ` - {tag}`.
    pub title: &'a str,

    /// The body of the index page's `## Contributing` section.
    pub contributing: &'a str,

    /// The base URLs for document and tag links.
    pub links: Links<'a>,

    /// Where the index page is written.
    pub index_file: &'a Path,

    /// The directory tag pages are written into, as `{tags_directory}/{tag}.md`.
    pub tags_directory: &'a Path,
}

impl Assembler<'_> {
    /// Renders the main index page.
    pub fn index_page(&self, records: &[Record], tags: &TagIndex) -> Result<String> {
        Ok(format!(
            "# {}\n\n## Contributing\n\n{}\n\n{}",
            self.title,
            self.contributing,
            render_table(records, tags, None, &self.links)?,
        ))
    }

    /// Renders the index page for `tag`, listing only the records carrying it.
    pub fn tag_page(&self, records: &[Record], tags: &TagIndex, tag: &str) -> Result<String> {
        Ok(format!(
            "# {} - {}\n\n{}",
            self.title,
            tag,
            render_table(records, tags, Some(tag), &self.links)?,
        ))
    }

    /// Returns `{tags_directory}/{tag}.md`, or `None` if the file name isn't a
    /// single plain path component (e.g., `../README` or `a/b`). Such a tag
    /// would otherwise write outside the tag directory, possibly over the
    /// index page.
    pub fn tag_page_path(&self, tag: &str) -> Option<PathBuf> {
        let file_name = format!("{}{}", tag, TAG_PAGE_EXTENSION);
        let mut components = Path::new(&file_name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Some(self.tags_directory.join(&file_name)),
            _ => None,
        }
    }

    /// Builds the main index [`Page`] followed by one [`Page`] per tag in
    /// `tags`, in the order the tags were first seen. Tags without a valid
    /// [`Assembler::tag_page_path`] are skipped with a warning.
    pub fn pages(&self, records: &[Record], tags: &TagIndex) -> Result<Vec<Page>> {
        let mut pages = Vec::with_capacity(1 + tags.len());
        pages.push(Page {
            file_path: self.index_file.to_owned(),
            tag: None,
            contents: self.index_page(records, tags)?,
        });
        for tag in tags.iter() {
            let file_path = match self.tag_page_path(tag) {
                Some(file_path) => file_path,
                None => {
                    warn!("Skipping contents page for tag \"{}\": not a valid file name", tag);
                    continue;
                }
            };
            pages.push(Page {
                file_path,
                tag: Some(tag.to_owned()),
                contents: self.tag_page(records, tags, tag)?,
            });
        }
        Ok(pages)
    }
}
