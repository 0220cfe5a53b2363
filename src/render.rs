//! Renders [`Record`]s into the Markdown contents table shared by the index
//! page and the tag pages.

use crate::record::{Record, TagIndex};
use thiserror::Error;
use url::Url;

const CONTENTS_HEADING: &str = "## Contents";
const TABLE_HEADINGS: &str = "| Date | Title | Tags | Authors |";
const TABLE_DIVIDERS: &str = "| ------- | ------- | ------- | ------- |";
const TAG_PAGE_EXTENSION: &str = ".md";

/// The base URLs that rendered links point into. Both URLs must end in a
/// trailing slash, otherwise [`Url::join`] drops their last path segment.
#[derive(Clone, Copy, Debug)]
pub struct Links<'a> {
    /// The URL of the ADR directory, e.g.,
    /// `https://github.com/org/repo/blob/main/doc/adr/`. A record's link is
    /// `{documents_url}{filename}`.
    pub documents_url: &'a Url,

    /// The URL of the tag pages directory, e.g.,
    /// `https://github.com/org/repo/blob/main/tags/`. A tag's link is
    /// `{tags_url}{tag}.md`.
    pub tags_url: &'a Url,
}

impl Links<'_> {
    pub fn document(&self, filename: &str) -> Result<Url> {
        join(self.documents_url, filename)
    }

    pub fn tag(&self, tag: &str) -> Result<Url> {
        join(self.tags_url, &format!("{}{}", tag, TAG_PAGE_EXTENSION))
    }
}

// Appends `name` as one percent-encoded path segment, so characters like
// `/`, `\`, `?`, and `#` can't add segments or end the path.
fn join(base: &Url, name: &str) -> Result<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| Error::CannotBeABase(base.clone()))?
        .pop_if_empty()
        .push(name);
    Ok(url)
}

/// Renders the contents section: a heading, a filter line linking every tag in
/// `tags`, and a table of `records` with the most recent (last) record first.
/// If `filter_tag` is provided, only records carrying that tag are listed.
///
/// Titles, tags, and authors are inserted verbatim; they're expected to be
/// valid Markdown already.
pub fn render_table(
    records: &[Record],
    tags: &TagIndex,
    filter_tag: Option<&str>,
    links: &Links,
) -> Result<String> {
    let filter_line = display_tags(tags.iter(), links)?;

    let mut contents = format!(
        "{}\n\nFilter: {}\n\n{}\n{}\n",
        CONTENTS_HEADING, filter_line, TABLE_HEADINGS, TABLE_DIVIDERS,
    );

    let rows = records
        .iter()
        .filter(|record| match filter_tag {
            Some(tag) => record.has_tag(tag),
            None => true,
        })
        .rev()
        .map(|record| display_row(record, links))
        .collect::<Result<Vec<String>>>()?;
    contents.push_str(&rows.join("\n"));

    Ok(contents)
}

fn display_row(record: &Record, links: &Links) -> Result<String> {
    Ok(format!(
        "| {} | {} | {} | {} |",
        record.date,
        display_title(record, links)?,
        display_tags(record.tags.iter().map(String::as_str), links)?,
        record.authors.join(", "),
    ))
}

/// Links the record's title to its source file. Untitled records fall back to
/// the file name instead of an empty link text; an empty `[]()` link renders
/// as nothing and the row couldn't be opened. The record itself keeps `None`.
fn display_title(record: &Record, links: &Links) -> Result<String> {
    let text = record.title.as_deref().unwrap_or(&record.filename);
    Ok(format!("[{}]({})", text, links.document(&record.filename)?))
}

fn display_tags<'t>(tags: impl Iterator<Item = &'t str>, links: &Links) -> Result<String> {
    Ok(tags
        .map(|tag| -> Result<String> { Ok(format!("[`{}`]({})", tag, links.tag(tag)?)) })
        .collect::<Result<Vec<String>>>()?
        .join(" "))
}

/// Represents the result of a rendering operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error rendering the contents table.
#[derive(Debug, Error)]
pub enum Error {
    /// Returned when a base URL can't have path segments appended (e.g.,
    /// `mailto:` URLs).
    #[error("building link: `{0}` cannot be a base URL")]
    CannotBeABase(Url),
}
