//! Defines the [`Document`] type and [`read_documents`], which loads every ADR
//! source file from a directory into memory.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use walkdir::WalkDir;

const MARKDOWN_EXTENSION: &str = ".md";

/// A raw ADR source file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    /// The file name relative to the ADR directory, e.g.,
    /// `0001-record-architecture-decisions.md`.
    pub filename: String,

    /// The full text of the file.
    pub contents: String,
}

impl Document {
    pub fn new<S: Into<String>, T: Into<String>>(filename: S, contents: T) -> Document {
        Document {
            filename: filename.into(),
            contents: contents.into(),
        }
    }
}

/// Reads every Markdown file (extension = `.md`) directly inside
/// `source_directory` and returns them sorted by file name. Symlinks are
/// followed, so a linked ADR is indexed under the link's name. Subdirectories
/// are not descended into and other files are skipped.
///
/// ADRs are conventionally numbered (`0001-...`, `0002-...`), so file name
/// order is also the order in which the decisions were recorded.
pub fn read_documents(source_directory: &Path) -> Result<Vec<Document>> {
    let mut documents = Vec::new();
    for result in WalkDir::new(source_directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = result.map_err(|err| Error::ReadDirectory {
            path: source_directory.to_owned(),
            err,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let filename = entry
            .file_name()
            .to_str()
            .ok_or_else(|| Error::InvalidFileName(entry.path().to_owned()))?;
        if !filename.ends_with(MARKDOWN_EXTENSION) {
            continue;
        }

        let contents = std::fs::read_to_string(entry.path()).map_err(|err| Error::ReadFile {
            path: entry.path().to_owned(),
            err,
        })?;
        debug!(filename, bytes = contents.len(), "read document");
        documents.push(Document::new(filename, contents));
    }

    Ok(documents)
}

/// Represents the result of reading [`Document`]s.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error reading [`Document`]s from disk.
#[derive(Debug, Error)]
pub enum Error {
    /// Returned when the source directory can't be listed.
    #[error("reading directory `{}`: {err}", .path.display())]
    ReadDirectory {
        path: PathBuf,
        #[source]
        err: walkdir::Error,
    },

    /// Returned when a source file can't be read (including when it isn't
    /// valid UTF-8).
    #[error("reading file `{}`: {err}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    /// Returned when a Markdown file's name isn't valid UTF-8.
    #[error("invalid file name: {0:?}")]
    InvalidFileName(PathBuf),
}
