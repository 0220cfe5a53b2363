//! Writes assembled [`Page`]s to disk.

use crate::page::Page;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Creates `dir` and any missing parents. Succeeds without touching anything
/// if `dir` already exists, so repeated runs can call it freely.
pub fn ensure_directory(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|err| Error::CreateDirectory {
        path: dir.to_owned(),
        err,
    })
}

/// Writes each [`Page`] to its `file_path`, creating parent directories the
/// first time they're seen. Existing files are overwritten.
pub fn write_pages(pages: &[Page]) -> Result<()> {
    let mut seen_dirs: HashSet<PathBuf> = HashSet::new();
    for page in pages {
        if let Some(dir) = page.file_path.parent() {
            if !dir.as_os_str().is_empty() && seen_dirs.insert(dir.to_owned()) {
                debug!(dir = %dir.display(), "ensuring directory");
                ensure_directory(dir)?;
            }
        }
        write_page(page)?;
    }
    Ok(())
}

fn write_page(page: &Page) -> Result<()> {
    std::fs::write(&page.file_path, &page.contents).map_err(|err| Error::WriteFile {
        path: page.file_path.clone(),
        err,
    })?;
    match &page.tag {
        None => info!("README generated successfully."),
        Some(tag) => info!("Contents page generated for tag \"{}\"", tag),
    }
    Ok(())
}

/// The result of a fallible page-writing operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error in a page-writing operation.
#[derive(Debug, Error)]
pub enum Error {
    /// Returned when an output directory can't be created.
    #[error("creating directory `{}`: {err}", .path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    /// Returned when an output file can't be written.
    #[error("writing file `{}`: {err}", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },
}
