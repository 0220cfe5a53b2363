//! Exports the [`build_index`] function which stitches together the high-level
//! steps of a run: reading the ADRs ([`crate::document`]), aggregating them into
//! records ([`crate::record`]), assembling the index and tag pages
//! ([`crate::page`]), and writing them to disk ([`crate::write`]).

use crate::config::Config;
use crate::document::{read_documents, Error as ReadError};
use crate::page::Assembler;
use crate::record::build_records;
use crate::render::{Error as RenderError, Links};
use crate::write::{write_pages, Error as WriteError};
use thiserror::Error;
use tracing::debug;

/// Counts reported after a successful run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary {
    /// The number of ADRs indexed.
    pub documents: usize,

    /// The number of tag pages written.
    pub tags: usize,
}

/// Builds the index from a [`Config`] object. Every ADR is read and every page
/// is rendered before anything is written, so a bad link or unreadable file
/// leaves the previous output untouched.
pub fn build_index(config: &Config) -> Result<Summary> {
    let documents = read_documents(&config.adr_directory)?;
    let (records, tags) = build_records(&documents);
    debug!(
        documents = records.len(),
        tags = tags.len(),
        "aggregated records"
    );

    let assembler = Assembler {
        title: &config.title,
        contributing: &config.contributing,
        links: Links {
            documents_url: &config.documents_url,
            tags_url: &config.tags_url,
        },
        index_file: &config.index_file,
        tags_directory: &config.tags_directory,
    };
    let pages = assembler.pages(&records, &tags)?;
    write_pages(&pages)?;

    Ok(Summary {
        documents: records.len(),
        tags: pages.iter().filter(|page| page.tag.is_some()).count(),
    })
}

type Result<T> = std::result::Result<T, Error>;

/// The error type for building the index. Errors can occur while reading
/// ADRs, rendering pages, or writing them.
#[derive(Debug, Error)]
pub enum Error {
    /// Returned for errors reading ADR source files.
    #[error(transparent)]
    Read(#[from] ReadError),

    /// Returned for errors rendering pages.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Returned for errors writing pages to disk.
    #[error(transparent)]
    Write(#[from] WriteError),
}
