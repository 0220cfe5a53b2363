//! The library code for the `adr-index` generator, which turns a directory of
//! Architectural Decision Records into a `README.md` contents page plus one
//! contents page per tag. The architecture can be generally broken down into
//! two distinct steps:
//!
//! 1. Parsing ADRs from source files on disk ([`crate::document`],
//!    [`crate::record`])
//! 2. Converting the parsed records into output files on disk
//!    ([`crate::page`], [`crate::write`])
//!
//! Parsing is deliberately forgiving. Front matter is scraped by a small
//! line scanner ([`crate::metadata`]) rather than a YAML parser, and missing
//! fields fall back to defaults ([`crate::extract`]) instead of failing.
//!
//! The second step renders a single contents table ([`crate::render`]) once
//! for the main index and once per distinct tag. Every page is rendered
//! before the first one is written.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]

pub mod build;
pub mod config;
pub mod document;
pub mod extract;
pub mod metadata;
pub mod page;
pub mod record;
pub mod render;
pub mod write;
