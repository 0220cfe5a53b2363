//! Field extractors which derive a [`crate::record::Record`]'s fields from a
//! document's text and its [`Metadata`].

use crate::metadata::Metadata;

/// The date rendered for documents without a `Date:` line.
pub const NO_DATE: &str = "N/A";

const TITLE_MARKER: &str = "# ";
const DATE_LABEL: &str = "Date:";
const TAGS_KEY: &str = "tags";
const AUTHORS_KEY: &str = "authors";

/// Returns the text of the first top-level (`# `) heading, or `None` if the
/// document has no such heading. Lower-level headings (`## `) don't count.
pub fn extract_title(input: &str) -> Option<String> {
    input
        .lines()
        .find_map(|line| line.trim().strip_prefix(TITLE_MARKER))
        .map(|title| title.trim().to_owned())
}

/// Returns whatever follows the first `Date:` label, or [`NO_DATE`]. The date
/// is free-form and is never parsed.
pub fn extract_date(input: &str) -> String {
    input
        .lines()
        .find_map(|line| line.trim().strip_prefix(DATE_LABEL))
        .map(|date| date.trim().to_owned())
        .unwrap_or_else(|| NO_DATE.to_owned())
}

pub fn extract_tags(metadata: &Metadata) -> Vec<String> {
    split_list(metadata.get(TAGS_KEY).map(String::as_str))
}

pub fn extract_authors(metadata: &Metadata) -> Vec<String> {
    split_list(metadata.get(AUTHORS_KEY).map(String::as_str))
}

/// Splits a comma-joined metadata value into trimmed items. An absent value
/// yields no items. Empty items (e.g., from a trailing comma) are kept.
pub fn split_list(value: Option<&str>) -> Vec<String> {
    match value {
        None => Vec::new(),
        Some(value) => value.split(',').map(|item| item.trim().to_owned()).collect(),
    }
}
