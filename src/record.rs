//! Defines the [`Record`] and [`TagIndex`] types and [`build_records`], which
//! turns raw [`Document`]s into normalized records.

use crate::document::Document;
use crate::extract::{extract_authors, extract_date, extract_tags, extract_title};
use crate::metadata::parse_metadata;
use std::collections::HashSet;

/// The normalized form of an ADR.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    /// The source file name, used to build the link to the ADR.
    pub filename: String,

    /// The text of the first `# ` heading, if any.
    pub title: Option<String>,

    /// The free-form date following `Date:`, or [`crate::extract::NO_DATE`].
    pub date: String,

    /// The tags from the `tags` front-matter key in source order.
    pub tags: Vec<String>,

    /// The authors from the `authors` front-matter key in source order.
    pub authors: Vec<String>,
}

impl Record {
    /// Parses a [`Record`] out of a [`Document`].
    pub fn from_document(document: &Document) -> Record {
        let metadata = parse_metadata(&document.contents);
        Record {
            filename: document.filename.clone(),
            title: extract_title(&document.contents),
            date: extract_date(&document.contents),
            tags: dedup(extract_tags(&metadata)),
            authors: extract_authors(&metadata),
        }
    }

    /// Returns true if `tag` is one of the record's tags (exact match).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Drops repeated tags, keeping the first occurrence.
fn dedup(tags: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    tags.into_iter()
        .filter(|tag| seen.insert(tag.clone()))
        .collect()
}

/// The set of distinct tags seen across all [`Record`]s. Tags iterate in the
/// order they were first seen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagIndex {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl TagIndex {
    pub fn new() -> TagIndex {
        TagIndex::default()
    }

    /// Adds `tag` to the index. Returns false if it was already present.
    pub fn insert(&mut self, tag: &str) -> bool {
        if self.seen.contains(tag) {
            return false;
        }
        self.seen.insert(tag.to_owned());
        self.order.push(tag.to_owned());
        true
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.seen.contains(tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<'a> Extend<&'a String> for TagIndex {
    fn extend<I: IntoIterator<Item = &'a String>>(&mut self, tags: I) {
        for tag in tags {
            self.insert(tag);
        }
    }
}

/// Builds one [`Record`] per [`Document`], preserving input order, and
/// collects every tag into a [`TagIndex`]. Duplicate file names and titles
/// are allowed.
pub fn build_records(documents: &[Document]) -> (Vec<Record>, TagIndex) {
    let mut tags = TagIndex::new();
    let records: Vec<Record> = documents
        .iter()
        .map(|document| {
            let record = Record::from_document(document);
            tags.extend(&record.tags);
            record
        })
        .collect();
    (records, tags)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::extract::NO_DATE;

    #[test]
    fn test_record_from_document() {
        let document = Document::new(
            "0007-use-postgres.md",
            "---\ntags: storage, backend\nauthors: Jane Doe, John Roe\n---\n\n\
             # 7. Use Postgres\n\nDate: 2023-05-01\n\n## Context\n",
        );
        assert_eq!(
            Record {
                filename: String::from("0007-use-postgres.md"),
                title: Some(String::from("7. Use Postgres")),
                date: String::from("2023-05-01"),
                tags: vec![String::from("storage"), String::from("backend")],
                authors: vec![String::from("Jane Doe"), String::from("John Roe")],
            },
            Record::from_document(&document),
        );
    }

    #[test]
    fn test_record_from_bare_document() {
        let record = Record::from_document(&Document::new("notes.md", "just text"));
        assert_eq!(None, record.title);
        assert_eq!(NO_DATE, record.date);
        assert!(record.tags.is_empty());
        assert!(record.authors.is_empty());
    }

    #[test]
    fn test_record_dedups_tags() {
        let record = Record::from_document(&Document::new("a.md", "---\ntags: x, y, x\n---\n"));
        assert_eq!(vec!["x", "y"], record.tags);
    }

    #[test]
    fn test_build_records() {
        let documents = vec![
            Document::new("a.md", "---\ntags: x\n---\n# A"),
            Document::new("b.md", "---\ntags: y, x\n---\n# B"),
            Document::new("c.md", "# C"),
            Document::new("a.md", "---\ntags: z\n---\n# A"),
        ];
        let (records, tags) = build_records(&documents);

        let filenames: Vec<&str> = records.iter().map(|r| r.filename.as_str()).collect();
        assert_eq!(vec!["a.md", "b.md", "c.md", "a.md"], filenames);
        assert_eq!(3, tags.len());
        assert!(tags.contains("x"));
        assert!(tags.contains("y"));
        assert!(tags.contains("z"));
    }

    #[test]
    fn test_build_records_without_tags() {
        let documents = vec![Document::new("a.md", "# A"), Document::new("b.md", "# B")];
        let (records, tags) = build_records(&documents);
        assert_eq!(2, records.len());
        assert!(tags.is_empty());
    }

    #[test]
    fn test_build_records_empty() {
        let (records, tags) = build_records(&[]);
        assert!(records.is_empty());
        assert!(tags.is_empty());
    }

    #[test]
    fn test_tag_index_insert() {
        let mut tags = TagIndex::new();
        assert!(tags.insert("x"));
        assert!(tags.insert("y"));
        assert!(!tags.insert("x"));
        assert_eq!(2, tags.len());
        assert_eq!(vec!["x", "y"], tags.iter().collect::<Vec<_>>());
    }
}
