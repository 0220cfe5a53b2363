//! Defines the [`Metadata`] type and [`parse_metadata`], a best-effort scanner
//! for the `---`-fenced `key: value` block at the top of an ADR. The block is
//! not parsed as YAML: ADR front matter is frequently invalid YAML (unquoted
//! colons, stray indentation) and every value we care about is a plain string.

use std::collections::HashMap;

/// The front-matter fence.
const FENCE: &str = "---";

/// The separator between a front-matter key and its value.
const SEPARATOR: char = ':';

/// Trimmed `key: value` pairs scraped from a document's front matter. If a key
/// repeats, the last value wins.
pub type Metadata = HashMap<String, String>;

/// The scanner state. Every fence line flips it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum State {
    Outside,
    Inside,
}

impl State {
    fn toggle(self) -> State {
        match self {
            State::Outside => State::Inside,
            State::Inside => State::Outside,
        }
    }
}

/// Scans `input` line by line and collects the front-matter pairs.
///
/// * A line whose trimmed content is exactly `---` toggles between being
///   outside and inside the block.
/// * Inside the block, a line containing `:` is split at the first `:` into a
///   key and a value, both trimmed. Other lines are ignored.
/// * A blank line inside the block ends the scan, whether or not the closing
///   fence was seen.
///
/// Nothing here fails: a document without a block yields an empty map and an
/// unterminated block yields whatever pairs preceded the end of input.
pub fn parse_metadata(input: &str) -> Metadata {
    let mut metadata = Metadata::new();
    let mut state = State::Outside;

    for line in input.lines() {
        let trimmed = line.trim();
        if trimmed == FENCE {
            state = state.toggle();
            continue;
        }

        if state == State::Outside {
            continue;
        }

        match line.split_once(SEPARATOR) {
            Some((key, value)) => {
                metadata.insert(key.trim().to_owned(), value.trim().to_owned());
            }
            None if trimmed.is_empty() => break,
            None => {}
        }
    }

    metadata
}

#[cfg(test)]
mod test {
    use super::*;

    fn pairs(metadata: &Metadata) -> Vec<(&str, &str)> {
        let mut pairs: Vec<(&str, &str)> = metadata
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        pairs.sort();
        pairs
    }

    #[test]
    fn test_parse_metadata() {
        let metadata = parse_metadata(
            "---\ntags: api, backend\nauthors:  Jane Doe ,John Roe\n---\n# Title\n",
        );
        assert_eq!(
            vec![
                ("authors", "Jane Doe ,John Roe"),
                ("tags", "api, backend"),
            ],
            pairs(&metadata),
        );
    }

    #[test]
    fn test_parse_metadata_no_fence() {
        assert!(parse_metadata("# Title\ntags: api\n\nbody").is_empty());
    }

    #[test]
    fn test_parse_metadata_empty_input() {
        assert!(parse_metadata("").is_empty());
    }

    #[test]
    fn test_parse_metadata_blank_line_ends_scan() {
        let metadata = parse_metadata("---\ntags: api\n\nauthors: Jane\n---\n");
        assert_eq!(vec![("tags", "api")], pairs(&metadata));
    }

    #[test]
    fn test_parse_metadata_whitespace_only_line_ends_scan() {
        let metadata = parse_metadata("---\ntags: api\n   \nauthors: Jane\n---\n");
        assert_eq!(vec![("tags", "api")], pairs(&metadata));
    }

    #[test]
    fn test_parse_metadata_unterminated() {
        let metadata = parse_metadata("---\ntags: api\nauthors: Jane");
        assert_eq!(vec![("authors", "Jane"), ("tags", "api")], pairs(&metadata));
    }

    #[test]
    fn test_parse_metadata_splits_on_first_separator() {
        let metadata = parse_metadata("---\nlink: https://example.org\n---\n");
        assert_eq!(vec![("link", "https://example.org")], pairs(&metadata));
    }

    #[test]
    fn test_parse_metadata_last_value_wins() {
        let metadata = parse_metadata("---\ntags: a\ntags: b\n---\n");
        assert_eq!(vec![("tags", "b")], pairs(&metadata));
    }

    #[test]
    fn test_parse_metadata_ignores_lines_without_separator() {
        let metadata = parse_metadata("---\njust some text\ntags: a\n---\n");
        assert_eq!(vec![("tags", "a")], pairs(&metadata));
    }

    #[test]
    fn test_parse_metadata_ignores_body_pairs() {
        let metadata = parse_metadata("---\ntags: a\n---\n# Title\nDate: 2021-01-01\n");
        assert_eq!(vec![("tags", "a")], pairs(&metadata));
    }

    #[test]
    fn test_parse_metadata_crlf() {
        let metadata = parse_metadata("---\r\ntags: a\r\n---\r\n");
        assert_eq!(vec![("tags", "a")], pairs(&metadata));
    }

    // A second fence reopens the block; this mirrors the toggling rule rather
    // than stopping at the first closing fence.
    #[test]
    fn test_parse_metadata_fence_in_body_reopens_block() {
        let metadata = parse_metadata("---\ntags: a\n---\nbody\n---\nstatus: draft\n");
        assert_eq!(vec![("status", "draft"), ("tags", "a")], pairs(&metadata));
    }
}
