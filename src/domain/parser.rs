//! Line-oriented parser building a [`Document`] from indentation.
//!
//! No indentation stack is kept. The open levels are the right spine of the
//! tree built so far: the last top-level node, its last child, and so on. Each
//! node remembers the leading whitespace of the line that created it, and a new
//! line attaches below the deepest spine node whose indentation it extends.

use std::io::BufRead;

use tracing::{debug, instrument, trace};

use crate::domain::document::Document;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::node::{Composite, TreeNode};
use crate::domain::scalar::clean_scalar;

/// Marker skipped while the document is still empty.
const DOCUMENT_MARKER: &str = "---";

const LIST_MARKER: &str = "- ";

/// Incremental parser; feed lines in order, then call [`Parser::finish`].
#[derive(Debug, Default)]
pub struct Parser {
    document: Document,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a complete string, numbering lines from 1.
    #[instrument(level = "debug", skip(input))]
    pub fn parse_str(input: &str) -> DomainResult<Document> {
        Self::parse_lines(input.lines().enumerate().map(|(idx, line)| (idx + 1, line)))
    }

    /// Parse everything `reader` yields; read failures abort the parse.
    #[instrument(level = "debug", skip(reader))]
    pub fn parse_reader<R: BufRead>(reader: R) -> DomainResult<Document> {
        let mut parser = Self::new();
        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.map_err(|source| DomainError::Read {
                line: line_no,
                source,
            })?;
            parser.process_line(line_no, &line)?;
        }
        Ok(parser.finish())
    }

    /// Parse `(line_number, line)` pairs as produced by any line source.
    pub fn parse_lines<I, S>(lines: I) -> DomainResult<Document>
    where
        I: IntoIterator<Item = (usize, S)>,
        S: AsRef<str>,
    {
        let mut parser = Self::new();
        for (line_no, line) in lines {
            parser.process_line(line_no, line.as_ref())?;
        }
        Ok(parser.finish())
    }

    /// Attach one line to the document under construction.
    pub fn process_line(&mut self, line_no: usize, line: &str) -> DomainResult<()> {
        if line.trim().is_empty() {
            return Ok(());
        }
        if line.starts_with(DOCUMENT_MARKER) && self.document.child_count() == 0 {
            trace!(line_no, "skipping document marker");
            return Ok(());
        }

        let stripped = line.trim_start();
        if stripped.starts_with('#') {
            return Ok(());
        }
        let indentation = &line[..line.len() - stripped.len()];

        let depth = self.attachment_depth(line_no, line, indentation)?;
        let entry = Entry::classify(stripped, indentation);
        trace!(line_no, depth, ?entry, "attaching line");

        if depth == 0 {
            entry.attach_to(&mut self.document, indentation);
        } else {
            let target = spine_node(&mut self.document, depth)?;
            entry.attach_to(target, indentation);
        }
        Ok(())
    }

    pub fn finish(self) -> Document {
        debug!(
            top_level = self.document.child_count(),
            "document parsed"
        );
        self.document
    }

    /// Number of `last_child` steps from the document to the attachment point.
    ///
    /// Zero means the document itself.
    fn attachment_depth(&self, line_no: usize, line: &str, indentation: &str) -> DomainResult<usize> {
        if indentation.is_empty() {
            return Ok(0);
        }

        let mut depth = 0;
        let mut parent: &dyn Composite = &self.document;
        loop {
            if parent.is_scalar() {
                return Ok(depth);
            }
            let last = parent.last_child()?;
            if last.indentation() == indentation {
                return Ok(depth);
            }
            if !line.starts_with(last.indentation()) {
                return Err(DomainError::Syntax {
                    line: line_no,
                    content: line.trim().to_string(),
                });
            }
            parent = last;
            depth += 1;
        }
    }
}

/// Node reached by taking the last child `depth` times, starting at the document.
fn spine_node(document: &mut Document, depth: usize) -> DomainResult<&mut TreeNode> {
    let mut node = document.last_child_mut()?;
    for _ in 1..depth {
        node = node.last_child_mut()?;
    }
    Ok(node)
}

/// Classified content of a non-blank, non-comment line.
#[derive(Debug)]
enum Entry {
    /// `key: value` or a bare `key`
    Mapping { key: String, value: Option<String> },
    /// `- value`
    ListScalar { value: Option<String> },
    /// `- key: value`; the key starts a mapping inside a new list element
    ListMapping {
        key: String,
        value: Option<String>,
        key_indentation: String,
    },
}

impl Entry {
    fn classify(stripped: &str, indentation: &str) -> Self {
        let (raw_key, raw_value) = match stripped.split_once(':') {
            Some((key, value)) => (key, Some(value)),
            None => (stripped, None),
        };

        let Some(after_marker) = raw_key
            .strip_prefix('-')
            .filter(|_| raw_key.starts_with(LIST_MARKER))
        else {
            return Entry::Mapping {
                key: raw_key.trim().to_string(),
                value: raw_value.and_then(clean_scalar),
            };
        };

        match raw_value {
            Some(value) => {
                // The key column of `- key:` is where later fields of the element line up.
                let gap = &after_marker[..after_marker.len() - after_marker.trim_start().len()];
                Entry::ListMapping {
                    key: after_marker.trim().to_string(),
                    value: clean_scalar(value),
                    key_indentation: format!("{indentation} {gap}"),
                }
            }
            None => Entry::ListScalar {
                value: clean_scalar(after_marker),
            },
        }
    }

    fn attach_to<C: Composite>(self, target: &mut C, indentation: &str) {
        match self {
            Entry::Mapping { key, value } => {
                target.add_child(TreeNode::new(indentation, key, value));
            }
            Entry::ListScalar { value } => {
                let index = target.child_count().to_string();
                target.add_child(TreeNode::new(indentation, index, value));
            }
            Entry::ListMapping {
                key,
                value,
                key_indentation,
            } => {
                let index = target.child_count().to_string();
                let mut element = TreeNode::new(indentation, index, None);
                element.add_child(TreeNode::new(key_indentation, key, value));
                target.add_child(element);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::path::YamlPath;
    use crate::util::testing;
    use rstest::rstest;

    fn value<'a>(doc: &'a Document, segments: &[&str]) -> Option<&'a str> {
        doc.find_value(&YamlPath::of(segments.iter().copied()))
    }

    #[test]
    fn test_nested_mapping() {
        testing::init_test_setup();
        let doc = Parser::parse_str("author: Tom\ndatabase:\n  driver: newdriver\n  port: 6601\n")
            .unwrap();
        assert_eq!(value(&doc, &["author"]), Some("Tom"));
        assert_eq!(value(&doc, &["database"]), None);
        assert_eq!(value(&doc, &["database", "driver"]), Some("newdriver"));
        assert_eq!(value(&doc, &["database", "port"]), Some("6601"));
    }

    #[test]
    fn test_list_mapping_records_key_column() {
        let doc = Parser::parse_str("data:\n  -   id: 1\n      name: Franc\n").unwrap();
        let element = doc.last_child().unwrap().last_child().unwrap();
        assert_eq!(element.name(), "0");
        assert_eq!(element.indentation(), "  ");
        assert_eq!(element.children()[0].indentation(), "      ");
        assert_eq!(value(&doc, &["data", "0", "name"]), Some("Franc"));
    }

    #[test]
    fn test_document_marker_only_skipped_before_content() {
        let doc = Parser::parse_str("---\n---\nkey: value\n---\n").unwrap();
        assert_eq!(doc.child_count(), 2);
        assert_eq!(doc.children()[1].name(), "---");
        assert_eq!(value(&doc, &["key"]), Some("value"));
    }

    #[test]
    fn test_comment_lines_do_not_affect_indentation() {
        let doc = Parser::parse_str("a:\n      # odd comment\n  b: 1\n").unwrap();
        assert_eq!(value(&doc, &["a", "b"]), Some("1"));
    }

    #[rstest]
    #[case("a:\n    b:\n        c: 1\n  d: 2\n", 4)]
    #[case("a:\n  b: 1\n\tc: 2\n", 3)]
    #[case("a:\n  b:\n    c: 1\n   d: 2\n", 4)]
    fn test_unresolvable_indentation_reports_line(#[case] input: &str, #[case] line: usize) {
        match Parser::parse_str(input) {
            Err(DomainError::Syntax { line: actual, .. }) => assert_eq!(actual, line),
            other => panic!("expected syntax error, got {other:?}"),
        }
    }

    #[test]
    fn test_indented_top_level_keys_are_siblings() {
        let doc = Parser::parse_str("  a: 1\n  b: 2\n").unwrap();
        assert_eq!(doc.child_count(), 2);
        assert_eq!(value(&doc, &["a"]), Some("1"));
        assert_eq!(value(&doc, &["b"]), Some("2"));
    }

    #[test]
    fn test_indented_top_level_with_nested_block() {
        let doc = Parser::parse_str("  a:\n    b: 1\n  c: 2\n").unwrap();
        assert_eq!(doc.child_count(), 2);
        assert_eq!(value(&doc, &["a", "b"]), Some("1"));
        assert_eq!(value(&doc, &["c"]), Some("2"));
    }

    #[test]
    fn test_read_failure_reports_line() {
        let input: &[u8] = b"a: 1\nb: \xff\n";
        match Parser::parse_reader(input) {
            Err(DomainError::Read { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected read error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_reader_matches_parse_str() {
        let input = "data:\n  - admin\n  - hr\n";
        let from_reader = Parser::parse_reader(input.as_bytes()).unwrap();
        let from_str = Parser::parse_str(input).unwrap();
        assert_eq!(from_reader, from_str);
    }
}
