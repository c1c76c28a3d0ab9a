//! Lookup paths into a parsed document.

use std::fmt;

use itertools::Itertools;

/// Ordered sequence of segments ("needles"), one per tree level.
///
/// List elements are addressed by their decimal index: `YamlPath::of(["data", "0", "id"])`.
/// Paths are never stored inside a document; the same path can be queried
/// against any number of documents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct YamlPath {
    needles: Vec<String>,
}

impl YamlPath {
    /// Build a path from segments, taken verbatim.
    pub fn of<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            needles: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Split a query string such as `database.port` on `separator`.
    ///
    /// An empty query yields the empty path, which addresses the document itself.
    pub fn parse(query: &str, separator: &str) -> Self {
        if query.is_empty() {
            return Self::default();
        }
        Self::of(query.split(separator))
    }

    pub fn segments(&self) -> &[String] {
        &self.needles
    }

    /// New path with `segment` added at the end.
    pub fn append(&self, segment: impl Into<String>) -> Self {
        let mut needles = self.needles.clone();
        needles.push(segment.into());
        Self { needles }
    }

    pub fn len(&self) -> usize {
        self.needles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.needles.is_empty()
    }
}

impl fmt::Display for YamlPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.needles.iter().join("."))
    }
}
