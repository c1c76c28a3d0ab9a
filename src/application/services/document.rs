//! Document loading and query service
//!
//! Loads YAML files through the filesystem boundary and resolves
//! separator-delimited queries such as `database.port` against them.

use std::io::BufRead;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt, ParseResultExt};
use crate::domain::{Composite, Document, Parser, YamlPath};
use crate::infrastructure::traits::FileSystem;

/// Service for loading documents and answering path queries.
pub struct DocumentService {
    fs: Arc<dyn FileSystem>,
    separator: String,
}

impl DocumentService {
    /// Create a new document service splitting queries on `separator`.
    pub fn new(fs: Arc<dyn FileSystem>, separator: impl Into<String>) -> Self {
        Self {
            fs,
            separator: separator.into(),
        }
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Parse the YAML file at `path`.
    #[instrument(level = "debug", skip(self))]
    pub fn load(&self, path: &Path) -> ApplicationResult<Document> {
        if !self.fs.is_file(path) {
            return Err(ApplicationError::Io {
                context: format!("not a readable file: {}", path.display()),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            });
        }
        let reader = self.fs.open(path).with_path_context("open", path)?;
        let document = Parser::parse_reader(reader).with_source_path(path)?;
        debug!(
            "load: {} top-level nodes from {}",
            document.child_count(),
            path.display()
        );
        Ok(document)
    }

    /// Parse YAML from any buffered reader, e.g. stdin.
    pub fn load_reader<R: BufRead>(&self, reader: R) -> ApplicationResult<Document> {
        Ok(Parser::parse_reader(reader)?)
    }

    /// Split a query string into a lookup path.
    pub fn path(&self, query: &str) -> YamlPath {
        YamlPath::parse(query, &self.separator)
    }

    /// Scalar value at `query`.
    ///
    /// Missing paths and composite nodes are errors; a key without a value
    /// yields `Ok(None)`.
    pub fn get(&self, document: &Document, query: &str) -> ApplicationResult<Option<String>> {
        let path = self.path(query);
        if path.is_empty() {
            return Err(ApplicationError::NotScalar { path });
        }
        match document.find_node(&path) {
            None => Err(ApplicationError::NotFound { path }),
            Some(node) if node.is_composite() => Err(ApplicationError::NotScalar { path }),
            Some(node) => Ok(node.value().map(str::to_string)),
        }
    }

    pub fn exists(&self, document: &Document, query: &str) -> bool {
        document.exists(&self.path(query))
    }

    /// Number of direct children at `query`; errors when the path is missing.
    pub fn count(&self, document: &Document, query: &str) -> ApplicationResult<usize> {
        let path = self.path(query);
        if !document.exists(&path) {
            return Err(ApplicationError::NotFound { path });
        }
        Ok(document.count_elements(&path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use crate::infrastructure::traits::RealFileSystem;
    use tempfile::TempDir;

    fn service() -> DocumentService {
        DocumentService::new(Arc::new(RealFileSystem), ".")
    }

    #[test]
    fn test_get_distinguishes_missing_and_composite() {
        let svc = service();
        let doc = svc
            .load_reader("database:\n  port: 6601\n  user:\n".as_bytes())
            .unwrap();

        assert_eq!(svc.get(&doc, "database.port").unwrap().as_deref(), Some("6601"));
        assert_eq!(svc.get(&doc, "database.user").unwrap(), None);
        assert!(matches!(
            svc.get(&doc, "database"),
            Err(ApplicationError::NotScalar { .. })
        ));
        assert!(matches!(
            svc.get(&doc, "database.host"),
            Err(ApplicationError::NotFound { .. })
        ));
        assert!(matches!(svc.get(&doc, ""), Err(ApplicationError::NotScalar { .. })));
    }

    #[test]
    fn test_custom_separator() {
        let svc = DocumentService::new(Arc::new(RealFileSystem), "/");
        let doc = svc.load_reader("a.b:\n  c: 1\n".as_bytes()).unwrap();
        assert_eq!(svc.get(&doc, "a.b/c").unwrap().as_deref(), Some("1"));
        assert_eq!(svc.count(&doc, "a.b").unwrap(), 1);
    }

    #[test]
    fn test_load_reports_file_on_syntax_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.yml");
        std::fs::write(&path, "a:\n    b: 1\n  c: 2\n").unwrap();

        let err = service().load(&path).unwrap_err();
        assert!(matches!(
            err.domain(),
            Some(DomainError::Syntax { line: 3, .. })
        ));
        assert!(err.to_string().contains("broken.yml"));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let err = service().load(&temp.path().join("nope.yml")).unwrap_err();
        assert!(matches!(err, ApplicationError::Io { .. }));
    }
}
