//! Tests for DocumentService and the service container

use std::collections::HashMap;
use std::io::{self, BufRead, Cursor};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::TempDir;

use smallyaml::application::ApplicationError;
use smallyaml::config::Settings;
use smallyaml::domain::DomainError;
use smallyaml::infrastructure::{FileSystem, RealFileSystem, ServiceContainer};

/// In-memory filesystem serving fixed file contents.
#[derive(Default)]
struct MemoryFileSystem {
    files: HashMap<PathBuf, String>,
}

impl MemoryFileSystem {
    fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(PathBuf::from(path), content.to_string());
        self
    }
}

impl FileSystem for MemoryFileSystem {
    fn open(&self, path: &Path) -> io::Result<Box<dyn BufRead + Send>> {
        self.files
            .get(path)
            .map(|content| Box::new(Cursor::new(content.clone().into_bytes())) as Box<dyn BufRead + Send>)
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }
}

/// Helper to create temp yaml files for testing
fn create_yaml_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write yaml file");
    path
}

#[test]
fn given_yaml_file_when_getting_values_then_returns_scalars() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let file = create_yaml_file(
        &temp,
        "app.yml",
        r#"author: Tom
database:
  driver: newdriver
  port: 6601
"#,
    );
    let container = ServiceContainer::new(Settings::default());

    // Act
    let doc = container.documents.load(&file).unwrap();

    // Assert
    let svc = &container.documents;
    assert_eq!(svc.get(&doc, "author").unwrap().as_deref(), Some("Tom"));
    assert_eq!(svc.get(&doc, "database.driver").unwrap().as_deref(), Some("newdriver"));
    assert_eq!(svc.get(&doc, "database.port").unwrap().as_deref(), Some("6601"));
    assert!(matches!(
        svc.get(&doc, "database"),
        Err(ApplicationError::NotScalar { .. })
    ));
}

#[test]
fn given_fixture_file_when_counting_then_returns_list_length() {
    let container = ServiceContainer::new(Settings::default());
    let doc = container
        .documents
        .load(Path::new("tests/resources/test-complex-arrays.yml"))
        .unwrap();

    assert_eq!(container.documents.count(&doc, "data").unwrap(), 2);
    assert_eq!(container.documents.count(&doc, "data.1.roles").unwrap(), 2);
    assert_eq!(container.documents.count(&doc, "").unwrap(), 1);
    assert!(matches!(
        container.documents.count(&doc, "data.5"),
        Err(ApplicationError::NotFound { .. })
    ));
}

#[test]
fn given_memory_filesystem_when_loading_then_uses_injected_boundary() {
    let fs = MemoryFileSystem::default().with_file("/virtual/app.yml", "a:\n  b: c\n");
    let settings = Settings {
        separator: "/".into(),
        ..Settings::default()
    };
    let container = ServiceContainer::with_deps(settings, Arc::new(fs));

    let doc = container.documents.load(Path::new("/virtual/app.yml")).unwrap();

    assert_eq!(container.documents.separator(), "/");
    assert_eq!(container.documents.get(&doc, "a/b").unwrap().as_deref(), Some("c"));
    assert!(container.documents.exists(&doc, "a"));
    assert!(!container.documents.exists(&doc, "a/c"));
}

#[test]
fn given_missing_file_when_loading_then_io_error() {
    let fs = MemoryFileSystem::default();
    let container = ServiceContainer::with_deps(Settings::default(), Arc::new(fs));

    let err = container
        .documents
        .load(Path::new("/virtual/missing.yml"))
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Io { .. }));
    assert!(err.to_string().contains("missing.yml"));
}

#[test]
fn given_bad_indentation_file_when_loading_then_parse_error_with_line() {
    let container = ServiceContainer::with_deps(Settings::default(), Arc::new(RealFileSystem));

    let err = container
        .documents
        .load(Path::new("tests/resources/test-broken-indent.yml"))
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Parse { .. }));
    assert!(matches!(err.domain(), Some(DomainError::Syntax { line: 4, .. })));
}

#[test]
fn given_reader_when_loading_then_parses_without_filesystem() {
    let container = ServiceContainer::new(Settings::default());
    let doc = container
        .documents
        .load_reader("---\nlist:\n  - x\n".as_bytes())
        .unwrap();
    assert_eq!(container.documents.get(&doc, "list.0").unwrap().as_deref(), Some("x"));
}
