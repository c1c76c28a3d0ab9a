//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors abort a parse call; no partial document is returned.
#[derive(Error, Debug)]
pub enum DomainError {
    /// Indentation of a line does not nest under any open level.
    #[error("indentation does not match any open level on line {line}: {content}")]
    Syntax { line: usize, content: String },

    /// Last child requested on a composite without children.
    #[error("composite has no children")]
    EmptyTree,

    #[error("failed to read line {line}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },
}

impl DomainError {
    /// Line number the error refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            DomainError::Syntax { line, .. } | DomainError::Read { line, .. } => Some(*line),
            DomainError::EmptyTree => None,
        }
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
