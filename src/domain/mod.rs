//! Domain layer: document tree, lookup paths and the indentation parser
//!
//! This layer does no file handling and knows nothing about the CLI or config.

pub mod document;
pub mod error;
pub mod node;
pub mod parser;
pub mod path;
pub mod scalar;

pub use document::Document;
pub use error::{DomainError, DomainResult};
pub use node::{Composite, TreeNode};
pub use parser::Parser;
pub use path::YamlPath;
pub use scalar::clean_scalar;
