//! Permissive parser for an indentation-based subset of YAML.
//!
//! Lines are attached to a tree of named nodes by comparing their leading
//! whitespace with the nodes opened so far; values are then looked up by path.
//!
//! ```
//! use smallyaml::{Parser, YamlPath};
//!
//! let doc = Parser::parse_str("database:\n  port: 6601\n").unwrap();
//! assert_eq!(doc.find_value(&YamlPath::of(["database", "port"])), Some("6601"));
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod tree_traits;
pub mod util;

pub use domain::{Composite, Document, DomainError, DomainResult, Parser, TreeNode, YamlPath};
