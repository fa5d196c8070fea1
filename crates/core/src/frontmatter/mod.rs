//! Frontmatter reading and writing.
//!
//! This module provides functionality to:
//! - Locate the `---` delimited block at the top of a topic document
//! - Hand the enclosed YAML to `serde_yaml` and keep the remainder verbatim
//! - Write an ordered mapping back as a delimited block

pub mod parser;
pub mod serializer;
pub mod types;

pub use parser::{FrontmatterParseError, SourcePosition, parse};
pub use serializer::serialize;
pub use types::{Frontmatter, ParsedDocument};
