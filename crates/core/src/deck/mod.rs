//! Topic document to card deck conversion.
//!
//! The pipeline is a single pure pass over one document:
//!
//! ```text
//! text -> frontmatter -> main text -> segments -> cover + content cards -> deck
//! ```
//!
//! Fatal problems come back as [`DeckError`]; recoverable structure problems
//! are collected as [`StructureWarning`]s on the [`ParsedTopic`].

pub mod assembler;
pub mod config;
pub mod content;
pub mod cover;
pub mod directives;
pub mod errors;
pub mod main_text;
pub mod pipeline;
pub mod splitter;
pub mod types;
pub mod warnings;

pub use assembler::assemble;
pub use config::{ParseOptions, TopicConfig};
pub use errors::DeckError;
pub use pipeline::parse_topic;
pub use types::{ContentCard, ContentDeck, CoverCard, ParsedTopic, Visibility};
pub use warnings::StructureWarning;

/// Collapse CRLF line breaks so decks do not depend on the source's line endings.
pub(crate) fn normalize_newlines(text: &str) -> String {
    text.lines().collect::<Vec<_>>().join("\n")
}
