//! Fatal per-document errors.

use thiserror::Error;

use crate::frontmatter::{FrontmatterParseError, SourcePosition};

/// Errors that abort the conversion of one document.
#[derive(Debug, Error)]
pub enum DeckError {
    /// Frontmatter lacks a non-empty string `topicId`.
    #[error("frontmatter has no valid `topicId` string")]
    MissingTopicId,

    /// Nothing usable remains once blank segments are discarded.
    #[error("document has no cover, content cards or main text")]
    EmptyDocument,

    /// The delimited block is not a YAML mapping.
    #[error(
        "malformed frontmatter{}: {message}",
        .position.map(|p| format!(" at {p}")).unwrap_or_default()
    )]
    MalformedFrontMatter { position: Option<SourcePosition>, message: String },
}

impl From<FrontmatterParseError> for DeckError {
    fn from(err: FrontmatterParseError) -> Self {
        match err {
            FrontmatterParseError::InvalidYaml { position, message } => {
                Self::MalformedFrontMatter { position, message }
            }
        }
    }
}
