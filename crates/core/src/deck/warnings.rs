//! Non-fatal structure diagnostics.

use thiserror::Error;

/// A recoverable problem found while parsing a topic.
///
/// The pipeline falls back to a documented default and keeps going; callers
/// decide how to report these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureWarning {
    #[error("cover card has no level-1 heading; using frontmatter title")]
    MissingCoverHeading,

    #[error("content card {index} has no heading; whole segment used as body")]
    MissingCardHeading { index: usize },

    #[error("content card {index}: directive `{name}` has invalid value '{value}', left in body")]
    InvalidDirective { index: usize, name: String, value: String },

    #[error("frontmatter field '{key}' is not {expected}; using default")]
    InvalidField { key: String, expected: &'static str },

    #[error("topicId '{topic_id}' does not match file name '{file_stem}'")]
    TopicIdMismatch { file_stem: String, topic_id: String },
}
