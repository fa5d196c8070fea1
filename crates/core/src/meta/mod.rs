//! The topic index (`topicsMeta.js`).
//!
//! The front end lists topics from this file. Conversions keep each entry's
//! title and description in sync with the topic frontmatter.

pub mod index;

pub use index::{TopicIndex, TopicIndexError, TopicMeta};
