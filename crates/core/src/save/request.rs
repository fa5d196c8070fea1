//! Save requests from the deck editor.
//!
//! The editor posts `{ "topicId": ..., "contentData": {...} }`. The deck is
//! written back as a content module and an edited `description` is pushed into
//! the topic index instead of the module.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::artifact::{ArtifactError, module_file_name, render_module, write_module};
use crate::deck::ContentDeck;
use crate::ids::is_valid_topic_id;
use crate::meta::{TopicIndex, TopicIndexError};

/// Source name recorded in modules written by [`save_deck`].
const SAVE_SOURCE_NAME: &str = "interactive save";

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("invalid topic id '{0}'")]
    InvalidTopicId(String),

    #[error("target {0} is outside the content directory")]
    PathEscape(PathBuf),

    #[error("failed to prepare content directory {path}: {source}")]
    ContentDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Artifact(#[from] ArtifactError),

    #[error(transparent)]
    Index(#[from] TopicIndexError),
}

/// Deck as sent by the editor.
///
/// Unknown keys are dropped during deserialization; `description` is kept
/// aside so it never reaches the module.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EditableDeck {
    #[serde(flatten)]
    pub deck: ContentDeck,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRequest {
    pub topic_id: String,
    pub content_data: EditableDeck,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveAck {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl SaveAck {
    pub fn failure(err: &SaveError) -> Self {
        Self { success: false, message: err.to_string(), path: None }
    }
}

/// Write the module for `request` and update the topic index description.
///
/// A description for a topic missing from the index does not fail the save;
/// the acknowledgement message says so instead.
pub fn save_deck(
    content_dir: &Path,
    meta_file: Option<&Path>,
    request: &SaveRequest,
    generated_at: DateTime<Utc>,
) -> Result<SaveAck, SaveError> {
    let topic_id = request.topic_id.as_str();
    if !is_valid_topic_id(topic_id) {
        return Err(SaveError::InvalidTopicId(topic_id.to_string()));
    }

    fs::create_dir_all(content_dir)
        .map_err(|source| SaveError::ContentDir { path: content_dir.to_path_buf(), source })?;
    let root = content_dir
        .canonicalize()
        .map_err(|source| SaveError::ContentDir { path: content_dir.to_path_buf(), source })?;
    let target = root.join(module_file_name(topic_id));
    if target.parent() != Some(root.as_path()) {
        return Err(SaveError::PathEscape(target));
    }

    let contents = render_module(topic_id, SAVE_SOURCE_NAME, &request.content_data.deck, generated_at)
        .map_err(|e| ArtifactError::Serialize(topic_id.to_string(), e))?;
    let path = write_module(&root, topic_id, &contents)?;
    tracing::info!("Saved deck for '{}' to {}", topic_id, path.display());

    let mut message = format!("saved {}", module_file_name(topic_id));
    if let (Some(description), Some(meta_file)) = (&request.content_data.description, meta_file) {
        let mut index = TopicIndex::load(meta_file)?;
        match index.set_description(topic_id, description) {
            Ok(true) => {
                index.save(meta_file, generated_at)?;
                message.push_str("; description updated");
            }
            Ok(false) => {}
            Err(TopicIndexError::UnknownTopic(_)) => {
                tracing::warn!("'{}' is not in the topic index; description not saved", topic_id);
                message.push_str("; topic not in index, description not saved");
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(SaveAck { success: true, message, path: Some(path) })
}
