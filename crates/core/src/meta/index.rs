use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use chrono::{DateTime, SecondsFormat, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::artifact::to_json_literal;

static ARRAY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)export\s+const\s+topicsMeta\s*=\s*(\[.*?\])\s*(?:;|\z)").unwrap()
});

#[derive(Debug, Error)]
pub enum TopicIndexError {
    #[error("failed to read topic index {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("topic index is not an `export const topicsMeta = [...]` array: {0}")]
    Unparseable(String),

    #[error("failed to write topic index {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("topic '{0}' is not in the topic index")]
    UnknownTopic(String),
}

/// One entry of the topic index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicMeta {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Ordered list of known topics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicIndex {
    pub entries: Vec<TopicMeta>,
}

impl TopicIndex {
    /// Load the index; a missing file is an empty index.
    pub fn load(path: &Path) -> Result<Self, TopicIndexError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)
            .map_err(|source| TopicIndexError::Read { path: path.to_path_buf(), source })?;
        Self::parse(&text)
    }

    /// Parse module text.
    ///
    /// Accepts both the JSON written by [`TopicIndex::render`] and hand-edited
    /// JS literals (unquoted keys, single-quoted strings with `\'` escapes,
    /// comments, trailing commas). The array ends at the first `]` followed by
    /// `;` or the end of the text.
    pub fn parse(text: &str) -> Result<Self, TopicIndexError> {
        let caps = ARRAY_RE.captures(text).ok_or_else(|| {
            TopicIndexError::Unparseable("no topicsMeta export found".to_string())
        })?;
        let entries: Vec<TopicMeta> = json5::from_str(&caps[1])
            .map_err(|e| TopicIndexError::Unparseable(e.to_string()))?;
        Ok(Self { entries })
    }

    pub fn get(&self, id: &str) -> Option<&TopicMeta> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Update titles and descriptions of known ids and append unknown ones.
    ///
    /// Returns whether anything changed.
    pub fn merge(&mut self, updates: &[TopicMeta]) -> bool {
        let mut changed = false;
        for update in updates {
            match self.entries.iter_mut().find(|e| e.id == update.id) {
                Some(existing) => {
                    if existing.title != update.title {
                        tracing::debug!("Topic index: '{}' title updated", update.id);
                        existing.title.clone_from(&update.title);
                        changed = true;
                    }
                    if existing.description != update.description {
                        tracing::debug!("Topic index: '{}' description updated", update.id);
                        existing.description.clone_from(&update.description);
                        changed = true;
                    }
                }
                None => {
                    tracing::debug!("Topic index: adding '{}'", update.id);
                    self.entries.push(update.clone());
                    changed = true;
                }
            }
        }
        changed
    }

    /// Replace the description of an existing topic.
    pub fn set_description(&mut self, id: &str, description: &str) -> Result<bool, TopicIndexError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| TopicIndexError::UnknownTopic(id.to_string()))?;
        if entry.description == description {
            return Ok(false);
        }
        entry.description = description.to_string();
        Ok(true)
    }

    /// Module text for the index.
    pub fn render(&self, generated_at: DateTime<Utc>) -> String {
        let json = to_json_literal(&self.entries).unwrap_or_else(|_| "[]".to_string());
        format!(
            "// topicsMeta.js\n// Generated/Updated at {}\n\nexport const topicsMeta = {json};\n",
            generated_at.to_rfc3339_opts(SecondsFormat::Millis, true)
        )
    }

    pub fn save(&self, path: &Path, generated_at: DateTime<Utc>) -> Result<(), TopicIndexError> {
        let write_err = |source| TopicIndexError::Write { path: path.to_path_buf(), source };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(path, self.render(generated_at)).map_err(write_err)
    }
}
