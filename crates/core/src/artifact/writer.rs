//! Writing modules to the content directory.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::module::module_file_name;

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to serialize deck for '{0}': {1}")]
    Serialize(String, #[source] serde_json::Error),

    #[error("failed to create content directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Write `contents` to `{content_dir}/{topic_id}_content.js`, replacing any
/// previous module. The directory is created when missing.
pub fn write_module(
    content_dir: &Path,
    topic_id: &str,
    contents: &str,
) -> Result<PathBuf, ArtifactError> {
    fs::create_dir_all(content_dir).map_err(|source| ArtifactError::CreateDir {
        path: content_dir.to_path_buf(),
        source,
    })?;

    let path = content_dir.join(module_file_name(topic_id));
    fs::write(&path, contents)
        .map_err(|source| ArtifactError::Write { path: path.clone(), source })?;
    tracing::debug!("Wrote {}", path.display());
    Ok(path)
}
