//! A topic source read into memory.

use std::fs;
use std::path::Path;

use super::discovery::SourceError;

/// Raw text of one topic file plus the identifiers derived from its path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    /// File stem, expected to equal the frontmatter `topicId`.
    pub id: String,
    /// File name, used in diagnostics and artifact headers.
    pub name: String,
    pub text: String,
}

impl SourceDocument {
    /// Read a source file.
    pub fn load(path: &Path) -> Result<Self, SourceError> {
        let text = fs::read_to_string(path).map_err(|source| SourceError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let id = path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self { id, name, text })
    }

    /// In-memory source named `{id}.md`.
    pub fn from_text(id: impl Into<String>, text: impl Into<String>) -> Self {
        let id = id.into();
        Self { name: format!("{id}.md"), id, text: text.into() }
    }
}
