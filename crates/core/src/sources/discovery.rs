//! Markdown source discovery.

use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("markdown directory does not exist: {0}")]
    MissingDir(String),

    #[error("failed to read markdown directory {0}: {1}")]
    WalkError(String, #[source] walkdir::Error),

    #[error("source file not found: {0}")]
    NotFound(String),

    #[error("failed to read source file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// List the `.md` files directly inside `dir`, sorted by file name.
///
/// Hidden files are skipped; subdirectories are not searched.
pub fn discover_sources(dir: &Path) -> Result<Vec<PathBuf>, SourceError> {
    if !dir.is_dir() {
        return Err(SourceError::MissingDir(dir.display().to_string()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
        let entry =
            entry.map_err(|e| SourceError::WalkError(dir.display().to_string(), e))?;
        let path = entry.path();
        let hidden = entry.file_name().to_string_lossy().starts_with('.');
        if !hidden && path.is_file() && is_markdown_file(path) {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}

/// Path of the source for `topic_id` (`{dir}/{topic_id}.md`), which must exist.
pub fn source_for_topic(dir: &Path, topic_id: &str) -> Result<PathBuf, SourceError> {
    let path = dir.join(format!("{topic_id}.md"));
    if path.is_file() {
        Ok(path)
    } else {
        Err(SourceError::NotFound(path.display().to_string()))
    }
}

fn is_markdown_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn finds_top_level_markdown_only() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        fs::write(root.join("b.md"), "").unwrap();
        fs::write(root.join("a.MD"), "").unwrap();
        fs::write(root.join("notes.txt"), "").unwrap();
        fs::write(root.join(".hidden.md"), "").unwrap();
        fs::create_dir(root.join("nested")).unwrap();
        fs::write(root.join("nested").join("c.md"), "").unwrap();

        let names: Vec<String> = discover_sources(root)
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.MD", "b.md"]);
    }

    #[test]
    fn missing_dir_fails() {
        let tmp = tempdir().unwrap();
        let err = discover_sources(&tmp.path().join("missing")).unwrap_err();
        assert!(matches!(err, SourceError::MissingDir(_)));
    }

    #[test]
    fn topic_lookup() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("topic01.md"), "").unwrap();
        assert!(source_for_topic(tmp.path(), "topic01").is_ok());
        assert!(matches!(
            source_for_topic(tmp.path(), "topic02"),
            Err(SourceError::NotFound(_))
        ));
    }
}
