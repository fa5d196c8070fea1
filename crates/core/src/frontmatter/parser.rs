//! Frontmatter parsing from markdown documents.

use std::fmt;

use super::types::{Frontmatter, ParsedDocument};
use thiserror::Error;

const DELIMITER: &str = "---";

/// 1-based position inside the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcePosition {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Errors that can occur during frontmatter parsing.
#[derive(Debug, Error)]
pub enum FrontmatterParseError {
    #[error(
        "invalid YAML frontmatter{}: {message}",
        .position.map(|p| format!(" at {p}")).unwrap_or_default()
    )]
    InvalidYaml { position: Option<SourcePosition>, message: String },
}

impl FrontmatterParseError {
    /// Position of the offending YAML in the source document, when known.
    pub fn position(&self) -> Option<SourcePosition> {
        match self {
            Self::InvalidYaml { position, .. } => *position,
        }
    }
}

/// Parse frontmatter from markdown content.
///
/// Frontmatter is delimited by `---` lines at the start of the document:
/// ```markdown
/// ---
/// topicId: topic01
/// ---
/// # Document content
/// ```
///
/// Without a complete delimiter block the whole content is returned as body.
/// The body is everything after the closing delimiter line, with its original
/// line endings.
pub fn parse(content: &str) -> Result<ParsedDocument, FrontmatterParseError> {
    let Some(block) = locate_block(content) else {
        return Ok(ParsedDocument { frontmatter: None, body: content.to_string() });
    };

    let frontmatter: Frontmatter = if block.yaml.trim().is_empty() {
        Frontmatter::default()
    } else {
        serde_yaml::from_str(block.yaml).map_err(|e| invalid_yaml(&e, block.first_line))?
    };

    Ok(ParsedDocument { frontmatter: Some(frontmatter), body: block.body.to_string() })
}

struct Block<'a> {
    yaml: &'a str,
    body: &'a str,
    /// Source line number of the first YAML line.
    first_line: usize,
}

fn locate_block(content: &str) -> Option<Block<'_>> {
    let mut offset = 0;
    // (byte offset, line number) where the YAML starts
    let mut yaml_start: Option<(usize, usize)> = None;

    for (idx, line) in content.split_inclusive('\n').enumerate() {
        let line_start = offset;
        offset += line.len();
        let trimmed = line.trim();

        match yaml_start {
            None if trimmed.is_empty() => continue,
            None if trimmed == DELIMITER => yaml_start = Some((offset, idx + 2)),
            None => return None,
            Some((yaml_offset, first_line)) if trimmed == DELIMITER => {
                return Some(Block {
                    yaml: &content[yaml_offset..line_start],
                    body: &content[offset..],
                    first_line,
                });
            }
            Some(_) => {}
        }
    }

    None
}

fn invalid_yaml(err: &serde_yaml::Error, first_line: usize) -> FrontmatterParseError {
    let position = err.location().map(|loc| SourcePosition {
        line: first_line + loc.line().saturating_sub(1),
        column: loc.column(),
    });
    FrontmatterParseError::InvalidYaml { position, message: err.to_string() }
}
