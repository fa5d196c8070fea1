//! Typed topic configuration and parse options.

use serde::Deserialize;
use serde_yaml::Value;

use super::errors::DeckError;
use super::types::Visibility;
use super::warnings::StructureWarning;
use crate::frontmatter::Frontmatter;

/// Placeholder used for the topic index when no description is given.
pub const DEFAULT_DESCRIPTION: &str = "Add a description here...";

pub const DEFAULT_SEPARATOR: &str = "---";

/// Knobs for the splitting stages, loaded from the `[parsing]` config section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParseOptions {
    /// Token that separates cards when alone on a line.
    #[serde(default = "default_separator")]
    pub separator: String,
    /// Heading lines that start the main text section.
    #[serde(default = "default_main_text_markers")]
    pub main_text_markers: Vec<String>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { separator: default_separator(), main_text_markers: default_main_text_markers() }
    }
}

impl ParseOptions {
    /// Effective separator; a blank setting falls back to `---`.
    pub fn separator(&self) -> &str {
        let sep = self.separator.trim();
        if sep.is_empty() { DEFAULT_SEPARATOR } else { sep }
    }
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

fn default_main_text_markers() -> Vec<String> {
    vec!["## Main Text".to_string(), "## 主文案".to_string()]
}

/// Frontmatter of a topic with every default applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicConfig {
    pub topic_id: String,
    pub title: String,
    pub description: String,
    pub header_text: String,
    pub footer_text: String,
    pub main_text: String,
    pub cover_visibility: Visibility,
    pub content_visibility: Visibility,
}

impl TopicConfig {
    /// Build the config from parsed frontmatter.
    ///
    /// Fields of the wrong YAML type fall back to their default and push an
    /// [`StructureWarning::InvalidField`].
    ///
    /// # Errors
    /// [`DeckError::MissingTopicId`] when `topicId` is absent, blank or not a string.
    pub fn from_frontmatter(
        fm: Option<&Frontmatter>,
        warnings: &mut Vec<StructureWarning>,
    ) -> Result<Self, DeckError> {
        let empty = Frontmatter::default();
        let fm = fm.unwrap_or(&empty);

        let topic_id = fm
            .get_str("topicId")
            .filter(|id| !id.trim().is_empty())
            .ok_or(DeckError::MissingTopicId)?
            .to_string();

        let mut description = text_field(fm, "description", warnings);
        if description.is_empty() {
            description = DEFAULT_DESCRIPTION.to_string();
        }

        Ok(Self {
            topic_id,
            title: text_field(fm, "title", warnings),
            description,
            header_text: text_field(fm, "headerText", warnings),
            footer_text: text_field(fm, "footerText", warnings),
            main_text: text_field(fm, "mainText", warnings),
            cover_visibility: Visibility::new(
                flag_field(fm, "coverShowHeader", warnings),
                flag_field(fm, "coverShowFooter", warnings),
            ),
            content_visibility: Visibility::new(
                flag_field(fm, "contentDefaultShowHeader", warnings),
                flag_field(fm, "contentDefaultShowFooter", warnings),
            ),
        })
    }
}

fn text_field(fm: &Frontmatter, key: &str, warnings: &mut Vec<StructureWarning>) -> String {
    match fm.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(_) => {
            warnings.push(StructureWarning::InvalidField { key: key.to_string(), expected: "text" });
            String::new()
        }
    }
}

fn flag_field(fm: &Frontmatter, key: &str, warnings: &mut Vec<StructureWarning>) -> bool {
    match fm.get(key) {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => *b,
        Some(_) => {
            warnings.push(StructureWarning::InvalidField {
                key: key.to_string(),
                expected: "a boolean",
            });
            true
        }
    }
}
