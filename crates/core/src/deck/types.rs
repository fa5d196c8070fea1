//! Card deck data structures.
//!
//! Field names serialize in camelCase because the front-end renderer reads
//! these objects directly.

use serde::{Deserialize, Serialize};

use super::warnings::StructureWarning;

fn default_true() -> bool {
    true
}

/// Header/footer visibility of one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visibility {
    pub show_header: bool,
    pub show_footer: bool,
}

impl Visibility {
    pub fn new(show_header: bool, show_footer: bool) -> Self {
        Self { show_header, show_footer }
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Self { show_header: true, show_footer: true }
    }
}

/// The first card of a deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverCard {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default = "default_true")]
    pub show_header: bool,
    #[serde(default = "default_true")]
    pub show_footer: bool,
}

impl CoverCard {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>, visibility: Visibility) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            show_header: visibility.show_header,
            show_footer: visibility.show_footer,
        }
    }
}

/// A titled content card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentCard {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default = "default_true")]
    pub show_header: bool,
    #[serde(default = "default_true")]
    pub show_footer: bool,
    /// Body font size override in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    /// Body line height override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
}

impl ContentCard {
    pub fn new(title: impl Into<String>, body: impl Into<String>, visibility: Visibility) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            show_header: visibility.show_header,
            show_footer: visibility.show_footer,
            font_size: None,
            line_height: None,
        }
    }
}

/// Fully assembled deck for one topic.
///
/// `content_cards` is index-significant: the renderer derives per-card export
/// identifiers from positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDeck {
    #[serde(default)]
    pub header_text: String,
    #[serde(default)]
    pub footer_text: String,
    pub cover_card: CoverCard,
    #[serde(default)]
    pub content_cards: Vec<ContentCard>,
    #[serde(default)]
    pub main_text: String,
}

/// Result of running the pipeline over one source document.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedTopic {
    pub topic_id: String,
    /// Frontmatter title, used for the topic index.
    pub title: String,
    /// Frontmatter description, used for the topic index.
    pub description: String,
    pub deck: ContentDeck,
    pub warnings: Vec<StructureWarning>,
}
