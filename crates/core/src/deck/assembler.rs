//! Final deck composition.

use super::config::TopicConfig;
use super::types::{ContentCard, ContentDeck, CoverCard};

/// Combine the extracted parts with the frontmatter text fields.
pub fn assemble(
    config: &TopicConfig,
    cover_card: CoverCard,
    content_cards: Vec<ContentCard>,
    main_text: String,
) -> ContentDeck {
    ContentDeck {
        header_text: config.header_text.clone(),
        footer_text: config.footer_text.clone(),
        cover_card,
        content_cards,
        main_text,
    }
}
