//! The full document-to-deck pipeline.

use tracing::debug;

use super::assembler::assemble;
use super::config::{ParseOptions, TopicConfig};
use super::content::extract_content;
use super::cover::extract_cover;
use super::errors::DeckError;
use super::main_text::extract_main_text;
use super::splitter::{ensure_content, split_segments};
use super::types::ParsedTopic;
use super::warnings::StructureWarning;
use crate::frontmatter;
use crate::sources::SourceDocument;

/// Parse one source document into a deck.
///
/// Pure: no I/O, no shared state. Running it twice on the same text with the
/// same options gives equal results.
///
/// # Errors
/// * [`DeckError::MalformedFrontMatter`] - the frontmatter block is not valid YAML
/// * [`DeckError::MissingTopicId`] - no usable `topicId`
/// * [`DeckError::EmptyDocument`] - no content and no main text
pub fn parse_topic(source: &SourceDocument, options: &ParseOptions) -> Result<ParsedTopic, DeckError> {
    debug!("Parsing topic source {}", source.name);

    let doc = frontmatter::parse(&source.text)?;
    let mut warnings = Vec::new();
    let config = TopicConfig::from_frontmatter(doc.frontmatter.as_ref(), &mut warnings)?;

    if !source.id.is_empty() && source.id != config.topic_id {
        warnings.push(StructureWarning::TopicIdMismatch {
            file_stem: source.id.clone(),
            topic_id: config.topic_id.clone(),
        });
    }

    let split = extract_main_text(&doc.body, &options.main_text_markers, &config.main_text);
    let segments = split_segments(split.body, options.separator());
    ensure_content(&segments, &split.main_text)?;
    debug!("{}: {} segments, main text found: {}", source.name, segments.len(), split.found);

    let (cover_card, cover_warning) = extract_cover(
        segments.first().copied().unwrap_or_default(),
        &config.title,
        config.cover_visibility,
    );
    warnings.extend(cover_warning);

    let mut content_cards = Vec::with_capacity(segments.len().saturating_sub(1));
    for (index, segment) in segments.iter().enumerate().skip(1) {
        if let Some((card, card_warnings)) = extract_content(index, segment, config.content_visibility) {
            content_cards.push(card);
            warnings.extend(card_warnings);
        }
    }

    let deck = assemble(&config, cover_card, content_cards, split.main_text);

    Ok(ParsedTopic {
        topic_id: config.topic_id,
        title: config.title,
        description: config.description,
        deck,
        warnings,
    })
}
