//! Rendering a deck as an ES module.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::deck::ContentDeck;

/// `{topic_id}_content.js`
pub fn module_file_name(topic_id: &str) -> String {
    format!("{topic_id}_content.js")
}

/// `{topic_id}_contentData`
pub fn export_name(topic_id: &str) -> String {
    format!("{topic_id}_contentData")
}

/// Any value as a JSON literal indented by four spaces.
pub fn to_json_literal<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Deck as JSON indented by four spaces.
pub fn deck_to_json(deck: &ContentDeck) -> Result<String, serde_json::Error> {
    to_json_literal(deck)
}

/// Full module text.
///
/// The timestamp only appears in the header comment, so two renders of the
/// same deck differ in that line alone.
pub fn render_module(
    topic_id: &str,
    source_name: &str,
    deck: &ContentDeck,
    generated_at: DateTime<Utc>,
) -> Result<String, serde_json::Error> {
    let json = deck_to_json(deck)?;
    Ok(format!(
        "// {file}\n// Generated from: {source_name} at {stamp}\n\nexport const {export} = {json};\n",
        file = module_file_name(topic_id),
        stamp = generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        export = export_name(topic_id),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{ContentCard, CoverCard, Visibility};
    use chrono::TimeZone;
    use insta::assert_snapshot;

    fn sample_deck() -> ContentDeck {
        ContentDeck {
            header_text: String::new(),
            footer_text: String::new(),
            cover_card: CoverCard::new("Hello", "World", Visibility::default()),
            content_cards: vec![ContentCard::new("One", "Body", Visibility::new(false, true))],
            main_text: "Fin".into(),
        }
    }

    #[test]
    fn renders_module_with_header_and_export() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let out = render_module("t1", "t1.md", &sample_deck(), at).unwrap();
        assert_snapshot!(out, @r#"
// t1_content.js
// Generated from: t1.md at 2024-05-01T12:30:00.000Z

export const t1_contentData = {
    "headerText": "",
    "footerText": "",
    "coverCard": {
        "title": "Hello",
        "subtitle": "World",
        "showHeader": true,
        "showFooter": true
    },
    "contentCards": [
        {
            "title": "One",
            "body": "Body",
            "showHeader": false,
            "showFooter": true
        }
    ],
    "mainText": "Fin"
};
"#);
    }

    #[test]
    fn typography_fields_serialize_only_when_set() {
        let mut deck = sample_deck();
        assert!(!deck_to_json(&deck).unwrap().contains("fontSize"));

        deck.content_cards[0].font_size = Some(30);
        deck.content_cards[0].line_height = Some(1.5);
        let json = deck_to_json(&deck).unwrap();
        assert!(json.contains("\"fontSize\": 30"));
        assert!(json.contains("\"lineHeight\": 1.5"));
    }

    #[test]
    fn only_the_timestamp_differs_between_renders() {
        let a = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let b = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let first = render_module("t1", "t1.md", &sample_deck(), a).unwrap();
        let second = render_module("t1", "t1.md", &sample_deck(), b).unwrap();
        let differing: Vec<_> =
            first.lines().zip(second.lines()).filter(|(x, y)| x != y).collect();
        assert_eq!(differing.len(), 1);
        assert!(differing[0].0.starts_with("// Generated from:"));
    }
}
