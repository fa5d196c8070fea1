//! Per-card override comments.
//!
//! A directive is an HTML comment such as `<!-- cardShowFooter: false -->`
//! inside a card body. Every directive is declared once in [`DIRECTIVES`];
//! the extraction loop does not know about individual names.

use std::sync::LazyLock;

use regex::Regex;

use super::types::ContentCard;
use super::warnings::StructureWarning;

/// Card field a directive writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveTarget {
    ShowHeader,
    ShowFooter,
    FontSize,
    LineHeight,
}

/// One entry of the directive table.
#[derive(Debug, Clone, Copy)]
pub struct Directive {
    pub name: &'static str,
    pub target: DirectiveTarget,
}

pub const DIRECTIVES: &[Directive] = &[
    Directive { name: "cardShowHeader", target: DirectiveTarget::ShowHeader },
    Directive { name: "cardShowFooter", target: DirectiveTarget::ShowFooter },
    Directive { name: "cardFontSize", target: DirectiveTarget::FontSize },
    Directive { name: "cardLineHeight", target: DirectiveTarget::LineHeight },
];

#[derive(Debug, Clone, Copy, PartialEq)]
enum DirectiveValue {
    Flag(bool),
    Pixels(u32),
    Ratio(f64),
}

impl DirectiveTarget {
    fn parse(self, raw: &str) -> Option<DirectiveValue> {
        match self {
            Self::ShowHeader | Self::ShowFooter => {
                if raw.eq_ignore_ascii_case("true") {
                    Some(DirectiveValue::Flag(true))
                } else if raw.eq_ignore_ascii_case("false") {
                    Some(DirectiveValue::Flag(false))
                } else {
                    None
                }
            }
            Self::FontSize => {
                raw.parse::<u32>().ok().filter(|v| *v > 0).map(DirectiveValue::Pixels)
            }
            Self::LineHeight => raw
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite() && *v > 0.0)
                .map(DirectiveValue::Ratio),
        }
    }

    fn apply(self, value: DirectiveValue, card: &mut ContentCard) {
        match (self, value) {
            (Self::ShowHeader, DirectiveValue::Flag(b)) => card.show_header = b,
            (Self::ShowFooter, DirectiveValue::Flag(b)) => card.show_footer = b,
            (Self::FontSize, DirectiveValue::Pixels(px)) => card.font_size = Some(px),
            (Self::LineHeight, DirectiveValue::Ratio(r)) => card.line_height = Some(r),
            _ => {}
        }
    }
}

static PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    DIRECTIVES
        .iter()
        .map(|d| {
            // Only the comment text; line breaks around it stay.
            Regex::new(&format!(
                r"(?i)<!--\s*{}\s*:\s*(.*?)\s*-->",
                regex::escape(d.name)
            ))
            .unwrap()
        })
        .collect()
});

/// Apply every directive found in `card.body` and strip it from the body.
///
/// The first valid occurrence of a directive wins; all valid occurrences are
/// removed. Occurrences with an unusable value stay in the body and are
/// reported. `index` is the card's segment index, used in warnings.
pub fn apply_directives(card: &mut ContentCard, index: usize) -> Vec<StructureWarning> {
    let mut warnings = Vec::new();
    let mut body = std::mem::take(&mut card.body);

    for (directive, pattern) in DIRECTIVES.iter().zip(PATTERNS.iter()) {
        let mut first: Option<DirectiveValue> = None;
        let mut kept = String::with_capacity(body.len());
        let mut last = 0;

        for caps in pattern.captures_iter(&body) {
            let Some(whole) = caps.get(0) else { continue };
            let raw = caps.get(1).map_or("", |m| m.as_str());

            match directive.target.parse(raw) {
                Some(value) => {
                    if first.is_none() {
                        first = Some(value);
                    }
                    kept.push_str(&body[last..whole.start()]);
                    last = whole.end();
                }
                None => warnings.push(StructureWarning::InvalidDirective {
                    index,
                    name: directive.name.to_string(),
                    value: raw.to_string(),
                }),
            }
        }

        if let Some(value) = first {
            kept.push_str(&body[last..]);
            body = kept;
            directive.target.apply(value, card);
        }
    }

    card.body = body.trim().to_string();
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Visibility;

    fn card(body: &str) -> ContentCard {
        ContentCard::new("t", body, Visibility::default())
    }

    #[test]
    fn header_override_is_applied_and_stripped() {
        let mut c = card("Body one\n<!-- cardShowHeader: false -->");
        let warnings = apply_directives(&mut c, 1);
        assert!(warnings.is_empty());
        assert!(!c.show_header);
        assert!(c.show_footer);
        assert_eq!(c.body, "Body one");
    }

    #[test]
    fn name_and_value_are_case_insensitive() {
        let mut c = card("<!--CARDSHOWFOOTER:FALSE-->\ntext");
        apply_directives(&mut c, 1);
        assert!(!c.show_footer);
        assert_eq!(c.body, "text");
    }

    #[test]
    fn both_directives_in_any_order() {
        let mut c = card("a\n<!-- cardShowFooter: false -->\nb\n<!-- cardShowHeader: false -->\nc");
        apply_directives(&mut c, 1);
        assert!(!c.show_header);
        assert!(!c.show_footer);
        assert_eq!(c.body, "a\n\nb\n\nc");
    }

    #[test]
    fn stripping_keeps_paragraphs_apart() {
        let mut c = card("para one\n<!-- cardShowFooter: false -->\npara two");
        apply_directives(&mut c, 1);
        assert!(!c.show_footer);
        assert_eq!(c.body, "para one\n\npara two");
    }

    #[test]
    fn first_occurrence_wins_and_all_are_stripped() {
        let mut c = card("<!-- cardShowHeader: false -->\nx\n<!-- cardShowHeader: true -->");
        apply_directives(&mut c, 1);
        assert!(!c.show_header);
        assert_eq!(c.body, "x");
    }

    #[test]
    fn invalid_value_stays_in_body() {
        let mut c = card("x\n<!-- cardShowHeader: maybe -->");
        let warnings = apply_directives(&mut c, 3);
        assert!(c.show_header);
        assert_eq!(c.body, "x\n<!-- cardShowHeader: maybe -->");
        assert_eq!(
            warnings,
            vec![StructureWarning::InvalidDirective {
                index: 3,
                name: "cardShowHeader".into(),
                value: "maybe".into(),
            }]
        );
    }

    #[test]
    fn typography_directives() {
        let mut c = card("x\n<!-- cardFontSize: 28 -->\n<!-- cardLineHeight: 1.6 -->");
        apply_directives(&mut c, 1);
        assert_eq!(c.font_size, Some(28));
        assert_eq!(c.line_height, Some(1.6));
        assert_eq!(c.body, "x");
    }

    #[test]
    fn unrelated_comments_are_untouched() {
        let mut c = card("<!-- optional: per-card visibility -->\ntext");
        let warnings = apply_directives(&mut c, 1);
        assert!(warnings.is_empty());
        assert_eq!(c.body, "<!-- optional: per-card visibility -->\ntext");
    }
}
