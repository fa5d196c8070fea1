//! Content card extraction.

use std::sync::LazyLock;

use regex::Regex;

use super::directives::apply_directives;
use super::types::{ContentCard, Visibility};
use super::warnings::StructureWarning;

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#+\s+").unwrap());

/// Build a content card from segment `index` (1-based among segments).
///
/// Returns `None` for blank segments. The first heading of any level gives
/// the title and the lines after it form the body; lines before the heading
/// are dropped. Directives are applied last.
pub fn extract_content(
    index: usize,
    segment: &str,
    defaults: Visibility,
) -> Option<(ContentCard, Vec<StructureWarning>)> {
    let trimmed = segment.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut warnings = Vec::new();
    let lines: Vec<&str> = trimmed.lines().collect();

    let mut card = match lines.iter().position(|line| HEADING_RE.is_match(line.trim())) {
        Some(i) => {
            let title = HEADING_RE.replace(lines[i].trim(), "").trim().to_string();
            let body = lines[i + 1..].join("\n");
            ContentCard::new(title, body.trim(), defaults)
        }
        None => {
            warnings.push(StructureWarning::MissingCardHeading { index });
            ContentCard::new("", lines.join("\n"), defaults)
        }
    };

    warnings.extend(apply_directives(&mut card, index));
    Some((card, warnings))
}
