//! Cover card extraction.

use super::types::{CoverCard, Visibility};
use super::warnings::StructureWarning;

/// Build the cover card from segment 0.
///
/// The first line starting with `# ` supplies the title; the subtitle is the
/// paragraph right after it. Without such a heading the frontmatter title is
/// used and the whole segment becomes the subtitle.
pub fn extract_cover(
    segment: &str,
    fallback_title: &str,
    visibility: Visibility,
) -> (CoverCard, Option<StructureWarning>) {
    let lines: Vec<&str> = segment.trim().lines().collect();

    let heading = lines
        .iter()
        .enumerate()
        .find_map(|(i, line)| line.trim().strip_prefix("# ").map(|title| (i, title.trim())));

    match heading {
        Some((i, title)) => {
            let subtitle = lines[i + 1..]
                .iter()
                .skip_while(|line| line.trim().is_empty())
                .take_while(|line| !line.trim().is_empty())
                .copied()
                .collect::<Vec<_>>()
                .join("\n");
            (CoverCard::new(title, subtitle.trim(), visibility), None)
        }
        None => {
            let subtitle = lines.join("\n");
            (
                CoverCard::new(fallback_title, subtitle.trim(), visibility),
                Some(StructureWarning::MissingCoverHeading),
            )
        }
    }
}
