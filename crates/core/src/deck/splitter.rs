//! Card segment splitting.

use super::errors::DeckError;

/// Split `body` on lines whose trimmed text equals `separator`.
///
/// `k` separator lines always yield `k + 1` segments. Blank segments stay in
/// place; the extractors skip them.
pub fn split_segments<'a>(body: &'a str, separator: &str) -> Vec<&'a str> {
    let mut segments = Vec::new();
    let mut segment_start = 0;
    let mut offset = 0;

    for line in body.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();
        if line.trim() == separator {
            segments.push(&body[segment_start..line_start]);
            segment_start = offset;
        }
    }
    segments.push(&body[segment_start..]);

    segments
}

/// Fail when every segment is blank and there is no main text.
pub fn ensure_content(segments: &[&str], main_text: &str) -> Result<(), DeckError> {
    let has_segment = segments.iter().any(|s| !s.trim().is_empty());
    if has_segment || !main_text.trim().is_empty() {
        Ok(())
    } else {
        Err(DeckError::EmptyDocument)
    }
}
