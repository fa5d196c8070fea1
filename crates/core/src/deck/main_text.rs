//! Main text section detection.

/// Body split around the main text marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainTextSplit<'a> {
    /// Text before the marker line (the whole body when no marker is present).
    pub body: &'a str,
    pub main_text: String,
    /// Whether a marker line was found.
    pub found: bool,
}

/// Pull the main text section out of `body`.
///
/// A marker is a line whose trimmed text equals one of `markers`. Only the
/// first marker line counts, even when it sits inside what was meant to be a
/// card body. Without a marker, `fallback` becomes the main text.
pub fn extract_main_text<'a>(body: &'a str, markers: &[String], fallback: &str) -> MainTextSplit<'a> {
    let mut offset = 0;

    for line in body.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();
        let trimmed = line.trim();

        if !trimmed.is_empty() && markers.iter().any(|m| m.trim() == trimmed) {
            return MainTextSplit {
                body: &body[..line_start],
                main_text: super::normalize_newlines(body[offset..].trim()),
                found: true,
            };
        }
    }

    MainTextSplit { body, main_text: fallback.to_string(), found: false }
}
