//! Topic identifier rules.
//!
//! A topic id names the source file (`{id}.md`), the generated module
//! (`{id}_content.js`) and its export, so it is restricted to characters that
//! are safe in all three places.

use std::sync::LazyLock;

use regex::Regex;

static TOPIC_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Check a topic id against the allow-list pattern `^[A-Za-z0-9_-]+$`.
///
/// # Examples
/// ```
/// use mdcards_core::ids::is_valid_topic_id;
///
/// assert!(is_valid_topic_id("topic01"));
/// assert!(is_valid_topic_id("time-series_2"));
/// assert!(!is_valid_topic_id("../escape"));
/// assert!(!is_valid_topic_id(""));
/// ```
pub fn is_valid_topic_id(id: &str) -> bool {
    TOPIC_ID_RE.is_match(id)
}
