//! Caption and biography text helpers.
//!
//! Hashtags and mentions are extracted lowercased, deduplicated, in order
//! of first appearance. Truncation counts characters, not bytes, so
//! multi-byte captions never get split mid-character.

use std::sync::LazyLock;

use regex::Regex;

static HASHTAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#([\p{L}\p{N}_]+)").expect("valid hashtag regex"));
static MENTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@([A-Za-z0-9_](?:[A-Za-z0-9_.]*[A-Za-z0-9_])?)").expect("valid mention regex")
});

/// Maximum number of characters kept from a post caption.
pub const MAX_CAPTION_CHARS: usize = 500;

/// Extracts `#hashtag` tokens from free-form text.
///
/// Letters, digits, and underscores are part of a tag; anything else ends it.
#[must_use]
pub fn extract_hashtags(text: &str) -> Vec<String> {
    collect_unique(&HASHTAG_RE, text)
}

/// Extracts `@mention` tokens from free-form text.
///
/// Instagram usernames are ASCII word characters plus `.`; a trailing dot
/// is punctuation, not part of the handle.
#[must_use]
pub fn extract_mentions(text: &str) -> Vec<String> {
    collect_unique(&MENTION_RE, text)
}

/// Returns the first `max_chars` characters of `text`, or the whole string
/// if it is already short enough (avoids reallocating the common case).
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}

fn collect_unique(re: &Regex, text: &str) -> Vec<String> {
    let mut seen = Vec::new();
    for cap in re.captures_iter(text) {
        let token = cap[1].to_lowercase();
        if !seen.contains(&token) {
            seen.push(token);
        }
    }
    seen
}

#[cfg(test)]
#[path = "text_test.rs"]
mod tests;
