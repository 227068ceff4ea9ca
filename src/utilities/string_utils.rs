//! Text normalization helpers used by the keyword scorer.

use once_cell::sync::Lazy;
use regex::Regex;

static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

/// Width of the character windows used for fragment matching.
pub const WINDOW_WIDTH: usize = 3;

/// Whether the text is empty or whitespace only.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Extract word tokens (maximal runs of word characters) from already
/// lowercased text.
pub fn word_tokens(text: &str) -> Vec<&str> {
    WORD_PATTERN.find_iter(text).map(|m| m.as_str()).collect()
}

/// Overlapping [`WINDOW_WIDTH`]-character windows over the whole string.
///
/// Windows cross word boundaries and include punctuation and spaces. Text
/// shorter than the window width yields no windows.
pub fn char_windows(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    chars
        .windows(WINDOW_WIDTH)
        .map(|w| w.iter().collect())
        .collect()
}
