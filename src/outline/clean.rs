//! Heading text cleanup.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Normalizes raw line text before it is judged or emitted.
///
/// - Unicode NFC
/// - whitespace runs collapsed to one space, ends trimmed
/// - lines made only of dashes and spaces dropped
/// - leading bullet markers stripped
pub struct TextCleaner {
    whitespace_regex: Regex,
    rule_regex: Regex,
    bullet_regex: Regex,
}

impl TextCleaner {
    /// Create a new cleaner.
    pub fn new() -> Self {
        Self {
            whitespace_regex: Regex::new(r"\s+").unwrap(),
            rule_regex: Regex::new(r"^[-\s]+$").unwrap(),
            bullet_regex: Regex::new(r"^[•\-\*\+]+\s*").unwrap(),
        }
    }

    /// Clean a line of text. Returns an empty string when nothing is left.
    pub fn clean(&self, text: &str) -> String {
        let text: String = text.nfc().collect();
        let text = self.whitespace_regex.replace_all(text.trim(), " ");

        if self.rule_regex.is_match(&text) {
            return String::new();
        }

        self.bullet_regex.replace(&text, "").trim_end().to_string()
    }
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TextCleaner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextCleaner").finish_non_exhaustive()
    }
}
