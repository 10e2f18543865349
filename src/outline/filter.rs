//! Heading candidate predicate.
//!
//! Decides whether a line's text, shape and size make it a plausible
//! heading, independent of which level it ends up at. All checks must pass;
//! there is no scoring.

use std::collections::HashSet;
use std::fmt;

use super::options::HeadingThresholds;
use crate::model::Line;

/// Why a line was rejected as a heading candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Trimmed text shorter than the minimum
    TooShort,
    /// Mostly digits or punctuation (page numbers, table rules)
    LowAlphaRatio,
    /// Repeated-token noise such as "the the the"
    RepetitiveWords,
    /// A long run of one character ("-----", "aaaaa")
    RepeatedCharacters,
    /// Not visibly larger than body text
    TooSmall,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Rejection::TooShort => "too short",
            Rejection::LowAlphaRatio => "too few letters",
            Rejection::RepetitiveWords => "repetitive words",
            Rejection::RepeatedCharacters => "repeated characters",
            Rejection::TooSmall => "font too small",
        };
        f.write_str(reason)
    }
}

/// Rule-based heading candidate filter.
#[derive(Debug, Clone, Default)]
pub struct HeadingFilter {
    thresholds: HeadingThresholds,
}

impl HeadingFilter {
    /// Create a filter with the given thresholds.
    pub fn new(thresholds: HeadingThresholds) -> Self {
        Self { thresholds }
    }

    /// Thresholds in use.
    pub fn thresholds(&self) -> &HeadingThresholds {
        &self.thresholds
    }

    /// Whether a line is a heading candidate.
    pub fn accepts(&self, line: &Line, avg_font_size: f32) -> bool {
        self.check(&line.text, line.size, avg_font_size).is_ok()
    }

    /// Run every check, returning the first failure.
    pub fn check(&self, text: &str, size: f32, avg_font_size: f32) -> Result<(), Rejection> {
        let text = text.trim();
        let chars: Vec<char> = text.chars().collect();

        if chars.len() < self.thresholds.min_chars || chars.is_empty() {
            return Err(Rejection::TooShort);
        }

        let alpha = chars.iter().filter(|c| c.is_alphabetic()).count();
        if (alpha as f32 / chars.len() as f32) < self.thresholds.min_alpha_ratio {
            return Err(Rejection::LowAlphaRatio);
        }

        let lowered = text.to_lowercase();
        let words: Vec<&str> = lowered.split_whitespace().collect();
        let unique: HashSet<&str> = words.iter().copied().collect();
        if words.is_empty()
            || (unique.len() as f32 / words.len() as f32) < self.thresholds.min_unique_word_ratio
        {
            return Err(Rejection::RepetitiveWords);
        }

        if longest_char_run(&chars) >= self.thresholds.max_char_run {
            return Err(Rejection::RepeatedCharacters);
        }

        if size < avg_font_size + self.thresholds.size_margin {
            return Err(Rejection::TooSmall);
        }

        Ok(())
    }
}

/// Length of the longest run of one repeated character.
fn longest_char_run(chars: &[char]) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut prev: Option<char> = None;

    for &c in chars {
        if Some(c) == prev {
            current += 1;
        } else {
            current = 1;
            prev = Some(c);
        }
        longest = longest.max(current);
    }

    longest
}
