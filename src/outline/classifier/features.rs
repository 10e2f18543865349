//! Per-line features for the learned classifier.

use crate::model::Line;

/// Feature columns known to the extractor, in training order.
pub const FEATURE_COLUMNS: [&str; 7] = [
    "font_size",
    "is_bold",
    "y_position",
    "word_count",
    "char_count",
    "ends_colon",
    "all_upper",
];

/// Surface features of one line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFeatures {
    /// Font size in points
    pub font_size: f32,
    /// Whether any span is bold
    pub is_bold: bool,
    /// Top edge on the page
    pub y_position: f32,
    /// Whitespace-separated words
    pub word_count: usize,
    /// Characters in the text
    pub char_count: usize,
    /// Trimmed text ends with ':'
    pub ends_colon: bool,
    /// Has cased letters and all of them are uppercase
    pub all_upper: bool,
}

impl LineFeatures {
    /// Extract features from a line.
    pub fn from_line(line: &Line) -> Self {
        let text = line.text.as_str();
        Self {
            font_size: line.size,
            is_bold: line.bold,
            y_position: line.y,
            word_count: text.split_whitespace().count(),
            char_count: text.chars().count(),
            ends_colon: text.trim().ends_with(':'),
            all_upper: is_all_upper(text),
        }
    }

    /// Value of a named column; unknown columns have no value.
    pub fn value(&self, column: &str) -> Option<f32> {
        let value = match column {
            "font_size" => self.font_size,
            "is_bold" => flag(self.is_bold),
            "y_position" => self.y_position,
            "word_count" => self.word_count as f32,
            "char_count" => self.char_count as f32,
            "ends_colon" => flag(self.ends_colon),
            "all_upper" => flag(self.all_upper),
            _ => return None,
        };
        Some(value)
    }

    /// Encode as a row in the given column order. Unknown columns are 0.
    pub fn encode(&self, columns: &[String]) -> Vec<f32> {
        columns
            .iter()
            .map(|c| self.value(c).unwrap_or(0.0))
            .collect()
    }
}

fn flag(value: bool) -> f32 {
    if value {
        1.0
    } else {
        0.0
    }
}

/// True when the text has at least one cased letter and no lowercase ones.
fn is_all_upper(text: &str) -> bool {
    let mut has_cased = false;
    for c in text.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}
