//! Outline extraction options and configuration.
//!
//! Every heuristic constant lives here rather than in the algorithms. All
//! structs deserialize with defaults, so a JSON config file only needs the
//! fields it overrides.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Options for outline extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlineOptions {
    /// Line aggregation
    pub lines: LineOptions,

    /// Heading candidate filter thresholds
    pub headings: HeadingThresholds,

    /// Size-to-level mapping
    pub levels: LevelOptions,

    /// Margins used when the learned classifier falls back to rules
    pub fallback: FallbackThresholds,

    /// Title selection
    pub title: TitleOptions,

    /// Average font size assumed for a document without text
    pub default_font_size: f32,

    /// Lines shorter than this are never passed to the learned model
    pub learned_min_chars: usize,
}

impl OutlineOptions {
    /// Create new outline options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    /// Parse options from a JSON string.
    pub fn from_json(data: &str) -> Result<Self> {
        serde_json::from_str(data).map_err(|e| Error::Other(format!("Invalid config: {}", e)))
    }

    /// Set the vertical bucketing tolerance.
    pub fn with_y_tolerance(mut self, tolerance: f32) -> Self {
        self.lines.y_tolerance = tolerance;
        self
    }

    /// Set heading filter thresholds.
    pub fn with_heading_thresholds(mut self, thresholds: HeadingThresholds) -> Self {
        self.headings = thresholds;
        self
    }

    /// Set level mapping options.
    pub fn with_levels(mut self, levels: LevelOptions) -> Self {
        self.levels = levels;
        self
    }

    /// Set learned-classifier fallback thresholds.
    pub fn with_fallback(mut self, fallback: FallbackThresholds) -> Self {
        self.fallback = fallback;
        self
    }

    /// Set title selection options.
    pub fn with_title(mut self, title: TitleOptions) -> Self {
        self.title = title;
        self
    }

    /// Set the font size assumed for empty documents.
    pub fn with_default_font_size(mut self, size: f32) -> Self {
        self.default_font_size = size;
        self
    }
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            lines: LineOptions::default(),
            headings: HeadingThresholds::default(),
            levels: LevelOptions::default(),
            fallback: FallbackThresholds::default(),
            title: TitleOptions::default(),
            default_font_size: 12.0,
            learned_min_chars: 5,
        }
    }
}

/// Options for grouping spans into lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineOptions {
    /// Vertical quantization step; spans whose top edges round to the same
    /// multiple of this value share a line
    pub y_tolerance: f32,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self { y_tolerance: 1.5 }
    }
}

/// Thresholds for the heading candidate predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadingThresholds {
    /// Minimum trimmed length in characters
    pub min_chars: usize,

    /// Minimum share of alphabetic characters
    pub min_alpha_ratio: f32,

    /// Minimum ratio of distinct lowercase words to all words
    pub min_unique_word_ratio: f32,

    /// A run of this many identical characters rejects the line
    pub max_char_run: usize,

    /// Required margin over the average font size
    pub size_margin: f32,
}

impl Default for HeadingThresholds {
    fn default() -> Self {
        Self {
            min_chars: 3,
            min_alpha_ratio: 0.3,
            min_unique_word_ratio: 0.4,
            max_char_run: 5,
            size_margin: 1.0,
        }
    }
}

/// Options for ranking candidate sizes into levels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelOptions {
    /// Fewest occurrences for a size to count as a heading tier
    pub min_occurrences: usize,

    /// Most occurrences for a size to count as a heading tier
    pub max_occurrences: usize,

    /// Below this many surviving sizes, the occurrence window is ignored
    pub min_levels: usize,

    /// Number of levels assigned (at most 4)
    pub max_levels: usize,
}

impl Default for LevelOptions {
    fn default() -> Self {
        Self {
            min_occurrences: 1,
            max_occurrences: 20,
            min_levels: 2,
            max_levels: 4,
        }
    }
}

/// Size margins over the average used by the rule fallback of the
/// learned classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackThresholds {
    /// Margin for H1
    pub h1_margin: f32,
    /// Margin for H1 when bold
    pub h1_bold_margin: f32,
    /// Margin for H2
    pub h2_margin: f32,
    /// Margin for H2 when bold
    pub h2_bold_margin: f32,
    /// Margin for H3 (any bold line is at least H3)
    pub h3_margin: f32,
}

impl Default for FallbackThresholds {
    fn default() -> Self {
        Self {
            h1_margin: 4.0,
            h1_bold_margin: 2.0,
            h2_margin: 2.0,
            h2_bold_margin: 1.0,
            h3_margin: 1.0,
        }
    }
}

/// Options for picking the document title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleOptions {
    /// Minimum title length in characters
    pub min_chars: usize,

    /// Maximum length of an H1 title in characters
    pub max_chars: usize,

    /// Structural phrases that are never a title (case-insensitive)
    pub noise_phrases: Vec<String>,
}

impl Default for TitleOptions {
    fn default() -> Self {
        Self {
            min_chars: 3,
            max_chars: 200,
            noise_phrases: ["table of contents", "contents", "index", "page"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}
