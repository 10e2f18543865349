//! Outline output types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rank in the inferred heading hierarchy; largest font is H1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    /// Top-level heading
    H1,
    /// Second-level heading
    H2,
    /// Third-level heading
    H3,
    /// Fourth-level heading
    H4,
}

impl HeadingLevel {
    /// All levels, largest first.
    pub const ALL: [HeadingLevel; 4] = [
        HeadingLevel::H1,
        HeadingLevel::H2,
        HeadingLevel::H3,
        HeadingLevel::H4,
    ];

    /// Level for a zero-based rank (0 = H1).
    pub fn from_rank(rank: usize) -> Option<Self> {
        Self::ALL.get(rank).copied()
    }

    /// Zero-based rank of this level.
    pub fn rank(self) -> usize {
        self as usize
    }

    /// Tag used in the JSON output ("H1".."H4").
    pub fn as_str(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "H1",
            HeadingLevel::H2 => "H2",
            HeadingLevel::H3 => "H3",
            HeadingLevel::H4 => "H4",
        }
    }

    /// Map a classifier label to a level.
    ///
    /// `"title"` is treated as H1. `"O"` and unknown labels are not headings.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "title" | "h1" => Some(HeadingLevel::H1),
            "h2" => Some(HeadingLevel::H2),
            "h3" => Some(HeadingLevel::H3),
            "h4" => Some(HeadingLevel::H4),
            _ => None,
        }
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One heading in the final outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineEntry {
    /// Heading level
    pub level: HeadingLevel,
    /// Cleaned heading text
    pub text: String,
    /// Page number (0-indexed)
    pub page: u32,
}

impl OutlineEntry {
    /// Create a new entry.
    pub fn new(level: HeadingLevel, text: impl Into<String>, page: u32) -> Self {
        Self {
            level,
            text: text.into(),
            page,
        }
    }
}

/// The outline recovered from one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentOutline {
    /// Best title, or empty when none qualifies
    pub title: String,
    /// Headings in document order
    pub outline: Vec<OutlineEntry>,
}

impl DocumentOutline {
    /// Create an outline with the given title and entries.
    pub fn new(title: impl Into<String>, outline: Vec<OutlineEntry>) -> Self {
        Self {
            title: title.into(),
            outline,
        }
    }

    /// Outline with no title and no headings.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if no headings were found.
    pub fn is_empty(&self) -> bool {
        self.outline.is_empty()
    }

    /// Number of headings.
    pub fn len(&self) -> usize {
        self.outline.len()
    }

    /// Headings at a given level.
    pub fn entries_at(&self, level: HeadingLevel) -> impl Iterator<Item = &OutlineEntry> {
        self.outline.iter().filter(move |e| e.level == level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_label() {
        assert_eq!(HeadingLevel::from_label("H1"), Some(HeadingLevel::H1));
        assert_eq!(HeadingLevel::from_label("title"), Some(HeadingLevel::H1));
        assert_eq!(HeadingLevel::from_label("h3"), Some(HeadingLevel::H3));
        assert_eq!(HeadingLevel::from_label("O"), None);
        assert_eq!(HeadingLevel::from_label("H7"), None);
    }

    #[test]
    fn test_level_rank_roundtrip() {
        for (rank, level) in HeadingLevel::ALL.iter().enumerate() {
            assert_eq!(level.rank(), rank);
            assert_eq!(HeadingLevel::from_rank(rank), Some(*level));
        }
        assert_eq!(HeadingLevel::from_rank(4), None);
    }

    #[test]
    fn test_outline_serialization_shape() {
        let outline = DocumentOutline::new(
            "Report",
            vec![OutlineEntry::new(HeadingLevel::H2, "Intro", 0)],
        );
        let json = serde_json::to_string(&outline).unwrap();
        assert_eq!(
            json,
            r#"{"title":"Report","outline":[{"level":"H2","text":"Intro","page":0}]}"#
        );
    }
}
