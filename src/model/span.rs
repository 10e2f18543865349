//! Styled text units consumed by the outline engine.

use super::RawSpan;

/// Round a font size to two decimal places.
///
/// Sizes coming out of content streams carry floating point noise
/// (e.g. `11.999999`); all size comparisons go through this.
pub fn round_size(size: f32) -> f32 {
    (size * 100.0).round() / 100.0
}

/// Integer key for a font size at 0.01pt precision.
pub fn size_key(size: f32) -> i32 {
    (size * 100.0).round() as i32
}

/// Smallest unit of styled text, with one font size and weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    /// The text content
    pub text: String,
    /// Font size in points, rounded to 0.01
    pub size: f32,
    /// Whether the font appears to be bold
    pub bold: bool,
    /// Left edge
    pub x0: f32,
    /// Top edge (y grows downwards)
    pub y0: f32,
    /// Page number (0-indexed)
    pub page: u32,
}

impl Span {
    /// Create a new span.
    pub fn new(text: impl Into<String>, size: f32, bold: bool, x0: f32, y0: f32, page: u32) -> Self {
        Self {
            text: text.into(),
            size: round_size(size),
            bold,
            x0,
            y0,
            page,
        }
    }

    /// Convert a provider span, or `None` if its text is blank.
    pub fn from_raw(raw: &RawSpan, page: u32) -> Option<Self> {
        if raw.text.trim().is_empty() {
            return None;
        }
        Some(Self::new(
            raw.text.clone(),
            raw.size,
            raw.is_bold(),
            raw.x0(),
            raw.y0(),
            page,
        ))
    }
}

/// Spans merged by vertical position into one reading-order line.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Span texts joined left to right
    pub text: String,
    /// Largest span size in the line
    pub size: f32,
    /// True if any span is bold
    pub bold: bool,
    /// Top edge of the line
    pub y: f32,
    /// Page number (0-indexed)
    pub page: u32,
}

impl Line {
    /// Create a line directly (mostly useful in tests).
    pub fn new(text: impl Into<String>, size: f32, bold: bool, y: f32, page: u32) -> Self {
        Self {
            text: text.into(),
            size: round_size(size),
            bold,
            y,
            page,
        }
    }

    /// Number of characters in the trimmed text.
    pub fn char_count(&self) -> usize {
        self.text.trim().chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_size() {
        assert_eq!(round_size(11.999_999), 12.0);
        assert_eq!(round_size(10.004), 10.0);
        assert_eq!(size_key(11.999_999), size_key(12.0));
        assert_ne!(size_key(12.0), size_key(12.01));
    }

    #[test]
    fn test_from_raw_skips_blank() {
        let raw = RawSpan::new("   ", 12.0, "Helvetica", [0.0, 0.0, 1.0, 1.0]);
        assert!(Span::from_raw(&raw, 0).is_none());

        let raw = RawSpan::new("Title", 18.004, "Helvetica-Bold", [72.0, 90.0, 140.0, 108.0]);
        let span = Span::from_raw(&raw, 3).unwrap();
        assert_eq!(span.size, 18.0);
        assert!(span.bold);
        assert_eq!(span.x0, 72.0);
        assert_eq!(span.y0, 90.0);
        assert_eq!(span.page, 3);
    }
}
