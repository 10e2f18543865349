//! Page-level types produced by a page-text provider.
//!
//! A page is a tree of blocks, lines and spans. Each span carries its text,
//! font size, font name and bounding box in top-down page coordinates.

use serde::{Deserialize, Serialize};

/// A single page of extracted text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageText {
    /// Page number (0-indexed)
    pub number: u32,

    /// Page width in points (1 point = 1/72 inch)
    #[serde(default)]
    pub width: f32,

    /// Page height in points
    #[serde(default)]
    pub height: f32,

    /// Text blocks on the page
    #[serde(default)]
    pub blocks: Vec<TextBlock>,
}

impl PageText {
    /// Create a new page with the given dimensions.
    pub fn new(number: u32, width: f32, height: f32) -> Self {
        Self {
            number,
            width,
            height,
            blocks: Vec::new(),
        }
    }

    /// Create a new page with standard Letter size (8.5 x 11 inches).
    pub fn letter(number: u32) -> Self {
        Self::new(number, 612.0, 792.0) // 8.5 * 72, 11 * 72
    }

    /// Add a block to the page.
    pub fn add_block(&mut self, block: TextBlock) {
        self.blocks.push(block);
    }

    /// Add a single-span line as its own block.
    pub fn add_span(&mut self, span: RawSpan) {
        self.blocks.push(TextBlock {
            lines: vec![TextLine { spans: vec![span] }],
        });
    }

    /// Iterate over every span on the page in provider order.
    pub fn spans(&self) -> impl Iterator<Item = &RawSpan> {
        self.blocks
            .iter()
            .flat_map(|b| b.lines.iter())
            .flat_map(|l| l.spans.iter())
    }

    /// Number of spans on the page.
    pub fn span_count(&self) -> usize {
        self.spans().count()
    }

    /// Check if the page has no text at all.
    pub fn is_empty(&self) -> bool {
        self.spans().all(|s| s.text.trim().is_empty())
    }
}

/// A block of text lines as grouped by the provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextBlock {
    /// Lines in this block
    #[serde(default)]
    pub lines: Vec<TextLine>,
}

/// A provider line; the outline engine regroups spans by position anyway.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextLine {
    /// Spans in this line
    #[serde(default)]
    pub spans: Vec<RawSpan>,
}

/// A span as delivered by the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawSpan {
    /// The text content
    pub text: String,

    /// Font size in points
    pub size: f32,

    /// Font name (e.g., "Helvetica-Bold")
    #[serde(default)]
    pub font: String,

    /// Bounding box as (x0, y0, x1, y1), y growing downwards
    pub bbox: [f32; 4],
}

impl RawSpan {
    /// Create a new span.
    pub fn new(text: impl Into<String>, size: f32, font: impl Into<String>, bbox: [f32; 4]) -> Self {
        Self {
            text: text.into(),
            size,
            font: font.into(),
            bbox,
        }
    }

    /// Whether the font name denotes a bold face.
    pub fn is_bold(&self) -> bool {
        self.font.to_lowercase().contains("bold")
    }

    /// Left edge.
    pub fn x0(&self) -> f32 {
        self.bbox[0]
    }

    /// Top edge.
    pub fn y0(&self) -> f32 {
        self.bbox[1]
    }
}
