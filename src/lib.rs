//! # pdfoutline
//!
//! Recovers a document title and a hierarchical heading outline (H1-H4 with
//! page numbers) from PDFs and page-text dumps.
//!
//! Headings are inferred from typography relative to the document's own
//! statistics: a first pass gathers font sizes and groups spans into lines,
//! a second pass classifies lines with a pluggable strategy.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdfoutline::{extract_outline, render};
//!
//! fn main() -> pdfoutline::Result<()> {
//!     let outline = extract_outline("document.pdf")?;
//!     println!("{}", render::to_json(&outline, render::JsonFormat::Pretty)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Rule-based classification**: heading filters plus a size-to-level map
//! - **Learned classification**: tree-ensemble models with rule fallback
//! - **Two inputs**: PDF files via lopdf, or JSON page-text dumps
//! - **Batch processing**: whole directories in parallel with Rayon

pub mod batch;
pub mod detect;
pub mod error;
pub mod model;
pub mod outline;
pub mod provider;
pub mod render;

// Re-export commonly used types
pub use batch::{BatchProcessor, BatchReport};
pub use detect::{detect_input_from_bytes, detect_input_from_path, is_pdf, InputKind, PdfFormat};
pub use error::{Error, Result};
pub use model::{DocumentOutline, HeadingLevel, OutlineEntry, PageText, RawSpan, TextBlock, TextLine};
pub use outline::{
    HeadingClassifier, LearnedClassifier, OutlineExtractor, OutlineOptions, RuleBasedClassifier,
};
pub use provider::{DumpProvider, PageTextProvider, PdfProvider};
pub use render::JsonFormat;

use std::path::{Path, PathBuf};

/// Extract the outline of a PDF or page-text dump with default options.
///
/// # Example
///
/// ```no_run
/// use pdfoutline::extract_outline;
///
/// let outline = extract_outline("document.pdf").unwrap();
/// for entry in &outline.outline {
///     println!("{} {} (page {})", entry.level, entry.text, entry.page);
/// }
/// ```
pub fn extract_outline<P: AsRef<Path>>(path: P) -> Result<DocumentOutline> {
    OutlineExtractor::default().extract_file(path)
}

/// Extract an outline with custom options.
///
/// # Example
///
/// ```no_run
/// use pdfoutline::{extract_outline_with_options, OutlineOptions};
///
/// let options = OutlineOptions::default().with_y_tolerance(2.0);
/// let outline = extract_outline_with_options("document.pdf", options).unwrap();
/// ```
pub fn extract_outline_with_options<P: AsRef<Path>>(
    path: P,
    options: OutlineOptions,
) -> Result<DocumentOutline> {
    OutlineExtractor::new(options).extract_file(path)
}

/// Extract an outline from a PDF held in memory.
pub fn extract_outline_from_bytes(data: &[u8]) -> Result<DocumentOutline> {
    let provider = PdfProvider::from_bytes(data)?;
    OutlineExtractor::default().extract_from(&provider)
}

/// Extract an outline and render it as JSON.
///
/// # Example
///
/// ```no_run
/// use pdfoutline::{to_json, JsonFormat};
///
/// let json = to_json("document.pdf", JsonFormat::Pretty).unwrap();
/// std::fs::write("document.json", json).unwrap();
/// ```
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let outline = extract_outline(path)?;
    render::to_json(&outline, format)
}

/// Builder for configuring outline extraction.
///
/// # Example
///
/// ```no_run
/// use pdfoutline::PdfOutline;
///
/// let outline = PdfOutline::new()
///     .with_y_tolerance(2.0)
///     .with_model("models/heading_forest.json")
///     .extract("document.pdf")?;
/// # Ok::<(), pdfoutline::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PdfOutline {
    options: OutlineOptions,
    model: Option<PathBuf>,
}

impl PdfOutline {
    /// Create a builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all options.
    pub fn with_options(mut self, options: OutlineOptions) -> Self {
        self.options = options;
        self
    }

    /// Load options from a JSON config file.
    pub fn with_config<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        self.options = OutlineOptions::from_json_file(path)?;
        Ok(self)
    }

    /// Set the vertical tolerance for grouping spans into lines.
    pub fn with_y_tolerance(mut self, tolerance: f32) -> Self {
        self.options = self.options.with_y_tolerance(tolerance);
        self
    }

    /// Classify with the learned model at `path`.
    pub fn with_model(mut self, path: impl Into<PathBuf>) -> Self {
        self.model = Some(path.into());
        self
    }

    /// Build the configured extractor.
    pub fn build(self) -> OutlineExtractor {
        match self.model {
            Some(path) => OutlineExtractor::learned(self.options, path),
            None => OutlineExtractor::new(self.options),
        }
    }

    /// Extract the outline of a PDF or page-text dump.
    pub fn extract<P: AsRef<Path>>(self, path: P) -> Result<DocumentOutline> {
        self.build().extract_file(path)
    }
}
