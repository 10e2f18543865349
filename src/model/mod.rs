//! Document model types for outline recovery.
//!
//! Provider-facing types (`PageText` and its blocks, lines and spans) carry
//! text as it comes out of a page-text provider. Engine types (`Span`,
//! `Line`) are what the heading inference works on, and `DocumentOutline`
//! is the sole output artifact.

mod outline;
mod page;
mod span;

pub use outline::{DocumentOutline, HeadingLevel, OutlineEntry};
pub use page::{PageText, RawSpan, TextBlock, TextLine};
pub use span::{round_size, size_key, Line, Span};
