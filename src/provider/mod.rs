//! Page-text providers.
//!
//! A provider yields, per page, a tree of blocks, lines and spans with
//! text, size, font name and bounding box. The outline engine only consumes
//! that shape; providers own all I/O and format parsing.

mod dump;
mod pdf;

pub use dump::{DumpProvider, PageDump};
pub use pdf::PdfProvider;

use std::path::Path;

use crate::detect::{detect_input_from_path, InputKind};
use crate::error::{Error, Result};
use crate::model::PageText;

/// Source of per-page text.
pub trait PageTextProvider {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Text of one page (0-indexed).
    fn page(&self, index: usize) -> Result<PageText>;

    /// Text of every page, in order.
    fn pages(&self) -> Result<Vec<PageText>> {
        (0..self.page_count()).map(|i| self.page(i)).collect()
    }
}

/// Open a PDF or page-text dump, choosing the provider by content.
pub fn open<P: AsRef<Path>>(path: P) -> Result<Box<dyn PageTextProvider>> {
    let path = path.as_ref();
    match detect_input_from_path(path)? {
        InputKind::Pdf(format) => {
            log::debug!("Opening {} as {}", path.display(), format);
            Ok(Box::new(PdfProvider::open(path)?))
        }
        InputKind::PageDump => {
            log::debug!("Opening {} as page dump", path.display());
            Ok(Box::new(DumpProvider::open(path)?))
        }
    }
}

/// Error for a page index past the end of a document.
pub(crate) fn page_out_of_range(index: usize, count: usize) -> Error {
    Error::PageOutOfRange(index as u32, count as u32)
}
