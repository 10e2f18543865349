//! JSON page-text dumps.
//!
//! A dump is the provider tree serialized as JSON:
//!
//! ```json
//! { "pages": [ { "number": 0, "width": 612, "height": 792,
//!     "blocks": [ { "lines": [ { "spans": [
//!         { "text": "Introduction", "size": 16.0, "font": "Arial-Bold",
//!           "bbox": [72.0, 90.0, 180.0, 106.0] } ] } ] } ] } ] }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{page_out_of_range, PageTextProvider};
use crate::error::{Error, Result};
use crate::model::PageText;

/// Top-level dump document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageDump {
    /// Pages in document order
    #[serde(default)]
    pub pages: Vec<PageText>,
}

/// Provider over pages already in memory or read from a JSON dump.
#[derive(Debug, Clone, Default)]
pub struct DumpProvider {
    pages: Vec<PageText>,
}

impl DumpProvider {
    /// Wrap pages already in memory.
    pub fn new(pages: Vec<PageText>) -> Self {
        Self { pages }
    }

    /// Read a dump file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    /// Parse a dump from JSON.
    pub fn from_json(data: &str) -> Result<Self> {
        let dump: PageDump = serde_json::from_str(data)?;
        Self::from_dump(dump)
    }

    /// Validate a parsed dump.
    pub fn from_dump(dump: PageDump) -> Result<Self> {
        for page in &dump.pages {
            for span in page.spans() {
                if !span.size.is_finite() || span.size <= 0.0 {
                    return Err(Error::InvalidDump(format!(
                        "page {}: span {:?} has invalid size {}",
                        page.number, span.text, span.size
                    )));
                }
            }
        }
        Ok(Self { pages: dump.pages })
    }
}

impl PageTextProvider for DumpProvider {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page(&self, index: usize) -> Result<PageText> {
        self.pages
            .get(index)
            .cloned()
            .ok_or_else(|| page_out_of_range(index, self.pages.len()))
    }

    fn pages(&self) -> Result<Vec<PageText>> {
        Ok(self.pages.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DUMP: &str = r#"{
        "pages": [
            { "number": 0, "width": 612, "height": 792, "blocks": [
                { "lines": [ { "spans": [
                    { "text": "Introduction", "size": 16.0, "font": "Arial-Bold",
                      "bbox": [72.0, 90.0, 180.0, 106.0] }
                ] } ] }
            ] },
            { "number": 1 }
        ]
    }"#;

    #[test]
    fn test_parse_dump() {
        let provider = DumpProvider::from_json(DUMP).unwrap();
        assert_eq!(provider.page_count(), 2);

        let page = provider.page(0).unwrap();
        let span = page.spans().next().unwrap();
        assert_eq!(span.text, "Introduction");
        assert!(span.is_bold());
        assert_eq!(span.y0(), 90.0);

        assert!(provider.page(1).unwrap().is_empty());
    }

    #[test]
    fn test_page_out_of_range() {
        let provider = DumpProvider::from_json(DUMP).unwrap();
        assert!(matches!(provider.page(5), Err(Error::PageOutOfRange(5, 2))));
    }

    #[test]
    fn test_rejects_bad_sizes() {
        let dump = r#"{"pages": [{"number": 0, "blocks": [{"lines": [{"spans": [
            {"text": "x", "size": -1, "bbox": [0, 0, 1, 1]}]}]}]}]}"#;
        assert!(matches!(
            DumpProvider::from_json(dump),
            Err(Error::InvalidDump(_))
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            DumpProvider::from_json(r#"{"pages": [{"blocks": 3}]}"#),
            Err(Error::InvalidDump(_))
        ));
    }
}
