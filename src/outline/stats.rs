//! Document-wide font statistics.

use std::collections::BTreeMap;

use crate::model::{size_key, Span};

/// Font size statistics gathered over every non-blank span of a document.
///
/// This is the reference scale for "larger than body text". Collect with
/// [`add_size`](Self::add_size), then call [`analyze`](Self::analyze) once
/// the whole document has been scanned.
#[derive(Debug, Clone)]
pub struct FontStatistics {
    /// Arithmetic mean of all observed sizes
    pub avg_font_size: f32,
    /// Most common size (body text)
    pub body_size: f32,
    /// Observed sizes keyed at 0.01pt precision, with frequency
    pub size_histogram: BTreeMap<i32, usize>,
    total: f64,
    count: usize,
    default_size: f32,
}

impl FontStatistics {
    /// Create empty statistics that report `default_size` until sizes are added.
    pub fn new(default_size: f32) -> Self {
        Self {
            avg_font_size: default_size,
            body_size: default_size,
            size_histogram: BTreeMap::new(),
            total: 0.0,
            count: 0,
            default_size,
        }
    }

    /// Compute statistics over a set of spans in one go.
    pub fn from_spans<'a, I>(spans: I, default_size: f32) -> Self
    where
        I: IntoIterator<Item = &'a Span>,
    {
        let mut stats = Self::new(default_size);
        for span in spans {
            if !span.text.trim().is_empty() {
                stats.add_size(span.size);
            }
        }
        stats.analyze();
        stats
    }

    /// Add a font size observation. Non-finite and non-positive sizes are ignored.
    pub fn add_size(&mut self, size: f32) {
        if !size.is_finite() || size <= 0.0 {
            return;
        }
        self.total += size as f64;
        self.count += 1;
        *self.size_histogram.entry(size_key(size)).or_insert(0) += 1;
    }

    /// Calculate average and body size.
    pub fn analyze(&mut self) {
        if self.count == 0 {
            self.avg_font_size = self.default_size;
            self.body_size = self.default_size;
            return;
        }

        self.avg_font_size = (self.total / self.count as f64) as f32;

        // Ties go to the larger size so the result does not depend on map order
        if let Some((key, _)) = self
            .size_histogram
            .iter()
            .max_by(|(ka, ca), (kb, cb)| ca.cmp(cb).then(ka.cmp(kb)))
        {
            self.body_size = *key as f32 / 100.0;
        }
    }

    /// Number of size observations.
    pub fn sample_count(&self) -> usize {
        self.count
    }

    /// Number of times a size (at 0.01pt precision) was observed.
    pub fn count_for(&self, size: f32) -> usize {
        self.size_histogram
            .get(&size_key(size))
            .copied()
            .unwrap_or(0)
    }

    /// Whether no text was observed.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl Default for FontStatistics {
    fn default() -> Self {
        Self::new(12.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_statistics() {
        let mut stats = FontStatistics::default();
        for _ in 0..100 {
            stats.add_size(12.0);
        }
        for _ in 0..5 {
            stats.add_size(18.0);
        }
        for _ in 0..3 {
            stats.add_size(24.0);
        }

        stats.analyze();

        let expected = (100.0 * 12.0 + 5.0 * 18.0 + 3.0 * 24.0) / 108.0;
        assert!((stats.avg_font_size - expected).abs() < 1e-4);
        assert!((stats.body_size - 12.0).abs() < 0.01);
        assert_eq!(stats.count_for(18.0), 5);
        assert_eq!(stats.count_for(17.0), 0);
        assert_eq!(stats.sample_count(), 108);
    }

    #[test]
    fn test_empty_document_defaults() {
        let mut stats = FontStatistics::new(12.0);
        stats.analyze();
        assert!(stats.is_empty());
        assert_eq!(stats.avg_font_size, 12.0);
        assert_eq!(stats.body_size, 12.0);
    }

    #[test]
    fn test_from_spans_ignores_blank_text() {
        let spans = vec![
            Span::new("Title", 20.0, false, 0.0, 0.0, 0),
            Span::new("   ", 90.0, false, 0.0, 10.0, 0),
            Span::new("Body", 10.0, false, 0.0, 20.0, 0),
        ];
        let stats = FontStatistics::from_spans(&spans, 12.0);
        assert_eq!(stats.avg_font_size, 15.0);
        assert_eq!(stats.sample_count(), 2);
    }

    #[test]
    fn test_invalid_sizes_ignored() {
        let mut stats = FontStatistics::default();
        stats.add_size(f32::NAN);
        stats.add_size(0.0);
        stats.add_size(-4.0);
        stats.analyze();
        assert!(stats.is_empty());
        assert_eq!(stats.avg_font_size, 12.0);
    }
}
