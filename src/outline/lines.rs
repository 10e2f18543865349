//! Line aggregation.
//!
//! Providers frequently split one visual line into several spans (font
//! switches, kerning, separate text objects). Spans are regrouped by a
//! quantized top edge so that such fragments end up on a single line.

use std::collections::BTreeMap;

use crate::model::{round_size, Line, Span};

/// Groups spans into lines by vertical position.
#[derive(Debug, Clone)]
pub struct LineAggregator {
    y_tolerance: f32,
}

impl LineAggregator {
    /// Create an aggregator with the given vertical tolerance.
    ///
    /// Non-positive or non-finite tolerances fall back to 1.0.
    pub fn new(y_tolerance: f32) -> Self {
        let y_tolerance = if y_tolerance.is_finite() && y_tolerance > 0.0 {
            y_tolerance
        } else {
            1.0
        };
        Self { y_tolerance }
    }

    /// Vertical tolerance in use.
    pub fn y_tolerance(&self) -> f32 {
        self.y_tolerance
    }

    /// Bucket index for a top edge: `round(y0 / tolerance)`.
    fn bucket(&self, y0: f32) -> i64 {
        (y0 / self.y_tolerance).round() as i64
    }

    /// Merge one page's spans into lines, ordered top to bottom.
    ///
    /// Blank spans are dropped. Within a line, span texts are joined
    /// left to right with single spaces.
    pub fn aggregate(&self, page: u32, spans: &[Span]) -> Vec<Line> {
        let mut buckets: BTreeMap<i64, Vec<&Span>> = BTreeMap::new();

        for span in spans {
            if span.text.trim().is_empty() {
                continue;
            }
            buckets.entry(self.bucket(span.y0)).or_default().push(span);
        }

        buckets
            .into_values()
            .filter_map(|bucket| Self::merge(page, bucket))
            .collect()
    }

    /// Merge the spans of one bucket into a line.
    fn merge(page: u32, mut spans: Vec<&Span>) -> Option<Line> {
        if spans.is_empty() {
            return None;
        }

        // Stable sort keeps provider order for spans sharing an x0
        spans.sort_by(|a, b| a.x0.total_cmp(&b.x0));

        let text = spans
            .iter()
            .map(|s| s.text.trim())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        // Largest span size wins
        let size = spans.iter().map(|s| s.size).fold(f32::MIN, f32::max);
        let bold = spans.iter().any(|s| s.bold);
        let y = spans.iter().map(|s| s.y0).fold(f32::MAX, f32::min);

        Some(Line {
            text,
            size: round_size(size),
            bold,
            y,
            page,
        })
    }
}

impl Default for LineAggregator {
    fn default() -> Self {
        Self::new(1.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(text: &str, size: f32, x0: f32, y0: f32) -> Span {
        Span::new(text, size, false, x0, y0, 0)
    }

    #[test]
    fn test_same_line_fragments_merge() {
        let aggregator = LineAggregator::default();
        let spans = vec![span("One", 16.0, 140.0, 100.4), span("Chapter ", 16.0, 72.0, 100.0)];

        let lines = aggregator.aggregate(0, &spans);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "Chapter One");
        assert_eq!(lines[0].size, 16.0);
        assert_eq!(lines[0].y, 100.0);
    }

    #[test]
    fn test_distinct_lines_ordered_top_down() {
        let aggregator = LineAggregator::default();
        let spans = vec![
            span("second", 11.0, 72.0, 130.0),
            span("first", 11.0, 72.0, 100.0),
            span("third", 11.0, 72.0, 160.0),
        ];

        let lines = aggregator.aggregate(2, &spans);
        let texts: Vec<_> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
        assert!(lines.iter().all(|l| l.page == 2));
    }

    #[test]
    fn test_line_size_is_max_and_bold_is_any() {
        let aggregator = LineAggregator::default();
        let spans = vec![
            Span::new("Intro", 18.0, true, 72.0, 50.0, 0),
            Span::new("(draft)", 10.0, false, 130.0, 50.2, 0),
        ];

        let lines = aggregator.aggregate(0, &spans);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].size, 18.0);
        assert!(lines[0].bold);
        assert_eq!(lines[0].text, "Intro (draft)");
    }

    #[test]
    fn test_blank_spans_dropped() {
        let aggregator = LineAggregator::default();
        let spans = vec![span("  ", 30.0, 0.0, 10.0), span("", 30.0, 0.0, 40.0)];
        assert!(aggregator.aggregate(0, &spans).is_empty());
    }

    #[test]
    fn test_invalid_tolerance_falls_back() {
        assert_eq!(LineAggregator::new(0.0).y_tolerance(), 1.0);
        assert_eq!(LineAggregator::new(-2.0).y_tolerance(), 1.0);
        assert_eq!(LineAggregator::new(f32::NAN).y_tolerance(), 1.0);
        assert_eq!(LineAggregator::new(3.0).y_tolerance(), 3.0);
    }

    #[test]
    fn test_nan_x0_sorts_last() {
        let aggregator = LineAggregator::default();
        let spans = vec![
            span("Tail", 16.0, f32::NAN, 50.0),
            span("Mid", 16.0, 100.0, 50.0),
            span("Head", 16.0, 72.0, 50.0),
        ];
        let mut reversed = spans.clone();
        reversed.reverse();

        assert_eq!(aggregator.aggregate(0, &spans)[0].text, "Head Mid Tail");
        assert_eq!(aggregator.aggregate(0, &reversed)[0].text, "Head Mid Tail");
    }
}
