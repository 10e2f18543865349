//! Rule-based heading classification.

use super::{DocumentStats, HeadingClassifier};
use crate::model::{HeadingLevel, Line};
use crate::outline::filter::HeadingFilter;
use crate::outline::levels::LevelMap;
use crate::outline::options::{HeadingThresholds, LevelOptions};
use crate::outline::stats::FontStatistics;

/// Candidate filter followed by a document-wide size ranking.
///
/// Lines passing [`HeadingFilter`] are candidates; their distinct sizes are
/// ranked into a [`LevelMap`] during `prepare`. A candidate whose size has
/// no level is dropped.
#[derive(Debug, Clone, Default)]
pub struct RuleBasedClassifier {
    filter: HeadingFilter,
    levels: LevelOptions,
}

impl RuleBasedClassifier {
    /// Create a classifier with the given thresholds.
    pub fn new(thresholds: HeadingThresholds, levels: LevelOptions) -> Self {
        Self {
            filter: HeadingFilter::new(thresholds),
            levels,
        }
    }

    /// The candidate filter.
    pub fn filter(&self) -> &HeadingFilter {
        &self.filter
    }
}

impl HeadingClassifier for RuleBasedClassifier {
    fn name(&self) -> &str {
        "rules"
    }

    fn prepare(&self, lines: &[Line], font: FontStatistics) -> DocumentStats {
        let avg = font.avg_font_size;
        let sizes: Vec<f32> = lines
            .iter()
            .filter(|line| self.filter.accepts(line, avg))
            .map(|line| line.size)
            .collect();

        let level_map = LevelMap::build(&sizes, &self.levels);
        log::debug!(
            "{} heading candidate(s), {} level(s): {:?}",
            sizes.len(),
            level_map.len(),
            level_map.iter().collect::<Vec<_>>()
        );

        DocumentStats::new(font).with_level_map(level_map)
    }

    fn classify(&self, line: &Line, stats: &DocumentStats) -> Option<HeadingLevel> {
        if !self.filter.accepts(line, stats.avg_font_size()) {
            return None;
        }
        stats.level_map.level_for(line.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats_for(lines: &[Line]) -> FontStatistics {
        let mut font = FontStatistics::default();
        for line in lines {
            font.add_size(line.size);
        }
        font.analyze();
        font
    }

    #[test]
    fn test_classifies_by_rank() {
        let mut lines = vec![
            Line::new("Report Title", 24.0, true, 50.0, 0),
            Line::new("Introduction", 16.0, false, 90.0, 0),
        ];
        for i in 0..40 {
            lines.push(Line::new(
                format!("Body paragraph number {} with ordinary words", i),
                11.0,
                false,
                120.0 + i as f32 * 14.0,
                0,
            ));
        }

        let classifier = RuleBasedClassifier::default();
        let stats = classifier.prepare(&lines, stats_for(&lines));

        assert_eq!(classifier.classify(&lines[0], &stats), Some(HeadingLevel::H1));
        assert_eq!(classifier.classify(&lines[1], &stats), Some(HeadingLevel::H2));
        assert_eq!(classifier.classify(&lines[2], &stats), None);
    }

    #[test]
    fn test_rejected_text_never_leveled() {
        let lines = vec![
            Line::new("Heading", 20.0, false, 10.0, 0),
            Line::new("aaaaaaaa", 20.0, false, 30.0, 0),
            Line::new("body text here", 10.0, false, 50.0, 0),
        ];
        let classifier = RuleBasedClassifier::default();
        let stats = classifier.prepare(&lines, stats_for(&lines));

        assert_eq!(stats.level_map.level_for(20.0), Some(HeadingLevel::H1));
        assert_eq!(classifier.classify(&lines[1], &stats), None);
    }
}
