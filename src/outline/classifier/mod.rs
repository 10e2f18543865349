//! Heading classification strategies.
//!
//! A [`HeadingClassifier`] decides, line by line, whether a line is a
//! heading and at which level. Two implementations exist:
//!
//! - [`RuleBasedClassifier`]: candidate filter plus corpus-wide size ranking
//! - [`LearnedClassifier`]: a pretrained decision forest over per-line
//!   features, degrading to fixed size margins when no model is available
//!
//! The strategy is chosen when the extractor is built. Classifiers are
//! shared read-only across threads.

mod features;
mod forest;
mod learned;
mod rules;

pub use features::{LineFeatures, FEATURE_COLUMNS};
pub use forest::{DecisionTree, ForestModel, ModelArtifact, TreeNode, MODEL_FORMAT_VERSION};
pub use learned::{fallback_level, LearnedClassifier};
pub use rules::RuleBasedClassifier;

use super::levels::LevelMap;
use super::stats::FontStatistics;
use crate::model::{HeadingLevel, Line};

/// Per-document statistics available to a classifier.
#[derive(Debug, Clone)]
pub struct DocumentStats {
    /// Font statistics from the scanning pass
    pub font: FontStatistics,
    /// Size ranking built from heading candidates (empty for strategies
    /// that level lines individually)
    pub level_map: LevelMap,
}

impl DocumentStats {
    /// Statistics without a level map.
    pub fn new(font: FontStatistics) -> Self {
        Self {
            font,
            level_map: LevelMap::default(),
        }
    }

    /// Attach a level map.
    pub fn with_level_map(mut self, level_map: LevelMap) -> Self {
        self.level_map = level_map;
        self
    }

    /// Average font size of the document.
    pub fn avg_font_size(&self) -> f32 {
        self.font.avg_font_size
    }
}

/// A heading decision strategy.
///
/// Implementations must never panic or fail on odd input: a line that
/// cannot be judged is simply not a heading.
pub trait HeadingClassifier: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Build per-document state once all lines are known.
    ///
    /// Called once per document before any [`classify`](Self::classify).
    fn prepare(&self, _lines: &[Line], font: FontStatistics) -> DocumentStats {
        DocumentStats::new(font)
    }

    /// Level of a line, or `None` if it is not a heading.
    fn classify(&self, line: &Line, stats: &DocumentStats) -> Option<HeadingLevel>;
}
