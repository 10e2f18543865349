//! Learned heading classification.

use std::path::Path;
use std::sync::Arc;

use super::features::LineFeatures;
use super::forest::ForestModel;
use super::{DocumentStats, HeadingClassifier};
use crate::error::Result;
use crate::model::{HeadingLevel, Line};
use crate::outline::options::FallbackThresholds;

/// Per-line classification with a pretrained decision forest.
///
/// The model is loaded once and shared read-only (cloning the classifier
/// clones the `Arc`). When no model is available, or the model fails on a
/// line, the line is leveled by fixed margins over the document's average
/// font size instead; see [`fallback_level`].
#[derive(Debug, Clone)]
pub struct LearnedClassifier {
    model: Option<Arc<ForestModel>>,
    fallback: FallbackThresholds,
    min_chars: usize,
}

impl LearnedClassifier {
    /// Load a model from disk.
    ///
    /// Never fails: a missing or unusable artifact is logged and the
    /// classifier runs in fallback mode.
    pub fn load<P: AsRef<Path>>(path: P, fallback: FallbackThresholds) -> Self {
        let path = path.as_ref();
        let model = match ForestModel::load_from_file(path) {
            Ok(m) => {
                log::info!(
                    "Heading model loaded from {} ({} trees, labels {:?})",
                    path.display(),
                    m.tree_count(),
                    m.labels()
                );
                Some(Arc::new(m))
            }
            Err(e) => {
                log::warn!("Failed to load heading model: {}", e);
                log::warn!("Falling back to rule-based heading levels");
                None
            }
        };

        Self {
            model,
            fallback,
            min_chars: 5,
        }
    }

    /// Use an already loaded model.
    pub fn from_model(model: Arc<ForestModel>, fallback: FallbackThresholds) -> Self {
        Self {
            model: Some(model),
            fallback,
            min_chars: 5,
        }
    }

    /// Classifier without a model; every line takes the fallback path.
    pub fn unavailable(fallback: FallbackThresholds) -> Self {
        Self {
            model: None,
            fallback,
            min_chars: 5,
        }
    }

    /// Skip lines shorter than this many characters.
    pub fn with_min_chars(mut self, min_chars: usize) -> Self {
        self.min_chars = min_chars;
        self
    }

    /// Check if a model is loaded and available.
    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }

    /// The shared model, if loaded.
    pub fn model(&self) -> Option<&Arc<ForestModel>> {
        self.model.as_ref()
    }

    /// Run the model on one line and return its raw label.
    pub fn predict_label(&self, line: &Line) -> Result<Option<String>> {
        let Some(model) = &self.model else {
            return Ok(None);
        };
        let row = LineFeatures::from_line(line).encode(model.feature_columns());
        model.predict_label(&row).map(|label| Some(label.to_string()))
    }
}

impl HeadingClassifier for LearnedClassifier {
    fn name(&self) -> &str {
        if self.model.is_some() {
            "learned"
        } else {
            "learned-fallback"
        }
    }

    fn classify(&self, line: &Line, stats: &DocumentStats) -> Option<HeadingLevel> {
        if line.char_count() < self.min_chars {
            return None;
        }

        match self.predict_label(line) {
            Ok(Some(label)) => HeadingLevel::from_label(&label),
            Ok(None) => fallback_level(line, stats.avg_font_size(), &self.fallback),
            Err(e) => {
                log::warn!("Heading model failed on {:?}: {}", line.text, e);
                fallback_level(line, stats.avg_font_size(), &self.fallback)
            }
        }
    }
}

/// Level a line by its size margin over the average font size.
///
/// In order: H1 at `avg + h1_margin` (or bold at `avg + h1_bold_margin`),
/// H2 at `avg + h2_margin` (or bold at `avg + h2_bold_margin`), H3 at
/// `avg + h3_margin` or when bold, H4 at `avg`, otherwise not a heading.
pub fn fallback_level(
    line: &Line,
    avg_font_size: f32,
    thresholds: &FallbackThresholds,
) -> Option<HeadingLevel> {
    let size = line.size;
    let bold = line.bold;

    if size >= avg_font_size + thresholds.h1_margin
        || (bold && size >= avg_font_size + thresholds.h1_bold_margin)
    {
        Some(HeadingLevel::H1)
    } else if size >= avg_font_size + thresholds.h2_margin
        || (bold && size >= avg_font_size + thresholds.h2_bold_margin)
    {
        Some(HeadingLevel::H2)
    } else if size >= avg_font_size + thresholds.h3_margin || bold {
        Some(HeadingLevel::H3)
    } else if size >= avg_font_size {
        Some(HeadingLevel::H4)
    } else {
        None
    }
}
