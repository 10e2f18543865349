//! Heading inference engine.
//!
//! Turns page text into a [`DocumentOutline`](crate::model::DocumentOutline)
//! in two passes: a scan that groups spans into lines and gathers font
//! statistics, then a classification pass that levels lines against those
//! statistics. Headings are then deduplicated and a title is chosen.

pub mod classifier;
mod clean;
mod dedup;
mod extractor;
mod filter;
mod levels;
mod lines;
mod options;
mod stats;
mod title;

pub use classifier::{
    fallback_level, DocumentStats, HeadingClassifier, LearnedClassifier, RuleBasedClassifier,
};
pub use clean::TextCleaner;
pub use dedup::{dedup_entries, dedup_key};
pub use extractor::{OutlineAnalysis, OutlineExtractor, Stage};
pub use filter::{HeadingFilter, Rejection};
pub use levels::LevelMap;
pub use lines::LineAggregator;
pub use options::{
    FallbackThresholds, HeadingThresholds, LevelOptions, LineOptions, OutlineOptions,
    TitleOptions,
};
pub use stats::FontStatistics;
pub use title::TitleSelector;
