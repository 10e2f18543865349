//! Outline assembly.
//!
//! Runs the per-document pipeline:
//!
//! 1. **Scanning**: convert spans, gather font statistics, aggregate lines
//! 2. **Classifying**: let the classifier prepare, then level each line
//! 3. **Deduplicating**: drop repeated (text, page) detections
//! 4. **TitleSelecting**: pick the title
//!
//! Statistics are document-relative, so every line must be scanned before
//! the first one is classified.

use std::path::Path;
use std::sync::Arc;

use super::classifier::{DocumentStats, HeadingClassifier, LearnedClassifier, RuleBasedClassifier};
use super::clean::TextCleaner;
use super::dedup::dedup_entries;
use super::lines::LineAggregator;
use super::options::OutlineOptions;
use super::stats::FontStatistics;
use super::title::TitleSelector;
use crate::error::Result;
use crate::model::{DocumentOutline, Line, OutlineEntry, PageText, Span};
use crate::provider::{self, PageTextProvider};

/// Pipeline stage of one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Gathering statistics and lines
    Scanning,
    /// Leveling lines
    Classifying,
    /// Removing repeated headings
    Deduplicating,
    /// Picking the title
    TitleSelecting,
    /// Outline complete
    Done,
}

impl Stage {
    /// The stage that follows this one.
    pub fn next(self) -> Self {
        match self {
            Stage::Scanning => Stage::Classifying,
            Stage::Classifying => Stage::Deduplicating,
            Stage::Deduplicating => Stage::TitleSelecting,
            Stage::TitleSelecting | Stage::Done => Stage::Done,
        }
    }
}

/// Everything the pipeline learned about one document.
#[derive(Debug, Clone)]
pub struct OutlineAnalysis {
    /// Final outline
    pub outline: DocumentOutline,
    /// Leveled headings before deduplication
    pub headings: Vec<OutlineEntry>,
    /// Statistics the classifier worked with
    pub stats: DocumentStats,
    /// Number of lines scanned
    pub line_count: usize,
}

/// Recovers a title and heading outline from page text.
///
/// # Example
///
/// ```
/// use pdfoutline::{OutlineExtractor, PageText, RawSpan};
///
/// let mut page = PageText::letter(0);
/// page.add_span(RawSpan::new("Annual Report", 24.0, "Helvetica-Bold", [72.0, 60.0, 260.0, 84.0]));
/// page.add_span(RawSpan::new("Revenue grew in every region.", 11.0, "Helvetica", [72.0, 120.0, 300.0, 131.0]));
/// page.add_span(RawSpan::new("Costs were flat year over year.", 11.0, "Helvetica", [72.0, 140.0, 300.0, 151.0]));
///
/// let outline = OutlineExtractor::default().extract(&[page]);
/// assert_eq!(outline.title, "Annual Report");
/// ```
#[derive(Clone)]
pub struct OutlineExtractor {
    options: OutlineOptions,
    classifier: Arc<dyn HeadingClassifier>,
    aggregator: LineAggregator,
    cleaner: Arc<TextCleaner>,
    titles: TitleSelector,
}

impl OutlineExtractor {
    /// Create an extractor using the rule-based classifier.
    pub fn new(options: OutlineOptions) -> Self {
        let classifier = Arc::new(RuleBasedClassifier::new(
            options.headings.clone(),
            options.levels.clone(),
        ));
        Self::with_classifier(options, classifier)
    }

    /// Create an extractor using a learned model at `model_path`.
    ///
    /// A missing or invalid model is logged and the classifier degrades to
    /// its size-margin fallback; this never fails.
    pub fn learned<P: AsRef<Path>>(options: OutlineOptions, model_path: P) -> Self {
        let classifier = LearnedClassifier::load(model_path, options.fallback.clone())
            .with_min_chars(options.learned_min_chars);
        Self::with_classifier(options, Arc::new(classifier))
    }

    /// Create an extractor with any classification strategy.
    pub fn with_classifier(options: OutlineOptions, classifier: Arc<dyn HeadingClassifier>) -> Self {
        Self {
            aggregator: LineAggregator::new(options.lines.y_tolerance),
            titles: TitleSelector::new(options.title.clone()),
            cleaner: Arc::new(TextCleaner::new()),
            classifier,
            options,
        }
    }

    /// Options in use.
    pub fn options(&self) -> &OutlineOptions {
        &self.options
    }

    /// Name of the classification strategy.
    pub fn classifier_name(&self) -> &str {
        self.classifier.name()
    }

    /// Extract the outline of a document given as pages.
    pub fn extract(&self, pages: &[PageText]) -> DocumentOutline {
        self.analyze(pages).outline
    }

    /// Extract the outline from a page-text provider.
    pub fn extract_from(&self, provider: &dyn PageTextProvider) -> Result<DocumentOutline> {
        let pages = provider.pages()?;
        Ok(self.extract(&pages))
    }

    /// Extract the outline of a PDF or page-text dump on disk.
    pub fn extract_file<P: AsRef<Path>>(&self, path: P) -> Result<DocumentOutline> {
        let provider = provider::open(path)?;
        self.extract_from(provider.as_ref())
    }

    /// Run the full pipeline and keep the intermediate results.
    pub fn analyze(&self, pages: &[PageText]) -> OutlineAnalysis {
        let mut stage = Stage::Scanning;
        log::debug!("{:?}: {} page(s)", stage, pages.len());

        let mut font = FontStatistics::new(self.options.default_font_size);
        let mut lines: Vec<Line> = Vec::new();

        for page in pages {
            let spans: Vec<Span> = page
                .spans()
                .filter_map(|raw| Span::from_raw(raw, page.number))
                .collect();

            for span in &spans {
                font.add_size(span.size);
            }

            lines.extend(
                self.aggregator
                    .aggregate(page.number, &spans)
                    .into_iter()
                    .filter_map(|mut line| {
                        line.text = self.cleaner.clean(&line.text);
                        (!line.text.is_empty()).then_some(line)
                    }),
            );
        }
        font.analyze();
        log::debug!(
            "{} span size(s), {} line(s), avg font {:.2}, body font {:.2}",
            font.sample_count(),
            lines.len(),
            font.avg_font_size,
            font.body_size
        );

        stage = stage.next();
        let stats = self.classifier.prepare(&lines, font);
        let headings: Vec<OutlineEntry> = lines
            .iter()
            .filter_map(|line| {
                self.classifier
                    .classify(line, &stats)
                    .map(|level| OutlineEntry::new(level, line.text.clone(), line.page))
            })
            .collect();
        log::debug!(
            "{:?} with {}: {} heading(s)",
            stage,
            self.classifier.name(),
            headings.len()
        );

        stage = stage.next();
        let entries = dedup_entries(headings.clone());
        log::debug!("{:?}: {} heading(s) kept", stage, entries.len());

        stage = stage.next();
        let title = self.titles.select(&entries);
        log::debug!("{:?}: {:?}", stage, title);

        stage = stage.next();
        debug_assert_eq!(stage, Stage::Done);

        OutlineAnalysis {
            outline: DocumentOutline::new(title, entries),
            headings,
            stats,
            line_count: lines.len(),
        }
    }
}

impl Default for OutlineExtractor {
    fn default() -> Self {
        Self::new(OutlineOptions::default())
    }
}

impl std::fmt::Debug for OutlineExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutlineExtractor")
            .field("classifier", &self.classifier.name())
            .field("options", &self.options)
            .finish()
    }
}
