//! Directory batch processing.
//!
//! Every `.pdf` and `.json` page dump in an input directory is run through an
//! [`OutlineExtractor`] and written as `<stem>.json` into an output directory.
//! A document that fails is recorded in the [`BatchReport`]; the rest of the
//! batch still runs.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::detect::has_supported_extension;
use crate::error::{Error, Result};
use crate::outline::OutlineExtractor;
use crate::render::{write_json, JsonFormat};

/// Outcome of a batch run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    /// Inputs whose outline was written
    pub succeeded: Vec<PathBuf>,
    /// Inputs that failed, with the error message
    pub failed: Vec<(PathBuf, String)>,
}

impl BatchReport {
    /// Number of inputs processed.
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    /// Whether every input succeeded.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Runs one extractor over a directory of documents.
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    extractor: OutlineExtractor,
    parallel: bool,
    format: JsonFormat,
}

impl BatchProcessor {
    /// Create a processor. Parallel with pretty output by default.
    pub fn new(extractor: OutlineExtractor) -> Self {
        Self {
            extractor,
            parallel: true,
            format: JsonFormat::Pretty,
        }
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the output JSON format.
    pub fn with_format(mut self, format: JsonFormat) -> Self {
        self.format = format;
        self
    }

    /// Supported input files in `dir`, sorted by path.
    pub fn collect_inputs<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
        let mut inputs = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() && has_supported_extension(&path) {
                inputs.push(path);
            }
        }
        inputs.sort();
        Ok(inputs)
    }

    /// Output path for one input.
    pub fn output_path(input: &Path, output_dir: &Path) -> PathBuf {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "output".to_string());
        output_dir.join(format!("{}.json", stem))
    }

    /// Extract one document and write its outline to `output`.
    pub fn process_file(&self, input: &Path, output: &Path) -> Result<()> {
        let outline = self.extractor.extract_file(input)?;
        log::debug!(
            "{}: {} heading(s), title {:?}",
            input.display(),
            outline.len(),
            outline.title
        );
        write_json(&outline, output, self.format)
    }

    /// Process every input in `input_dir`.
    pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_dir: P,
        output_dir: Q,
    ) -> Result<BatchReport> {
        self.run_with_callback(input_dir, output_dir, |_, _| {})
    }

    /// Process every input, calling `on_done` after each document.
    ///
    /// In parallel mode the callback runs on worker threads in completion
    /// order; the returned report is always in input order.
    pub fn run_with_callback<P, Q, F>(
        &self,
        input_dir: P,
        output_dir: Q,
        on_done: F,
    ) -> Result<BatchReport>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
        F: Fn(&Path, std::result::Result<(), &str>) + Sync,
    {
        let input_dir = input_dir.as_ref();
        let output_dir = output_dir.as_ref();

        if !input_dir.is_dir() {
            return Err(Error::Other(format!(
                "Input directory not found: {}",
                input_dir.display()
            )));
        }
        std::fs::create_dir_all(output_dir)?;
        if same_dir(input_dir, output_dir) {
            return Err(Error::Other(
                "Input and output directories must differ".to_string(),
            ));
        }

        let jobs = plan_jobs(Self::collect_inputs(input_dir)?, output_dir);
        log::info!(
            "Processing {} file(s) from {} ({})",
            jobs.len(),
            input_dir.display(),
            if self.parallel { "parallel" } else { "sequential" }
        );

        let run_one = |job: &Job| -> std::result::Result<(), String> {
            let result = match &job.output {
                Some(output) => self.process_file(&job.input, output).map_err(|e| e.to_string()),
                None => Err("Output name collides with an earlier input".to_string()),
            };
            if let Err(e) = &result {
                log::warn!("{}: {}", job.input.display(), e);
            }
            on_done(&job.input, result.as_ref().map(|_| ()).map_err(String::as_str));
            result
        };

        let results: Vec<std::result::Result<(), String>> = if self.parallel {
            jobs.par_iter().map(run_one).collect()
        } else {
            jobs.iter().map(run_one).collect()
        };

        let mut report = BatchReport::default();
        for (job, result) in jobs.into_iter().zip(results) {
            match result {
                Ok(()) => report.succeeded.push(job.input),
                Err(e) => report.failed.push((job.input, e)),
            }
        }
        log::info!(
            "Batch finished: {} succeeded, {} failed",
            report.succeeded.len(),
            report.failed.len()
        );
        Ok(report)
    }
}

struct Job {
    input: PathBuf,
    /// None when an earlier input already claimed the same output name
    output: Option<PathBuf>,
}

fn plan_jobs(inputs: Vec<PathBuf>, output_dir: &Path) -> Vec<Job> {
    let mut claimed = HashSet::new();
    inputs
        .into_iter()
        .map(|input| {
            let output = BatchProcessor::output_path(&input, output_dir);
            let output = claimed.insert(output.clone()).then_some(output);
            Job { input, output }
        })
        .collect()
}

fn same_dir(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_collect_inputs_sorted_and_filtered() {
        let dir = TempDir::new().unwrap();
        for name in ["b.pdf", "a.json", "notes.txt", "C.PDF"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        fs::create_dir(dir.path().join("nested.pdf")).unwrap();

        let inputs = BatchProcessor::collect_inputs(dir.path()).unwrap();
        let names: Vec<_> = inputs
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["C.PDF", "a.json", "b.pdf"]);
    }

    #[test]
    fn test_output_path() {
        let out = BatchProcessor::output_path(Path::new("in/report.v2.pdf"), Path::new("out"));
        assert_eq!(out, Path::new("out/report.v2.json"));
    }

    #[test]
    fn test_stem_collisions_fail_later_input() {
        let jobs = plan_jobs(
            vec![PathBuf::from("in/a.json"), PathBuf::from("in/a.pdf")],
            Path::new("out"),
        );
        assert!(jobs[0].output.is_some());
        assert!(jobs[1].output.is_none());
    }

    #[test]
    fn test_rejects_same_directory() {
        let dir = TempDir::new().unwrap();
        let processor = BatchProcessor::new(OutlineExtractor::default());
        assert!(processor.run(dir.path(), dir.path()).is_err());
    }

    #[test]
    fn test_missing_input_directory() {
        let dir = TempDir::new().unwrap();
        let processor = BatchProcessor::new(OutlineExtractor::default());
        let result = processor.run(dir.path().join("missing"), dir.path().join("out"));
        assert!(matches!(result, Err(Error::Other(_))));
    }

    #[test]
    fn test_report_counts() {
        let report = BatchReport {
            succeeded: vec![PathBuf::from("a.pdf")],
            failed: vec![(PathBuf::from("b.pdf"), "boom".to_string())],
        };
        assert_eq!(report.total(), 2);
        assert!(!report.is_success());
        assert!(BatchReport::default().is_success());
    }
}
