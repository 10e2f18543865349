//! pdfoutline CLI - document outline extraction tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pdfoutline::render::{self, JsonFormat};
use pdfoutline::{BatchProcessor, OutlineExtractor, PdfOutline};

#[derive(Parser)]
#[command(name = "pdfoutline")]
#[command(version)]
#[command(about = "Extract titles and H1-H4 heading outlines from PDFs", long_about = None)]
struct Cli {
    /// Input PDF or page-text dump
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(flatten)]
    engine: EngineArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct EngineArgs {
    /// Learned heading model (JSON tree ensemble)
    #[arg(long, global = true, env = "PDFOUTLINE_MODEL", value_name = "FILE")]
    model: Option<PathBuf>,

    /// Options file (JSON)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Vertical tolerance for grouping spans into lines
    #[arg(long, global = true, value_name = "POINTS")]
    y_tolerance: Option<f32>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the outline of one document
    Extract {
        /// Input PDF or page-text dump
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Extract outlines for every document in a directory
    Batch {
        /// Directory of PDFs and page-text dumps
        #[arg(value_name = "INPUT_DIR")]
        input: PathBuf,

        /// Directory for <name>.json outputs
        #[arg(value_name = "OUTPUT_DIR")]
        output: PathBuf,

        /// Process one file at a time
        #[arg(long)]
        sequential: bool,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Check outline JSON files in a directory
    Validate {
        /// Directory of outline JSON files
        #[arg(value_name = "DIR")]
        dir: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Extract {
            input,
            output,
            compact,
        }) => cmd_extract(&cli.engine, &input, output.as_deref(), compact),
        Some(Commands::Batch {
            input,
            output,
            sequential,
            compact,
        }) => cmd_batch(&cli.engine, &input, &output, sequential, compact),
        Some(Commands::Validate { dir }) => cmd_validate(&dir),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            if let Some(input) = cli.input {
                cmd_extract(&cli.engine, &input, None, false)
            } else {
                println!("{}", "Usage: pdfoutline <FILE>".yellow());
                println!("       pdfoutline --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn build_extractor(engine: &EngineArgs) -> Result<OutlineExtractor, Box<dyn std::error::Error>> {
    let mut builder = PdfOutline::new();
    if let Some(path) = &engine.config {
        builder = builder.with_config(path)?;
    }
    if let Some(tolerance) = engine.y_tolerance {
        builder = builder.with_y_tolerance(tolerance);
    }
    if let Some(path) = &engine.model {
        builder = builder.with_model(path);
    }

    let extractor = builder.build();
    log::info!("Using {} classifier", extractor.classifier_name());
    Ok(extractor)
}

fn json_format(compact: bool) -> JsonFormat {
    if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    }
}

fn cmd_extract(
    engine: &EngineArgs,
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let extractor = build_extractor(engine)?;
    let outline = extractor.extract_file(input)?;
    let json = render::to_json(&outline, json_format(compact))?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!(
            "{} {} ({} headings)",
            "Saved to".green(),
            path.display(),
            outline.len()
        );
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_batch(
    engine: &EngineArgs,
    input: &Path,
    output: &Path,
    sequential: bool,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let total = BatchProcessor::collect_inputs(input)?.len();
    if total == 0 {
        println!("{} {}", "No PDF or JSON files in".yellow(), input.display());
        return Ok(());
    }

    let processor = BatchProcessor::new(build_extractor(engine)?)
        .with_parallel(!sequential)
        .with_format(json_format(compact));

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let report = processor.run_with_callback(input, output, |path, result| {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        match result {
            Ok(()) => pb.println(format!("  {} {}", "✓".green(), name)),
            Err(e) => pb.println(format!("  {} {}: {}", "✗".red(), name, e)),
        }
        pb.inc(1);
    })?;
    pb.finish_with_message("Done!");

    println!(
        "\n{} {} succeeded, {} failed",
        "Summary:".bold(),
        report.succeeded.len().to_string().green(),
        report.failed.len().to_string().red()
    );

    if report.is_success() {
        Ok(())
    } else {
        Err(format!("{} of {} file(s) failed", report.failed.len(), report.total()).into())
    }
}

fn cmd_validate(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|e| e.eq_ignore_ascii_case("json")))
        .collect();
    files.sort();

    println!("{}", "Outline Validation".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let mut invalid = 0;
    for path in &files {
        let name = path.file_name().unwrap_or_default().to_string_lossy();
        let result = fs::read_to_string(path)
            .map_err(pdfoutline::Error::from)
            .and_then(|data| render::validate_json(&data));
        match result {
            Ok(()) => println!("  {} {}", "✓".green(), name),
            Err(e) => {
                println!("  {} {}: {}", "✗".red(), name, e);
                invalid += 1;
            }
        }
    }

    println!(
        "\n{}: {} valid, {} invalid",
        "Files".bold(),
        files.len() - invalid,
        invalid
    );

    if invalid == 0 {
        Ok(())
    } else {
        Err(format!("{} invalid file(s)", invalid).into())
    }
}

fn cmd_version() {
    println!("{} {}", "pdfoutline".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Document title and heading outline extraction");
    println!();
    println!("Library: pdfoutline {}", env!("CARGO_PKG_VERSION").dimmed());
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_cli_parses_global_flags() {
        let cli = Cli::try_parse_from([
            "pdfoutline",
            "batch",
            "in",
            "out",
            "--sequential",
            "--y-tolerance",
            "2.5",
        ])
        .unwrap();
        assert_eq!(cli.engine.y_tolerance, Some(2.5));
        assert!(matches!(
            cli.command,
            Some(Commands::Batch {
                sequential: true,
                ..
            })
        ));
    }

    #[test]
    fn test_validate_counts_invalid_files() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("good.json"),
            r#"{"title": "T", "outline": [{"level": "H1", "text": "A", "page": 0}]}"#,
        )
        .unwrap();
        assert!(cmd_validate(dir.path()).is_ok());

        fs::write(dir.path().join("bad.json"), r#"{"title": "T"}"#).unwrap();
        assert!(cmd_validate(dir.path()).is_err());
    }
}
