//! Input format detection.
//!
//! Two inputs are understood: PDF files and JSON page-text dumps.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// PDF format information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfFormat {
    /// PDF version (e.g., "1.7", "2.0")
    pub version: String,
}

impl std::fmt::Display for PdfFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PDF {}", self.version)
    }
}

/// Kind of input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKind {
    /// A PDF document
    Pdf(PdfFormat),
    /// A JSON page-text dump
    PageDump,
}

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
const PDF_MAGIC_LEN: usize = 5;
const VERSION_LEN: usize = 3; // e.g., "1.7"
const HEADER_LEN: u64 = 64;

/// Detect the input kind from a file path.
///
/// # Example
/// ```no_run
/// use pdfoutline::detect::{detect_input_from_path, InputKind};
///
/// match detect_input_from_path("document.pdf").unwrap() {
///     InputKind::Pdf(format) => println!("{}", format),
///     InputKind::PageDump => println!("page dump"),
/// }
/// ```
pub fn detect_input_from_path<P: AsRef<Path>>(path: P) -> Result<InputKind> {
    let file = File::open(path)?;
    let mut header = Vec::with_capacity(HEADER_LEN as usize);
    file.take(HEADER_LEN).read_to_end(&mut header)?;
    detect_input_from_bytes(&header)
}

/// Detect the input kind from the first bytes of a file.
pub fn detect_input_from_bytes(data: &[u8]) -> Result<InputKind> {
    if data.starts_with(PDF_MAGIC) {
        return detect_format_from_bytes(data).map(InputKind::Pdf);
    }

    // Skip a UTF-8 BOM and leading whitespace before looking for a JSON object
    let data = data.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(data);
    match data.iter().find(|b| !b.is_ascii_whitespace()) {
        Some(b'{') => Ok(InputKind::PageDump),
        _ => Err(Error::UnknownFormat),
    }
}

/// Detect PDF format from bytes.
///
/// # Returns
/// * `Ok(PdfFormat)` if the data starts with valid PDF header
/// * `Err(Error::UnknownFormat)` if the data is not a PDF
pub fn detect_format_from_bytes(data: &[u8]) -> Result<PdfFormat> {
    if data.len() < PDF_MAGIC_LEN + VERSION_LEN {
        return Err(Error::UnknownFormat);
    }

    if !data.starts_with(PDF_MAGIC) {
        return Err(Error::UnknownFormat);
    }

    // Extract version string (e.g., "1.7" from "%PDF-1.7")
    let version_bytes = &data[PDF_MAGIC_LEN..PDF_MAGIC_LEN + VERSION_LEN];
    let version = String::from_utf8_lossy(version_bytes).to_string();

    if !is_valid_version(&version) {
        return Err(Error::UnsupportedVersion(version));
    }

    Ok(PdfFormat { version })
}

/// Check if a version string is valid.
fn is_valid_version(version: &str) -> bool {
    if version.len() != 3 {
        return false;
    }

    let chars: Vec<char> = version.chars().collect();
    chars[0].is_ascii_digit() && chars[1] == '.' && chars[2].is_ascii_digit()
}

/// Check if a file is a valid PDF.
pub fn is_pdf<P: AsRef<Path>>(path: P) -> bool {
    matches!(detect_input_from_path(path), Ok(InputKind::Pdf(_)))
}

/// Whether a path has an extension this crate can read (`pdf` or `json`).
pub fn has_supported_extension<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("pdf") || e.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}
