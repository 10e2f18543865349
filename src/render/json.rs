//! JSON rendering for document outlines.

use std::path::Path;

use crate::error::{Error, Result};
use crate::model::DocumentOutline;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert an outline to JSON.
pub fn to_json(outline: &DocumentOutline, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(outline),
        JsonFormat::Compact => serde_json::to_string(outline),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

/// Render an outline and write it to `path`.
pub fn write_json<P: AsRef<Path>>(
    outline: &DocumentOutline,
    path: P,
    format: JsonFormat,
) -> Result<()> {
    let json = to_json(outline, format)?;
    std::fs::write(path, json)?;
    Ok(())
}
