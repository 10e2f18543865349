//! Outline output.
//!
//! Outlines serialize to `{"title": ..., "outline": [{"level", "text", "page"}]}`.
//! [`validate_json`] checks existing output files against that shape.

mod json;
mod validate;

pub use json::{to_json, write_json, JsonFormat};
pub use validate::{validate_json, validate_value};
