//! Shape checks for outline JSON.

use serde_json::Value;

use crate::error::{Error, Result};
use crate::model::HeadingLevel;

const TOP_KEYS: [&str; 2] = ["title", "outline"];
const ENTRY_KEYS: [&str; 3] = ["level", "text", "page"];

/// Validate outline JSON text.
pub fn validate_json(data: &str) -> Result<()> {
    let value: Value =
        serde_json::from_str(data).map_err(|e| Error::Validation(format!("invalid JSON: {}", e)))?;
    validate_value(&value)
}

/// Validate an already parsed outline document.
pub fn validate_value(value: &Value) -> Result<()> {
    let obj = value
        .as_object()
        .ok_or_else(|| invalid("top level must be an object"))?;

    check_keys(obj, &TOP_KEYS, "top level")?;

    if !obj.get("title").is_some_and(Value::is_string) {
        return Err(invalid("\"title\" must be a string"));
    }

    let outline = obj
        .get("outline")
        .and_then(Value::as_array)
        .ok_or_else(|| invalid("\"outline\" must be an array"))?;

    for (i, entry) in outline.iter().enumerate() {
        let entry = entry
            .as_object()
            .ok_or_else(|| invalid(format!("outline[{}] must be an object", i)))?;
        let ctx = format!("outline[{}]", i);
        check_keys(entry, &ENTRY_KEYS, &ctx)?;

        let level = entry.get("level").and_then(Value::as_str);
        if !level.is_some_and(|l| HeadingLevel::ALL.iter().any(|h| h.as_str() == l)) {
            return Err(invalid(format!("{}.level must be one of H1-H4", ctx)));
        }
        if !entry.get("text").is_some_and(Value::is_string) {
            return Err(invalid(format!("{}.text must be a string", ctx)));
        }
        if !entry.get("page").is_some_and(Value::is_u64) {
            return Err(invalid(format!(
                "{}.page must be a non-negative integer",
                ctx
            )));
        }
    }

    Ok(())
}

fn check_keys(obj: &serde_json::Map<String, Value>, expected: &[&str], ctx: &str) -> Result<()> {
    if let Some(missing) = expected.iter().find(|k| !obj.contains_key(**k)) {
        return Err(invalid(format!("{}: missing key {:?}", ctx, missing)));
    }
    if let Some(extra) = obj.keys().find(|k| !expected.contains(&k.as_str())) {
        return Err(invalid(format!("{}: unexpected key {:?}", ctx, extra)));
    }
    Ok(())
}

fn invalid(msg: impl Into<String>) -> Error {
    Error::Validation(msg.into())
}
