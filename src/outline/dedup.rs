//! Removal of repeated heading detections.

use std::collections::HashSet;

use crate::model::OutlineEntry;

/// Key under which two entries count as the same heading.
pub fn dedup_key(text: &str, page: u32) -> (String, u32) {
    (text.trim().to_lowercase(), page)
}

/// Keep the first entry for each (normalized text, page), preserving order.
pub fn dedup_entries(entries: Vec<OutlineEntry>) -> Vec<OutlineEntry> {
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter(|entry| seen.insert(dedup_key(&entry.text, entry.page)))
        .collect()
}
