//! Size-to-level mapping.
//!
//! Ranks the distinct font sizes of heading candidates into an H1..H4
//! hierarchy. True heading tiers are used sparingly, so sizes that recur
//! more often than `max_occurrences` are treated as body-like text unless
//! that would leave fewer than `min_levels` tiers.

use std::collections::BTreeMap;

use super::options::LevelOptions;
use crate::model::{size_key, HeadingLevel};

/// Mapping from font size to heading level for one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelMap {
    /// (size key, level), largest size first
    entries: Vec<(i32, HeadingLevel)>,
}

impl LevelMap {
    /// Build the map from the sizes of all heading candidates.
    pub fn build(sizes: &[f32], options: &LevelOptions) -> Self {
        let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
        for &size in sizes {
            if size.is_finite() {
                *counts.entry(size_key(size)).or_insert(0) += 1;
            }
        }

        // Distinct sizes, largest first
        let distinct: Vec<i32> = counts.keys().rev().copied().collect();

        let mut tiers: Vec<i32> = distinct
            .iter()
            .copied()
            .filter(|key| {
                let count = counts[key];
                count >= options.min_occurrences && count <= options.max_occurrences
            })
            .collect();

        if tiers.len() < options.min_levels {
            log::debug!(
                "Only {} heading tier(s) within occurrence window, using top sizes",
                tiers.len()
            );
            tiers = distinct.into_iter().take(HeadingLevel::ALL.len()).collect();
        }

        let max_levels = options.max_levels.min(HeadingLevel::ALL.len());
        let entries = tiers
            .into_iter()
            .take(max_levels)
            .enumerate()
            .filter_map(|(rank, key)| HeadingLevel::from_rank(rank).map(|level| (key, level)))
            .collect();

        Self { entries }
    }

    /// Level assigned to a font size, if any.
    pub fn level_for(&self, size: f32) -> Option<HeadingLevel> {
        let key = size_key(size);
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, level)| *level)
    }

    /// Font size assigned to a level, if any.
    pub fn size_for(&self, level: HeadingLevel) -> Option<f32> {
        self.entries
            .iter()
            .find(|(_, l)| *l == level)
            .map(|(k, _)| *k as f32 / 100.0)
    }

    /// Iterate over (size, level) pairs, largest size first.
    pub fn iter(&self) -> impl Iterator<Item = (f32, HeadingLevel)> + '_ {
        self.entries.iter().map(|(k, l)| (*k as f32 / 100.0, *l))
    }

    /// Whether a level is present in the map.
    pub fn contains_level(&self, level: HeadingLevel) -> bool {
        self.entries.iter().any(|(_, l)| *l == level)
    }

    /// Number of levels.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
