//! Largest-thumbnail selection.
//!
//! The API lists a handful of pre-rendered thumbnail sizes per video
//! (`default` through `maxres`); callers almost always want the biggest
//! one that exists.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single thumbnail variant as listed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnail {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

impl Thumbnail {
    /// Pixel area used for size comparison.
    #[must_use]
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// Thumbnail variants keyed by size name (`default`, `medium`, `high`,
/// `standard`, `maxres`). A `BTreeMap` keeps iteration order reproducible,
/// which makes [`largest`] deterministic when two variants tie on area.
pub type ThumbnailSet = BTreeMap<String, Thumbnail>;

/// Pick the variant with the greatest pixel area.
///
/// Only a strictly greater area replaces the current best, so among tied
/// variants the first name in key order wins; the result never changes
/// between runs for the same set. Empty set → `None`.
#[must_use]
pub fn largest(set: &ThumbnailSet) -> Option<&Thumbnail> {
    let mut best: Option<&Thumbnail> = None;
    for thumb in set.values() {
        if best.is_none_or(|b| thumb.area() > b.area()) {
            best = Some(thumb);
        }
    }
    best
}

/// URL of the largest variant, or `None` for an empty set.
#[must_use]
pub fn largest_url(set: &ThumbnailSet) -> Option<&str> {
    largest(set).map(|thumb| thumb.url.as_str())
}
