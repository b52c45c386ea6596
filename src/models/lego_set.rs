// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Set data structures.
//!
//! A set owns its ordered part list. Parts never come or go after the set
//! is created; only their collected counts change.

use super::part::{LegoPart, PartChange};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Base URL of the set box art images.
const SET_IMAGE_BASE: &str = "https://images.brickset.com/sets/images";

/// A cited web page the set data was sourced from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLink {
    pub title: String,
    pub uri: String,
}

/// A tracked set and its parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegoSet {
    pub id: String,
    pub number: String,
    pub name: String,
    pub theme: String,
    pub total_parts: u32,
    pub image_url: String,
    pub parts: Vec<LegoPart>,
    /// Milliseconds since the Unix epoch.
    pub last_modified: i64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub external_urls: Vec<SourceLink>,
}

impl LegoSet {
    /// Box art address for a catalog number.
    pub fn image_url_for(number: &str) -> String {
        format!("{}/{}-1.jpg", SET_IMAGE_BASE, number)
    }

    /// Apply a change to one part. Returns false if the part is unknown.
    pub fn update_part(&mut self, part_id: &str, change: PartChange) -> bool {
        let Some(part) = self.parts.iter_mut().find(|p| p.id == part_id) else {
            return false;
        };
        part.apply(change);
        self.touch();
        true
    }

    /// Stamp the set as modified now.
    pub fn touch(&mut self) {
        self.last_modified = Utc::now().timestamp_millis();
    }

    /// Number of pieces collected across all parts.
    pub fn collected_count(&self) -> u64 {
        self.parts.iter().map(|p| u64::from(p.collected)).sum()
    }

    /// Number of pieces required across all parts.
    pub fn required_count(&self) -> u64 {
        self.parts.iter().map(|p| u64::from(p.quantity)).sum()
    }

    /// Completion as a whole percentage (0 when nothing is required).
    pub fn progress_percent(&self) -> u32 {
        let required = self.required_count();
        if required == 0 {
            return 0;
        }
        ((self.collected_count() as f64 / required as f64) * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_set() -> LegoSet {
        let mut brick = LegoPart::new("p1".into(), "Brick 2x4".into(), "Red".into(), 2);
        brick.collected = 1;
        let axle = LegoPart::new("p2".into(), "Axle 3".into(), "Black".into(), 4);
        LegoSet {
            id: "set-1".into(),
            number: "10305".into(),
            name: "Lion Knights' Castle".into(),
            theme: "Icons".into(),
            total_parts: 6,
            image_url: LegoSet::image_url_for("10305"),
            parts: vec![brick, axle],
            last_modified: 0,
            external_urls: Vec::new(),
        }
    }

    #[test]
    fn test_progress_percent() {
        let set = sample_set();
        assert_eq!(set.collected_count(), 1);
        assert_eq!(set.required_count(), 6);
        assert_eq!(set.progress_percent(), 17);
    }

    #[test]
    fn test_progress_percent_empty_set() {
        let mut set = sample_set();
        set.parts.clear();
        assert_eq!(set.progress_percent(), 0);
    }

    #[test]
    fn test_update_part_touches_set() {
        let mut set = sample_set();
        assert!(set.update_part("p2", PartChange::Fill));
        assert_eq!(set.parts[1].collected, 4);
        assert!(set.last_modified > 0);
    }

    #[test]
    fn test_update_unknown_part_is_noop() {
        let mut set = sample_set();
        let before = set.clone();
        assert!(!set.update_part("nope", PartChange::Increment));
        assert_eq!(set, before);
    }

    #[test]
    fn test_image_url_for() {
        assert_eq!(
            LegoSet::image_url_for("10305"),
            "https://images.brickset.com/sets/images/10305-1.jpg"
        );
    }
}
