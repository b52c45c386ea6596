// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application state.
//!
//! Holds the owned sets (newest first), the focused set, and the
//! transient request flags. Only `sets` and `activeSetId` are persisted.

use super::lego_set::LegoSet;
use serde::{Deserialize, Serialize};

/// Complete application state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    #[serde(default)]
    pub sets: Vec<LegoSet>,
    #[serde(default)]
    pub active_set_id: Option<String>,
    #[serde(skip)]
    pub is_searching: bool,
    #[serde(skip)]
    pub error: Option<String>,
}

impl AppState {
    /// Look up a set by id.
    pub fn set(&self, set_id: &str) -> Option<&LegoSet> {
        self.sets.iter().find(|s| s.id == set_id)
    }

    /// Look up a set by id for mutation.
    pub fn set_mut(&mut self, set_id: &str) -> Option<&mut LegoSet> {
        self.sets.iter_mut().find(|s| s.id == set_id)
    }

    /// The focused set, if any.
    pub fn active_set(&self) -> Option<&LegoSet> {
        self.active_set_id.as_deref().and_then(|id| self.set(id))
    }

    /// Restore invariants on freshly loaded state.
    ///
    /// Transient flags go back to their defaults, counts are clamped to
    /// their quantities, duplicate set ids are dropped (first wins), and a
    /// focus reference to a missing set is cleared.
    pub fn normalize(&mut self) {
        self.is_searching = false;
        self.error = None;

        let mut seen = std::collections::HashSet::new();
        self.sets.retain(|s| seen.insert(s.id.clone()));

        for set in &mut self.sets {
            for part in &mut set.parts {
                part.clamp_collected();
            }
        }

        if let Some(id) = self.active_set_id.as_deref() {
            if self.set(id).is_none() {
                log::warn!("Dropping focus on unknown set {}", id);
                self.active_set_id = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::part::LegoPart;

    fn set_with_id(id: &str) -> LegoSet {
        LegoSet {
            id: id.into(),
            number: "60198".into(),
            name: "Cargo Train".into(),
            theme: "City".into(),
            total_parts: 3,
            image_url: LegoSet::image_url_for("60198"),
            parts: vec![LegoPart::new("p1".into(), "Tile 1x2".into(), "White".into(), 3)],
            last_modified: 1,
            external_urls: Vec::new(),
        }
    }

    #[test]
    fn test_transient_fields_not_serialized() {
        let state = AppState {
            sets: vec![set_with_id("a")],
            active_set_id: Some("a".into()),
            is_searching: true,
            error: Some("boom".into()),
        };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["activeSetId"], "a");
        assert!(json.get("error").is_none());
        assert!(json.get("isSearching").is_none());
    }

    #[test]
    fn test_normalize_clamps_and_drops_dangling_focus() {
        let mut set = set_with_id("a");
        set.parts[0].collected = 9;
        let mut state = AppState {
            sets: vec![set, set_with_id("a")],
            active_set_id: Some("gone".into()),
            is_searching: true,
            error: Some("old".into()),
        };

        state.normalize();

        assert_eq!(state.sets.len(), 1);
        assert_eq!(state.sets[0].parts[0].collected, 3);
        assert_eq!(state.active_set_id, None);
        assert!(!state.is_searching);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_active_set_lookup() {
        let state = AppState {
            sets: vec![set_with_id("a"), set_with_id("b")],
            active_set_id: Some("b".into()),
            ..Default::default()
        };
        assert_eq!(state.active_set().map(|s| s.id.as_str()), Some("b"));
    }
}
