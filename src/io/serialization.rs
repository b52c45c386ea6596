// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Inventory export.
//!
//! This module writes a snapshot of the inventory to a user-chosen file
//! in YAML or JSON format.

use crate::models::inventory::AppState;
use anyhow::{bail, Result};
use std::path::Path;

/// Export the inventory to YAML format.
pub fn export_yaml(data: &AppState, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(data)?;
    std::fs::write(path, yaml)?;
    Ok(())
}

/// Export the inventory to JSON format.
pub fn export_json(data: &AppState, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Export the inventory, choosing the format from the file extension.
pub fn export(data: &AppState, path: &Path) -> Result<()> {
    let extension = path.extension().and_then(|s| s.to_str());
    match extension {
        Some("yaml") | Some("yml") => export_yaml(data, path),
        Some("json") => export_json(data, path),
        _ => bail!("Unsupported file extension: {:?}", extension),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{lego_set::LegoSet, part::LegoPart};

    fn sample_state() -> AppState {
        AppState {
            sets: vec![LegoSet {
                id: "set-x".into(),
                number: "31109".into(),
                name: "Pirate Ship".into(),
                theme: "Creator".into(),
                total_parts: 2,
                image_url: LegoSet::image_url_for("31109"),
                parts: vec![LegoPart::new("p".into(), "Slope 45".into(), "Blue".into(), 2)],
                last_modified: 42,
                external_urls: Vec::new(),
            }],
            active_set_id: None,
            ..Default::default()
        }
    }

    #[test]
    fn test_export_json_is_readable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        export(&sample_state(), &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let parsed: AppState = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.sets[0].name, "Pirate Ship");
    }

    #[test]
    fn test_export_yaml_uses_camel_case_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.yml");
        export(&sample_state(), &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("totalParts: 2"));
        let parsed: AppState = serde_yaml::from_str(&text).unwrap();
        assert_eq!(parsed.sets[0].number, "31109");
    }

    #[test]
    fn test_export_rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        assert!(export(&sample_state(), &dir.path().join("inventory.csv")).is_err());
    }
}
