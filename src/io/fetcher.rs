// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Set data fetching.
//!
//! A fetcher turns a catalog number into a complete [`LegoSet`]. The raw
//! response document is validated against the expected schema and mapped
//! into a fresh set with every part uncollected.

use crate::models::{
    lego_set::{LegoSet, SourceLink},
    part::LegoPart,
};
use chrono::Utc;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

/// Why a fetch produced no set.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("no data for set {0}")]
    NotFound(String),

    #[error("source unavailable: {0}")]
    Unavailable(String),

    #[error("response contained no data")]
    EmptyResponse,

    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("invalid response: {0}")]
    Invalid(String),
}

/// Looks up set data by catalog number.
pub trait SetFetcher: Send + Sync {
    fn fetch(&self, catalog_number: &str) -> Result<LegoSet, FetchError>;
}

/// Raw response text plus any citations delivered alongside it.
#[derive(Debug, Clone, Default)]
pub struct CatalogDocument {
    pub body: String,
    pub sources: Vec<SourceLink>,
}

impl CatalogDocument {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            sources: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SetResponse {
    name: String,
    theme: String,
    total_parts: f64,
    parts: Vec<PartResponse>,
    #[serde(default)]
    sources: Vec<SourceLink>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PartResponse {
    name: String,
    color: String,
    quantity: f64,
    description: String,
    design_id: String,
    element_id: String,
}

/// Convert a JSON number into a count, rejecting anything that isn't a
/// non-negative whole number.
fn whole_count(value: f64, field: &str) -> Result<u32, FetchError> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(FetchError::Invalid(format!("{} must be a whole number >= 0, got {}", field, value)));
    }
    Ok(value as u32)
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Validate a response document and build a new set from it.
pub fn decode_set(catalog_number: &str, document: &CatalogDocument) -> Result<LegoSet, FetchError> {
    let body = document.body.trim();
    if body.is_empty() {
        return Err(FetchError::EmptyResponse);
    }

    let response: SetResponse = serde_json::from_str(body)?;

    let batch = Uuid::new_v4().simple().to_string();
    let mut parts = Vec::with_capacity(response.parts.len());
    for (index, raw) in response.parts.into_iter().enumerate() {
        let quantity = whole_count(raw.quantity, &format!("parts[{}].quantity", index))?;
        let element_id = non_empty(raw.element_id);
        let mut part = LegoPart::new(format!("part-{}-{}", batch, index), raw.name, raw.color, quantity);
        part.description = raw.description;
        part.image_url = element_id.as_deref().map(LegoPart::primary_image_url);
        part.element_id = element_id;
        part.design_id = non_empty(raw.design_id);
        parts.push(part);
    }

    let declared = whole_count(response.total_parts, "totalParts")?;
    let total_parts = if declared == 0 {
        parts.iter().map(|p| p.quantity).fold(0u32, u32::saturating_add)
    } else {
        declared
    };

    let mut external_urls = document.sources.clone();
    external_urls.extend(response.sources);

    Ok(LegoSet {
        id: format!("set-{}", Uuid::new_v4()),
        number: catalog_number.to_string(),
        name: response.name,
        theme: response.theme,
        total_parts,
        image_url: LegoSet::image_url_for(catalog_number),
        parts,
        last_modified: Utc::now().timestamp_millis(),
        external_urls,
    })
}

/// Reads response documents from `<dir>/<number>.json`.
pub struct LocalCatalogFetcher {
    dir: PathBuf,
}

impl LocalCatalogFetcher {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn document_path(&self, catalog_number: &str) -> Option<PathBuf> {
        let plain = !catalog_number.is_empty()
            && catalog_number != "."
            && catalog_number != ".."
            && !catalog_number.contains(['/', '\\']);
        plain.then(|| self.dir.join(format!("{}.json", catalog_number)))
    }
}

impl SetFetcher for LocalCatalogFetcher {
    fn fetch(&self, catalog_number: &str) -> Result<LegoSet, FetchError> {
        let path = self
            .document_path(catalog_number)
            .ok_or_else(|| FetchError::NotFound(catalog_number.to_string()))?;

        let body = match std::fs::read_to_string(&path) {
            Ok(body) => body,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(FetchError::NotFound(catalog_number.to_string()));
            }
            Err(e) => return Err(FetchError::Unavailable(format!("{}: {}", path.display(), e))),
        };

        log::debug!("Read catalog document {}", path.display());
        decode_set(catalog_number, &CatalogDocument::new(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CASTLE: &str = r#"{
        "name": "Lion Knights' Castle",
        "theme": "Icons",
        "totalParts": 0,
        "parts": [
            {"name": "Brick 1x2", "color": "Light Bluish Gray", "quantity": 12,
             "description": "Wall brick", "designId": "3004", "elementId": "4211388"},
            {"name": "Axle 3", "color": "Black", "quantity": 4,
             "description": "", "designId": "4519", "elementId": ""}
        ],
        "sources": [{"title": "Rebrickable", "uri": "https://rebrickable.com/sets/10305-1/"}]
    }"#;

    #[test]
    fn test_decode_maps_parts() {
        let mut document = CatalogDocument::new(CASTLE);
        document.sources.push(SourceLink {
            title: "BrickLink".into(),
            uri: "https://www.bricklink.com/v2/catalog/catalogitem.page?S=10305-1".into(),
        });

        let set = decode_set("10305", &document).unwrap();

        assert!(set.id.starts_with("set-"));
        assert_eq!(set.number, "10305");
        assert_eq!(set.total_parts, 16);
        assert_eq!(set.image_url, "https://images.brickset.com/sets/images/10305-1.jpg");
        assert_eq!(set.parts.len(), 2);
        assert!(set.parts.iter().all(|p| p.collected == 0));
        assert_ne!(set.parts[0].id, set.parts[1].id);

        let brick = &set.parts[0];
        assert_eq!(brick.element_id.as_deref(), Some("4211388"));
        assert_eq!(brick.image_url.as_deref(), Some("https://www.lego.com/service/bricks/5/2/4211388"));

        let axle = &set.parts[1];
        assert_eq!(axle.element_id, None);
        assert_eq!(axle.image_url, None);
        assert_eq!(axle.design_id.as_deref(), Some("4519"));

        let titles: Vec<_> = set.external_urls.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["BrickLink", "Rebrickable"]);
    }

    #[test]
    fn test_declared_total_kept() {
        let body = r#"{"name":"N","theme":"T","totalParts":99,"parts":[]}"#;
        let set = decode_set("1", &CatalogDocument::new(body)).unwrap();
        assert_eq!(set.total_parts, 99);
        assert!(set.parts.is_empty());
    }

    #[test]
    fn test_empty_body() {
        assert!(matches!(
            decode_set("1", &CatalogDocument::new("  \n")),
            Err(FetchError::EmptyResponse)
        ));
    }

    #[test]
    fn test_not_json() {
        assert!(matches!(
            decode_set("1", &CatalogDocument::new("Sorry, I can't help with that.")),
            Err(FetchError::Malformed(_))
        ));
    }

    #[test]
    fn test_missing_required_part_field() {
        let body = r#"{"name":"N","theme":"T","totalParts":1,
            "parts":[{"name":"Brick","color":"Red","quantity":1,"description":"","designId":"3001"}]}"#;
        assert!(matches!(
            decode_set("1", &CatalogDocument::new(body)),
            Err(FetchError::Malformed(_))
        ));
    }

    #[test]
    fn test_negative_quantity_rejected() {
        let body = r#"{"name":"N","theme":"T","totalParts":1,
            "parts":[{"name":"Brick","color":"Red","quantity":-2,"description":"","designId":"3001","elementId":"300121"}]}"#;
        assert!(matches!(
            decode_set("1", &CatalogDocument::new(body)),
            Err(FetchError::Invalid(_))
        ));
    }

    #[test]
    fn test_local_fetcher_reads_document() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("10305.json"), CASTLE).unwrap();
        let fetcher = LocalCatalogFetcher::new(dir.path());

        let set = fetcher.fetch("10305").unwrap();
        assert_eq!(set.name, "Lion Knights' Castle");
    }

    #[test]
    fn test_local_fetcher_missing_and_unsafe_numbers() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = LocalCatalogFetcher::new(dir.path());

        assert!(matches!(fetcher.fetch("75192"), Err(FetchError::NotFound(_))));
        assert!(matches!(fetcher.fetch("../secret"), Err(FetchError::NotFound(_))));
        assert!(matches!(fetcher.fetch(".."), Err(FetchError::NotFound(_))));
    }
}
