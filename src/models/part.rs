// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Part data structures.
//!
//! A part is one distinct brick type inside a set, with the quantity the
//! set requires and how many of them have been collected so far.

use serde::{Deserialize, Serialize};

/// Base URL of the official LEGO brick image service (keyed by element ID).
const LEGO_IMAGE_BASE: &str = "https://www.lego.com/service/bricks/5/2";

/// Base URL of the BrickLink part image catalog (keyed by design ID).
const BRICKLINK_IMAGE_BASE: &str = "https://img.bricklink.com/ItemImage/PN/0";

/// How a part's collected count should change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartChange {
    /// One more piece found.
    Increment,
    /// One piece taken back.
    Decrement,
    /// Mark the part as fully collected.
    Fill,
}

/// A single part entry within a set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegoPart {
    pub id: String,
    pub name: String,
    pub color: String,
    pub quantity: u32,
    pub collected: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl LegoPart {
    /// Create an uncollected part.
    pub fn new(id: String, name: String, color: String, quantity: u32) -> Self {
        Self {
            id,
            name,
            color,
            quantity,
            collected: 0,
            description: String::new(),
            element_id: None,
            design_id: None,
            image_url: None,
        }
    }

    /// Apply a collection change, keeping `0 <= collected <= quantity`.
    pub fn apply(&mut self, change: PartChange) {
        self.collected = match change {
            PartChange::Fill => self.quantity,
            PartChange::Increment => self.collected.saturating_add(1).min(self.quantity),
            PartChange::Decrement => self.collected.saturating_sub(1).min(self.quantity),
        };
    }

    /// Check if every required piece has been collected.
    pub fn is_complete(&self) -> bool {
        self.collected >= self.quantity
    }

    /// Fraction of the part collected. A part that requires nothing counts as done.
    pub fn completion_ratio(&self) -> f64 {
        if self.quantity == 0 {
            1.0
        } else {
            f64::from(self.collected) / f64::from(self.quantity)
        }
    }

    /// Pull a stored count back into range after loading untrusted data.
    pub fn clamp_collected(&mut self) {
        self.collected = self.collected.min(self.quantity);
    }

    /// Primary image address for an element ID.
    pub fn primary_image_url(element_id: &str) -> String {
        format!("{}/{}", LEGO_IMAGE_BASE, element_id)
    }

    /// Image addresses to try, in order, until one loads.
    pub fn image_candidates(&self) -> Vec<String> {
        let mut candidates = Vec::new();
        if let Some(url) = self.image_url.as_deref().filter(|u| !u.is_empty()) {
            candidates.push(url.to_string());
        }
        if let Some(design_id) = self.design_id.as_deref().filter(|d| !d.is_empty()) {
            candidates.push(format!("{}/{}.png", BRICKLINK_IMAGE_BASE, design_id));
        }
        candidates
    }
}
