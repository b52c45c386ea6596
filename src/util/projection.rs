// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Part list filtering and sorting.
//!
//! This module derives the display order of a set's parts from the
//! current search term, sort key and "hide completed" flag. The source
//! list is never modified.

use crate::models::part::LegoPart;
use std::cmp::Ordering;

/// Column the part list is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Name,
    Color,
    ElementId,
    Status,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [SortKey::Name, SortKey::Color, SortKey::ElementId, SortKey::Status];

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Name => "Name (A-Z)",
            SortKey::Color => "Color",
            SortKey::ElementId => "Element ID",
            SortKey::Status => "Completion",
        }
    }
}

/// View settings for the part list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartQuery {
    pub search: String,
    pub sort: SortKey,
    pub hide_completed: bool,
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn matches_search(part: &LegoPart, needle: &str) -> bool {
    contains_folded(&part.name, needle)
        || contains_folded(&part.color, needle)
        || part.element_id.as_deref().is_some_and(|id| contains_folded(id, needle))
        || part.design_id.as_deref().is_some_and(|id| contains_folded(id, needle))
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn compare(a: &LegoPart, b: &LegoPart, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => compare_text(&a.name, &b.name),
        SortKey::Color => compare_text(&a.color, &b.color),
        SortKey::ElementId => compare_text(
            a.element_id.as_deref().unwrap_or(""),
            b.element_id.as_deref().unwrap_or(""),
        ),
        SortKey::Status => a.completion_ratio().total_cmp(&b.completion_ratio()),
    }
}

/// Apply a query to a part list.
///
/// Completed parts are dropped first (if requested), then parts not
/// matching the search term, then the rest is stably sorted. Equal keys
/// keep their original relative order.
pub fn project_parts<'a>(parts: &'a [LegoPart], query: &PartQuery) -> Vec<&'a LegoPart> {
    let needle = query.search.trim().to_lowercase();

    let mut list: Vec<&LegoPart> = parts
        .iter()
        .filter(|p| !(query.hide_completed && p.is_complete()))
        .filter(|p| needle.is_empty() || matches_search(p, &needle))
        .collect();

    // slice::sort_by is stable
    list.sort_by(|a, b| compare(a, b, query.sort));
    list
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part(name: &str, color: &str, collected: u32, quantity: u32) -> LegoPart {
        let mut p = LegoPart::new(format!("id-{}", name), name.into(), color.into(), quantity);
        p.collected = collected;
        p
    }

    fn names(list: &[&LegoPart]) -> Vec<String> {
        list.iter().map(|p| p.name.clone()).collect()
    }

    fn brick_and_axle() -> Vec<LegoPart> {
        vec![part("Brick", "Red", 2, 2), part("Axle", "Black", 0, 4)]
    }

    #[test]
    fn test_hide_completed() {
        let parts = brick_and_axle();
        let query = PartQuery {
            hide_completed: true,
            ..Default::default()
        };
        assert_eq!(names(&project_parts(&parts, &query)), vec!["Axle"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let parts = brick_and_axle();
        let query = PartQuery {
            search: "bri".into(),
            ..Default::default()
        };
        assert_eq!(names(&project_parts(&parts, &query)), vec!["Brick"]);
    }

    #[test]
    fn test_search_matches_color_and_ids() {
        let mut parts = brick_and_axle();
        parts[1].design_id = Some("3705".into());
        parts[0].element_id = Some("300121".into());

        let by_color = PartQuery {
            search: "BLACK".into(),
            ..Default::default()
        };
        assert_eq!(names(&project_parts(&parts, &by_color)), vec!["Axle"]);

        let by_design = PartQuery {
            search: "3705".into(),
            ..Default::default()
        };
        assert_eq!(names(&project_parts(&parts, &by_design)), vec!["Axle"]);

        let by_element = PartQuery {
            search: " 3001 ".into(),
            ..Default::default()
        };
        assert_eq!(names(&project_parts(&parts, &by_element)), vec!["Brick"]);
    }

    #[test]
    fn test_sort_by_status_ascending() {
        let parts = vec![part("A", "Red", 3, 4), part("B", "Red", 1, 4)];
        let query = PartQuery {
            sort: SortKey::Status,
            ..Default::default()
        };
        assert_eq!(names(&project_parts(&parts, &query)), vec!["B", "A"]);

        let parts = vec![part("A", "Red", 1, 4), part("B", "Red", 3, 4)];
        assert_eq!(names(&project_parts(&parts, &query)), vec!["A", "B"]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let parts = vec![
            part("Tile", "White", 0, 1),
            part("Plate", "Red", 0, 1),
            part("Slope", "White", 0, 1),
            part("Brick", "Red", 0, 1),
        ];
        let query = PartQuery {
            sort: SortKey::Color,
            ..Default::default()
        };
        assert_eq!(
            names(&project_parts(&parts, &query)),
            vec!["Plate", "Brick", "Tile", "Slope"]
        );
    }

    #[test]
    fn test_sort_by_element_id_missing_first() {
        let mut parts = vec![part("A", "Red", 0, 1), part("B", "Red", 0, 1), part("C", "Red", 0, 1)];
        parts[0].element_id = Some("6000".into());
        parts[2].element_id = Some("4000".into());
        let query = PartQuery {
            sort: SortKey::ElementId,
            ..Default::default()
        };
        assert_eq!(names(&project_parts(&parts, &query)), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_projection_is_idempotent_and_non_mutating() {
        let parts = vec![part("b", "Red", 0, 1), part("A", "Blue", 1, 1), part("c", "Green", 0, 2)];
        let before = parts.clone();
        let query = PartQuery::default();

        let first = names(&project_parts(&parts, &query));
        let second = names(&project_parts(&parts, &query));
        assert_eq!(first, vec!["A", "b", "c"]);
        assert_eq!(first, second);
        assert_eq!(parts, before);
    }
}
