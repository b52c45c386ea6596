// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Inventory state store.
//!
//! The store owns the application state and is the only place it is
//! mutated. Every command persists the full state afterwards. The UI reads
//! state through accessors and issues commands; it never edits the state
//! directly.

use crate::io::{
    fetcher::{FetchError, SetFetcher},
    storage::{self, KeyValueStore},
};
use crate::models::{inventory::AppState, lego_set::LegoSet, part::PartChange};

/// Message shown when a set could not be fetched.
pub const SEARCH_FAILED_MESSAGE: &str = "ERROR: Set not found or connection problem.";

/// Proof that a search was started; hand it back with the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub catalog_number: String,
}

/// Owns the inventory and applies user commands to it.
pub struct Inventory {
    state: AppState,
    storage: Box<dyn KeyValueStore>,
    pending_delete: Option<String>,
}

impl Inventory {
    /// Open the inventory, rehydrating whatever the store holds.
    pub fn open(storage: Box<dyn KeyValueStore>) -> Self {
        let state = storage::load_state(&*storage);
        Self {
            state,
            storage,
            pending_delete: None,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn sets(&self) -> &[LegoSet] {
        &self.state.sets
    }

    pub fn active_set(&self) -> Option<&LegoSet> {
        self.state.active_set()
    }

    pub fn is_searching(&self) -> bool {
        self.state.is_searching
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    /// The set awaiting delete confirmation, if it still exists.
    pub fn pending_delete(&self) -> Option<&LegoSet> {
        self.pending_delete.as_deref().and_then(|id| self.state.set(id))
    }

    fn persist(&mut self) {
        if let Err(e) = storage::save_state(&mut *self.storage, &self.state) {
            log::warn!("Failed to save inventory: {:#}", e);
        }
    }

    /// Start a search for a catalog number.
    ///
    /// Returns `None` (and changes nothing) if the number is blank or a
    /// search is already outstanding.
    pub fn begin_search(&mut self, catalog_number: &str) -> Option<SearchTicket> {
        let catalog_number = catalog_number.trim();
        if catalog_number.is_empty() {
            return None;
        }
        if self.state.is_searching {
            log::warn!("Ignoring search for {}: another search is in progress", catalog_number);
            return None;
        }

        self.state.is_searching = true;
        self.state.error = None;
        self.persist();
        log::info!("Searching for set {}", catalog_number);
        Some(SearchTicket {
            catalog_number: catalog_number.to_string(),
        })
    }

    /// Finish a search started with [`Inventory::begin_search`].
    pub fn finish_search(&mut self, ticket: SearchTicket, outcome: Result<LegoSet, FetchError>) {
        if !self.state.is_searching {
            log::warn!("Dropping result for {}: no search outstanding", ticket.catalog_number);
            return;
        }
        self.state.is_searching = false;

        match outcome {
            Ok(set) if self.state.set(&set.id).is_some() => {
                log::error!("Fetched set {} reused existing id {}", ticket.catalog_number, set.id);
                self.state.error = Some(SEARCH_FAILED_MESSAGE.to_string());
            }
            Ok(set) => {
                log::info!("Added set {} ({}) with {} parts", set.number, set.name, set.parts.len());
                self.state.active_set_id = Some(set.id.clone());
                self.state.sets.insert(0, set);
            }
            Err(e) => {
                log::error!("Failed to fetch set {}: {}", ticket.catalog_number, e);
                self.state.error = Some(SEARCH_FAILED_MESSAGE.to_string());
            }
        }
        self.persist();
    }

    /// Run a whole search on the current thread.
    ///
    /// Returns false if the search could not be started.
    pub fn search(&mut self, fetcher: &dyn SetFetcher, catalog_number: &str) -> bool {
        let Some(ticket) = self.begin_search(catalog_number) else {
            return false;
        };
        let outcome = fetcher.fetch(&ticket.catalog_number);
        self.finish_search(ticket, outcome);
        true
    }

    /// Change the collected count of one part.
    pub fn update_part(&mut self, set_id: &str, part_id: &str, change: PartChange) {
        let Some(set) = self.state.set_mut(set_id) else {
            log::warn!("Ignoring part update for unknown set {}", set_id);
            return;
        };
        if !set.update_part(part_id, change) {
            log::warn!("Ignoring update for unknown part {} in set {}", part_id, set_id);
            return;
        }
        log::debug!("Part {} in set {}: {:?}", part_id, set_id, change);
        self.persist();
    }

    /// Ask to delete a set. Nothing is removed until [`Inventory::confirm_delete`].
    pub fn request_delete(&mut self, set_id: &str) {
        if self.state.set(set_id).is_some() {
            self.pending_delete = Some(set_id.to_string());
        } else {
            log::warn!("Ignoring delete request for unknown set {}", set_id);
        }
    }

    /// Drop a pending delete request.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Delete the set named by the pending request. Returns true if a set was removed.
    pub fn confirm_delete(&mut self) -> bool {
        let Some(set_id) = self.pending_delete.take() else {
            return false;
        };
        let before = self.state.sets.len();
        self.state.sets.retain(|s| s.id != set_id);
        if self.state.sets.len() == before {
            return false;
        }
        if self.state.active_set_id.as_deref() == Some(set_id.as_str()) {
            self.state.active_set_id = None;
        }
        log::info!("Deleted set {}, {} remaining", set_id, self.state.sets.len());
        self.persist();
        true
    }

    /// Focus a set, or clear focus with `None`. Unknown ids are ignored.
    pub fn focus(&mut self, set_id: Option<&str>) {
        match set_id {
            Some(id) if self.state.set(id).is_none() => {
                log::warn!("Ignoring focus on unknown set {}", id);
            }
            _ => {
                self.state.active_set_id = set_id.map(str::to_string);
                self.persist();
            }
        }
    }

    /// Dismiss the error banner.
    pub fn clear_error(&mut self) {
        self.state.error = None;
        self.persist();
    }
}
