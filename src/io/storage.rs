// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Durable key-value storage for the application state.
//!
//! The whole state is kept as one JSON document under a fixed key.
//! Reading falls back to an empty state if the stored document is
//! missing or corrupt.

use crate::models::inventory::AppState;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Key the application state is stored under.
pub const STATE_KEY: &str = "lego_part_master_state";

/// A string key-value store.
pub trait KeyValueStore: Send {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Stores each key as `<dir>/<key>.json`.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read {:?}", path)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create data directory {:?}", self.dir))?;
        let path = self.path_for(key);
        std::fs::write(&path, value).with_context(|| format!("Failed to write {:?}", path))?;
        Ok(())
    }
}

/// In-memory store for tests.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore {
    pub entries: std::collections::HashMap<String, String>,
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Load the application state, falling back to an empty state.
pub fn load_state(store: &dyn KeyValueStore) -> AppState {
    let raw = match store.get(STATE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            log::info!("No saved inventory, starting empty");
            return AppState::default();
        }
        Err(e) => {
            log::error!("Failed to read saved inventory: {:#}", e);
            return AppState::default();
        }
    };

    match serde_json::from_str::<AppState>(&raw) {
        Ok(mut state) => {
            state.normalize();
            log::info!("Loaded inventory with {} set(s)", state.sets.len());
            state
        }
        Err(e) => {
            log::error!("Failed to parse saved inventory: {}", e);
            AppState::default()
        }
    }
}

/// Write the application state under [`STATE_KEY`].
pub fn save_state(store: &mut dyn KeyValueStore, state: &AppState) -> Result<()> {
    let json = serde_json::to_string(state).context("Failed to serialize inventory")?;
    store.set(STATE_KEY, &json)
}
