// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Runtime configuration.
//!
//! Locations are taken from environment variables when set, otherwise
//! from the platform data directory.

use std::path::PathBuf;

const APP_DIR: &str = "partmaster";
const DATA_DIR_VAR: &str = "PARTMASTER_DATA_DIR";
const CATALOG_DIR_VAR: &str = "PARTMASTER_CATALOG_DIR";

/// Where the app keeps its files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding the saved inventory.
    pub data_dir: PathBuf,
    /// Directory of set response documents for the local fetcher.
    pub catalog_dir: PathBuf,
}

impl AppConfig {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Self {
        Self::resolve(|name| std::env::var_os(name).map(PathBuf::from))
    }

    fn resolve(lookup: impl Fn(&str) -> Option<PathBuf>) -> Self {
        let data_dir = lookup(DATA_DIR_VAR).unwrap_or_else(|| {
            let mut path = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
            path.push(APP_DIR);
            path
        });
        let catalog_dir = lookup(CATALOG_DIR_VAR).unwrap_or_else(|| data_dir.join("catalog"));
        Self { data_dir, catalog_dir }
    }
}
