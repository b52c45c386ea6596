// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! PartMaster - LEGO set parts inventory
//!
//! A desktop application for tracking which parts of a LEGO set have
//! been collected. Set part lists come from a pluggable fetcher and the
//! inventory is saved locally after every change.

mod app;
mod config;
mod io;
mod models;
mod store;
mod ui;
mod util;

use anyhow::Result;
use app::PartMasterApp;
use config::AppConfig;
use io::{fetcher::LocalCatalogFetcher, storage::FileStore};
use std::sync::Arc;
use store::Inventory;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config = AppConfig::from_env();
    log::info!(
        "Data directory: {}, catalog directory: {}",
        config.data_dir.display(),
        config.catalog_dir.display()
    );

    let inventory = Inventory::open(Box::new(FileStore::new(&config.data_dir)));
    let fetcher = Arc::new(LocalCatalogFetcher::new(&config.catalog_dir));

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("LEGO PartMaster"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "PartMaster",
        options,
        Box::new(move |_cc| Ok(Box::new(PartMasterApp::new(inventory, fetcher)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
