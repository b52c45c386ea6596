// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module wires the inventory store to the UI components. Commands
//! coming back from the components are applied to the store; set fetches
//! run on a background thread and are polled once per frame.

use crate::io::fetcher::{FetchError, SetFetcher};
use crate::models::lego_set::LegoSet;
use crate::store::{Inventory, SearchTicket};
use crate::ui::{collection, search_bar, set_detail};
use crate::util::projection::PartQuery;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;

/// An outstanding background fetch.
struct PendingSearch {
    ticket: SearchTicket,
    receiver: Receiver<Result<LegoSet, FetchError>>,
}

/// Main application state.
pub struct PartMasterApp {
    /// The user's collection
    inventory: Inventory,

    /// Source of set data
    fetcher: Arc<dyn SetFetcher>,

    /// Text in the set number field
    search_input: String,

    /// Filter/sort settings of the detail view
    part_query: PartQuery,

    /// Background fetch, if one is running
    pending_search: Option<PendingSearch>,
}

impl PartMasterApp {
    /// Create a new application instance.
    pub fn new(inventory: Inventory, fetcher: Arc<dyn SetFetcher>) -> Self {
        Self {
            inventory,
            fetcher,
            search_input: String::new(),
            part_query: PartQuery::default(),
            pending_search: None,
        }
    }

    /// Start fetching a set in the background.
    fn start_search(&mut self, catalog_number: &str) {
        let Some(ticket) = self.inventory.begin_search(catalog_number) else {
            return;
        };

        let (sender, receiver) = channel();
        let fetcher = Arc::clone(&self.fetcher);
        let number = ticket.catalog_number.clone();

        std::thread::spawn(move || {
            let _ = sender.send(fetcher.fetch(&number));
        });

        self.pending_search = Some(PendingSearch { ticket, receiver });
    }

    /// Hand a finished background fetch to the store.
    fn poll_search(&mut self) {
        let Some(pending) = self.pending_search.take() else {
            return;
        };

        let outcome = match pending.receiver.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => {
                self.pending_search = Some(pending);
                return;
            }
            Err(TryRecvError::Disconnected) => {
                Err(FetchError::Unavailable("fetch worker exited without a result".to_string()))
            }
        };

        let opened_before = self.inventory.state().active_set_id.clone();
        self.inventory.finish_search(pending.ticket, outcome);
        if self.inventory.state().active_set_id != opened_before {
            self.part_query = PartQuery::default();
        }
    }

    fn open_set(&mut self, set_id: Option<&str>) {
        self.part_query = PartQuery::default();
        self.inventory.focus(set_id);
    }

    /// Export the inventory to a file chosen by the user.
    fn export_inventory(&self, default_name: &str, filter_name: &str, extensions: &[&str]) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter(filter_name, extensions)
            .set_file_name(default_name)
            .save_file()
        else {
            return;
        };

        match crate::io::serialization::export(self.inventory.state(), &path) {
            Ok(_) => log::info!("Exported inventory to {}", path.display()),
            Err(e) => log::error!("Failed to export inventory: {:#}", e),
        }
    }

    fn menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    ui.menu_button("Export Inventory", |ui| {
                        if ui.button("Export as JSON...").clicked() {
                            self.export_inventory("inventory.json", "JSON", &["json"]);
                            ui.close_menu();
                        }
                        if ui.button("Export as YAML...").clicked() {
                            self.export_inventory("inventory.yaml", "YAML", &["yaml", "yml"]);
                            ui.close_menu();
                        }
                    });
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });
    }

    fn error_banner(&mut self, ctx: &egui::Context) {
        let Some(message) = self.inventory.error().map(str::to_string) else {
            return;
        };

        egui::TopBottomPanel::top("error_banner")
            .frame(egui::Frame::default().fill(egui::Color32::from_rgb(200, 30, 30)).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(format!("⚠ {}", message)).strong().color(egui::Color32::WHITE));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("×").clicked() {
                            self.inventory.clear_error();
                        }
                    });
                });
            });
    }

    fn delete_dialog(&mut self, ctx: &egui::Context) {
        let Some(set) = self.inventory.pending_delete() else {
            return;
        };
        let prompt = format!("Remove {} [{}] from the inventory?", set.name, set.number);

        let mut confirmed = false;
        let mut cancelled = false;
        egui::Window::new("Delete set")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(prompt);
                ui.label(egui::RichText::new("This cannot be undone.").weak());
                ui.horizontal(|ui| {
                    confirmed = ui.button("Delete").clicked();
                    cancelled = ui.button("Cancel").clicked();
                });
            });

        if confirmed {
            self.inventory.confirm_delete();
        } else if cancelled || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.inventory.cancel_delete();
        }
    }
}

impl eframe::App for PartMasterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_search();

        // Keep repainting while a fetch is outstanding (spinner, polling)
        if self.pending_search.is_some() {
            ctx.request_repaint();
        }

        self.menu_bar(ctx);
        self.error_banner(ctx);
        self.delete_dialog(ctx);

        let active = self.inventory.active_set().cloned();
        egui::CentralPanel::default().show(ctx, |ui| match active {
            Some(set) => match set_detail::show(ui, &set, &mut self.part_query) {
                set_detail::DetailAction::Back => self.open_set(None),
                set_detail::DetailAction::UpdatePart(part_id, change) => {
                    self.inventory.update_part(&set.id, &part_id, change);
                }
                set_detail::DetailAction::None => {}
            },
            None => {
                ui.heading(egui::RichText::new("LEGO PartMaster").size(28.0).strong());
                ui.label(egui::RichText::new("Brick inventory system").small().weak());
                ui.add_space(12.0);

                let searching = self.inventory.is_searching();
                if let search_bar::SearchAction::Submit(number) =
                    search_bar::show(ui, &mut self.search_input, searching)
                {
                    self.start_search(&number);
                }

                match collection::show(ui, self.inventory.sets(), searching) {
                    collection::CollectionAction::Open(set_id) => self.open_set(Some(&set_id)),
                    collection::CollectionAction::Delete(set_id) => self.inventory.request_delete(&set_id),
                    collection::CollectionAction::None => {}
                }
            }
        });
    }
}
