// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Collection overview.
//!
//! Shows one card per owned set with its completion progress.

use crate::models::lego_set::LegoSet;

const CARD_WIDTH: f32 = 220.0;

/// Result of collection interaction.
pub enum CollectionAction {
    None,
    Open(String),
    Delete(String),
}

/// Display the collection grid, or a hint when it is empty.
pub fn show(ui: &mut egui::Ui, sets: &[LegoSet], is_searching: bool) -> CollectionAction {
    let mut action = CollectionAction::None;

    if sets.is_empty() {
        if !is_searching {
            ui.add_space(40.0);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("YOUR INVENTORY IS EMPTY").strong().weak());
                ui.label(
                    egui::RichText::new("Enter a set number above to start collecting")
                        .small()
                        .weak(),
                );
            });
        }
        return action;
    }

    ui.add_space(16.0);
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(format!("MY COLLECTION ({})", sets.len())).strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(format!("Last sync: {}", chrono::Local::now().format("%H:%M:%S")))
                    .small()
                    .weak(),
            );
        });
    });
    ui.separator();

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.horizontal_wrapped(|ui| {
            for set in sets {
                match card(ui, set) {
                    CollectionAction::None => {}
                    other => action = other,
                }
            }
        });
    });

    action
}

fn card(ui: &mut egui::Ui, set: &LegoSet) -> CollectionAction {
    let mut action = CollectionAction::None;

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(CARD_WIDTH);
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&set.number).monospace().strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("×").on_hover_text("Remove from inventory").clicked() {
                        action = CollectionAction::Delete(set.id.clone());
                    }
                });
            });
            ui.label(egui::RichText::new(&set.theme).small().weak());
            if ui
                .add(egui::Label::new(egui::RichText::new(&set.name).strong()).truncate().sense(egui::Sense::click()))
                .clicked()
            {
                action = CollectionAction::Open(set.id.clone());
            }

            let percent = set.progress_percent();
            ui.add(
                egui::ProgressBar::new(percent as f32 / 100.0)
                    .text(format!("{}% COMPLETE", percent)),
            );
            ui.horizontal(|ui| {
                if ui.button("Open").clicked() {
                    action = CollectionAction::Open(set.id.clone());
                }
                ui.hyperlink_to("Box art", &set.image_url);
            });
        });
    });

    action
}
