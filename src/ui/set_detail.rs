// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Set detail view.
//!
//! This module shows a single set's parts with filter, search and sort
//! controls, and the buttons that change collected counts.

use crate::models::{
    lego_set::LegoSet,
    part::{LegoPart, PartChange},
};
use crate::util::projection::{project_parts, PartQuery, SortKey};

/// Result of detail view interaction.
pub enum DetailAction {
    None,
    Back,
    UpdatePart(String, PartChange),
}

/// Display the detail view for a set.
pub fn show(ui: &mut egui::Ui, set: &LegoSet, query: &mut PartQuery) -> DetailAction {
    let mut action = header(ui, set);
    ui.add_space(8.0);

    ui.horizontal_top(|ui| {
        ui.vertical(|ui| {
            ui.set_width(200.0);
            filters(ui, query);
            if !set.external_urls.is_empty() {
                ui.add_space(8.0);
                sources(ui, set);
            }
        });
        ui.separator();
        ui.vertical(|ui| {
            if let Some(change) = part_table(ui, set, query) {
                action = change;
            }
        });
    });

    action
}

fn header(ui: &mut egui::Ui, set: &LegoSet) -> DetailAction {
    let mut action = DetailAction::None;
    ui.horizontal(|ui| {
        if ui.button("← Back").clicked() {
            action = DetailAction::Back;
        }
        ui.vertical(|ui| {
            ui.heading(format!("{} [{}]", set.name, set.number));
            ui.label(egui::RichText::new(format!("{} · {} parts", set.theme, set.total_parts)).small().weak());
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let percent = set.progress_percent();
            ui.add(
                egui::ProgressBar::new(percent as f32 / 100.0)
                    .desired_width(260.0)
                    .text(format!("Progress {}% ({}/{})", percent, set.collected_count(), set.required_count())),
            );
        });
    });
    action
}

fn filters(ui: &mut egui::Ui, query: &mut PartQuery) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.label(egui::RichText::new("FILTERS").strong());
        ui.add(
            egui::TextEdit::singleline(&mut query.search)
                .hint_text("Search part / ID...")
                .desired_width(f32::INFINITY),
        );
        egui::ComboBox::from_id_source("part_sort")
            .selected_text(query.sort.label())
            .show_ui(ui, |ui| {
                for key in SortKey::ALL {
                    ui.selectable_value(&mut query.sort, key, key.label());
                }
            });
        ui.checkbox(&mut query.hide_completed, "Hide completed");
    });
}

fn sources(ui: &mut egui::Ui, set: &LegoSet) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.label(egui::RichText::new("SOURCES").strong());
        for link in &set.external_urls {
            ui.hyperlink_to(link.title.as_str(), &link.uri);
        }
    });
}

fn part_table(ui: &mut egui::Ui, set: &LegoSet, query: &PartQuery) -> Option<DetailAction> {
    let parts = project_parts(&set.parts, query);
    let mut action = None;

    if parts.is_empty() {
        ui.label(egui::RichText::new("No parts match the current filters").weak());
        return None;
    }

    egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
        egui::Grid::new("part_table")
            .num_columns(3)
            .striped(true)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label(egui::RichText::new("PART").strong());
                ui.label(egui::RichText::new("DESCRIPTION").strong());
                ui.label(egui::RichText::new("QUANTITY").strong());
                ui.end_row();

                for part in parts {
                    if let Some(change) = part_row(ui, part) {
                        action = Some(DetailAction::UpdatePart(part.id.clone(), change));
                    }
                    ui.end_row();
                }
            });
    });

    action
}

fn part_row(ui: &mut egui::Ui, part: &LegoPart) -> Option<PartChange> {
    let mut change = None;
    let done = part.is_complete();

    ui.vertical(|ui| {
        let candidates = part.image_candidates();
        if candidates.is_empty() {
            ui.label(egui::RichText::new("NO IMG").small().weak());
        }
        for (i, url) in candidates.iter().enumerate() {
            let label = if i == 0 { "Image" } else { "Alt image" };
            ui.hyperlink_to(label, url);
        }
    });

    ui.vertical(|ui| {
        let name = egui::RichText::new(&part.name).strong();
        ui.label(if done { name.weak() } else { name });
        ui.label(egui::RichText::new(&part.color).small().monospace());
        ui.horizontal(|ui| {
            if let Some(id) = &part.element_id {
                ui.label(egui::RichText::new(format!("EL: {}", id)).small().weak());
            }
            if let Some(id) = &part.design_id {
                ui.label(egui::RichText::new(format!("DS: {}", id)).small().weak());
            }
        });
        if !part.description.is_empty() {
            ui.label(egui::RichText::new(&part.description).small().italics());
        }
    });

    ui.horizontal(|ui| {
        if ui.add_enabled(part.collected > 0, egui::Button::new("-")).clicked() {
            change = Some(PartChange::Decrement);
        }
        ui.label(egui::RichText::new(format!("{}/{}", part.collected, part.quantity)).monospace());
        if ui.add_enabled(!done, egui::Button::new("+")).clicked() {
            change = Some(PartChange::Increment);
        }
        let ok = egui::Button::new("OK").selected(done);
        if ui.add(ok).clicked() {
            change = Some(PartChange::Fill);
        }
    });

    change
}
