// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Set number entry.
//!
//! This module provides the form for adding a set to the inventory by
//! catalog number.

/// Result of search bar interaction.
pub enum SearchAction {
    None,
    Submit(String),
}

/// Display the search bar. Input is locked while a search is running.
pub fn show(ui: &mut egui::Ui, input: &mut String, is_searching: bool) -> SearchAction {
    let mut action = SearchAction::None;

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.label(egui::RichText::new("ADD SET TO INVENTORY").strong().weak());
        ui.horizontal(|ui| {
            let response = ui.add_enabled(
                !is_searching,
                egui::TextEdit::singleline(input)
                    .hint_text("SET NUMBER (e.g. 10305)")
                    .desired_width(240.0),
            );
            let entered = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            let has_input = !input.trim().is_empty();
            let label = if is_searching { "Processing..." } else { "Sync Database" };
            let clicked = ui
                .add_enabled(!is_searching && has_input, egui::Button::new(label))
                .clicked();

            if is_searching {
                ui.spinner();
            }

            if (clicked || entered) && has_input && !is_searching {
                action = SearchAction::Submit(input.trim().to_string());
                input.clear();
            }
        });
    });

    action
}
