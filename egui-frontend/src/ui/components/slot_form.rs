//! # Slot Form Module
//!
//! The "Add Availability Slot" form below the week grid.

use eframe::egui;

use crate::ui::app_state::SlotBookApp;
use crate::ui::components::styling::{colors, feedback_label};

impl SlotBookApp {
    /// Render the slot entry form
    pub fn render_slot_form(&mut self, ui: &mut egui::Ui) {
        let form_service = self.backend.availability_form_service.clone();
        let mut submit = false;

        ui.group(|ui| {
            ui.label(egui::RichText::new("Add Availability Slot").heading());
            ui.add_space(6.0);

            egui::Grid::new("slot_form_grid")
                .num_columns(3)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Date");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.slot_form.date)
                            .hint_text("YYYY-MM-DD")
                            .desired_width(140.0),
                    );
                    hint_label(ui, form_service.date_hint(&self.slot_form.date));
                    ui.end_row();

                    ui.label("Start time");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.slot_form.start_time)
                            .hint_text("HH:MM")
                            .desired_width(140.0),
                    );
                    hint_label(ui, form_service.time_hint(&self.slot_form.start_time));
                    ui.end_row();

                    ui.label("End time");
                    let end_response = ui.add(
                        egui::TextEdit::singleline(&mut self.slot_form.end_time)
                            .hint_text("HH:MM")
                            .desired_width(140.0),
                    );
                    hint_label(ui, form_service.time_hint(&self.slot_form.end_time));
                    ui.end_row();

                    if end_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        submit = true;
                    }
                });

            ui.add_space(6.0);
            if ui.button("➕ Add Slot").clicked() {
                submit = true;
            }

            feedback_label(
                ui,
                self.slot_form.error_message.as_deref(),
                self.slot_form.success_message.as_deref(),
            );
        });

        if submit {
            self.submit_slot_form();
        }
    }
}

fn hint_label(ui: &mut egui::Ui, hint: Option<String>) {
    match hint {
        Some(hint) => {
            ui.label(egui::RichText::new(hint).small().color(colors::HINT));
        }
        None => {
            ui.label("");
        }
    }
}
