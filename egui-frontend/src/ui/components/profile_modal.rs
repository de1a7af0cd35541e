//! # Profile Modal
//!
//! Modal editor for the session's user profile.
//!
//! ## Responsibilities:
//! - Display the profile fields pre-filled from the current profile
//! - Timezone selection
//! - Showing validation errors while the modal stays open
//!
//! Saving and cancelling are delegated to `SlotBookApp`, which owns the
//! profile snapshot.

use eframe::egui;
use shared::Timezone;

use crate::ui::app_state::SlotBookApp;
use crate::ui::components::styling::{colors, feedback_label};

impl SlotBookApp {
    /// Render the profile modal
    pub fn render_profile_modal(&mut self, ctx: &egui::Context) {
        if !self.modals.show_profile_modal {
            return;
        }

        let mut save_clicked = false;
        let mut cancel_clicked = false;

        egui::Window::new(egui::RichText::new("👤 Edit Profile").color(colors::ACCENT))
            .id(egui::Id::new("profile_modal_window"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .min_width(380.0)
            .show(ctx, |ui| {
                self.render_profile_form_content(ui);

                ui.add_space(12.0);
                feedback_label(ui, self.modals.profile_form.error_message.as_deref(), None);

                ui.horizontal(|ui| {
                    if ui.button("💾 Save").clicked() {
                        save_clicked = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancel_clicked = true;
                    }
                });
            });

        if save_clicked {
            self.save_profile();
        } else if cancel_clicked {
            self.close_profile_editor();
        }
    }

    /// Render the profile form fields
    fn render_profile_form_content(&mut self, ui: &mut egui::Ui) {
        let form = &mut self.modals.profile_form;

        egui::Grid::new("profile_form_grid")
            .num_columns(2)
            .spacing([12.0, 10.0])
            .show(ui, |ui| {
                ui.label("First name *");
                ui.add(
                    egui::TextEdit::singleline(&mut form.first_name).desired_width(240.0),
                );
                ui.end_row();

                ui.label("Last name *");
                ui.add(
                    egui::TextEdit::singleline(&mut form.last_name).desired_width(240.0),
                );
                ui.end_row();

                ui.label("Email *");
                ui.add(
                    egui::TextEdit::singleline(&mut form.email)
                        .hint_text("name@example.com")
                        .desired_width(240.0),
                );
                ui.end_row();

                ui.label("Phone");
                ui.add(
                    egui::TextEdit::singleline(&mut form.phone)
                        .hint_text("Optional")
                        .desired_width(240.0),
                );
                ui.end_row();

                ui.label("Timezone");
                egui::ComboBox::from_id_source("profile_timezone")
                    .selected_text(form.timezone.display_label())
                    .width(240.0)
                    .show_ui(ui, |ui| {
                        for timezone in Timezone::all() {
                            ui.selectable_value(
                                &mut form.timezone,
                                *timezone,
                                timezone.display_label(),
                            );
                        }
                    });
                ui.end_row();
            });
    }
}
