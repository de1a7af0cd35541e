//! # Header Module
//!
//! This module renders the application header: title, timezone selector,
//! dark-mode toggle and the profile dropdown.
//!
//! ## Key Functions:
//! - `render_header()` - Main header row
//! - `render_timezone_selector()` - Timezone combo box
//! - `render_profile_menu()` - Profile dropdown with Edit Profile and Logout
//! - `render_messages()` - App-wide success/error display

use eframe::egui;
use shared::Timezone;

use crate::ui::app_state::SlotBookApp;
use crate::ui::components::styling::{colors, feedback_label};

impl SlotBookApp {
    /// Render the header
    pub fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(self.backend.profile_service.get_config().app_name.as_str())
                        .font(egui::FontId::new(28.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(colors::ACCENT),
                )
                .selectable(false),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                self.render_profile_menu(ui);
                ui.add_space(10.0);

                let theme_icon = if self.ui_state.dark_mode { "☀" } else { "🌙" };
                if ui
                    .button(theme_icon)
                    .on_hover_text("Toggle dark mode")
                    .clicked()
                {
                    self.ui_state.toggle_dark_mode();
                }
                ui.add_space(10.0);

                self.render_timezone_selector(ui);
            });
        });
    }

    /// Timezone combo box. The choice is stored but does not convert any times.
    fn render_timezone_selector(&mut self, ui: &mut egui::Ui) {
        let mut selected = self.ui_state.selected_timezone;

        egui::ComboBox::from_id_source("header_timezone")
            .selected_text(selected.display_label())
            .width(260.0)
            .show_ui(ui, |ui| {
                for timezone in Timezone::all() {
                    ui.selectable_value(&mut selected, *timezone, timezone.display_label());
                }
            });

        self.ui_state.select_timezone(selected);
    }

    /// Profile dropdown
    fn render_profile_menu(&mut self, ui: &mut egui::Ui) {
        let mut edit_clicked = false;
        let mut logout_clicked = false;

        ui.menu_button(format!("👤 {}", self.profile.initials()), |ui| {
            ui.label(egui::RichText::new(self.profile.display_name()).strong());
            ui.label(egui::RichText::new(&self.profile.email).color(colors::MUTED));
            if self.profile.has_phone() {
                ui.label(egui::RichText::new(self.profile.phone.trim()).color(colors::MUTED));
            }
            ui.separator();

            if ui.button("Edit Profile").clicked() {
                edit_clicked = true;
                ui.close_menu();
            }
            if ui.button("Logout").clicked() {
                logout_clicked = true;
                ui.close_menu();
            }
        });

        if edit_clicked {
            self.open_profile_editor();
        }
        if logout_clicked {
            self.logout();
        }
    }

    /// Render app-wide error and success messages
    pub fn render_messages(&mut self, ui: &mut egui::Ui) {
        if self.ui_state.error_message.is_none() && self.ui_state.success_message.is_none() {
            return;
        }

        ui.horizontal(|ui| {
            feedback_label(
                ui,
                self.ui_state.error_message.as_deref(),
                self.ui_state.success_message.as_deref(),
            );
            if ui.small_button("✖").clicked() {
                self.ui_state.clear_messages();
            }
        });
    }
}
