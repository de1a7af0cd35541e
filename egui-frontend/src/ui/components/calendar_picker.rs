//! # Calendar Picker Module
//!
//! Month-grid popup for jumping the week view to any date.

use eframe::egui;
use shared::CalendarCell;

use crate::backend::domain::calendar::WEEKDAY_ABBREVIATIONS;
use crate::ui::app_state::SlotBookApp;
use crate::ui::components::styling::colors;

impl SlotBookApp {
    /// Render the calendar picker window when open
    pub fn render_calendar_picker(&mut self, ctx: &egui::Context) {
        if !self.picker.is_open {
            return;
        }

        let mut month_delta = 0;
        let mut picked: Option<CalendarCell> = None;
        let mut close_clicked = false;

        egui::Window::new("Select a date")
            .id(egui::Id::new("calendar_picker_window"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui.button("◀").clicked() {
                        month_delta = -1;
                    }
                    ui.label(
                        egui::RichText::new(self.picker.title())
                            .strong()
                            .size(18.0),
                    );
                    if ui.button("▶").clicked() {
                        month_delta = 1;
                    }
                });

                ui.add_space(6.0);

                egui::Grid::new("calendar_picker_grid")
                    .num_columns(7)
                    .spacing([4.0, 4.0])
                    .show(ui, |ui| {
                        for weekday in WEEKDAY_ABBREVIATIONS {
                            ui.label(egui::RichText::new(weekday).color(colors::MUTED));
                        }
                        ui.end_row();

                        for (index, cell) in self.picker.grid().into_iter().enumerate() {
                            match cell {
                                CalendarCell::Blank => {
                                    let blank =
                                        egui::Button::new("").min_size(egui::vec2(32.0, 28.0));
                                    ui.add_enabled(false, blank);
                                }
                                CalendarCell::Day(date) => {
                                    use chrono::Datelike;
                                    let highlighted =
                                        self.picker.is_highlighted(cell, self.reference_date);
                                    let button = egui::SelectableLabel::new(
                                        highlighted,
                                        date.day().to_string(),
                                    );
                                    if ui.add_sized([32.0, 28.0], button).clicked() {
                                        picked = Some(cell);
                                    }
                                }
                            }
                            if index % 7 == 6 {
                                ui.end_row();
                            }
                        }
                    });

                ui.add_space(6.0);
                if ui.button("Close").clicked() {
                    close_clicked = true;
                }
            });

        if month_delta != 0 {
            self.picker.change_month(month_delta);
        }
        if let Some(cell) = picked {
            self.pick_calendar_cell(cell);
        }
        if close_clicked {
            self.picker.close();
        }
    }
}
