//! # Week View Module
//!
//! Renders the seven-day availability grid with week navigation and the
//! inline slot editor.
//!
//! ## Key Functions:
//! - `render_week_view()` - Navigation row plus the day columns
//! - `render_day_column()` - One day's header and slots
//! - `render_slot_chip()` - A slot in Idle or Editing mode
//!
//! Clicks are collected as `WeekAction`s while the grid is drawn and applied
//! afterwards, so rendering only needs shared access to the columns.

use eframe::egui;
use shared::AvailabilitySlot;

use crate::ui::app_state::SlotBookApp;
use crate::ui::components::styling::{colors, feedback_label, slot_chip_frame};
use crate::ui::state::DayColumn;

const COLUMN_WIDTH: f32 = 150.0;

/// User intent captured during one frame of the week grid
#[derive(Debug, Clone, PartialEq)]
enum WeekAction {
    PreviousWeek,
    NextWeek,
    OpenPicker,
    BeginEdit(AvailabilitySlot),
    EditDraft { start_time: String, end_time: String },
    ConfirmEdit,
    CancelEdit,
    Delete(String),
}

impl SlotBookApp {
    /// Render the week grid section
    pub fn render_week_view(&mut self, ui: &mut egui::Ui) {
        let columns = self.week_columns();
        let mut actions = Vec::new();

        ui.group(|ui| {
            ui.vertical(|ui| {
                self.render_week_navigation(ui, &mut actions);
                ui.add_space(8.0);

                if let Some(error) = self.week.error_message.as_deref() {
                    feedback_label(ui, Some(error), None);
                }

                egui::ScrollArea::horizontal()
                    .id_source("week_grid_scroll")
                    .show(ui, |ui| {
                        ui.horizontal_top(|ui| {
                            for column in &columns {
                                self.render_day_column(ui, column, &mut actions);
                            }
                        });
                    });
            });
        });

        for action in actions {
            self.apply_week_action(action);
        }
    }

    fn render_week_navigation(&self, ui: &mut egui::Ui, actions: &mut Vec<WeekAction>) {
        ui.horizontal(|ui| {
            if ui.button("⬅ Previous").clicked() {
                actions.push(WeekAction::PreviousWeek);
            }

            let range = self.week.week_range_label(self.reference_date);
            if ui
                .button(egui::RichText::new(format!("📅 {}", range)).strong())
                .on_hover_text("Pick a date")
                .clicked()
            {
                actions.push(WeekAction::OpenPicker);
            }

            if ui.button("Next ➡").clicked() {
                actions.push(WeekAction::NextWeek);
            }
        });
    }

    fn render_day_column(
        &self,
        ui: &mut egui::Ui,
        column: &DayColumn,
        actions: &mut Vec<WeekAction>,
    ) {
        ui.vertical(|ui| {
            ui.set_width(COLUMN_WIDTH);
            ui.label(
                egui::RichText::new(column.header_label())
                    .strong()
                    .color(colors::ACCENT),
            );
            ui.separator();

            if column.slots.is_empty() {
                ui.label(
                    egui::RichText::new("No slots")
                        .italics()
                        .color(colors::MUTED),
                );
            }

            for slot in &column.slots {
                self.render_slot_chip(ui, slot, actions);
            }
        });
    }

    fn render_slot_chip(
        &self,
        ui: &mut egui::Ui,
        slot: &AvailabilitySlot,
        actions: &mut Vec<WeekAction>,
    ) {
        slot_chip_frame(self.ui_state.dark_mode).show(ui, |ui| {
            ui.set_width(COLUMN_WIDTH - 12.0);

            match self.week.editing.as_ref().filter(|draft| draft.id == slot.id) {
                Some(draft) => {
                    // The draft is edited through local copies and written back via an action
                    let mut start_time = draft.start_time.clone();
                    let mut end_time = draft.end_time.clone();

                    ui.add(
                        egui::TextEdit::singleline(&mut start_time)
                            .hint_text("HH:MM")
                            .desired_width(60.0),
                    );
                    ui.add(
                        egui::TextEdit::singleline(&mut end_time)
                            .hint_text("HH:MM")
                            .desired_width(60.0),
                    );

                    if start_time != draft.start_time || end_time != draft.end_time {
                        actions.push(WeekAction::EditDraft { start_time, end_time });
                    }

                    ui.horizontal(|ui| {
                        if ui.small_button("✔ Save").clicked() {
                            actions.push(WeekAction::ConfirmEdit);
                        }
                        if ui.small_button("Cancel").clicked() {
                            actions.push(WeekAction::CancelEdit);
                        }
                    });
                }
                None => {
                    ui.label(slot.time_range_label());
                    ui.horizontal(|ui| {
                        if ui.small_button("✏ Edit").clicked() {
                            actions.push(WeekAction::BeginEdit(slot.clone()));
                        }
                        if ui.small_button("🗑 Delete").clicked() {
                            actions.push(WeekAction::Delete(slot.id.clone()));
                        }
                    });
                }
            }
        });
    }

    fn apply_week_action(&mut self, action: WeekAction) {
        match action {
            WeekAction::PreviousWeek => self.go_to_previous_week(),
            WeekAction::NextWeek => self.go_to_next_week(),
            WeekAction::OpenPicker => self.open_calendar_picker(),
            WeekAction::BeginEdit(slot) => self.begin_slot_edit(&slot),
            WeekAction::EditDraft { start_time, end_time } => {
                if let Some(draft) = self.week.draft_mut() {
                    draft.start_time = start_time;
                    draft.end_time = end_time;
                }
            }
            WeekAction::ConfirmEdit => self.confirm_slot_edit(),
            WeekAction::CancelEdit => self.cancel_slot_edit(),
            WeekAction::Delete(slot_id) => self.delete_slot(&slot_id),
        }
    }
}
