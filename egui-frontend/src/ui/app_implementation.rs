use eframe::egui;

use crate::ui::app_state::SlotBookApp;
use crate::ui::components::setup_slotbook_style;

impl eframe::App for SlotBookApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        setup_slotbook_style(ctx, self.ui_state.dark_mode);

        egui::TopBottomPanel::top("slotbook_header").show(ctx, |ui| {
            ui.add_space(6.0);
            self.render_header(ui);
            self.render_messages(ui);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.render_main_content(ui);
            });
        });

        // Windows go last so they draw above the panels
        self.render_calendar_picker(ctx);
        self.render_profile_modal(ctx);
    }
}

impl SlotBookApp {
    /// Week grid on top, entry form below
    fn render_main_content(&mut self, ui: &mut egui::Ui) {
        ui.vertical(|ui| {
            self.render_week_view(ui);
            ui.add_space(16.0);
            self.render_slot_form(ui);
        });
    }
}
