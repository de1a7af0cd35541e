//! # Styling Module
//!
//! Global egui style and the color constants shared by the SlotBook views.
//!
//! ## Key Functions:
//! - `setup_slotbook_style()` - Configure visuals, spacing and text sizes
//! - `slot_chip_frame()` - Frame used for a slot inside a day column
//! - `feedback_label()` - Colored error/success text

use eframe::egui;

/// Color palette
pub mod colors {
    use eframe::egui::Color32;

    pub const ACCENT: Color32 = Color32::from_rgb(70, 130, 180);
    pub const ERROR: Color32 = Color32::from_rgb(200, 50, 50);
    pub const SUCCESS: Color32 = Color32::from_rgb(40, 150, 80);
    pub const HINT: Color32 = Color32::from_rgb(150, 110, 40);
    pub const SLOT_FILL_LIGHT: Color32 = Color32::from_rgb(225, 236, 250);
    pub const SLOT_FILL_DARK: Color32 = Color32::from_rgb(40, 60, 85);
    pub const MUTED: Color32 = Color32::from_rgb(130, 130, 130);
}

/// Apply the light or dark theme together with the app's spacing and fonts
pub fn setup_slotbook_style(ctx: &egui::Context, dark_mode: bool) {
    let visuals = if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };

    ctx.set_style({
        let mut style = (*ctx.style()).clone();
        style.visuals = visuals;

        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(24.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );

        style.spacing.button_padding = egui::vec2(10.0, 6.0);
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(6.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(6.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(6.0);

        style
    });
}

/// Frame for one slot chip in the week grid
pub fn slot_chip_frame(dark_mode: bool) -> egui::Frame {
    let fill = if dark_mode {
        colors::SLOT_FILL_DARK
    } else {
        colors::SLOT_FILL_LIGHT
    };

    egui::Frame::none()
        .fill(fill)
        .stroke(egui::Stroke::new(1.0, colors::ACCENT))
        .rounding(egui::Rounding::same(6.0))
        .inner_margin(egui::Margin::symmetric(6.0, 4.0))
}

/// Show an optional error and success message, error first
pub fn feedback_label(ui: &mut egui::Ui, error: Option<&str>, success: Option<&str>) {
    if let Some(error) = error {
        ui.colored_label(colors::ERROR, format!("❌ {}", error));
    }
    if let Some(success) = success {
        ui.colored_label(colors::SUCCESS, format!("✅ {}", success));
    }
}
