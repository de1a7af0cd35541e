//! # UI State Module
//!
//! General UI state that is not specific to any one view: theme, the header's
//! timezone selector and app-wide feedback messages.

use log::info;
use shared::Timezone;

/// General UI state for theme and user feedback
#[derive(Debug, Default)]
pub struct UIState {
    pub dark_mode: bool,

    /// Timezone chosen in the header. Nothing converts times with it yet.
    pub selected_timezone: Timezone,

    /// Error message to display to the user
    pub error_message: Option<String>,

    /// Success message to display to the user
    pub success_message: Option<String>,
}

impl UIState {
    pub fn new(default_timezone: Timezone) -> Self {
        Self {
            selected_timezone: default_timezone,
            ..Self::default()
        }
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        info!("🌓 Dark mode {}", if self.dark_mode { "on" } else { "off" });
    }

    pub fn select_timezone(&mut self, timezone: Timezone) {
        if self.selected_timezone != timezone {
            info!("🌍 Selected timezone: {}", timezone);
            self.selected_timezone = timezone;
        }
    }

    /// Clear any error or success messages
    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.success_message = None;
    }

    pub fn set_error(&mut self, message: String) {
        self.success_message = None;
        self.error_message = Some(message);
    }

    pub fn set_success(&mut self, message: String) {
        self.error_message = None;
        self.success_message = Some(message);
    }
}
