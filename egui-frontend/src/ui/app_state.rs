//! # App State Module
//!
//! The composition root of SlotBook. `SlotBookApp` owns the backend, the
//! session profile, the week reference date and every view's state, and is
//! the only place where those pieces meet.
//!
//! ## State Management:
//! Views never hold copies of shared data. Each frame they read the current
//! slots, profile and reference date from here, and report actions back
//! through the methods below.

use chrono::NaiveDate;
use log::{error, info, warn};
use shared::{AvailabilitySlot, CalendarCell, UserProfile};

use crate::backend::domain::calendar::today;
use crate::backend::Backend;
use crate::ui::state::{
    CalendarPickerState, DayColumn, ModalState, SlotFormState, UIState, WeekViewState,
};

/// Main application struct for the egui SlotBook app
pub struct SlotBookApp {
    pub backend: Backend,

    /// Current profile snapshot, replaced wholesale on save
    pub profile: UserProfile,

    /// Date whose Sunday-Saturday week is displayed
    pub reference_date: NaiveDate,

    pub ui_state: UIState,
    pub week: WeekViewState,
    pub picker: CalendarPickerState,
    pub slot_form: SlotFormState,
    pub modals: ModalState,
}

impl SlotBookApp {
    /// Create the app for a window
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Result<Self, anyhow::Error> {
        info!("🚀 Initializing SlotBookApp");
        let backend = Backend::new()?;
        Ok(Self::with_backend(backend, today()))
    }

    /// Create the app around an existing backend, showing the week of `reference_date`
    pub fn with_backend(backend: Backend, reference_date: NaiveDate) -> Self {
        let config = backend.profile_service.get_config().clone();
        let profile = backend.profile_service.default_profile();

        Self {
            backend,
            profile,
            reference_date,
            ui_state: UIState::new(config.default_timezone),
            week: WeekViewState::new(),
            picker: CalendarPickerState::new(reference_date),
            slot_form: SlotFormState::new(),
            modals: ModalState::new(),
        }
    }

    /// All slots, or none if the store could not be read
    pub fn current_slots(&mut self) -> Vec<AvailabilitySlot> {
        match self.backend.slot_service.list_slots() {
            Ok(slots) => slots,
            Err(e) => {
                error!("Failed to load slots: {}", e);
                self.ui_state.set_error(e.to_string());
                Vec::new()
            }
        }
    }

    /// Day columns of the displayed week
    pub fn week_columns(&mut self) -> Vec<DayColumn> {
        let slots = self.current_slots();
        self.week.day_columns(self.reference_date, &slots)
    }

    /// Show the week of `new_date`; a draft from another week is dropped
    pub fn change_week(&mut self, new_date: NaiveDate) {
        self.reference_date = new_date;
        self.week.cancel_edit_outside_week(new_date);
    }

    pub fn go_to_previous_week(&mut self) {
        let date = self.week.previous_week(self.reference_date);
        self.change_week(date);
    }

    pub fn go_to_next_week(&mut self) {
        let date = self.week.next_week(self.reference_date);
        self.change_week(date);
    }

    pub fn open_calendar_picker(&mut self) {
        self.picker.open(self.reference_date);
    }

    /// Handle a click in the calendar picker; a chosen day becomes the reference date
    pub fn pick_calendar_cell(&mut self, cell: CalendarCell) {
        if let Some(date) = self.picker.select(cell) {
            self.change_week(date);
        }
    }

    pub fn submit_slot_form(&mut self) {
        let backend = &self.backend;
        if let Some(slot) = self
            .slot_form
            .submit(&backend.availability_form_service, &backend.slot_service)
        {
            info!("➕ Slot {} added from form", slot.id);
        }
    }

    pub fn begin_slot_edit(&mut self, slot: &AvailabilitySlot) {
        self.week.begin_edit(slot);
    }

    pub fn confirm_slot_edit(&mut self) {
        if let Err(e) = self.week.confirm_edit(&self.backend.slot_service) {
            warn!("Slot edit rejected: {}", e);
        }
    }

    pub fn cancel_slot_edit(&mut self) {
        self.week.cancel_edit();
    }

    pub fn delete_slot(&mut self, slot_id: &str) {
        if let Err(e) = self.week.delete_slot(&self.backend.slot_service, slot_id) {
            error!("Failed to delete slot {}: {}", slot_id, e);
        }
    }

    pub fn open_profile_editor(&mut self) {
        self.modals.open_profile_editor(&self.profile);
    }

    pub fn close_profile_editor(&mut self) {
        self.modals.close_profile_editor();
    }

    /// Save the profile form; on success the snapshot replaces the current profile
    pub fn save_profile(&mut self) {
        if let Some(profile) = self.modals.save_profile(&self.backend.profile_service) {
            let message = self.backend.profile_service.generate_success_message(&profile);
            self.profile = profile;
            self.ui_state.set_success(message);
        }
    }

    /// There is no session to end; the action is only logged
    pub fn logout(&mut self) {
        warn!(
            "Logout requested for {}, but there is no account to log out of",
            self.profile.display_name()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn create_test_app() -> SlotBookApp {
        SlotBookApp::with_backend(Backend::new().unwrap(), date(2024, 6, 12))
    }

    fn add_slot(app: &mut SlotBookApp, d: &str, start: &str, end: &str) {
        app.slot_form.date = d.to_string();
        app.slot_form.start_time = start.to_string();
        app.slot_form.end_time = end.to_string();
        app.submit_slot_form();
    }

    #[test]
    fn test_app_starts_with_seed_profile() {
        let app = create_test_app();
        assert_eq!(app.profile.display_name(), "John Doe");
        assert_eq!(app.ui_state.selected_timezone, shared::Timezone::Utc);
        assert!(!app.picker.is_open);
    }

    #[test]
    fn test_form_to_store_to_week_view() {
        let mut app = create_test_app();
        add_slot(&mut app, "2024-06-13", "09:00", "10:00");

        let columns = app.week_columns();
        assert_eq!(columns[4].date, date(2024, 6, 13));
        assert_eq!(columns[4].slots.len(), 1);
        assert_eq!(app.slot_form.date, "");
    }

    #[test]
    fn test_week_navigation() {
        let mut app = create_test_app();
        app.go_to_next_week();
        assert_eq!(app.reference_date, date(2024, 6, 19));
        app.go_to_previous_week();
        assert_eq!(app.reference_date, date(2024, 6, 12));
    }

    #[test]
    fn test_calendar_picker_changes_reference_date() {
        let mut app = create_test_app();
        app.open_calendar_picker();
        app.picker.change_month(1);

        // July 2024 starts on a Monday: one blank, then the 1st
        let grid = app.picker.grid();
        app.pick_calendar_cell(grid[0]);
        assert!(app.picker.is_open);

        app.pick_calendar_cell(grid[1]);
        assert!(!app.picker.is_open);
        assert_eq!(app.reference_date, date(2024, 7, 1));
    }

    #[test]
    fn test_edit_and_delete_through_app() {
        let mut app = create_test_app();
        add_slot(&mut app, "2024-06-12", "09:00", "10:00");
        let slot = app.current_slots().remove(0);

        app.begin_slot_edit(&slot);
        if let Some(draft) = app.week.draft_mut() {
            draft.end_time = "11:00".to_string();
        }
        app.confirm_slot_edit();
        assert_eq!(app.current_slots()[0].end_time, "11:00");

        app.delete_slot(&slot.id);
        assert!(app.current_slots().is_empty());
    }

    #[test]
    fn test_week_navigation_drops_edit_from_other_week() {
        let mut app = create_test_app();
        add_slot(&mut app, "2024-06-12", "09:00", "10:00");
        let slot = app.current_slots().remove(0);

        app.begin_slot_edit(&slot);
        app.go_to_next_week();
        assert!(app.week.editing.is_none());

        app.go_to_previous_week();
        assert!(app.week.editing.is_none());
        assert_eq!(app.current_slots()[0], slot);
    }

    #[test]
    fn test_picking_a_date_in_the_same_week_keeps_edit() {
        let mut app = create_test_app();
        add_slot(&mut app, "2024-06-12", "09:00", "10:00");
        let slot = app.current_slots().remove(0);
        app.begin_slot_edit(&slot);

        app.open_calendar_picker();
        // June 2024 starts on a Saturday: six blanks, then the 1st
        let grid = app.picker.grid();
        app.pick_calendar_cell(grid[6 + 14]);
        assert_eq!(app.reference_date, date(2024, 6, 15));
        assert!(app.week.is_editing(&slot.id));

        app.open_calendar_picker();
        let grid = app.picker.grid();
        app.pick_calendar_cell(grid[6 + 15]);
        assert_eq!(app.reference_date, date(2024, 6, 16));
        assert!(app.week.editing.is_none());
    }

    #[test]
    fn test_profile_save_replaces_snapshot() {
        let mut app = create_test_app();
        app.open_profile_editor();
        app.modals.profile_form.last_name = "Smith".to_string();
        app.save_profile();

        assert_eq!(app.profile.display_name(), "John Smith");
        assert!(!app.modals.show_profile_modal);
        assert_eq!(
            app.ui_state.success_message.as_deref(),
            Some("Profile updated for John Smith")
        );
    }

    #[test]
    fn test_invalid_profile_keeps_snapshot() {
        let mut app = create_test_app();
        app.open_profile_editor();
        app.modals.profile_form.first_name = String::new();
        app.save_profile();

        assert_eq!(app.profile, UserProfile::default());
        assert!(app.modals.show_profile_modal);
    }

    #[test]
    fn test_logout_changes_nothing() {
        let mut app = create_test_app();
        app.logout();
        assert_eq!(app.profile, UserProfile::default());
    }
}
