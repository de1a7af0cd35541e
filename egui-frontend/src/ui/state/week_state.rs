//! # Week State Module
//!
//! State for the week availability grid.
//!
//! ## Responsibilities:
//! - Deriving the seven day columns from the externally held reference date
//! - Week navigation (±7 days), reported back to the caller
//! - The inline edit of a single slot (Idle / Editing)
//!
//! The view never stores which week it shows; the app passes the reference
//! date in on every frame.

use chrono::NaiveDate;
use log::info;
use shared::AvailabilitySlot;

use crate::backend::domain::calendar::{
    add_days, format_week_range, week_dates_for, WEEKDAY_ABBREVIATIONS,
};
use crate::backend::domain::{SlotError, SlotService};

/// One column of the week grid
#[derive(Debug, Clone, PartialEq)]
pub struct DayColumn {
    /// "Sun" .. "Sat"
    pub weekday: &'static str,
    pub date: NaiveDate,
    pub slots: Vec<AvailabilitySlot>,
}

impl DayColumn {
    /// "Wed 12"
    pub fn header_label(&self) -> String {
        use chrono::Datelike;
        format!("{} {}", self.weekday, self.date.day())
    }
}

/// Week grid state: Idle when `editing` is `None`, Editing otherwise
#[derive(Debug, Default)]
pub struct WeekViewState {
    /// Working copy of the slot being edited; at most one across the view
    pub editing: Option<AvailabilitySlot>,

    /// Error from the last rejected edit or delete
    pub error_message: Option<String>,
}

impl WeekViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reference date one week earlier
    pub fn previous_week(&self, reference: NaiveDate) -> NaiveDate {
        let date = add_days(reference, -7);
        info!("📅 Navigated to previous week: {}", date);
        date
    }

    /// Reference date one week later
    pub fn next_week(&self, reference: NaiveDate) -> NaiveDate {
        let date = add_days(reference, 7);
        info!("📅 Navigated to next week: {}", date);
        date
    }

    /// Seven columns, Sunday first, each holding that date's slots in store order
    pub fn day_columns(&self, reference: NaiveDate, slots: &[AvailabilitySlot]) -> Vec<DayColumn> {
        week_dates_for(reference)
            .iter()
            .zip(WEEKDAY_ABBREVIATIONS)
            .map(|(date, weekday)| DayColumn {
                weekday,
                date: *date,
                slots: slots.iter().filter(|s| s.date == *date).cloned().collect(),
            })
            .collect()
    }

    /// "Jun 9, 2024 - Jun 15, 2024"
    pub fn week_range_label(&self, reference: NaiveDate) -> String {
        format_week_range(&week_dates_for(reference))
    }

    pub fn is_editing(&self, slot_id: &str) -> bool {
        self.editing.as_ref().is_some_and(|draft| draft.id == slot_id)
    }

    /// Enter Editing for `slot`, replacing any other draft
    pub fn begin_edit(&mut self, slot: &AvailabilitySlot) {
        info!("✏️ Editing slot {}", slot.id);
        self.editing = Some(slot.clone());
        self.error_message = None;
    }

    /// Mutable access to the draft times while editing
    pub fn draft_mut(&mut self) -> Option<&mut AvailabilitySlot> {
        self.editing.as_mut()
    }

    /// Write the draft through the slot service.
    ///
    /// Returns to Idle on success. A rejected edit keeps the draft and the
    /// error so the user can correct it.
    pub fn confirm_edit(&mut self, slot_service: &SlotService) -> Result<bool, SlotError> {
        let Some(draft) = self.editing.clone() else {
            return Ok(false);
        };

        match slot_service.update_slot(draft) {
            Ok(updated) => {
                self.editing = None;
                self.error_message = None;
                Ok(updated)
            }
            Err(e) => {
                self.error_message = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Leave Editing without writing the draft
    pub fn cancel_edit(&mut self) {
        if let Some(draft) = self.editing.take() {
            info!("↩️ Cancelled edit of slot {}", draft.id);
        }
        self.error_message = None;
    }

    /// Cancel the draft if its date is not in the week of `reference`
    pub fn cancel_edit_outside_week(&mut self, reference: NaiveDate) {
        let in_week = self
            .editing
            .as_ref()
            .is_some_and(|draft| week_dates_for(reference).contains(&draft.date));
        if self.editing.is_some() && !in_week {
            self.cancel_edit();
        }
    }

    /// Delete a slot, leaving Editing if it was the one being edited
    pub fn delete_slot(
        &mut self,
        slot_service: &SlotService,
        slot_id: &str,
    ) -> Result<bool, SlotError> {
        let deleted = slot_service.delete_slot(slot_id).map_err(|e| {
            self.error_message = Some(e.to_string());
            e
        })?;
        if self.is_editing(slot_id) {
            self.editing = None;
        }
        self.error_message = None;
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::InMemorySlotRepository;
    use shared::CreateSlotRequest;
    use std::sync::Arc;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn service_with_slots(slots: &[(&str, &str, &str)]) -> (SlotService, Vec<AvailabilitySlot>) {
        let service = SlotService::new(Arc::new(InMemorySlotRepository::new()));
        let added = slots
            .iter()
            .map(|(d, s, e)| {
                service
                    .add_slot(CreateSlotRequest {
                        date: d.to_string(),
                        start_time: s.to_string(),
                        end_time: e.to_string(),
                    })
                    .unwrap()
                    .slot
            })
            .collect();
        (service, added)
    }

    #[test]
    fn test_navigation_round_trip() {
        let state = WeekViewState::new();
        let reference = date(2024, 6, 12);

        assert_eq!(state.next_week(reference), date(2024, 6, 19));
        assert_eq!(state.previous_week(reference), date(2024, 6, 5));
        assert_eq!(state.previous_week(state.next_week(reference)), reference);
    }

    #[test]
    fn test_day_columns_filter_by_date() {
        let (service, added) = service_with_slots(&[
            ("2024-06-12", "09:00", "10:00"),
            ("2024-06-20", "09:00", "10:00"),
            ("2024-06-09", "13:00", "14:00"),
            ("2024-06-12", "07:00", "08:00"),
        ]);
        let state = WeekViewState::new();

        let columns = state.day_columns(date(2024, 6, 12), &service.list_slots().unwrap());

        assert_eq!(columns.len(), 7);
        assert_eq!(columns[0].weekday, "Sun");
        assert_eq!(columns[0].date, date(2024, 6, 9));
        assert_eq!(columns[0].slots, vec![added[2].clone()]);
        assert_eq!(columns[3].header_label(), "Wed 12");
        assert_eq!(columns[3].slots, vec![added[0].clone(), added[3].clone()]);
        // The slot from the following week is not shown
        let shown: usize = columns.iter().map(|c| c.slots.len()).sum();
        assert_eq!(shown, 3);
    }

    #[test]
    fn test_week_range_label() {
        let state = WeekViewState::new();
        assert_eq!(state.week_range_label(date(2024, 6, 12)), "Jun 9, 2024 - Jun 15, 2024");
    }

    #[test]
    fn test_only_one_slot_is_edited_at_a_time() {
        let (_, added) = service_with_slots(&[
            ("2024-06-12", "09:00", "10:00"),
            ("2024-06-13", "09:00", "10:00"),
        ]);
        let mut state = WeekViewState::new();

        state.begin_edit(&added[0]);
        assert!(state.is_editing(&added[0].id));

        state.begin_edit(&added[1]);
        assert!(!state.is_editing(&added[0].id));
        assert!(state.is_editing(&added[1].id));
    }

    #[test]
    fn test_confirm_edit_updates_store_and_returns_to_idle() {
        let (service, added) = service_with_slots(&[("2024-06-12", "09:00", "10:00")]);
        let mut state = WeekViewState::new();

        state.begin_edit(&added[0]);
        if let Some(draft) = state.draft_mut() {
            draft.start_time = "11:00".to_string();
            draft.end_time = "12:00".to_string();
        }

        assert!(state.confirm_edit(&service).unwrap());
        assert!(state.editing.is_none());

        let stored = service
            .get_slot(&added[0].id)
            .unwrap()
            .unwrap();
        assert_eq!(stored.time_range_label(), "11:00 - 12:00");
    }

    #[test]
    fn test_rejected_edit_stays_in_editing() {
        let (service, added) = service_with_slots(&[("2024-06-12", "09:00", "10:00")]);
        let mut state = WeekViewState::new();

        state.begin_edit(&added[0]);
        if let Some(draft) = state.draft_mut() {
            draft.end_time = "08:00".to_string();
        }

        assert_eq!(state.confirm_edit(&service), Err(SlotError::InvalidTimeRange));
        assert!(state.is_editing(&added[0].id));
        assert_eq!(state.error_message.as_deref(), Some("End time must be after start time"));
        assert_eq!(service.get_slot(&added[0].id).unwrap(), Some(added[0].clone()));
    }

    #[test]
    fn test_cancel_edit_discards_draft() {
        let (service, added) = service_with_slots(&[("2024-06-12", "09:00", "10:00")]);
        let mut state = WeekViewState::new();

        state.begin_edit(&added[0]);
        if let Some(draft) = state.draft_mut() {
            draft.start_time = "09:30".to_string();
        }
        state.cancel_edit();

        assert!(state.editing.is_none());
        assert_eq!(service.get_slot(&added[0].id).unwrap(), Some(added[0].clone()));
    }

    #[test]
    fn test_cancel_edit_outside_week() {
        let (_service, added) = service_with_slots(&[("2024-06-15", "09:00", "10:00")]);
        let mut state = WeekViewState::new();

        state.begin_edit(&added[0]);
        state.cancel_edit_outside_week(date(2024, 6, 9));
        assert!(state.is_editing(&added[0].id));

        state.cancel_edit_outside_week(date(2024, 6, 16));
        assert!(state.editing.is_none());
    }

    #[test]
    fn test_confirm_without_draft_is_noop() {
        let (service, _) = service_with_slots(&[]);
        let mut state = WeekViewState::new();
        assert_eq!(state.confirm_edit(&service), Ok(false));
    }

    #[test]
    fn test_deleting_edited_slot_leaves_editing() {
        let (service, added) = service_with_slots(&[
            ("2024-06-12", "09:00", "10:00"),
            ("2024-06-12", "10:00", "11:00"),
        ]);
        let mut state = WeekViewState::new();

        state.begin_edit(&added[1]);
        assert!(state.delete_slot(&service, &added[0].id).unwrap());
        assert!(state.is_editing(&added[1].id));

        assert!(state.delete_slot(&service, &added[1].id).unwrap());
        assert!(state.editing.is_none());
        assert_eq!(service.slot_count().unwrap(), 0);
    }
}
