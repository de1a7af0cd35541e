//! Availability form logic for SlotBook.
//!
//! Business rules behind the "Add Availability Slot" form: validating what
//! the user typed, building the request for the slot service and producing
//! the messages shown next to the form. The UI only renders the fields.

use shared::CreateSlotRequest;

use crate::backend::domain::calendar::{is_valid_time_of_day, parse_date};
use crate::backend::domain::models::slot::{SlotError, ValidatedSlot};

/// Service for the slot entry form
#[derive(Clone, Default)]
pub struct AvailabilityFormService;

impl AvailabilityFormService {
    pub fn new() -> Self {
        Self
    }

    /// Build a request from the raw form fields
    pub fn create_slot_request(
        &self,
        date: &str,
        start_time: &str,
        end_time: &str,
    ) -> CreateSlotRequest {
        CreateSlotRequest {
            date: date.trim().to_string(),
            start_time: start_time.trim().to_string(),
            end_time: end_time.trim().to_string(),
        }
    }

    /// Validate the form before submission
    pub fn validate_slot_form(
        &self,
        request: &CreateSlotRequest,
    ) -> Result<ValidatedSlot, SlotError> {
        ValidatedSlot::from_request(request)
    }

    /// User-facing message for a rejected submission
    pub fn get_error_message(&self, error: &SlotError) -> String {
        error.to_string()
    }

    /// Per-field hint while typing a date; `None` when the field is fine or empty
    pub fn date_hint(&self, date: &str) -> Option<String> {
        let date = date.trim();
        if date.is_empty() || parse_date(date).is_some() {
            None
        } else {
            Some("Use YYYY-MM-DD".to_string())
        }
    }

    /// Per-field hint while typing a time; `None` when the field is fine or empty
    pub fn time_hint(&self, time: &str) -> Option<String> {
        let time = time.trim();
        if time.is_empty() || is_valid_time_of_day(time) {
            None
        } else {
            Some("Use HH:MM (24h)".to_string())
        }
    }
}
