use chrono::NaiveDate;
use shared::CreateSlotRequest;

use crate::backend::domain::calendar::{is_valid_time_of_day, parse_date};

/// Errors surfaced by the slot store and the slot forms.
///
/// Every variant blocks the requested mutation; the display text is shown to
/// the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlotError {
    #[error("This slot already exists!")]
    Duplicate,
    #[error("Please fill in all fields")]
    MissingField(&'static str),
    #[error("End time must be after start time")]
    InvalidTimeRange,
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Invalid time '{0}', expected HH:MM")]
    InvalidTime(String),
    #[error("Slot storage error: {0}")]
    Storage(String),
}

impl From<anyhow::Error> for SlotError {
    fn from(err: anyhow::Error) -> Self {
        SlotError::Storage(err.to_string())
    }
}

/// Slot fields that passed validation, ready to be stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSlot {
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
}

impl ValidatedSlot {
    /// Validate a raw form payload.
    ///
    /// Checks run in order: required fields, date format, time formats,
    /// then `start_time < end_time`.
    pub fn from_request(request: &CreateSlotRequest) -> Result<Self, SlotError> {
        let date = request.date.trim();
        let start_time = request.start_time.trim();
        let end_time = request.end_time.trim();

        if date.is_empty() {
            return Err(SlotError::MissingField("date"));
        }
        if start_time.is_empty() {
            return Err(SlotError::MissingField("start_time"));
        }
        if end_time.is_empty() {
            return Err(SlotError::MissingField("end_time"));
        }

        let date = parse_date(date).ok_or_else(|| SlotError::InvalidDate(date.to_string()))?;
        validate_time_range(start_time, end_time)?;

        Ok(Self {
            date,
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
        })
    }
}

/// Both times must be HH:MM and the start strictly before the end
pub fn validate_time_range(start_time: &str, end_time: &str) -> Result<(), SlotError> {
    if !is_valid_time_of_day(start_time) {
        return Err(SlotError::InvalidTime(start_time.to_string()));
    }
    if !is_valid_time_of_day(end_time) {
        return Err(SlotError::InvalidTime(end_time.to_string()));
    }
    // Zero-padded 24h strings order the same way as the times they encode
    if start_time >= end_time {
        return Err(SlotError::InvalidTimeRange);
    }
    Ok(())
}
