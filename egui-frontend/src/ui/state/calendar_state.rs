//! # Calendar State Module
//!
//! State for the calendar picker popup.
//!
//! ## Responsibilities:
//! - Open/closed state
//! - The month cursor, independent of any selected date
//! - Turning a click on a grid cell into a selected date
//!
//! The picker never touches the slot store; the chosen date is handed back to
//! the caller, which owns the week reference date.

use chrono::NaiveDate;
use log::info;
use shared::CalendarCell;

use crate::backend::domain::calendar::{add_months, first_of_month, month_grid_for, month_title};

/// Calendar picker state
#[derive(Debug)]
pub struct CalendarPickerState {
    /// Whether the picker is visible
    pub is_open: bool,

    /// First day of the month currently displayed
    pub cursor: NaiveDate,
}

impl CalendarPickerState {
    /// Create a closed picker with its cursor on the month of `reference`
    pub fn new(reference: NaiveDate) -> Self {
        Self {
            is_open: false,
            cursor: first_of_month(reference),
        }
    }

    /// Open the picker on the month of the externally supplied reference date
    pub fn open(&mut self, reference: NaiveDate) {
        self.cursor = first_of_month(reference);
        self.is_open = true;
        info!("🗓️ Opened calendar picker on {}", self.title());
    }

    /// Close without selecting a date
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Move the month cursor by `delta` months; years roll over
    pub fn change_month(&mut self, delta: i32) {
        self.cursor = add_months(self.cursor, delta);
        info!("🗓️ Calendar picker moved to {}", self.title());
    }

    /// Month grid for the cursor, Sunday first
    pub fn grid(&self) -> Vec<CalendarCell> {
        month_grid_for(self.cursor)
    }

    /// "June 2024"
    pub fn title(&self) -> String {
        month_title(self.cursor)
    }

    /// Handle a click on a grid cell.
    ///
    /// A day returns its date and closes the picker; a blank cell does nothing.
    pub fn select(&mut self, cell: CalendarCell) -> Option<NaiveDate> {
        let date = cell.date()?;
        info!("🗓️ Selected {} in calendar picker", date);
        self.is_open = false;
        Some(date)
    }

    /// Whether a cell shows the currently selected date
    pub fn is_highlighted(&self, cell: CalendarCell, selected: NaiveDate) -> bool {
        cell.date() == Some(selected)
    }
}
