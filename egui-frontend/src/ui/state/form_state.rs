//! # Slot Form State Module
//!
//! Field contents and feedback of the "Add Availability Slot" form.

use log::warn;
use shared::AvailabilitySlot;

use crate::backend::domain::{AvailabilityFormService, SlotService};

/// State of the slot entry form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotFormState {
    /// YYYY-MM-DD
    pub date: String,
    /// HH:MM
    pub start_time: String,
    /// HH:MM
    pub end_time: String,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
}

impl SlotFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all three fields after a submission
    pub fn clear(&mut self) {
        self.date.clear();
        self.start_time.clear();
        self.end_time.clear();
        self.error_message = None;
    }

    /// Validate and hand the form to the slot store.
    ///
    /// A validation failure keeps the fields and shows the error. Once the
    /// form validates it is submitted and the fields are cleared, whether the
    /// store accepts the slot or rejects it as a duplicate.
    pub fn submit(
        &mut self,
        form_service: &AvailabilityFormService,
        slot_service: &SlotService,
    ) -> Option<AvailabilitySlot> {
        self.success_message = None;

        let request =
            form_service.create_slot_request(&self.date, &self.start_time, &self.end_time);
        if let Err(e) = form_service.validate_slot_form(&request) {
            warn!("Slot form invalid: {}", e);
            self.error_message = Some(form_service.get_error_message(&e));
            return None;
        }

        let result = slot_service.add_slot(request);
        self.clear();

        match result {
            Ok(response) => {
                self.success_message = Some(response.success_message);
                Some(response.slot)
            }
            Err(e) => {
                self.error_message = Some(form_service.get_error_message(&e));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::InMemorySlotRepository;
    use std::sync::Arc;

    fn services() -> (AvailabilityFormService, SlotService) {
        (
            AvailabilityFormService::new(),
            SlotService::new(Arc::new(InMemorySlotRepository::new())),
        )
    }

    fn filled(date: &str, start: &str, end: &str) -> SlotFormState {
        SlotFormState {
            date: date.to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            ..SlotFormState::default()
        }
    }

    #[test]
    fn test_successful_submit_clears_fields() {
        let (form_service, slot_service) = services();
        let mut form = filled("2024-06-12", "09:00", "10:00");

        let slot = form.submit(&form_service, &slot_service).unwrap();

        assert_eq!(slot.date_string(), "2024-06-12");
        assert_eq!(form.date, "");
        assert_eq!(form.start_time, "");
        assert_eq!(form.end_time, "");
        assert!(form.error_message.is_none());
        assert!(form.success_message.is_some());
        assert_eq!(slot_service.slot_count().unwrap(), 1);
    }

    #[test]
    fn test_missing_field_blocks_submit() {
        let (form_service, slot_service) = services();
        let mut form = filled("2024-06-12", "", "10:00");

        assert!(form.submit(&form_service, &slot_service).is_none());

        assert_eq!(form.error_message.as_deref(), Some("Please fill in all fields"));
        assert_eq!(form.date, "2024-06-12");
        assert_eq!(slot_service.slot_count().unwrap(), 0);
    }

    #[test]
    fn test_inverted_range_blocks_submit() {
        let (form_service, slot_service) = services();
        let mut form = filled("2024-01-01", "10:00", "09:00");

        assert!(form.submit(&form_service, &slot_service).is_none());

        assert_eq!(form.error_message.as_deref(), Some("End time must be after start time"));
        assert_eq!(slot_service.slot_count().unwrap(), 0);
    }

    #[test]
    fn test_duplicate_clears_fields_and_reports() {
        let (form_service, slot_service) = services();
        filled("2024-06-12", "09:00", "10:00").submit(&form_service, &slot_service);

        let mut form = filled("2024-06-12", "09:00", "10:00");
        assert!(form.submit(&form_service, &slot_service).is_none());

        assert_eq!(
            (form.date.as_str(), form.start_time.as_str(), form.end_time.as_str()),
            ("", "", "")
        );
        assert_eq!(form.error_message.as_deref(), Some("This slot already exists!"));
        assert!(form.success_message.is_none());
        assert_eq!(slot_service.slot_count().unwrap(), 1);
    }
}
