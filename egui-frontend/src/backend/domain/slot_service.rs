use chrono::NaiveDate;
use log::{debug, info, warn};
use std::sync::Arc;

use crate::backend::domain::models::slot::{validate_time_range, SlotError, ValidatedSlot};
use crate::backend::storage::SlotStorage;
use shared::{AvailabilitySlot, CreateSlotRequest, CreateSlotResponse};

/// Service owning the session's availability slots
///
/// Slots keep insertion order. No two slots share the same
/// `(date, start_time, end_time)` and every slot starts before it ends.
#[derive(Clone)]
pub struct SlotService {
    storage: Arc<dyn SlotStorage>,
}

impl SlotService {
    /// Create a new SlotService
    pub fn new(storage: Arc<dyn SlotStorage>) -> Self {
        Self { storage }
    }

    /// Validate and append a new slot, assigning it a fresh ID
    pub fn add_slot(&self, request: CreateSlotRequest) -> Result<CreateSlotResponse, SlotError> {
        info!(
            "Adding slot: date={}, start={}, end={}",
            request.date, request.start_time, request.end_time
        );

        let validated = ValidatedSlot::from_request(&request).map_err(|e| {
            warn!("Rejected slot: {}", e);
            e
        })?;

        let duplicate = self.storage.list_slots()?.iter().any(|slot| {
            slot.matches_triple(validated.date, &validated.start_time, &validated.end_time)
        });
        if duplicate {
            warn!(
                "Rejected duplicate slot on {} {}-{}",
                validated.date, validated.start_time, validated.end_time
            );
            return Err(SlotError::Duplicate);
        }

        let slot = AvailabilitySlot {
            id: AvailabilitySlot::generate_id(),
            date: validated.date,
            start_time: validated.start_time,
            end_time: validated.end_time,
        };
        self.storage.store_slot(&slot)?;

        info!("Added slot {} on {}", slot.id, slot.date);

        Ok(CreateSlotResponse {
            success_message: format!(
                "Slot added for {} ({})",
                slot.date_string(),
                slot.time_range_label()
            ),
            slot,
        })
    }

    /// Replace the stored slot with the same ID, field for field
    ///
    /// Returns `Ok(false)` without touching the store when no slot has that ID.
    /// Edits are held to the same rules as new slots: a valid increasing time
    /// range, and no collision with any other slot's triple.
    pub fn update_slot(&self, slot: AvailabilitySlot) -> Result<bool, SlotError> {
        info!("Updating slot: {}", slot.id);

        let slots = self.storage.list_slots()?;
        if !slots.iter().any(|s| s.id == slot.id) {
            debug!("No slot with id {}, update ignored", slot.id);
            return Ok(false);
        }

        validate_time_range(&slot.start_time, &slot.end_time).map_err(|e| {
            warn!("Rejected edit of slot {}: {}", slot.id, e);
            e
        })?;

        let collides = slots
            .iter()
            .filter(|s| s.id != slot.id)
            .any(|s| s.matches_triple(slot.date, &slot.start_time, &slot.end_time));
        if collides {
            warn!("Rejected edit of slot {}: duplicate triple", slot.id);
            return Err(SlotError::Duplicate);
        }

        let updated = self.storage.update_slot(&slot)?;
        if updated {
            info!("Updated slot {} to {} {}", slot.id, slot.date, slot.time_range_label());
        }
        Ok(updated)
    }

    /// Remove a slot; deleting an unknown or already deleted ID is a no-op
    pub fn delete_slot(&self, slot_id: &str) -> Result<bool, SlotError> {
        let deleted = self.storage.delete_slot(slot_id)?;
        if deleted {
            info!("Deleted slot: {}", slot_id);
        } else {
            debug!("No slot with id {}, delete ignored", slot_id);
        }
        Ok(deleted)
    }

    /// Get a slot by ID
    pub fn get_slot(&self, slot_id: &str) -> Result<Option<AvailabilitySlot>, SlotError> {
        Ok(self.storage.get_slot(slot_id)?)
    }

    /// All slots in insertion order
    pub fn list_slots(&self) -> Result<Vec<AvailabilitySlot>, SlotError> {
        Ok(self.storage.list_slots()?)
    }

    /// Slots on the given calendar date, in insertion order
    pub fn slots_for_date(&self, date: NaiveDate) -> Result<Vec<AvailabilitySlot>, SlotError> {
        Ok(self
            .storage
            .list_slots()?
            .into_iter()
            .filter(|slot| slot.date == date)
            .collect())
    }

    pub fn slot_count(&self) -> Result<usize, SlotError> {
        Ok(self.storage.count_slots()?)
    }
}
