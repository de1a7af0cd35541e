//! # Storage Traits
//!
//! This module defines the storage abstraction the slot service works against,
//! so the domain layer does not depend on how slots are held.

use anyhow::Result;
use shared::AvailabilitySlot;

/// Trait defining the interface for availability slot storage operations
pub trait SlotStorage: Send + Sync {
    /// Append a new slot to the end of the collection
    fn store_slot(&self, slot: &AvailabilitySlot) -> Result<()>;

    /// Retrieve a specific slot by ID
    fn get_slot(&self, slot_id: &str) -> Result<Option<AvailabilitySlot>>;

    /// List all slots in insertion order
    fn list_slots(&self) -> Result<Vec<AvailabilitySlot>>;

    /// Replace the slot with the same ID in place
    /// Returns true if the slot was found and replaced, false otherwise
    fn update_slot(&self, slot: &AvailabilitySlot) -> Result<bool>;

    /// Delete a single slot
    /// Returns true if the slot was found and deleted, false otherwise
    fn delete_slot(&self, slot_id: &str) -> Result<bool>;

    /// Number of stored slots
    fn count_slots(&self) -> Result<usize> {
        Ok(self.list_slots()?.len())
    }
}
