use anyhow::{anyhow, Result};
use shared::AvailabilitySlot;
use std::sync::{Arc, RwLock};

use super::traits::SlotStorage;

/// Ordered in-memory slot collection, lost when the process exits
#[derive(Clone, Default)]
pub struct InMemorySlotRepository {
    slots: Arc<RwLock<Vec<AvailabilitySlot>>>,
}

impl InMemorySlotRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotStorage for InMemorySlotRepository {
    fn store_slot(&self, slot: &AvailabilitySlot) -> Result<()> {
        let mut slots = self
            .slots
            .write()
            .map_err(|_| anyhow!("Slot storage lock poisoned"))?;
        slots.push(slot.clone());
        Ok(())
    }

    fn get_slot(&self, slot_id: &str) -> Result<Option<AvailabilitySlot>> {
        let slots = self
            .slots
            .read()
            .map_err(|_| anyhow!("Slot storage lock poisoned"))?;
        Ok(slots.iter().find(|s| s.id == slot_id).cloned())
    }

    fn list_slots(&self) -> Result<Vec<AvailabilitySlot>> {
        let slots = self
            .slots
            .read()
            .map_err(|_| anyhow!("Slot storage lock poisoned"))?;
        Ok(slots.clone())
    }

    fn update_slot(&self, slot: &AvailabilitySlot) -> Result<bool> {
        let mut slots = self
            .slots
            .write()
            .map_err(|_| anyhow!("Slot storage lock poisoned"))?;
        match slots.iter_mut().find(|s| s.id == slot.id) {
            Some(existing) => {
                *existing = slot.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete_slot(&self, slot_id: &str) -> Result<bool> {
        let mut slots = self
            .slots
            .write()
            .map_err(|_| anyhow!("Slot storage lock poisoned"))?;
        let before = slots.len();
        slots.retain(|s| s.id != slot_id);
        Ok(slots.len() != before)
    }

    fn count_slots(&self) -> Result<usize> {
        let slots = self
            .slots
            .read()
            .map_err(|_| anyhow!("Slot storage lock poisoned"))?;
        Ok(slots.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn slot(id: &str, day: u32, start: &str, end: &str) -> AvailabilitySlot {
        AvailabilitySlot {
            id: id.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
            start_time: start.to_string(),
            end_time: end.to_string(),
        }
    }

    #[test]
    fn test_store_preserves_insertion_order() {
        let repo = InMemorySlotRepository::new();
        repo.store_slot(&slot("slot::b", 14, "09:00", "10:00")).unwrap();
        repo.store_slot(&slot("slot::a", 10, "08:00", "09:00")).unwrap();

        let ids: Vec<String> = repo
            .list_slots()
            .unwrap()
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec!["slot::b", "slot::a"]);
        assert_eq!(repo.count_slots().unwrap(), 2);
    }

    #[test]
    fn test_update_replaces_in_place() {
        let repo = InMemorySlotRepository::new();
        repo.store_slot(&slot("slot::a", 10, "08:00", "09:00")).unwrap();
        repo.store_slot(&slot("slot::b", 11, "08:00", "09:00")).unwrap();

        let updated = slot("slot::a", 10, "13:00", "14:00");
        assert!(repo.update_slot(&updated).unwrap());

        let slots = repo.list_slots().unwrap();
        assert_eq!(slots[0], updated);
        assert_eq!(slots[1].id, "slot::b");
    }

    #[test]
    fn test_update_unknown_slot_is_noop() {
        let repo = InMemorySlotRepository::new();
        repo.store_slot(&slot("slot::a", 10, "08:00", "09:00")).unwrap();

        assert!(!repo.update_slot(&slot("slot::missing", 10, "13:00", "14:00")).unwrap());
        assert_eq!(repo.list_slots().unwrap(), vec![slot("slot::a", 10, "08:00", "09:00")]);
    }

    #[test]
    fn test_delete_slot() {
        let repo = InMemorySlotRepository::new();
        repo.store_slot(&slot("slot::a", 10, "08:00", "09:00")).unwrap();

        assert!(repo.delete_slot("slot::a").unwrap());
        assert!(!repo.delete_slot("slot::a").unwrap());
        assert!(repo.get_slot("slot::a").unwrap().is_none());
    }

    #[test]
    fn test_clones_share_the_same_collection() {
        let repo = InMemorySlotRepository::new();
        let other = repo.clone();
        repo.store_slot(&slot("slot::a", 10, "08:00", "09:00")).unwrap();

        assert_eq!(other.count_slots().unwrap(), 1);
    }
}
