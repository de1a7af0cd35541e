//! # Backend Module
//!
//! Contains all non-UI logic for SlotBook.
//!
//! - **Domain**: slot rules, date arithmetic, form and profile validation
//! - **Storage**: the in-memory slot collection behind the `SlotStorage` trait
//!
//! `Backend` is the composition root for these services. The app owns exactly
//! one and hands it to views by reference.

pub mod domain;
pub mod storage;

use anyhow::Result;
use log::info;
use shared::SlotBookConfig;
use std::sync::Arc;

use crate::backend::domain::{AvailabilityFormService, ProfileService, SlotService};
use crate::backend::storage::{InMemorySlotRepository, SlotStorage};

/// All backend services used by the UI
#[derive(Clone)]
pub struct Backend {
    pub slot_service: SlotService,
    pub availability_form_service: AvailabilityFormService,
    pub profile_service: ProfileService,
}

impl Backend {
    /// Backend with an empty in-memory slot store and default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(SlotBookConfig::default())
    }

    pub fn with_config(config: SlotBookConfig) -> Result<Self> {
        Self::with_storage(Arc::new(InMemorySlotRepository::new()), config)
    }

    pub fn with_storage(storage: Arc<dyn SlotStorage>, config: SlotBookConfig) -> Result<Self> {
        info!("Setting up slot store with {} existing slots", storage.count_slots()?);

        let backend = Self {
            slot_service: SlotService::new(storage),
            availability_form_service: AvailabilityFormService::new(),
            profile_service: ProfileService::with_config(config),
        };

        info!("Backend ready");
        Ok(backend)
    }
}
