//! # Domain Module
//!
//! Contains all business logic for SlotBook, independent of egui.
//!
//! ## Module Organization
//!
//! - **slot_service**: the session's slot store (add, update, delete, queries)
//! - **calendar**: week and month grid date arithmetic
//! - **availability_form**: validation and messages for the slot entry form
//! - **profile_service**: validation of profile edits
//! - **models**: validated inputs and domain error types
//!
//! ## Business Rules
//!
//! - No two slots share the same date, start time and end time
//! - A slot's start time is strictly before its end time (HH:MM, 24h)
//! - Weeks run Sunday to Saturday
//! - First name, last name and email are required on the profile

pub mod availability_form;
pub mod calendar;
pub mod models;
pub mod profile_service;
pub mod slot_service;

pub use availability_form::*;
pub use models::profile::ProfileValidationError;
pub use models::slot::{SlotError, ValidatedSlot};
pub use profile_service::*;
pub use slot_service::*;
