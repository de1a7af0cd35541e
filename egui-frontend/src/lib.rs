//! # SlotBook
//!
//! Availability slot scheduling in a single egui window.
//!
//! - `backend` holds the UI-agnostic slot store, date utilities and validation
//! - `ui` holds the view state machines and their egui rendering

pub mod backend;
pub mod ui;
