//! # UI Components Module
//!
//! This module organizes all UI components for SlotBook. Each submodule adds
//! `render_*` methods to `SlotBookApp` for one part of the screen.
//!
//! ## Module Organization:
//! - `styling` - Visual styling and color constants
//! - `header` - Title, timezone selector, theme toggle and profile dropdown
//! - `week_view` - Seven-day slot grid with navigation and inline editing
//! - `calendar_picker` - Month-grid popup for choosing the displayed week
//! - `slot_form` - "Add Availability Slot" form
//! - `profile_modal` - Profile editor window

pub mod calendar_picker;
pub mod header;
pub mod profile_modal;
pub mod slot_form;
pub mod styling;
pub mod week_view;

pub use styling::{colors, setup_slotbook_style};
