//! # State Module
//!
//! UI-agnostic state for each view. Nothing in here depends on egui, so every
//! view's behaviour is testable without a window.

pub mod calendar_state;
pub mod form_state;
pub mod modal_state;
pub mod ui_state;
pub mod week_state;

pub use calendar_state::CalendarPickerState;
pub use form_state::SlotFormState;
pub use modal_state::{ModalState, ProfileFormState};
pub use ui_state::UIState;
pub use week_state::{DayColumn, WeekViewState};
