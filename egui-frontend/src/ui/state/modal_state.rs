//! # Modal State Module
//!
//! This module contains all state related to the profile dropdown and the
//! profile editor modal.
//!
//! ## Responsibilities:
//! - Modal and dropdown visibility flags
//! - Profile form fields, pre-filled from the current profile on open
//! - Validation feedback while the editor is open

use log::info;
use shared::{Timezone, UserProfile};

use crate::backend::domain::ProfileService;

/// Profile editing form state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileFormState {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub timezone: Timezone,
    pub error_message: Option<String>,
}

impl ProfileFormState {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn populate_from_profile(&mut self, profile: &UserProfile) {
        self.first_name = profile.first_name.clone();
        self.last_name = profile.last_name.clone();
        self.email = profile.email.clone();
        self.phone = profile.phone.clone();
        self.timezone = profile.timezone;
        self.error_message = None;
    }

    /// The full form payload as a profile
    pub fn to_profile(&self) -> UserProfile {
        UserProfile {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            timezone: self.timezone,
        }
    }
}

/// Modal visibility and modal-specific state
#[derive(Debug, Default)]
pub struct ModalState {
    /// Whether the profile editor modal is visible
    pub show_profile_modal: bool,

    /// Profile editing form state
    pub profile_form: ProfileFormState,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the profile editor pre-filled from the current profile
    pub fn open_profile_editor(&mut self, profile: &UserProfile) {
        self.profile_form.populate_from_profile(profile);
        self.show_profile_modal = true;
        info!("👤 Opened profile editor");
    }

    /// Close the profile editor, discarding unsaved changes
    pub fn close_profile_editor(&mut self) {
        self.show_profile_modal = false;
        self.profile_form.clear();
    }

    /// Validate the form; on success close the editor and return the new profile.
    /// On failure the editor stays open with the error shown.
    pub fn save_profile(&mut self, profile_service: &ProfileService) -> Option<UserProfile> {
        match profile_service.save_profile(self.profile_form.to_profile()) {
            Ok(profile) => {
                self.close_profile_editor();
                Some(profile)
            }
            Err(e) => {
                self.profile_form.error_message = Some(e.to_string());
                None
            }
        }
    }
}
