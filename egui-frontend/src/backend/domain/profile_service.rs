use log::{info, warn};

use crate::backend::domain::models::profile::ProfileValidationError;
use shared::{SlotBookConfig, UserProfile};

/// Service for validating and producing profile snapshots
#[derive(Clone)]
pub struct ProfileService {
    config: SlotBookConfig,
}

impl ProfileService {
    pub fn new() -> Self {
        Self::with_config(SlotBookConfig::default())
    }

    pub fn with_config(config: SlotBookConfig) -> Self {
        Self { config }
    }

    /// Profile the session starts with
    pub fn default_profile(&self) -> UserProfile {
        self.config.seed_profile.clone()
    }

    /// First name, last name and email are required; no format checks
    pub fn validate_profile(&self, profile: &UserProfile) -> Result<(), ProfileValidationError> {
        if profile.first_name.trim().is_empty() {
            return Err(ProfileValidationError::MissingField("first_name"));
        }
        if profile.last_name.trim().is_empty() {
            return Err(ProfileValidationError::MissingField("last_name"));
        }
        if profile.email.trim().is_empty() {
            return Err(ProfileValidationError::MissingField("email"));
        }
        Ok(())
    }

    /// Validate the submitted form and return it as the new profile snapshot
    pub fn save_profile(&self, form: UserProfile) -> Result<UserProfile, ProfileValidationError> {
        if let Err(e) = self.validate_profile(&form) {
            warn!("Rejected profile update: missing {}", e.field());
            return Err(e);
        }

        let profile = UserProfile {
            first_name: form.first_name.trim().to_string(),
            last_name: form.last_name.trim().to_string(),
            email: form.email.trim().to_string(),
            phone: form.phone.trim().to_string(),
            timezone: form.timezone,
        };

        info!("Saved profile for {} ({})", profile.display_name(), profile.timezone);
        Ok(profile)
    }

    pub fn generate_success_message(&self, profile: &UserProfile) -> String {
        format!("Profile updated for {}", profile.display_name())
    }

    pub fn get_config(&self) -> &SlotBookConfig {
        &self.config
    }
}

impl Default for ProfileService {
    fn default() -> Self {
        Self::new()
    }
}
