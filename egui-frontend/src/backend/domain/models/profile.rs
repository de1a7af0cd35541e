/// Validation failures of the profile editor
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileValidationError {
    #[error("Please fill in all required fields")]
    MissingField(&'static str),
}

impl ProfileValidationError {
    /// Name of the field that failed validation
    pub fn field(&self) -> &'static str {
        match self {
            ProfileValidationError::MissingField(field) => field,
        }
    }
}
