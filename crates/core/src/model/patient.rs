use serde::Serialize;
use thiserror::Error;

/// Patient identifier entered by the operator (trimmed, non-empty).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PatientName(String);

impl PatientName {
    /// Validate raw input from the patient name field.
    ///
    /// # Errors
    ///
    /// Returns `PatientNameError::Empty` if the value is empty after trimming.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, PatientNameError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(PatientNameError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PatientName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PatientNameError {
    #[error("patient name cannot be empty")]
    Empty,
}
