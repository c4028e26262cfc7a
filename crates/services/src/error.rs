//! Shared error types for the services crate.

use thiserror::Error;

use stimulus_core::model::{PatientNameError, RunPhaseError};

/// Errors emitted while submitting a run to the test server.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SubmitError {
    #[error("invalid server url {raw:?}: {reason}")]
    InvalidBaseUrl { raw: String, reason: String },
    #[error("run_test request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted while acquiring the camera preview.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CameraError {
    #[error("camera access denied: {0}")]
    Denied(String),
    #[error("camera unavailable: {0}")]
    Unavailable(String),
}

/// Errors reported by a `StimulusView` implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StimulusViewError {
    #[error("flash overlay could not be inserted")]
    OverlayUnavailable,
}

/// Errors that prevent a run from starting.
///
/// Failures after the run has started are reported through `RunReport`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RunError {
    #[error(transparent)]
    InvalidPatientName(#[from] PatientNameError),
    #[error("a stimulus run is already in progress")]
    AlreadyRunning,
    #[error(transparent)]
    Phase(#[from] RunPhaseError),
}
