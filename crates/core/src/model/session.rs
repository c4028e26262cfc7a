use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::model::{PatientName, ProgressMeter};
use crate::time::datetime_to_epoch_seconds;

/// Wall-clock time at which the flash overlay was inserted, in fractional
/// seconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct FlashTimestamp(f64);

impl FlashTimestamp {
    #[must_use]
    pub fn from_epoch_seconds(seconds: f64) -> Self {
        Self(seconds)
    }

    #[must_use]
    pub fn from_datetime(at: DateTime<Utc>) -> Self {
        Self(datetime_to_epoch_seconds(at))
    }

    #[must_use]
    pub fn as_secs_f64(self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for FlashTimestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum FlashTimestampError {
    #[error("flash timestamp already recorded ({existing})")]
    AlreadyRecorded { existing: FlashTimestamp },
}

/// State owned by one run from start to outcome.
///
/// Each run gets a fresh session; nothing carries over between runs.
#[derive(Debug)]
pub struct TestSession {
    patient: PatientName,
    started_at: DateTime<Utc>,
    flash_timestamp: OnceLock<FlashTimestamp>,
    progress: ProgressMeter,
}

impl TestSession {
    #[must_use]
    pub fn new(patient: PatientName, started_at: DateTime<Utc>) -> Self {
        Self {
            patient,
            started_at,
            flash_timestamp: OnceLock::new(),
            progress: ProgressMeter::new(),
        }
    }

    #[must_use]
    pub fn patient(&self) -> &PatientName {
        &self.patient
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn progress(&self) -> &ProgressMeter {
        &self.progress
    }

    #[must_use]
    pub fn flash_timestamp(&self) -> Option<FlashTimestamp> {
        self.flash_timestamp.get().copied()
    }

    /// Record the flash time. Only the first call per session wins.
    ///
    /// # Errors
    ///
    /// Returns `FlashTimestampError::AlreadyRecorded` on any later call.
    pub fn record_flash(&self, at: FlashTimestamp) -> Result<(), FlashTimestampError> {
        self.flash_timestamp
            .set(at)
            .map_err(|_| FlashTimestampError::AlreadyRecorded {
                existing: self.flash_timestamp().unwrap_or(at),
            })
    }
}
