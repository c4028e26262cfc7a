use std::time::Duration;

use thiserror::Error;

/// Fixed delays that shape a run, measured from run start.
///
/// The run executes these as an ordered sequence: wait `flash_delay`, show the
/// flash for `flash_duration`, then wait out the rest of `submit_delay` before
/// submitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunTiming {
    flash_delay: Duration,
    flash_duration: Duration,
    submit_delay: Duration,
    progress_interval: Duration,
    progress_step: u8,
}

impl RunTiming {
    pub const DEFAULT_FLASH_DELAY: Duration = Duration::from_millis(1000);
    pub const DEFAULT_FLASH_DURATION: Duration = Duration::from_millis(300);
    pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1400);
    pub const DEFAULT_PROGRESS_INTERVAL: Duration = Duration::from_millis(100);
    pub const DEFAULT_PROGRESS_STEP: u8 = 2;

    /// Build a validated timing profile.
    ///
    /// # Errors
    ///
    /// Returns `RunTimingError` when the submission step would not follow the
    /// end of the flash, or the progress tick is degenerate.
    pub fn new(
        flash_delay: Duration,
        flash_duration: Duration,
        submit_delay: Duration,
        progress_interval: Duration,
        progress_step: u8,
    ) -> Result<Self, RunTimingError> {
        let flash_end = flash_delay.saturating_add(flash_duration);
        if submit_delay < flash_end {
            return Err(RunTimingError::SubmitBeforeFlashEnds {
                submit_delay,
                flash_end,
            });
        }
        if progress_interval.is_zero() {
            return Err(RunTimingError::ZeroProgressInterval);
        }
        if progress_step == 0 || progress_step > 100 {
            return Err(RunTimingError::InvalidProgressStep(progress_step));
        }
        Ok(Self {
            flash_delay,
            flash_duration,
            submit_delay,
            progress_interval,
            progress_step,
        })
    }

    #[must_use]
    pub fn flash_delay(&self) -> Duration {
        self.flash_delay
    }

    #[must_use]
    pub fn flash_duration(&self) -> Duration {
        self.flash_duration
    }

    #[must_use]
    pub fn submit_delay(&self) -> Duration {
        self.submit_delay
    }

    /// Wait between removing the overlay and submitting.
    #[must_use]
    pub fn settle(&self) -> Duration {
        self.submit_delay
            .saturating_sub(self.flash_delay.saturating_add(self.flash_duration))
    }

    #[must_use]
    pub fn progress_interval(&self) -> Duration {
        self.progress_interval
    }

    #[must_use]
    pub fn progress_step(&self) -> u8 {
        self.progress_step
    }
}

impl Default for RunTiming {
    fn default() -> Self {
        Self {
            flash_delay: Self::DEFAULT_FLASH_DELAY,
            flash_duration: Self::DEFAULT_FLASH_DURATION,
            submit_delay: Self::DEFAULT_SUBMIT_DELAY,
            progress_interval: Self::DEFAULT_PROGRESS_INTERVAL,
            progress_step: Self::DEFAULT_PROGRESS_STEP,
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum RunTimingError {
    #[error("submit delay {submit_delay:?} is before the flash ends at {flash_end:?}")]
    SubmitBeforeFlashEnds {
        submit_delay: Duration,
        flash_end: Duration,
    },
    #[error("progress interval must be non-zero")]
    ZeroProgressInterval,
    #[error("progress step must be within 1..=100, got {0}")]
    InvalidProgressStep(u8),
}
