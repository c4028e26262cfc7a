use std::sync::atomic::{AtomicU8, Ordering};

pub const PROGRESS_COMPLETE: u8 = 100;

/// Cosmetic progress counter for a run, clamped to `0..=100`.
///
/// The value is decorative: it advances on a timer and does not track request
/// completion. Atomic so the ticker and the run sequence can share it by
/// reference inside one task.
#[derive(Debug, Default)]
pub struct ProgressMeter {
    percent: AtomicU8,
}

impl ProgressMeter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn percent(&self) -> u8 {
        self.percent.load(Ordering::Acquire)
    }

    /// Advance by `step`, saturating at 100.
    ///
    /// Returns the new value, or `None` if the meter was already full.
    pub fn advance(&self, step: u8) -> Option<u8> {
        self.percent
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                (current < PROGRESS_COMPLETE)
                    .then(|| current.saturating_add(step).min(PROGRESS_COMPLETE))
            })
            .ok()
            .map(|previous| previous.saturating_add(step).min(PROGRESS_COMPLETE))
    }

    pub fn complete(&self) {
        self.percent.store(PROGRESS_COMPLETE, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifty_ticks_of_two_fill_the_meter() {
        let meter = ProgressMeter::new();
        let mut last = 0;
        for _ in 0..50 {
            last = meter.advance(2).unwrap();
        }
        assert_eq!(last, PROGRESS_COMPLETE);
        assert_eq!(meter.advance(2), None);
        assert_eq!(meter.percent(), PROGRESS_COMPLETE);
    }

    #[test]
    fn advance_clamps_uneven_steps() {
        let meter = ProgressMeter::new();
        for _ in 0..14 {
            meter.advance(7);
        }
        assert_eq!(meter.percent(), 98);
        assert_eq!(meter.advance(7), Some(PROGRESS_COMPLETE));
    }

    #[test]
    fn complete_jumps_to_full() {
        let meter = ProgressMeter::new();
        meter.advance(10);
        meter.complete();
        assert_eq!(meter.percent(), PROGRESS_COMPLETE);
        assert_eq!(meter.advance(2), None);
    }
}
