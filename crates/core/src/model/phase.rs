use thiserror::Error;

/// Lifecycle of a single stimulus run.
///
/// ```text
/// Idle -> Running -> Submitted -> Succeeded | Failed
///            \-> Aborted
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunPhase {
    #[default]
    Idle,
    Running,
    Submitted,
    Succeeded,
    Failed,
    Aborted,
}

impl RunPhase {
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::Running)
                | (Self::Running, Self::Submitted | Self::Aborted)
                | (Self::Submitted, Self::Succeeded | Self::Failed)
        )
    }

    /// Move to `next`, rejecting transitions outside the run lifecycle.
    ///
    /// # Errors
    ///
    /// Returns `RunPhaseError::InvalidTransition` for any other edge.
    pub fn transition(self, next: Self) -> Result<Self, RunPhaseError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(RunPhaseError::InvalidTransition {
                from: self,
                to: next,
            })
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum RunPhaseError {
    #[error("invalid run phase transition from {from:?} to {to:?}")]
    InvalidTransition { from: RunPhase, to: RunPhase },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_reaches_succeeded() {
        let phase = RunPhase::Idle
            .transition(RunPhase::Running)
            .and_then(|p| p.transition(RunPhase::Submitted))
            .and_then(|p| p.transition(RunPhase::Succeeded))
            .unwrap();
        assert_eq!(phase, RunPhase::Succeeded);
    }

    #[test]
    fn abort_is_only_reachable_before_submit() {
        assert!(RunPhase::Running.can_transition_to(RunPhase::Aborted));
        assert!(!RunPhase::Submitted.can_transition_to(RunPhase::Aborted));
        assert!(!RunPhase::Idle.can_transition_to(RunPhase::Aborted));
    }

    #[test]
    fn terminal_phases_do_not_move() {
        for terminal in [RunPhase::Succeeded, RunPhase::Failed, RunPhase::Aborted] {
            for next in [
                RunPhase::Idle,
                RunPhase::Running,
                RunPhase::Submitted,
                RunPhase::Succeeded,
                RunPhase::Failed,
                RunPhase::Aborted,
            ] {
                assert!(terminal.transition(next).is_err(), "{terminal:?} -> {next:?}");
            }
        }
    }

    #[test]
    fn skipping_submit_is_rejected() {
        let err = RunPhase::Running.transition(RunPhase::Succeeded).unwrap_err();
        assert_eq!(
            err,
            RunPhaseError::InvalidTransition {
                from: RunPhase::Running,
                to: RunPhase::Succeeded,
            }
        );
    }
}
