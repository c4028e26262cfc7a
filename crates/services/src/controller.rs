use std::convert::Infallible;
use std::pin::pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use futures::future::{Either, select};
use stimulus_core::model::{
    FlashTimestamp, PROGRESS_COMPLETE, PatientName, RunPhase, RunTiming, TestSession,
};
use tracing::{debug, error, info, warn};

use crate::error::{CameraError, RunError, SubmitError};
use crate::sleep::{Sleeper, TokioSleeper};
use crate::status::{ENTER_PATIENT_NAME, StatusMessage};
use crate::submit::{RunTestRequest, TestSubmitter};
use crate::view::{CameraSource, StimulusView};
use crate::Clock;

/// Why a run stopped before submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    FlashTimestampMissing,
}

#[derive(Debug)]
pub enum RunOutcome {
    Succeeded { results_url: String },
    Failed(SubmitError),
    Aborted(AbortReason),
}

/// Final state of one run.
#[derive(Debug)]
pub struct RunReport {
    pub patient: PatientName,
    pub flash_timestamp: Option<FlashTimestamp>,
    /// Cosmetic progress at the moment the run ended.
    pub progress: u8,
    pub phase: RunPhase,
    pub outcome: RunOutcome,
}

/// Drives the stimulus test: camera preview, timed flash, submission.
pub struct StimulusTestController {
    clock: Clock,
    timing: RunTiming,
    sleeper: Arc<dyn Sleeper>,
    submitter: Arc<dyn TestSubmitter>,
    in_flight: AtomicBool,
}

impl StimulusTestController {
    #[must_use]
    pub fn new(clock: Clock, submitter: Arc<dyn TestSubmitter>) -> Self {
        Self {
            clock,
            timing: RunTiming::default(),
            sleeper: Arc::new(TokioSleeper),
            submitter,
            in_flight: AtomicBool::new(false),
        }
    }

    #[must_use]
    pub fn with_timing(mut self, timing: RunTiming) -> Self {
        self.timing = timing;
        self
    }

    #[must_use]
    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    #[must_use]
    pub fn timing(&self) -> RunTiming {
        self.timing
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Bind the live camera stream to the preview surface.
    ///
    /// On failure the status line asks for camera access; nothing is retried.
    ///
    /// # Errors
    ///
    /// Returns the `CameraError` reported by `camera`.
    pub async fn init_camera_preview(
        &self,
        camera: &dyn CameraSource,
        view: &dyn StimulusView,
    ) -> Result<(), CameraError> {
        match camera.open_preview().await {
            Ok(()) => {
                debug!("camera preview bound");
                Ok(())
            }
            Err(err) => {
                view.set_status(StatusMessage::CameraAccessRequired);
                error!(error = %err, "webcam error");
                Err(err)
            }
        }
    }

    /// Run one flash stimulus test for `raw_patient_name`.
    ///
    /// Failures after the run has started (missing timestamp, rejected or
    /// failed submission) are reported in the returned `RunReport`.
    ///
    /// # Errors
    ///
    /// Returns `RunError::InvalidPatientName` (after alerting the user) when
    /// the trimmed name is empty, and `RunError::AlreadyRunning` when another
    /// run holds this controller.
    pub async fn start_run(
        &self,
        raw_patient_name: &str,
        view: &dyn StimulusView,
    ) -> Result<RunReport, RunError> {
        let patient = match PatientName::parse(raw_patient_name) {
            Ok(patient) => patient,
            Err(err) => {
                view.alert(ENTER_PATIENT_NAME);
                return Err(err.into());
            }
        };
        let _in_flight = InFlightGuard::acquire(&self.in_flight).ok_or(RunError::AlreadyRunning)?;

        let session = TestSession::new(patient, self.clock.now());
        let phase = RunPhase::Idle.transition(RunPhase::Running)?;
        view.set_status(StatusMessage::Running);
        view.set_progress(0);
        info!(patient = %session.patient(), started_at = %session.started_at(), "stimulus run started");

        // The ticker only runs while the sequence is pending; once the
        // sequence resolves it is never polled again.
        let sequence = pin!(self.run_sequence(&session, view));
        let ticker = pin!(self.tick_progress(&session, view));
        let outcome = match select(sequence, ticker).await {
            Either::Left((outcome, _)) => outcome,
            Either::Right((never, _)) => match never {},
        };

        let phase = match &outcome {
            RunOutcome::Succeeded { results_url } => {
                session.progress().complete();
                view.set_progress(PROGRESS_COMPLETE);
                view.set_status(StatusMessage::Completed {
                    patient: session.patient().clone(),
                    results_url: results_url.clone(),
                });
                info!(patient = %session.patient(), %results_url, "stimulus run completed");
                phase
                    .transition(RunPhase::Submitted)?
                    .transition(RunPhase::Succeeded)?
            }
            RunOutcome::Failed(err) => {
                view.set_status(StatusMessage::Failed);
                error!(patient = %session.patient(), error = %err, "run_test submission failed");
                phase
                    .transition(RunPhase::Submitted)?
                    .transition(RunPhase::Failed)?
            }
            RunOutcome::Aborted(reason) => {
                view.set_status(StatusMessage::TimestampError);
                warn!(patient = %session.patient(), ?reason, "stimulus run aborted before submit");
                phase.transition(RunPhase::Aborted)?
            }
        };

        Ok(RunReport {
            patient: session.patient().clone(),
            flash_timestamp: session.flash_timestamp(),
            progress: session.progress().percent(),
            phase,
            outcome,
        })
    }

    async fn run_sequence(&self, session: &TestSession, view: &dyn StimulusView) -> RunOutcome {
        self.sleeper.sleep(self.timing.flash_delay()).await;
        self.present_flash(session, view).await;
        self.sleeper.sleep(self.timing.settle()).await;

        let Some(flash_timestamp) = session.flash_timestamp() else {
            return RunOutcome::Aborted(AbortReason::FlashTimestampMissing);
        };

        let request = RunTestRequest::new(flash_timestamp, session.patient().clone());
        match self.submitter.submit(&request).await {
            Ok(()) => RunOutcome::Succeeded {
                results_url: self.submitter.results_url(session.patient()),
            },
            Err(err) => RunOutcome::Failed(err),
        }
    }

    async fn present_flash(&self, session: &TestSession, view: &dyn StimulusView) {
        match view.show_flash() {
            Ok(()) => {
                let at = FlashTimestamp::from_datetime(self.clock.now());
                match session.record_flash(at) {
                    Ok(()) => debug!(flash_timestamp = %at, "flash overlay shown"),
                    Err(err) => warn!(error = %err, "flash timestamp not recorded"),
                }
                self.sleeper.sleep(self.timing.flash_duration()).await;
                view.hide_flash();
            }
            Err(err) => {
                error!(error = %err, "flash overlay could not be shown");
                self.sleeper.sleep(self.timing.flash_duration()).await;
            }
        }
    }

    async fn tick_progress(&self, session: &TestSession, view: &dyn StimulusView) -> Infallible {
        let interval = self.timing.progress_interval();
        let step = self.timing.progress_step();
        loop {
            self.sleeper.sleep(interval).await;
            if let Some(percent) = session.progress().advance(step) {
                view.set_progress(percent);
            }
        }
    }
}

struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
