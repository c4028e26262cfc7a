#![forbid(unsafe_code)]

pub mod controller;
pub mod error;
pub mod sleep;
pub mod status;
pub mod submit;
pub mod view;

pub use stimulus_core::Clock;

pub use controller::{AbortReason, RunOutcome, RunReport, StimulusTestController};
pub use error::{CameraError, RunError, StimulusViewError, SubmitError};
pub use sleep::{Sleeper, TokioSleeper};
pub use status::{ENTER_PATIENT_NAME, RESULTS_LINK_LABEL, StatusMessage};
pub use submit::{HttpTestSubmitter, RunTestRequest, SubmitterConfig, TestSubmitter};
pub use view::{CameraSource, StimulusView};
