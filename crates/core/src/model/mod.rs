mod patient;
mod phase;
mod progress;
mod session;
mod timing;

pub use patient::{PatientName, PatientNameError};
pub use phase::{RunPhase, RunPhaseError};
pub use progress::{PROGRESS_COMPLETE, ProgressMeter};
pub use session::{FlashTimestamp, FlashTimestampError, TestSession};
pub use timing::{RunTiming, RunTimingError};
