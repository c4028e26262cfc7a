use async_trait::async_trait;

use crate::error::{CameraError, StimulusViewError};
use crate::status::StatusMessage;

/// UI surface driven by `StimulusTestController`.
///
/// Implementations are expected to update widgets synchronously; the
/// controller owns all pacing.
pub trait StimulusView {
    /// Blocking notice for user-correctable input problems.
    fn alert(&self, message: &str);

    fn set_status(&self, status: StatusMessage);

    /// Width of the progress fill, in percent.
    fn set_progress(&self, percent: u8);

    /// Insert the full-screen flash overlay.
    ///
    /// # Errors
    ///
    /// Returns `StimulusViewError::OverlayUnavailable` if the overlay could not
    /// be put on screen. No flash timestamp is recorded in that case.
    fn show_flash(&self) -> Result<(), StimulusViewError>;

    fn hide_flash(&self);
}

/// Live video preview source.
///
/// Futures are not required to be `Send`: webview-backed sources hold
/// thread-local handles.
#[async_trait(?Send)]
pub trait CameraSource: Send + Sync {
    /// Request video-only access and bind the stream to the preview surface.
    ///
    /// # Errors
    ///
    /// Returns `CameraError` when access is denied or no device is available.
    async fn open_preview(&self) -> Result<(), CameraError>;
}
