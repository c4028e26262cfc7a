use dioxus::prelude::*;
use services::{StatusMessage, StimulusView, StimulusViewError};

/// `StimulusView` backed by component signals.
#[derive(Clone, Copy, PartialEq)]
pub struct SignalStimulusView {
    pub status: Signal<Option<StatusMessage>>,
    pub progress: Signal<u8>,
    pub flash_visible: Signal<bool>,
    pub alert: Signal<Option<String>>,
}

/// Allocates the signals behind a `SignalStimulusView` in the current scope.
pub fn use_stimulus_view() -> SignalStimulusView {
    SignalStimulusView {
        status: use_signal(|| None),
        progress: use_signal(|| 0),
        flash_visible: use_signal(|| false),
        alert: use_signal(|| None),
    }
}

impl SignalStimulusView {
    pub fn clear_alert(&self) {
        let mut alert = self.alert;
        alert.set(None);
    }
}

impl StimulusView for SignalStimulusView {
    fn alert(&self, message: &str) {
        let mut alert = self.alert;
        alert.set(Some(message.to_string()));
    }

    fn set_status(&self, status: StatusMessage) {
        let mut current = self.status;
        current.set(Some(status));
    }

    fn set_progress(&self, percent: u8) {
        let mut progress = self.progress;
        progress.set(percent);
    }

    fn show_flash(&self) -> Result<(), StimulusViewError> {
        let mut flash_visible = self.flash_visible;
        let mut visible = flash_visible
            .try_write()
            .map_err(|_| StimulusViewError::OverlayUnavailable)?;
        *visible = true;
        Ok(())
    }

    fn hide_flash(&self) {
        let mut visible = self.flash_visible;
        visible.set(false);
    }
}
