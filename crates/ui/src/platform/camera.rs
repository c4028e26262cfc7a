use async_trait::async_trait;
use dioxus::document::eval;
use serde::Deserialize;
use services::{CameraError, CameraSource};

use super::scripts::camera_preview_script;

pub const VIDEO_ELEMENT_ID: &str = "webcam";

/// Camera preview through the webview's `navigator.mediaDevices`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebviewCamera;

#[derive(Debug, Deserialize)]
struct CameraProbe {
    ok: bool,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl CameraProbe {
    fn into_result(self) -> Result<(), CameraError> {
        if self.ok {
            return Ok(());
        }
        let message = self.message.unwrap_or_default();
        match self.name.as_deref() {
            Some("NotAllowedError" | "SecurityError") => Err(CameraError::Denied(message)),
            _ => Err(CameraError::Unavailable(message)),
        }
    }
}

#[async_trait(?Send)]
impl CameraSource for WebviewCamera {
    async fn open_preview(&self) -> Result<(), CameraError> {
        eval(&camera_preview_script(VIDEO_ELEMENT_ID))
            .join::<CameraProbe>()
            .await
            .map_err(|err| CameraError::Unavailable(format!("{err:?}")))?
            .into_result()
    }
}
