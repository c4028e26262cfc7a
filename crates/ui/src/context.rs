use std::sync::Arc;

use services::{CameraSource, StimulusTestController};

use crate::platform::LinkOpenerRef;

pub trait UiApp: Send + Sync {
    fn controller(&self) -> Arc<StimulusTestController>;
    fn camera(&self) -> Arc<dyn CameraSource>;
    fn link_opener(&self) -> LinkOpenerRef;
}

#[derive(Clone)]
pub struct AppContext {
    controller: Arc<StimulusTestController>,
    camera: Arc<dyn CameraSource>,
    link_opener: LinkOpenerRef,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            controller: app.controller(),
            camera: app.camera(),
            link_opener: app.link_opener(),
        }
    }

    #[must_use]
    pub fn controller(&self) -> Arc<StimulusTestController> {
        Arc::clone(&self.controller)
    }

    #[must_use]
    pub fn camera(&self) -> Arc<dyn CameraSource> {
        Arc::clone(&self.camera)
    }

    #[must_use]
    pub fn link_opener(&self) -> LinkOpenerRef {
        Arc::clone(&self.link_opener)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
