use std::sync::Arc;

mod camera;
mod links;
mod scripts;

pub trait UiLinkOpener: Send + Sync {
    fn open_url(&self, url: &str);
}

pub type LinkOpenerRef = Arc<dyn UiLinkOpener>;

pub use camera::{VIDEO_ELEMENT_ID, WebviewCamera};
pub use links::SystemBrowserOpener;
