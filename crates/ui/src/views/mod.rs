mod signal_view;
mod status;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use signal_view::{SignalStimulusView, use_stimulus_view};
pub use status::{ProgressBar, StatusLine};
pub use test::TestView;
