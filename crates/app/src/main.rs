use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{
    CameraSource, Clock, HttpTestSubmitter, StimulusTestController, SubmitterConfig,
};
use tracing::info;
use ui::platform::{LinkOpenerRef, SystemBrowserOpener, WebviewCamera};
use ui::{App, UiApp, build_app_context};

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidTimeout { raw: String },
    InvalidServerUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidTimeout { raw } => write!(f, "invalid --timeout-secs value: {raw}"),
            ArgsError::InvalidServerUrl { raw } => write!(f, "invalid --server value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--server <url>] [--timeout-secs <n>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --server http://127.0.0.1:5000");
    eprintln!("  --timeout-secs 30");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  STIMULUS_SERVER_URL, STIMULUS_TIMEOUT_SECS");
}

/// Command-line overrides; unset fields fall back to the environment.
#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    server: Option<String>,
    timeout: Option<Duration>,
    help: bool,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut parsed = Self::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--server" => {
                    let value = require_value(args, "--server")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidServerUrl { raw: value });
                    }
                    parsed.server = Some(value);
                }
                "--timeout-secs" => {
                    let value = require_value(args, "--timeout-secs")?;
                    let secs: u64 = value
                        .trim()
                        .parse()
                        .ok()
                        .filter(|secs| *secs > 0)
                        .ok_or_else(|| ArgsError::InvalidTimeout { raw: value.clone() })?;
                    parsed.timeout = Some(Duration::from_secs(secs));
                }
                "--help" | "-h" => parsed.help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }
        Ok(parsed)
    }

    fn submitter_config(&self) -> Result<SubmitterConfig, Box<dyn std::error::Error>> {
        let mut config = match self.server.as_deref() {
            Some(raw) => SubmitterConfig::new(raw).map_err(|_| ArgsError::InvalidServerUrl {
                raw: raw.to_string(),
            })?,
            None => SubmitterConfig::from_env()?,
        };
        if let Some(timeout) = self.timeout {
            config = config.with_timeout(timeout);
        }
        Ok(config)
    }
}

struct DesktopApp {
    controller: Arc<StimulusTestController>,
}

impl UiApp for DesktopApp {
    fn controller(&self) -> Arc<StimulusTestController> {
        Arc::clone(&self.controller)
    }

    fn camera(&self) -> Arc<dyn CameraSource> {
        Arc::new(WebviewCamera)
    }

    fn link_opener(&self) -> LinkOpenerRef {
        Arc::new(SystemBrowserOpener)
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse(&mut std::env::args().skip(1)).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    if args.help {
        print_usage();
        return Ok(());
    }

    dioxus::logger::initialize_default();

    let config = args.submitter_config()?;
    info!(server = %config.base_url(), timeout = ?config.timeout(), "starting stimulus test client");
    let submitter = HttpTestSubmitter::new(config)?;
    let controller = Arc::new(StimulusTestController::new(
        Clock::system(),
        Arc::new(submitter),
    ));

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { controller });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Flash Stimulus Test")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
