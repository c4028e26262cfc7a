use std::env;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use stimulus_core::model::{FlashTimestamp, PatientName};
use tracing::{debug, warn};
use url::Url;

use crate::error::SubmitError;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Body of `POST /run_test`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunTestRequest {
    pub flash_timestamp: FlashTimestamp,
    pub patient_name: PatientName,
}

impl RunTestRequest {
    #[must_use]
    pub fn new(flash_timestamp: FlashTimestamp, patient_name: PatientName) -> Self {
        Self {
            flash_timestamp,
            patient_name,
        }
    }
}

/// Sends a finished stimulus run to the test server.
#[async_trait]
pub trait TestSubmitter: Send + Sync {
    /// Submit a run. Only the response status is inspected.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::HttpStatus` for non-2xx responses and
    /// `SubmitError::Http` when the request never completes.
    async fn submit(&self, request: &RunTestRequest) -> Result<(), SubmitError>;

    /// Link to the results page for `patient`.
    fn results_url(&self, patient: &PatientName) -> String;
}

#[derive(Clone, Debug)]
pub struct SubmitterConfig {
    base_url: Url,
    timeout: Duration,
}

impl SubmitterConfig {
    /// # Errors
    ///
    /// Returns `SubmitError::InvalidBaseUrl` unless `raw` is an absolute
    /// http(s) URL.
    pub fn new(raw: &str) -> Result<Self, SubmitError> {
        let invalid = |reason: String| SubmitError::InvalidBaseUrl {
            raw: raw.to_string(),
            reason,
        };
        let base_url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {}", base_url.scheme())));
        }
        if base_url.cannot_be_a_base() {
            return Err(invalid("url cannot be a base".to_string()));
        }
        Ok(Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Read `STIMULUS_SERVER_URL` and `STIMULUS_TIMEOUT_SECS`, falling back to
    /// the local development server.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::InvalidBaseUrl` if the configured URL is invalid.
    pub fn from_env() -> Result<Self, SubmitError> {
        let raw = env::var("STIMULUS_SERVER_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.into());
        let config = Self::new(&raw)?;
        let timeout = match env::var("STIMULUS_TIMEOUT_SECS") {
            Ok(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    warn!(value = %value, "ignoring invalid STIMULUS_TIMEOUT_SECS");
                    DEFAULT_TIMEOUT
                }
            },
            Err(_) => DEFAULT_TIMEOUT,
        };
        Ok(config.with_timeout(timeout))
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    #[must_use]
    pub fn run_test_url(&self) -> Url {
        self.endpoint(&["run_test"])
    }

    /// `GET {base}/results/{patient}` with the name encoded as one segment.
    #[must_use]
    pub fn results_url(&self, patient: &PatientName) -> Url {
        self.endpoint(&["results", patient.as_str()])
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        // Validated in `new`: http(s) URLs always have path segments.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

/// `TestSubmitter` that posts JSON with reqwest.
#[derive(Clone, Debug)]
pub struct HttpTestSubmitter {
    client: Client,
    config: SubmitterConfig,
}

impl HttpTestSubmitter {
    /// # Errors
    ///
    /// Returns `SubmitError::Http` if the HTTP client cannot be built.
    pub fn new(config: SubmitterConfig) -> Result<Self, SubmitError> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl TestSubmitter for HttpTestSubmitter {
    async fn submit(&self, request: &RunTestRequest) -> Result<(), SubmitError> {
        let url = self.config.run_test_url();
        debug!(%url, patient = %request.patient_name, flash_timestamp = %request.flash_timestamp, "posting run_test");

        let response = self.client.post(url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, body = %body, "run_test rejected by server");
            return Err(SubmitError::HttpStatus(status));
        }

        Ok(())
    }

    fn results_url(&self, patient: &PatientName) -> String {
        self.config.results_url(patient).into()
    }
}
