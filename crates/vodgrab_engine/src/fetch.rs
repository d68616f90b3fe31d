use std::time::Duration;

use thiserror::Error;
use vodgrab_logging::{grab_debug, grab_info};

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            user_agent: concat!("vodgrab/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("timeout")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
}

/// Blocking HTTP client shared across every fetch of one run, so that
/// connections are reused between page, manifest and variant requests.
pub struct PageClient {
    client: reqwest::blocking::Client,
}

impl PageClient {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .user_agent(settings.user_agent)
            .build()
            .map_err(|err| FetchError::Network(err.to_string()))?;
        Ok(Self { client })
    }

    /// Fetches `url` and returns the body text. Non-success statuses
    /// are errors; timeouts surface as [`FetchError::Timeout`].
    pub fn get_text(&self, url: &str) -> Result<String, FetchError> {
        self.get_text_with_timeout(url, None)
    }

    /// Same as [`PageClient::get_text`] with a per-request timeout
    /// override, used for the short manifest fetches.
    pub fn get_text_with_timeout(
        &self,
        url: &str,
        timeout: Option<Duration>,
    ) -> Result<String, FetchError> {
        let parsed =
            reqwest::Url::parse(url).map_err(|err| FetchError::InvalidUrl(err.to_string()))?;
        grab_info!("GET {url}");

        let mut request = self.client.get(parsed);
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().map_err(map_reqwest_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let body = response.text().map_err(map_reqwest_error)?;
        grab_debug!("GET {url} -> {status} ({} bytes)", body.len());
        Ok(body)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::Timeout;
    }
    FetchError::Network(err.to_string())
}
