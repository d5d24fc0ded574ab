//! Client configuration: endpoint, credentials and timeouts.

use std::time::Duration;

use url::Url;

use crate::Error;

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.ukfast.io";

/// Request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const ENV_API_KEY: &str = "UKF_API_KEY";
pub const ENV_BASE_URL: &str = "UKF_API_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "UKF_API_TIMEOUT_SECS";

/// Settings for [`HttpTransport`](crate::HttpTransport).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the API. Defaults to `https://api.ukfast.io`.
    pub base_url: String,
    /// Sent verbatim in the `Authorization` header.
    pub api_key: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl ClientConfig {
    /// Creates a configuration pointing at the production API.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: default_user_agent(),
        }
    }

    /// Reads the configuration from the environment, loading `.env` first if present.
    ///
    /// `UKF_API_KEY` is required; `UKF_API_BASE_URL` and `UKF_API_TIMEOUT_SECS`
    /// fall back to the defaults.
    pub fn from_env() -> Result<Self, Error> {
        let _ = dotenvy::dotenv();
        let api_key = std::env::var(ENV_API_KEY)
            .map_err(|_| Error::Validation(format!("{} is not set", ENV_API_KEY)))?;
        let mut config = Self::new(api_key);
        if let Ok(base_url) = std::env::var(ENV_BASE_URL) {
            config = config.with_base_url(&base_url);
        }
        if let Some(secs) = env_u64(ENV_TIMEOUT_SECS) {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        config.validate()?;
        Ok(config)
    }

    /// Overrides the base URL. Used for testing with wiremock.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Checks that the key is present and the base URL is an http(s) URL.
    pub fn validate(&self) -> Result<(), Error> {
        if self.api_key.trim().is_empty() {
            return Err(Error::Validation("API key is empty".to_string()));
        }
        let url = Url::parse(&self.base_url)
            .map_err(|e| Error::Validation(format!("Invalid base URL '{}': {}", self.base_url, e)))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(Error::Validation(format!(
                "Unsupported URL scheme '{}'",
                url.scheme()
            )));
        }
        if self.timeout.is_zero() {
            return Err(Error::Validation("Timeout must be non-zero".to_string()));
        }
        Ok(())
    }
}

fn default_user_agent() -> String {
    format!("ukfast-api-rust/{}", env!("CARGO_PKG_VERSION"))
}

fn env_u64(key: &str) -> Option<u64> {
    std::env::var(key)
        .ok()
        .and_then(|val| val.parse::<u64>().ok())
}
