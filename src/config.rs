use std::time::Duration;

use crate::errors::Error;

/// Default API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.verident.com";

/// Default request timeout applied to every call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client configuration, passed explicitly to [`crate::Client::new`].
///
/// There is no process-wide key or logging toggle; everything the client
/// needs lives in this object.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API key used for Basic authentication.
    pub api_key: String,
    /// Base URL of the API.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Builds a configuration for the production endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Overrides the base URL. Used to point the client at a sandbox or a
    /// test server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Loads configuration from the environment (and a `.env` file when
    /// present): `VERIDENT_API_KEY` is required, `VERIDENT_BASE_URL`
    /// optional.
    pub fn from_env() -> Result<Self, Error> {
        dotenvy::dotenv().ok();

        let api_key = std::env::var("VERIDENT_API_KEY")
            .map_err(|_| {
                Error::Configuration("VERIDENT_API_KEY environment variable required".to_string())
            })
            .and_then(|key| {
                if key.trim().is_empty() {
                    return Err(Error::Configuration(
                        "VERIDENT_API_KEY cannot be empty".to_string(),
                    ));
                }
                Ok(key)
            })?;

        let base_url = match std::env::var("VERIDENT_BASE_URL") {
            Ok(url) if !url.trim().is_empty() => url,
            _ => DEFAULT_BASE_URL.to_string(),
        };

        let config = Self {
            api_key,
            base_url,
            timeout: DEFAULT_TIMEOUT,
        };
        config.validate()?;

        tracing::info!("Configuration loaded successfully");
        tracing::debug!("Base URL: {}", config.base_url);

        Ok(config)
    }

    /// Checks the invariants the client relies on. Called by
    /// [`crate::Client::new`] so misconfiguration fails at construction.
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.api_key.trim().is_empty() {
            return Err(Error::Configuration("API key cannot be empty".to_string()));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(Error::Configuration(
                "base URL must start with http:// or https://".to_string(),
            ));
        }
        Ok(())
    }
}
