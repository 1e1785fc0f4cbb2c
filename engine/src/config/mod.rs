//! Configuration management
//!
//! Signguard has no configuration file and reads no environment variables.
//! Everything comes from the two CLI flags. The remaining settings are fixed
//! defaults that tests can override to point the client at a mock server.
//!
//! # Examples
//!
//! ```
//! use signguard_engine::config::DirectoryConfig;
//! use std::time::Duration;
//!
//! let config = DirectoryConfig::new("acct-123", "api-key");
//! assert_eq!(config.base_url, "https://api.cloudflare.com/client/v4");
//! assert_eq!(config.request_timeout, Duration::from_secs(15));
//! ```

use crate::secrets::SecretString;
use std::time::Duration;

/// Production endpoint of the image directory service
pub const DEFAULT_BASE_URL: &str = "https://api.cloudflare.com/client/v4";

/// Per-call timeout applied to every request
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Settings for talking to the image directory service
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    /// Base URL of the API, without a trailing slash
    pub base_url: String,

    /// Account owning the images
    pub account_id: String,

    /// Bearer credential
    pub api_key: SecretString,

    /// Timeout for each individual request
    pub request_timeout: Duration,
}

impl DirectoryConfig {
    /// Create a configuration for the production endpoint
    pub fn new(account_id: impl Into<String>, api_key: impl Into<SecretString>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            account_id: account_id.into(),
            api_key: api_key.into(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    /// Point the client at another endpoint
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the per-request timeout
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// `{base}/accounts/{account}/images/v1`
    pub fn images_url(&self) -> String {
        format!("{}/accounts/{}/images/v1", self.base_url, self.account_id)
    }
}
