//! Client configuration.

use std::time::Duration;

use crate::config::{ConfigProvider, ConfigProviderExt, EnvConfigProvider};
use crate::{Error, Result};

/// Public OLS REST API.
pub const DEFAULT_BASE_URL: &str = "https://www.ebi.ac.uk/ols/api";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_USER_AGENT: &str = concat!("ols-tools/", env!("CARGO_PKG_VERSION"));

const ENV_PREFIX: &str = "OLS_";
const KEY_BASE_URL: &str = "base.url";
const KEY_TIMEOUT_SECS: &str = "timeout.secs";
const KEY_USER_AGENT: &str = "user.agent";

/// Connection settings for the OLS API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OlsConfig {
    /// Base URL, without a trailing slash.
    pub base_url: String,
    /// Whole-request timeout.
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for OlsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl OlsConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::default().with_base_url(base_url)
    }

    /// Create from `OLS_BASE_URL`, `OLS_TIMEOUT_SECS` and `OLS_USER_AGENT`.
    pub async fn from_env() -> Result<Self> {
        Self::from_provider(&EnvConfigProvider::prefixed(ENV_PREFIX)).await
    }

    /// Create from any configuration provider, using the keys `base.url`,
    /// `timeout.secs` and `user.agent`.
    pub async fn from_provider<P: ConfigProvider + ?Sized>(provider: &P) -> Result<Self> {
        let base_url = provider.get_raw(KEY_BASE_URL).await?;
        let timeout = provider
            .get_parsed::<u64>(KEY_TIMEOUT_SECS)
            .await?
            .map(Duration::from_secs);
        let user_agent = provider.get_raw(KEY_USER_AGENT).await?;
        Self::default().apply(base_url, timeout, user_agent)
    }

    fn apply(
        mut self,
        base_url: Option<String>,
        timeout: Option<Duration>,
        user_agent: Option<String>,
    ) -> Result<Self> {
        if let Some(url) = base_url {
            self = self.with_base_url(url);
        }
        if let Some(timeout) = timeout {
            self.timeout = timeout;
        }
        if let Some(agent) = user_agent {
            self.user_agent = agent;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim().trim_end_matches('/').to_string();
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

    pub fn validate(&self) -> Result<()> {
        let parsed = url::Url::parse(&self.base_url)
            .map_err(|e| Error::Config(format!("invalid base URL '{}': {}", self.base_url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "base URL must be http or https, got '{}'",
                parsed.scheme()
            )));
        }
        if self.timeout.is_zero() {
            return Err(Error::Config("timeout must be greater than zero".into()));
        }
        Ok(())
    }

    /// Joins `path` (which starts with `/`) onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
