//! Environment variable configuration provider.
//!
//! Dotted keys map to upper-cased, underscore separated variable names
//! behind a prefix: `timeout.secs` with prefix `OLS_` reads `OLS_TIMEOUT_SECS`.

use super::provider::ConfigProvider;
use super::{ConfigError, ConfigResult};

#[derive(Debug, Clone)]
pub struct EnvConfigProvider {
    prefix: String,
}

impl EnvConfigProvider {
    pub fn prefixed(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Variable name read for `key`.
    pub fn env_key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key.to_uppercase().replace('.', "_"))
    }
}

#[async_trait::async_trait]
impl ConfigProvider for EnvConfigProvider {
    fn name(&self) -> &str {
        "env"
    }

    /// Unset and blank variables both read as `None`.
    async fn get_raw(&self, key: &str) -> ConfigResult<Option<String>> {
        let name = self.env_key(key);
        match std::env::var(&name) {
            Ok(value) if value.trim().is_empty() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(source) => Err(ConfigError::Env { key: name, source }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_key_conversion() {
        let provider = EnvConfigProvider::prefixed("OLS_");
        assert_eq!(provider.env_key("base.url"), "OLS_BASE_URL");
        assert_eq!(provider.env_key("timeout.secs"), "OLS_TIMEOUT_SECS");
    }

    #[tokio::test]
    async fn test_env_provider_get() {
        let provider = EnvConfigProvider::prefixed("OLS_TOOLS_TEST_CONFIG_");

        // SAFETY: Test-only environment setup
        unsafe { std::env::set_var("OLS_TOOLS_TEST_CONFIG_MY_KEY", "my_value") };
        let value = provider.get_raw("my.key").await.unwrap();
        assert_eq!(value, Some("my_value".to_string()));
        unsafe { std::env::remove_var("OLS_TOOLS_TEST_CONFIG_MY_KEY") };
    }

    #[tokio::test]
    async fn test_env_provider_blank_is_unset() {
        let provider = EnvConfigProvider::prefixed("OLS_TOOLS_TEST_BLANK_");

        // SAFETY: Test-only environment setup
        unsafe { std::env::set_var("OLS_TOOLS_TEST_BLANK_KEY", "  ") };
        assert_eq!(provider.get_raw("key").await.unwrap(), None);
        unsafe { std::env::remove_var("OLS_TOOLS_TEST_BLANK_KEY") };
    }

    #[tokio::test]
    async fn test_env_provider_not_found() {
        let provider = EnvConfigProvider::prefixed("OLS_TOOLS_TEST_NONEXISTENT_");
        assert_eq!(provider.get_raw("some.key").await.unwrap(), None);
    }
}
