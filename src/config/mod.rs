//! Configuration sources for the OLS client.
//!
//! A source maps dotted keys (`base.url`, `timeout.secs`, `user.agent`) to
//! raw strings; [`OlsConfig::from_provider`](crate::OlsConfig::from_provider)
//! reads them.
//!
//! ```rust,no_run
//! use ols_tools::OlsConfig;
//! use ols_tools::config::MemoryConfigProvider;
//!
//! # async fn example() -> Result<(), ols_tools::Error> {
//! let overrides = MemoryConfigProvider::new().value("timeout.secs", "10");
//! let config = OlsConfig::from_provider(&overrides).await?;
//! # Ok(())
//! # }
//! ```

pub mod env;
pub mod memory;
pub mod provider;

pub use env::EnvConfigProvider;
pub use memory::MemoryConfigProvider;
pub use provider::{ConfigProvider, ConfigProviderExt};

use thiserror::Error;

/// Errors raised while reading a configuration source.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    /// The variable exists but is not valid unicode.
    #[error("Environment error for {key}: {source}")]
    Env {
        key: String,
        #[source]
        source: std::env::VarError,
    },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidValue {
            key: "timeout.secs".to_string(),
            message: "invalid digit found in string".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for timeout.secs: invalid digit found in string"
        );
    }
}
