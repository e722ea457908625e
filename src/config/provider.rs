//! Configuration provider trait.

use std::str::FromStr;

use super::{ConfigError, ConfigResult};

/// Read-only configuration source.
#[async_trait::async_trait]
pub trait ConfigProvider: Send + Sync {
    /// Provider name for logging
    fn name(&self) -> &str;

    /// Raw value for `key`, or `None` when the source does not set it.
    async fn get_raw(&self, key: &str) -> ConfigResult<Option<String>>;
}

/// Typed access on top of [`ConfigProvider::get_raw`].
pub trait ConfigProviderExt: ConfigProvider {
    /// Value parsed with `FromStr`; surrounding whitespace is ignored.
    fn get_parsed<T>(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = ConfigResult<Option<T>>> + Send
    where
        Self: Sync,
        T: FromStr + Send,
        T::Err: std::fmt::Display,
    {
        async move {
            let Some(raw) = self.get_raw(key).await? else {
                return Ok(None);
            };
            let parsed = raw
                .trim()
                .parse::<T>()
                .map_err(|e| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: e.to_string(),
                })?;
            tracing::trace!(key, provider = self.name(), "config value resolved");
            Ok(Some(parsed))
        }
    }
}

impl<P: ConfigProvider + ?Sized> ConfigProviderExt for P {}
