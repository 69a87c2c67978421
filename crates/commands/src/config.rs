//! Client configuration.
//!
//! [`ClientConfig`] is a plain serde value so applications can embed it in
//! their own configuration files; this crate never reads files or the
//! environment itself. Configurations obtained by deserialisation should be
//! checked with [`ClientConfig::validate`]; [`crate::GatewayCommands::new`]
//! does so.

use std::time::Duration;

use protocol::CallContext;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Invalid client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A setting holds a value the client cannot work with.
    #[error("Configuration error: {message}")]
    Invalid {
        /// Description of the configuration problem.
        message: String,
    },
}

/// Defaults applied to commands created through [`crate::GatewayCommands`].
///
/// ```
/// # use commands::ClientConfig;
/// let config: ClientConfig = serde_json::from_str(r#"{ "request_timeout_ms": 15000 }"#).unwrap();
/// assert_eq!(config.request_timeout(), Some(std::time::Duration::from_secs(15)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// Timeout for each command sent without an explicit context, in
    /// milliseconds. `None` leaves calls unbounded.
    pub request_timeout_ms: Option<u64>,
}

impl ClientConfig {
    /// Creates a new configuration builder.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Returns the per-command timeout, if one is configured.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }

    /// Checks the configuration for values the client cannot honour.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the request timeout is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.request_timeout_ms == Some(0) {
            return Err(ConfigError::Invalid {
                message: "request_timeout_ms must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Builds the context used by commands that are sent without one.
    pub fn call_context(&self) -> CallContext {
        match self.request_timeout() {
            Some(timeout) => CallContext::background().with_timeout(timeout),
            None => CallContext::background(),
        }
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    request_timeout: Option<Duration>,
}

impl ClientConfigBuilder {
    /// Sets the timeout applied to each command sent without a context.
    ///
    /// Sub-millisecond precision is truncated.
    #[must_use]
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the timeout truncates to zero
    /// milliseconds.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let config = ClientConfig {
            request_timeout_ms: self
                .request_timeout
                .map(|timeout| u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX)),
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rstest::rstest;

    use super::*;

    #[test]
    fn default_config_is_unbounded() {
        let config = ClientConfig::default();
        assert_eq!(config.request_timeout(), None);
        assert_eq!(config.call_context().timeout(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_carries_the_timeout_into_the_call_context() {
        let config = ClientConfig::builder()
            .request_timeout(Duration::from_secs(10))
            .build()
            .unwrap();

        assert_eq!(config.request_timeout_ms, Some(10_000));
        assert_eq!(config.call_context().timeout(), Some(Duration::from_secs(10)));
    }

    #[rstest]
    #[case::zero(Duration::ZERO)]
    #[case::sub_millisecond(Duration::from_micros(400))]
    fn builder_rejects_timeouts_that_truncate_to_zero(#[case] timeout: Duration) {
        let error = ClientConfig::builder()
            .request_timeout(timeout)
            .build()
            .unwrap_err();

        assert!(matches!(error, ConfigError::Invalid { .. }));
    }

    #[test]
    fn empty_document_deserialises_to_defaults() {
        let config: ClientConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let parsed = serde_json::from_str::<ClientConfig>(r#"{ "request_timeout": 5 }"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn deserialised_zero_timeout_fails_validation() {
        let config: ClientConfig = serde_json::from_str(r#"{ "request_timeout_ms": 0 }"#).unwrap();
        assert_eq!(
            config.validate(),
            Err(ConfigError::Invalid {
                message: "request_timeout_ms must be greater than zero".to_string(),
            })
        );
    }
}
