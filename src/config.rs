//! Client configuration
//!
//! The subscription key can be supplied directly or read from the
//! `FACE_SUBSCRIPTION_KEY` environment variable. The endpoint defaults to the public
//! service host and can be overridden with `FACE_API_ENDPOINT`.

use crate::error::ClientError;
use crate::utils::validation::{validate_subscription_key, validate_url};
use std::env;
use std::fmt;

pub const DEFAULT_ENDPOINT: &str = "https://api.projectoxford.ai/face/v0";
pub const SUBSCRIPTION_KEY_ENV: &str = "FACE_SUBSCRIPTION_KEY";
pub const ENDPOINT_ENV: &str = "FACE_API_ENDPOINT";

#[derive(Clone, PartialEq)]
pub struct ClientConfig {
    pub endpoint: String,
    pub subscription_key: String,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint)
            .field("subscription_key", &"<redacted>")
            .finish()
    }
}

impl ClientConfig {
    pub fn new(subscription_key: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            subscription_key: subscription_key.into(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim_end_matches('/').to_string();
        self
    }

    /// Build a configuration from the environment.
    pub fn from_env() -> crate::Result<Self> {
        let subscription_key = get_subscription_key().ok_or_else(|| ClientError::Config {
            field: SUBSCRIPTION_KEY_ENV.to_string(),
            message: format!("{} is not set", SUBSCRIPTION_KEY_ENV),
        })?;

        let mut config = Self::new(subscription_key);
        if let Some(endpoint) = env::var(ENDPOINT_ENV).ok().filter(|e| !e.is_empty()) {
            config = config.with_endpoint(endpoint);
        }
        Ok(config)
    }

    pub fn validate(&self) -> crate::Result<()> {
        validate_url(&self.endpoint)?;
        validate_subscription_key(&self.subscription_key)
    }
}

/// Get the subscription key from environment variable
///
/// Returns the value of FACE_SUBSCRIPTION_KEY if set and non-empty, otherwise None.
pub fn get_subscription_key() -> Option<String> {
    env::var(SUBSCRIPTION_KEY_ENV).ok().filter(|k| !k.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_endpoint() {
        let config = ClientConfig::new("key_0123456789");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.subscription_key, "key_0123456789");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_endpoint_trims_trailing_slash() {
        let config = ClientConfig::new("key").with_endpoint("http://localhost:8080/face/v0/");
        assert_eq!(config.endpoint, "http://localhost:8080/face/v0");
    }

    #[test]
    fn test_debug_redacts_subscription_key() {
        let output = format!("{:?}", ClientConfig::new("secret_key_0123"));
        assert!(output.contains(DEFAULT_ENDPOINT));
        assert!(!output.contains("secret_key_0123"));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(ClientConfig::new("").validate().is_err());
        assert!(
            ClientConfig::new("key")
                .with_endpoint("localhost:8080")
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_from_env() {
        // Save original state
        let original_key = env::var(SUBSCRIPTION_KEY_ENV).ok();
        let original_endpoint = env::var(ENDPOINT_ENV).ok();

        unsafe {
            env::remove_var(SUBSCRIPTION_KEY_ENV);
            env::remove_var(ENDPOINT_ENV);
        }
        assert!(get_subscription_key().is_none());
        assert!(matches!(
            ClientConfig::from_env(),
            Err(ClientError::Config { .. })
        ));

        unsafe {
            env::set_var(SUBSCRIPTION_KEY_ENV, "");
        }
        assert!(get_subscription_key().is_none());

        unsafe {
            env::set_var(SUBSCRIPTION_KEY_ENV, "env_key_123");
            env::set_var(ENDPOINT_ENV, "http://localhost:9000/");
        }
        let config = ClientConfig::from_env().expect("config from env failed");
        assert_eq!(config.subscription_key, "env_key_123");
        assert_eq!(config.endpoint, "http://localhost:9000");

        // Restore original state
        unsafe {
            match original_key {
                Some(value) => env::set_var(SUBSCRIPTION_KEY_ENV, value),
                None => env::remove_var(SUBSCRIPTION_KEY_ENV),
            }
            match original_endpoint {
                Some(value) => env::set_var(ENDPOINT_ENV, value),
                None => env::remove_var(ENDPOINT_ENV),
            }
        }
    }
}
