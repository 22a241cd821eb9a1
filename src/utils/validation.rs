//! Input validation for client configuration values.

use crate::error::ClientError;

/// Validate that an endpoint URL is properly formatted
pub fn validate_url(url: &str) -> crate::Result<()> {
    if url.is_empty() {
        return Err(ClientError::Config {
            field: "endpoint".to_string(),
            message: "URL cannot be empty".to_string(),
        });
    }

    // Basic URL validation - must start with http:// or https://
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ClientError::Config {
            field: "endpoint".to_string(),
            message: format!(
                "Invalid URL '{}': URL must start with http:// or https://",
                url
            ),
        });
    }

    Ok(())
}

/// Validate subscription key format
pub fn validate_subscription_key(key: &str) -> crate::Result<()> {
    if key.trim().is_empty() {
        return Err(ClientError::Config {
            field: "subscription_key".to_string(),
            message: "Subscription key cannot be empty".to_string(),
        });
    }

    // Must be usable as an HTTP header value
    if key.chars().any(|c| c.is_control()) {
        return Err(ClientError::Config {
            field: "subscription_key".to_string(),
            message: "Subscription key contains control characters".to_string(),
        });
    }

    Ok(())
}
