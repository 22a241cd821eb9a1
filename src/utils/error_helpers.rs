//! Helper functions for standardizing error conversions across the codebase.

use crate::error::ClientError;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// `{code, message}` body the service returns with an error status.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    code: Option<String>,
    message: Option<String>,
}

/// Only a JSON object can be an envelope; some deployments nest it under `error`.
fn envelope_object(value: Value) -> Option<Value> {
    match value {
        Value::Object(mut map) => match map.remove("error") {
            Some(nested @ Value::Object(_)) => Some(nested),
            Some(other) => {
                map.insert("error".to_string(), other);
                Some(Value::Object(map))
            }
            None => Some(Value::Object(map)),
        },
        _ => None,
    }
}

/// Convert reqwest errors to ClientError with endpoint context
pub fn convert_request_error(error: reqwest::Error, endpoint: &str) -> ClientError {
    ClientError::Transport {
        endpoint: endpoint.to_string(),
        message: error.to_string(),
    }
}

/// Build the failure for a non-success response.
///
/// Falls back to the raw body when it is not an envelope, and to `HTTP <status>` when
/// the body is empty.
pub fn convert_error_response(status: u16, body: &str, endpoint: &str) -> ClientError {
    let envelope = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(envelope_object)
        .and_then(|object| serde_json::from_value::<ErrorEnvelope>(object).ok());

    let (code, message) = match envelope {
        Some(ErrorEnvelope {
            code,
            message: Some(message),
        }) if !message.trim().is_empty() => (code, message),
        Some(ErrorEnvelope { code, .. }) if !body.trim().is_empty() => (code, body.to_string()),
        None if !body.trim().is_empty() => (None, body.to_string()),
        Some(ErrorEnvelope { code, .. }) => (code, format!("HTTP {}", status)),
        None => (None, format!("HTTP {}", status)),
    };

    ClientError::Http {
        status,
        endpoint: endpoint.to_string(),
        code,
        message,
    }
}

/// Deserialize a successful response body into a contract type
pub fn decode_json<T: DeserializeOwned>(body: &str, endpoint: &str) -> Result<T, ClientError> {
    serde_json::from_str(body).map_err(|e| ClientError::Decode {
        endpoint: endpoint.to_string(),
        message: format!("JSON parse error: {}", e),
    })
}
