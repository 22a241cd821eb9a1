use thiserror::Error;

/// Every failure surfaced by the client.
///
/// Each variant carries a human-readable message; [`ClientError::message`] returns it
/// without the variant prefix that `Display` adds.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {status} {message}")]
    Http {
        status: u16,
        endpoint: String,
        code: Option<String>,
        message: String,
    },
    #[error("Transport error: {message}")]
    Transport { endpoint: String, message: String },
    #[error("Response decode error: {message}")]
    Decode { endpoint: String, message: String },
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },
    #[error("I/O error: {message}")]
    Io { message: String },
    #[error("Configuration error: {message}")]
    Config { field: String, message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl ClientError {
    pub fn message(&self) -> &str {
        match self {
            ClientError::Http { message, .. }
            | ClientError::Transport { message, .. }
            | ClientError::Decode { message, .. }
            | ClientError::InvalidRequest { message }
            | ClientError::Io { message }
            | ClientError::Config { message, .. } => message,
        }
    }

    /// HTTP status returned by the service, if the failure came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Service error code from the error envelope (e.g. `BadArgument`).
    pub fn code(&self) -> Option<&str> {
        match self {
            ClientError::Http { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ClientError::Http { status, .. } if *status == 401 || *status == 403 => {
                ErrorSeverity::High
            }
            ClientError::Http { status, .. } if *status >= 500 => ErrorSeverity::High,
            ClientError::Http { .. } => ErrorSeverity::Medium,
            ClientError::Transport { .. } => ErrorSeverity::High,
            ClientError::Decode { .. } => ErrorSeverity::Medium,
            ClientError::InvalidRequest { .. } => ErrorSeverity::Low,
            ClientError::Io { .. } => ErrorSeverity::Medium,
            ClientError::Config { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            ClientError::Http { status: 401 | 403, .. } => {
                Some("Check the subscription key in FACE_SUBSCRIPTION_KEY".to_string())
            }
            ClientError::Http { status: 429, .. } => {
                Some("Rate limit exceeded; wait before sending more requests".to_string())
            }
            ClientError::Transport { .. } => {
                Some("Check your internet connection and the configured endpoint".to_string())
            }
            ClientError::Config { field, .. } => Some(format!("Set a valid value for {}", field)),
            _ => None,
        }
    }
}
