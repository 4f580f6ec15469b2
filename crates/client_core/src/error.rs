use thiserror::Error;

/// Where a failure originated, following the client's error taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Network unreachable or timed out.
    Transport,
    /// Backend answered with a non-2xx status or an unreadable body.
    Backend,
    /// Local problem before anything was sent.
    Local,
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
    #[error("backend returned status {status}")]
    Status { status: u16, detail: Option<String> },
    #[error("failed to decode backend response: {0}")]
    Decode(String),
    #[error("invalid backend url: {0}")]
    InvalidUrl(String),
    #[error("failed to read local file: {0}")]
    Io(String),
}

impl TransportError {
    /// Human-readable message supplied by the backend, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            TransportError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    pub fn user_message(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_string()
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            TransportError::Network(_) | TransportError::Timeout => ErrorCategory::Transport,
            TransportError::Status { .. } | TransportError::Decode(_) => ErrorCategory::Backend,
            TransportError::InvalidUrl(_) | TransportError::Io(_) => ErrorCategory::Local,
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() {
            TransportError::Timeout
        } else if value.is_decode() {
            TransportError::Decode(value.to_string())
        } else {
            TransportError::Network(value.to_string())
        }
    }
}
