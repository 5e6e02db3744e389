use http::StatusCode;
use thiserror::Error;

/// Failure surfaced by the API layer.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with a non-success status. `message` carries
    /// the server's error-envelope message when one was parseable.
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("request failed"))]
    Status {
        status: StatusCode,
        message: Option<String>,
    },

    /// Connection, TLS, timeout — anything below HTTP semantics.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body did not match the expected shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// Input rejected locally, before any request was sent.
    #[error("{0}")]
    Validation(String),

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

impl ApiError {
    /// Server-supplied error message, if the failure carried one.
    ///
    /// The stores prefer this over their generic per-entity fallback.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_prefers_server_message() {
        let err = ApiError::Status {
            status: StatusCode::NOT_FOUND,
            message: Some("Order not found".to_string()),
        };
        assert_eq!(err.server_message(), Some("Order not found"));
        assert_eq!(err.to_string(), "HTTP 404 Not Found: Order not found");
    }

    #[test]
    fn status_error_without_message_is_generic() {
        let err = ApiError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: None,
        };
        assert_eq!(err.server_message(), None);
        assert!(err.to_string().contains("request failed"));
    }

    #[test]
    fn non_status_errors_carry_no_server_message() {
        let err = ApiError::Validation("Track code is required".to_string());
        assert_eq!(err.server_message(), None);
        assert_eq!(err.to_string(), "Track code is required");
    }
}
