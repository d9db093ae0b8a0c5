//! Error types for the Hearth client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when using the Hearth client
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Invalid request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_)) || matches!(self, Self::ApiError { status: 404, .. })
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 400 && *status < 500)
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 500)
    }

    /// Fixed user-facing text for console display.
    ///
    /// API errors map their application error code to the console wording;
    /// every other error falls back to its normal display form.
    pub fn console_message(&self) -> String {
        match self {
            Self::ApiError { status, .. } => console_message(*status).to_string(),
            other => other.to_string(),
        }
    }
}

/// Map a controller application error code to its console wording.
///
/// The controller reuses a handful of HTTP codes as application error codes
/// on its admin surface; the console shows one fixed message per code.
pub fn console_message(status: u16) -> &'static str {
    match status {
        400 => "The controller did not understand the request",
        401 => "Administrative credentials are required",
        404 => "The requested resource was not found on the controller",
        424 => "The deployed configuration is invalid and could not be read",
        426 => "No configuration has been deployed to the controller yet",
        428 => "The requested panel identity is not known to the controller",
        500 => "The controller hit an internal error",
        503 => "The controller is starting up or temporarily unavailable",
        504 => "The controller did not answer in time",
        _ => "The controller reported an unexpected error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_have_fixed_messages() {
        assert_eq!(
            console_message(426),
            "No configuration has been deployed to the controller yet"
        );
        assert_eq!(console_message(504), "The controller did not answer in time");
    }

    #[test]
    fn test_unknown_codes_fall_back_to_generic_message() {
        assert_eq!(
            console_message(418),
            "The controller reported an unexpected error"
        );
    }

    #[test]
    fn test_api_error_uses_the_code_mapping() {
        let err = ClientError::api_error(428, "panel id 7 unknown");
        assert_eq!(
            err.console_message(),
            "The requested panel identity is not known to the controller"
        );
        assert!(err.is_client_error());
        assert!(!err.is_server_error());
    }

    #[test]
    fn test_not_found_detection() {
        assert!(ClientError::api_error(404, "gone").is_not_found());
        assert!(ClientError::NotFound("vendor 9".to_string()).is_not_found());
        assert!(!ClientError::api_error(500, "boom").is_not_found());
    }
}
