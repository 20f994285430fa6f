//! Application error types

use marquee_domain::DomainError;
use thiserror::Error;

use crate::ports::HttpClientError;

/// Errors surfaced by the gateway to page views.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Input failed validation before any network call was made.
    #[error("validation error: {0}")]
    Domain(#[from] DomainError),

    /// The HTTP transport failed.
    #[error(transparent)]
    Http(#[from] HttpClientError),

    /// The server rejected the request with 401. By the time this error
    /// reaches the caller the token has been cleared and a redirect to the
    /// unauthorized page has been signaled.
    #[error("unauthorized")]
    Unauthorized,

    /// The server answered with a non-success status other than 401.
    #[error("request failed with status {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Server-provided message, or a generic fallback.
        message: String,
    },

    /// A login or registration call succeeded over HTTP but the response
    /// body carried no token.
    #[error("no token received from server")]
    MissingToken,

    /// The response body did not match the expected shape.
    #[error("failed to decode response body: {0}")]
    Decode(String),
}

impl GatewayError {
    /// A message suitable for rendering in a page view.
    ///
    /// Prefers the server-provided message when one exists, mirroring how
    /// the backend phrases its own validation failures.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            Self::Unauthorized => "Your session has expired. Please log in again.".to_string(),
            other => other.to_string(),
        }
    }
}

/// Result type alias for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;
