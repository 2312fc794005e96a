// src/error.rs
//! Application error types with structured error handling.
//!
//! The bookmark builder itself cannot fail; every variant here describes a
//! failure of the surrounding plumbing: bad request parameters, a remote
//! that refused or garbled the page tree query, or the server itself.

use axum::http::StatusCode;
use std::fmt;
use thiserror::Error;

/// Why the Confluence GraphQL endpoint turned a request down.
///
/// Derived from the HTTP status because the gateway in front of `cgraphql`
/// answers auth and routing failures before any GraphQL error body exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteErrorCode {
    /// Credential missing, malformed or revoked
    Unauthorized,
    /// Credential valid but not allowed to read this space or page
    Forbidden,
    /// No site under this domain, or the endpoint moved
    NotFound,
    /// Too many requests from this credential
    RateLimited,
    /// Atlassian internal failure
    InternalError,
    /// Temporarily unavailable or in maintenance
    ServiceUnavailable,
    /// Any other non-success status
    HttpStatus(u16),
}

impl RemoteErrorCode {
    pub fn from_http_status(status: u16) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            429 => Self::RateLimited,
            500 => Self::InternalError,
            502..=504 => Self::ServiceUnavailable,
            other => Self::HttpStatus(other),
        }
    }

    /// Whether the credential is the likely culprit.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Unauthorized | Self::Forbidden)
    }
}

impl fmt::Display for RemoteErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthorized => write!(f, "unauthorized"),
            Self::Forbidden => write!(f, "forbidden"),
            Self::NotFound => write!(f, "not_found"),
            Self::RateLimited => write!(f, "rate_limited"),
            Self::InternalError => write!(f, "internal_server_error"),
            Self::ServiceUnavailable => write!(f, "service_unavailable"),
            Self::HttpStatus(code) => write!(f, "http_{}", code),
        }
    }
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error(transparent)]
    Validation(#[from] crate::types::ValidationError),

    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("Confluence returned an error ({code}): {message}")]
    RemoteService {
        code: RemoteErrorCode,
        message: String,
        status: reqwest::StatusCode,
    },

    #[error("GraphQL query failed: {}", messages.join("; "))]
    GraphQl { messages: Vec<String> },

    #[error("Page {page_id} not found or not visible with this credential")]
    PageNotFound { page_id: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// HTTP status this error is reported with.
    ///
    /// Anything that went wrong upstream is a gateway failure; only bad route
    /// parameters are the caller's fault.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NetworkFailure(err) if err.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
            AppError::NetworkFailure(_)
            | AppError::RemoteService { .. }
            | AppError::GraphQl { .. }
            | AppError::PageNotFound { .. }
            | AppError::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
            AppError::MissingConfiguration(_) | AppError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ValidationError;

    #[test]
    fn remote_codes_follow_http_status() {
        assert_eq!(
            RemoteErrorCode::from_http_status(401),
            RemoteErrorCode::Unauthorized
        );
        assert_eq!(
            RemoteErrorCode::from_http_status(503),
            RemoteErrorCode::ServiceUnavailable
        );
        assert_eq!(
            RemoteErrorCode::from_http_status(418),
            RemoteErrorCode::HttpStatus(418)
        );
        assert!(RemoteErrorCode::Forbidden.is_auth_failure());
        assert!(!RemoteErrorCode::RateLimited.is_auth_failure());
        assert_eq!(RemoteErrorCode::HttpStatus(418).to_string(), "http_418");
    }

    #[test]
    fn validation_errors_are_bad_requests() {
        let err: AppError = ValidationError::EmptyField("domain").into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Empty required field: domain");
    }

    #[test]
    fn upstream_failures_are_gateway_errors() {
        let err = AppError::RemoteService {
            code: RemoteErrorCode::Unauthorized,
            message: "HTTP 401".to_string(),
            status: reqwest::StatusCode::UNAUTHORIZED,
        };
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);

        let err = AppError::GraphQl {
            messages: vec!["first".to_string(), "second".to_string()],
        };
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.to_string(), "GraphQL query failed: first; second");

        let err = AppError::PageNotFound {
            page_id: "42".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }
}
