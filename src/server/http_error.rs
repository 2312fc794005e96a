// src/server/http_error.rs
//! Error responses.
//!
//! Errors are answered in plain text, like the usage message. The body is
//! the error's display text, which never includes the credential.

use axum::response::{IntoResponse, Response};

use crate::error::AppError;

const CREDENTIAL_HINT: &str =
    "Check that Email:ApiToken is a valid API token that can read this page.";

/// A follow-up line for errors the caller can fix themselves.
fn hint(err: &AppError) -> Option<&'static str> {
    match err {
        AppError::RemoteService { code, .. } if code.is_auth_failure() => Some(CREDENTIAL_HINT),
        _ => None,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("Request failed ({}): {}", status, self);
        } else {
            log::warn!("Request rejected ({}): {}", status, self);
        }

        let body = match hint(&self) {
            Some(hint) => format!("{}\n{}\n", self, hint),
            None => format!("{}\n", self),
        };
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RemoteErrorCode;

    fn remote(code: RemoteErrorCode, status: reqwest::StatusCode) -> AppError {
        AppError::RemoteService {
            code,
            message: format!("HTTP {}", status),
            status,
        }
    }

    #[test]
    fn auth_failures_get_a_credential_hint() {
        let err = remote(RemoteErrorCode::Forbidden, reqwest::StatusCode::FORBIDDEN);
        assert_eq!(hint(&err), Some(CREDENTIAL_HINT));
    }

    #[test]
    fn other_failures_get_no_hint() {
        let err = remote(
            RemoteErrorCode::RateLimited,
            reqwest::StatusCode::TOO_MANY_REQUESTS,
        );
        assert_eq!(hint(&err), None);
        assert_eq!(
            hint(&AppError::PageNotFound {
                page_id: "1".to_string()
            }),
            None
        );
    }
}
