// src/api/parser.rs
//! Turns a raw `/cgraphql` response into a page tree.

use super::client::ApiResponse;
use super::responses::{GraphQlResponse, PageTreeData};
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::{AppError, RemoteErrorCode};
use crate::model::PageTreeNode;
use crate::types::PageId;

/// Parses the page tree query response for `page_id`.
///
/// Like the GraphQL client the service was built around, any entry in
/// `errors` fails the whole request even if partial data came back.
pub fn parse_page_tree_response(
    result: ApiResponse<String>,
    page_id: &PageId,
) -> Result<PageTreeNode, AppError> {
    if !result.status.is_success() {
        return Err(remote_failure(&result));
    }

    let response: GraphQlResponse<PageTreeData> =
        serde_json::from_str(&result.data).map_err(|e| {
            log::error!("Failed to parse response from {}: {}", result.url, e);
            AppError::MalformedResponse(format!("{} (body: {})", e, preview(&result.data)))
        })?;

    let messages = response.error_messages();
    if !messages.is_empty() {
        return Err(AppError::GraphQl { messages });
    }

    response
        .data
        .and_then(|data| data.ptpage)
        .map(PageTreeNode::from)
        .ok_or_else(|| AppError::PageNotFound {
            page_id: page_id.to_string(),
        })
}

/// Builds the error for a non-success status, keeping GraphQL messages when
/// the body carries them.
fn remote_failure(result: &ApiResponse<String>) -> AppError {
    let graphql_messages = serde_json::from_str::<GraphQlResponse<serde_json::Value>>(&result.data)
        .map(|response| response.error_messages())
        .unwrap_or_default();

    let message = if graphql_messages.is_empty() {
        format!("HTTP {} from {}", result.status, result.url)
    } else {
        graphql_messages.join("; ")
    };

    AppError::RemoteService {
        code: RemoteErrorCode::from_http_status(result.status.as_u16()),
        message,
        status: result.status,
    }
}

fn preview(body: &str) -> String {
    if body.chars().count() > ERROR_BODY_PREVIEW_LENGTH {
        let cut: String = body.chars().take(ERROR_BODY_PREVIEW_LENGTH).collect();
        format!("{}...", cut)
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    fn response(status: StatusCode, body: &str) -> ApiResponse<String> {
        ApiResponse {
            data: body.to_string(),
            status,
            url: "https://acme.atlassian.net/cgraphql".to_string(),
        }
    }

    fn page_id() -> PageId {
        PageId::parse("1").unwrap()
    }

    #[test]
    fn null_ptpage_is_not_found() {
        let result = parse_page_tree_response(
            response(StatusCode::OK, r#"{"data":{"ptpage":null}}"#),
            &page_id(),
        );
        assert!(matches!(result, Err(AppError::PageNotFound { page_id }) if page_id == "1"));
    }

    #[test]
    fn missing_data_is_not_found() {
        let result = parse_page_tree_response(
            response(StatusCode::OK, r#"{"data":null,"errors":[]}"#),
            &page_id(),
        );
        assert!(matches!(result, Err(AppError::PageNotFound { .. })));
    }

    #[test]
    fn non_json_body_is_malformed() {
        let result = parse_page_tree_response(response(StatusCode::OK, "<html>"), &page_id());
        assert!(matches!(result, Err(AppError::MalformedResponse(msg)) if msg.contains("<html>")));
    }

    #[test]
    fn unauthorized_status_keeps_code() {
        let result = parse_page_tree_response(
            response(StatusCode::UNAUTHORIZED, "Unauthorized"),
            &page_id(),
        );
        match result {
            Err(AppError::RemoteService { code, message, .. }) => {
                assert_eq!(code, RemoteErrorCode::Unauthorized);
                assert!(message.starts_with("HTTP 401"));
            }
            other => panic!("expected remote service error, got {:?}", other),
        }
    }

    #[test]
    fn error_status_prefers_graphql_messages() {
        let result = parse_page_tree_response(
            response(
                StatusCode::BAD_REQUEST,
                r#"{"errors":[{"message":"Validation error"}]}"#,
            ),
            &page_id(),
        );
        assert!(matches!(
            result,
            Err(AppError::RemoteService { message, .. }) if message == "Validation error"
        ));
    }

    #[test]
    fn preview_truncates_long_bodies() {
        let body = "x".repeat(ERROR_BODY_PREVIEW_LENGTH + 10);
        let shown = preview(&body);
        assert!(shown.ends_with("..."));
        assert_eq!(shown.len(), ERROR_BODY_PREVIEW_LENGTH + 3);
    }
}
