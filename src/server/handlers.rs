// src/server/handlers.rs
use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::analytics::measure_tree;
use crate::bookmarks::build_bookmark_root;
use crate::error::AppError;
use crate::model::BookmarkRoot;
use crate::types::{Credential, Domain, PageId};

/// Route parameters, still unvalidated.
#[derive(Debug, Deserialize)]
pub struct BookmarkPath {
    domain: String,
    email_and_api_token: String,
    page_id: String,
}

/// Fetches the tree under `page_id` and answers with its bookmark file.
pub async fn page_tree_bookmarks(
    State(state): State<AppState>,
    Path(params): Path<BookmarkPath>,
) -> Result<PrettyJson<BookmarkRoot>, AppError> {
    let domain = Domain::new(params.domain)?;
    let credential = Credential::new(params.email_and_api_token)?;
    let page_id = PageId::parse(&params.page_id)?;

    log::info!(
        "Fetching page tree {} from {} as {}",
        page_id,
        domain,
        credential
    );

    let tree = state
        .source
        .fetch_page_tree(&domain, &credential, &page_id)
        .await?;

    let summary = measure_tree(&tree);
    log::info!(
        "Fetched {} pages (depth {}) under {} from {}",
        summary.total_pages,
        summary.deepest_nesting,
        page_id,
        domain
    );
    let depth = state.source.tree_depth();
    if summary.reaches_depth_limit(depth) {
        log::warn!(
            "Page tree {} reaches the fetch depth limit ({}); deeper pages are missing",
            page_id,
            depth
        );
    }

    Ok(PrettyJson(build_bookmark_root(&tree, &domain)))
}

/// Fallback for every unmatched path.
pub async fn usage(headers: HeaderMap) -> (StatusCode, String) {
    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("localhost");

    (
        StatusCode::NOT_FOUND,
        format!(
            "Usage: http://{}/<Domain>/<Email:ApiToken>/<Page id>\n",
            host
        ),
    )
}

/// JSON response rendered with indentation.
#[derive(Debug, Clone)]
pub struct PrettyJson<T>(pub T);

impl<T: Serialize> IntoResponse for PrettyJson<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec_pretty(&self.0) {
            Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
            Err(e) => AppError::from(e).into_response(),
        }
    }
}
