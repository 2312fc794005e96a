// src/server/mod.rs
//! HTTP surface.
//!
//! # Endpoints
//!
//! - `GET /:domain/:emailAndApiToken/:pageId` - bookmark file for the page tree
//! - anything else - `404` with a usage line

use axum::{
    http::{header, HeaderValue},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::api::PageTreeSource;
use crate::config::ServerConfig;
use crate::constants::SERVER_HEADER_VALUE;
use crate::error::AppError;

mod handlers;
mod http_error;

pub use handlers::PrettyJson;

/// State shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn PageTreeSource>,
}

impl AppState {
    pub fn new(source: Arc<dyn PageTreeSource>) -> Self {
        Self { source }
    }
}

/// Builds the router with its default response headers.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/:domain/:email_and_api_token/:page_id",
            get(handlers::page_tree_bookmarks),
        )
        .fallback(handlers::usage)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::SERVER,
            HeaderValue::from_static(SERVER_HEADER_VALUE),
        ))
        .with_state(state)
}

/// Binds the listener and serves until Ctrl-C.
pub async fn serve(config: &ServerConfig, state: AppState) -> Result<(), AppError> {
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    log::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown signal received");
}
