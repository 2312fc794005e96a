// src/lib.rs
//! confluence2bookmarks library: turns a Confluence page tree into a bookmark file.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling**: `AppError`, `RemoteErrorCode`, `ValidationError`
//! - **Configuration**: `CommandLineInput`, `ServerConfig`
//! - **Domain model**: `PageTreeNode`, `Bookmark`, `BookmarkRoot`
//! - **Domain types**: `Domain`, `Credential`, `PageId`
//! - **API client**: `PageTreeSource`, `ConfluenceHttpClient`, the query builder and parser
//! - **Bookmark building**: `build_bookmark_root`, `node_to_bookmark`
//! - **HTTP surface**: `create_router`, `serve`, `AppState`

pub mod analytics;
pub mod api;
pub mod bookmarks;
pub mod config;
pub mod constants;
pub mod error;
pub mod model;
pub mod server;
pub mod types;

// --- Error Handling ---
pub use crate::error::{AppError, RemoteErrorCode};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, ServerConfig};

// --- Domain Model ---
pub use crate::model::{Bookmark, BookmarkRoot, PageTreeNode};

// --- Domain Types ---
pub use crate::types::{Credential, Domain, PageId};

// --- API Client ---
pub use crate::api::{
    client::{extract_response_text, ApiResponse},
    parser::parse_page_tree_response,
    query::{page_tree_query, GraphQlRequest},
    ConfluenceHttpClient, PageTreeSource,
};

// --- Bookmark Building ---
pub use crate::bookmarks::{build_bookmark_root, node_to_bookmark};

// --- Analytics ---
pub use crate::analytics::{measure_tree, TreeSummary};

// --- HTTP Surface ---
pub use crate::server::{create_router, serve, AppState, PrettyJson};
