// src/api/mod.rs
//! Confluence interaction: the ability to fetch a page and its descendants.
//!
//! Split the way the rest of the crate expects: `query` builds the GraphQL
//! document, `client` does the HTTP round-trip, `parser` and `responses`
//! turn the body into a `PageTreeNode`.

pub mod client;
pub mod parser;
pub mod query;
mod responses;

use crate::error::AppError;
use crate::model::PageTreeNode;
use crate::types::{Credential, Domain, PageId};

/// The ability to retrieve a page tree from a Confluence site.
///
/// The HTTP handlers depend on this trait, never on the HTTP client, so
/// they can run against an in-memory tree.
#[async_trait::async_trait]
pub trait PageTreeSource: Send + Sync {
    async fn fetch_page_tree(
        &self,
        domain: &Domain,
        credential: &Credential,
        page_id: &PageId,
    ) -> Result<PageTreeNode, AppError>;

    /// How many levels of descendants a fetch asks for.
    fn tree_depth(&self) -> u8;
}

pub use client::ConfluenceHttpClient;
