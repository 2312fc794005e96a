// src/api/responses.rs
//! Wire types of the page tree query response.
//!
//! One recursive `PtPage` covers every level of the nested selection. Every
//! field is optional because the schema makes them nullable.

use crate::model::PageTreeNode;
use serde::Deserialize;

/// Standard GraphQL envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

impl<T> GraphQlResponse<T> {
    /// Messages of all reported errors, empty when the query succeeded.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors
            .iter()
            .flatten()
            .map(|error| error.message.clone())
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageTreeData {
    pub ptpage: Option<PtPage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PtPage {
    #[allow(dead_code)] // Selected by the fragment, only useful when debugging
    pub id: Option<String>,
    pub title: Option<String>,
    pub links: Option<PtLinks>,
    pub children: Option<PtPageConnection>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PtLinks {
    pub webui: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PtPageConnection {
    pub nodes: Option<Vec<Option<PtPage>>>,
}

impl From<PtPage> for PageTreeNode {
    fn from(page: PtPage) -> Self {
        let children = page
            .children
            .and_then(|connection| connection.nodes)
            .unwrap_or_default()
            .into_iter()
            // Null entries show up for pages the credential cannot see.
            .flatten()
            .map(PageTreeNode::from)
            .collect();

        PageTreeNode {
            title: page.title,
            web_path: page.links.and_then(|links| links.webui),
            children,
        }
    }
}
