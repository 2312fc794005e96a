// src/api/query.rs
//! The page tree GraphQL document.
//!
//! GraphQL has no recursive selections, so fetching descendants means nesting
//! `children { nodes { ... } }` once per level. The nesting depth is a
//! parameter instead of being spelled out by hand.

use crate::types::PageId;
use serde::Serialize;
use std::fmt::Write;

pub const OPERATION_NAME: &str = "PageTreeChildrenQuery";

const PAGE_FRAGMENT: &str = "\
fragment PageTreeInfoFragment on PTPage {
  id
  title
  links {
    webui
  }
}
";

/// Body of the POST sent to `/cgraphql`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest<'a> {
    pub operation_name: &'static str,
    pub query: String,
    pub variables: PageTreeVariables<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageTreeVariables<'a> {
    pub page_id: &'a PageId,
}

impl<'a> GraphQlRequest<'a> {
    pub fn page_tree(page_id: &'a PageId, depth: u8) -> Self {
        Self {
            operation_name: OPERATION_NAME,
            query: page_tree_query(depth),
            variables: PageTreeVariables { page_id },
        }
    }
}

/// Renders the query selecting the root page and `depth` levels below it.
pub fn page_tree_query(depth: u8) -> String {
    let mut query = String::with_capacity(256 + depth as usize * 96);
    query.push_str("query PageTreeChildrenQuery($pageId: ID) {\n");
    query.push_str("  ptpage(id: $pageId) {\n");
    write_page_selection(&mut query, depth, 2);
    query.push_str("  }\n");
    query.push_str("}\n\n");
    query.push_str(PAGE_FRAGMENT);
    query
}

fn write_page_selection(query: &mut String, remaining: u8, level: usize) {
    let pad = "  ".repeat(level);
    // Writing into a String cannot fail.
    let _ = writeln!(query, "{pad}...PageTreeInfoFragment");
    if remaining == 0 {
        return;
    }
    let _ = writeln!(query, "{pad}children {{");
    let _ = writeln!(query, "{pad}  nodes {{");
    write_page_selection(query, remaining - 1, level + 2);
    let _ = writeln!(query, "{pad}  }}");
    let _ = writeln!(query, "{pad}}}");
}
