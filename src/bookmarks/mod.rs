// src/bookmarks/mod.rs
//! Folds a fetched page tree into a bookmark file.
//!
//! A page with children is both a link and a container, which a bookmark
//! tree cannot express in one node. Such a page becomes a folder whose first
//! entry is a "<title> Home" link back to the page itself. The root page is
//! always treated that way, so the file opens with a link to the root even
//! when it has no children.

use crate::constants::{HOME_SUFFIX, UNTITLED_PAGE};
use crate::model::{Bookmark, BookmarkRoot, PageTreeNode};
use crate::types::Domain;

/// Builds the bookmark file for a tree rooted at `root`.
pub fn build_bookmark_root(root: &PageTreeNode, domain: &Domain) -> BookmarkRoot {
    let wiki_base = domain.wiki_base_url();
    BookmarkRoot::new(folder_entries(root, &wiki_base))
}

/// Converts one page, recursing into its children.
pub fn node_to_bookmark(node: &PageTreeNode, domain: &Domain) -> Bookmark {
    to_bookmark(node, &domain.wiki_base_url())
}

fn to_bookmark(node: &PageTreeNode, wiki_base: &str) -> Bookmark {
    if node.has_children() {
        Bookmark::folder(display_title(node), folder_entries(node, wiki_base))
    } else {
        Bookmark::link(display_title(node), page_url(node, wiki_base))
    }
}

/// The home link followed by one entry per child, in fetched order.
fn folder_entries(node: &PageTreeNode, wiki_base: &str) -> Vec<Bookmark> {
    let mut entries = Vec::with_capacity(1 + node.children.len());
    entries.push(home_link(node, wiki_base));
    for child in &node.children {
        entries.push(to_bookmark(child, wiki_base));
    }
    entries
}

fn home_link(node: &PageTreeNode, wiki_base: &str) -> Bookmark {
    Bookmark::link(
        format!("{}{}", display_title(node), HOME_SUFFIX),
        page_url(node, wiki_base),
    )
}

fn display_title(node: &PageTreeNode) -> &str {
    match node.title.as_deref() {
        Some(title) if !title.is_empty() => title,
        _ => UNTITLED_PAGE,
    }
}

// Plain concatenation: a page without a web path links to the wiki base.
fn page_url(node: &PageTreeNode, wiki_base: &str) -> String {
    let path = node.web_path.as_deref().unwrap_or_default();
    format!("{}{}", wiki_base, path)
}
