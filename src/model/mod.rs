// src/model/mod.rs
//! Domain model: the page tree as fetched, and the bookmark file built from it.

mod bookmark;

pub use bookmark::{Bookmark, BookmarkRoot};

/// A page in the fetched tree.
///
/// Every depth of the tree shares this one shape; the remote query's
/// per-level types are flattened into it while parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageTreeNode {
    pub title: Option<String>,
    /// Path of the page relative to the wiki base, e.g. `/spaces/DOC/pages/1/Intro`.
    pub web_path: Option<String>,
    pub children: Vec<PageTreeNode>,
}

impl PageTreeNode {
    pub fn new(title: impl Into<String>, web_path: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            web_path: Some(web_path.into()),
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: PageTreeNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = PageTreeNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}
