// src/analytics/mod.rs
//! Page tree measurement for request logging.

use crate::model::PageTreeNode;

/// Quick statistics for a fetched tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeSummary {
    pub total_pages: usize,
    /// Levels below the root; a childless root has depth 0.
    pub deepest_nesting: usize,
}

impl TreeSummary {
    /// Whether the tree reaches the deepest level the query asked for, in
    /// which case pages below it were not fetched.
    pub fn reaches_depth_limit(&self, depth: u8) -> bool {
        self.deepest_nesting >= depth as usize
    }
}

pub fn measure_tree(root: &PageTreeNode) -> TreeSummary {
    TreeSummary {
        total_pages: count_pages(root),
        deepest_nesting: deepest_nesting_level(root),
    }
}

/// Counts the node and all its descendants.
pub fn count_pages(node: &PageTreeNode) -> usize {
    1 + node.children.iter().map(count_pages).sum::<usize>()
}

pub fn deepest_nesting_level(node: &PageTreeNode) -> usize {
    node.children
        .iter()
        .map(|child| 1 + deepest_nesting_level(child))
        .max()
        .unwrap_or(0)
}
