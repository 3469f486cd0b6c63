// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Derived parent index and id auto-fill.

use alloc::string::String;

use hashbrown::HashMap;

use crate::TreeNode;

/// Lookup from a node id to the id of the node whose children contain it.
///
/// The index is derived state: build it once per tree load (and again after
/// structural edits) instead of trusting parent links supplied by the input.
/// When ids are duplicated, the first depth-first occurrence wins, matching
/// [`TreeNode::find`].
#[derive(Clone, Debug, Default)]
pub struct ParentIndex {
    parents: HashMap<String, String>,
}

impl ParentIndex {
    /// Builds the index for the tree rooted at `root`.
    pub fn build(root: &TreeNode) -> Self {
        let mut index = Self::default();
        index.visit(root);
        index
    }

    fn visit(&mut self, node: &TreeNode) {
        for child in &node.nodes {
            self.parents
                .entry(child.id.clone())
                .or_insert_with(|| node.id.clone());
            self.visit(child);
        }
    }

    /// Returns the parent id of `id`, or `None` for the root and unknown ids.
    pub fn parent_of(&self, id: &str) -> Option<&str> {
        self.parents.get(id).map(String::as_str)
    }

    /// Number of nodes that have a parent.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Returns `true` if no node has a parent (a lone root or an empty index).
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}

/// Assigns a generated id to every node whose id is empty.
///
/// Also drops any `parent` field carried over from the input, since parent
/// links are always recomputed by [`ParentIndex::build`].
///
/// ```
/// use mindmap_tree::{TreeNode, auto_fill};
///
/// let mut tree = TreeNode::new("", "root").with_child(TreeNode::new("", "child"));
/// let mut next = 0;
/// auto_fill(&mut tree, &mut || {
///     next += 1;
///     format!("n{next}")
/// });
/// assert_eq!(tree.id, "n1");
/// assert_eq!(tree.nodes[0].id, "n2");
/// ```
pub fn auto_fill(node: &mut TreeNode, next_id: &mut impl FnMut() -> String) {
    if node.id.is_empty() {
        node.id = next_id();
    }
    node.extra.remove("parent");
    for child in &mut node.nodes {
        auto_fill(child, next_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn parent_of_reports_direct_parent() {
        let tree = TreeNode::new("root", "A")
            .with_child(TreeNode::new("b", "B").with_child(TreeNode::new("c", "C")));
        let index = ParentIndex::build(&tree);
        assert_eq!(index.parent_of("b"), Some("root"));
        assert_eq!(index.parent_of("c"), Some("b"));
        assert_eq!(index.parent_of("root"), None);
        assert_eq!(index.parent_of("missing"), None);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn duplicate_ids_keep_first_parent() {
        let tree = TreeNode::new("root", "A")
            .with_child(TreeNode::new("b", "B").with_child(TreeNode::new("x", "first")))
            .with_child(TreeNode::new("x", "second"));
        let index = ParentIndex::build(&tree);
        assert_eq!(index.parent_of("x"), Some("b"));
    }

    #[test]
    fn auto_fill_keeps_existing_ids_and_drops_parent_field() {
        let json = r#"{"id":"root","text":"A","nodes":[{"text":"B","parent":"bogus"}]}"#;
        let mut tree: TreeNode = serde_json::from_str(json).unwrap();
        let mut counter = 0;
        auto_fill(&mut tree, &mut || {
            counter += 1;
            format!("gen-{counter}")
        });
        assert_eq!(tree.id, "root");
        assert_eq!(tree.nodes[0].id, "gen-1");
        assert!(tree.nodes[0].extra.get("parent").is_none());
        assert_eq!(ParentIndex::build(&tree).parent_of("gen-1"), Some("root"));
    }
}
