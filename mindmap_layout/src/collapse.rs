// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collapse overrides kept beside the source tree.

use alloc::string::String;

use hashbrown::HashMap;
use mindmap_tree::TreeNode;

/// Per-node collapse overrides.
///
/// A node's effective collapsed state is its override if one is set,
/// otherwise the `collapsed` flag it carries in the source tree. Layout reads
/// the effective state, so toggling never touches the source tree and an
/// expand restores exactly the layout the node had before it collapsed.
#[derive(Clone, Debug, Default)]
pub struct CollapseState {
    overrides: HashMap<String, bool>,
}

impl CollapseState {
    /// Creates an empty override set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Effective collapsed state of `node`.
    pub fn is_collapsed(&self, node: &TreeNode) -> bool {
        self.overrides
            .get(&node.id)
            .copied()
            .unwrap_or(node.display.collapsed)
    }

    /// Overrides the collapsed state of the node with `id`.
    pub fn set(&mut self, id: impl Into<String>, collapsed: bool) {
        self.overrides.insert(id.into(), collapsed);
    }

    /// Flips a node whose effective state is `currently_collapsed` and
    /// returns the new state.
    pub fn toggle(&mut self, id: &str, currently_collapsed: bool) -> bool {
        let collapsed = !currently_collapsed;
        self.set(id, collapsed);
        collapsed
    }

    /// Drops every override.
    pub fn clear(&mut self) {
        self.overrides.clear();
    }

    /// Returns `true` if no override is set.
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    /// Writes the effective state into the `collapsed` flags of `tree`.
    ///
    /// Used when handing a tree back to the application for persistence.
    pub fn apply_to(&self, tree: &mut TreeNode) {
        tree.display.collapsed = self.is_collapsed(tree);
        for child in &mut tree.nodes {
            self.apply_to(child);
        }
    }
}
