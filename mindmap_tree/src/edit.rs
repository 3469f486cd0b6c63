// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structural edits addressed by node id.
//!
//! Every edit tolerates stale ids: when a lookup finds nothing the edit is a
//! no-op and reports so through its return value.

use alloc::string::String;

use serde::{Deserialize, Serialize};

use crate::{ParentIndex, TreeNode};

/// Direction for [`TreeNode::move_node`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    /// Towards the start of the parent's child sequence.
    Up,
    /// Towards the end of the parent's child sequence.
    Down,
}

/// How a reorder picks the reinsertion index.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReorderPolicy {
    /// Remove the node, then reinsert it at `max(i - 1, 0)` (up) or
    /// `max(i + 1, len - 1)` (down), where `len` is the length after removal
    /// and the insertion point is clamped to `len`.
    ///
    /// Moving down from near the front of a long sequence therefore jumps to
    /// the second-to-last slot rather than swapping with the next sibling.
    #[default]
    Legacy,
    /// Swap with the adjacent sibling.
    Adjacent,
}

impl ReorderPolicy {
    /// Target index for a node currently at `idx` among `count` siblings.
    fn target(self, idx: usize, count: usize, direction: MoveDirection) -> usize {
        match (self, direction) {
            (_, MoveDirection::Up) => idx.saturating_sub(1),
            (Self::Legacy, MoveDirection::Down) => {
                let remaining = count - 1;
                (idx + 1).max(remaining.saturating_sub(1)).min(remaining)
            }
            (Self::Adjacent, MoveDirection::Down) => (idx + 1).min(count - 1),
        }
    }
}

impl TreeNode {
    /// Replaces the label of the first node with `id`.
    ///
    /// Returns `false` if no such node exists.
    pub fn rename(&mut self, id: &str, text: impl Into<String>) -> bool {
        let Some(node) = self.find_mut(id) else {
            return false;
        };
        node.text = text.into();
        log::debug!("renamed node {id}");
        true
    }

    /// Moves the node with `id` within its parent's children.
    ///
    /// Returns `true` if the sibling order changed. The root and unknown ids
    /// are left alone.
    pub fn move_node(
        &mut self,
        parents: &ParentIndex,
        id: &str,
        direction: MoveDirection,
        policy: ReorderPolicy,
    ) -> bool {
        let Some(parent) = parents.parent_of(id).and_then(|p| self.find_mut(p)) else {
            return false;
        };
        let Some(idx) = parent.nodes.iter().position(|n| n.id == id) else {
            return false;
        };
        let target = policy.target(idx, parent.nodes.len(), direction);
        if target == idx {
            return false;
        }
        let node = parent.nodes.remove(idx);
        parent.nodes.insert(target, node);
        log::debug!("moved node {id} from {idx} to {target}");
        true
    }

    /// Appends `child` to the children of the node with `parent_id`.
    ///
    /// Returns `false` (dropping `child`) if the parent does not exist.
    pub fn insert_child(&mut self, parent_id: &str, child: Self) -> bool {
        let Some(parent) = self.find_mut(parent_id) else {
            return false;
        };
        log::debug!("inserting node {} under {parent_id}", child.id);
        parent.nodes.push(child);
        true
    }

    /// Detaches the node with `id` from its parent and returns it.
    ///
    /// The root has no parent and cannot be removed.
    pub fn remove_node(&mut self, parents: &ParentIndex, id: &str) -> Option<Self> {
        let parent = self.find_mut(parents.parent_of(id)?)?;
        let idx = parent.nodes.iter().position(|n| n.id == id)?;
        log::debug!("removing node {id}");
        Some(parent.nodes.remove(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn family(n: usize) -> TreeNode {
        let mut root = TreeNode::new("root", "R");
        for i in 0..n {
            root.nodes.push(TreeNode::new(alloc::format!("c{i}"), "child"));
        }
        root
    }

    fn order(tree: &TreeNode) -> Vec<&str> {
        tree.nodes.iter().map(|n| n.id.as_str()).collect()
    }

    fn mv(tree: &mut TreeNode, id: &str, dir: MoveDirection, policy: ReorderPolicy) -> bool {
        let parents = ParentIndex::build(tree);
        tree.move_node(&parents, id, dir, policy)
    }

    #[test]
    fn move_up_first_child_is_noop() {
        for policy in [ReorderPolicy::Legacy, ReorderPolicy::Adjacent] {
            let mut tree = family(3);
            assert!(!mv(&mut tree, "c0", MoveDirection::Up, policy));
            assert_eq!(order(&tree), ["c0", "c1", "c2"]);
        }
    }

    #[test]
    fn move_down_last_child_is_noop() {
        for policy in [ReorderPolicy::Legacy, ReorderPolicy::Adjacent] {
            let mut tree = family(3);
            assert!(!mv(&mut tree, "c2", MoveDirection::Down, policy));
            assert_eq!(order(&tree), ["c0", "c1", "c2"]);
        }
    }

    #[test]
    fn move_up_swaps_with_previous() {
        let mut tree = family(3);
        assert!(mv(&mut tree, "c2", MoveDirection::Up, ReorderPolicy::Legacy));
        assert_eq!(order(&tree), ["c0", "c2", "c1"]);
    }

    #[test]
    fn legacy_move_down_jumps_towards_the_end() {
        let mut tree = family(5);
        assert!(mv(&mut tree, "c0", MoveDirection::Down, ReorderPolicy::Legacy));
        assert_eq!(order(&tree), ["c1", "c2", "c3", "c0", "c4"]);
    }

    #[test]
    fn adjacent_move_down_swaps_with_next() {
        let mut tree = family(5);
        assert!(mv(&mut tree, "c0", MoveDirection::Down, ReorderPolicy::Adjacent));
        assert_eq!(order(&tree), ["c1", "c0", "c2", "c3", "c4"]);
    }

    #[test]
    fn only_child_and_root_do_not_move() {
        let mut tree = family(1);
        assert!(!mv(&mut tree, "c0", MoveDirection::Down, ReorderPolicy::Legacy));
        assert!(!mv(&mut tree, "c0", MoveDirection::Up, ReorderPolicy::Legacy));
        assert!(!mv(&mut tree, "root", MoveDirection::Up, ReorderPolicy::Legacy));
    }

    #[test]
    fn remove_detaches_and_root_is_guarded() {
        let mut tree = family(2);
        let parents = ParentIndex::build(&tree);
        let removed = tree.remove_node(&parents, "c0").unwrap();
        assert_eq!(removed.id, "c0");
        assert_eq!(order(&tree), ["c1"]);
        assert!(tree.remove_node(&parents, "root").is_none());
        assert!(tree.remove_node(&parents, "c0").is_none(), "stale id");
    }

    #[test]
    fn rename_and_insert_tolerate_missing_ids() {
        let mut tree = family(1);
        assert!(tree.rename("c0", "renamed"));
        assert_eq!(tree.nodes[0].text, "renamed");
        assert!(!tree.rename("nope", "x"));
        assert!(tree.insert_child("c0", TreeNode::new("new", "New")));
        assert_eq!(tree.nodes[0].nodes[0].id, "new");
        assert!(!tree.insert_child("nope", TreeNode::new("lost", "Lost")));
        assert_eq!(tree.node_count(), 3);
    }
}
