// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree node types exchanged with the embedding application.

use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

/// Visual category of a block node.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockStyle {
    /// Informational status.
    Info,
    /// Positive status.
    Success,
    /// Warning status.
    Warn,
    /// Error or blocking status.
    Danger,
    /// Neutral block.
    #[default]
    Default,
}

/// Per-node display flags.
///
/// Every field is optional on the wire; absent fields take their defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Display {
    /// Draw the node with a filled rounded background.
    pub block: bool,
    /// Fill used when [`Display::block`] is set.
    pub block_style: BlockStyle,
    /// Draw the label de-emphasized (used by search filtering).
    pub faded: bool,
    /// Hide the node's descendants.
    pub collapsed: bool,
}

impl Display {
    /// Returns `true` when every flag is at its default.
    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }
}

/// A node of the editable tree.
///
/// Children are owned and ordered: the order of [`TreeNode::nodes`] is the
/// draw order and the order that reordering operates on. Parent links are
/// not stored on nodes; see [`ParentIndex`](crate::ParentIndex).
///
/// Fields the core does not understand (for example an application's
/// `description` or `playlist`) are kept in [`TreeNode::extra`] so that they
/// survive a load/edit/save cycle.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Identifier, expected to be unique within a tree.
    ///
    /// Empty ids are replaced by [`auto_fill`](crate::auto_fill).
    #[serde(default)]
    pub id: String,
    /// Label text.
    #[serde(default)]
    pub text: String,
    /// Ordered children.
    #[serde(default)]
    pub nodes: Vec<TreeNode>,
    /// Display flags.
    #[serde(default, skip_serializing_if = "Display::is_plain")]
    pub display: Display,
    /// Unrecognized fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl TreeNode {
    /// Creates a leaf node.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            ..Self::default()
        }
    }

    /// Builder-style helper that appends `child` and returns `self`.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.nodes.push(child);
        self
    }

    /// Builder-style helper that replaces the display flags.
    #[must_use]
    pub fn with_display(mut self, display: Display) -> Self {
        self.display = display;
        self
    }

    /// Returns `true` if the node has at least one child.
    pub fn has_children(&self) -> bool {
        !self.nodes.is_empty()
    }

    /// Finds the first node with `id` in depth-first pre-order.
    ///
    /// Duplicate ids are not diagnosed; the first match wins.
    pub fn find(&self, id: &str) -> Option<&Self> {
        if self.id == id {
            return Some(self);
        }
        self.nodes.iter().find_map(|child| child.find(id))
    }

    /// Mutable variant of [`TreeNode::find`].
    pub fn find_mut(&mut self, id: &str) -> Option<&mut Self> {
        if self.id == id {
            return Some(self);
        }
        self.nodes.iter_mut().find_map(|child| child.find_mut(id))
    }

    /// Iterates the subtree in depth-first pre-order, starting with `self`.
    pub fn iter(&self) -> Iter<'_> {
        Iter { stack: alloc::vec![self] }
    }

    /// Number of nodes in the subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.nodes.iter().map(Self::node_count).sum::<usize>()
    }
}

/// Depth-first pre-order iterator returned by [`TreeNode::iter`].
#[derive(Debug)]
pub struct Iter<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.nodes.iter().rev());
        Some(node)
    }
}
