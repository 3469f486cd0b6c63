// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Callbacks into the embedding application.

use mindmap_layout::LayoutNode;
use mindmap_tree::TreeNode;
use mindmap_view::Modifiers;

use crate::ContextMenu;

/// Capabilities handed to [`MindmapHost::node_activated`].
///
/// Requests are applied once the callback returns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NodeActions {
    toggle: bool,
}

impl NodeActions {
    /// Collapses the activated node if expanded, expands it if collapsed.
    /// Calling this twice cancels the request.
    pub fn toggle_collapse(&mut self) {
        self.toggle = !self.toggle;
    }

    /// Returns `true` if a collapse toggle is pending.
    pub fn toggle_requested(&self) -> bool {
        self.toggle
    }
}

/// The embedding application, as seen from a [`Mindmap`](crate::Mindmap).
///
/// Every method has an empty default, so hosts implement only what they use.
pub trait MindmapHost {
    /// A node was clicked outside its collapse-toggle zone.
    fn node_activated(
        &mut self,
        node: &LayoutNode,
        modifiers: Modifiers,
        actions: &mut NodeActions,
    ) {
        let _ = (node, modifiers, actions);
    }

    /// The tree was edited or explicitly saved. Collapse state is folded into
    /// `tree`; persisting it is up to the host.
    fn tree_changed(&mut self, tree: &TreeNode) {
        let _ = tree;
    }

    /// Edit mode was switched on or off.
    fn edit_mode_changed(&mut self, enabled: bool) {
        let _ = enabled;
    }

    /// The user asked to rename the node `id`. The host shows a prompt
    /// pre-filled with `text` and answers with
    /// [`Mindmap::confirm_rename`](crate::Mindmap::confirm_rename) or
    /// [`Mindmap::cancel_rename`](crate::Mindmap::cancel_rename).
    fn open_rename_prompt(&mut self, id: &str, text: &str) {
        let _ = (id, text);
    }

    /// The context menu opened (`Some`) or closed (`None`).
    fn context_menu_changed(&mut self, menu: Option<&ContextMenu>) {
        let _ = menu;
    }
}

/// A host that ignores everything.
impl MindmapHost for () {}
