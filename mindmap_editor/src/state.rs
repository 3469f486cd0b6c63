// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::Instant;

use kurbo::Point;

/// An open context menu.
#[derive(Clone, Debug, PartialEq)]
pub struct ContextMenu {
    /// Node the menu acts on.
    pub node_id: String,
    /// Where to show the menu, in page coordinates.
    pub position: Point,
    /// When the menu will close, once a click has scheduled it.
    pub dismiss_at: Option<Instant>,
}

/// An open rename prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenamePrompt {
    /// Node being renamed.
    pub node_id: String,
    /// Label at the time the prompt opened.
    pub text: String,
}

/// Entries of the context menu.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MenuAction {
    /// Open the rename prompt.
    Rename,
    /// Move before the previous sibling.
    MoveUp,
    /// Move after the next sibling.
    MoveDown,
    /// Append a new child.
    AddChild,
    /// Remove the node and its subtree.
    Remove,
}

/// UI state owned by the orchestrator. Changing it redraws but does not
/// relayout.
#[derive(Clone, Debug, Default)]
pub struct InteractionState {
    /// Current search term.
    pub search_term: String,
    /// Whether editing affordances are enabled.
    pub edit_mode: bool,
    /// Node under the pointer.
    pub hover: Option<String>,
    /// Open context menu, if any.
    pub context_menu: Option<ContextMenu>,
    /// Open rename prompt, if any.
    pub rename: Option<RenamePrompt>,
}
