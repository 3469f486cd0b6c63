// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point queries against a laid-out tree.

use kurbo::{Point, Rect};

use crate::LayoutNode;

/// Result of [`hit_test`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hit<'a> {
    /// Node whose box contains the point.
    pub node: &'a LayoutNode,
    /// Whether the point lies in the node's collapse-toggle zone.
    pub on_icon: bool,
}

/// Inclusive on all four edges, unlike [`Rect::contains`].
fn contains(rect: Rect, pt: Point) -> bool {
    pt.x >= rect.x0 && pt.x <= rect.x1 && pt.y >= rect.y0 && pt.y <= rect.y1
}

/// Finds the node under `pt` (in content coordinates).
///
/// The tree is searched depth-first in pre-order: a node's own box is tested
/// before its children, and children are tested in source order. Subtrees
/// whose band cannot contain `pt` are skipped. The icon zone is the trailing
/// `icon_size` units of the box width.
pub fn hit_test(root: &LayoutNode, pt: Point, icon_size: f64) -> Option<Hit<'_>> {
    if contains(root.rect(), pt) {
        return Some(Hit {
            node: root,
            on_icon: pt.x > root.x + root.width - icon_size,
        });
    }
    if pt.y < root.subtree_top || pt.y > root.subtree_top + root.subtree_height {
        return None;
    }
    root.nodes
        .iter()
        .find_map(|child| hit_test(child, pt, icon_size))
}
