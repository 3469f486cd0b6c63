// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recursive left-to-right tree layout.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};
use mindmap_tree::{Display, TreeNode};
use serde::{Deserialize, Serialize};

use crate::{CollapseState, TextMeasurer, wrap_text};

/// Layout parameters, in content units.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Maximum width of a wrapped label line.
    pub max_label_width: f64,
    /// Height of one label line.
    pub line_height: f64,
    /// Horizontal distance between a node's box and its children's boxes.
    pub horizontal_gap: f64,
    /// Vertical distance between sibling subtrees.
    pub vertical_gap: f64,
    /// Inset of the label inside a block node's background.
    pub block_padding: f64,
    /// Side of the square collapse-toggle zone at the right end of each box.
    pub icon_size: f64,
    /// Distance of the root from the left edge of the content origin.
    pub margin: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_label_width: 800.0,
            line_height: 32.0,
            horizontal_gap: 48.0,
            vertical_gap: 16.0,
            block_padding: 8.0,
            icon_size: 32.0,
            margin: 32.0,
        }
    }
}

/// A positioned, sized node.
///
/// Layout nodes are rebuilt wholesale on every layout pass and are never
/// patched in place. `x`, `y`, `width` and `height` describe the node's own
/// box (label, padding and the trailing icon zone); the vertical band taken
/// up by the node together with its visible descendants is
/// `subtree_top..subtree_top + subtree_height`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutNode {
    /// Id of the source node.
    pub id: String,
    /// Source label.
    pub text: String,
    /// Source display flags, with `collapsed` set to the effective state.
    pub display: Display,
    /// Left edge of the box.
    pub x: f64,
    /// Top edge of the box.
    pub y: f64,
    /// Box width.
    pub width: f64,
    /// Box height.
    pub height: f64,
    /// Wrapped label, at least one line.
    pub lines: Vec<String>,
    /// Top of the band occupied by this subtree.
    pub subtree_top: f64,
    /// Height of the band occupied by this subtree.
    pub subtree_height: f64,
    /// Number of source children hidden because the node is collapsed.
    pub hidden_children: usize,
    /// Visible children, in source order.
    pub nodes: Vec<LayoutNode>,
    /// Extension fields of the source node, carried into exports.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl LayoutNode {
    /// The node's own box.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// The square collapse-toggle zone at the right end of the box.
    pub fn icon_rect(&self, icon_size: f64) -> Rect {
        let size = icon_size.min(self.width);
        let y = self.y + (self.height - size) * 0.5;
        Rect::new(self.x + self.width - size, y, self.x + self.width, y + size)
    }

    /// Returns `true` if the node is collapsed.
    pub fn is_collapsed(&self) -> bool {
        self.display.collapsed
    }

    /// Returns `true` if the source node has children, shown or hidden.
    pub fn has_children(&self) -> bool {
        !self.nodes.is_empty() || self.hidden_children > 0
    }

    /// Point where connectors to children start.
    pub fn out_anchor(&self) -> Point {
        Point::new(self.x + self.width, self.y + self.height * 0.5)
    }

    /// Point where the connector from the parent ends.
    pub fn in_anchor(&self) -> Point {
        Point::new(self.x, self.y + self.height * 0.5)
    }

    /// Finds the first node with `id` in depth-first pre-order.
    pub fn find(&self, id: &str) -> Option<&Self> {
        if self.id == id {
            return Some(self);
        }
        self.nodes.iter().find_map(|child| child.find(id))
    }

    /// Iterates the laid-out nodes in depth-first pre-order.
    pub fn iter(&self) -> impl Iterator<Item = &Self> + '_ {
        let mut stack = alloc::vec![self];
        core::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.nodes.iter().rev());
            Some(node)
        })
    }

    /// Bounding box of every laid-out node.
    pub fn bounds(&self) -> Rect {
        self.iter()
            .map(Self::rect)
            .fold(self.rect(), |acc, r| acc.union(r))
    }
}

/// Sizes computed bottom-up before placement.
struct Measured {
    lines: Vec<String>,
    width: f64,
    height: f64,
    extent: f64,
    children_extent: f64,
    hidden: usize,
    children: Vec<Measured>,
}

struct Layouter<'a, M> {
    measurer: &'a M,
    collapse: &'a CollapseState,
    config: &'a LayoutConfig,
}

impl<M: TextMeasurer> Layouter<'_, M> {
    fn measure(&self, node: &TreeNode) -> Measured {
        let cfg = self.config;
        let lines = wrap_text(self.measurer, &node.text, cfg.max_label_width);
        let text_width = lines
            .iter()
            .map(|l| self.measurer.measure(l))
            .fold(0.0, f64::max);
        let padding = if node.display.block {
            cfg.block_padding
        } else {
            0.0
        };
        let width = text_width + 2.0 * padding + cfg.icon_size;
        let height = lines.len() as f64 * cfg.line_height + 2.0 * padding;

        let collapsed = self.collapse.is_collapsed(node);
        let (children, hidden) = if collapsed {
            (Vec::new(), node.nodes.len())
        } else {
            (node.nodes.iter().map(|c| self.measure(c)).collect(), 0)
        };
        let children_extent = if children.is_empty() {
            0.0
        } else {
            children.iter().map(|c| c.extent).sum::<f64>()
                + cfg.vertical_gap * (children.len() - 1) as f64
        };

        Measured {
            lines,
            width,
            height,
            extent: height.max(children_extent),
            children_extent,
            hidden,
            children,
        }
    }

    fn place(&self, node: &TreeNode, measured: Measured, x: f64, top: f64) -> LayoutNode {
        let mut display = node.display.clone();
        display.collapsed = self.collapse.is_collapsed(node);

        let child_x = x + measured.width + self.config.horizontal_gap;
        let mut child_top = top + (measured.extent - measured.children_extent) * 0.5;
        let mut nodes = Vec::with_capacity(measured.children.len());
        for (child, child_measured) in node.nodes.iter().zip(measured.children) {
            let extent = child_measured.extent;
            nodes.push(self.place(child, child_measured, child_x, child_top));
            child_top += extent + self.config.vertical_gap;
        }

        LayoutNode {
            id: node.id.clone(),
            text: node.text.clone(),
            display,
            x,
            y: top + (measured.extent - measured.height) * 0.5,
            width: measured.width,
            height: measured.height,
            lines: measured.lines,
            subtree_top: top,
            subtree_height: measured.extent,
            hidden_children: measured.hidden,
            nodes,
            extra: node.extra.clone(),
        }
    }
}

/// Lays out `tree` left to right.
///
/// The root is placed `margin` units from the content origin and its subtree
/// is centered vertically in `viewport` (but never above `margin`). Children
/// of collapsed nodes (per `collapse`) are left out of both the geometry and
/// the returned tree.
///
/// ```
/// use kurbo::Size;
/// use mindmap_layout::{CollapseState, FixedAdvance, LayoutConfig, layout};
/// use mindmap_tree::TreeNode;
///
/// let tree = TreeNode::new("root", "A").with_child(TreeNode::new("b", "B"));
/// let config = LayoutConfig::default();
/// let root = layout(
///     &FixedAdvance::new(10.0),
///     &tree,
///     &CollapseState::new(),
///     &config,
///     Size::new(800.0, 600.0),
/// );
/// assert_eq!(root.nodes.len(), 1);
/// assert!(root.nodes[0].x > root.x + root.width);
/// ```
pub fn layout(
    measurer: &impl TextMeasurer,
    tree: &TreeNode,
    collapse: &CollapseState,
    config: &LayoutConfig,
    viewport: Size,
) -> LayoutNode {
    log::debug!("laying out tree");
    let layouter = Layouter {
        measurer,
        collapse,
        config,
    };
    let measured = layouter.measure(tree);
    let top = ((viewport.height - measured.extent) * 0.5).max(config.margin);
    layouter.place(tree, measured, config.margin, top)
}
