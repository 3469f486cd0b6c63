// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mindmap Layout: geometry for a left-to-right mindmap.
//!
//! This crate turns a [`mindmap_tree::TreeNode`] into positioned boxes and
//! answers point queries against them:
//! - [`wrap_text`] breaks labels into lines using a [`TextMeasurer`].
//! - [`layout`] places each node to the right of its parent, stacking
//!   siblings vertically and centering parents on their children.
//! - [`CollapseState`] holds collapse overrides so the source tree stays
//!   untouched when a node is folded.
//! - [`hit_test`] finds the node (and whether its toggle zone) under a point.
//!
//! All coordinates are content units. Converting to and from screen space is
//! the viewport's job.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use mindmap_layout::{CollapseState, FixedAdvance, LayoutConfig, hit_test, layout};
//! use mindmap_tree::TreeNode;
//!
//! let tree = TreeNode::new("root", "Plan")
//!     .with_child(TreeNode::new("a", "Design"))
//!     .with_child(TreeNode::new("b", "Build"));
//!
//! let config = LayoutConfig::default();
//! let mut collapse = CollapseState::new();
//! let root = layout(&FixedAdvance::new(8.0), &tree, &collapse, &config, Size::new(800.0, 600.0));
//!
//! let build = root.find("b").unwrap();
//! let hit = hit_test(&root, build.rect().center(), config.icon_size).unwrap();
//! assert_eq!(hit.node.id, "b");
//!
//! collapse.set("root", true);
//! let folded = layout(&FixedAdvance::new(8.0), &tree, &collapse, &config, Size::new(800.0, 600.0));
//! assert_eq!(folded.hidden_children, 2);
//! assert!(hit_test(&folded, build.rect().center(), config.icon_size).is_none());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod collapse;
mod hit;
mod layout;
mod measure;

pub use collapse::CollapseState;
pub use hit::{Hit, hit_test};
pub use layout::{LayoutConfig, LayoutNode, layout};
pub use measure::{FixedAdvance, TextMeasurer, wrap_text};
