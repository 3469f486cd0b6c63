// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mindmap Tree: the editable tree behind a mindmap canvas.
//!
//! This crate owns the plain data exchanged with an embedding application
//! and the pure operations the interaction layer performs on it:
//! - [`TreeNode`] and its [`Display`] flags, (de)serialized as JSON with
//!   unknown fields preserved.
//! - [`auto_fill`] to assign ids to nodes that arrive without one.
//! - [`ParentIndex`], a derived id → parent id lookup rebuilt per load.
//! - [`filter`], the case-insensitive search that fades non-matching nodes.
//! - Id-addressed edits: [`TreeNode::rename`], [`TreeNode::move_node`],
//!   [`TreeNode::insert_child`], [`TreeNode::remove_node`].
//!
//! Layout, rendering and input handling live in sibling crates.
//!
//! ## Minimal example
//!
//! ```rust
//! use mindmap_tree::{MoveDirection, ParentIndex, ReorderPolicy, TreeNode};
//!
//! let mut tree = TreeNode::from_json(
//!     r#"{"id":"root","text":"A","nodes":[{"id":"b","text":"B"},{"id":"c","text":"C"}]}"#,
//! )
//! .unwrap();
//!
//! let parents = ParentIndex::build(&tree);
//! assert_eq!(parents.parent_of("c"), Some("root"));
//!
//! tree.move_node(&parents, "c", MoveDirection::Up, ReorderPolicy::default());
//! assert_eq!(tree.nodes[0].id, "c");
//! ```
//!
//! Ids are not validated for uniqueness. With duplicates, every id-addressed
//! operation targets the first depth-first match.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod edit;
mod index;
mod json;
mod node;
mod search;

pub use edit::{MoveDirection, ReorderPolicy};
pub use index::{ParentIndex, auto_fill};
pub use json::JsonError;
pub use node::{BlockStyle, Display, Iter, TreeNode};
pub use search::{filter, match_ranges, matches};
