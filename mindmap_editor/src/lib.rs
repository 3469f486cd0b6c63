// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mindmap Editor: the interaction orchestrator for a mindmap canvas.
//!
//! [`Mindmap`] ties the other mindmap crates together. It owns the tree and
//! the state derived from it, turns pointer input into hover, collapse
//! toggles and edits, and lays out and redraws after every change. The
//! embedding application plugs in twice:
//! - a drawing surface implementing [`Canvas2D`](mindmap_render::Canvas2D);
//! - a [`MindmapHost`] that receives node activations, edited trees, rename
//!   prompt requests and context-menu updates.
//!
//! Editing (rename, reorder, add child, remove) is gated on edit mode when it
//! comes from pointer input. The methods themselves are always available to
//! the host.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::time::Instant;
//!
//! use kurbo::{Point, Rect};
//! use mindmap_editor::{EditorConfig, Mindmap};
//! use mindmap_render::RecordingCanvas;
//! use mindmap_tree::TreeNode;
//! use mindmap_view::{InputEvent, Modifiers};
//!
//! let mut mindmap = Mindmap::new((), EditorConfig::default());
//! mindmap.load(TreeNode::new("root", "Plan").with_child(TreeNode::new("a", "Design")));
//! mindmap.attach_surface(RecordingCanvas::new(12.0), Rect::new(0.0, 0.0, 800.0, 600.0));
//! assert!(mindmap.layout().is_some());
//!
//! // Hover the root's label.
//! let root = mindmap.layout().unwrap();
//! let over_root = Point::new(root.x + 4.0, root.y + 4.0);
//! mindmap.handle_input(
//!     InputEvent::PointerMove { position: over_root, modifiers: Modifiers::empty() },
//!     Instant::now(),
//! );
//! assert_eq!(mindmap.state().hover.as_deref(), Some("root"));
//! ```

mod config;
mod export;
mod host;
mod mindmap;
mod state;

pub use config::EditorConfig;
pub use export::{EXPORT_FILE_NAME, ExportError};
pub use host::{MindmapHost, NodeActions};
pub use mindmap::Mindmap;
pub use state::{ContextMenu, InteractionState, MenuAction, RenamePrompt};
