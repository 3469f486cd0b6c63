// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mindmap Render: draws a laid-out mindmap onto a 2D drawing context.
//!
//! - [`Canvas2D`] is the seam to the host's drawing surface: rectangles,
//!   paths, text, clipping and an affine transform.
//! - [`Renderer`] draws a frame: viewport transform, cleared and gridded
//!   background, nodes in pre-order with connector curves, the hovered node's
//!   collapse icon, count badges on collapsed nodes and search highlights.
//! - [`CanvasMeasurer`] lets layout measure text through the same surface.
//! - [`RecordingCanvas`] records commands for tests and debugging.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use mindmap_layout::{CollapseState, LayoutConfig, layout};
//! use mindmap_render::{CanvasMeasurer, Font, RecordingCanvas, RenderStyle, Renderer, Scene};
//! use mindmap_tree::TreeNode;
//! use mindmap_view::{ViewConfig, Viewport};
//!
//! let tree = TreeNode::new("root", "Plan").with_child(TreeNode::new("a", "Design"));
//! let viewport = Viewport::new(Rect::new(0.0, 0.0, 800.0, 600.0), &ViewConfig::default());
//! let config = LayoutConfig::default();
//! let font = Font::default();
//!
//! let mut canvas = RecordingCanvas::new(12.0);
//! let root = layout(
//!     &CanvasMeasurer::new(&canvas, &font),
//!     &tree,
//!     &CollapseState::new(),
//!     &config,
//!     viewport.canvas_size(),
//! );
//!
//! let renderer = Renderer::new(RenderStyle::default(), font.clone(), config);
//! renderer.render(&mut canvas, &viewport, &root, &Scene { search_term: "des", hover: Some("a") });
//! assert!(!canvas.commands().is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod canvas;
mod recording;
mod render;
mod style;

pub use canvas::{Canvas2D, CanvasMeasurer, Font};
pub use recording::{Command, Recorded, RecordingCanvas};
pub use render::{Renderer, Scene};
pub use style::RenderStyle;
