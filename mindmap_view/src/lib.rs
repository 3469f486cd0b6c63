// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mindmap View: viewport state and pointer input for a mindmap canvas.
//!
//! This crate is headless. It provides:
//! - [`Viewport`]: pan + zoom over the content plane, with conversions
//!   between page, device and content coordinates.
//! - [`InputController`]: a small state machine that pans on drag, zooms on
//!   modified wheel input, and classifies releases as clicks when the pointer
//!   barely moved.
//! - [`DragTracker`]: the press bookkeeping the controller uses.
//!
//! It does not hit-test. Actions come back in content coordinates so the
//! caller can query its own layout.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Vec2};
//! use mindmap_view::{InputController, InputEvent, Modifiers, ViewConfig};
//!
//! let mut input = InputController::new(Rect::new(0.0, 0.0, 800.0, 600.0), ViewConfig::default());
//!
//! // Drag by (20, 0): the view pans and the release produces nothing.
//! let modifiers = Modifiers::empty();
//! input.handle(InputEvent::PointerDown { position: Point::new(100.0, 100.0), modifiers });
//! input.handle(InputEvent::PointerMove { position: Point::new(120.0, 100.0), modifiers });
//! let actions = input.handle(InputEvent::PointerUp { position: Point::new(120.0, 100.0), modifiers });
//! assert!(actions.is_empty());
//! assert_eq!(input.viewport().pan(), Vec2::new(20.0, 0.0));
//!
//! // Page coordinates map back through the pan.
//! assert_eq!(input.viewport().page_to_content(Point::new(120.0, 100.0)), Point::new(100.0, 100.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod drag;
mod input;
mod viewport;

pub use config::ViewConfig;
pub use drag::DragTracker;
pub use input::{InputAction, InputActions, InputController, InputEvent, Modifiers};
pub use viewport::{MIN_ZOOM_FLOOR, Viewport, ViewportDebugInfo};
