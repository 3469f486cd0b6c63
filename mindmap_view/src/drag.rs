// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Press tracking: pan deltas while held, click classification on release.

use kurbo::{Point, Vec2};

/// Tracks a pointer press from down to up.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragTracker {
    /// Position of the pointer-down that started the press.
    pub start_pos: Option<Point>,
    /// Last position seen while the press is active.
    pub last_pos: Option<Point>,
}

impl DragTracker {
    /// Start tracking a press at `pos`. Any earlier press is forgotten.
    pub fn start(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
    }

    /// Record a move, returning the delta since the previous position.
    ///
    /// Returns `None` when no press is active.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        self.start_pos?;
        let last = self.last_pos.replace(pos)?;
        Some(pos - last)
    }

    /// Offset of `pos` from where the press started.
    pub fn total_offset(&self, pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start| pos - start)
    }

    /// Returns `true` if releasing at `pos` counts as a click: the pointer
    /// travelled at most `threshold` along each axis since the press.
    pub fn is_click(&self, pos: Point, threshold: f64) -> bool {
        self.total_offset(pos)
            .is_some_and(|d| d.x.abs() <= threshold && d.y.abs() <= threshold)
    }

    /// End the press.
    pub fn end(&mut self) {
        self.start_pos = None;
        self.last_pos = None;
    }

    /// Returns `true` while a press is active.
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }
}
