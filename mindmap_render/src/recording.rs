// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A canvas that records instead of rasterizing.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Affine, BezPath, Point, Rect};
use mindmap_layout::{FixedAdvance, TextMeasurer};
use peniko::Color;

use crate::{Canvas2D, Font};

/// A drawing command as received.
#[derive(Clone, Debug)]
pub enum Command {
    /// [`Canvas2D::set_transform`].
    SetTransform(Affine),
    /// [`Canvas2D::clear_rect`].
    ClearRect(Rect),
    /// [`Canvas2D::fill_rect`].
    FillRect {
        /// Rectangle.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// [`Canvas2D::fill_path`].
    FillPath {
        /// Path.
        path: BezPath,
        /// Fill color.
        color: Color,
    },
    /// [`Canvas2D::stroke_path`].
    StrokePath {
        /// Path.
        path: BezPath,
        /// Stroke color.
        color: Color,
        /// Stroke width.
        width: f64,
    },
    /// [`Canvas2D::fill_text`].
    FillText {
        /// Text.
        text: String,
        /// Top-left of the line box.
        origin: Point,
        /// Text color.
        color: Color,
    },
    /// [`Canvas2D::save`].
    Save,
    /// [`Canvas2D::restore`].
    Restore,
    /// [`Canvas2D::clip_rect`].
    ClipRect(Rect),
}

/// A command and the transform in force when it was issued.
#[derive(Clone, Debug)]
pub struct Recorded {
    /// The command.
    pub command: Command,
    /// Transform at the time of the call.
    pub transform: Affine,
}

/// Non-rasterizing [`Canvas2D`] for tests and debugging.
///
/// Text is measured with a fixed per-character advance, matching
/// [`FixedAdvance`], so layouts computed with the same advance line up with
/// what is drawn.
#[derive(Clone, Debug)]
pub struct RecordingCanvas {
    measurer: FixedAdvance,
    transform: Affine,
    stack: Vec<Affine>,
    commands: Vec<Recorded>,
}

impl RecordingCanvas {
    /// Creates an empty recording with the given per-character advance.
    pub fn new(advance: f64) -> Self {
        Self {
            measurer: FixedAdvance::new(advance),
            transform: Affine::IDENTITY,
            stack: Vec::new(),
            commands: Vec::new(),
        }
    }

    /// Commands in the order they were issued.
    pub fn commands(&self) -> &[Recorded] {
        &self.commands
    }

    /// Drops recorded commands. Transform and save stack are kept.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    fn push(&mut self, command: Command) {
        self.commands.push(Recorded {
            command,
            transform: self.transform,
        });
    }
}

impl Canvas2D for RecordingCanvas {
    fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
        self.push(Command::SetTransform(transform));
    }

    fn transform(&self) -> Affine {
        self.transform
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.push(Command::ClearRect(rect));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.push(Command::FillRect { rect, color });
    }

    fn fill_path(&mut self, path: &BezPath, color: Color) {
        self.push(Command::FillPath {
            path: path.clone(),
            color,
        });
    }

    fn stroke_path(&mut self, path: &BezPath, color: Color, width: f64) {
        self.push(Command::StrokePath {
            path: path.clone(),
            color,
            width,
        });
    }

    fn fill_text(&mut self, text: &str, origin: Point, _font: &Font, color: Color) {
        self.push(Command::FillText {
            text: text.into(),
            origin,
            color,
        });
    }

    fn measure_text(&self, text: &str, _font: &Font) -> f64 {
        self.measurer.measure(text)
    }

    fn save(&mut self) {
        self.stack.push(self.transform);
        self.push(Command::Save);
    }

    fn restore(&mut self) {
        if let Some(t) = self.stack.pop() {
            self.transform = t;
        }
        self.push(Command::Restore);
    }

    fn clip_rect(&mut self, rect: Rect) {
        self.push(Command::ClipRect(rect));
    }
}
