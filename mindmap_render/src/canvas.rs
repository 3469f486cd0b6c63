// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing-context seam.

use alloc::format;
use alloc::string::String;

use kurbo::{Affine, BezPath, Point, Rect, Vec2};
use mindmap_layout::TextMeasurer;
use peniko::Color;
use serde::{Deserialize, Serialize};

/// Font used for labels and badges.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Font {
    /// Family name or CSS font stack.
    pub family: String,
    /// Size in content units.
    pub size: f64,
    /// Weight, 100 to 900.
    pub weight: u16,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            family: "sans-serif".into(),
            size: 24.0,
            weight: 400,
        }
    }
}

impl Font {
    /// CSS shorthand, e.g. `400 24px sans-serif`.
    pub fn css(&self) -> String {
        format!("{} {}px {}", self.weight, self.size, self.family)
    }
}

/// A 2D immediate-mode drawing context.
///
/// This mirrors the subset of an HTML canvas context the render pipeline
/// needs. Text is positioned by the top-left of its line box. Every drawing
/// call is affected by the current transform and clip; `save` / `restore`
/// push and pop both.
pub trait Canvas2D {
    /// Replaces the current transform.
    fn set_transform(&mut self, transform: Affine);
    /// Returns the current transform.
    fn transform(&self) -> Affine;
    /// Clears `rect` to transparent.
    fn clear_rect(&mut self, rect: Rect);
    /// Fills an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);
    /// Fills a path with the non-zero rule.
    fn fill_path(&mut self, path: &BezPath, color: Color);
    /// Strokes a path.
    fn stroke_path(&mut self, path: &BezPath, color: Color, width: f64);
    /// Draws a single line of text with its top-left at `origin`.
    fn fill_text(&mut self, text: &str, origin: Point, font: &Font, color: Color);
    /// Advance width of `text` in `font`, in untransformed units.
    fn measure_text(&self, text: &str, font: &Font) -> f64;
    /// Pushes the transform and clip.
    fn save(&mut self);
    /// Pops the transform and clip.
    fn restore(&mut self);
    /// Intersects the clip with `rect`.
    fn clip_rect(&mut self, rect: Rect);

    /// Post-multiplies the transform by a uniform scale.
    fn scale(&mut self, s: f64) {
        let t = self.transform() * Affine::scale(s);
        self.set_transform(t);
    }

    /// Post-multiplies the transform by a translation.
    fn translate(&mut self, v: Vec2) {
        let t = self.transform() * Affine::translate(v);
        self.set_transform(t);
    }
}

/// Adapts a [`Canvas2D`] and a [`Font`] to [`TextMeasurer`] for layout.
#[derive(Debug)]
pub struct CanvasMeasurer<'a, C: ?Sized> {
    canvas: &'a C,
    font: &'a Font,
}

impl<'a, C: Canvas2D + ?Sized> CanvasMeasurer<'a, C> {
    /// Measures through `canvas` in `font`.
    pub fn new(canvas: &'a C, font: &'a Font) -> Self {
        Self { canvas, font }
    }
}

impl<C: Canvas2D + ?Sized> TextMeasurer for CanvasMeasurer<'_, C> {
    fn measure(&self, text: &str) -> f64 {
        self.canvas.measure_text(text, self.font)
    }
}
