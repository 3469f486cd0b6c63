// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::ViewConfig;

/// Lowest zoom factor any viewport accepts, whatever its configuration says.
pub const MIN_ZOOM_FLOOR: f64 = 0.1;

/// Pan and zoom over the content plane of a canvas.
///
/// Three coordinate spaces are involved:
/// - *Page* space: pointer coordinates as the host reports them.
/// - *Device* space: the canvas backing store, i.e. page coordinates relative
///   to the canvas origin and multiplied by the device pixel ratio.
/// - *Content* space: the plane layout boxes live in.
///
/// Device coordinates are obtained from content coordinates by translating by
/// the pan offset and then scaling by the zoom factor. The pan offset is kept
/// in content units and is only ever changed by relative deltas.
#[derive(Clone, Debug)]
pub struct Viewport {
    canvas_rect: Rect,
    device_pixel_ratio: f64,
    zoom: f64,
    pan: Vec2,
    min_zoom: f64,
    max_zoom: f64,
    zoom_step: f64,
    content_to_device: Affine,
    device_to_content: Affine,
}

impl Viewport {
    /// Creates a viewport for a canvas occupying `canvas_rect` in page space.
    ///
    /// Initial zoom is `1.0` and the content origin maps to the canvas origin.
    #[must_use]
    pub fn new(canvas_rect: Rect, config: &ViewConfig) -> Self {
        let mut vp = Self {
            canvas_rect,
            device_pixel_ratio: positive_or_one(config.device_pixel_ratio),
            zoom: 1.0,
            pan: Vec2::ZERO,
            min_zoom: MIN_ZOOM_FLOOR,
            max_zoom: f64::INFINITY,
            zoom_step: config.zoom_step,
            content_to_device: Affine::IDENTITY,
            device_to_content: Affine::IDENTITY,
        };
        vp.set_zoom_limits(config.min_zoom, config.max_zoom.unwrap_or(f64::INFINITY));
        vp.rebuild_transforms();
        vp
    }

    /// Returns the canvas rectangle in page coordinates.
    #[must_use]
    pub fn canvas_rect(&self) -> Rect {
        self.canvas_rect
    }

    /// Size of the canvas in page units; this is the viewport size layout uses.
    #[must_use]
    pub fn canvas_size(&self) -> Size {
        self.canvas_rect.size()
    }

    /// Size of the canvas backing store in device pixels.
    #[must_use]
    pub fn device_size(&self) -> Size {
        self.canvas_rect.size() * self.device_pixel_ratio
    }

    /// Moves or resizes the canvas. Pan and zoom are kept.
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    /// Returns the device pixel ratio.
    #[must_use]
    pub fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio
    }

    /// Sets the device pixel ratio. Non-positive values are treated as `1.0`.
    pub fn set_device_pixel_ratio(&mut self, ratio: f64) {
        self.device_pixel_ratio = positive_or_one(ratio);
    }

    /// Returns the current uniform zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Returns the accumulated pan offset in content units.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    /// Sets the minimum and maximum zoom factors.
    ///
    /// The range is normalized so that `min_zoom <= max_zoom` and the minimum
    /// never goes below [`MIN_ZOOM_FLOOR`]. The current zoom is clamped into
    /// the new range.
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        let (min_zoom, max_zoom) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };
        self.min_zoom = min_zoom.max(MIN_ZOOM_FLOOR);
        self.max_zoom = max_zoom.max(self.min_zoom);
        self.set_zoom(self.zoom);
    }

    /// Sets the zoom factor, clamping it into the configured zoom range.
    ///
    /// Returns `true` if the zoom changed.
    pub fn set_zoom(&mut self, zoom: f64) -> bool {
        let clamped = zoom.clamp(self.min_zoom, self.max_zoom);
        if (self.zoom - clamped).abs() < f64::EPSILON {
            return false;
        }
        self.zoom = clamped;
        self.rebuild_transforms();
        true
    }

    /// Pans by a pointer delta in page pixels.
    ///
    /// The delta is scaled by the device pixel ratio and divided by the zoom
    /// factor, so the content under the pointer follows it.
    pub fn pan_by_device(&mut self, delta: Vec2) -> bool {
        self.pan_by_content(delta * self.device_pixel_ratio / self.zoom)
    }

    /// Pans by a delta already expressed in content units.
    pub fn pan_by_content(&mut self, delta: Vec2) -> bool {
        if delta == Vec2::ZERO {
            return false;
        }
        self.pan += delta;
        self.rebuild_transforms();
        log::trace!("pan {:?} -> {:?}", delta, self.pan);
        true
    }

    /// Accumulates a wheel delta into the zoom factor.
    ///
    /// Each wheel unit adds the configured zoom step; the result is clamped
    /// into the zoom range. Zoom is not anchored to the pointer.
    pub fn zoom_by_wheel(&mut self, delta: f64) -> bool {
        let changed = self.set_zoom(self.zoom + delta * self.zoom_step);
        if changed {
            log::trace!("zoom {}", self.zoom);
        }
        changed
    }

    /// Transform from content space to device space, as handed to the
    /// drawing context each frame.
    #[must_use]
    pub fn content_to_device(&self) -> Affine {
        self.content_to_device
    }

    /// Converts a page-space point to device space.
    #[must_use]
    pub fn page_to_device(&self, pt: Point) -> Point {
        ((pt - self.canvas_rect.origin()) * self.device_pixel_ratio).to_point()
    }

    /// Converts a page-space point to content space.
    ///
    /// This is the conversion hit testing must go through.
    #[must_use]
    pub fn page_to_content(&self, pt: Point) -> Point {
        self.device_to_content * self.page_to_device(pt)
    }

    /// Converts a content-space point to page space.
    #[must_use]
    pub fn content_to_page(&self, pt: Point) -> Point {
        let device = self.content_to_device * pt;
        self.canvas_rect.origin() + device.to_vec2() / self.device_pixel_ratio
    }

    /// Returns the content-space rectangle currently visible on the canvas.
    #[must_use]
    pub fn visible_content_rect(&self) -> Rect {
        self.device_to_content
            .transform_rect_bbox(self.device_size().to_rect())
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            canvas_rect: self.canvas_rect,
            device_pixel_ratio: self.device_pixel_ratio,
            visible_content_rect: self.visible_content_rect(),
            zoom: self.zoom,
            pan: self.pan,
            min_zoom: self.min_zoom,
            max_zoom: self.max_zoom,
        }
    }

    fn rebuild_transforms(&mut self) {
        // Scale first, then translate: pan stays in content units.
        self.content_to_device = Affine::scale(self.zoom) * Affine::translate(self.pan);
        self.device_to_content = self.content_to_device.inverse();
    }
}

fn positive_or_one(v: f64) -> f64 {
    if v > 0.0 { v } else { 1.0 }
}

/// Debug snapshot of a [`Viewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// Canvas rectangle in page coordinates.
    pub canvas_rect: Rect,
    /// Device pixels per page pixel.
    pub device_pixel_ratio: f64,
    /// Content-space rectangle currently visible.
    pub visible_content_rect: Rect,
    /// Current uniform zoom factor.
    pub zoom: f64,
    /// Current pan offset in content units.
    pub pan: Vec2,
    /// Minimum zoom factor.
    pub min_zoom: f64,
    /// Maximum zoom factor.
    pub max_zoom: f64,
}
