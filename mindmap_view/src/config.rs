// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use serde::{Deserialize, Serialize};

/// Viewport and gesture tuning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Device pixels per page pixel.
    pub device_pixel_ratio: f64,
    /// Lowest zoom factor. Values below `0.1` are raised to `0.1`.
    pub min_zoom: f64,
    /// Highest zoom factor, if any. Zoom is unbounded above when `None`.
    pub max_zoom: Option<f64>,
    /// Zoom change per wheel unit while the zoom modifier is held.
    pub zoom_step: f64,
    /// Largest per-axis pointer travel, in page pixels, for a press/release
    /// pair to still count as a click.
    pub click_threshold: f64,
    /// Whether a wheel without the zoom modifier pans the view.
    pub scroll_pans: bool,
    /// Pan distance per wheel unit when `scroll_pans` is set.
    pub scroll_speed: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            device_pixel_ratio: 1.0,
            min_zoom: 0.1,
            max_zoom: None,
            zoom_step: 0.001,
            click_threshold: 5.0,
            scroll_pans: false,
            scroll_speed: 1.5,
        }
    }
}
