// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use mindmap_tree::{BlockStyle, Display};
use peniko::Color;

/// Colors and stroke metrics for a frame.
#[derive(Clone, Debug)]
pub struct RenderStyle {
    /// Canvas background behind the grid.
    pub background: Color,
    /// Grid lines.
    pub grid: Color,
    /// Distance between grid lines in content units.
    pub grid_spacing: f64,
    /// Grid line width.
    pub grid_width: f64,
    /// Label text on plain nodes.
    pub text: Color,
    /// Label text on faded nodes.
    pub faded_text: Color,
    /// Label text on block nodes.
    pub block_text: Color,
    /// Block background for [`BlockStyle::Info`].
    pub info: Color,
    /// Block background for [`BlockStyle::Success`].
    pub success: Color,
    /// Block background for [`BlockStyle::Warn`].
    pub warn: Color,
    /// Block background for [`BlockStyle::Danger`].
    pub danger: Color,
    /// Block background for [`BlockStyle::Default`].
    pub block: Color,
    /// Corner radius of block backgrounds.
    pub block_radius: f64,
    /// Downward shift of block backgrounds relative to the node box.
    pub block_offset: f64,
    /// Connector curves.
    pub connector: Color,
    /// Connector stroke width.
    pub connector_width: f64,
    /// Hover underline.
    pub underline_width: f64,
    /// Search match underline.
    pub highlight: Color,
    /// Search match underline width.
    pub highlight_width: f64,
    /// Collapse icon background.
    pub icon_background: Color,
    /// Collapse icon glyph.
    pub icon: Color,
    /// Count badge background.
    pub badge: Color,
    /// Count badge text.
    pub badge_text: Color,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background: Color::from_rgb8(0x42, 0x44, 0x48),
            grid: Color::from_rgb8(0x4d, 0x4f, 0x54),
            grid_spacing: 32.0,
            grid_width: 1.0,
            text: Color::from_rgb8(0xe2, 0xe2, 0xe2),
            faded_text: Color::from_rgb8(0xad, 0xab, 0xab),
            block_text: Color::from_rgb8(0x19, 0x19, 0x19),
            info: Color::from_rgb8(0x5b, 0xc0, 0xde),
            success: Color::from_rgb8(0x5c, 0xb8, 0x5c),
            warn: Color::from_rgb8(0xf0, 0xad, 0x4e),
            danger: Color::from_rgb8(0xd9, 0x53, 0x4f),
            block: Color::from_rgb8(0xe2, 0xe2, 0xe2),
            block_radius: 10.0,
            block_offset: 3.0,
            connector: Color::from_rgb8(0xe2, 0xe2, 0xe2),
            connector_width: 2.0,
            underline_width: 1.0,
            highlight: Color::from_rgb8(0xff, 0xd5, 0x4f),
            highlight_width: 3.0,
            icon_background: Color::from_rgb8(0xff, 0xff, 0xff),
            icon: Color::from_rgb8(0x44, 0x44, 0x44),
            badge: Color::from_rgb8(0x6c, 0x75, 0x7d),
            badge_text: Color::from_rgb8(0xff, 0xff, 0xff),
        }
    }
}

impl RenderStyle {
    /// Label color: block nodes first, then faded, then plain.
    pub fn text_color(&self, display: &Display) -> Color {
        if display.block {
            self.block_text
        } else if display.faded {
            self.faded_text
        } else {
            self.text
        }
    }

    /// Background of a block node.
    pub fn block_color(&self, style: BlockStyle) -> Color {
        match style {
            BlockStyle::Info => self.info,
            BlockStyle::Success => self.success,
            BlockStyle::Warn => self.warn,
            BlockStyle::Danger => self.danger,
            BlockStyle::Default => self.block,
        }
    }
}
