// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use mindmap_layout::LayoutConfig;
use mindmap_render::{Font, RenderStyle};
use mindmap_tree::ReorderPolicy;
use mindmap_view::ViewConfig;
use serde::{Deserialize, Serialize};

/// Everything a [`Mindmap`](crate::Mindmap) can be tuned with.
///
/// Every field has a default, so a partial JSON object is a valid
/// configuration. The render palette is not serialized.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Layout metrics.
    pub layout: LayoutConfig,
    /// Viewport and gesture tuning.
    pub view: ViewConfig,
    /// Label font.
    pub font: Font,
    /// Colors and stroke metrics.
    #[serde(skip)]
    pub style: RenderStyle,
    /// Delay between a click and the context menu closing, so a
    /// menu item handler gets to run first.
    pub menu_dismiss_delay_ms: u64,
    /// Label given to nodes created with "add child".
    pub new_node_text: String,
    /// How "move up" / "move down" pick the new position.
    pub reorder: ReorderPolicy,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            view: ViewConfig::default(),
            font: Font::default(),
            style: RenderStyle::default(),
            menu_dismiss_delay_ms: 100,
            new_node_text: "Untitled Node".into(),
            reorder: ReorderPolicy::default(),
        }
    }
}
