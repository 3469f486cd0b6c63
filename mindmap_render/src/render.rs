// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame drawing.

use alloc::string::ToString;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor`
use kurbo::{Affine, BezPath, Point, Rect, RoundedRect, Shape, Size, Vec2};
use mindmap_layout::{LayoutConfig, LayoutNode};
use mindmap_tree::match_ranges;
use mindmap_view::Viewport;

use crate::{Canvas2D, Font, RenderStyle};

/// Per-frame inputs besides geometry.
#[derive(Clone, Copy, Debug, Default)]
pub struct Scene<'a> {
    /// Current search term; matches are highlighted.
    pub search_term: &'a str,
    /// Id of the node under the pointer.
    pub hover: Option<&'a str>,
}

/// Draws laid-out trees onto a [`Canvas2D`].
#[derive(Clone, Debug)]
pub struct Renderer {
    style: RenderStyle,
    font: Font,
    metrics: LayoutConfig,
}

impl Renderer {
    /// Creates a renderer. `metrics` must be the configuration the tree was
    /// laid out with.
    pub fn new(style: RenderStyle, font: Font, metrics: LayoutConfig) -> Self {
        Self {
            style,
            font,
            metrics,
        }
    }

    /// Returns the style.
    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    /// Returns the label font.
    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Replaces the label font. The tree must be laid out again.
    pub fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    /// Replaces the layout metrics.
    pub fn set_metrics(&mut self, metrics: LayoutConfig) {
        self.metrics = metrics;
    }

    /// Draws one frame.
    ///
    /// The transform is reset and rebuilt from the viewport (scale, then
    /// translate), the visible content rectangle is cleared and gridded, and
    /// the tree is drawn parent before children.
    pub fn render(
        &self,
        canvas: &mut impl Canvas2D,
        viewport: &Viewport,
        root: &LayoutNode,
        scene: &Scene<'_>,
    ) {
        log::debug!("drawing tree");
        canvas.set_transform(Affine::IDENTITY);
        canvas.scale(viewport.zoom());
        canvas.translate(viewport.pan());

        let visible = visible_rect(canvas.transform(), viewport.device_size());
        canvas.clear_rect(visible);
        self.draw_grid(canvas, visible);
        self.draw_subtree(canvas, root, scene);
    }

    fn draw_grid(&self, canvas: &mut impl Canvas2D, visible: Rect) {
        canvas.save();
        canvas.clip_rect(visible);
        canvas.fill_rect(visible, self.style.background);
        let spacing = self.style.grid_spacing;
        if spacing > 0.0 {
            let mut grid = BezPath::new();
            let mut x = (visible.x0 / spacing).floor() * spacing;
            while x <= visible.x1 {
                grid.move_to((x, visible.y0));
                grid.line_to((x, visible.y1));
                x += spacing;
            }
            let mut y = (visible.y0 / spacing).floor() * spacing;
            while y <= visible.y1 {
                grid.move_to((visible.x0, y));
                grid.line_to((visible.x1, y));
                y += spacing;
            }
            canvas.stroke_path(&grid, self.style.grid, self.style.grid_width);
        }
        canvas.restore();
    }

    fn draw_subtree(&self, canvas: &mut impl Canvas2D, node: &LayoutNode, scene: &Scene<'_>) {
        let hovered = scene.hover == Some(node.id.as_str());
        self.draw_node(canvas, node, hovered, scene.search_term);

        if node.is_collapsed() {
            if node.hidden_children > 0 {
                self.draw_badge(canvas, node);
            }
        } else {
            for child in &node.nodes {
                self.draw_subtree(canvas, child, scene);
            }
            for child in &node.nodes {
                self.draw_connector(canvas, node, child);
            }
        }

        if hovered && node.has_children() {
            self.draw_icon(canvas, node);
        }
    }

    fn draw_node(&self, canvas: &mut impl Canvas2D, node: &LayoutNode, underline: bool, term: &str) {
        let display = &node.display;
        let mut origin = Point::new(node.x, node.y);
        if display.block {
            let bg = RoundedRect::from_rect(
                node.rect() + Vec2::new(0.0, self.style.block_offset),
                self.style.block_radius,
            );
            canvas.fill_path(&bg.to_path(0.1), self.style.block_color(display.block_style));
            origin += Vec2::new(self.metrics.block_padding, self.metrics.block_padding);
        }

        let color = self.style.text_color(display);
        let line_height = self.metrics.line_height;
        for (i, line) in node.lines.iter().enumerate() {
            let top = origin + Vec2::new(0.0, i as f64 * line_height);
            canvas.fill_text(line, top, &self.font, color);
            let baseline = top.y + self.font.size + 1.0;
            if underline && !line.is_empty() {
                let width = canvas.measure_text(line, &self.font);
                canvas.fill_rect(
                    Rect::new(top.x, baseline, top.x + width, baseline + self.style.underline_width),
                    color,
                );
            }
            for range in match_ranges(line, term) {
                let x0 = top.x + canvas.measure_text(&line[..range.start], &self.font);
                let x1 = top.x + canvas.measure_text(&line[..range.end], &self.font);
                canvas.fill_rect(
                    Rect::new(x0, baseline, x1, baseline + self.style.highlight_width),
                    self.style.highlight,
                );
            }
        }
    }

    fn draw_connector(&self, canvas: &mut impl Canvas2D, parent: &LayoutNode, child: &LayoutNode) {
        let from = parent.out_anchor();
        let to = child.in_anchor();
        let mid = (from.x + to.x) * 0.5;
        let mut path = BezPath::new();
        path.move_to(from);
        path.curve_to(Point::new(mid, from.y), Point::new(mid, to.y), to);
        canvas.stroke_path(&path, self.style.connector, self.style.connector_width);
    }

    fn draw_badge(&self, canvas: &mut impl Canvas2D, node: &LayoutNode) {
        let label = node.hidden_children.to_string();
        let text_width = canvas.measure_text(&label, &self.font);
        let height = self.font.size + 4.0;
        let width = (text_width + 12.0).max(height);
        let x0 = node.x + node.width + 6.0;
        let y0 = node.y + (node.height - height) * 0.5;
        let pill = RoundedRect::new(x0, y0, x0 + width, y0 + height, height * 0.5);
        canvas.fill_path(&pill.to_path(0.1), self.style.badge);
        canvas.fill_text(
            &label,
            Point::new(x0 + (width - text_width) * 0.5, y0 + 2.0),
            &self.font,
            self.style.badge_text,
        );
    }

    /// Plus when collapsed, minus when expanded, over the toggle zone.
    fn draw_icon(&self, canvas: &mut impl Canvas2D, node: &LayoutNode) {
        let zone = node.icon_rect(self.metrics.icon_size);
        canvas.fill_rect(zone, self.style.icon_background);
        let c = zone.center();
        let arm = zone.width() * 0.3;
        let half = (zone.width() * 0.06).max(1.0);
        canvas.fill_rect(Rect::new(c.x - arm, c.y - half, c.x + arm, c.y + half), self.style.icon);
        if node.is_collapsed() {
            canvas.fill_rect(Rect::new(c.x - half, c.y - arm, c.x + half, c.y + arm), self.style.icon);
        }
    }
}

/// Content-space rectangle covered by a device surface of `size`.
fn visible_rect(transform: Affine, size: Size) -> Rect {
    transform.inverse().transform_rect_bbox(size.to_rect())
}
