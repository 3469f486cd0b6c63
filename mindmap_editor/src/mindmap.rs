// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::{Duration, Instant};

use kurbo::{Point, Rect};
use mindmap_layout::{CollapseState, LayoutNode, hit_test, layout};
use mindmap_render::{Canvas2D, CanvasMeasurer, Font, Renderer, Scene};
use mindmap_tree::{JsonError, MoveDirection, ParentIndex, TreeNode, auto_fill, filter};
use mindmap_view::{InputAction, InputController, InputEvent, Modifiers, Viewport};
use uuid::Uuid;

use crate::{
    ContextMenu, EditorConfig, ExportError, InteractionState, MenuAction, MindmapHost,
    NodeActions, RenamePrompt,
};

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// The interaction orchestrator.
///
/// A `Mindmap` owns the editable tree and everything derived from it: the
/// parent index, collapse overrides, the search-filtered copy, the layout and
/// the interaction state. It is the only writer of the tree. Every operation
/// recomputes what it invalidated and redraws before returning.
///
/// Until a surface is attached there is nothing to measure text with, so no
/// layout exists and pointer input resolves to nothing. Edits through the
/// methods still apply to the tree.
#[derive(Debug)]
pub struct Mindmap<C, H> {
    config: EditorConfig,
    host: H,
    surface: Option<C>,
    source: Option<TreeNode>,
    parents: ParentIndex,
    collapse: CollapseState,
    shown: Option<TreeNode>,
    layout: Option<LayoutNode>,
    input: InputController,
    renderer: Renderer,
    state: InteractionState,
    frames: u64,
}

impl<C: Canvas2D, H: MindmapHost> Mindmap<C, H> {
    /// Creates an empty mindmap with no surface attached.
    pub fn new(host: H, config: EditorConfig) -> Self {
        Self {
            input: InputController::new(Rect::ZERO, config.view.clone()),
            renderer: Renderer::new(
                config.style.clone(),
                config.font.clone(),
                config.layout.clone(),
            ),
            config,
            host,
            surface: None,
            source: None,
            parents: ParentIndex::default(),
            collapse: CollapseState::new(),
            shown: None,
            layout: None,
            state: InteractionState::default(),
            frames: 0,
        }
    }

    /// Returns the host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Returns the host mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Returns the configuration.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// The editable tree, without search fading or collapse overrides.
    pub fn tree(&self) -> Option<&TreeNode> {
        self.source.as_ref()
    }

    /// The search-filtered copy that is laid out and drawn.
    pub fn displayed_tree(&self) -> Option<&TreeNode> {
        self.shown.as_ref()
    }

    /// The current layout, if a tree is loaded and a surface attached.
    pub fn layout(&self) -> Option<&LayoutNode> {
        self.layout.as_ref()
    }

    /// Collapse overrides applied on top of the tree.
    pub fn collapse_state(&self) -> &CollapseState {
        &self.collapse
    }

    /// Interaction state.
    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Current pan and zoom.
    pub fn viewport(&self) -> &Viewport {
        self.input.viewport()
    }

    /// Number of frames drawn so far.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Returns the attached surface.
    pub fn surface(&self) -> Option<&C> {
        self.surface.as_ref()
    }

    /// Returns the attached surface mutably.
    pub fn surface_mut(&mut self) -> Option<&mut C> {
        self.surface.as_mut()
    }

    /// Attaches a drawing surface occupying `canvas_rect` in page space, then
    /// lays out and draws.
    pub fn attach_surface(&mut self, surface: C, canvas_rect: Rect) {
        self.surface = Some(surface);
        self.input.viewport_mut().set_canvas_rect(canvas_rect);
        self.relayout();
    }

    /// Detaches and returns the surface. The layout is dropped with it.
    pub fn detach_surface(&mut self) -> Option<C> {
        self.layout = None;
        self.surface.take()
    }

    /// The canvas moved or changed size.
    pub fn resize(&mut self, canvas_rect: Rect) {
        self.input.viewport_mut().set_canvas_rect(canvas_rect);
        self.relayout();
    }

    /// The device pixel ratio changed.
    pub fn set_device_pixel_ratio(&mut self, ratio: f64) {
        self.input.viewport_mut().set_device_pixel_ratio(ratio);
        self.redraw();
    }

    /// Switches the label font and lays out again.
    pub fn set_font(&mut self, font: Font) {
        self.renderer.set_font(font.clone());
        self.config.font = font;
        self.relayout();
    }

    /// Replaces the tree.
    ///
    /// Nodes without an id get a fresh UUID, the parent index is rebuilt and
    /// collapse overrides, hover, menu and prompt are reset.
    pub fn load(&mut self, mut tree: TreeNode) {
        auto_fill(&mut tree, &mut new_id);
        self.parents = ParentIndex::build(&tree);
        self.collapse.clear();
        self.state.hover = None;
        self.state.rename = None;
        self.close_context_menu();
        self.source = Some(tree);
        self.refilter();
    }

    /// Parses and loads a tree from JSON.
    pub fn load_json(&mut self, text: &str) -> Result<(), JsonError> {
        self.load(TreeNode::from_json(text)?);
        Ok(())
    }

    /// Forces a redraw.
    pub fn invalidate(&mut self) {
        self.redraw();
    }

    /// Feeds one input event. `now` is used to schedule context-menu
    /// dismissal; see [`tick`](Self::tick).
    pub fn handle_input(&mut self, event: InputEvent, now: Instant) {
        for action in self.input.handle(event) {
            match action {
                InputAction::Hover { position } => self.update_hover(position),
                InputAction::ViewChanged => self.redraw(),
                InputAction::Click {
                    position,
                    modifiers,
                } => {
                    self.schedule_menu_dismiss(now);
                    self.click(position, modifiers);
                }
                InputAction::DoubleClick { position, .. } => self.double_click(position),
                InputAction::ContextMenu { position, page, .. } => {
                    self.open_context_menu(position, page);
                }
            }
        }
    }

    /// Advances time. Closes the context menu if its dismissal is due and
    /// returns `true` in that case.
    pub fn tick(&mut self, now: Instant) -> bool {
        let due = self
            .state
            .context_menu
            .as_ref()
            .and_then(|menu| menu.dismiss_at)
            .is_some_and(|at| now >= at);
        if due {
            self.close_context_menu();
        }
        due
    }

    /// Node under a page-space point.
    pub fn node_at(&self, page: Point) -> Option<&LayoutNode> {
        let content = self.input.viewport().page_to_content(page);
        hit_test(self.layout.as_ref()?, content, self.config.layout.icon_size).map(|hit| hit.node)
    }

    /// Sets the search term. Non-matching nodes are faded.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        if term == self.state.search_term {
            return;
        }
        self.state.search_term = term;
        self.refilter();
    }

    /// Enables or disables editing. Disabling closes the menu and any prompt.
    pub fn set_edit_mode(&mut self, enabled: bool) {
        if self.state.edit_mode == enabled {
            return;
        }
        self.state.edit_mode = enabled;
        log::debug!("edit mode: {enabled}");
        if !enabled {
            self.state.rename = None;
            self.close_context_menu();
        }
        self.host.edit_mode_changed(enabled);
        self.redraw();
    }

    /// Flips the collapsed state of `id`. The tree itself is not modified.
    pub fn toggle_collapse(&mut self, id: &str) -> bool {
        let Some(node) = self.source.as_ref().and_then(|tree| tree.find(id)) else {
            log::warn!("toggle for unknown node {id}");
            return false;
        };
        let collapsed = self.collapse.toggle(id, self.collapse.is_collapsed(node));
        log::debug!("node {id} collapsed: {collapsed}");
        self.relayout();
        true
    }

    /// Asks the host to prompt for a new label for `id`.
    pub fn begin_rename(&mut self, id: &str) -> bool {
        let Some(node) = self.source.as_ref().and_then(|tree| tree.find(id)) else {
            log::warn!("rename requested for unknown node {id}");
            return false;
        };
        let prompt = RenamePrompt {
            node_id: id.to_owned(),
            text: node.text.clone(),
        };
        self.host.open_rename_prompt(&prompt.node_id, &prompt.text);
        self.state.rename = Some(prompt);
        true
    }

    /// Completes the open rename prompt. An empty `text` renames nothing.
    pub fn confirm_rename(&mut self, text: &str) -> bool {
        let Some(prompt) = self.state.rename.take() else {
            return false;
        };
        if text.is_empty() {
            return false;
        }
        let renamed = self
            .source
            .as_mut()
            .is_some_and(|tree| tree.rename(&prompt.node_id, text));
        if renamed {
            self.tree_edited();
        } else {
            log::warn!("rename target {} is gone", prompt.node_id);
        }
        renamed
    }

    /// Closes the open rename prompt without renaming.
    pub fn cancel_rename(&mut self) {
        self.state.rename = None;
    }

    /// Moves `id` towards the front of its siblings.
    pub fn move_up(&mut self, id: &str) -> bool {
        self.reorder(id, MoveDirection::Up)
    }

    /// Moves `id` towards the back of its siblings.
    pub fn move_down(&mut self, id: &str) -> bool {
        self.reorder(id, MoveDirection::Down)
    }

    /// Appends a placeholder child to `parent_id` and returns its id.
    pub fn insert_child(&mut self, parent_id: &str) -> Option<String> {
        let id = new_id();
        let child = TreeNode::new(id.clone(), self.config.new_node_text.clone());
        let inserted = self
            .source
            .as_mut()
            .is_some_and(|tree| tree.insert_child(parent_id, child));
        if !inserted {
            log::warn!("insert under unknown node {parent_id}");
            return None;
        }
        self.tree_edited();
        Some(id)
    }

    /// Removes `id` and its subtree. The root cannot be removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let removed = self
            .source
            .as_mut()
            .and_then(|tree| tree.remove_node(&self.parents, id));
        let Some(removed) = removed else {
            return false;
        };
        if let Some(hover) = &self.state.hover
            && removed.find(hover).is_some()
        {
            self.state.hover = None;
        }
        self.tree_edited();
        true
    }

    /// Runs a context-menu entry against the menu's node and closes the menu.
    pub fn context_menu_action(&mut self, action: MenuAction) -> bool {
        let Some(id) = self.state.context_menu.as_ref().map(|m| m.node_id.clone()) else {
            return false;
        };
        let done = match action {
            MenuAction::Rename => self.begin_rename(&id),
            MenuAction::MoveUp => self.move_up(&id),
            MenuAction::MoveDown => self.move_down(&id),
            MenuAction::AddChild => self.insert_child(&id).is_some(),
            MenuAction::Remove => self.remove(&id),
        };
        self.close_context_menu();
        done
    }

    /// Hands the current tree, collapse state included, to the host.
    pub fn save(&mut self) {
        log::debug!("saving tree");
        self.notify_tree_changed();
    }

    /// Serializes the current layout as pretty-printed JSON, for debugging.
    ///
    /// The usual file name is [`EXPORT_FILE_NAME`](crate::EXPORT_FILE_NAME).
    pub fn export_layout_json(&self) -> Result<String, ExportError> {
        let Some(root) = &self.layout else {
            log::warn!("layout export requested with nothing laid out");
            return Err(ExportError::NoLayout);
        };
        Ok(serde_json::to_string_pretty(root)?)
    }

    fn reorder(&mut self, id: &str, direction: MoveDirection) -> bool {
        let policy = self.config.reorder;
        let moved = self
            .source
            .as_mut()
            .is_some_and(|tree| tree.move_node(&self.parents, id, direction, policy));
        if moved {
            self.tree_edited();
        }
        moved
    }

    fn tree_edited(&mut self) {
        if let Some(tree) = &self.source {
            self.parents = ParentIndex::build(tree);
        }
        self.refilter();
        self.notify_tree_changed();
    }

    fn notify_tree_changed(&mut self) {
        let Some(tree) = &self.source else {
            return;
        };
        let mut snapshot = tree.clone();
        self.collapse.apply_to(&mut snapshot);
        self.host.tree_changed(&snapshot);
    }

    fn refilter(&mut self) {
        self.shown = self
            .source
            .as_ref()
            .map(|tree| filter(tree, &self.state.search_term));
        self.relayout();
    }

    fn relayout(&mut self) {
        self.layout = match (&self.surface, &self.shown) {
            (Some(surface), Some(tree)) => {
                let measurer = CanvasMeasurer::new(surface, self.renderer.font());
                Some(layout(
                    &measurer,
                    tree,
                    &self.collapse,
                    &self.config.layout,
                    self.input.viewport().canvas_size(),
                ))
            }
            _ => None,
        };
        self.redraw();
    }

    fn redraw(&mut self) {
        let (Some(surface), Some(root)) = (self.surface.as_mut(), self.layout.as_ref()) else {
            return;
        };
        let scene = Scene {
            search_term: &self.state.search_term,
            hover: self.state.hover.as_deref(),
        };
        self.renderer
            .render(surface, self.input.viewport(), root, &scene);
        self.frames += 1;
    }

    fn hit(&self, position: Point) -> Option<String> {
        let root = self.layout.as_ref()?;
        let hit = hit_test(root, position, self.config.layout.icon_size);
        log::trace!("hit at {position:?}: {:?}", hit.map(|h| &h.node.id));
        hit.map(|h| h.node.id.clone())
    }

    fn update_hover(&mut self, position: Point) {
        let hover = self.hit(position);
        if hover != self.state.hover {
            self.state.hover = hover;
            self.redraw();
        }
    }

    fn click(&mut self, position: Point, modifiers: Modifiers) {
        let Some(root) = self.layout.as_ref() else {
            return;
        };
        let Some(hit) = hit_test(root, position, self.config.layout.icon_size) else {
            log::trace!("click at {position:?} hit nothing");
            return;
        };
        let id = hit.node.id.clone();
        if hit.on_icon && hit.node.has_children() {
            self.toggle_collapse(&id);
            return;
        }
        let mut actions = NodeActions::default();
        self.host.node_activated(hit.node, modifiers, &mut actions);
        if actions.toggle_requested() {
            self.toggle_collapse(&id);
        }
    }

    fn double_click(&mut self, position: Point) {
        if !self.state.edit_mode {
            return;
        }
        if let Some(id) = self.hit(position) {
            self.begin_rename(&id);
        }
    }

    fn open_context_menu(&mut self, position: Point, page: Point) {
        if !self.state.edit_mode {
            return;
        }
        let Some(node_id) = self.hit(position) else {
            return;
        };
        self.state.context_menu = Some(ContextMenu {
            node_id,
            position: page,
            dismiss_at: None,
        });
        self.host
            .context_menu_changed(self.state.context_menu.as_ref());
        self.redraw();
    }

    fn schedule_menu_dismiss(&mut self, now: Instant) {
        let delay = Duration::from_millis(self.config.menu_dismiss_delay_ms);
        if let Some(menu) = &mut self.state.context_menu
            && menu.dismiss_at.is_none()
        {
            menu.dismiss_at = Some(now + delay);
        }
    }

    fn close_context_menu(&mut self) {
        if self.state.context_menu.take().is_some() {
            self.host.context_menu_changed(None);
            self.redraw();
        }
    }
}
