// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw input to semantic actions.

use bitflags::bitflags;
use kurbo::{Point, Rect, Vec2};
use smallvec::SmallVec;

use crate::{DragTracker, ViewConfig, Viewport};

bitflags! {
    /// Modifier keys held during an input event.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT = 0b0001;
        /// Alt, or Option on macOS.
        const ALT   = 0b0010;
        /// Control.
        const CTRL  = 0b0100;
        /// Meta: Command on macOS, the Windows key elsewhere.
        const META  = 0b1000;
    }
}

impl Modifiers {
    /// Returns `true` if the set turns wheel input into zoom.
    #[must_use]
    pub const fn zooms(self) -> bool {
        self.intersects(Self::CTRL.union(Self::META))
    }
}

/// Raw input as delivered by the host. Positions are in page space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed.
    PointerDown {
        /// Pointer position.
        position: Point,
        /// Modifiers held.
        modifiers: Modifiers,
    },
    /// Pointer moved, pressed or not.
    PointerMove {
        /// Pointer position.
        position: Point,
        /// Modifiers held.
        modifiers: Modifiers,
    },
    /// Primary button released.
    PointerUp {
        /// Pointer position.
        position: Point,
        /// Modifiers held.
        modifiers: Modifiers,
    },
    /// Pointer left the surface.
    PointerLeave,
    /// Platform double-click.
    DoubleClick {
        /// Pointer position.
        position: Point,
        /// Modifiers held.
        modifiers: Modifiers,
    },
    /// Platform context-menu request (usually a right click).
    ContextMenu {
        /// Pointer position.
        position: Point,
        /// Modifiers held.
        modifiers: Modifiers,
    },
    /// Wheel or trackpad scroll, in wheel units.
    Wheel {
        /// Scroll delta.
        delta: Vec2,
    },
    /// The set of held modifier keys changed.
    ModifiersChanged(Modifiers),
}

/// Semantic result of an [`InputEvent`]. Positions are in content space
/// unless named `page`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputAction {
    /// The pointer is over `position`; hover should be re-resolved.
    Hover {
        /// Pointer position.
        position: Point,
    },
    /// Pan or zoom changed; the view needs a redraw.
    ViewChanged,
    /// A press and release close enough together to count as a click.
    ///
    /// Releases that end a pan produce no action at all.
    Click {
        /// Release position.
        position: Point,
        /// Modifiers held at release.
        modifiers: Modifiers,
    },
    /// A double-click.
    DoubleClick {
        /// Pointer position.
        position: Point,
        /// Modifiers held.
        modifiers: Modifiers,
    },
    /// A context-menu request.
    ContextMenu {
        /// Pointer position.
        position: Point,
        /// Raw position, for placing a menu next to the pointer.
        page: Point,
        /// Modifiers held.
        modifiers: Modifiers,
    },
}

/// Actions produced by a single event. Rarely more than two.
pub type InputActions = SmallVec<[InputAction; 2]>;

/// Turns raw input into pan/zoom updates and semantic actions.
///
/// The controller owns the [`Viewport`]: pointer drags pan it, wheel input
/// with Control or Meta held zooms it. Everything else is converted to
/// content space and handed back as [`InputAction`]s for the caller to
/// hit-test and interpret.
#[derive(Clone, Debug)]
pub struct InputController {
    config: ViewConfig,
    viewport: Viewport,
    drag: DragTracker,
    held: Modifiers,
}

impl InputController {
    /// Creates a controller for a canvas at `canvas_rect` in page space.
    pub fn new(canvas_rect: Rect, config: ViewConfig) -> Self {
        Self {
            viewport: Viewport::new(canvas_rect, &config),
            config,
            drag: DragTracker::default(),
            held: Modifiers::empty(),
        }
    }

    /// Returns the viewport.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Returns the viewport for direct manipulation.
    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Modifier keys currently held, as last reported.
    pub fn held_modifiers(&self) -> Modifiers {
        self.held
    }

    /// Returns `true` while a press is active.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Processes one event.
    pub fn handle(&mut self, event: InputEvent) -> InputActions {
        let mut out = InputActions::new();
        match event {
            InputEvent::PointerDown { position, .. } => {
                self.drag.start(position);
            }
            InputEvent::PointerMove { position, .. } => {
                out.push(InputAction::Hover {
                    position: self.viewport.page_to_content(position),
                });
                if let Some(delta) = self.drag.update(position)
                    && self.viewport.pan_by_device(delta)
                {
                    out.push(InputAction::ViewChanged);
                }
            }
            InputEvent::PointerUp {
                position,
                modifiers,
            } => {
                if !self.drag.is_dragging() {
                    return out;
                }
                let click = self.drag.is_click(position, self.config.click_threshold);
                self.drag.end();
                log::trace!("release at {position:?}, click: {click}");
                if click {
                    out.push(InputAction::Click {
                        position: self.viewport.page_to_content(position),
                        modifiers,
                    });
                }
            }
            InputEvent::PointerLeave => self.drag.end(),
            InputEvent::DoubleClick {
                position,
                modifiers,
            } => out.push(InputAction::DoubleClick {
                position: self.viewport.page_to_content(position),
                modifiers,
            }),
            InputEvent::ContextMenu {
                position,
                modifiers,
            } => out.push(InputAction::ContextMenu {
                position: self.viewport.page_to_content(position),
                page: position,
                modifiers,
            }),
            InputEvent::Wheel { delta } => {
                if self.wheel(delta) {
                    out.push(InputAction::ViewChanged);
                }
            }
            InputEvent::ModifiersChanged(modifiers) => self.held = modifiers,
        }
        out
    }

    fn wheel(&mut self, delta: Vec2) -> bool {
        if self.held.zooms() {
            self.viewport.zoom_by_wheel(delta.y)
        } else if self.config.scroll_pans {
            let zoom = self.viewport.zoom();
            self.viewport
                .pan_by_content(delta * -self.config.scroll_speed / zoom)
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(config: ViewConfig) -> InputController {
        InputController::new(Rect::new(0.0, 0.0, 800.0, 600.0), config)
    }

    fn down(x: f64, y: f64) -> InputEvent {
        InputEvent::PointerDown {
            position: Point::new(x, y),
            modifiers: Modifiers::empty(),
        }
    }

    fn mv(x: f64, y: f64) -> InputEvent {
        InputEvent::PointerMove {
            position: Point::new(x, y),
            modifiers: Modifiers::empty(),
        }
    }

    fn up(x: f64, y: f64) -> InputEvent {
        InputEvent::PointerUp {
            position: Point::new(x, y),
            modifiers: Modifiers::empty(),
        }
    }

    #[test]
    fn small_travel_is_a_click() {
        let mut c = controller(ViewConfig::default());
        assert!(c.handle(down(10.0, 10.0)).is_empty());
        let actions = c.handle(up(13.0, 12.0));
        assert_eq!(
            actions.as_slice(),
            [InputAction::Click {
                position: Point::new(13.0, 12.0),
                modifiers: Modifiers::empty(),
            }]
        );
    }

    #[test]
    fn large_travel_pans_and_suppresses_click() {
        let mut c = controller(ViewConfig::default());
        c.handle(down(10.0, 10.0));
        let actions = c.handle(mv(40.0, 10.0));
        assert!(actions.contains(&InputAction::ViewChanged));
        assert_eq!(c.viewport().pan(), Vec2::new(30.0, 0.0));
        assert!(c.handle(up(40.0, 10.0)).is_empty());
        assert!(!c.is_dragging());
    }

    #[test]
    fn hover_without_press_does_not_pan() {
        let mut c = controller(ViewConfig::default());
        let actions = c.handle(mv(40.0, 10.0));
        assert_eq!(
            actions.as_slice(),
            [InputAction::Hover {
                position: Point::new(40.0, 10.0)
            }]
        );
        assert_eq!(c.viewport().pan(), Vec2::ZERO);
    }

    #[test]
    fn click_position_is_in_content_space() {
        let mut c = controller(ViewConfig::default());
        c.viewport_mut().set_zoom(2.0);
        c.viewport_mut().pan_by_content(Vec2::new(50.0, 0.0));
        c.handle(down(200.0, 100.0));
        let actions = c.handle(up(200.0, 100.0));
        assert_eq!(
            actions[1],
            InputAction::Click {
                position: Point::new(50.0, 50.0),
                modifiers: Modifiers::empty(),
            }
        );
    }

    #[test]
    fn leave_ends_the_press() {
        let mut c = controller(ViewConfig::default());
        c.handle(down(10.0, 10.0));
        c.handle(InputEvent::PointerLeave);
        assert!(!c.is_dragging());
        assert!(c.handle(up(10.0, 10.0)).is_empty());
        c.handle(mv(50.0, 50.0));
        assert_eq!(c.viewport().pan(), Vec2::ZERO);
    }

    #[test]
    fn wheel_zooms_only_with_modifier() {
        let mut c = controller(ViewConfig::default());
        let wheel = InputEvent::Wheel {
            delta: Vec2::new(0.0, 200.0),
        };
        assert!(c.handle(wheel).is_empty());
        assert_eq!(c.viewport().zoom(), 1.0);

        c.handle(InputEvent::ModifiersChanged(Modifiers::META));
        assert_eq!(c.handle(wheel).as_slice(), [InputAction::ViewChanged]);
        assert!((c.viewport().zoom() - 1.2).abs() < 1e-9);

        c.handle(InputEvent::ModifiersChanged(Modifiers::empty()));
        c.handle(wheel);
        assert!((c.viewport().zoom() - 1.2).abs() < 1e-9);
    }

    #[test]
    fn scroll_hook_pans_against_the_wheel() {
        let mut c = controller(ViewConfig {
            scroll_pans: true,
            ..ViewConfig::default()
        });
        c.handle(InputEvent::Wheel {
            delta: Vec2::new(0.0, 10.0),
        });
        assert_eq!(c.viewport().pan(), Vec2::new(0.0, -15.0));
    }

    #[test]
    fn context_menu_keeps_the_page_position() {
        let mut c = controller(ViewConfig::default());
        c.viewport_mut().pan_by_content(Vec2::new(10.0, 0.0));
        let actions = c.handle(InputEvent::ContextMenu {
            position: Point::new(100.0, 100.0),
            modifiers: Modifiers::CTRL,
        });
        assert_eq!(
            actions.as_slice(),
            [InputAction::ContextMenu {
                position: Point::new(90.0, 100.0),
                page: Point::new(100.0, 100.0),
                modifiers: Modifiers::CTRL,
            }]
        );
    }
}
