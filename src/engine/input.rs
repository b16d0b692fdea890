//! Input handling for Session.
//!
//! Handlers only latch state: the pointer position in the viewport under
//! it, pending clicks and camera motion. Picking and selection changes are
//! deferred to the next tick.

use glam::Vec2;

use super::Session;
use crate::input::{DragMode, InputEvent, PointerAction};

impl Session {
    /// Process a platform-agnostic input event.
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::CursorMoved { x, y } => {
                let action = self.pointer.moved(x, y);
                self.latch_pointer(Some(Vec2::new(x, y)));
                self.dispatch(action);
            }
            InputEvent::CursorLeft => {
                self.pointer.left();
                self.drag_viewport = None;
                self.latch_pointer(None);
            }
            InputEvent::MouseButton { button, pressed } => {
                if pressed {
                    self.drag_viewport = self
                        .pointer
                        .position()
                        .and_then(|p| self.viewport_at(p));
                }
                let action = self.pointer.button(button, pressed);
                self.dispatch(action);
                if !pressed {
                    self.drag_viewport = None;
                }
            }
            InputEvent::Scroll { delta } => {
                if let Some(index) =
                    self.pointer.position().and_then(|p| self.viewport_at(p))
                {
                    self.viewports[index].controller.zoom(delta);
                }
            }
            InputEvent::ModifiersChanged { shift } => {
                self.pointer.set_shift(shift);
            }
            InputEvent::Resized { width, height } => {
                self.resize(width, height);
            }
        }
    }

    /// Resize the window and recompute viewport rectangles.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.window_size = (width, height);
        self.relayout();
        self.latch_pointer(self.pointer.position());
    }

    /// Index of the first viewport containing the window pixel.
    fn viewport_at(&self, position: Vec2) -> Option<usize> {
        self.viewports
            .iter()
            .position(|v| v.rect.contains(position.x, position.y))
    }

    /// Latch the pointer in the viewport under it and clear it everywhere
    /// else.
    fn latch_pointer(&mut self, position: Option<Vec2>) {
        let mut latched = false;
        for viewport in &mut self.viewports {
            viewport.pointer_ndc = if latched {
                None
            } else {
                position.and_then(|p| viewport.rect.to_ndc(p.x, p.y))
            };
            latched |= viewport.pointer_ndc.is_some();
        }
    }

    fn dispatch(&mut self, action: PointerAction) {
        match action {
            PointerAction::None => {}
            PointerAction::Drag { mode, delta, .. } => {
                let Some(index) = self.drag_viewport else {
                    return;
                };
                let controller = &mut self.viewports[index].controller;
                match mode {
                    DragMode::Rotate => controller.rotate(delta),
                    DragMode::Pan => controller.pan(delta),
                }
            }
            PointerAction::Click { at } => {
                self.latch_pointer(Some(at));
                if let Some(index) = self.viewport_at(at) {
                    self.viewports[index].pending_clicks += 1;
                }
            }
        }
    }
}
