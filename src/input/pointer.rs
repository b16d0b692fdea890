use glam::Vec2;

use super::MouseButton;

/// How a drag moves the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    /// Orbit around the target (left drag).
    Rotate,
    /// Translate the target (right drag, or shift + left drag).
    Pan,
}

/// What a pointer event amounts to once drag detection has run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerAction {
    /// Nothing beyond updating the pointer position.
    None,
    /// The pointer moved with a button held past the drag threshold.
    Drag {
        /// Camera motion implied by the drag.
        mode: DragMode,
        /// Pointer motion since the previous event, in pixels.
        delta: Vec2,
        /// Where the press started.
        origin: Vec2,
    },
    /// A left press and release without a drag in between.
    Click {
        /// Release position in window pixels.
        at: Vec2,
    },
}

#[derive(Debug, Clone, Copy)]
struct Press {
    button: MouseButton,
    origin: Vec2,
    dragging: bool,
}

/// Tracks pointer position, button presses and drag state.
///
/// A release only counts as a click if the pointer never travelled more
/// than the drag threshold while the button was held.
#[derive(Debug, Clone)]
pub struct PointerState {
    position: Option<Vec2>,
    press: Option<Press>,
    shift: bool,
    drag_threshold: f32,
}

impl PointerState {
    /// Pointer tracker with the given drag threshold in pixels.
    #[must_use]
    pub fn new(drag_threshold: f32) -> Self {
        Self {
            position: None,
            press: None,
            shift: false,
            drag_threshold,
        }
    }

    /// Last known pointer position, `None` if outside the window.
    #[must_use]
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    /// Whether a button is held and has moved past the threshold.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.press.is_some_and(|p| p.dragging)
    }

    /// Update the shift modifier.
    pub fn set_shift(&mut self, shift: bool) {
        self.shift = shift;
    }

    /// Record a pointer move.
    pub fn moved(&mut self, x: f32, y: f32) -> PointerAction {
        let to = Vec2::new(x, y);
        let from = self.position.replace(to).unwrap_or(to);
        let Some(press) = self.press.as_mut() else {
            return PointerAction::None;
        };
        if !press.dragging
            && to.distance(press.origin) > self.drag_threshold
        {
            press.dragging = true;
        }
        if !press.dragging {
            return PointerAction::None;
        }
        let mode = match press.button {
            MouseButton::Left if !self.shift => DragMode::Rotate,
            MouseButton::Left | MouseButton::Right => DragMode::Pan,
            MouseButton::Middle => return PointerAction::None,
        };
        PointerAction::Drag {
            mode,
            delta: to - from,
            origin: press.origin,
        }
    }

    /// The pointer left the window. Any press in progress is abandoned.
    pub fn left(&mut self) {
        self.position = None;
        self.press = None;
    }

    /// Record a button press or release.
    pub fn button(
        &mut self,
        button: MouseButton,
        pressed: bool,
    ) -> PointerAction {
        let Some(at) = self.position else {
            self.press = None;
            return PointerAction::None;
        };
        if pressed {
            if self.press.is_none() {
                self.press = Some(Press {
                    button,
                    origin: at,
                    dragging: false,
                });
            }
            return PointerAction::None;
        }
        match self.press {
            Some(press) if press.button == button => {
                self.press = None;
                if !press.dragging && button == MouseButton::Left {
                    PointerAction::Click { at }
                } else {
                    PointerAction::None
                }
            }
            _ => PointerAction::None,
        }
    }
}
