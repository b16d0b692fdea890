//! Input handling: platform-agnostic event types and the pointer tracker
//! that separates clicks from camera drags.

/// Platform-agnostic input events.
pub mod event;
/// Pointer position, press and drag tracking.
pub mod pointer;

pub use event::{InputEvent, MouseButton};
pub use pointer::{DragMode, PointerAction, PointerState};
