//! The seam between a session and whatever draws it.
//!
//! A session never rasterizes anything itself. Each viewport owns a
//! [`ViewportBackend`] that is told about scene changes (scaffolding, node
//! batches, labels) and receives one [`Frame`] per tick.

mod instance;
mod recording;

use glam::{Mat4, Vec3};
pub use instance::{build_instances, NodeInstance};
pub use recording::{RecordedFrame, RecordingBackend, SharedRecorder};

use crate::labels::{Label, LabelPlacement};
use crate::options::NodeStyle;
use crate::picking::ViewportRect;
use crate::scene::{Entity, EntityId, Scaffold};

/// Everything needed to draw one viewport for one tick.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Index of the viewport being drawn.
    pub viewport: usize,
    /// Region of the window to draw into.
    pub rect: ViewportRect,
    /// Camera eye position.
    pub eye: Vec3,
    /// Combined view-projection matrix.
    pub view_proj: Mat4,
    /// Clear color.
    pub background: [f32; 3],
    /// One instance per node, shared by every viewport this tick.
    pub nodes: &'a [NodeInstance],
    /// Labels oriented toward this viewport's camera.
    pub labels: &'a [LabelPlacement],
}

/// Per-viewport rendering collaborator.
pub trait ViewportBackend {
    /// Static scene furniture, sent once when the viewport is added.
    fn scaffold(&mut self, scaffold: &Scaffold);

    /// A new node batch replaced the previous one. All labels are gone.
    fn nodes_loaded(&mut self, entities: &[Entity], style: NodeStyle);

    /// A label was created.
    fn label_attached(&mut self, label: &Label);

    /// The label owned by `owner` was removed.
    fn label_detached(&mut self, owner: EntityId);

    /// The viewport's rectangle changed.
    fn resize(&mut self, rect: ViewportRect);

    /// Draw one frame.
    fn render(&mut self, frame: &Frame<'_>);
}
