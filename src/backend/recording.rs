use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec3;

use super::{Frame, NodeInstance, ViewportBackend};
use crate::labels::{Label, LabelPlacement};
use crate::options::NodeStyle;
use crate::picking::ViewportRect;
use crate::scene::{Entity, EntityId, Scaffold};

/// What a [`RecordingBackend`] saw on its most recent render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordedFrame {
    /// Camera eye position.
    pub eye: Vec3,
    /// Node instances, in load order.
    pub nodes: Vec<NodeInstance>,
    /// Label placements.
    pub labels: Vec<LabelPlacement>,
}

/// Headless backend that records every call. Used by the driver binary
/// and by tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingBackend {
    /// Whether scaffolding has been handed over.
    pub has_scaffold: bool,
    /// Node ids of the last loaded batch.
    pub node_ids: Vec<String>,
    /// Node style of the last loaded batch.
    pub style: Option<NodeStyle>,
    /// Labels currently shown, keyed by owner.
    pub labels: Vec<(EntityId, String)>,
    /// Latest viewport rectangle.
    pub rect: ViewportRect,
    /// Number of `render` calls.
    pub frames: u64,
    /// Contents of the last frame.
    pub last: RecordedFrame,
}

impl RecordingBackend {
    /// Fresh recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ViewportBackend for RecordingBackend {
    fn scaffold(&mut self, _scaffold: &Scaffold) {
        self.has_scaffold = true;
    }

    fn nodes_loaded(&mut self, entities: &[Entity], style: NodeStyle) {
        self.node_ids = entities.iter().map(|e| e.node_id().to_owned()).collect();
        self.style = Some(style);
        self.labels.clear();
    }

    fn label_attached(&mut self, label: &Label) {
        self.labels.push((label.owner, label.text.clone()));
    }

    fn label_detached(&mut self, owner: EntityId) {
        self.labels.retain(|(id, _)| *id != owner);
    }

    fn resize(&mut self, rect: ViewportRect) {
        self.rect = rect;
    }

    fn render(&mut self, frame: &Frame<'_>) {
        self.frames += 1;
        self.last = RecordedFrame {
            eye: frame.eye,
            nodes: frame.nodes.to_vec(),
            labels: frame.labels.to_vec(),
        };
    }
}

/// A [`RecordingBackend`] that stays inspectable after being handed to a
/// session. Clones share the same recording.
#[derive(Debug, Clone, Default)]
pub struct SharedRecorder(Rc<RefCell<RecordingBackend>>);

impl SharedRecorder {
    /// Fresh shared recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far.
    #[must_use]
    pub fn snapshot(&self) -> RecordingBackend {
        self.0.borrow().clone()
    }

    /// A boxed handle for [`Session::add_viewport`](crate::engine::Session::add_viewport).
    #[must_use]
    pub fn boxed(&self) -> Box<dyn ViewportBackend> {
        Box::new(self.clone())
    }
}

impl ViewportBackend for SharedRecorder {
    fn scaffold(&mut self, scaffold: &Scaffold) {
        self.0.borrow_mut().scaffold(scaffold);
    }

    fn nodes_loaded(&mut self, entities: &[Entity], style: NodeStyle) {
        self.0.borrow_mut().nodes_loaded(entities, style);
    }

    fn label_attached(&mut self, label: &Label) {
        self.0.borrow_mut().label_attached(label);
    }

    fn label_detached(&mut self, owner: EntityId) {
        self.0.borrow_mut().label_detached(owner);
    }

    fn resize(&mut self, rect: ViewportRect) {
        self.0.borrow_mut().resize(rect);
    }

    fn render(&mut self, frame: &Frame<'_>) {
        self.0.borrow_mut().render(frame);
    }
}
