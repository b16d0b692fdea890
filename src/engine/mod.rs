//! The interactive session: node store, selection, labels and viewports,
//! advanced one tick at a time by the host.
//!
//! Hosts forward window events through [`Session::handle_input`] and call
//! [`Session::tick`] once per display refresh. Input handlers only latch
//! pointer state; all picking, state transitions, motion and rendering
//! happen inside `tick`, in a fixed order, so every viewport sees the
//! same node positions within a tick.

mod frame;
mod input;
mod loading;
mod queries;
mod viewport;

pub use frame::TickReport;
pub use viewport::layout_rects;

use self::viewport::Viewport;
use crate::backend::{NodeInstance, ViewportBackend};
use crate::camera::OrbitController;
use crate::input::PointerState;
use crate::labels::LabelManager;
use crate::options::Options;
use crate::picking::{Picker, ViewportRect};
use crate::scene::{NodeStore, Scaffold, Wander};
use crate::selection::SelectionStateMachine;
use crate::source::NodeLoader;
use crate::util::FrameClock;

/// A node cloud with one or more viewports onto it.
pub struct Session {
    options: Options,
    store: NodeStore,
    selection: SelectionStateMachine,
    labels: LabelManager,
    wander: Wander,
    picker: Picker,
    pointer: PointerState,
    /// Viewport a drag started in; receives the camera motion until release.
    drag_viewport: Option<usize>,
    viewports: Vec<Viewport>,
    window_size: (u32, u32),
    scaffold: Scaffold,
    loader: Option<NodeLoader>,
    clock: FrameClock,
    /// Per-tick instance scratch shared by every viewport's frame.
    instances: Vec<NodeInstance>,
}

impl Session {
    /// Empty session for a window of `width` x `height` pixels.
    #[must_use]
    pub fn new(options: Options, width: u32, height: u32) -> Self {
        let amplitude = if options.motion.enabled {
            options.motion.amplitude
        } else {
            0.0
        };
        Self {
            store: NodeStore::new(),
            selection: SelectionStateMachine::new(0),
            labels: LabelManager::new(&options.labels),
            wander: Wander::new(amplitude),
            picker: Picker::new(options.picking.node_radius),
            pointer: PointerState::new(options.picking.drag_threshold),
            drag_viewport: None,
            viewports: Vec::new(),
            window_size: (width, height),
            scaffold: Scaffold::default(),
            loader: None,
            clock: FrameClock::new(),
            instances: Vec::new(),
            options,
        }
    }

    /// Replace the motion generator with a reproducible one.
    pub fn seed_motion(&mut self, seed: u64) {
        self.wander = Wander::seeded(self.wander.amplitude(), seed);
    }

    /// Add a viewport drawn by `backend` and return its index.
    ///
    /// The backend receives the scaffolding immediately and, if nodes are
    /// already loaded, the current batch and labels.
    pub fn add_viewport(&mut self, mut backend: Box<dyn ViewportBackend>) -> usize {
        let index = self.viewports.len();
        let style = self.options.display.style_for(index);
        backend.scaffold(&self.scaffold);
        if !self.store.is_empty() {
            backend.nodes_loaded(self.store.as_slice(), style);
            for label in self.labels.iter() {
                backend.label_attached(label);
            }
        }
        self.viewports.push(Viewport {
            rect: ViewportRect::default(),
            controller: OrbitController::new(&self.options.camera, 1.0),
            pointer_ndc: None,
            pending_clicks: 0,
            style,
            backend,
        });
        let slot = self.selection.add_viewport();
        debug_assert_eq!(slot, index);
        self.relayout();
        log::debug!("viewport {index} added ({style:?})");
        index
    }

    /// Recompute every viewport rectangle for the current window size.
    fn relayout(&mut self) {
        let (width, height) = self.window_size;
        let rects = layout_rects(
            self.options.display.layout,
            self.viewports.len(),
            width,
            height,
        );
        for (viewport, rect) in self.viewports.iter_mut().zip(rects) {
            viewport.set_rect(rect);
        }
    }
}
