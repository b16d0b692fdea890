//! Read-only accessors for Session.

use glam::Vec2;

use super::Session;
use crate::camera::OrbitController;
use crate::labels::LabelManager;
use crate::options::Options;
use crate::picking::ViewportRect;
use crate::scene::{EntityId, NodeStore, Scaffold};
use crate::selection::SelectionStateMachine;
use crate::util::FrameClock;

impl Session {
    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The loaded entities.
    #[must_use]
    pub fn store(&self) -> &NodeStore {
        &self.store
    }

    /// Selection set and hover slots.
    #[must_use]
    pub fn selection(&self) -> &SelectionStateMachine {
        &self.selection
    }

    /// Labels of the selected entities.
    #[must_use]
    pub fn labels(&self) -> &LabelManager {
        &self.labels
    }

    /// Axes and grids shown in every viewport.
    #[must_use]
    pub fn scaffold(&self) -> &Scaffold {
        &self.scaffold
    }

    /// Tick timing.
    #[must_use]
    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Number of viewports.
    #[must_use]
    pub fn viewport_count(&self) -> usize {
        self.viewports.len()
    }

    /// Window region of a viewport.
    #[must_use]
    pub fn viewport_rect(&self, index: usize) -> Option<ViewportRect> {
        self.viewports.get(index).map(|v| v.rect)
    }

    /// Camera controller of a viewport.
    #[must_use]
    pub fn controller(&self, index: usize) -> Option<&OrbitController> {
        self.viewports.get(index).map(|v| &v.controller)
    }

    /// Mutable camera controller of a viewport, for scripted camera moves.
    pub fn controller_mut(
        &mut self,
        index: usize,
    ) -> Option<&mut OrbitController> {
        self.viewports.get_mut(index).map(|v| &mut v.controller)
    }

    /// Pointer position latched in a viewport, in its NDC.
    #[must_use]
    pub fn pointer_ndc(&self, index: usize) -> Option<Vec2> {
        self.viewports.get(index).and_then(|v| v.pointer_ndc)
    }

    /// Entity under the pointer in any viewport.
    #[must_use]
    pub fn hovered(&self) -> Option<EntityId> {
        (0..self.selection.viewport_count())
            .find_map(|index| self.selection.hovered(index))
    }
}
