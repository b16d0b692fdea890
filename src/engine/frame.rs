//! Per-tick coordination for Session.

use super::Session;
use crate::backend::{build_instances, Frame};
use crate::selection::ClickOutcome;

/// What happened during one [`Session::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// A background batch was installed at the start of the tick.
    pub loaded: bool,
    /// Number of viewports whose hovered entity changed.
    pub hover_changes: usize,
    /// Number of clicks that selected or deselected an entity.
    pub selection_changes: usize,
    /// Number of viewports drawn.
    pub rendered: usize,
}

impl Session {
    /// Advance the session by one frame.
    ///
    /// In order: install a finished background fetch; for each viewport
    /// pick under its latched pointer, update its hover slot and apply
    /// its pending clicks; move every node once; re-anchor labels; then
    /// advance each camera and render each viewport from the same node
    /// instances.
    pub fn tick(&mut self) -> TickReport {
        let _ = self.clock.tick();
        let mut report = TickReport {
            loaded: self.poll_loader(),
            ..TickReport::default()
        };

        let mut outcomes = Vec::new();
        for (index, viewport) in self.viewports.iter_mut().enumerate() {
            let nearest = viewport.pointer_ndc.and_then(|ndc| {
                self.picker
                    .nearest(ndc, &viewport.controller.camera, self.store.iter())
            });
            if self.selection.update_hover(index, nearest, &mut self.store) {
                report.hover_changes += 1;
            }
            for _ in 0..std::mem::take(&mut viewport.pending_clicks) {
                outcomes.push(self.selection.click(
                    nearest,
                    &mut self.store,
                    &mut self.labels,
                ));
            }
        }
        for outcome in outcomes {
            if self.announce(outcome) {
                report.selection_changes += 1;
            }
        }

        self.wander.apply(&mut self.store);
        self.labels.refresh_all(&self.store);
        build_instances(
            self.store.iter(),
            self.picker.node_radius(),
            &self.options.colors,
            &mut self.instances,
        );

        for (index, viewport) in self.viewports.iter_mut().enumerate() {
            let _ = viewport.controller.update();
            if viewport.rect.is_empty() {
                continue;
            }
            let camera = &viewport.controller.camera;
            let labels = self.labels.placements(camera.eye);
            let frame = Frame {
                viewport: index,
                rect: viewport.rect,
                eye: camera.eye,
                view_proj: camera.build_matrix(),
                background: self.options.colors.background,
                nodes: &self.instances,
                labels: &labels,
            };
            viewport.backend.render(&frame);
            report.rendered += 1;
        }

        log::trace!(
            "tick {}: {report:?}, {:.1} fps",
            self.clock.ticks(),
            self.clock.fps()
        );
        report
    }

    /// Tell every backend about a label created or dropped by a click.
    fn announce(&mut self, outcome: ClickOutcome) -> bool {
        match outcome {
            ClickOutcome::Miss => false,
            ClickOutcome::Selected(id) => {
                if let Some(label) = self.labels.get(id) {
                    for viewport in &mut self.viewports {
                        viewport.backend.label_attached(label);
                    }
                }
                true
            }
            ClickOutcome::Deselected(id) => {
                for viewport in &mut self.viewports {
                    viewport.backend.label_detached(id);
                }
                true
            }
        }
    }
}
