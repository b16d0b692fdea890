//! Per-viewport state and window layout for Session.

use glam::Vec2;

use crate::backend::ViewportBackend;
use crate::camera::OrbitController;
use crate::options::{NodeStyle, ViewportLayout};
use crate::picking::ViewportRect;

/// One view onto the shared node set: its own window region, camera,
/// latched pointer and backend.
pub(crate) struct Viewport {
    pub(super) rect: ViewportRect,
    pub(super) controller: OrbitController,
    /// Pointer position in this viewport's NDC, if the pointer is over it.
    pub(super) pointer_ndc: Option<Vec2>,
    /// Clicks received since the last tick.
    pub(super) pending_clicks: u32,
    pub(super) style: NodeStyle,
    pub(super) backend: Box<dyn ViewportBackend>,
}

impl Viewport {
    pub(super) fn set_rect(&mut self, rect: ViewportRect) {
        self.rect = rect;
        self.controller.resize(rect.width as u32, rect.height as u32);
        self.backend.resize(rect);
    }
}

/// Window regions for `count` viewports.
///
/// `Single` gives the whole window to the first viewport and an empty
/// rectangle to the rest; `SideBySide` splits the width into equal
/// columns.
#[must_use]
pub fn layout_rects(
    layout: ViewportLayout,
    count: usize,
    width: u32,
    height: u32,
) -> Vec<ViewportRect> {
    let (w, h) = (width as f32, height as f32);
    match layout {
        ViewportLayout::Single => (0..count)
            .map(|i| {
                if i == 0 {
                    ViewportRect::new(0.0, 0.0, w, h)
                } else {
                    ViewportRect::default()
                }
            })
            .collect(),
        ViewportLayout::SideBySide => {
            let column = if count == 0 { w } else { w / count as f32 };
            (0..count)
                .map(|i| ViewportRect::new(column * i as f32, 0.0, column, h))
                .collect()
        }
    }
}
