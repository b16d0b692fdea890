use serde::{Deserialize, Serialize};

use crate::scene::VisualState;

/// Convert a packed `0xRRGGBB` color into linear-ish RGB floats.
#[must_use]
pub fn hex_rgb(hex: u32) -> [f32; 3] {
    let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
    [channel(16), channel(8), channel(0)]
}

/// Color palette for nodes and the viewport background.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorOptions {
    /// Viewport clear color.
    pub background: [f32; 3],
    /// Node color when neither hovered nor selected.
    pub default: [f32; 3],
    /// Node color while under the pointer.
    pub hovered: [f32; 3],
    /// Node color while selected.
    pub selected: [f32; 3],
    /// Node color while selected and under the pointer.
    pub hovered_selected: [f32; 3],
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            background: hex_rgb(0x28_28_28),
            default: hex_rgb(0x80_80_80),
            hovered: hex_rgb(0x00_ff_00),
            selected: hex_rgb(0xff_00_00),
            hovered_selected: hex_rgb(0xff_ff_00),
        }
    }
}

impl ColorOptions {
    /// Material color for a node in the given visual state.
    #[must_use]
    pub fn for_state(&self, state: VisualState) -> [f32; 3] {
        match state {
            VisualState::Default => self.default,
            VisualState::Hovered => self.hovered,
            VisualState::Selected => self.selected,
            VisualState::HoveredSelected => self.hovered_selected,
        }
    }
}
