use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How the window is split into viewports.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ViewportLayout {
    /// One viewport covering the whole window.
    #[default]
    Single,
    /// Two viewports, left and right halves, observing the same nodes.
    SideBySide,
}

/// How a viewport draws its nodes.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum NodeStyle {
    /// Flat-colored spheres tinted by visual state.
    #[default]
    Sphere,
    /// Spheres textured with their node id.
    Textured,
}

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[schemars(title = "Display", inline)]
#[serde(default)]
/// Viewport layout and per-viewport node style.
pub struct DisplayOptions {
    /// Window split.
    #[schemars(title = "Layout")]
    pub layout: ViewportLayout,
    /// Node style of the first viewport.
    #[schemars(title = "Primary Node Style")]
    pub primary_style: NodeStyle,
    /// Node style of the second viewport (side-by-side layout only).
    #[schemars(title = "Secondary Node Style")]
    pub secondary_style: NodeStyle,
}

impl DisplayOptions {
    /// Node style for the viewport at `index` in layout order.
    #[must_use]
    pub fn style_for(&self, index: usize) -> NodeStyle {
        if index == 0 {
            self.primary_style
        } else {
            self.secondary_style
        }
    }
}
