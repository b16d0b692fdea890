use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Labels", inline)]
#[serde(default)]
/// Floating label text and placement.
pub struct LabelOptions {
    /// Text placed before the node id.
    #[schemars(skip)]
    pub text_prefix: String,
    /// Height of the label above its node.
    #[schemars(title = "Offset", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub vertical_offset: f32,
    /// World-space width and height of the label quad.
    #[schemars(skip)]
    pub scale: [f32; 2],
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self {
            text_prefix: "node_id ".to_owned(),
            vertical_offset: 0.2,
            scale: [1.0, 0.5],
        }
    }
}

impl LabelOptions {
    /// Label text for a node id.
    #[must_use]
    pub fn text_for(&self, node_id: &str) -> String {
        format!("{}{node_id}", self.text_prefix)
    }
}
