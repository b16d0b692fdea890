use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Picking", inline)]
#[serde(default)]
/// Ray picking and click detection parameters.
pub struct PickingOptions {
    /// Bounding sphere radius of every node, in world units.
    #[schemars(title = "Node Radius", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub node_radius: f32,
    /// Pointer travel (pixels) while pressed after which a release is a
    /// drag rather than a click.
    #[schemars(title = "Drag Threshold", range(min = 0.0, max = 20.0), extend("step" = 1.0))]
    pub drag_threshold: f32,
}

impl Default for PickingOptions {
    fn default() -> Self {
        Self {
            node_radius: 0.1,
            drag_threshold: 3.0,
        }
    }
}
