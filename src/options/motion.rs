use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Motion", inline)]
#[serde(default)]
/// Per-tick wander applied to every node.
pub struct MotionOptions {
    /// Whether nodes wander at all.
    #[schemars(title = "Wander")]
    pub enabled: bool,
    /// Maximum per-axis displacement per tick.
    #[schemars(title = "Amplitude", range(min = 0.0, max = 0.1), extend("step" = 0.001))]
    pub amplitude: f32,
}

impl Default for MotionOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            amplitude: 0.01,
        }
    }
}
