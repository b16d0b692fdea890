use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Where nodes come from and how missing coordinates are derived.
pub struct SourceOptions {
    /// Endpoint answering `{"nodes": [...]}`.
    pub url: String,
    /// Inclusive `[min, max]` range that timestamps are mapped onto when a
    /// node has no explicit `x`.
    pub x_range: [f64; 2],
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            url: "http://localhost:5000/notes".to_owned(),
            x_range: [-5.0, 5.0],
        }
    }
}
