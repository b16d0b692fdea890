use serde::{Deserialize, Deserializer};

use crate::error::CloudError;

/// One raw node as delivered by the feed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NodeRecord {
    /// Stable node identifier. Numeric ids are accepted and kept as text.
    #[serde(deserialize_with = "node_id_text")]
    pub node_id: String,
    /// Creation time; drives the derived `x` coordinate.
    #[serde(default = "missing_timestamp")]
    pub timestamp: f64,
    /// Explicit x coordinate.
    #[serde(default)]
    pub x: Option<f64>,
    /// Explicit y coordinate.
    #[serde(default)]
    pub y: Option<f64>,
    /// Explicit z coordinate.
    #[serde(default)]
    pub z: Option<f64>,
}

impl NodeRecord {
    /// A record with only an id and a timestamp.
    #[must_use]
    pub fn new(node_id: impl Into<String>, timestamp: f64) -> Self {
        Self {
            node_id: node_id.into(),
            timestamp,
            x: None,
            y: None,
            z: None,
        }
    }

    /// Same record with explicit coordinates.
    #[must_use]
    pub fn at(mut self, x: f64, y: f64, z: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self.z = Some(z);
        self
    }
}

fn missing_timestamp() -> f64 {
    f64::NAN
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNodeId {
    Text(String),
    Number(serde_json::Number),
}

fn node_id_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawNodeId::deserialize(deserializer)? {
        RawNodeId::Text(text) => text,
        RawNodeId::Number(number) => number.to_string(),
    })
}

#[derive(Deserialize)]
struct NodeBatch {
    nodes: Vec<NodeRecord>,
}

/// Decode a feed response body of the form `{"nodes": [...]}`.
///
/// # Errors
///
/// Returns [`CloudError::Decode`] if the body is not a node batch.
pub fn parse_batch(body: &str) -> Result<Vec<NodeRecord>, CloudError> {
    let batch: NodeBatch = serde_json::from_str(body)?;
    Ok(batch.nodes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_optional_coordinates() {
        let body = r#"{"nodes": [
            {"node_id": "a", "timestamp": 10},
            {"node_id": "b", "timestamp": 20.5, "x": 1.0, "z": -2}
        ]}"#;
        let nodes = parse_batch(body).unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0], NodeRecord::new("a", 10.0));
        assert_eq!(nodes[1].x, Some(1.0));
        assert_eq!(nodes[1].y, None);
        assert_eq!(nodes[1].z, Some(-2.0));
    }

    #[test]
    fn numeric_ids_become_text() {
        let body = r#"{"nodes": [{"node_id": 42, "timestamp": 1}]}"#;
        let nodes = parse_batch(body).unwrap();
        assert_eq!(nodes[0].node_id, "42");
    }

    #[test]
    fn missing_timestamp_is_not_finite() {
        let body = r#"{"nodes": [{"node_id": "a"}]}"#;
        let nodes = parse_batch(body).unwrap();
        assert!(!nodes[0].timestamp.is_finite());
    }

    #[test]
    fn rejects_bodies_without_nodes() {
        assert!(matches!(
            parse_batch(r#"{"items": []}"#),
            Err(CloudError::Decode(_))
        ));
        assert!(parse_batch("not json").is_err());
    }
}
