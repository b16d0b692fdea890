//! Derivation of missing coordinates for a full batch of records.

use glam::Vec3;

use super::NodeRecord;

/// A record with its final world-space position.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedNode {
    /// Identifier carried over from the record.
    pub node_id: String,
    /// Timestamp carried over from the record.
    pub timestamp: f64,
    /// Explicit or derived position.
    pub position: Vec3,
}

/// Smallest and largest finite timestamp in the batch.
fn timestamp_span(records: &[NodeRecord]) -> Option<(f64, f64)> {
    records
        .iter()
        .map(|r| r.timestamp)
        .filter(|t| t.is_finite())
        .fold(None, |span, t| match span {
            None => Some((t, t)),
            Some((lo, hi)) => Some((lo.min(t), hi.max(t))),
        })
}

/// Map `timestamp` linearly from `span` onto `range`.
///
/// A zero-width span or a non-finite timestamp maps to the midpoint of
/// `range`.
fn derive_x(timestamp: f64, span: Option<(f64, f64)>, range: [f64; 2]) -> f64 {
    let [lo, hi] = range;
    match span {
        Some((min, max)) if timestamp.is_finite() && max > min => {
            (timestamp - min) / (max - min) * (hi - lo) + lo
        }
        _ => (lo + hi) / 2.0,
    }
}

/// Resolve positions for a whole batch.
///
/// Missing `x` comes from the timestamp, normalized against the batch's own
/// min/max; missing `y` and `z` default to 0. The span depends on every
/// record, so this always runs over the full batch.
#[must_use]
pub fn normalize_batch(
    records: &[NodeRecord],
    x_range: [f64; 2],
) -> Vec<PositionedNode> {
    let span = timestamp_span(records);
    if span.is_some_and(|(min, max)| min == max) && records.len() > 1 {
        log::debug!(
            "all {} timestamps equal, collapsing x to range midpoint",
            records.len()
        );
    }

    records
        .iter()
        .map(|record| {
            let x = record
                .x
                .unwrap_or_else(|| derive_x(record.timestamp, span, x_range));
            let y = record.y.unwrap_or(0.0);
            let z = record.z.unwrap_or(0.0);
            PositionedNode {
                node_id: record.node_id.clone(),
                timestamp: record.timestamp,
                position: Vec3::new(x as f32, y as f32, z as f32),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xs(nodes: &[PositionedNode]) -> Vec<f32> {
        nodes.iter().map(|n| n.position.x).collect()
    }

    #[test]
    fn timestamps_spread_over_range() {
        let records = vec![
            NodeRecord::new("a", 100.0),
            NodeRecord::new("b", 200.0),
            NodeRecord::new("c", 300.0),
        ];
        let nodes = normalize_batch(&records, [-5.0, 5.0]);
        assert_eq!(xs(&nodes), vec![-5.0, 0.0, 5.0]);
        assert!(nodes.iter().all(|n| n.position.y == 0.0));
        assert!(nodes.iter().all(|n| n.position.z == 0.0));
    }

    #[test]
    fn equal_timestamps_collapse_to_midpoint() {
        let records = vec![
            NodeRecord::new("a", 50.0),
            NodeRecord::new("b", 50.0),
            NodeRecord::new("c", 50.0),
        ];
        let nodes = normalize_batch(&records, [-5.0, 5.0]);
        assert_eq!(xs(&nodes), vec![0.0, 0.0, 0.0]);

        let shifted = normalize_batch(&records, [2.0, 4.0]);
        assert_eq!(xs(&shifted), vec![3.0, 3.0, 3.0]);
    }

    #[test]
    fn single_node_sits_at_midpoint() {
        let nodes = normalize_batch(&[NodeRecord::new("a", 10.0)], [-5.0, 5.0]);
        assert_eq!(nodes[0].position, Vec3::ZERO);
    }

    #[test]
    fn explicit_coordinates_win_but_still_shape_the_span() {
        let records = vec![
            NodeRecord::new("a", 0.0).at(9.0, 1.0, 2.0),
            NodeRecord::new("b", 5.0),
            NodeRecord::new("c", 10.0),
        ];
        let nodes = normalize_batch(&records, [-5.0, 5.0]);
        assert_eq!(nodes[0].position, Vec3::new(9.0, 1.0, 2.0));
        assert_eq!(nodes[1].position.x, 0.0);
        assert_eq!(nodes[2].position.x, 5.0);
    }

    #[test]
    fn non_finite_timestamps_do_not_poison_positions() {
        let records = vec![
            NodeRecord::new("a", f64::NAN),
            NodeRecord::new("b", 0.0),
            NodeRecord::new("c", 10.0),
        ];
        let nodes = normalize_batch(&records, [-5.0, 5.0]);
        assert_eq!(xs(&nodes), vec![0.0, -5.0, 5.0]);
        assert!(nodes.iter().all(|n| n.position.is_finite()));
    }

    #[test]
    fn empty_batch_is_empty() {
        assert!(normalize_batch(&[], [-5.0, 5.0]).is_empty());
    }
}
