//! Floating text labels for selected entities.
//!
//! The manager owns one [`Label`] per selected entity. Anchors follow the
//! owners once per tick through [`LabelManager::refresh_all`]; each
//! viewport then asks for [`LabelPlacement`]s facing its own camera, so the
//! same label can be drawn with a different orientation per viewport.

use std::collections::BTreeMap;

use glam::{Mat3, Quat, Vec2, Vec3};

use crate::options::LabelOptions;
use crate::scene::{Entity, EntityId, NodeStore};

/// A text label anchored above one entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    /// Entity the label belongs to.
    pub owner: EntityId,
    /// Displayed text.
    pub text: String,
    /// World-space anchor (owner position plus the vertical offset).
    pub position: Vec3,
}

/// A label oriented toward one camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelPlacement {
    /// Entity the label belongs to.
    pub owner: EntityId,
    /// World-space anchor.
    pub position: Vec3,
    /// Rotation taking the label's local +Z toward the camera, +Y kept up.
    pub rotation: Quat,
    /// World-space width and height of the label quad.
    pub scale: Vec2,
}

/// Rotation that turns a quad at `position` to face `eye` while keeping
/// world +Y as up where possible.
#[must_use]
pub fn billboard_rotation(position: Vec3, eye: Vec3) -> Quat {
    let forward = (eye - position).normalize_or_zero();
    if forward == Vec3::ZERO {
        return Quat::IDENTITY;
    }
    let right = Vec3::Y.cross(forward).normalize_or(Vec3::X);
    let up = forward.cross(right);
    Quat::from_mat3(&Mat3::from_cols(right, up, forward))
}

/// Owns every label and keeps them in step with their entities.
#[derive(Debug, Clone)]
pub struct LabelManager {
    labels: BTreeMap<EntityId, Label>,
    text: LabelOptions,
    vertical_offset: f32,
    scale: Vec2,
}

impl Default for LabelManager {
    fn default() -> Self {
        Self::new(&LabelOptions::default())
    }
}

impl LabelManager {
    /// Empty manager using the configured offset and scale.
    #[must_use]
    pub fn new(options: &LabelOptions) -> Self {
        Self {
            labels: BTreeMap::new(),
            text: options.clone(),
            vertical_offset: options.vertical_offset,
            scale: Vec2::from(options.scale),
        }
    }

    fn anchor(&self, position: Vec3) -> Vec3 {
        position + Vec3::Y * self.vertical_offset
    }

    /// Create the label for `owner`, anchored above `position`.
    ///
    /// Returns `None` if `owner` already has a label; that is a caller
    /// error and trips a debug assertion.
    pub fn attach(
        &mut self,
        owner: EntityId,
        text: String,
        position: Vec3,
    ) -> Option<&Label> {
        debug_assert!(
            !self.labels.contains_key(&owner),
            "label attached twice to {owner}"
        );
        if self.labels.contains_key(&owner) {
            return None;
        }
        let label = Label {
            owner,
            text,
            position: self.anchor(position),
        };
        log::debug!("label attached to {owner}: {:?}", label.text);
        Some(self.labels.entry(owner).or_insert(label))
    }

    /// Create the standard label for `entity`: prefixed node id, anchored
    /// above its current position.
    pub fn attach_to(&mut self, entity: &Entity) -> Option<&Label> {
        let text = self.text.text_for(entity.node_id());
        self.attach(entity.id(), text, entity.position)
    }

    /// Remove and return the label for `owner`. Idempotent.
    pub fn detach(&mut self, owner: EntityId) -> Option<Label> {
        let removed = self.labels.remove(&owner);
        if removed.is_some() {
            log::debug!("label detached from {owner}");
        }
        removed
    }

    /// Drop every label.
    pub fn clear(&mut self) {
        self.labels.clear();
    }

    /// Move every label above its owner's current position.
    pub fn refresh_all(&mut self, store: &NodeStore) {
        let offset = Vec3::Y * self.vertical_offset;
        for label in self.labels.values_mut() {
            let position = store.position(label.owner);
            debug_assert!(
                position.is_some(),
                "label owner {} not in store",
                label.owner
            );
            if let Some(position) = position {
                label.position = position + offset;
            }
        }
    }

    /// Every label oriented toward a camera at `eye`, ordered by owner.
    #[must_use]
    pub fn placements(&self, eye: Vec3) -> Vec<LabelPlacement> {
        self.labels
            .values()
            .map(|label| LabelPlacement {
                owner: label.owner,
                position: label.position,
                rotation: billboard_rotation(label.position, eye),
                scale: self.scale,
            })
            .collect()
    }

    /// Label for `owner`, if any.
    #[must_use]
    pub fn get(&self, owner: EntityId) -> Option<&Label> {
        self.labels.get(&owner)
    }

    /// Whether `owner` has a label.
    #[must_use]
    pub fn contains(&self, owner: EntityId) -> bool {
        self.labels.contains_key(&owner)
    }

    /// Number of labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether there are no labels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// All labels, ordered by owner.
    pub fn iter(&self) -> impl Iterator<Item = &Label> {
        self.labels.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::PositionedNode;

    fn store() -> NodeStore {
        NodeStore::from_nodes(vec![
            PositionedNode {
                node_id: "a".to_owned(),
                timestamp: 0.0,
                position: Vec3::new(1.0, 2.0, 3.0),
            },
            PositionedNode {
                node_id: "b".to_owned(),
                timestamp: 1.0,
                position: Vec3::ZERO,
            },
        ])
    }

    #[test]
    fn attach_places_label_above_owner() {
        let mut labels = LabelManager::default();
        let owner = EntityId::from_index(0);
        let label = labels
            .attach(owner, "node_id a".to_owned(), Vec3::new(1.0, 2.0, 3.0))
            .unwrap();
        assert_eq!(label.text, "node_id a");
        assert!((label.position - Vec3::new(1.0, 2.2, 3.0)).length() < 1e-6);
        assert_eq!(labels.len(), 1);
    }

    #[test]
    fn attach_to_uses_prefixed_node_id() {
        let nodes = store();
        let mut labels = LabelManager::default();
        let entity = nodes.get(nodes.find("b").unwrap()).unwrap();
        let label = labels.attach_to(entity).unwrap();
        assert_eq!(label.text, "node_id b");
        assert_eq!(label.owner, entity.id());
    }

    #[test]
    fn attach_to_follows_configured_prefix() {
        let nodes = store();
        let options = LabelOptions {
            text_prefix: "#".to_owned(),
            ..LabelOptions::default()
        };
        let mut labels = LabelManager::new(&options);
        let entity = nodes.get(nodes.find("a").unwrap()).unwrap();
        assert_eq!(labels.attach_to(entity).unwrap().text, "#a");
    }

    #[test]
    fn detach_is_idempotent() {
        let mut labels = LabelManager::default();
        let owner = EntityId::from_index(1);
        let _ = labels.attach(owner, "node_id b".to_owned(), Vec3::ZERO);

        let first = labels.detach(owner);
        assert_eq!(first.map(|l| l.owner), Some(owner));
        assert!(labels.detach(owner).is_none());
        assert!(labels.is_empty());
    }

    #[test]
    fn refresh_follows_moved_owner() {
        let mut nodes = store();
        let mut labels = LabelManager::default();
        let owner = nodes.find("a").unwrap();
        let _ = labels.attach(owner, "node_id a".to_owned(), Vec3::ZERO);

        assert!(nodes.set_position(owner, Vec3::new(-1.0, 0.0, 4.0)));
        labels.refresh_all(&nodes);
        let position = labels.get(owner).unwrap().position;
        assert!((position - Vec3::new(-1.0, 0.2, 4.0)).length() < 1e-6);
    }

    #[test]
    fn placements_face_each_camera() {
        let mut labels = LabelManager::default();
        let owner = EntityId::from_index(1);
        let _ = labels.attach(owner, "node_id b".to_owned(), Vec3::ZERO);

        for eye in [Vec3::new(0.0, 0.2, 10.0), Vec3::new(10.0, 0.2, 0.0)] {
            let placements = labels.placements(eye);
            assert_eq!(placements.len(), 1);
            let placement = placements[0];
            let facing = placement.rotation * Vec3::Z;
            let expected = (eye - placement.position).normalize();
            assert!((facing - expected).length() < 1e-5);
            assert_eq!(placement.scale, Vec2::new(1.0, 0.5));
        }
    }

    #[test]
    fn billboard_degenerate_cases() {
        assert_eq!(billboard_rotation(Vec3::ONE, Vec3::ONE), Quat::IDENTITY);
        let straight_down = billboard_rotation(Vec3::ZERO, Vec3::Y * 5.0);
        assert!((straight_down * Vec3::Z - Vec3::Y).length() < 1e-5);
    }
}
