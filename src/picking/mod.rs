//! CPU ray picking against node bounding spheres.
//!
//! A pointer position is normalized against the viewport it lies in, turned
//! into a world-space ray by that viewport's camera, and tested against
//! every candidate entity. Picking is a pure function of camera, pointer
//! and entity positions.

mod ray;
mod rect;

use glam::Vec2;
pub use ray::Ray;
pub use rect::ViewportRect;

use crate::camera::Camera;
use crate::scene::{Entity, EntityId};

/// One entity hit by a picking ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    /// The entity that was hit.
    pub entity: EntityId,
    /// Distance from the ray origin to the hit point.
    pub distance: f32,
}

/// Ray-versus-sphere picking with a uniform node radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Picker {
    node_radius: f32,
}

impl Picker {
    /// Picker treating every node as a sphere of `node_radius`.
    #[must_use]
    pub fn new(node_radius: f32) -> Self {
        Self { node_radius }
    }

    /// Bounding radius used for every node.
    #[must_use]
    pub fn node_radius(&self) -> f32 {
        self.node_radius
    }

    /// All entities hit by `ray`, nearest first.
    ///
    /// The sort is stable, so equidistant hits keep candidate order.
    #[must_use]
    pub fn cast<'a>(
        &self,
        ray: &Ray,
        candidates: impl IntoIterator<Item = &'a Entity>,
    ) -> Vec<PickHit> {
        let mut hits: Vec<PickHit> = candidates
            .into_iter()
            .filter_map(|entity| {
                ray.intersect_sphere(entity.position, self.node_radius)
                    .map(|distance| PickHit {
                        entity: entity.id(),
                        distance,
                    })
            })
            .collect();
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }

    /// All entities under the pointer at `ndc` for `camera`, nearest
    /// first. Empty if nothing is hit.
    #[must_use]
    pub fn pick<'a>(
        &self,
        ndc: Vec2,
        camera: &Camera,
        candidates: impl IntoIterator<Item = &'a Entity>,
    ) -> Vec<PickHit> {
        self.cast(&camera.pointer_ray(ndc), candidates)
    }

    /// The nearest entity under the pointer, if any.
    #[must_use]
    pub fn nearest<'a>(
        &self,
        ndc: Vec2,
        camera: &Camera,
        candidates: impl IntoIterator<Item = &'a Entity>,
    ) -> Option<EntityId> {
        self.pick(ndc, camera, candidates)
            .first()
            .map(|hit| hit.entity)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::scene::NodeStore;
    use crate::source::PositionedNode;

    fn camera() -> Camera {
        Camera {
            eye: Vec3::new(0.0, 0.0, 10.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy: 75.0,
            znear: 0.1,
            zfar: 1000.0,
        }
    }

    fn store(positions: &[(&str, Vec3)]) -> NodeStore {
        NodeStore::from_nodes(
            positions
                .iter()
                .map(|(id, position)| PositionedNode {
                    node_id: (*id).to_owned(),
                    timestamp: 0.0,
                    position: *position,
                })
                .collect(),
        )
    }

    #[test]
    fn hits_are_sorted_nearest_first() {
        let nodes = store(&[
            ("far", Vec3::new(0.0, 0.0, -3.0)),
            ("near", Vec3::new(0.0, 0.0, 4.0)),
            ("mid", Vec3::ZERO),
            ("aside", Vec3::new(3.0, 0.0, 0.0)),
        ]);
        let picker = Picker::new(0.1);
        let hits = picker.pick(Vec2::ZERO, &camera(), nodes.iter());

        let order: Vec<&str> = hits
            .iter()
            .map(|h| nodes.get(h.entity).unwrap().node_id())
            .collect();
        assert_eq!(order, vec!["near", "mid", "far"]);
        assert!((hits[0].distance - 5.9).abs() < 1e-4);
        assert!(hits.windows(2).all(|w| w[0].distance <= w[1].distance));
    }

    #[test]
    fn empty_when_nothing_under_pointer() {
        let nodes = store(&[("a", Vec3::ZERO)]);
        let picker = Picker::new(0.1);
        assert!(picker.pick(Vec2::new(0.9, 0.9), &camera(), nodes.iter()).is_empty());
        assert!(picker.nearest(Vec2::new(0.9, 0.9), &camera(), nodes.iter()).is_none());
        assert!(picker.pick(Vec2::ZERO, &camera(), NodeStore::new().iter()).is_empty());
    }

    #[test]
    fn pointer_off_center_picks_projected_node() {
        let cam = camera();
        let nodes = store(&[("a", Vec3::ZERO), ("b", Vec3::new(2.0, 1.0, 0.0))]);
        let ndc = cam.project(Vec3::new(2.0, 1.0, 0.0)).unwrap();
        let picker = Picker::new(0.1);
        assert_eq!(picker.nearest(ndc, &cam, nodes.iter()), nodes.find("b"));
    }

    #[test]
    fn coincident_nodes_keep_candidate_order() {
        let nodes = store(&[("first", Vec3::ZERO), ("second", Vec3::ZERO)]);
        let picker = Picker::new(0.1);
        let hits = picker.pick(Vec2::ZERO, &camera(), nodes.iter());
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].entity, nodes.find("first").unwrap());
    }
}
