use crate::options::ColorOptions;
use crate::scene::Entity;

/// Per-node instance data handed to backends every frame.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct NodeInstance {
    /// xyz = position, w = radius
    pub center: [f32; 4],
    /// xyz = RGB color for the current visual state, w = unused
    pub color: [f32; 4],
    /// x = entity index, y = visual state code, zw = unused
    pub ids: [u32; 4],
}

impl NodeInstance {
    /// Instance for `entity` drawn as a sphere of `radius`.
    #[must_use]
    pub fn from_entity(
        entity: &Entity,
        radius: f32,
        colors: &ColorOptions,
    ) -> Self {
        let p = entity.position;
        let [r, g, b] = colors.for_state(entity.visual_state());
        Self {
            center: [p.x, p.y, p.z, radius],
            color: [r, g, b, 1.0],
            ids: [entity.id().index() as u32, entity.visual_state().code(), 0, 0],
        }
    }

    /// World-space position.
    #[must_use]
    pub fn position(&self) -> glam::Vec3 {
        glam::Vec3::new(self.center[0], self.center[1], self.center[2])
    }
}

/// Build instances for a whole store, in load order.
pub fn build_instances<'a>(
    entities: impl IntoIterator<Item = &'a Entity>,
    radius: f32,
    colors: &ColorOptions,
    out: &mut Vec<NodeInstance>,
) {
    out.clear();
    out.extend(
        entities
            .into_iter()
            .map(|entity| NodeInstance::from_entity(entity, radius, colors)),
    );
}

#[cfg(test)]
mod tests {
    use bytemuck::Zeroable;
    use glam::Vec3;

    use super::*;
    use crate::scene::NodeStore;
    use crate::source::PositionedNode;

    #[test]
    fn instance_is_gpu_sized() {
        assert_eq!(size_of::<NodeInstance>(), 48);
        let zero = NodeInstance::zeroed();
        let bytes: &[u8] = bytemuck::bytes_of(&zero);
        assert_eq!(bytes.len(), 48);
    }

    #[test]
    fn instances_follow_entities() {
        let store = NodeStore::from_nodes(vec![PositionedNode {
            node_id: "a".to_owned(),
            timestamp: 0.0,
            position: Vec3::new(1.0, 2.0, 3.0),
        }]);
        let mut out = vec![NodeInstance::zeroed(); 4];
        build_instances(store.iter(), 0.1, &ColorOptions::default(), &mut out);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].center, [1.0, 2.0, 3.0, 0.1]);
        assert_eq!(out[0].position(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(out[0].ids[1], 0);
    }
}
