use glam::Vec3;
use rustc_hash::FxHashMap;

use super::{Entity, EntityId, VisualState};
use crate::source::PositionedNode;

/// The canonical set of pickable entities for one loaded batch.
///
/// Entities are created in bulk and never individually removed; loading a
/// new batch replaces the whole store (and bumps [`generation`]).
///
/// [`generation`]: NodeStore::generation
#[derive(Debug, Clone, Default)]
pub struct NodeStore {
    /// Entities in load order; `EntityId` is the index.
    entities: Vec<Entity>,
    by_node_id: FxHashMap<String, EntityId>,
    generation: u64,
}

impl NodeStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from positioned nodes. Later duplicates of a node id
    /// are dropped.
    #[must_use]
    pub fn from_nodes(nodes: Vec<PositionedNode>) -> Self {
        let mut store = Self::new();
        store.replace(nodes);
        store
    }

    /// Replace every entity with a fresh batch. Existing handles become
    /// invalid.
    pub fn replace(&mut self, nodes: Vec<PositionedNode>) {
        self.entities.clear();
        self.by_node_id.clear();
        self.generation += 1;

        for node in nodes {
            if self.by_node_id.contains_key(&node.node_id) {
                log::warn!("duplicate node id {:?} dropped", node.node_id);
                continue;
            }
            let id = EntityId::from_index(self.entities.len());
            let _ = self.by_node_id.insert(node.node_id.clone(), id);
            self.entities.push(Entity::new(
                id,
                node.node_id,
                node.timestamp,
                node.position,
            ));
        }
        log::debug!(
            "node store generation {}: {} entities",
            self.generation,
            self.entities.len()
        );
    }

    /// Number of entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the store holds no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Load counter; bumped by every [`replace`](Self::replace).
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether `id` refers to an entity of the current batch.
    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        id.index() < self.entities.len()
    }

    /// Look up an entity by handle.
    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.index())
    }

    /// Look up a handle by node id.
    #[must_use]
    pub fn find(&self, node_id: &str) -> Option<EntityId> {
        self.by_node_id.get(node_id).copied()
    }

    /// Current position of an entity.
    #[must_use]
    pub fn position(&self, id: EntityId) -> Option<Vec3> {
        self.get(id).map(|e| e.position)
    }

    /// All entities in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Entities as a slice, in load order.
    #[must_use]
    pub fn as_slice(&self) -> &[Entity] {
        &self.entities
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    /// Move an entity. Returns `false` if the handle is unknown.
    pub fn set_position(&mut self, id: EntityId, position: Vec3) -> bool {
        match self.entities.get_mut(id.index()) {
            Some(entity) => {
                entity.position = position;
                true
            }
            None => false,
        }
    }

    pub(crate) fn set_visual_state(
        &mut self,
        id: EntityId,
        state: VisualState,
    ) -> bool {
        match self.entities.get_mut(id.index()) {
            Some(entity) => {
                entity.set_visual_state(state);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, x: f32) -> PositionedNode {
        PositionedNode {
            node_id: id.to_owned(),
            timestamp: 0.0,
            position: Vec3::new(x, 0.0, 0.0),
        }
    }

    #[test]
    fn handles_follow_load_order() {
        let store = NodeStore::from_nodes(vec![node("a", 1.0), node("b", 2.0)]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.find("b"), Some(EntityId::from_index(1)));
        assert_eq!(store.get(EntityId::from_index(0)).unwrap().node_id(), "a");
        assert!(!store.contains(EntityId::from_index(2)));
        assert!(store.iter().all(|e| e.visual_state() == VisualState::Default));
    }

    #[test]
    fn duplicate_ids_keep_first() {
        let store = NodeStore::from_nodes(vec![
            node("a", 1.0),
            node("a", 7.0),
            node("b", 2.0),
        ]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.position(store.find("a").unwrap()).unwrap().x, 1.0);
        assert_eq!(store.find("b"), Some(EntityId::from_index(1)));
    }

    #[test]
    fn replace_bumps_generation_and_drops_old_entities() {
        let mut store = NodeStore::from_nodes(vec![node("a", 1.0)]);
        let first = store.generation();
        store.replace(vec![node("x", 0.0), node("y", 0.0)]);
        assert_eq!(store.generation(), first + 1);
        assert!(store.find("a").is_none());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn unknown_handles_are_rejected() {
        let mut store = NodeStore::new();
        assert!(store.is_empty());
        assert!(!store.set_position(EntityId::from_index(0), Vec3::ONE));
        assert!(!store.set_visual_state(
            EntityId::from_index(0),
            VisualState::Hovered
        ));
    }
}
