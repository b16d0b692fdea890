use glam::Vec3;

// ---------------------------------------------------------------------------
// EntityId
// ---------------------------------------------------------------------------

/// Dense handle of an entity inside one [`NodeStore`](super::NodeStore)
/// generation.
///
/// Handles are assigned in load order and stay valid until the store is
/// replaced by the next batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(u32);

impl EntityId {
    /// Handle for the entity at `index` in load order.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    /// Position of the entity in load order.
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// VisualState
// ---------------------------------------------------------------------------

/// How an entity should be drawn. Derived from selection membership and the
/// hover slots; never set independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisualState {
    /// Neither selected nor hovered.
    #[default]
    Default,
    /// Under the pointer, not selected.
    Hovered,
    /// Selected, not under the pointer.
    Selected,
    /// Selected and under the pointer.
    HoveredSelected,
}

impl VisualState {
    /// The state implied by selection membership and hover.
    #[must_use]
    pub fn derive(selected: bool, hovered: bool) -> Self {
        match (selected, hovered) {
            (true, true) => Self::HoveredSelected,
            (true, false) => Self::Selected,
            (false, true) => Self::Hovered,
            (false, false) => Self::Default,
        }
    }

    /// Whether this state implies selection membership.
    #[must_use]
    pub fn is_selected(self) -> bool {
        matches!(self, Self::Selected | Self::HoveredSelected)
    }

    /// Whether this state implies the entity is under a pointer.
    #[must_use]
    pub fn is_hovered(self) -> bool {
        matches!(self, Self::Hovered | Self::HoveredSelected)
    }

    /// Compact code for GPU instance data.
    #[must_use]
    pub fn code(self) -> u32 {
        match self {
            Self::Default => 0,
            Self::Hovered => 1,
            Self::Selected => 2,
            Self::HoveredSelected => 3,
        }
    }
}

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A pickable, positioned node.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    id: EntityId,
    node_id: String,
    timestamp: f64,
    /// Current world-space position. Drifts every tick.
    pub position: Vec3,
    visual_state: VisualState,
}

impl Entity {
    pub(crate) fn new(
        id: EntityId,
        node_id: String,
        timestamp: f64,
        position: Vec3,
    ) -> Self {
        Self {
            id,
            node_id,
            timestamp,
            position,
            visual_state: VisualState::Default,
        }
    }

    /// Store handle.
    #[must_use]
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Identifier of the node this entity was created from.
    #[must_use]
    pub fn node_id(&self) -> &str {
        &self.node_id
    }

    /// Timestamp of the source record.
    #[must_use]
    pub fn timestamp(&self) -> f64 {
        self.timestamp
    }

    /// Current visual state.
    #[must_use]
    pub fn visual_state(&self) -> VisualState {
        self.visual_state
    }

    pub(crate) fn set_visual_state(&mut self, state: VisualState) {
        self.visual_state = state;
    }
}
