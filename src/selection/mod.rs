//! Hover and multi-selection state machine.
//!
//! One selection set is shared by every viewport; each viewport owns a
//! single hover slot. An entity's [`VisualState`] is always derived from
//! those two facts and is only written here:
//!
//! | selected | hovered | state             |
//! |----------|---------|-------------------|
//! | no       | no      | `Default`         |
//! | no       | yes     | `Hovered`         |
//! | yes      | no      | `Selected`        |
//! | yes      | yes     | `HoveredSelected` |
//!
//! Selected entities carry exactly one label; nothing else does.

use rustc_hash::FxHashSet;

use crate::labels::LabelManager;
use crate::scene::{EntityId, NodeStore, VisualState};

/// What a click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing was under the pointer; selection unchanged.
    Miss,
    /// The entity was added to the selection and labelled.
    Selected(EntityId),
    /// The entity was removed from the selection and its label dropped.
    Deselected(EntityId),
}

/// Selection set plus one hover slot per viewport.
#[derive(Debug, Clone, Default)]
pub struct SelectionStateMachine {
    selected: FxHashSet<EntityId>,
    hover: Vec<Option<EntityId>>,
}

impl SelectionStateMachine {
    /// State machine with `viewports` empty hover slots.
    #[must_use]
    pub fn new(viewports: usize) -> Self {
        Self {
            selected: FxHashSet::default(),
            hover: vec![None; viewports],
        }
    }

    /// Add a hover slot for a new viewport and return its index.
    pub fn add_viewport(&mut self) -> usize {
        self.hover.push(None);
        self.hover.len() - 1
    }

    /// Number of hover slots.
    #[must_use]
    pub fn viewport_count(&self) -> usize {
        self.hover.len()
    }

    /// Entity hovered in `viewport`, if any.
    #[must_use]
    pub fn hovered(&self, viewport: usize) -> Option<EntityId> {
        self.hover.get(viewport).copied().flatten()
    }

    /// Whether any viewport hovers `id`.
    #[must_use]
    pub fn is_hovered(&self, id: EntityId) -> bool {
        self.hover.contains(&Some(id))
    }

    /// Whether `id` is selected.
    #[must_use]
    pub fn is_selected(&self, id: EntityId) -> bool {
        self.selected.contains(&id)
    }

    /// Number of selected entities.
    #[must_use]
    pub fn selection_len(&self) -> usize {
        self.selected.len()
    }

    /// Selected entities in handle order.
    #[must_use]
    pub fn selected(&self) -> Vec<EntityId> {
        let mut ids: Vec<EntityId> = self.selected.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// The state `id` should be in right now.
    #[must_use]
    pub fn state_of(&self, id: EntityId) -> VisualState {
        VisualState::derive(self.is_selected(id), self.is_hovered(id))
    }

    fn refresh(&self, id: EntityId, store: &mut NodeStore) {
        let applied = store.set_visual_state(id, self.state_of(id));
        debug_assert!(applied, "visual state update for unknown entity {id}");
    }

    /// Point `viewport`'s hover slot at `nearest` (the closest entity under
    /// that viewport's pointer, or `None`).
    ///
    /// Returns `true` if the slot changed. The entity leaving the slot and
    /// the entity entering it get their states recomputed.
    pub fn update_hover(
        &mut self,
        viewport: usize,
        nearest: Option<EntityId>,
        store: &mut NodeStore,
    ) -> bool {
        debug_assert!(
            viewport < self.hover.len(),
            "hover update for unknown viewport {viewport}"
        );
        let nearest = nearest.filter(|id| {
            let known = store.contains(*id);
            debug_assert!(known, "hover target {id} not in store");
            known
        });
        let Some(slot) = self.hover.get_mut(viewport) else {
            return false;
        };
        if *slot == nearest {
            return false;
        }
        let previous = std::mem::replace(slot, nearest);
        if let Some(id) = previous {
            self.refresh(id, store);
        }
        if let Some(id) = nearest {
            self.refresh(id, store);
        }
        log::trace!("viewport {viewport} hover {previous:?} -> {nearest:?}");
        true
    }

    /// Toggle selection of `target` (the nearest entity under the pointer
    /// at click time).
    ///
    /// Selecting attaches a label; deselecting detaches it. The entity's
    /// state is recomputed either way, so a deselected entity that is still
    /// under a pointer goes back to `Hovered`.
    pub fn click(
        &mut self,
        target: Option<EntityId>,
        store: &mut NodeStore,
        labels: &mut LabelManager,
    ) -> ClickOutcome {
        let Some(id) = target else {
            return ClickOutcome::Miss;
        };
        let Some(entity) = store.get(id) else {
            debug_assert!(store.contains(id), "click target {id} not in store");
            return ClickOutcome::Miss;
        };

        let outcome = if self.selected.remove(&id) {
            let detached = labels.detach(id);
            debug_assert!(detached.is_some(), "selected {id} had no label");
            ClickOutcome::Deselected(id)
        } else {
            let attached = labels.attach_to(entity).is_some();
            debug_assert!(attached, "unselected {id} already had a label");
            let _ = self.selected.insert(id);
            ClickOutcome::Selected(id)
        };
        self.refresh(id, store);
        log::debug!("click on {id}: {outcome:?}");
        outcome
    }

    /// Deselect everything and empty every hover slot, restoring affected
    /// entities to `Default` and dropping their labels.
    pub fn clear(&mut self, store: &mut NodeStore, labels: &mut LabelManager) {
        let mut affected: Vec<EntityId> = self.selected.drain().collect();
        affected.extend(self.hover.iter_mut().filter_map(Option::take));
        for id in affected {
            let _ = labels.detach(id);
            if store.contains(id) {
                self.refresh(id, store);
            }
        }
    }

    /// Forget selection and hover without touching any store. Used after the
    /// store has been replaced and the old handles are meaningless.
    pub fn reset(&mut self) {
        self.selected.clear();
        self.hover.iter_mut().for_each(|slot| *slot = None);
    }
}
