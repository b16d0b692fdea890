//! Authoritative node set: entity storage, per-tick wander and the static
//! scaffolding every viewport draws.

mod entity;
mod motion;
mod scaffold;
mod store;

pub use entity::{Entity, EntityId, VisualState};
pub use motion::Wander;
pub use scaffold::{AxisArrow, GridPlane, Scaffold};
pub use store::NodeStore;
