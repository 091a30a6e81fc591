//! Floor-plan document model for Maquette.
//!
//! A museum floor plan is a set of levels, the rooms on each level, and the
//! vertical links (stairs, elevators, ramps) connecting two levels. The model
//! is flat: entities live in plain lists on [`FloorPlan`] and refer to each
//! other by id.

pub mod coords;
mod ids;
mod level;
mod link;
mod plan;
mod room;

pub use coords::{ScreenPoint, WorldDelta, WorldPoint, WorldSize};
pub use ids::{LevelId, LinkId, RoomId};
pub use level::Level;
pub use link::{LinkKind, VerticalLink};
pub use plan::FloorPlan;
pub use room::Room;
