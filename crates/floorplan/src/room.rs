use crate::coords::{WorldDelta, WorldPoint, WorldSize};
use crate::{LevelId, RoomId};
use maquette_core::Bounds;
use serde::{Deserialize, Serialize};

/// A room on a single floor level, as a rectangular region in world
/// coordinates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub level: LevelId,
    pub name: String,
    pub position: WorldPoint,
    pub size: WorldSize,
}

impl Room {
    pub fn new(
        level: LevelId,
        name: impl Into<String>,
        position: WorldPoint,
        size: WorldSize,
    ) -> Self {
        Self {
            id: RoomId::new(),
            level,
            name: name.into(),
            position,
            size,
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::from_origin_size(self.position.0, self.size.0)
    }

    pub fn contains_point(&self, point: WorldPoint) -> bool {
        self.bounds().contains_point(point.0)
    }

    pub fn translate(&mut self, delta: WorldDelta) {
        self.position = self.position + delta;
    }
}
