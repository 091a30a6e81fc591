use crate::coords::{WorldDelta, WorldPoint, WorldSize};
use crate::{LevelId, LinkId};
use maquette_core::Bounds;
use serde::{Deserialize, Serialize};

/// What kind of connection a vertical link is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkKind {
    Stairs,
    Elevator,
    Ramp,
}

impl Default for LinkKind {
    fn default() -> Self {
        Self::Stairs
    }
}

/// A connector between two floor levels, drawn as a rectangle on both.
///
/// The rectangle lives in world coordinates shared by all levels; the link
/// occupies the same footprint on its lower and upper level. Its four
/// corners are the individually hoverable/selectable vertices of the
/// editor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VerticalLink {
    pub id: LinkId,
    pub kind: LinkKind,
    /// The level this link starts on.
    pub lower: LevelId,
    /// The level this link leads to.
    pub upper: LevelId,
    pub position: WorldPoint,
    pub size: WorldSize,
    /// Display label, e.g. "Escalier B".
    pub label: Option<String>,
}

impl VerticalLink {
    pub fn new(
        kind: LinkKind,
        lower: LevelId,
        upper: LevelId,
        position: WorldPoint,
        size: WorldSize,
    ) -> Self {
        Self {
            id: LinkId::new(),
            kind,
            lower,
            upper,
            position,
            size,
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::from_origin_size(self.position.0, self.size.0)
    }

    /// The four corner vertices in fixed order: top-left, top-right,
    /// bottom-right, bottom-left.
    ///
    /// Vertex indices 0..4 used by hover and selection state refer to this
    /// order, which depends only on the rectangle, never on the viewport.
    pub fn corners(&self) -> [WorldPoint; 4] {
        self.bounds().corners().map(WorldPoint)
    }

    /// Whether this link touches the given level.
    pub fn connects(&self, level: LevelId) -> bool {
        self.lower == level || self.upper == level
    }

    /// The level on the other end, if `level` is one of the two ends.
    pub fn opposite(&self, level: LevelId) -> Option<LevelId> {
        if level == self.lower {
            Some(self.upper)
        } else if level == self.upper {
            Some(self.lower)
        } else {
            None
        }
    }

    pub fn contains_point(&self, point: WorldPoint) -> bool {
        self.bounds().contains_point(point.0)
    }

    pub fn translate(&mut self, delta: WorldDelta) {
        self.position = self.position + delta;
    }
}
