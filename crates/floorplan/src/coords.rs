//! Typed coordinate wrappers.
//!
//! Plan (world) space and screen space are both 2D float planes, which makes
//! it very easy to feed one where the other is expected. Wrapping `Vec2` in
//! distinct newtypes makes that a type error instead of a rendering bug.
//!
//! - **World space**: the floor plan's logical coordinates, independent of
//!   the viewport. Y grows downward.
//! - **Screen space**: pixel coordinates on the drawing surface, derived from
//!   world space via the viewport's pan and zoom.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A point in world (plan) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldPoint(pub Vec2);

/// A size in world coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldSize(pub Vec2);

/// A displacement in world coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldDelta(pub Vec2);

/// A point in screen (surface pixel) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenPoint(pub Vec2);

impl WorldPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    pub fn x(&self) -> f32 {
        self.0.x
    }

    pub fn y(&self) -> f32 {
        self.0.y
    }
}

impl WorldSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self(Vec2::new(width, height))
    }

    pub fn width(&self) -> f32 {
        self.0.x
    }

    pub fn height(&self) -> f32 {
        self.0.y
    }
}

impl WorldDelta {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }
}

impl ScreenPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    pub fn x(&self) -> f32 {
        self.0.x
    }

    pub fn y(&self) -> f32 {
        self.0.y
    }
}

impl Add<WorldDelta> for WorldPoint {
    type Output = WorldPoint;

    fn add(self, delta: WorldDelta) -> WorldPoint {
        WorldPoint(self.0 + delta.0)
    }
}

impl Sub for WorldPoint {
    type Output = WorldDelta;

    fn sub(self, other: WorldPoint) -> WorldDelta {
        WorldDelta(self.0 - other.0)
    }
}

impl Add<WorldSize> for WorldPoint {
    type Output = WorldPoint;

    fn add(self, size: WorldSize) -> WorldPoint {
        WorldPoint(self.0 + size.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_arithmetic() {
        let a = WorldPoint::new(10.0, 20.0);
        let b = WorldPoint::new(4.0, 5.0);

        assert_eq!(a - b, WorldDelta::new(6.0, 15.0));
        assert_eq!(b + (a - b), a);
        assert_eq!(a + WorldSize::new(100.0, 50.0), WorldPoint::new(110.0, 70.0));
    }
}
