//! Axis-aligned bounding boxes for floor-plan geometry.
//!
//! Rooms and vertical links are axis-aligned rectangles in plan space, so a
//! min/max AABB is all the geometry we need. Nothing in a floor plan rotates.

use glam::Vec2;

/// An axis-aligned rectangle represented by its minimum and maximum points.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    /// Top-left corner in plan coordinates (y grows downward).
    pub min: Vec2,
    /// Bottom-right corner.
    pub max: Vec2,
}

impl Bounds {
    /// Creates bounds from minimum and maximum points.
    ///
    /// Does not validate that `min <= max`; use [`Bounds::from_corners`] for
    /// automatic ordering.
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Creates bounds from an origin point and a size.
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self {
            min: origin,
            max: origin + size,
        }
    }

    /// Creates bounds from a center point and a full size.
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Creates bounds from two corner points, ordering them automatically.
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Zero-sized bounds at the origin.
    pub fn zero() -> Self {
        Self {
            min: Vec2::ZERO,
            max: Vec2::ZERO,
        }
    }

    pub fn origin(&self) -> Vec2 {
        self.min
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Returns the four corner points in fixed order: top-left, top-right,
    /// bottom-right, bottom-left.
    ///
    /// The order is a pure function of the rectangle and never changes
    /// between calls; vertex indices elsewhere in the editor rely on it.
    /// Degenerate rectangles simply yield coincident corners.
    pub fn corners(&self) -> [Vec2; 4] {
        [
            self.min,                          // top-left
            Vec2::new(self.max.x, self.min.y), // top-right
            self.max,                          // bottom-right
            Vec2::new(self.min.x, self.max.y), // bottom-left
        ]
    }

    /// Tests if a point is contained within the bounds.
    ///
    /// Points on the boundary count as contained.
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Tests if this bounds overlaps another.
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// Smallest bounds containing both inputs.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Grows the bounds by `amount` in all directions.
    pub fn expand(&self, amount: f32) -> Self {
        Self {
            min: self.min - Vec2::splat(amount),
            max: self.max + Vec2::splat(amount),
        }
    }

    /// Moves the bounds by an offset.
    pub fn translate(&self, offset: Vec2) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::zero()
    }
}
