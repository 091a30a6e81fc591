//! Plan-to-screen transformation.
//!
//! The floor-plan viewport only ever pans and zooms uniformly, so the full
//! transform is a translation plus one scale factor. No rotation, no skew,
//! no matrices.

use glam::Vec2;

/// A 2D transform supporting translation and uniform scale.
///
/// Rendering maps plan coordinates to screen coordinates with [`apply`];
/// pointer picking maps back with [`apply_inverse`]. Both directions come
/// from the same pair of values, so hit-testing can never drift out of sync
/// with what is drawn.
///
/// A non-positive scale is not guarded against; callers own that invariant.
///
/// [`apply`]: PlanTransform::apply
/// [`apply_inverse`]: PlanTransform::apply_inverse
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlanTransform {
    /// Translation offset in screen units.
    pub offset: Vec2,
    /// Uniform scale factor (zoom level).
    pub scale: f32,
}

impl PlanTransform {
    /// The identity transform (no translation, no scaling).
    pub fn identity() -> Self {
        Self {
            offset: Vec2::ZERO,
            scale: 1.0,
        }
    }

    pub fn new(offset: Vec2, scale: f32) -> Self {
        Self { offset, scale }
    }

    pub fn from_translation(offset: Vec2) -> Self {
        Self { offset, scale: 1.0 }
    }

    pub fn from_scale(scale: f32) -> Self {
        Self {
            offset: Vec2::ZERO,
            scale,
        }
    }

    /// Transforms a point: `point * scale + offset`.
    pub fn apply(&self, point: Vec2) -> Vec2 {
        point * self.scale + self.offset
    }

    /// Transforms a vector (direction/size). Vectors ignore translation.
    pub fn apply_vector(&self, vector: Vec2) -> Vec2 {
        vector * self.scale
    }

    /// Inverse point transform: `(point - offset) / scale`.
    pub fn apply_inverse(&self, point: Vec2) -> Vec2 {
        (point - self.offset) / self.scale
    }

    /// Inverse vector transform.
    pub fn apply_inverse_vector(&self, vector: Vec2) -> Vec2 {
        vector / self.scale
    }

    /// Returns the inverse transformation.
    pub fn inverse(&self) -> PlanTransform {
        PlanTransform {
            offset: -self.offset / self.scale,
            scale: 1.0 / self.scale,
        }
    }
}
