use floorplan::{ScreenPoint, WorldPoint, WorldSize};
use glam::Vec2;
use maquette_core::{Bounds, PlanTransform};

/// Camera state for the floor-plan canvas.
///
/// Rendering and hit-testing both go through [`Viewport::transform`], so the
/// world→screen mapping and its inverse always agree.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    /// Pan offset in world coordinates.
    pub offset: Vec2,
    /// Zoom level (1.0 = 100%). Must stay positive; [`Viewport::zoom_at`]
    /// clamps, direct writes are on the caller.
    pub zoom: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            zoom: 1.0,
        }
    }
}

impl Viewport {
    pub const MIN_ZOOM: f32 = 0.1;
    pub const MAX_ZOOM: f32 = 10.0;

    pub fn new() -> Self {
        Self::default()
    }

    /// The world→screen transform this viewport currently represents.
    pub fn transform(&self) -> PlanTransform {
        PlanTransform::new(self.offset * self.zoom, self.zoom)
    }

    pub fn world_to_screen(&self, point: WorldPoint) -> ScreenPoint {
        ScreenPoint(self.transform().apply(point.0))
    }

    pub fn screen_to_world(&self, point: ScreenPoint) -> WorldPoint {
        WorldPoint(self.transform().apply_inverse(point.0))
    }

    pub fn world_to_screen_size(&self, size: WorldSize) -> Vec2 {
        self.transform().apply_vector(size.0)
    }

    /// Maps world-space bounds to screen-space bounds.
    pub fn world_to_screen_bounds(&self, bounds: Bounds) -> Bounds {
        let transform = self.transform();
        Bounds::new(transform.apply(bounds.min), transform.apply(bounds.max))
    }

    /// Pans the viewport by a delta in screen pixels.
    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta / self.zoom;
    }

    /// Zooms by `factor`, keeping the given screen point fixed.
    pub fn zoom_at(&mut self, screen_point: ScreenPoint, factor: f32) {
        let old_zoom = self.zoom;
        self.zoom = (self.zoom * factor).clamp(Self::MIN_ZOOM, Self::MAX_ZOOM);

        if self.zoom != old_zoom {
            let p = screen_point.0;
            self.offset.x = p.x / self.zoom - (p.x / old_zoom - self.offset.x);
            self.offset.y = p.y / self.zoom - (p.y / old_zoom - self.offset.y);
        }
    }

    pub fn reset(&mut self) {
        self.offset = Vec2::ZERO;
        self.zoom = 1.0;
    }
}
