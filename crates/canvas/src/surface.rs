//! Drawing surface abstraction.
//!
//! The paint pass draws through the [`DrawSurface`] trait instead of any
//! concrete graphics API: a surface offers a translation stack
//! (save/translate/restore) and filled-and-stroked rectangles, which is all
//! the floor-plan renderer needs. A real backend wraps its 2D context; tests
//! and headless use go through [`RecordingSurface`].

use glam::Vec2;
use maquette_core::Bounds;
use palette::Hsla;
use std::ops::{Deref, DerefMut};
use theme::Stroke;

/// A 2D surface the floor-plan paint pass can draw onto.
pub trait DrawSurface {
    /// Pushes the current transform state.
    fn save(&mut self);

    /// Pops back to the most recently saved transform state.
    ///
    /// Calling with nothing saved is a no-op.
    fn restore(&mut self);

    /// Translates subsequent draws by `offset` (screen pixels).
    fn translate(&mut self, offset: Vec2);

    /// Paints a rectangle in the surface's current local coordinates.
    fn paint_rect(&mut self, bounds: Bounds, fill: Option<Hsla>, stroke: Option<Stroke>);
}

/// Scoped save/restore of surface transform state.
///
/// Acquiring the scope saves the surface state; dropping it restores,
/// including on early returns. Transient translations applied inside one
/// marker draw can therefore never leak into a sibling draw.
pub struct SurfaceScope<'a, S: DrawSurface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: DrawSurface + ?Sized> SurfaceScope<'a, S> {
    pub fn new(surface: &'a mut S) -> Self {
        surface.save();
        Self { surface }
    }
}

impl<S: DrawSurface + ?Sized> Deref for SurfaceScope<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: DrawSurface + ?Sized> DerefMut for SurfaceScope<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: DrawSurface + ?Sized> Drop for SurfaceScope<'_, S> {
    fn drop(&mut self) {
        self.surface.restore();
    }
}

/// Convenience for entering a [`SurfaceScope`].
pub trait DrawSurfaceExt: DrawSurface {
    fn scoped(&mut self) -> SurfaceScope<'_, Self> {
        SurfaceScope::new(self)
    }
}

impl<S: DrawSurface + ?Sized> DrawSurfaceExt for S {}

/// One draw operation recorded by a [`RecordingSurface`], with the
/// translation stack already applied (absolute screen coordinates).
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Rect {
        bounds: Bounds,
        fill: Option<Hsla>,
        stroke: Option<Stroke>,
    },
}

impl DrawOp {
    pub fn bounds(&self) -> Bounds {
        match self {
            Self::Rect { bounds, .. } => *bounds,
        }
    }

    pub fn fill(&self) -> Option<Hsla> {
        match self {
            Self::Rect { fill, .. } => *fill,
        }
    }

    pub fn stroke(&self) -> Option<Stroke> {
        match self {
            Self::Rect { stroke, .. } => *stroke,
        }
    }
}

/// A surface that records resolved draw operations instead of rasterizing.
///
/// Doubles as the test backend and as a headless renderer: every recorded
/// op carries absolute coordinates, so assertions (and exporters) never need
/// to replay the translation stack themselves.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
    offset: Vec2,
    stack: Vec<Vec2>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Current save-stack depth. Zero after any balanced paint pass.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl DrawSurface for RecordingSurface {
    fn save(&mut self) {
        self.stack.push(self.offset);
    }

    fn restore(&mut self) {
        if let Some(offset) = self.stack.pop() {
            self.offset = offset;
        }
    }

    fn translate(&mut self, offset: Vec2) {
        self.offset += offset;
    }

    fn paint_rect(&mut self, bounds: Bounds, fill: Option<Hsla>, stroke: Option<Stroke>) {
        self.ops.push(DrawOp::Rect {
            bounds: bounds.translate(self.offset),
            fill,
            stroke,
        });
    }
}
