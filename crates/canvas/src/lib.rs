//! Floor-plan canvas: viewport, interaction state, and the paint pass.
//!
//! This crate renders a [`floorplan::FloorPlan`] onto an abstract
//! [`DrawSurface`] and answers pointer queries against the same transform it
//! renders with. It owns no event loop; the embedding shell feeds it pointer
//! positions and asks for a repaint whenever state changes.

mod canvas;
mod interaction;
mod render;
mod surface;
mod viewport;

pub use canvas::{PlanCanvas, RenderSnapshot};
pub use interaction::{Selection, Target};
pub use render::{paint_link_vertices, paint_plan};
pub use surface::{DrawOp, DrawSurface, DrawSurfaceExt, RecordingSurface, SurfaceScope};
pub use viewport::Viewport;
