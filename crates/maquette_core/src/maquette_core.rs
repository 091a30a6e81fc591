//! # Geometry primitives shared across Maquette
//!
//! This crate provides the small deterministic pieces every other crate
//! builds on: axis-aligned bounds for rooms and vertical links, and the
//! pan/zoom transform that maps between plan and screen coordinates.

pub mod bounds;
pub mod transform;

pub use bounds::Bounds;
pub use transform::PlanTransform;
