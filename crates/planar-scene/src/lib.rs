//! ---
//! planar_section: "03-scene-synthesis"
//! planar_subsection: "module"
//! planar_type: "source"
//! planar_scope: "code"
//! planar_description: "Randomized scene synthesis."
//! planar_version: "v0.1.0"
//! planar_owner: "tbd"
//! ---
//! Seeded random scene generation for the planar workspace.

pub mod generator;

pub use generator::{GeneratorRanges, ShapeGenerator};
