//! ---
//! planar_section: "01-geometry-core"
//! planar_subsection: "module"
//! planar_type: "source"
//! planar_scope: "code"
//! planar_description: "Geometric primitives and shape model."
//! planar_version: "v0.1.0"
//! planar_owner: "tbd"
//! ---
//! Core geometric primitives shared across the planar workspace.

pub mod bbox;
pub mod errors;
pub mod point;
pub mod shape;

pub use bbox::BoundingBox;
pub use errors::{GeometryError, Result};
pub use point::{approx_zero, Point2, EPSILON};
pub use shape::{
    Circle, Line, Polygon, Polyline, Rectangle, RegularPolygon, Shape, Triangle,
};
