//! ---
//! planar_section: "01-geometry-core"
//! planar_subsection: "module"
//! planar_type: "source"
//! planar_scope: "code"
//! planar_description: "Geometric primitives and shape model."
//! planar_version: "v0.1.0"
//! planar_owner: "tbd"
//! ---
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GeometryError>;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    #[error("operation is not supported for this shape combination")]
    Unsupported,
    #[error("at least three distinct points are required")]
    InsufficientPoints,
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
}
