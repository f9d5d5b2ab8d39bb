//! ---
//! planar_section: "01-geometry-core"
//! planar_subsection: "module"
//! planar_type: "source"
//! planar_scope: "code"
//! planar_description: "Geometric primitives and shape model."
//! planar_version: "v0.1.0"
//! planar_owner: "tbd"
//! ---
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use serde::{Deserialize, Serialize};

/// Tolerance used for degenerate-case checks throughout the workspace.
pub const EPSILON: f64 = 1e-10;

/// Whether a value is zero within [`EPSILON`].
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

/// A point (or vector) in the plane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn dot(&self, other: Point2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn cross(&self, other: Point2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn distance_to(&self, other: Point2) -> f64 {
        (*self - other).length()
    }

    /// Unit vector in the same direction; the zero vector maps to itself.
    pub fn normalize(&self) -> Point2 {
        let len = self.length();
        if len > 0.0 {
            Point2::new(self.x / len, self.y / len)
        } else {
            Point2::default()
        }
    }
}

impl Add for Point2 {
    type Output = Point2;

    fn add(self, other: Point2) -> Point2 {
        Point2::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point2 {
    type Output = Point2;

    fn sub(self, other: Point2) -> Point2 {
        Point2::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Point2 {
    type Output = Point2;

    fn mul(self, value: f64) -> Point2 {
        Point2::new(self.x * value, self.y * value)
    }
}

impl Div<f64> for Point2 {
    type Output = Point2;

    fn div(self, value: f64) -> Point2 {
        Point2::new(self.x / value, self.y / value)
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}
