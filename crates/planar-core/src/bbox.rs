//! ---
//! planar_section: "01-geometry-core"
//! planar_subsection: "module"
//! planar_type: "source"
//! planar_scope: "code"
//! planar_description: "Geometric primitives and shape model."
//! planar_version: "v0.1.0"
//! planar_owner: "tbd"
//! ---
use serde::{Deserialize, Serialize};

use crate::point::Point2;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Smallest box containing every point, or `None` for an empty input.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bbox = BoundingBox::new(first.x, first.y, first.x, first.y);
        for p in iter {
            bbox.min_x = bbox.min_x.min(p.x);
            bbox.min_y = bbox.min_y.min(p.y);
            bbox.max_x = bbox.max_x.max(p.x);
            bbox.max_y = bbox.max_y.max(p.y);
        }
        Some(bbox)
    }

    pub fn center(&self) -> Point2 {
        Point2::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Vertical extent of the box.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Highest y coordinate covered by the box.
    pub fn top(&self) -> f64 {
        self.max_y
    }

    pub fn contains(&self, p: Point2) -> bool {
        self.min_x <= p.x && p.x <= self.max_x && self.min_y <= p.y && p.y <= self.max_y
    }

    /// Boxes that touch exactly at an edge count as overlapping.
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        self.min_x <= other.max_x
            && other.min_x <= self.max_x
            && self.min_y <= other.max_y
            && other.min_y <= self.max_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_points_covers_all() {
        let bbox = BoundingBox::from_points([
            Point2::new(1.0, 5.0),
            Point2::new(-2.0, 0.0),
            Point2::new(3.0, 2.0),
        ])
        .unwrap();
        assert_eq!(bbox, BoundingBox::new(-2.0, 0.0, 3.0, 5.0));
        assert!(BoundingBox::from_points(Vec::<Point2>::new()).is_none());
    }

    #[test]
    fn center_and_extents() {
        let bbox = BoundingBox::new(0.0, 0.0, 10.0, 20.0);
        assert_eq!(bbox.center(), Point2::new(5.0, 10.0));
        assert_eq!(bbox.width(), 10.0);
        assert_eq!(bbox.height(), 20.0);
        assert_eq!(bbox.top(), 20.0);
    }

    #[test]
    fn touching_boxes_overlap() {
        let a = BoundingBox::new(20.0, 20.0, 40.0, 40.0);
        let b = BoundingBox::new(40.0, 20.0, 60.0, 40.0);
        let c = BoundingBox::new(50.0, 20.0, 70.0, 40.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }
}
