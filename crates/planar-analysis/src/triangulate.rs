//! ---
//! planar_section: "02-analysis-reporting"
//! planar_subsection: "module"
//! planar_type: "source"
//! planar_scope: "code"
//! planar_description: "Analysis and reporting routines for planar scenes."
//! planar_version: "v0.1.0"
//! planar_owner: "tbd"
//! ---
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use planar_core::{BoundingBox, GeometryError, Point2, RegularPolygon, EPSILON};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::hull::graham_scan;

/// A triangle of the Delaunay mesh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeshTriangle {
    pub a: Point2,
    pub b: Point2,
    pub c: Point2,
}

impl MeshTriangle {
    pub const fn new(a: Point2, b: Point2, c: Point2) -> Self {
        Self { a, b, c }
    }

    pub fn vertices(&self) -> [Point2; 3] {
        [self.a, self.b, self.c]
    }

    pub fn center(&self) -> Point2 {
        (self.a + self.b + self.c) / 3.0
    }

    /// Circumcenter, falling back to the centroid for degenerate triangles.
    pub fn circumcenter(&self) -> Point2 {
        let (a, b, c) = (self.a, self.b, self.c);
        let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
        if d.abs() < EPSILON {
            return self.center();
        }

        let a_sq = a.x * a.x + a.y * a.y;
        let b_sq = b.x * b.x + b.y * b.y;
        let c_sq = c.x * c.x + c.y * c.y;
        let ux = (a_sq * (b.y - c.y) + b_sq * (c.y - a.y) + c_sq * (a.y - b.y)) / d;
        let uy = (a_sq * (c.x - b.x) + b_sq * (a.x - c.x) + c_sq * (b.x - a.x)) / d;
        Point2::new(ux, uy)
    }

    pub fn circumradius(&self) -> f64 {
        self.circumcenter().distance_to(self.a)
    }

    pub fn circumcircle_contains(&self, p: Point2) -> bool {
        self.circumcenter().distance_to(p) <= self.circumradius() + EPSILON
    }

    fn has_vertex(&self, v: Point2) -> bool {
        self.a == v || self.b == v || self.c == v
    }
}

impl fmt::Display for MeshTriangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MeshTriangle({}, {}, {})", self.a, self.b, self.c)
    }
}

/// Undirected edge with normalized endpoint order, usable as an ordered map
/// key.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Edge {
    p1: Point2,
    p2: Point2,
}

impl Edge {
    fn new(p1: Point2, p2: Point2) -> Self {
        if p1.x > p2.x || (p1.x == p2.x && p1.y > p2.y) {
            Self { p1: p2, p2: p1 }
        } else {
            Self { p1, p2 }
        }
    }
}

impl Eq for Edge {}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.p1
            .x
            .total_cmp(&other.p1.x)
            .then(self.p1.y.total_cmp(&other.p1.y))
            .then(self.p2.x.total_cmp(&other.p2.x))
            .then(self.p2.y.total_cmp(&other.p2.y))
    }
}

/// Delaunay triangulation by Bowyer-Watson incremental insertion.
pub fn bowyer_watson(points: &[Point2]) -> Result<Vec<MeshTriangle>, GeometryError> {
    if points.len() < 3 {
        return Err(GeometryError::InsufficientPoints);
    }

    // Super triangle: an equilateral triangle circumscribed around the
    // convex hull's bounding box at twice the center-to-corner radius.
    let hull = graham_scan(points)?;
    let hull_bbox =
        BoundingBox::from_points(hull.iter().copied()).expect("hull is non-empty");
    let center = hull_bbox.center();
    let corner_radius =
        center.distance_to(Point2::new(hull_bbox.min_x, hull_bbox.min_y));
    let enclosing = RegularPolygon::new(center, 2.0 * corner_radius, 3).vertices();
    let super_triangle = MeshTriangle::new(enclosing[0], enclosing[1], enclosing[2]);

    let mut triangulation = vec![super_triangle];

    for &point in points {
        let bad: Vec<MeshTriangle> = triangulation
            .iter()
            .filter(|tri| tri.circumcircle_contains(point))
            .copied()
            .collect();
        if bad.is_empty() {
            continue;
        }

        let mut edge_counts: BTreeMap<Edge, u32> = BTreeMap::new();
        for tri in &bad {
            *edge_counts.entry(Edge::new(tri.a, tri.b)).or_insert(0) += 1;
            *edge_counts.entry(Edge::new(tri.b, tri.c)).or_insert(0) += 1;
            *edge_counts.entry(Edge::new(tri.c, tri.a)).or_insert(0) += 1;
        }

        triangulation.retain(|tri| !bad.iter().any(|b| b == tri));

        // Edges seen exactly once bound the cavity; fan them to the new
        // point in deterministic (sorted-edge) order.
        for (edge, count) in &edge_counts {
            if *count == 1 {
                triangulation.push(MeshTriangle::new(edge.p1, edge.p2, point));
            }
        }
    }

    triangulation.retain(|tri| {
        !super_triangle
            .vertices()
            .iter()
            .any(|&v| tri.has_vertex(v))
    });

    debug!(
        points = points.len(),
        triangles = triangulation.len(),
        "triangulation complete"
    );
    Ok(triangulation)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshReport {
    pub triangles: Vec<MeshTriangle>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn same_vertices(tri: &MeshTriangle, expected: [Point2; 3]) -> bool {
        expected
            .iter()
            .all(|v| tri.vertices().iter().any(|t| t == v))
    }

    #[test]
    fn square_splits_into_two_triangles() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(100.0, 0.0),
            Point2::new(100.0, 100.0),
            Point2::new(0.0, 100.0),
        ];

        let mesh = bowyer_watson(&points).unwrap();
        assert_eq!(mesh.len(), 2);
        assert!(mesh.iter().any(|tri| same_vertices(
            tri,
            [
                Point2::new(0.0, 0.0),
                Point2::new(100.0, 0.0),
                Point2::new(0.0, 100.0),
            ]
        )));
        assert!(mesh.iter().any(|tri| same_vertices(
            tri,
            [
                Point2::new(100.0, 0.0),
                Point2::new(100.0, 100.0),
                Point2::new(0.0, 100.0),
            ]
        )));
    }

    #[test]
    fn too_few_points_is_an_error() {
        let points = vec![Point2::new(0.0, 0.0), Point2::new(100.0, 0.0)];
        assert_eq!(
            bowyer_watson(&points),
            Err(GeometryError::InsufficientPoints)
        );
    }

    #[test]
    fn no_input_point_sits_inside_a_circumcircle() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(5.0, 8.0),
            Point2::new(15.0, 5.0),
            Point2::new(2.0, 12.0),
        ];

        let mesh = bowyer_watson(&points).unwrap();
        assert!(!mesh.is_empty());
        for tri in &mesh {
            let center = tri.circumcenter();
            let radius = tri.circumradius();
            for &p in &points {
                if tri.vertices().contains(&p) {
                    continue;
                }
                assert!(
                    center.distance_to(p) >= radius - 1e-6,
                    "{p} lies inside circumcircle of {tri}"
                );
            }
        }
    }

    #[test]
    fn circumcenter_of_degenerate_triangle_falls_back_to_centroid() {
        let tri = MeshTriangle::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        );
        assert_eq!(tri.circumcenter(), Point2::new(1.0, 0.0));
    }
}
