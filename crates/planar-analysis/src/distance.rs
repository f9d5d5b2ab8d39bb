//! ---
//! planar_section: "02-analysis-reporting"
//! planar_subsection: "module"
//! planar_type: "source"
//! planar_scope: "code"
//! planar_description: "Analysis and reporting routines for planar scenes."
//! planar_version: "v0.1.0"
//! planar_owner: "tbd"
//! ---
use planar_core::{approx_zero, Circle, Line, Point2, Rectangle, Shape, Triangle};
use serde::{Deserialize, Serialize};

/// Distance from a point to a shape. Points inside a filled shape are at
/// distance zero.
pub fn to_point(shape: &Shape, point: Point2) -> f64 {
    match shape {
        Shape::Line(line) => point_to_segment(point, line),
        Shape::Circle(circle) => point_to_circle(point, circle),
        Shape::Rectangle(rect) => point_to_rectangle(point, rect),
        Shape::Triangle(tri) => point_to_triangle(point, tri),
        Shape::RegularPolygon(poly) => {
            point_to_ring(point, &poly.vertices(), &poly.edges())
        }
        Shape::Polygon(poly) => point_to_ring(point, poly.vertices(), &poly.edges()),
    }
}

/// Distance between two shapes. Only circle/circle and line/line pairs are
/// supported; every other combination yields `None`.
pub fn between(a: &Shape, b: &Shape) -> Option<f64> {
    match (a, b) {
        (Shape::Circle(c1), Shape::Circle(c2)) => {
            let centers = c1.center.distance_to(c2.center);
            let borders = centers - (c1.radius + c2.radius);
            Some(borders.max(0.0))
        }
        (Shape::Line(l1), Shape::Line(l2)) => {
            let candidates = [
                point_to_segment(l1.start, l2),
                point_to_segment(l1.end, l2),
                point_to_segment(l2.start, l1),
                point_to_segment(l2.end, l1),
            ];
            candidates.into_iter().reduce(f64::min)
        }
        _ => None,
    }
}

pub fn bounding_boxes_overlap(a: &Shape, b: &Shape) -> bool {
    a.bounding_box().overlaps(&b.bounding_box())
}

fn point_to_segment(point: Point2, line: &Line) -> f64 {
    let vl = line.direction();
    let vp = point - line.start;
    let norm_sq = vl.dot(vl);

    if approx_zero(norm_sq) {
        return point.distance_to(line.start);
    }

    let t = (vp.dot(vl) / norm_sq).clamp(0.0, 1.0);
    let offset = line.start - point + vl * t;
    offset.length()
}

fn point_to_circle(point: Point2, circle: &Circle) -> f64 {
    let r = circle.radius.abs();
    (point.distance_to(circle.center) - r).max(0.0)
}

fn point_to_rectangle(point: Point2, rect: &Rectangle) -> f64 {
    if rect.bounding_box().contains(point) {
        return 0.0;
    }
    min_edge_distance(point, &rect.edges())
}

fn point_to_triangle(point: Point2, tri: &Triangle) -> f64 {
    let pts = tri.vertices();
    let mut turns = [0.0; 3];
    let mut j = pts.len() - 1;
    for (i, turn) in turns.iter_mut().enumerate() {
        let v1 = pts[j] - pts[i];
        let v2 = point - pts[i];
        *turn = v1.cross(v2);
        j = i;
    }

    let inside = turns.iter().all(|&t| t <= 0.0) || turns.iter().all(|&t| t >= 0.0);
    if inside {
        return 0.0;
    }
    min_edge_distance(point, &tri.edges())
}

fn point_to_ring(point: Point2, vertices: &[Point2], edges: &[Line]) -> f64 {
    if vertices.is_empty() {
        return f64::INFINITY;
    }
    if vertices.len() == 1 {
        return point.distance_to(vertices[0]);
    }

    // Ray casting parity test.
    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        if (vertices[i].y > point.y) != (vertices[j].y > point.y)
            && point.x
                < (vertices[j].x - vertices[i].x) * (point.y - vertices[i].y)
                    / (vertices[j].y - vertices[i].y)
                    + vertices[i].x
        {
            inside = !inside;
        }
        j = i;
    }
    if inside {
        return 0.0;
    }
    min_edge_distance(point, edges)
}

fn min_edge_distance(point: Point2, edges: &[Line]) -> f64 {
    edges
        .iter()
        .map(|edge| point_to_segment(point, edge))
        .fold(f64::INFINITY, f64::min)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceReport {
    pub probe: Point2,
    pub from_probe: Vec<ProbeDistance>,
    pub between_pairs: Vec<PairDistance>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeDistance {
    pub index: usize,
    pub kind: String,
    pub distance: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairDistance {
    pub first: usize,
    pub second: usize,
    pub distance: f64,
}

/// Distances from a probe point to every shape, plus the pairwise distances
/// for the supported shape combinations.
pub fn distance_report(shapes: &[Shape], probe: Point2) -> DistanceReport {
    let from_probe = shapes
        .iter()
        .enumerate()
        .map(|(index, shape)| ProbeDistance {
            index,
            kind: shape.kind().to_string(),
            distance: to_point(shape, probe),
        })
        .collect();

    let mut between_pairs = Vec::new();
    for (i, a) in shapes.iter().enumerate() {
        for (j, b) in shapes.iter().enumerate().skip(i + 1) {
            if let Some(distance) = between(a, b) {
                between_pairs.push(PairDistance {
                    first: i,
                    second: j,
                    distance,
                });
            }
        }
    }

    DistanceReport {
        probe,
        from_probe,
        between_pairs,
    }
}
