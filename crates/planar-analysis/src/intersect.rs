//! ---
//! planar_section: "02-analysis-reporting"
//! planar_subsection: "module"
//! planar_type: "source"
//! planar_scope: "code"
//! planar_description: "Analysis and reporting routines for planar scenes."
//! planar_version: "v0.1.0"
//! planar_owner: "tbd"
//! ---
use nalgebra::{Matrix2, Vector2};
use planar_core::{approx_zero, Circle, GeometryError, Line, Point2, Shape, EPSILON};
use serde::{Deserialize, Serialize};

/// Intersection point of two shapes.
///
/// Supported combinations are line/line, circle/circle, and circle/line in
/// either order; every other pairing is reported as
/// [`GeometryError::Unsupported`]. `Ok(None)` means the pair is supported
/// but disjoint.
pub fn between(a: &Shape, b: &Shape) -> Result<Option<Point2>, GeometryError> {
    match (a, b) {
        (Shape::Line(l1), Shape::Line(l2)) => Ok(line_line(l1, l2)),
        (Shape::Circle(c1), Shape::Circle(c2)) => Ok(circle_circle(c1, c2)),
        (Shape::Circle(circle), Shape::Line(line))
        | (Shape::Line(line), Shape::Circle(circle)) => Ok(circle_line(circle, line)),
        _ => Err(GeometryError::Unsupported),
    }
}

/// Whether [`between`] supports the combination.
pub fn supported(a: &Shape, b: &Shape) -> bool {
    matches!(
        (a, b),
        (Shape::Line(_), Shape::Line(_))
            | (Shape::Circle(_), Shape::Circle(_))
            | (Shape::Circle(_), Shape::Line(_))
            | (Shape::Line(_), Shape::Circle(_))
    )
}

fn line_line(l1: &Line, l2: &Line) -> Option<Point2> {
    let d1 = l1.direction();
    let d2 = l2.direction();
    let rhs = l2.start - l1.start;

    // Parallel and collinear segments have a singular coefficient matrix.
    let coefficients = Matrix2::new(d1.x, -d2.x, d1.y, -d2.y);
    let params = coefficients.lu().solve(&Vector2::new(rhs.x, rhs.y))?;

    let (t, u) = (params[0], params[1]);
    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(l1.start + d1 * t)
    } else {
        None
    }
}

fn circle_circle(c1: &Circle, c2: &Circle) -> Option<Point2> {
    let d = c1.center.distance_to(c2.center);
    if approx_zero(d) {
        // Concentric circles: either identical or nested, no single point.
        return None;
    }

    let r1 = c1.radius.abs();
    let r2 = c2.radius.abs();
    if d > r1 + r2 + EPSILON || d < (r1 - r2).abs() - EPSILON {
        return None;
    }

    let a = (r1 * r1 - r2 * r2 + d * d) / (2.0 * d);
    let h_sq = r1 * r1 - a * a;
    let dir = (c2.center - c1.center) / d;
    let base = c1.center + dir * a;

    if h_sq <= EPSILON {
        return Some(base);
    }
    Some(base + Point2::new(dir.y, -dir.x) * h_sq.sqrt())
}

fn circle_line(circle: &Circle, line: &Line) -> Option<Point2> {
    let d = line.direction();
    let f = line.start - circle.center;
    let a = d.dot(d);

    if approx_zero(a) {
        // Zero-length segment: intersects iff the point sits on the boundary.
        return approx_zero(f.length() - circle.radius.abs()).then_some(line.start);
    }

    let b = 2.0 * f.dot(d);
    let c = f.dot(f) - circle.radius * circle.radius;
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_disc = discriminant.sqrt();
    let t1 = (-b - sqrt_disc) / (2.0 * a);
    let t2 = (-b + sqrt_disc) / (2.0 * a);
    let t = [t1, t2]
        .into_iter()
        .find(|t| (0.0..=1.0).contains(t))?;
    Some(line.start + d * t)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntersectionReport {
    pub hits: Vec<IntersectionHit>,
    pub disjoint_supported_pairs: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntersectionHit {
    pub first: usize,
    pub second: usize,
    pub point: Point2,
}

/// Intersection points over every supported pair in the scene.
pub fn intersection_report(shapes: &[Shape]) -> IntersectionReport {
    let mut hits = Vec::new();
    let mut disjoint = 0usize;

    for (i, a) in shapes.iter().enumerate() {
        for (j, b) in shapes.iter().enumerate().skip(i + 1) {
            match between(a, b) {
                Ok(Some(point)) => hits.push(IntersectionHit {
                    first: i,
                    second: j,
                    point,
                }),
                Ok(None) => disjoint += 1,
                Err(_) => {}
            }
        }
    }

    IntersectionReport {
        hits,
        disjoint_supported_pairs: disjoint,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planar_core::Triangle;

    #[test]
    fn crossing_segments_meet_once() {
        let l1 = Shape::Line(Line::new(Point2::new(-20.0, -20.0), Point2::new(20.0, 20.0)));
        let l2 = Shape::Line(Line::new(Point2::new(-20.0, 20.0), Point2::new(20.0, -20.0)));
        assert_eq!(between(&l1, &l2).unwrap(), Some(Point2::new(0.0, 0.0)));
    }

    #[test]
    fn identical_segments_do_not_intersect() {
        let l1 = Shape::Line(Line::new(Point2::new(-20.0, -20.0), Point2::new(20.0, 20.0)));
        assert_eq!(between(&l1, &l1).unwrap(), None);
    }

    #[test]
    fn unsupported_pair_is_an_error() {
        let tri = Shape::Triangle(Triangle::default());
        let line = Shape::Line(Line::default());
        assert_eq!(between(&tri, &line), Err(GeometryError::Unsupported));
        assert!(!supported(&tri, &line));
    }

    #[test]
    fn report_separates_hits_from_disjoint_pairs() {
        let shapes = vec![
            Shape::Line(Line::new(Point2::new(-20.0, -20.0), Point2::new(20.0, 20.0))),
            Shape::Line(Line::new(Point2::new(-20.0, 20.0), Point2::new(20.0, -20.0))),
            Shape::Line(Line::new(Point2::new(30.0, 30.0), Point2::new(40.0, 40.0))),
        ];
        let report = intersection_report(&shapes);
        assert_eq!(report.hits.len(), 1);
        assert_eq!((report.hits[0].first, report.hits[0].second), (0, 1));
        assert_eq!(report.disjoint_supported_pairs, 2);
    }
}
