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

use planar_core::{approx_zero, GeometryError, Point2};
use serde::{Deserialize, Serialize};

/// Cross product of `p1 - middle` and `p2 - middle`.
fn cross_product(p1: Point2, middle: Point2, p2: Point2) -> f64 {
    (p1 - middle).cross(p2 - middle)
}

/// Counter-clockwise convex hull via Graham scan. Collinear boundary points
/// are dropped, so the result is strictly convex.
pub fn graham_scan(points: &[Point2]) -> Result<Vec<Point2>, GeometryError> {
    if points.len() < 3 {
        return Err(GeometryError::InsufficientPoints);
    }

    let mut pts = points.to_vec();

    // Pivot: lowest y, ties broken towards lowest x.
    let pivot_idx = pts
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.y.total_cmp(&b.y).then(a.x.total_cmp(&b.x)))
        .map(|(idx, _)| idx)
        .expect("hull input checked non-empty");
    pts.swap(0, pivot_idx);
    let pivot = pts[0];

    // Sort the remaining points by polar angle around the pivot; collinear
    // points order by distance.
    pts[1..].sort_by(|lhs, rhs| {
        let cross = cross_product(*lhs, pivot, *rhs);
        if approx_zero(cross) {
            pivot.distance_to(*lhs).total_cmp(&pivot.distance_to(*rhs))
        } else if cross > 0.0 {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    });

    let mut hull: Vec<Point2> = Vec::with_capacity(pts.len());
    for p in pts {
        // Pop while the stack top makes a non-left turn towards p.
        while hull.len() >= 2 {
            let top = hull[hull.len() - 1];
            let next_to_top = hull[hull.len() - 2];
            if cross_product(p, top, next_to_top) <= 0.0 {
                hull.pop();
            } else {
                break;
            }
        }
        hull.push(p);
    }

    Ok(hull)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HullReport {
    pub points: Vec<Point2>,
}
