//! ---
//! planar_section: "02-analysis-reporting"
//! planar_subsection: "module"
//! planar_type: "source"
//! planar_scope: "code"
//! planar_description: "Analysis and reporting routines for planar scenes."
//! planar_version: "v0.1.0"
//! planar_owner: "tbd"
//! ---
use planar_core::Shape;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Bounding-box broad phase: every index pair `(i, j)` with `i < j` whose
/// boxes overlap, in scan order.
pub fn find_all(shapes: &[Shape]) -> Vec<(usize, usize)> {
    let boxes: Vec<_> = shapes.iter().map(Shape::bounding_box).collect();
    let mut pairs = Vec::new();
    for i in 0..boxes.len() {
        for j in (i + 1)..boxes.len() {
            if boxes[i].overlaps(&boxes[j]) {
                pairs.push((i, j));
            }
        }
    }
    debug!(candidates = pairs.len(), "collision broad phase complete");
    pairs
}

/// Index of the shape with the greatest bounding-box height. The first shape
/// wins ties.
pub fn highest(shapes: &[Shape]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, shape) in shapes.iter().enumerate() {
        let height = shape.bounding_box().height();
        match &best {
            Some((_, best_height)) if height <= *best_height => {}
            _ => best = Some((index, height)),
        }
    }
    best.map(|(index, _)| index)
}

/// Index of the shape with the smallest bounding-box height. The first shape
/// wins ties.
pub fn lowest(shapes: &[Shape]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, shape) in shapes.iter().enumerate() {
        let height = shape.bounding_box().height();
        match &best {
            Some((_, best_height)) if height >= *best_height => {}
            _ => best = Some((index, height)),
        }
    }
    best.map(|(index, _)| index)
}

/// Shapes whose bounding-box top edge lies above the threshold.
pub fn above(shapes: &[Shape], threshold: f64) -> Vec<usize> {
    shapes
        .iter()
        .enumerate()
        .filter(|(_, shape)| shape.bounding_box().top() > threshold)
        .map(|(index, _)| index)
        .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollisionReport {
    pub pairs: Vec<CollisionPair>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollisionPair {
    pub first: usize,
    pub second: usize,
    pub first_kind: String,
    pub second_kind: String,
}

pub fn broad_phase_report(shapes: &[Shape]) -> CollisionReport {
    let pairs = find_all(shapes)
        .into_iter()
        .map(|(first, second)| CollisionPair {
            first,
            second,
            first_kind: shapes[first].kind().to_string(),
            second_kind: shapes[second].kind().to_string(),
        })
        .collect();
    CollisionReport { pairs }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElevationReport {
    pub threshold: f64,
    pub highest: Option<ShapeExtent>,
    pub lowest: Option<ShapeExtent>,
    pub above_threshold: Vec<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeExtent {
    pub index: usize,
    pub kind: String,
    pub height: f64,
    pub top: f64,
}

pub fn elevation_report(shapes: &[Shape], threshold: f64) -> ElevationReport {
    let extent = |index: usize| {
        let bbox = shapes[index].bounding_box();
        ShapeExtent {
            index,
            kind: shapes[index].kind().to_string(),
            height: bbox.height(),
            top: bbox.top(),
        }
    };

    ElevationReport {
        threshold,
        highest: highest(shapes).map(extent),
        lowest: lowest(shapes).map(extent),
        above_threshold: above(shapes, threshold),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planar_core::{Circle, Point2, Rectangle, Shape, Triangle};

    fn sample_scene() -> Vec<Shape> {
        vec![
            Shape::Circle(Circle::new(Point2::new(9.0, 10.0), 5.0)),
            Shape::Triangle(Triangle::new(
                Point2::new(10.0, 10.0),
                Point2::new(20.0, 40.0),
                Point2::new(30.0, 10.0),
            )),
            Shape::Rectangle(Rectangle::new(Point2::new(31.0, 10.0), 10.0, 31.0)),
        ]
    }

    #[test]
    fn broad_phase_finds_overlapping_boxes_once() {
        let shapes = sample_scene();
        assert_eq!(find_all(&shapes), vec![(0, 1)]);
        assert_eq!(find_all(&[]), Vec::<(usize, usize)>::new());
    }

    #[test]
    fn highest_is_the_tallest_bounding_box() {
        let shapes = sample_scene();
        assert_eq!(highest(&shapes), Some(2));
        assert_eq!(lowest(&shapes), Some(0));
        assert_eq!(highest(&[]), None);
    }

    #[test]
    fn above_uses_the_top_edge() {
        let shapes = sample_scene();
        // Tops: circle 15, triangle 40, rectangle 41.
        assert_eq!(above(&shapes, 20.0), vec![1, 2]);
        assert_eq!(above(&shapes, 50.0), Vec::<usize>::new());
    }

    #[test]
    fn elevation_report_captures_extremes() {
        let shapes = sample_scene();
        let report = elevation_report(&shapes, 20.0);
        assert_eq!(report.highest.as_ref().unwrap().index, 2);
        assert_eq!(report.highest.as_ref().unwrap().height, 31.0);
        assert_eq!(report.lowest.as_ref().unwrap().index, 0);
        assert_eq!(report.above_threshold, vec![1, 2]);
    }
}
