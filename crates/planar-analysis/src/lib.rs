//! ---
//! planar_section: "02-analysis-reporting"
//! planar_subsection: "module"
//! planar_type: "source"
//! planar_scope: "code"
//! planar_description: "Analysis and reporting routines for planar scenes."
//! planar_version: "v0.1.0"
//! planar_owner: "tbd"
//! ---
pub mod collisions;
pub mod distance;
pub mod errors;
pub mod hull;
pub mod intersect;
pub mod io;
pub mod plot;
pub mod reports;
pub mod triangulate;

use chrono::{DateTime, Utc};
use planar_core::{GeometryError, Point2, Shape};
use tracing::{info, warn};

use crate::{
    collisions::{CollisionReport, ElevationReport},
    distance::DistanceReport,
    hull::HullReport,
    intersect::IntersectionReport,
    reports::ReportExporter,
    triangulate::MeshReport,
};

pub use errors::{AnalysisError, Result};

/// Parameters of the analysis pipeline.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AnalyzeOptions {
    /// Point the distance queries measure from.
    pub probe_point: Point2,
    /// Shapes whose top edge exceeds this are reported as elevated.
    pub elevation_threshold: f64,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            probe_point: Point2::new(10.0, 10.0),
            elevation_threshold: 50.0,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SceneSummary {
    pub timestamp: DateTime<Utc>,
    pub shape_count: usize,
    pub collisions: CollisionReport,
    pub distances: DistanceReport,
    pub intersections: IntersectionReport,
    pub elevation: ElevationReport,
    pub hull: Option<HullReport>,
    pub mesh: Option<MeshReport>,
}

impl SceneSummary {
    pub fn exporter(&self) -> ReportExporter<'_> {
        ReportExporter::new(self)
    }
}

/// Every vertex of every shape, in scene order.
pub fn scene_vertices(shapes: &[Shape]) -> Vec<Point2> {
    shapes.iter().flat_map(Shape::vertices).collect()
}

/// Runs the full analysis suite and writes reports to the default
/// `reports/` directory.
///
/// For fallible usage, prefer [`analyze_scene_with_options`].
pub fn analyze_scene(shapes: &[Shape], options: &AnalyzeOptions) -> SceneSummary {
    analyze_scene_with_options(shapes, options, None)
        .expect("scene analysis execution should succeed")
}

/// Runs the analysis pipeline with a configurable export directory.
/// When `output_dir` is `None`, the default `reports/` directory is used.
pub fn analyze_scene_with_options(
    shapes: &[Shape],
    options: &AnalyzeOptions,
    output_dir: Option<&std::path::Path>,
) -> Result<SceneSummary> {
    info!("Running collision broad phase...");
    let collisions = collisions::broad_phase_report(shapes);

    info!("Running distance queries...");
    let distances = distance::distance_report(shapes, options.probe_point);

    info!("Running intersection search...");
    let intersections = intersect::intersection_report(shapes);

    info!("Running elevation analysis...");
    let elevation = collisions::elevation_report(shapes, options.elevation_threshold);

    let vertices = scene_vertices(shapes);
    let hull = match hull::graham_scan(&vertices) {
        Ok(points) => Some(HullReport { points }),
        Err(GeometryError::InsufficientPoints) => {
            warn!("Scene has too few vertices for a convex hull");
            None
        }
        Err(err) => return Err(err.into()),
    };

    let mesh = match &hull {
        Some(hull) => match triangulate::bowyer_watson(&hull.points) {
            Ok(triangles) => Some(MeshReport { triangles }),
            Err(GeometryError::InsufficientPoints) => None,
            Err(err) => return Err(err.into()),
        },
        None => None,
    };

    let summary = SceneSummary {
        timestamp: Utc::now(),
        shape_count: shapes.len(),
        collisions,
        distances,
        intersections,
        elevation,
        hull,
        mesh,
    };

    let default_dir = std::path::Path::new("reports");
    let output_dir = output_dir.unwrap_or(default_dir);
    summary.exporter().export_all(output_dir)?;

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use planar_core::{Circle, Line, Rectangle, Triangle};

    #[test]
    fn analyze_scene_pipeline() {
        let shapes = vec![
            Shape::Circle(Circle::new(Point2::new(9.0, 10.0), 5.0)),
            Shape::Triangle(Triangle::new(
                Point2::new(10.0, 10.0),
                Point2::new(20.0, 40.0),
                Point2::new(30.0, 10.0),
            )),
            Shape::Rectangle(Rectangle::new(Point2::new(31.0, 10.0), 10.0, 51.0)),
            Shape::Line(Line::new(Point2::new(-20.0, -20.0), Point2::new(20.0, 20.0))),
            Shape::Line(Line::new(Point2::new(-20.0, 20.0), Point2::new(20.0, -20.0))),
        ];

        let dir = tempfile::tempdir().unwrap();
        let summary = analyze_scene_with_options(
            &shapes,
            &AnalyzeOptions::default(),
            Some(dir.path()),
        )
        .unwrap();

        assert_eq!(summary.shape_count, 5);
        assert!(summary
            .collisions
            .pairs
            .iter()
            .any(|pair| (pair.first, pair.second) == (0, 1)));
        assert_eq!(summary.elevation.highest.as_ref().unwrap().index, 2);
        assert_eq!(summary.elevation.above_threshold, vec![2]);
        assert!(summary
            .intersections
            .hits
            .iter()
            .any(|hit| hit.point == Point2::new(0.0, 0.0)));
        assert_eq!(summary.distances.from_probe.len(), 5);

        let hull = summary.hull.as_ref().expect("hull exists");
        assert!(hull.points.len() >= 3);
        let mesh = summary.mesh.as_ref().expect("mesh exists");
        assert!(!mesh.triangles.is_empty());

        assert!(dir.path().join("collisions.json").exists());
        assert!(dir.path().join("distances.json").exists());
        assert!(dir.path().join("intersections.json").exists());
        assert!(dir.path().join("elevation.json").exists());
        assert!(dir.path().join("hull.json").exists());
        assert!(dir.path().join("mesh.json").exists());
    }
}
