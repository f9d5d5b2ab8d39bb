//! ---
//! planar_section: "04-control-cli"
//! planar_subsection: "binary"
//! planar_type: "source"
//! planar_scope: "code"
//! planar_description: "Control CLI for planar scene generation and analysis."
//! planar_version: "v0.1.0"
//! planar_owner: "tbd"
//! ---
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use planar_analysis::{
    analyze_scene_with_options, io as scene_io, plot, AnalyzeOptions, SceneSummary,
};
use planar_core::{Point2, Polygon, Shape};
use planar_scene::{GeneratorRanges, ShapeGenerator};

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Scene file to analyze (JSON or YAML). Omit to synthesize a scene.
    #[arg(long)]
    pub scene: Option<PathBuf>,

    /// Number of shapes to synthesize when no scene file is given
    #[arg(long, default_value_t = 15)]
    pub count: usize,

    /// Random seed for the synthesized scene
    #[arg(long, default_value_t = 20)]
    pub seed: u64,

    /// Probe point for the distance queries, as "x,y"
    #[arg(long, value_parser = parse_point, default_value = "10,10")]
    pub probe_point: Point2,

    /// Shapes reaching above this height are reported as elevated
    #[arg(long, default_value_t = 50.0)]
    pub threshold: f64,

    /// Directory receiving the JSON reports
    #[arg(long, default_value = "reports")]
    pub reports_dir: PathBuf,

    /// Directory receiving gnuplot scripts; omit to skip plotting
    #[arg(long)]
    pub plots_dir: Option<PathBuf>,
}

fn parse_point(value: &str) -> Result<Point2, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| String::from("expected a point as \"x,y\""))?;
    let x: f64 = x.trim().parse().map_err(|err| format!("bad x coordinate: {err}"))?;
    let y: f64 = y.trim().parse().map_err(|err| format!("bad y coordinate: {err}"))?;
    Ok(Point2::new(x, y))
}

pub fn run(args: AnalyzeArgs) -> Result<()> {
    let shapes = match &args.scene {
        Some(path) => scene_io::load_scene(path)
            .with_context(|| format!("unable to load scene {}", path.display()))?,
        None => {
            let ranges = GeneratorRanges {
                min_coord: -50.0,
                max_coord: 50.0,
                min_size: 5.0,
                max_size: 25.0,
            };
            let mut generator = ShapeGenerator::new(ranges, args.seed)
                .context("unable to build the shape generator")?;
            generator.generate(args.count)
        }
    };

    let options = AnalyzeOptions {
        probe_point: args.probe_point,
        elevation_threshold: args.threshold,
    };
    let summary =
        analyze_scene_with_options(&shapes, &options, Some(args.reports_dir.as_path()))?;

    if let Some(plots_dir) = &args.plots_dir {
        // Plot the scene with its hull outline appended, plus the mesh.
        let mut plotted = shapes.clone();
        if let Some(hull) = &summary.hull {
            plotted.push(Shape::Polygon(Polygon::new(hull.points.clone())));
        }
        let mesh = summary.mesh.as_ref().map(|m| m.triangles.as_slice());
        plot::export_plots(&plotted, mesh, plots_dir)?;
    }

    print_summary(&shapes, &options, &summary);
    Ok(())
}

fn print_summary(shapes: &[Shape], options: &AnalyzeOptions, summary: &SceneSummary) {
    println!("Analyzed {} shapes", summary.shape_count);
    println!("\n=== Shapes ===");
    for (index, shape) in shapes.iter().enumerate() {
        println!(
            "{index:>3}: {shape}  (height {:.2})",
            shape.bounding_box().height()
        );
    }

    println!("\n=== Intersections ===");
    for hit in &summary.intersections.hits {
        println!(
            "Intersection found at {} between shapes {} and {}",
            hit.point, hit.first, hit.second
        );
    }
    println!(
        "{} supported pairs do not intersect",
        summary.intersections.disjoint_supported_pairs
    );

    println!("\n=== Distances from {} ===", options.probe_point);
    for probe in summary.distances.from_probe.iter().take(5) {
        println!(
            "Distance from {} to shape {} ({}) is {:.2}",
            options.probe_point, probe.index, probe.kind, probe.distance
        );
    }
    for pair in &summary.distances.between_pairs {
        println!(
            "Distance between shapes {} and {} is {:.2}",
            pair.first, pair.second, pair.distance
        );
    }

    println!("\n=== Scene analysis ===");
    println!("{} bounding-box collisions", summary.collisions.pairs.len());
    for pair in &summary.collisions.pairs {
        println!(
            "Shapes {} ({}) and {} ({}) may collide",
            pair.first, pair.first_kind, pair.second, pair.second_kind
        );
    }
    if let Some(highest) = &summary.elevation.highest {
        println!(
            "Highest shape is {} ({}) with height {:.2}",
            highest.index, highest.kind, highest.height
        );
    }
    if let Some(lowest) = &summary.elevation.lowest {
        println!(
            "Lowest shape is {} ({}) with height {:.2}",
            lowest.index, lowest.kind, lowest.height
        );
    }
    println!(
        "{} shapes reach above {:.1}: {:?}",
        summary.elevation.above_threshold.len(),
        summary.elevation.threshold,
        summary.elevation.above_threshold
    );

    match &summary.hull {
        Some(hull) => println!("\nConvex hull has {} vertices", hull.points.len()),
        None => println!("\nScene is too small for a convex hull"),
    }
    if let Some(mesh) = &summary.mesh {
        println!("Delaunay mesh has {} triangles", mesh.triangles.len());
        for triangle in &mesh.triangles {
            println!("  {triangle}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_point_accepts_comma_separated_coordinates() {
        assert_eq!(parse_point("10,10").unwrap(), Point2::new(10.0, 10.0));
        assert_eq!(parse_point(" -1.5 , 2 ").unwrap(), Point2::new(-1.5, 2.0));
    }

    #[test]
    fn parse_point_rejects_malformed_input() {
        assert!(parse_point("10").is_err());
        assert!(parse_point("a,b").is_err());
        assert!(parse_point("1;2").is_err());
    }
}
