//! ---
//! planar_section: "02-analysis-reporting"
//! planar_subsection: "module"
//! planar_type: "source"
//! planar_scope: "code"
//! planar_description: "Analysis and reporting routines for planar scenes."
//! planar_version: "v0.1.0"
//! planar_owner: "tbd"
//! ---
use std::fmt::Write as _;
use std::{fs, path::Path};

use planar_core::{Polyline, Shape};
use tracing::info;

use crate::errors::Result;
use crate::triangulate::MeshTriangle;

/// Outline color per shape kind.
pub fn shape_color(kind: &str) -> &'static str {
    match kind {
        "line" => "yellow",
        "triangle" => "blue",
        "rectangle" => "green",
        "regular-polygon" => "magenta",
        "circle" => "red",
        _ => "cyan",
    }
}

/// Render a scene as a self-contained gnuplot script: equal axis ratio,
/// grid, one colored outline per shape, and each shape's index printed at
/// its center.
pub fn scene_script(shapes: &[Shape]) -> String {
    let mut script = String::from("# planar scene\n");
    for (index, shape) in shapes.iter().enumerate() {
        data_block(&mut script, &format!("shape{index}"), &shape.polyline());
    }

    push_common_settings(&mut script);
    for (index, shape) in shapes.iter().enumerate() {
        let center = shape.center();
        let _ = writeln!(
            script,
            "set label \"{index}\" at {:.2},{:.2} center font \",14\" tc rgb 'black'",
            center.x, center.y
        );
    }

    if shapes.is_empty() {
        return script;
    }

    let plot_parts: Vec<String> = shapes
        .iter()
        .enumerate()
        .map(|(index, shape)| {
            format!(
                "$shape{index} with lines lw 2 lc rgb '{}'",
                shape_color(shape.kind())
            )
        })
        .collect();
    let _ = writeln!(script, "plot {}", plot_parts.join(", \\\n     "));
    script
}

/// Render a triangulation as a gnuplot script, each triangle outlined in
/// cyan and numbered at its center.
pub fn mesh_script(triangles: &[MeshTriangle]) -> String {
    let mut script = String::from("# planar mesh\n");
    for (index, tri) in triangles.iter().enumerate() {
        let mut outline = Polyline::with_capacity(4);
        outline.push(tri.a);
        outline.push(tri.b);
        outline.push(tri.c);
        outline.push(tri.a);
        data_block(&mut script, &format!("tri{index}"), &outline);
    }

    push_common_settings(&mut script);
    for (index, tri) in triangles.iter().enumerate() {
        let center = tri.center();
        let _ = writeln!(
            script,
            "set label \"{index}\" at {:.2},{:.2} center font \",14\" tc rgb 'black'",
            center.x, center.y
        );
    }

    if triangles.is_empty() {
        return script;
    }

    let plot_parts: Vec<String> = (0..triangles.len())
        .map(|index| format!("$tri{index} with lines lw 2 lc rgb 'cyan'"))
        .collect();
    let _ = writeln!(script, "plot {}", plot_parts.join(", \\\n     "));
    script
}

/// Write the scene plot (and the mesh plot when present) into `output_dir`.
pub fn export_plots(
    shapes: &[Shape],
    mesh: Option<&[MeshTriangle]>,
    output_dir: &Path,
) -> Result<()> {
    if !output_dir.exists() {
        fs::create_dir_all(output_dir)?;
    }

    fs::write(output_dir.join("scene.gp"), scene_script(shapes))?;
    if let Some(triangles) = mesh {
        fs::write(output_dir.join("mesh.gp"), mesh_script(triangles))?;
    }

    info!("Plots exported to {}", output_dir.display());
    Ok(())
}

fn push_common_settings(script: &mut String) {
    script.push_str("set size ratio -1\nset grid\nset key off\n");
}

fn data_block(script: &mut String, name: &str, outline: &Polyline) {
    let _ = writeln!(script, "${name} << EOD");
    for point in outline.points() {
        let _ = writeln!(script, "{} {}", point.x, point.y);
    }
    script.push_str("EOD\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use planar_core::{Circle, Point2, Shape, Triangle};

    #[test]
    fn scene_script_outlines_and_labels_every_shape() {
        let shapes = vec![
            Shape::Triangle(Triangle::new(
                Point2::new(0.0, 0.0),
                Point2::new(2.0, 0.0),
                Point2::new(1.0, 1.0),
            )),
            Shape::Circle(Circle::new(Point2::new(5.0, 5.0), 1.0)),
        ];

        let script = scene_script(&shapes);
        assert!(script.contains("$shape0 << EOD"));
        assert!(script.contains("$shape1 << EOD"));
        assert!(script.contains("lc rgb 'blue'"));
        assert!(script.contains("lc rgb 'red'"));
        assert!(script.contains("set label \"1\" at 5.00,5.00"));
        assert!(script.contains("set size ratio -1"));
    }

    #[test]
    fn empty_scene_script_has_no_plot_statement() {
        let script = scene_script(&[]);
        assert!(!script.contains("plot "));
    }

    #[test]
    fn plots_are_written_to_disk() {
        let shapes = vec![Shape::Circle(Circle::new(Point2::new(0.0, 0.0), 1.0))];
        let mesh = vec![MeshTriangle::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        )];
        let dir = tempfile::tempdir().unwrap();

        export_plots(&shapes, Some(mesh.as_slice()), dir.path()).unwrap();
        assert!(dir.path().join("scene.gp").exists());
        let script = fs::read_to_string(dir.path().join("mesh.gp")).unwrap();
        assert!(script.contains("lc rgb 'cyan'"));
    }
}
