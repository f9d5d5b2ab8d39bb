//! ---
//! planar_section: "02-analysis-reporting"
//! planar_subsection: "module"
//! planar_type: "source"
//! planar_scope: "code"
//! planar_description: "Analysis and reporting routines for planar scenes."
//! planar_version: "v0.1.0"
//! planar_owner: "tbd"
//! ---
use std::{fs, path::Path};

use planar_core::Shape;

use crate::errors::{AnalysisError, Result};

/// Load a scene from a JSON or YAML file; the format is sniffed from the
/// first non-whitespace character.
pub fn load_scene(path: impl AsRef<Path>) -> Result<Vec<Shape>> {
    let data = fs::read_to_string(path)?;
    let trimmed = data.trim_start();
    let scene = if trimmed.starts_with('[') || trimmed.starts_with('{') {
        serde_json::from_str(&data)?
    } else {
        serde_yaml::from_str(&data).map_err(AnalysisError::YamlSerializationFailed)?
    };
    Ok(scene)
}

/// Persist a scene as pretty-printed JSON.
pub fn save_scene(path: impl AsRef<Path>, shapes: &[Shape]) -> Result<()> {
    let serialized = serde_json::to_string_pretty(shapes)?;
    fs::write(path, serialized)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use planar_core::{Circle, Point2, Rectangle, Shape};

    #[test]
    fn scene_roundtrips_through_a_json_file() {
        let scene = vec![
            Shape::Circle(Circle::new(Point2::new(1.0, 2.0), 3.0)),
            Shape::Rectangle(Rectangle::new(Point2::new(0.0, 0.0), 4.0, 5.0)),
        ];
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.json");

        save_scene(&path, &scene).unwrap();
        let loaded = load_scene(&path).unwrap();
        assert_eq!(loaded, scene);
    }

    #[test]
    fn yaml_scenes_are_accepted() {
        let yaml = "- !Circle\n  center:\n    x: 1.0\n    y: 2.0\n  radius: 3.0\n";
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.yaml");
        fs::write(&path, yaml).unwrap();

        let loaded = load_scene(&path).unwrap();
        assert_eq!(
            loaded,
            vec![Shape::Circle(Circle::new(Point2::new(1.0, 2.0), 3.0))]
        );
    }
}
