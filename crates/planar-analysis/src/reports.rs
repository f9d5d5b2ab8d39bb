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

use serde::Serialize;
use serde_json::json;
use tracing::info;

use crate::{errors::Result, SceneSummary};

#[derive(Debug)]
pub struct ReportExporter<'a> {
    summary: &'a SceneSummary,
}

impl<'a> ReportExporter<'a> {
    pub fn new(summary: &'a SceneSummary) -> Self {
        Self { summary }
    }

    pub fn export_all(&self, output_dir: &Path) -> Result<()> {
        if !output_dir.exists() {
            fs::create_dir_all(output_dir)?;
        }

        let timestamp = self.summary.timestamp.to_rfc3339();
        let shape_count = self.summary.shape_count;

        write_json(
            output_dir.join("collisions.json"),
            &ReportEnvelope::new(
                &timestamp,
                shape_count,
                collision_schema(),
                &self.summary.collisions,
            ),
        )?;
        write_json(
            output_dir.join("distances.json"),
            &ReportEnvelope::new(
                &timestamp,
                shape_count,
                distance_schema(),
                &self.summary.distances,
            ),
        )?;
        write_json(
            output_dir.join("intersections.json"),
            &ReportEnvelope::new(
                &timestamp,
                shape_count,
                intersection_schema(),
                &self.summary.intersections,
            ),
        )?;
        write_json(
            output_dir.join("elevation.json"),
            &ReportEnvelope::new(
                &timestamp,
                shape_count,
                elevation_schema(),
                &self.summary.elevation,
            ),
        )?;

        if let Some(hull) = &self.summary.hull {
            write_json(
                output_dir.join("hull.json"),
                &ReportEnvelope::new(&timestamp, shape_count, hull_schema(), hull),
            )?;
        }
        if let Some(mesh) = &self.summary.mesh {
            write_json(
                output_dir.join("mesh.json"),
                &ReportEnvelope::new(&timestamp, shape_count, mesh_schema(), mesh),
            )?;
        }

        info!("Reports exported to {}", output_dir.display());
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct ReportEnvelope<'a, T: Serialize> {
    timestamp: &'a str,
    shape_count: usize,
    schema: serde_json::Value,
    data: &'a T,
}

impl<'a, T: Serialize> ReportEnvelope<'a, T> {
    fn new(
        timestamp: &'a str,
        shape_count: usize,
        schema: serde_json::Value,
        data: &'a T,
    ) -> Self {
        Self {
            timestamp,
            shape_count,
            schema,
            data,
        }
    }
}

fn write_json<T: Serialize>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let serialized = serde_json::to_string_pretty(value)?;
    fs::write(path, serialized)?;
    Ok(())
}

fn point_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {"x": {"type": "number"}, "y": {"type": "number"}},
        "required": ["x", "y"]
    })
}

fn collision_schema() -> serde_json::Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "CollisionReport",
        "type": "object",
        "properties": {
            "pairs": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "first": {"type": "integer"},
                        "second": {"type": "integer"},
                        "first_kind": {"type": "string"},
                        "second_kind": {"type": "string"}
                    },
                    "required": ["first", "second", "first_kind", "second_kind"]
                }
            }
        },
        "required": ["pairs"],
    })
}

fn distance_schema() -> serde_json::Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "DistanceReport",
        "type": "object",
        "properties": {
            "probe": point_schema(),
            "from_probe": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "index": {"type": "integer"},
                        "kind": {"type": "string"},
                        "distance": {"type": "number"}
                    },
                    "required": ["index", "kind", "distance"]
                }
            },
            "between_pairs": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "first": {"type": "integer"},
                        "second": {"type": "integer"},
                        "distance": {"type": "number"}
                    },
                    "required": ["first", "second", "distance"]
                }
            }
        },
        "required": ["probe", "from_probe", "between_pairs"]
    })
}

fn intersection_schema() -> serde_json::Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "IntersectionReport",
        "type": "object",
        "properties": {
            "hits": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "first": {"type": "integer"},
                        "second": {"type": "integer"},
                        "point": point_schema()
                    },
                    "required": ["first", "second", "point"]
                }
            },
            "disjoint_supported_pairs": {"type": "integer"}
        },
        "required": ["hits", "disjoint_supported_pairs"]
    })
}

fn elevation_schema() -> serde_json::Value {
    let extent = json!({
        "type": ["object", "null"],
        "properties": {
            "index": {"type": "integer"},
            "kind": {"type": "string"},
            "height": {"type": "number"},
            "top": {"type": "number"}
        },
        "required": ["index", "kind", "height", "top"]
    });
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "ElevationReport",
        "type": "object",
        "properties": {
            "threshold": {"type": "number"},
            "highest": extent.clone(),
            "lowest": extent,
            "above_threshold": {"type": "array", "items": {"type": "integer"}}
        },
        "required": ["threshold", "above_threshold"]
    })
}

fn hull_schema() -> serde_json::Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "HullReport",
        "type": "object",
        "properties": {
            "points": {"type": "array", "items": point_schema()}
        },
        "required": ["points"]
    })
}

fn mesh_schema() -> serde_json::Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "MeshReport",
        "type": "object",
        "properties": {
            "triangles": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "a": point_schema(),
                        "b": point_schema(),
                        "c": point_schema()
                    },
                    "required": ["a", "b", "c"]
                }
            }
        },
        "required": ["triangles"]
    })
}
