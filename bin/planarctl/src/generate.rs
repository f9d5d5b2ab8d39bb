//! ---
//! planar_section: "04-control-cli"
//! planar_subsection: "binary"
//! planar_type: "source"
//! planar_scope: "code"
//! planar_description: "Control CLI for planar scene generation and analysis."
//! planar_version: "v0.1.0"
//! planar_owner: "tbd"
//! ---
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use planar_analysis::io as scene_io;
use planar_scene::{GeneratorRanges, ShapeGenerator};

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Number of shapes to synthesize
    #[arg(long, default_value_t = 15)]
    pub count: usize,

    /// Random seed for the generator
    #[arg(long, default_value_t = 20)]
    pub seed: u64,

    /// Lower bound for shape anchor coordinates
    #[arg(long, default_value_t = -50.0)]
    pub min_coord: f64,

    /// Upper bound for shape anchor coordinates
    #[arg(long, default_value_t = 50.0)]
    pub max_coord: f64,

    /// Smallest shape extent
    #[arg(long, default_value_t = 5.0)]
    pub min_size: f64,

    /// Largest shape extent
    #[arg(long, default_value_t = 25.0)]
    pub max_size: f64,

    /// Output file path. Use '-' for stdout.
    #[arg(long, default_value = "scene.json")]
    pub output: PathBuf,
}

impl GenerateArgs {
    pub fn ranges(&self) -> GeneratorRanges {
        GeneratorRanges {
            min_coord: self.min_coord,
            max_coord: self.max_coord,
            min_size: self.min_size,
            max_size: self.max_size,
        }
    }
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let mut generator = ShapeGenerator::new(args.ranges(), args.seed)
        .context("unable to build the shape generator")?;
    let shapes = generator.generate(args.count);

    if args.output.as_os_str() == "-" {
        let mut stdout = io::stdout().lock();
        serde_json::to_writer_pretty(&mut stdout, &shapes)?;
        stdout.write_all(b"\n")?;
    } else {
        scene_io::save_scene(&args.output, &shapes)
            .with_context(|| format!("failed to write scene file {}", args.output.display()))?;
        eprintln!(
            "generated {} shapes (seed {}) -> {}",
            shapes.len(),
            args.seed,
            args.output.display()
        );
    }

    Ok(())
}
