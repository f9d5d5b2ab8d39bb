//! ---
//! planar_section: "04-control-cli"
//! planar_subsection: "binary"
//! planar_type: "source"
//! planar_scope: "code"
//! planar_description: "Control CLI for planar scene generation and analysis."
//! planar_version: "v0.1.0"
//! planar_owner: "tbd"
//! ---
use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt as subscriber_fmt, prelude::*, EnvFilter, Registry};

mod analyze;
mod generate;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Planar scene generation and analysis utility",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Generate a randomized scene file")]
    Generate(generate::GenerateArgs),
    #[command(about = "Analyze a scene, exporting reports and plots")]
    Analyze(analyze::AnalyzeArgs),
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::Generate(args) => generate::run(args)?,
        Commands::Analyze(args) => analyze::run(args)?,
    }
    Ok(())
}

fn init_tracing() {
    let _ = Registry::default()
        .with(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(subscriber_fmt::layer())
        .try_init();
}
