//! radvis - visibility matrix precomputation for radiosity
//!
//! Reads a triangulated OBJ mesh, decides which patch pairs can exchange
//! light, and writes the symmetric 0/1 matrix as text.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use radvis_visibility::{build_matrix, BuildSettings};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;

use config::Config;

#[derive(Parser, Debug)]
#[command(name = "radvis")]
#[command(version, about = "Compute the patch visibility matrix of a triangle mesh", long_about = None)]
struct Cli {
    /// Input mesh (.obj, triangles only)
    input: PathBuf,

    /// Output matrix file
    output: PathBuf,

    /// Worker threads (default: all available cores)
    #[arg(short = 'j', long)]
    threads: Option<usize>,

    /// Minimum rows handed to a worker at a time
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    chunk_size: Option<u64>,

    /// TOML config file with a [visibility] table
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    /// Merge the config file (if any) with command-line overrides.
    fn settings(&self) -> Result<BuildSettings> {
        let config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        let mut settings = config.visibility;
        if let Some(threads) = self.threads {
            settings.threads = Some(threads);
        }
        if let Some(chunk_size) = self.chunk_size {
            settings.chunk_size =
                usize::try_from(chunk_size).context("chunk size does not fit in memory")?;
        }
        Ok(settings)
    }

    fn log_level(&self) -> &'static str {
        if self.quiet {
            return "warn";
        }
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` wins over the verbosity flags.
fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let settings = cli.settings()?;
    compute(&cli.input, &cli.output, &settings)
}

fn compute(input: &Path, output: &Path, settings: &BuildSettings) -> Result<()> {
    let mesh = radvis_mesh::read_obj(input)?;
    if mesh.is_empty() {
        warn!(path = %input.display(), "mesh has no faces");
    }

    let matrix = build_matrix(&mesh, settings).context("failed to compute visibility")?;

    info!(path = %output.display(), "writing results");
    matrix
        .save(output)
        .with_context(|| format!("error writing {}", output.display()))?;
    info!(
        size = matrix.size(),
        visible_pairs = matrix.visible_pair_count(),
        "done"
    );
    Ok(())
}
