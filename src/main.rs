// main.rs - Command-line front end: read a grid, evolve it, write the result

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use rnumber_engine::{run_with, Grid, RunConfig, DEFAULT_GENERATIONS, DEFAULT_WORKERS};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "rnumber")]
#[command(version)]
#[command(about = "Evolves a toroidal grid of weighted cells and writes the final generation", long_about = None)]
struct Args {
    /// Grid file to read
    #[arg(short, long, value_name = "FILE", required_unless_present = "random")]
    input: Option<PathBuf>,

    /// Where to write the final grid
    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,

    /// Number of parallel workers per generation
    #[arg(short, long, value_name = "N", default_value_t = DEFAULT_WORKERS, value_parser = parse_positive)]
    processes: usize,

    /// Number of generations to run
    #[arg(short, long, value_name = "N", default_value_t = DEFAULT_GENERATIONS,
          value_parser = clap::value_parser!(u32).range(1..))]
    generations: u32,

    /// Start from a seeded random grid instead of a file, e.g. 40x60
    #[arg(long, value_name = "ROWSxCOLS", conflicts_with = "input", value_parser = parse_dimensions)]
    random: Option<(usize, usize)>,

    /// Seed for --random
    #[arg(long, default_value_t = 0, requires = "random")]
    seed: u32,

    /// Fingerprint every generation and report the first repeated state
    #[arg(long)]
    track_repeats: bool,
}

fn parse_positive(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

fn parse_dimensions(s: &str) -> Result<(usize, usize), String> {
    let (rows, cols) = s.split_once(['x', 'X']).ok_or("expected ROWSxCOLS")?;
    Ok((parse_positive(rows.trim())?, parse_positive(cols.trim())?))
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rnumber=info,rnumber_engine=info,grid_codec=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// The output file's directory has to exist already; an empty parent means `.`.
fn check_output_dir(output: &Path) -> Result<()> {
    let dir = output
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    if !dir.is_dir() {
        bail!("output directory {} does not exist", dir.display());
    }
    Ok(())
}

fn load_grid(args: &Args) -> Result<Grid> {
    if let Some((rows, cols)) = args.random {
        info!(rows, cols, seed = args.seed, "using seeded random grid");
        return Grid::seeded(rows, cols, args.seed).context("cannot build random grid");
    }
    match &args.input {
        Some(path) => grid_codec::read_grid(path).with_context(|| format!("cannot load grid from {}", path.display())),
        None => bail!("no input grid given"),
    }
}

fn main() -> Result<()> {
    init_tracing();
    println!("Project :: RNUMBER");

    let args = Args::parse();
    let config = RunConfig {
        track_repeats: args.track_repeats,
        ..RunConfig::new(args.generations, args.processes)?
    };

    check_output_dir(&args.output)?;
    let grid = load_grid(&args)?;

    let summary = run_with(grid, &config).context("simulation aborted")?;

    grid_codec::write_grid(&args.output, &summary.grid)
        .with_context(|| format!("cannot write grid to {}", args.output.display()))?;
    info!(output = %args.output.display(), "final grid written");
    Ok(())
}
