use std::io::{self, Write};

use clap::Parser;
use tracing::info;

use greedy_vrp::generate::{format_load, random_loads};

/// Print a random load file.
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Number of loads
    #[arg(short = 'n', long)]
    count: usize,

    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Coordinates are drawn from [-extent, extent]
    #[arg(short, long, default_value_t = 100.0, value_parser = parse_extent)]
    extent: f64,
}

fn parse_extent(s: &str) -> Result<f64, String> {
    let extent: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if extent.is_finite() {
        Ok(extent)
    } else {
        Err(format!("extent must be a finite number, got '{s}'"))
    }
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let loads = random_loads(cli.count, cli.extent, cli.seed);

    let mut out = io::stdout().lock();
    writeln!(out, "loadNumber pickup dropoff")?;
    for load in &loads {
        writeln!(out, "{}", format_load(load))?;
    }
    out.flush()?;

    info!("generated {} loads with seed {}", loads.len(), cli.seed);
    Ok(())
}
