use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use tracing::{debug, info};

use greedy_vrp::catalog::Catalog;
use greedy_vrp::config::{RoutingConfig, DEFAULT_MAX_ROUTE_TIME};
use greedy_vrp::constructive::{nearest_neighbor, ConstructionPolicy};
use greedy_vrp::evaluation::RouteEvaluator;
use greedy_vrp::output;

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Plain,
    Json,
}

/// Plan routes for a load file, one bracketed line of load IDs per driver.
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Load file, one `<id> (<x>,<y>) (<x>,<y>)` record per line
    input: PathBuf,

    /// Maximum travel time of a route, depot to depot
    #[arg(long, env = "GREEDY_VRP_MAX_ROUTE_TIME", default_value_t = DEFAULT_MAX_ROUTE_TIME)]
    max_route_time: f64,

    /// Neighbor selection policy (chained or pickup-proximity)
    #[arg(long, default_value_t = ConstructionPolicy::Chained)]
    policy: ConstructionPolicy,

    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,

    /// Recheck the routes and fail if any violates the budget or coverage
    #[arg(long)]
    verify: bool,

    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(io::stderr)
        .init();

    let config = RoutingConfig::default()
        .with_max_route_time(cli.max_route_time)
        .with_policy(cli.policy);
    debug!("{:?}", config);

    let catalog = Catalog::from_path(&cli.input)
        .with_context(|| format!("error parsing the file {}", cli.input.display()))?;
    info!("{} loads read from {}", catalog.len(), cli.input.display());

    let solution = nearest_neighbor(&catalog, &config)?;

    if cli.verify {
        let evaluator = RouteEvaluator::new(&catalog, config.max_route_time());
        let (_, violations) = evaluator.evaluate_solution(&solution);
        if !violations.is_empty() {
            for v in &violations {
                tracing::error!("{:?}", v.kind);
            }
            bail!("{} violations found", violations.len());
        }
        info!("solution verified");
    }

    match cli.format {
        OutputFormat::Plain => output::write_plain(io::stdout().lock(), &solution)?,
        OutputFormat::Json => println!("{}", output::to_json(&solution)?),
    }

    Ok(())
}
