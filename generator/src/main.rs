//! Client dataset generator
//!
//! Builds the mock client population and writes it to CSV.

use std::path::PathBuf;

use clap::Parser;
use clientgen::config::{DEFAULT_OUTPUT_PATH, DEFAULT_POPULATION_SIZE, DEFAULT_RATIO};
use clientgen::{write_clients, BrazilianProvider, GenerationConfig, PopulationBuilder};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "clientgen", about = "Generate a mock Brazilian client dataset", version)]
struct Cli {
    /// Number of person records
    #[arg(short = 'n', long, default_value_t = DEFAULT_POPULATION_SIZE)]
    population_size: u32,

    /// People generated per company
    #[arg(short, long, default_value_t = DEFAULT_RATIO)]
    ratio: u32,

    /// Destination CSV file
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Seed for reproducible datasets
    #[arg(long)]
    seed: Option<u64>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = GenerationConfig::new(cli.population_size, cli.ratio)?;
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    info!(
        "Generating {} clients ({} people, {} companies)...",
        config.total_count(),
        config.people_count(),
        config.company_count()
    );
    let start = std::time::Instant::now();

    let builder = PopulationBuilder::new(BrazilianProvider::new());
    let mut clients = builder.build(&config, &mut rng);
    write_clients(&mut clients, &cli.output, &mut rng)?;

    info!("Done in {:?}", start.elapsed());
    Ok(())
}
