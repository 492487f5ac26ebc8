use anyhow::Context;
use clap::Parser;
use school_ranker::domain::ports::Geocoder;
use school_ranker::utils::logger;
use school_ranker::{GoogleMapsClient, RankerConfig};

#[derive(Parser)]
#[command(name = "geocode")]
#[command(about = "Print the coordinates Google Maps assigns to an address")]
struct Args {
    /// Address to look up
    address: String,

    /// Path to TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let config = match &args.config {
        Some(path) => RankerConfig::from_file(path)
            .with_context(|| format!("Failed to load config file '{}'", path))?,
        None => RankerConfig::default(),
    }
    .with_env_credentials();

    let api_key = config
        .api_key()
        .context("Set GOOGLE_MAPS_API_KEY or resolver.api_key")?;
    let client = GoogleMapsClient::new(&config.resolver, api_key)?;

    tracing::debug!("Geocoding: {}", args.address);
    match client.geocode(&args.address).await? {
        Some(coords) => println!("{}, {}", coords.lat, coords.lng),
        None => println!("No coordinates found for '{}'", args.address),
    }

    Ok(())
}
