use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use journey_planner::cache::{CacheConfig, CachedGeocoder};
use journey_planner::geocode::{NominatimClient, NominatimConfig};
use journey_planner::maps::{GoogleMapsClient, MapsConfig};
use journey_planner::planner::{
    JourneyComposer, JourneyRequest, PlanError, PlannedJourney, PlannerConfig, RandomPicker,
};

/// Plan a drive that fills a given amount of time with stops along the way.
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Google Maps Platform API key
    #[arg(long, env = "GOOGLE_MAPS_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Where the journey starts
    #[arg(short, long)]
    start: String,

    /// Where the journey ends (default: back at the start)
    #[arg(short, long)]
    end: Option<String>,

    /// Journey length in minutes
    #[arg(short, long, default_value_t = 60)]
    length: u32,

    /// Seed for a reproducible choice of stops
    #[arg(long)]
    seed: Option<u64>,

    /// Place types to stop at (repeatable, default: tourist_attraction)
    #[arg(long = "place-type")]
    place_types: Vec<String>,

    /// Maximum number of stops (at most 8)
    #[arg(long)]
    max_stops: Option<usize>,

    /// Avoid toll roads where possible
    #[arg(long)]
    avoid_tolls: bool,

    /// Avoid motorways where possible
    #[arg(long)]
    avoid_highways: bool,

    /// Avoid ferries where possible
    #[arg(long)]
    avoid_ferries: bool,

    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run(cli).await {
        Ok(journey) => {
            print_journey(&journey);
            ExitCode::SUCCESS
        }
        Err(e) => {
            if e.is_forbidden() {
                error!("check that the API key is valid and the Maps APIs are enabled for it");
            }
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<PlannedJourney, PlanError> {
    let maps_config = MapsConfig::new(&cli.api_key).with_avoidances(
        cli.avoid_tolls,
        cli.avoid_highways,
        cli.avoid_ferries,
    );
    let maps = GoogleMapsClient::new(maps_config)?;

    let nominatim = NominatimClient::new(NominatimConfig::default())?;
    let geocoder = CachedGeocoder::new(nominatim, &CacheConfig::default());

    let mut config = PlannerConfig::default();
    if !cli.place_types.is_empty() {
        config = config.with_place_types(cli.place_types);
    }
    if let Some(n) = cli.max_stops {
        config = config.with_max_waypoints(n);
    }

    let duration_secs = cli.length.saturating_mul(60);
    let request = match cli.end {
        Some(end) => JourneyRequest::new(cli.start, end, duration_secs),
        None => JourneyRequest::round_trip(cli.start, duration_secs),
    };

    let mut picker = match cli.seed {
        Some(seed) => RandomPicker::seeded(seed),
        None => RandomPicker::from_entropy(),
    };

    info!(
        start = %request.start,
        end = %request.end,
        minutes = cli.length,
        "planning journey"
    );

    JourneyComposer::new(&geocoder, &maps, &config)
        .plan(&request, &mut picker)
        .await
}

fn print_journey(journey: &PlannedJourney) {
    let route = &journey.route;
    println!(
        "Distance: {:.1} km",
        f64::from(route.distance_meters) / 1000.0
    );
    println!(
        "Duration: {}h {:02}m",
        route.duration_seconds / 3600,
        (route.duration_seconds % 3600) / 60
    );
    println!();
    println!("Stops:");
    for (i, stop) in journey.stops.iter().enumerate() {
        println!(
            "  {}. {} ({}) - {} min from previous",
            i + 1,
            stop.place.label(),
            stop.coordinate,
            stop.travel_secs / 60
        );
    }
    println!();
    println!("Encoded path: {}", route.encoded_path);
}
