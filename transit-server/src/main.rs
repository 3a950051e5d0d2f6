use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use transit_server::config::AppConfig;
use transit_server::directions::{DirectionsClient, DirectionsConfig};
use transit_server::gtfs::{GtfsClient, GtfsConfig};
use transit_server::places::{PlacesClient, PlacesConfig};
use transit_server::realtime::{CurlbusClient, CurlbusConfig};
use transit_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    let directions = DirectionsClient::new(DirectionsConfig::new(&config.google_api_key))
        .expect("Failed to create directions client");
    let places = PlacesClient::new(PlacesConfig::new(&config.google_api_key))
        .expect("Failed to create places client");
    let gtfs = GtfsClient::new(GtfsConfig::new()).expect("Failed to create GTFS client");
    let curlbus = CurlbusClient::new(CurlbusConfig::new()).expect("Failed to create curlbus client");

    let state = AppState::new(directions, places, gtfs, curlbus, config.max_routes);
    let app = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Transit route server listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET /health  - Health check");
    println!("  GET /route   - Real-time transit routes (origin, destination)");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
