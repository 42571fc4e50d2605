use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use metro_server::config::ServerConfig;
use metro_server::network::Network;
use metro_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env().expect("Invalid configuration");

    // Load the network (fail fast if it is malformed)
    let network = match &config.network_path {
        Some(path) => {
            info!(path = %path.display(), "loading network file");
            Network::load(path)
        }
        None => Network::metro(),
    }
    .expect("Failed to load network");

    info!(
        stations = network.graph().station_count(),
        connections = network.graph().edge_count(),
        "network loaded"
    );

    let state = AppState::new(network);
    let app = create_router(state, &config.static_dir);

    let listener = TcpListener::bind(config.addr)
        .await
        .expect("Failed to bind listen address");
    info!("Metro Route Finder listening on http://{}", config.addr);
    info!("API endpoints: GET /health, GET /api/stations, GET /api/route?from=&to=");

    axum::serve(listener, app).await.expect("Server error");
}
