use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use metro_ride::catalog::StationCatalog;
use metro_ride::config::ServerConfig;
use metro_ride::fares::FareTable;
use metro_ride::web::{AppState, create_router};

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "metro_ride=info,tower_http=info";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let catalog = match StationCatalog::embedded() {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("failed to load station catalog: {e}");
            return ExitCode::FAILURE;
        }
    };

    let fares = match FareTable::embedded() {
        Ok(fares) => fares,
        Err(e) => {
            error!("failed to load fare table: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!(stations = catalog.len(), "loaded network");

    let addr = config.bind_addr;
    let state = AppState::new(catalog, fares, config);
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("failed to bind {addr}: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!("metro-ride listening on http://{addr}");
    info!("  GET  /health                   - Health check");
    info!("  GET  /lines                    - Lines and station counts");
    info!("  GET  /lines/:line/stations     - Stations on a line");
    info!("  GET  /stations/nearest         - Nearest station to lat/lon");
    info!("  GET  /fares                    - Price a trip");
    info!("  GET  /tickets, POST /tickets   - Ticket ledger and purchase");

    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
