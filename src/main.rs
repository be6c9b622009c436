//! Records API server.
//!
//! # Environment Variables
//!
//! - `HOST`: Server host address (default: `0.0.0.0`)
//! - `PORT`: Server port (default: `8000`)
//! - `SEED_FIXTURES`: Start with the fixture tasks and users (default: `true`)
//! - `LOG_FORMAT`: `pretty` (default) | `json`
//! - `RUST_LOG`: Logging level (e.g., `debug`, `info`, `records_api=debug`)

use records_api::api::{AppState, create_router};
use records_api::infrastructure::AppConfig;
use records_api::server::Server;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    tracing::info!("Starting Records API");

    let config = AppConfig::from_env().inspect_err(|error| {
        tracing::error!(%error, "Configuration error");
    })?;

    tracing::info!(
        host = %config.host,
        port = config.port,
        seed_fixtures = config.seed_fixtures,
        "Configuration loaded"
    );

    let state = if config.seed_fixtures {
        AppState::seeded()
    } else {
        AppState::empty()
    };

    let router = create_router(state);

    Server::new(config)
        .run(router)
        .await
        .inspect_err(|error| tracing::error!(%error, "Server error"))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("records_api=debug,tower_http=debug,info"));

    let json = std::env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(env_filter);
    if json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer().with_target(true)).init();
    }
}
