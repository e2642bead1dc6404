use std::env;

use severance_engine::api::{AppState, create_router};
use severance_engine::config::ConfigLoader;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if env_bool("SEVERANCE_LOG_JSON", false) {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn wait_for_shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    init_tracing();

    let config_dir = env::var("SEVERANCE_CONFIG_DIR").unwrap_or_else(|_| "./config/py".to_string());
    let bind_addr =
        env::var("SEVERANCE_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());

    let config = ConfigLoader::load(&config_dir)
        .map_err(|e| format!("failed to load configuration from {config_dir}: {e}"))?;
    info!(
        statute = %config.statute().code,
        version = %config.statute().version,
        probation_days = config.limits().probation_days,
        "configuration loaded from {config_dir}"
    );

    let app = create_router(AppState::new(config));

    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| format!("bind failed on {bind_addr}: {e}"))?;
    info!("severance-engine listening on {bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await
        .map_err(|e| format!("server failed: {e}"))?;

    info!("severance-engine stopped");
    Ok(())
}
