//! strided — Stride calorie-estimation daemon.

use anyhow::Result;

use stride_api::ApiState;
use stride_core::config::StrideConfig;
use stride_services::WorkoutStore;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load config
    if let Err(e) = StrideConfig::write_default_if_missing() {
        tracing::warn!(error = %e, "failed to write default config");
    }
    let config = StrideConfig::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to load config, using defaults");
        StrideConfig::default()
    });

    tracing::info!(
        bind = %config.server.bind,
        port = config.server.port,
        "strided starting"
    );

    // Shared state — the store is constructed once and injected, never global.
    let workouts = WorkoutStore::new();
    let state = ApiState::new(workouts);

    let api_task = {
        let bind = config.server.bind.clone();
        let port = config.server.port;
        tokio::spawn(async move {
            if let Err(e) = stride_api::serve(state, &bind, port).await {
                tracing::error!(error = %e, "api server failed");
            }
        })
    };

    tokio::select! {
        _ = tokio::signal::ctrl_c() => tracing::info!("shutdown signal received"),
        r = api_task => tracing::error!("api task exited: {:?}", r),
    }

    Ok(())
}
