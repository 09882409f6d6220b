pub mod handlers;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub use handlers::ApiState;

/// Build the full application router. Exposed separately from [`serve`] so
/// tests can mount it on an ephemeral listener.
pub fn router(state: ApiState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/health", get(handlers::handle_health))
        .route("/status", get(handlers::handle_status))
        .route("/kcal/activity", post(handlers::handle_estimate))
        .route("/workouts/start", post(handlers::handle_workout_start))
        .route("/workouts/{id}/update", post(handlers::handle_workout_update))
        .route("/workouts/{id}", get(handlers::handle_workout_get))
        .route("/workouts/{id}/end", post(handlers::handle_workout_end))
        .with_state(state);

    Router::new().nest("/api", api_routes).layer(cors)
}

pub async fn serve(state: ApiState, bind: &str, port: u16) -> anyhow::Result<()> {
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", bind, port)).await?;
    tracing::info!(bind, port, "API listening");
    axum::serve(listener, app).await?;
    Ok(())
}
