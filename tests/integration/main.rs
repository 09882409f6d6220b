//! Stride integration test harness.
//!
//! Each test spawns the full axum router on an ephemeral loopback port and
//! drives it over real HTTP with reqwest:
//!
//!   cargo test --test integration
//!
//! Tests own their server instance — state never leaks between them.

use anyhow::Result;
use serde_json::Value;

use stride_api::ApiState;
use stride_services::WorkoutStore;

mod estimate;
mod workouts;

// ── Harness ───────────────────────────────────────────────────────────────────

/// Spawn a fresh API server. Returns its base url (".../api").
pub async fn spawn_api() -> Result<String> {
    let state = ApiState::new(WorkoutStore::new());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        let _ = axum::serve(listener, stride_api::router(state)).await;
    });

    Ok(format!("http://{}/api", addr))
}

pub async fn get(url: &str) -> Result<(reqwest::StatusCode, Value)> {
    let resp = reqwest::get(url).await?;
    let status = resp.status();
    let body = resp.json::<Value>().await?;
    Ok((status, body))
}

pub async fn post(url: &str, body: Value) -> Result<(reqwest::StatusCode, Value)> {
    let resp = reqwest::Client::new().post(url).json(&body).send().await?;
    let status = resp.status();
    let body = resp.json::<Value>().await?;
    Ok((status, body))
}

/// Start a run workout at 70 kg, returning its id.
pub async fn start_run(base: &str) -> Result<String> {
    let (status, body) = post(
        &format!("{base}/workouts/start"),
        serde_json::json!({ "activity": "run", "weight_kg": 70.0 }),
    )
    .await?;
    assert_eq!(status, 200, "start failed: {body}");
    Ok(body["workout_id"].as_str().expect("workout_id").to_string())
}
