//! Workout session lifecycle over HTTP.

use serde_json::json;

use crate::*;

#[tokio::test]
async fn interval_accumulation_scenario() {
    let base = spawn_api().await.unwrap();
    let id = start_run(&base).await.unwrap();

    // 2 km in 600 s: 12 km/h → "fast", MET 11.8, 137.67 kcal at 70 kg
    let (status, body) = post(
        &format!("{base}/workouts/{id}/update"),
        json!({ "elapsed_sec": 600, "distance_km": 2.0 }),
    )
    .await
    .unwrap();

    assert_eq!(status, 200, "{body}");
    assert_eq!(body["current_kcal"], 137.67);
    assert_eq!(body["details"]["speed_kmh"], 12.0);
    assert_eq!(body["details"]["met"], 11.8);
    assert_eq!(body["details"]["met_bucket"], "fast");
    assert_eq!(body["details"]["kcal_added"], 137.67);
    assert_eq!(body["details"]["interval_sec"], 600.0);

    // second interval: 1 km in 300 s = 12 km/h again, +68.83 kcal
    let (status, body) = post(
        &format!("{base}/workouts/{id}/update"),
        json!({ "elapsed_sec": 900, "distance_km": 3.0 }),
    )
    .await
    .unwrap();

    assert_eq!(status, 200, "{body}");
    assert_eq!(body["details"]["kcal_added"], 68.83);
    assert_eq!(body["current_kcal"], 206.5);
}

#[tokio::test]
async fn stopped_interval_adds_nothing() {
    let base = spawn_api().await.unwrap();
    let id = start_run(&base).await.unwrap();

    post(
        &format!("{base}/workouts/{id}/update"),
        json!({ "elapsed_sec": 600, "distance_km": 2.0 }),
    )
    .await
    .unwrap();

    // 5 more minutes, no distance: stopped
    let (status, body) = post(
        &format!("{base}/workouts/{id}/update"),
        json!({ "elapsed_sec": 900, "distance_km": 2.0 }),
    )
    .await
    .unwrap();

    assert_eq!(status, 200, "{body}");
    assert_eq!(body["details"]["met_bucket"], "stopped");
    assert_eq!(body["details"]["speed_kmh"], 0.0);
    assert_eq!(body["details"]["kcal_added"], 0.0);
    assert_eq!(body["current_kcal"], 137.67);
}

#[tokio::test]
async fn duplicate_update_is_idempotent() {
    let base = spawn_api().await.unwrap();
    let id = start_run(&base).await.unwrap();

    let update = json!({ "elapsed_sec": 600, "distance_km": 2.0 });
    post(&format!("{base}/workouts/{id}/update"), update.clone())
        .await
        .unwrap();

    // client retry of the same sample
    let (status, body) = post(&format!("{base}/workouts/{id}/update"), update)
        .await
        .unwrap();

    assert_eq!(status, 200, "{body}");
    assert_eq!(body["current_kcal"], 137.67);
    assert_eq!(body["details"]["kcal_added"], 0.0);
    assert_eq!(body["details"]["interval_sec"], 0.0);
}

#[tokio::test]
async fn regressions_conflict_and_leave_state_unchanged() {
    let base = spawn_api().await.unwrap();
    let id = start_run(&base).await.unwrap();

    post(
        &format!("{base}/workouts/{id}/update"),
        json!({ "elapsed_sec": 600, "distance_km": 2.0 }),
    )
    .await
    .unwrap();

    let (status, body) = post(
        &format!("{base}/workouts/{id}/update"),
        json!({ "elapsed_sec": 500, "distance_km": 2.5 }),
    )
    .await
    .unwrap();
    assert_eq!(status, 409);
    assert!(body["error"].as_str().unwrap().contains("went backwards"));

    let (status, body) = post(
        &format!("{base}/workouts/{id}/update"),
        json!({ "elapsed_sec": 700, "distance_km": 1.0 }),
    )
    .await
    .unwrap();
    assert_eq!(status, 409);
    assert!(body["error"].as_str().unwrap().contains("went backwards"));

    // state unchanged
    let (_, snap) = get(&format!("{base}/workouts/{id}")).await.unwrap();
    assert_eq!(snap["last_elapsed_sec"], 600.0);
    assert_eq!(snap["last_distance_km"], 2.0);
}

#[tokio::test]
async fn unrealistic_interval_speed_is_rejected() {
    let base = spawn_api().await.unwrap();
    let id = start_run(&base).await.unwrap();

    post(
        &format!("{base}/workouts/{id}/update"),
        json!({ "elapsed_sec": 600, "distance_km": 2.0 }),
    )
    .await
    .unwrap();

    // 25 km in 10 minutes → 150 km/h
    let (status, body) = post(
        &format!("{base}/workouts/{id}/update"),
        json!({ "elapsed_sec": 1200, "distance_km": 27.0 }),
    )
    .await
    .unwrap();
    assert_eq!(status, 400);
    assert!(body["error"].as_str().unwrap().contains("nrealistic"));

    let (_, snap) = get(&format!("{base}/workouts/{id}")).await.unwrap();
    assert_eq!(snap["last_distance_km"], 2.0);
    assert_eq!(snap["last_kcal"], 137.66666666666666);
}

#[tokio::test]
async fn weight_update_mid_session() {
    let base = spawn_api().await.unwrap();
    let id = start_run(&base).await.unwrap();

    let (status, body) = post(
        &format!("{base}/workouts/{id}/update"),
        json!({ "elapsed_sec": 600, "distance_km": 2.0, "weight_kg": 80.0 }),
    )
    .await
    .unwrap();

    assert_eq!(status, 200, "{body}");
    assert_eq!(body["details"]["weight_kg"], 80.0);
    // 11.8 * 80 * (600/3600) = 157.33
    assert_eq!(body["details"]["kcal_added"], 157.33);

    let (_, snap) = get(&format!("{base}/workouts/{id}")).await.unwrap();
    assert_eq!(snap["weight_kg"], 80.0);
}

#[tokio::test]
async fn end_freezes_the_session_and_is_idempotent() {
    let base = spawn_api().await.unwrap();
    let id = start_run(&base).await.unwrap();

    post(
        &format!("{base}/workouts/{id}/update"),
        json!({ "elapsed_sec": 600, "distance_km": 2.0 }),
    )
    .await
    .unwrap();

    let (status, body) = post(&format!("{base}/workouts/{id}/end"), json!({}))
        .await
        .unwrap();
    assert_eq!(status, 200, "{body}");
    assert_eq!(body["final_kcal"], 137.67);

    // no further updates
    let (status, body) = post(
        &format!("{base}/workouts/{id}/update"),
        json!({ "elapsed_sec": 900, "distance_km": 3.0 }),
    )
    .await
    .unwrap();
    assert_eq!(status, 409);
    assert!(body["error"].as_str().unwrap().contains("ended"));

    // ending again returns the same total
    let (status, body) = post(&format!("{base}/workouts/{id}/end"), json!({}))
        .await
        .unwrap();
    assert_eq!(status, 200);
    assert_eq!(body["final_kcal"], 137.67);

    let (_, snap) = get(&format!("{base}/workouts/{id}")).await.unwrap();
    assert_eq!(snap["ended"], true);
}

#[tokio::test]
async fn snapshot_exposes_the_full_session() {
    let base = spawn_api().await.unwrap();
    let id = start_run(&base).await.unwrap();

    let (status, snap) = get(&format!("{base}/workouts/{id}")).await.unwrap();
    assert_eq!(status, 200, "{snap}");
    assert_eq!(snap["workout_id"], id.as_str());
    assert_eq!(snap["activity"], "run");
    assert_eq!(snap["weight_kg"], 70.0);
    assert_eq!(snap["last_kcal"], 0.0);
    assert_eq!(snap["ended"], false);
    assert!(snap["created_ts"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn unknown_workout_is_not_found() {
    let base = spawn_api().await.unwrap();

    let (status, _) = get(&format!("{base}/workouts/deadbeef")).await.unwrap();
    assert_eq!(status, 404);

    let (status, _) = post(
        &format!("{base}/workouts/deadbeef/update"),
        json!({ "elapsed_sec": 60, "distance_km": 0.1 }),
    )
    .await
    .unwrap();
    assert_eq!(status, 404);

    let (status, _) = post(&format!("{base}/workouts/deadbeef/end"), json!({}))
        .await
        .unwrap();
    assert_eq!(status, 404);
}

#[tokio::test]
async fn start_validates_inputs() {
    let base = spawn_api().await.unwrap();

    let (status, _) = post(
        &format!("{base}/workouts/start"),
        json!({ "activity": "swim", "weight_kg": 70.0 }),
    )
    .await
    .unwrap();
    assert_eq!(status, 400);

    let (status, body) = post(
        &format!("{base}/workouts/start"),
        json!({ "activity": "run", "weight_kg": 0.0 }),
    )
    .await
    .unwrap();
    assert_eq!(status, 400);
    assert!(body["error"].as_str().unwrap().contains("weight_kg"));
}

#[tokio::test]
async fn workout_ids_are_opaque_hex() {
    let base = spawn_api().await.unwrap();
    let a = start_run(&base).await.unwrap();
    let b = start_run(&base).await.unwrap();

    assert_ne!(a, b);
    assert_eq!(a.len(), 32);
    assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
}
