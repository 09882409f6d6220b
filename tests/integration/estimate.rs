//! One-shot estimate endpoint.

use serde_json::json;

use crate::*;

#[tokio::test]
async fn brisk_walk_estimate() {
    let base = spawn_api().await.unwrap();

    let (status, body) = post(
        &format!("{base}/kcal/activity"),
        json!({
            "activity": "walk",
            "duration_sec": 3600,
            "distance_km": 5,
            "weight_kg": 70,
            "age_years": 27,
            "sex": "Male",
        }),
    )
    .await
    .unwrap();

    assert_eq!(status, 200, "{body}");
    assert_eq!(body["kcal"], 301.0);
    assert_eq!(body["details"]["speed_kmh"], 5.0);
    assert_eq!(body["details"]["met"], 4.3);
    assert_eq!(body["details"]["met_bucket"], "brisk");
    assert_eq!(body["details"]["activity"], "walk");
    // inert metadata is echoed, normalized
    assert_eq!(body["details"]["age_years"], 27);
    assert_eq!(body["details"]["sex"], "male");
}

#[tokio::test]
async fn duration_minutes_are_converted() {
    let base = spawn_api().await.unwrap();

    let (status, body) = post(
        &format!("{base}/kcal/activity"),
        json!({ "activity": "walk", "duration_min": 60, "distance_km": 5, "weight_kg": 70 }),
    )
    .await
    .unwrap();

    assert_eq!(status, 200, "{body}");
    assert_eq!(body["kcal"], 301.0);
    assert_eq!(body["details"]["duration_sec"], 3600.0);
}

#[tokio::test]
async fn activity_is_case_insensitive() {
    let base = spawn_api().await.unwrap();

    let (status, body) = post(
        &format!("{base}/kcal/activity"),
        json!({ "activity": "  RUN ", "duration_sec": 1800, "distance_km": 5, "weight_kg": 70 }),
    )
    .await
    .unwrap();

    assert_eq!(status, 200, "{body}");
    assert_eq!(body["details"]["activity"], "run");
    // 10 km/h → steady
    assert_eq!(body["details"]["met_bucket"], "steady");
}

#[tokio::test]
async fn missing_duration_is_rejected() {
    let base = spawn_api().await.unwrap();

    let (status, body) = post(
        &format!("{base}/kcal/activity"),
        json!({ "activity": "walk", "distance_km": 5, "weight_kg": 70 }),
    )
    .await
    .unwrap();

    assert_eq!(status, 400);
    assert!(
        body["error"].as_str().unwrap().contains("duration"),
        "{body}"
    );
}

#[tokio::test]
async fn unsupported_activity_is_rejected() {
    let base = spawn_api().await.unwrap();

    let (status, body) = post(
        &format!("{base}/kcal/activity"),
        json!({ "activity": "swim", "duration_sec": 3600, "distance_km": 2, "weight_kg": 70 }),
    )
    .await
    .unwrap();

    assert_eq!(status, 400);
    assert!(
        body["error"].as_str().unwrap().contains("walk, run, cycle"),
        "{body}"
    );
}

#[tokio::test]
async fn unrealistic_average_speed_is_rejected() {
    let base = spawn_api().await.unwrap();

    let (status, body) = post(
        &format!("{base}/kcal/activity"),
        json!({ "activity": "cycle", "duration_sec": 3600, "distance_km": 150, "weight_kg": 70 }),
    )
    .await
    .unwrap();

    assert_eq!(status, 400);
    assert!(
        body["error"].as_str().unwrap().contains("nrealistic"),
        "{body}"
    );
}

#[tokio::test]
async fn non_positive_inputs_are_rejected() {
    let base = spawn_api().await.unwrap();

    for bad in [
        json!({ "activity": "walk", "duration_sec": 0, "distance_km": 5, "weight_kg": 70 }),
        json!({ "activity": "walk", "duration_sec": 3600, "distance_km": 0, "weight_kg": 70 }),
        json!({ "activity": "walk", "duration_sec": 3600, "distance_km": 5, "weight_kg": -1 }),
    ] {
        let (status, body) = post(&format!("{base}/kcal/activity"), bad).await.unwrap();
        assert_eq!(status, 400, "{body}");
    }
}
