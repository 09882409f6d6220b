//! stride-ctl — command-line interface for the Stride daemon.

use anyhow::{Context, Result};
use serde::Deserialize;

const DEFAULT_PORT: u16 = 8080;

// ── Response types ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct StatusResponse {
    uptime_secs: u64,
    workouts:    WorkoutCounts,
}

#[derive(Deserialize)]
struct WorkoutCounts {
    total:  usize,
    active: usize,
    ended:  usize,
}

#[derive(Deserialize)]
struct EstimateResponse {
    kcal:    f64,
    details: EstimateDetails,
}

#[derive(Deserialize)]
struct EstimateDetails {
    activity:     String,
    duration_sec: f64,
    distance_km:  f64,
    weight_kg:    f64,
    speed_kmh:    f64,
    met:          f64,
    met_bucket:   String,
}

#[derive(Deserialize)]
struct StartResponse {
    workout_id: String,
}

#[derive(Deserialize)]
struct UpdateResponse {
    workout_id:   String,
    current_kcal: f64,
    details:      UpdateDetails,
}

#[derive(Deserialize)]
struct UpdateDetails {
    interval_sec:         f64,
    interval_distance_km: f64,
    speed_kmh:            f64,
    met:                  f64,
    met_bucket:           String,
    kcal_added:           f64,
}

#[derive(Deserialize)]
struct WorkoutSnapshot {
    workout_id:       String,
    activity:         String,
    weight_kg:        f64,
    last_elapsed_sec: f64,
    last_distance_km: f64,
    last_kcal:        f64,
    last_bucket:      String,
    ended:            bool,
}

#[derive(Deserialize)]
struct EndResponse {
    workout_id: String,
    final_kcal: f64,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

// ── HTTP helpers ──────────────────────────────────────────────────────────────

fn base_url(port: u16) -> String {
    format!("http://127.0.0.1:{}/api", port)
}

async fn decode<T: for<'de> Deserialize<'de>>(resp: reqwest::Response) -> Result<T> {
    if resp.status().is_success() {
        resp.json::<T>().await.context("failed to parse response")
    } else {
        let status = resp.status();
        let body: ErrorBody = resp
            .json()
            .await
            .unwrap_or(ErrorBody { error: "unknown error".to_string() });
        anyhow::bail!("{} — {}", status, body.error)
    }
}

async fn get_json<T: for<'de> Deserialize<'de>>(url: &str) -> Result<T> {
    let resp = reqwest::get(url)
        .await
        .with_context(|| format!("failed to connect to strided at {} — is it running?", url))?;
    decode(resp).await
}

async fn post_json<T: for<'de> Deserialize<'de>>(url: &str, body: serde_json::Value) -> Result<T> {
    let resp = reqwest::Client::new()
        .post(url)
        .json(&body)
        .send()
        .await
        .with_context(|| format!("failed to connect to strided at {} — is it running?", url))?;
    decode(resp).await
}

// ── Subcommand handlers ───────────────────────────────────────────────────────

async fn cmd_status(port: u16) -> Result<()> {
    let resp: StatusResponse = get_json(&format!("{}/status", base_url(port))).await?;

    println!("═══════════════════════════════════════");
    println!("  Stride Daemon Status");
    println!("═══════════════════════════════════════");
    println!("  Uptime           : {}s", resp.uptime_secs);
    println!("  Workouts total   : {}", resp.workouts.total);
    println!("  Workouts active  : {}", resp.workouts.active);
    println!("  Workouts ended   : {}", resp.workouts.ended);

    Ok(())
}

async fn cmd_estimate(
    port: u16,
    activity: &str,
    duration_min: f64,
    distance_km: f64,
    weight_kg: f64,
) -> Result<()> {
    let body = serde_json::json!({
        "activity": activity,
        "duration_min": duration_min,
        "distance_km": distance_km,
        "weight_kg": weight_kg,
    });
    let resp: EstimateResponse =
        post_json(&format!("{}/kcal/activity", base_url(port)), body).await?;

    let d = &resp.details;
    println!("═══════════════════════════════════════");
    println!("  Estimate: {} kcal", resp.kcal);
    println!("═══════════════════════════════════════");
    println!("  activity  : {}", d.activity);
    println!("  duration  : {}s", d.duration_sec);
    println!("  distance  : {} km", d.distance_km);
    println!("  weight    : {} kg", d.weight_kg);
    println!("  speed     : {} km/h", d.speed_kmh);
    println!("  MET       : {} ({})", d.met, d.met_bucket);

    Ok(())
}

async fn cmd_start(port: u16, activity: &str, weight_kg: f64) -> Result<()> {
    let body = serde_json::json!({ "activity": activity, "weight_kg": weight_kg });
    let resp: StartResponse =
        post_json(&format!("{}/workouts/start", base_url(port)), body).await?;

    println!("Workout started: {}", resp.workout_id);
    println!("Send cumulative updates with: stride-ctl update {} <elapsed_sec> <distance_km>",
             resp.workout_id);
    Ok(())
}

async fn cmd_update(port: u16, id: &str, elapsed_sec: f64, distance_km: f64) -> Result<()> {
    let body = serde_json::json!({ "elapsed_sec": elapsed_sec, "distance_km": distance_km });
    let resp: UpdateResponse =
        post_json(&format!("{}/workouts/{}/update", base_url(port), id), body).await?;

    let d = &resp.details;
    println!("  ┌─ {}", &resp.workout_id[..16.min(resp.workout_id.len())]);
    println!("  │  running kcal : {}", resp.current_kcal);
    println!("  │  interval     : {}s / {} km", d.interval_sec, d.interval_distance_km);
    println!("  │  speed        : {} km/h", d.speed_kmh);
    println!("  │  MET          : {} ({})", d.met, d.met_bucket);
    println!("  └─ kcal added   : {}", d.kcal_added);
    Ok(())
}

async fn cmd_get(port: u16, id: &str) -> Result<()> {
    let resp: WorkoutSnapshot = get_json(&format!("{}/workouts/{}", base_url(port), id)).await?;

    println!("  ┌─ {}", &resp.workout_id[..16.min(resp.workout_id.len())]);
    println!("  │  activity : {}", resp.activity);
    println!("  │  weight   : {} kg", resp.weight_kg);
    println!("  │  elapsed  : {}s", resp.last_elapsed_sec);
    println!("  │  distance : {} km", resp.last_distance_km);
    println!("  │  kcal     : {:.2}", resp.last_kcal);
    println!("  │  bucket   : {}", if resp.last_bucket.is_empty() { "-" } else { &resp.last_bucket });
    println!("  └─ state    : {}", if resp.ended { "ended" } else { "active" });
    Ok(())
}

async fn cmd_end(port: u16, id: &str) -> Result<()> {
    let resp: EndResponse =
        post_json(&format!("{}/workouts/{}/end", base_url(port), id), serde_json::json!({})).await?;
    println!("Workout {} ended: {} kcal", resp.workout_id, resp.final_kcal);
    Ok(())
}

fn print_usage() {
    println!("Usage: stride-ctl [--port <port>] <command>");
    println!();
    println!("Commands:");
    println!("  status                                      Show daemon status and workout counts");
    println!("  estimate <activity> <min> <km> <kg>         One-shot kcal estimate");
    println!("  start <activity> <kg>                       Start a workout session");
    println!("  update <id> <elapsed_sec> <distance_km>     Post a cumulative update");
    println!("  get <id>                                    Show a workout snapshot");
    println!("  end <id>                                    End a workout");
    println!();
    println!("Options:");
    println!("  --port <port>   API port (default: {})", DEFAULT_PORT);
}

fn parse_num(s: &str, what: &str) -> Result<f64> {
    s.parse().with_context(|| format!("{what} must be a number, got '{s}'"))
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    // Parse --port option
    let mut port = DEFAULT_PORT;
    let mut remaining: Vec<&str> = Vec::new();
    let mut i = 0;
    while i < args.len() {
        if args[i] == "--port" {
            i += 1;
            port = args.get(i)
            .context("--port requires a value")?
            .parse()
            .context("--port must be a number")?;
        } else {
            remaining.push(&args[i]);
        }
        i += 1;
    }

    match remaining.as_slice() {
        ["status"] | []                  => cmd_status(port).await,
        ["estimate", activity, min, km, kg] => {
            cmd_estimate(
                port,
                activity,
                parse_num(min, "duration_min")?,
                parse_num(km, "distance_km")?,
                parse_num(kg, "weight_kg")?,
            )
            .await
        }
        ["start", activity, kg]          => cmd_start(port, activity, parse_num(kg, "weight_kg")?).await,
        ["update", id, elapsed, km]      => {
            cmd_update(port, id, parse_num(elapsed, "elapsed_sec")?, parse_num(km, "distance_km")?).await
        }
        ["get", id]                      => cmd_get(port, id).await,
        ["end", id]                      => cmd_end(port, id).await,
        ["help"] | ["--help"] | ["-h"]   => { print_usage(); Ok(()) }
        other => {
            eprintln!("Unknown command: {}", other.join(" "));
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}
