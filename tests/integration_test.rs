use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};

use cloudburst_monitor::{router, Monitor};

#[derive(Debug, Deserialize, PartialEq)]
struct Risk {
    score: u8,
    label: String,
    key: String,
}

#[derive(Debug, Deserialize, PartialEq)]
struct Sample {
    temperature: f64,
    humidity: f64,
    rainfall: f64,
    soil: u8,
    ultrasonic: f64,
    timestamp: String,
    risk: Risk,
}

#[derive(Debug, Deserialize)]
struct Accepted {
    status: String,
    sample: Sample,
}

#[derive(Debug, Deserialize)]
struct State {
    latest: Value,
    history: Vec<Sample>,
}

/// Serve a fresh monitor on an ephemeral port and return its base URL.
async fn spawn_server() -> Result<String> {
    // ---
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let app = router(Arc::new(Monitor::default()));

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok(format!("http://{}", addr))
}

async fn fetch_state(client: &Client, base: &str) -> Result<State> {
    Ok(client.get(format!("{base}/data")).send().await?.json().await?)
}

#[tokio::test]
async fn empty_state_then_single_submission() -> Result<()> {
    // ---
    let base = spawn_server().await?;
    let client = Client::new();

    let state = fetch_state(&client, &base).await?;
    assert_eq!(state.latest, json!({}));
    assert!(state.history.is_empty());

    let resp = client
        .post(format!("{base}/update"))
        .json(&json!({
            "temperature": 12.3456,
            "humidity": 91,
            "rainfall": 10,
            "soil": 3,
            "ultrasonic": 29.99
        }))
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let accepted: Accepted = resp.json().await?;
    assert_eq!(accepted.status, "ok");
    assert_eq!(accepted.sample.temperature, 12.35);
    assert_eq!(accepted.sample.soil, 1);
    assert_eq!(accepted.sample.risk.score, 9);
    assert_eq!(accepted.sample.risk.key, "high");
    assert_eq!(accepted.sample.risk.label, "High Cloudburst Risk");

    let stamped: DateTime<Utc> = accepted.sample.timestamp.parse()?;
    assert!(accepted.sample.timestamp.ends_with('Z'));
    assert!(stamped <= Utc::now());

    let state = fetch_state(&client, &base).await?;
    assert_eq!(state.history.len(), 1);
    assert_eq!(state.history[0], accepted.sample);
    let latest: Sample = serde_json::from_value(state.latest)?;
    assert_eq!(latest, accepted.sample);

    Ok(())
}

#[tokio::test]
async fn rejected_payloads_leave_state_untouched() -> Result<()> {
    // ---
    let base = spawn_server().await?;
    let client = Client::new();

    client
        .post(format!("{base}/update"))
        .json(&json!({ "rainfall": 4 }))
        .send()
        .await?;
    let before = fetch_state(&client, &base).await?;

    let resp = client
        .post(format!("{base}/update"))
        .json(&json!({ "rainfall": "not-a-number" }))
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await?;
    assert_eq!(body, json!({ "error": "Invalid data types" }));

    let resp = client
        .post(format!("{base}/update"))
        .header("content-type", "text/plain")
        .body("rain=lots")
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await?;
    assert_eq!(body, json!({ "error": "Invalid JSON" }));

    let after = fetch_state(&client, &base).await?;
    assert_eq!(after.history, before.history);
    assert_eq!(after.latest, before.latest);

    Ok(())
}

#[tokio::test]
async fn empty_object_uses_defaults() -> Result<()> {
    // ---
    let base = spawn_server().await?;
    let client = Client::new();

    let accepted: Accepted = client
        .post(format!("{base}/update"))
        .body("{}")
        .send()
        .await?
        .json()
        .await?;

    assert_eq!(accepted.sample.temperature, 0.0);
    assert_eq!(accepted.sample.humidity, 0.0);
    assert_eq!(accepted.sample.rainfall, 0.0);
    assert_eq!(accepted.sample.soil, 0);
    assert_eq!(accepted.sample.ultrasonic, 999.0);
    assert_eq!(accepted.sample.risk.score, 0);
    assert_eq!(accepted.sample.risk.key, "low");

    Ok(())
}

#[tokio::test]
async fn history_is_bounded_fifo() -> Result<()> {
    // ---
    let base = spawn_server().await?;
    let client = Client::new();

    let mut last = None;
    for i in 1..=301_u32 {
        let accepted: Accepted = client
            .post(format!("{base}/update"))
            .json(&json!({ "temperature": i }))
            .send()
            .await?
            .json()
            .await?;
        last = Some(accepted.sample);
    }

    let state = fetch_state(&client, &base).await?;
    assert_eq!(state.history.len(), 300);
    assert!(state.history.iter().all(|s| s.temperature != 1.0));
    assert_eq!(state.history[0].temperature, 2.0);

    let latest: Sample = serde_json::from_value(state.latest)?;
    assert_eq!(Some(&latest), last.as_ref());
    assert_eq!(state.history.last(), last.as_ref());

    Ok(())
}

#[tokio::test]
async fn simulate_feeds_the_same_pipeline() -> Result<()> {
    // ---
    let base = spawn_server().await?;
    let client = Client::new();

    let body: Value = client
        .get(format!("{base}/simulate"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(body["status"], "simulated");

    let payload = &body["payload"];
    for field in ["temperature", "humidity", "rainfall", "soil", "ultrasonic"] {
        assert!(payload[field].is_number(), "payload missing {field}");
    }

    let state = fetch_state(&client, &base).await?;
    assert_eq!(state.history.len(), 1);
    let latest = &state.history[0];
    assert_eq!(Some(latest.humidity), payload["humidity"].as_f64());
    assert_eq!(Some(latest.ultrasonic), payload["ultrasonic"].as_f64());

    let health: Value = client
        .get(format!("{base}/health"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(health, json!({ "status": "ok", "samples": 1, "history_max": 300 }));

    Ok(())
}
