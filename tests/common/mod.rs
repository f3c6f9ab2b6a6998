#![allow(clippy::cast_precision_loss)]
#![allow(dead_code)]

use std::time::Duration;

use serde_json::{Value, json};
use tokio::sync::mpsc;
use weather_dash::{
    app::{events::AppEvent, settings::RuntimeConfig, state::AppState},
    cli::{Language, TimezoneArg},
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

pub const API_KEY: &str = "test-key";

/// 2026-02-12T00:00:00Z, a Thursday.
pub const THURSDAY_00Z: i64 = 1_770_854_400;

pub fn config(base_url: &str) -> RuntimeConfig {
    RuntimeConfig {
        api_key: API_KEY.to_string(),
        base_url: base_url.to_string(),
        language: Language::English,
        timezone: TimezoneArg::Utc,
        timeout: Duration::from_secs(5),
    }
}

pub fn current_payload(name: &str, lon: f64, lat: f64) -> Value {
    json!({
        "coord": { "lon": lon, "lat": lat },
        "weather": [{ "id": 800, "main": "Clear", "description": "clear sky", "icon": "01d" }],
        "main": { "temp": 18.2, "feels_like": 17.5, "temp_min": 16.0, "temp_max": 19.4, "humidity": 60 },
        "visibility": 10000,
        "wind": { "speed": 3.1, "deg": 240 },
        "timezone": 3600,
        "name": name,
        "cod": 200
    })
}

/// `count` entries three hours apart starting Thursday 00:00 UTC.
pub fn forecast_payload(count: usize) -> Value {
    let list = (0..count)
        .map(|idx| {
            let temp = 10.0 + (idx % 8) as f64;
            json!({
                "dt": THURSDAY_00Z + idx as i64 * 3 * 3600,
                "main": { "temp": temp, "temp_min": temp - 1.5, "temp_max": temp + 1.5, "humidity": 70 },
                "weather": [{ "description": "scattered clouds", "icon": "03d" }]
            })
        })
        .collect::<Vec<_>>();
    json!({ "cod": "200", "cnt": count, "list": list })
}

pub async fn mount_city(server: &MockServer, city: &str, lon: f64, lat: f64) {
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", city))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_payload(city, lon, lat)))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("q", city))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_payload(40)))
        .mount(server)
        .await;
}

/// Submits `city` and applies whatever the spawned fetch reports back.
pub async fn search(
    app: &mut AppState,
    city: &str,
    tx: &mpsc::Sender<AppEvent>,
    rx: &mut mpsc::Receiver<AppEvent>,
) {
    assert!(app.on_search_submit(city, tx), "search should start");
    let event = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("search timed out")
        .expect("channel open");
    assert!(matches!(event, AppEvent::SearchCompleted { .. }));
    app.handle_event(event, tx).await.expect("apply result");
}
