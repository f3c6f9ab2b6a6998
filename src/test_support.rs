#![allow(clippy::cast_precision_loss)]

use std::time::Duration;

use crate::{
    app::{settings::RuntimeConfig, state::AppState},
    cli::{Language, TimezoneArg},
    domain::weather::{Coordinate, CurrentConditions, ForecastEntry, WeatherReport},
};

/// 2026-02-12T00:00:00Z, a Thursday.
pub(crate) const THURSDAY_00Z: i64 = 1_770_854_400;

pub(crate) fn test_config(base_url: &str) -> RuntimeConfig {
    RuntimeConfig {
        api_key: "test-key".to_string(),
        base_url: base_url.to_string(),
        language: Language::English,
        timezone: TimezoneArg::Utc,
        timeout: Duration::from_secs(2),
    }
}

/// State whose client points at a closed local port.
pub(crate) fn offline_state() -> AppState {
    AppState::new(&test_config("http://127.0.0.1:9")).expect("state")
}

pub(crate) fn current(city: &str, lon: f64, lat: f64) -> CurrentConditions {
    CurrentConditions {
        city: city.to_string(),
        temperature_c: 18.2,
        feels_like_c: 17.5,
        description: "clear sky".to_string(),
        wind_speed_mps: 3.1,
        visibility_m: Some(10_000),
        humidity_pct: 60,
        icon: "01d".to_string(),
        coord: Coordinate {
            longitude: lon,
            latitude: lat,
        },
        utc_offset_secs: 3600,
    }
}

pub(crate) fn forecast(count: usize) -> Vec<ForecastEntry> {
    (0..count)
        .map(|idx| ForecastEntry {
            timestamp: THURSDAY_00Z + i64::try_from(idx).unwrap_or(0) * 3 * 3600,
            temperature_c: 10.0 + (idx % 8) as f64,
            temp_min_c: 8.0,
            temp_max_c: 19.0,
            description: "scattered clouds".to_string(),
            icon: "03d".to_string(),
        })
        .collect()
}

pub(crate) fn report(city: &str, lon: f64, lat: f64) -> WeatherReport {
    WeatherReport {
        current: current(city, lon, lat),
        forecast: forecast(40),
    }
}
