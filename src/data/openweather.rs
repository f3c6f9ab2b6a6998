use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, de::DeserializeOwned};
use tracing::{debug, instrument, warn};

use crate::domain::{
    error::SearchError,
    weather::{CitySearchQuery, Coordinate, CurrentConditions, ForecastEntry, WeatherReport},
};

pub const OPENWEATHER_URL: &str = "https://api.openweathermap.org/data/2.5";
pub const FORECAST_COUNT: u8 = 40;

#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    pub fn with_base_url(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("building HTTP client failed")?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// Current conditions first, then the forecast. The forecast request is
    /// never sent when the first call fails.
    #[instrument(skip_all, fields(city = %query))]
    pub async fn fetch_weather(&self, query: &CitySearchQuery) -> Result<WeatherReport, SearchError> {
        let current: CurrentPayload = self
            .get_json("weather", query, &[], |status| {
                SearchError::CurrentConditionsFailed { status }
            })
            .await?;

        let count = FORECAST_COUNT.to_string();
        let forecast: ForecastPayload = self
            .get_json("forecast", query, &[("cnt", count.as_str())], |status| {
                SearchError::ForecastFailed { status }
            })
            .await?;

        debug!(entries = forecast.list.len(), "weather fetched");
        Ok(WeatherReport {
            current: current.into_domain(),
            forecast: forecast
                .list
                .into_iter()
                .map(ForecastItem::into_domain)
                .collect(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &CitySearchQuery,
        extra: &[(&str, &str)],
        on_status: impl FnOnce(u16) -> SearchError,
    ) -> Result<T, SearchError> {
        let response = self
            .client
            .get(format!("{}/{endpoint}", self.base_url))
            .query(&[
                ("q", query.as_str()),
                ("units", "metric"),
                ("appid", self.api_key.as_str()),
            ])
            .query(extra)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(endpoint, status = status.as_u16(), "request returned non-success status");
            return Err(on_status(status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|err| SearchError::Transport(format!(
                "malformed {endpoint} payload: {}",
                err.without_url()
            )))
    }
}

#[derive(Debug, Deserialize)]
struct CurrentPayload {
    name: String,
    main: MainBlock,
    wind: WindBlock,
    #[serde(default)]
    visibility: Option<u32>,
    #[serde(default)]
    weather: Vec<WeatherBlock>,
    coord: CoordBlock,
    #[serde(default)]
    timezone: i32,
}

impl CurrentPayload {
    fn into_domain(self) -> CurrentConditions {
        let WeatherBlock { description, icon } = first_weather(self.weather);
        CurrentConditions {
            city: self.name,
            temperature_c: self.main.temp,
            feels_like_c: self.main.feels_like,
            description,
            wind_speed_mps: self.wind.speed,
            visibility_m: self.visibility,
            humidity_pct: self.main.humidity,
            icon,
            coord: Coordinate {
                longitude: self.coord.lon,
                latitude: self.coord.lat,
            },
            utc_offset_secs: self.timezone,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ForecastPayload {
    list: Vec<ForecastItem>,
}

#[derive(Debug, Deserialize)]
struct ForecastItem {
    dt: i64,
    main: MainBlock,
    #[serde(default)]
    weather: Vec<WeatherBlock>,
}

impl ForecastItem {
    fn into_domain(self) -> ForecastEntry {
        let WeatherBlock { description, icon } = first_weather(self.weather);
        ForecastEntry {
            timestamp: self.dt,
            temperature_c: self.main.temp,
            temp_min_c: self.main.temp_min.unwrap_or(self.main.temp),
            temp_max_c: self.main.temp_max.unwrap_or(self.main.temp),
            description,
            icon,
        }
    }
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
    #[serde(default)]
    feels_like: f64,
    #[serde(default)]
    temp_min: Option<f64>,
    #[serde(default)]
    temp_max: Option<f64>,
    #[serde(default)]
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct WindBlock {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct CoordBlock {
    lon: f64,
    lat: f64,
}

#[derive(Debug, Default, Deserialize)]
struct WeatherBlock {
    #[serde(default)]
    description: String,
    #[serde(default)]
    icon: String,
}

fn first_weather(weather: Vec<WeatherBlock>) -> WeatherBlock {
    weather.into_iter().next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_payload_maps_fields_directly() {
        let payload: CurrentPayload = serde_json::from_value(serde_json::json!({
            "name": "Paris",
            "main": {"temp": 18.2, "feels_like": 17.5, "humidity": 60},
            "wind": {"speed": 3.1},
            "visibility": 10000,
            "weather": [{"description": "clear sky", "icon": "01d"}],
            "coord": {"lon": 2.35, "lat": 48.85},
            "timezone": 3600
        }))
        .expect("payload");

        let current = payload.into_domain();
        assert_eq!(current.city, "Paris");
        assert_eq!(current.description, "clear sky");
        assert_eq!(current.icon, "01d");
        assert_eq!(current.visibility_m, Some(10_000));
        assert_eq!(current.humidity_pct, 60);
        assert_eq!(current.utc_offset_secs, 3600);
        assert!((current.coord.longitude - 2.35).abs() < 1e-9);
    }

    #[test]
    fn forecast_item_without_weather_block_keeps_empty_description() {
        let item: ForecastItem = serde_json::from_value(serde_json::json!({
            "dt": 1_770_890_400,
            "main": {"temp": 4.0},
            "weather": []
        }))
        .expect("item");

        let entry = item.into_domain();
        assert_eq!(entry.description, "");
        assert_eq!(entry.icon, "");
        assert!((entry.temp_min_c - 4.0).abs() < f64::EPSILON);
        assert!((entry.temp_max_c - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client =
            WeatherClient::with_base_url("http://localhost:1234/", "key", Duration::from_secs(1))
                .expect("client");
        assert_eq!(client.base_url, "http://localhost:1234");
    }
}
