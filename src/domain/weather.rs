use crate::domain::error::SearchError;

mod conditions;

pub use conditions::{
    ICON_BASE_URL, WeatherCategory, icon_category, icon_glyph, icon_url, is_night_icon,
};

/// A trimmed, non-empty city name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CitySearchQuery(String);

impl CitySearchQuery {
    pub fn parse(raw: &str) -> Result<Self, SearchError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SearchError::EmptyQuery);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CitySearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub longitude: f64,
    pub latitude: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub city: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub description: String,
    pub wind_speed_mps: f64,
    pub visibility_m: Option<u32>,
    pub humidity_pct: u8,
    pub icon: String,
    pub coord: Coordinate,
    /// Shift from UTC in seconds for the searched city.
    pub utc_offset_secs: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastEntry {
    pub timestamp: i64,
    pub temperature_c: f64,
    pub temp_min_c: f64,
    pub temp_max_c: f64,
    pub description: String,
    pub icon: String,
}

/// Entries 3 hours apart, ascending by timestamp as delivered by the provider.
pub type ForecastSequence = Vec<ForecastEntry>;

/// Current conditions and forecast from one search; applied together or not at all.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub current: CurrentConditions,
    pub forecast: ForecastSequence,
}
