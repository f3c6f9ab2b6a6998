pub const ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherCategory {
    Clear,
    Cloudy,
    Rain,
    Snow,
    Fog,
    Thunder,
    Unknown,
}

/// Image resource for an OpenWeatherMap icon id. The id is passed through unchecked.
#[must_use]
pub fn icon_url(icon: &str) -> String {
    format!("{ICON_BASE_URL}/{icon}.png")
}

#[must_use]
pub fn icon_category(icon: &str) -> WeatherCategory {
    match icon.get(..2) {
        Some("01") => WeatherCategory::Clear,
        Some("02" | "03" | "04") => WeatherCategory::Cloudy,
        Some("09" | "10") => WeatherCategory::Rain,
        Some("11") => WeatherCategory::Thunder,
        Some("13") => WeatherCategory::Snow,
        Some("50") => WeatherCategory::Fog,
        _ => WeatherCategory::Unknown,
    }
}

#[must_use]
pub fn is_night_icon(icon: &str) -> bool {
    icon.ends_with('n')
}

#[must_use]
pub fn icon_glyph(icon: &str) -> &'static str {
    match icon_category(icon) {
        WeatherCategory::Clear if is_night_icon(icon) => "☾",
        WeatherCategory::Clear => "☀",
        WeatherCategory::Cloudy => "☁",
        WeatherCategory::Rain => "☂",
        WeatherCategory::Thunder => "⚡",
        WeatherCategory::Snow => "❄",
        WeatherCategory::Fog => "░",
        WeatherCategory::Unknown => "·",
    }
}
