use ratatui::style::Color;

use crate::domain::weather::{WeatherCategory, icon_category, is_night_icon};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub accent: Color,
    pub text: Color,
    pub muted_text: Color,
    pub border: Color,
    pub info: Color,
    pub danger: Color,
    pub map_land: Color,
    pub temp_freezing: Color,
    pub temp_cold: Color,
    pub temp_mild: Color,
    pub temp_warm: Color,
    pub temp_hot: Color,
}

impl Default for Theme {
    fn default() -> Self {
        theme_for(WeatherCategory::Unknown, true)
    }
}

/// Theme keyed on the current conditions icon, e.g. "10n".
pub fn theme_for_icon(icon: &str) -> Theme {
    theme_for(icon_category(icon), !is_night_icon(icon))
}

pub fn theme_for(category: WeatherCategory, is_day: bool) -> Theme {
    let accent = match (category, is_day) {
        (WeatherCategory::Clear, true) => (255, 215, 117),
        (WeatherCategory::Clear, false) => (173, 216, 255),
        (WeatherCategory::Cloudy, true) => (210, 223, 235),
        (WeatherCategory::Cloudy, false) => (194, 207, 224),
        (WeatherCategory::Rain, true) => (153, 214, 255),
        (WeatherCategory::Rain, false) => (143, 196, 255),
        (WeatherCategory::Snow, true) => (237, 247, 255),
        (WeatherCategory::Snow, false) => (226, 241, 255),
        (WeatherCategory::Fog, true) => (216, 220, 224),
        (WeatherCategory::Fog, false) => (201, 207, 211),
        (WeatherCategory::Thunder, true) => (255, 223, 112),
        (WeatherCategory::Thunder, false) => (255, 208, 95),
        (WeatherCategory::Unknown, _) => (102, 232, 242),
    };

    Theme {
        accent: Color::Rgb(accent.0, accent.1, accent.2),
        text: Color::White,
        muted_text: Color::Gray,
        border: Color::LightCyan,
        info: Color::LightCyan,
        danger: Color::LightRed,
        map_land: Color::DarkGray,
        temp_freezing: Color::LightBlue,
        temp_cold: Color::Cyan,
        temp_mild: Color::Green,
        temp_warm: Color::Yellow,
        temp_hot: Color::LightRed,
    }
}

pub fn temp_color(theme: &Theme, temp: f64) -> Color {
    if temp <= -8.0 {
        theme.temp_freezing
    } else if temp <= 2.0 {
        theme.temp_cold
    } else if temp <= 16.0 {
        theme.temp_mild
    } else if temp <= 28.0 {
        theme.temp_warm
    } else {
        theme.temp_hot
    }
}
