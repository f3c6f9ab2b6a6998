#![allow(clippy::missing_errors_doc)]

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    #[value(name = "en")]
    #[serde(alias = "en")]
    English,
    #[value(name = "es")]
    #[serde(alias = "es")]
    Spanish,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimezoneArg {
    /// Offset of this machine at startup
    #[default]
    Local,
    Utc,
    /// Offset reported for the searched city
    City,
}

#[derive(Debug, Parser, Clone)]
#[command(
    name = "weather-dash",
    version,
    about = "Terminal weather dashboard for OpenWeatherMap"
)]
pub struct Cli {
    /// City to search at startup
    pub city: Option<String>,

    /// OpenWeatherMap API key
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// OpenWeatherMap API base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Language for weekday names
    #[arg(long = "lang", value_enum)]
    pub language: Option<Language>,

    /// Timezone used for day and time labels
    #[arg(long, value_enum)]
    pub timezone: Option<TimezoneArg>,

    /// Per-request timeout in seconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..=120))]
    pub timeout_secs: Option<u64>,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Print weather snapshot to stdout and exit (non-interactive)
    #[arg(long)]
    pub one_shot: bool,
}

impl Cli {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.one_shot && self.initial_city().is_none() {
            anyhow::bail!("--one-shot requires a city");
        }
        Ok(())
    }

    #[must_use]
    pub fn initial_city(&self) -> Option<&str> {
        self.city
            .as_deref()
            .map(str::trim)
            .filter(|city| !city.is_empty())
    }
}
