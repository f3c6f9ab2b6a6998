use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::bail;
use serde::Deserialize;
use tracing::warn;

use crate::{
    cli::{Cli, Language, TimezoneArg},
    data::openweather::OPENWEATHER_URL,
};

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const MAX_TIMEOUT_SECS: u64 = 120;

/// Optional `settings.json`. Read once at startup and never written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FileSettings {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub language: Option<Language>,
    pub timezone: Option<TimezoneArg>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub api_key: String,
    pub base_url: String,
    pub language: Language,
    pub timezone: TimezoneArg,
    pub timeout: Duration,
}

impl RuntimeConfig {
    /// Command-line and environment values win over the settings file.
    pub fn merge(cli: &Cli, file: FileSettings) -> anyhow::Result<Self> {
        let api_key = cli
            .api_key
            .clone()
            .or(file.api_key)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());
        let Some(api_key) = api_key else {
            bail!(
                "missing OpenWeatherMap API key: pass --api-key, set OPENWEATHER_API_KEY, or add \"api_key\" to settings.json"
            );
        };

        Ok(Self {
            api_key,
            base_url: cli
                .base_url
                .clone()
                .or(file.base_url)
                .unwrap_or_else(|| OPENWEATHER_URL.to_string()),
            language: cli.language.or(file.language).unwrap_or_default(),
            timezone: cli.timezone.or(file.timezone).unwrap_or_default(),
            timeout: Duration::from_secs(
                cli.timeout_secs
                    .or(file.timeout_secs)
                    .unwrap_or(DEFAULT_TIMEOUT_SECS)
                    .clamp(1, MAX_TIMEOUT_SECS),
            ),
        })
    }
}

pub fn load_runtime_config(cli: &Cli) -> anyhow::Result<RuntimeConfig> {
    let file = settings_path()
        .map(|path| load_file_settings(&path))
        .unwrap_or_default();
    RuntimeConfig::merge(cli, file)
}

/// Missing or malformed files fall back to defaults.
pub fn load_file_settings(path: &Path) -> FileSettings {
    let Ok(content) = fs::read_to_string(path) else {
        return FileSettings::default();
    };
    match serde_json::from_str::<FileSettings>(&content) {
        Ok(settings) => settings,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "ignoring malformed settings file");
            FileSettings::default()
        }
    }
}

fn settings_path() -> Option<PathBuf> {
    if let Some(base) = std::env::var_os("WEATHER_DASH_CONFIG_DIR") {
        return Some(PathBuf::from(base).join("settings.json"));
    }

    let home = std::env::var_os("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("weather-dash")
            .join("settings.json"),
    )
}
