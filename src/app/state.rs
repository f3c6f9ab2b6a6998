use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::{
    app::{events::AppEvent, settings::RuntimeConfig},
    cli::{Language, TimezoneArg},
    data::openweather::WeatherClient,
    domain::{
        daily::{DailySummary, reduce},
        error::SearchError,
        locale::DisplayLocale,
        map::MapViewport,
        weather::{CitySearchQuery, CurrentConditions, ForecastSequence, WeatherReport},
    },
    ui::chart::{ChartAdapter, DrawTarget},
};

mod input;
mod methods_fetch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Fetching,
    Success,
    Failure,
}

#[derive(Debug)]
pub struct AppState {
    pub running: bool,
    pub phase: SearchPhase,
    pub search_input: String,
    pub current: Option<CurrentConditions>,
    pub forecast: ForecastSequence,
    pub last_error: Option<String>,
    pub chart_loaded: bool,
    pub chart: ChartAdapter,
    pub language: Language,
    pub timezone: TimezoneArg,
    client: WeatherClient,
    latest_seq: u64,
    chart_dirty: bool,
}

impl AppState {
    pub fn new(config: &RuntimeConfig) -> Result<Self> {
        let client =
            WeatherClient::with_base_url(&config.base_url, &config.api_key, config.timeout)?;
        Ok(Self {
            running: true,
            phase: SearchPhase::Idle,
            search_input: String::new(),
            current: None,
            forecast: Vec::new(),
            last_error: None,
            chart_loaded: false,
            chart: ChartAdapter::default(),
            language: config.language,
            timezone: config.timezone,
            client,
            latest_seq: 0,
            chart_dirty: false,
        })
    }

    pub async fn handle_event(&mut self, event: AppEvent, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        match event {
            AppEvent::Bootstrap { city } => {
                if let Some(city) = city {
                    self.search_input = city;
                    self.submit_search_input(tx);
                }
            }
            AppEvent::Input(input) => self.handle_input(input, tx).await?,
            AppEvent::SearchCompleted { seq, result } => {
                self.apply_search_result(seq, result);
            }
            AppEvent::Quit => self.running = false,
        }
        Ok(())
    }

    /// Locale for labels, resolved against the city currently displayed.
    pub fn display_locale(&self) -> DisplayLocale {
        DisplayLocale::resolve(
            self.language,
            self.timezone,
            self.current.as_ref().map(|c| c.utc_offset_secs),
        )
    }

    pub fn daily_summaries(&self) -> Vec<DailySummary> {
        reduce(&self.forecast, &self.display_locale())
    }

    pub fn map_viewport(&self) -> Option<MapViewport> {
        self.current.as_ref().map(|c| MapViewport::around(c.coord))
    }

    pub fn is_fetching(&self) -> bool {
        self.phase == SearchPhase::Fetching
    }

    /// Redraws the chart when it is loaded, has data and a mounted target, and
    /// either the forecast changed or the target moved.
    pub fn sync_chart(&mut self, target: Option<DrawTarget>) -> bool {
        if !self.chart_loaded || self.forecast.is_empty() {
            return false;
        }
        let Some(target) = target else {
            return false;
        };
        let moved = self.chart.live().map(|live| live.target()) != Some(target);
        if !self.chart_dirty && !moved {
            return false;
        }
        let locale = self.display_locale();
        let rendered = self.chart.render(Some(target), &self.forecast, &locale);
        if rendered {
            self.chart_dirty = false;
        }
        rendered
    }
}
