pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod logging;
pub mod ui;

#[cfg(test)]
mod test_support;

use std::io::{self, Stdout};

use anyhow::{Context, Result};
use app::events::{AppEvent, spawn_input_task};
use app::settings::{RuntimeConfig, load_runtime_config};
use app::state::AppState;
use cli::Cli;
use crossterm::{
    event::DisableMouseCapture,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use data::openweather::WeatherClient;
use domain::{
    daily::reduce,
    locale::DisplayLocale,
    map::MapViewport,
    weather::{CitySearchQuery, WeatherReport, icon_url},
};
use futures::StreamExt;
use logging::LogSink;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use tokio::sync::mpsc;
use tracing::info;
use ui::chart::ChartSeries;

pub async fn run(cli: Cli) -> Result<()> {
    cli.validate()?;
    logging::init(LogSink::select(cli.log_file.as_deref(), cli.one_shot))?;
    let config = load_runtime_config(&cli)?;

    if cli.one_shot {
        let city = cli.initial_city().unwrap_or_default();
        let snapshot = run_one_shot(&config, city).await?;
        print!("{snapshot}");
        return Ok(());
    }

    let mut terminal = setup_terminal()?;
    let result = run_inner(&mut terminal, &config, cli.initial_city()).await;
    restore_terminal(&mut terminal)?;
    result
}

async fn run_inner(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: &RuntimeConfig,
    initial_city: Option<&str>,
) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<AppEvent>(256);
    let input_stream = spawn_input_task();
    tokio::pin!(input_stream);
    let mut app = AppState::new(config)?;
    info!(language = ?config.language, timezone = ?config.timezone, "dashboard started");

    tx.send(AppEvent::Bootstrap {
        city: initial_city.map(str::to_string),
    })
    .await?;

    while app.running {
        tokio::select! {
            maybe_input = input_stream.next() => {
                if let Some(input) = maybe_input {
                    app.handle_event(AppEvent::Input(input), &tx).await?;
                }
            }
            maybe_event = rx.recv() => {
                if let Some(event) = maybe_event {
                    app.handle_event(event, &tx).await?;
                }
            }
        }

        let size = terminal.size()?;
        let chart_target = ui::chart_target(Rect::new(0, 0, size.width, size.height), &app);
        app.sync_chart(chart_target);
        terminal.draw(|frame| ui::render(frame, &app))?;
    }

    Ok(())
}

/// Fetches once and renders a plain-text snapshot for stdout.
pub async fn run_one_shot(config: &RuntimeConfig, city: &str) -> Result<String> {
    let query = CitySearchQuery::parse(city)?;
    let client = WeatherClient::with_base_url(&config.base_url, &config.api_key, config.timeout)?;
    let report = client
        .fetch_weather(&query)
        .await
        .with_context(|| format!("weather lookup for {query} failed"))?;

    let locale = DisplayLocale::resolve(
        config.language,
        config.timezone,
        Some(report.current.utc_offset_secs),
    );
    Ok(format_snapshot(&report, &locale))
}

pub fn format_snapshot(report: &WeatherReport, locale: &DisplayLocale) -> String {
    let current = &report.current;
    let visibility = current
        .visibility_m
        .map_or_else(|| "--".to_string(), |meters| format!("{meters} m"));

    let mut lines = vec![
        format!("Weather in {}", current.city),
        format!("  {}", current.description),
        format!(
            "  Temperature {:.1}°C (feels like {:.1}°C)",
            current.temperature_c, current.feels_like_c
        ),
        format!("  Wind {:.1} m/s", current.wind_speed_mps),
        format!("  Visibility {visibility}"),
        format!("  Humidity {}%", current.humidity_pct),
        format!("  Icon {}", icon_url(&current.icon)),
        String::new(),
        "Next days".to_string(),
    ];
    lines.extend(reduce(&report.forecast, locale).into_iter().map(|summary| {
        format!(
            "  {:<10} max {:>5.1}°C  min {:>5.1}°C  {}",
            summary.day, summary.entry.temp_max_c, summary.entry.temp_min_c, summary.entry.description
        )
    }));

    let viewport = MapViewport::around(current.coord);
    lines.push(String::new());
    lines.push(format!("Map {}", viewport.embed_url()));

    let series = ChartSeries::from_forecast(&report.forecast, locale);
    let points = series
        .labels
        .iter()
        .zip(&series.values)
        .map(|(label, value)| format!("{label} {value:.1}"))
        .collect::<Vec<_>>();
    lines.push(String::new());
    lines.push(format!("{}: {}", ui::chart::SERIES_NAME, points.join(", ")));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn install_panic_hook() {
    let existing = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
        existing(panic);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::report;

    #[test]
    fn snapshot_lists_card_outlook_map_and_series() {
        let text = format_snapshot(&report("Paris", 2.35, 48.85), &DisplayLocale::default());

        assert!(text.starts_with("Weather in Paris\n"));
        assert!(text.contains("Temperature 18.2°C (feels like 17.5°C)"));
        assert!(text.contains("Visibility 10000 m"));
        assert!(text.contains("Humidity 60%"));
        assert!(text.contains("https://openweathermap.org/img/wn/01d.png"));
        assert_eq!(text.matches(" max ").count(), 5);
        assert!(text.contains("Thursday"));
        assert!(text.contains("bbox="));
        assert!(text.contains("Temperature (°C): 00:00 10.0, 03:00 11.0"));
    }
}
