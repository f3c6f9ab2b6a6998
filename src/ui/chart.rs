#![allow(clippy::cast_precision_loss)]

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
};
use tracing::debug;

use crate::{
    domain::{locale::DisplayLocale, weather::ForecastEntry},
    ui::theme::Theme,
};

pub const SERIES_NAME: &str = "Temperature (°C)";

const MIN_TARGET_WIDTH: u16 = 20;
const MIN_TARGET_HEIGHT: u16 = 6;
const Y_PAD: f64 = 1.0;

/// A mounted panel a chart can be drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawTarget {
    area: Rect,
}

impl DrawTarget {
    /// `None` while the panel is too small to hold a chart.
    pub fn mounted(area: Rect) -> Option<Self> {
        (area.width >= MIN_TARGET_WIDTH && area.height >= MIN_TARGET_HEIGHT)
            .then_some(Self { area })
    }

    pub fn area(&self) -> Rect {
        self.area
    }
}

/// Time-of-day labels and temperatures, one pair per forecast entry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn from_forecast(forecast: &[ForecastEntry], locale: &DisplayLocale) -> Self {
        let (labels, values) = forecast
            .iter()
            .map(|entry| (locale.time_label(entry.timestamp), entry.temperature_c))
            .unzip();
        Self { labels, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn points(&self) -> Vec<(f64, f64)> {
        self.values
            .iter()
            .enumerate()
            .map(|(idx, value)| (idx as f64, *value))
            .collect()
    }

    /// Data range padded by a degree each side; never forced to include zero.
    pub fn y_bounds(&self) -> [f64; 2] {
        let (min, max) = self
            .values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(*v), hi.max(*v))
            });
        if min.is_finite() && max.is_finite() {
            [min - Y_PAD, max + Y_PAD]
        } else {
            [0.0, 1.0]
        }
    }

    fn axis_labels(&self) -> Vec<String> {
        match self.labels.as_slice() {
            [] => Vec::new(),
            [only] => vec![only.clone()],
            labels => {
                let mid = labels.len() / 2;
                vec![
                    labels[0].clone(),
                    labels[mid].clone(),
                    labels[labels.len() - 1].clone(),
                ]
            }
        }
    }
}

/// The one live chart bound to a draw target.
#[derive(Debug)]
pub struct ChartHandle {
    id: u64,
    target: DrawTarget,
    series: ChartSeries,
    points: Vec<(f64, f64)>,
}

impl ChartHandle {
    fn new(id: u64, target: DrawTarget, series: ChartSeries) -> Self {
        let points = series.points();
        Self {
            id,
            target,
            series,
            points,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn target(&self) -> DrawTarget {
        self.target
    }

    pub fn series(&self) -> &ChartSeries {
        &self.series
    }

    pub fn widget(&self, theme: Theme) -> Chart<'_> {
        let dataset = Dataset::default()
            .name(SERIES_NAME)
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(theme.accent))
            .data(&self.points);

        let [y_min, y_max] = self.series.y_bounds();
        let x_max = (self.points.len().saturating_sub(1) as f64).max(1.0);
        let muted = Style::default().fg(theme.muted_text);

        Chart::new(vec![dataset])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Temperature")
                    .border_style(Style::default().fg(theme.border)),
            )
            .x_axis(
                Axis::default()
                    .style(muted)
                    .bounds([0.0, x_max])
                    .labels(self.series.axis_labels()),
            )
            .y_axis(
                Axis::default()
                    .style(muted)
                    .bounds([y_min, y_max])
                    .labels([
                        Span::styled(format!("{y_min:.0}°"), muted),
                        Span::styled(
                            format!("{y_max:.0}°"),
                            muted.add_modifier(Modifier::BOLD),
                        ),
                    ]),
            )
    }
}

/// Owns at most one live chart. Every successful render disposes the previous
/// handle before creating the next, so redraws never stack.
#[derive(Debug, Default)]
pub struct ChartAdapter {
    live: Option<ChartHandle>,
    created: u64,
    disposed: u64,
}

impl ChartAdapter {
    /// Returns `false` and leaves the live chart untouched when there is no
    /// data or no mounted target yet.
    pub fn render(
        &mut self,
        target: Option<DrawTarget>,
        forecast: &[ForecastEntry],
        locale: &DisplayLocale,
    ) -> bool {
        let Some(target) = target else {
            return false;
        };
        if forecast.is_empty() {
            return false;
        }

        self.dispose();
        self.created += 1;
        let series = ChartSeries::from_forecast(forecast, locale);
        debug!(id = self.created, points = series.len(), "chart created");
        self.live = Some(ChartHandle::new(self.created, target, series));
        true
    }

    pub fn dispose(&mut self) {
        if let Some(handle) = self.live.take() {
            self.disposed += 1;
            debug!(id = handle.id, "chart disposed");
        }
    }

    pub fn live(&self) -> Option<&ChartHandle> {
        self.live.as_ref()
    }

    pub fn created(&self) -> u64 {
        self.created
    }

    pub fn disposed(&self) -> u64 {
        self.disposed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THURSDAY_00Z: i64 = 1_770_854_400;

    fn forecast(count: usize) -> Vec<ForecastEntry> {
        (0..count)
            .map(|idx| ForecastEntry {
                timestamp: THURSDAY_00Z + (idx as i64) * 3 * 3600,
                temperature_c: 10.0 + idx as f64,
                temp_min_c: 9.0,
                temp_max_c: 11.0,
                description: "few clouds".to_string(),
                icon: "02d".to_string(),
            })
            .collect()
    }

    fn target() -> Option<DrawTarget> {
        DrawTarget::mounted(Rect::new(0, 0, 60, 12))
    }

    #[test]
    fn series_labels_are_24_hour_times() {
        let series = ChartSeries::from_forecast(&forecast(9), &DisplayLocale::default());
        insta::assert_debug_snapshot!(series.labels, @r#"
        [
            "00:00",
            "03:00",
            "06:00",
            "09:00",
            "12:00",
            "15:00",
            "18:00",
            "21:00",
            "00:00",
        ]
        "#);
    }

    #[test]
    fn y_bounds_are_not_zero_based() {
        let series = ChartSeries::from_forecast(&forecast(3), &DisplayLocale::default());
        assert_eq!(series.y_bounds(), [9.0, 13.0]);
    }

    #[test]
    fn small_area_is_not_mounted() {
        assert!(DrawTarget::mounted(Rect::new(0, 0, 10, 3)).is_none());
        assert!(target().is_some());
    }

    #[test]
    fn render_defers_without_target_or_data() {
        let mut adapter = ChartAdapter::default();
        let locale = DisplayLocale::default();
        assert!(!adapter.render(None, &forecast(4), &locale));
        assert!(!adapter.render(target(), &[], &locale));
        assert!(adapter.live().is_none());
        assert_eq!(adapter.created(), 0);
    }

    #[test]
    fn rerender_disposes_previous_chart_first() {
        let mut adapter = ChartAdapter::default();
        let locale = DisplayLocale::default();

        assert!(adapter.render(target(), &forecast(4), &locale));
        assert!(adapter.render(target(), &forecast(6), &locale));
        assert!(adapter.render(target(), &forecast(8), &locale));

        assert_eq!(adapter.created(), 3);
        assert_eq!(adapter.disposed(), 2);
        let live = adapter.live().expect("live chart");
        assert_eq!(live.id(), 3);
        assert_eq!(live.series().len(), 8);
        assert_eq!(live.target().area(), Rect::new(0, 0, 60, 12));
    }

    #[test]
    fn deferred_render_keeps_existing_chart() {
        let mut adapter = ChartAdapter::default();
        let locale = DisplayLocale::default();
        adapter.render(target(), &forecast(4), &locale);
        assert!(!adapter.render(None, &forecast(6), &locale));
        assert_eq!(adapter.live().map(ChartHandle::id), Some(1));
        assert_eq!(adapter.disposed(), 0);
    }
}
