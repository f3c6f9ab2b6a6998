pub mod chart;
pub mod layout;
pub mod theme;
pub mod widgets;

use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Paragraph, Wrap},
};

use crate::{
    app::state::AppState,
    ui::{
        chart::DrawTarget,
        layout::{DashboardLayout, MIN_HEIGHT, MIN_WIDTH},
        widgets::panel,
    },
};

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let theme = widgets::state_theme(state);

    let Some(layout) = DashboardLayout::for_area(area, state.last_error.is_some()) else {
        let warning = Paragraph::new(format!(
            "Terminal too small. Resize to at least {MIN_WIDTH}x{MIN_HEIGHT}."
        ))
        .block(panel("weather-dash", theme))
        .wrap(Wrap { trim: true });
        frame.render_widget(warning, area);
        return;
    };

    widgets::search::render(frame, layout.search, state, theme);
    if let (Some(error_area), Some(message)) = (layout.error, state.last_error.as_deref()) {
        widgets::search::render_error(frame, error_area, message, theme);
    }
    widgets::current::render(frame, layout.current, state, theme);
    widgets::map::render(frame, layout.map, state, theme);
    widgets::temperature::render(frame, layout.chart, state, theme);
    widgets::outlook::render(frame, layout.outlook, state, theme);
    widgets::search::render_status(frame, layout.status, theme);
}

/// Chart panel for a frame of `area`, matching what [`render`] will lay out.
pub fn chart_target(area: Rect, state: &AppState) -> Option<DrawTarget> {
    DashboardLayout::for_area(area, state.last_error.is_some())
        .and_then(|layout| layout.chart_target())
}
