use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Paragraph, Wrap},
};

use crate::{
    app::state::AppState,
    ui::{theme::Theme, widgets::panel},
};

/// Draws the adapter's live chart into the target it was bound to; the adapter
/// is synced before each frame.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    match state.chart.live() {
        Some(handle) if state.chart_loaded => {
            frame.render_widget(handle.widget(theme), handle.target().area());
        }
        _ => {
            let message = if state.is_fetching() {
                "Loading forecast…"
            } else {
                "The temperature chart appears after a search."
            };
            let placeholder = Paragraph::new(Line::from(message))
                .style(Style::default().fg(theme.muted_text))
                .block(panel("Temperature", theme))
                .wrap(Wrap { trim: true });
            frame.render_widget(placeholder, area);
        }
    }
}
