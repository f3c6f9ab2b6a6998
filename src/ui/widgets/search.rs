use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::state::AppState,
    ui::{theme::Theme, widgets::panel},
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let mut spans = vec![
        Span::styled("> ", Style::default().fg(theme.accent)),
        Span::styled(state.search_input.clone(), Style::default().fg(theme.text)),
        Span::styled("▏", Style::default().fg(theme.accent)),
    ];
    if state.is_fetching() {
        spans.push(Span::styled(
            "  Searching…",
            Style::default()
                .fg(theme.info)
                .add_modifier(Modifier::ITALIC),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(panel("City", theme));
    frame.render_widget(paragraph, area);
}

pub fn render_error(frame: &mut Frame, area: Rect, message: &str, theme: Theme) {
    let banner = Paragraph::new(Line::from(format!(" Error: {message}"))).style(
        Style::default()
            .fg(theme.danger)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(banner, area);
}

pub fn render_status(frame: &mut Frame, area: Rect, theme: Theme) {
    let help = Paragraph::new(Line::from(" Enter search · Backspace edit · Esc quit"))
        .style(Style::default().fg(theme.muted_text));
    frame.render_widget(help, area);
}
