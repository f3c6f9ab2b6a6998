use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::{
    app::state::AppState,
    domain::{daily::DailySummary, weather::icon_glyph},
    ui::{
        theme::{Theme, temp_color},
        widgets::{format_temp, panel},
    },
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let summaries = state.daily_summaries();
    let block = panel("Next days", theme);

    if summaries.is_empty() {
        let placeholder = Paragraph::new(Line::from("No forecast yet."))
            .style(Style::default().fg(theme.muted_text))
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let count = u32::try_from(summaries.len()).unwrap_or(u32::MAX);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(summaries.iter().map(|_| Constraint::Ratio(1, count)))
        .split(inner);

    for (summary, column) in summaries.iter().zip(columns.iter()) {
        let day = Paragraph::new(day_lines(summary, theme)).wrap(Wrap { trim: true });
        frame.render_widget(day, *column);
    }
}

fn day_lines(summary: &DailySummary, theme: Theme) -> Vec<Line<'static>> {
    let entry = &summary.entry;
    let muted = Style::default().fg(theme.muted_text);
    vec![
        Line::from(Span::styled(
            summary.day.clone(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("{} {}", icon_glyph(&entry.icon), entry.description)),
        Line::from(vec![
            Span::styled("Max ", muted),
            Span::styled(
                format_temp(entry.temp_max_c),
                Style::default().fg(temp_color(&theme, entry.temp_max_c)),
            ),
        ]),
        Line::from(vec![
            Span::styled("Min ", muted),
            Span::styled(
                format_temp(entry.temp_min_c),
                Style::default().fg(temp_color(&theme, entry.temp_min_c)),
            ),
        ]),
    ]
}
