use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::{
    app::state::AppState,
    domain::weather::{CurrentConditions, icon_glyph, icon_url},
    ui::{
        theme::{Theme, temp_color},
        widgets::{format_temp, panel},
    },
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let Some(current) = state.current.as_ref() else {
        let placeholder = Paragraph::new(Line::from("Search for a city to see the weather."))
            .style(Style::default().fg(theme.muted_text))
            .block(panel("Current conditions", theme))
            .wrap(Wrap { trim: true });
        frame.render_widget(placeholder, area);
        return;
    };

    let card = Paragraph::new(card_lines(current, theme))
        .block(panel(format!("Weather in {}", current.city), theme))
        .wrap(Wrap { trim: true });
    frame.render_widget(card, area);
}

pub(crate) fn card_lines(current: &CurrentConditions, theme: Theme) -> Vec<Line<'static>> {
    let label = Style::default().fg(theme.muted_text);
    let value = Style::default().fg(theme.text);
    let visibility = current
        .visibility_m
        .map_or_else(|| "--".to_string(), |m| format!("{m} m"));

    vec![
        Line::from(vec![
            Span::styled(
                format!("{} ", icon_glyph(&current.icon)),
                Style::default().fg(theme.accent),
            ),
            Span::styled(
                current.description.clone(),
                value.add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Temperature ", label),
            Span::styled(
                format_temp(current.temperature_c),
                Style::default()
                    .fg(temp_color(&theme, current.temperature_c))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Feels like  ", label),
            Span::styled(format_temp(current.feels_like_c), value),
        ]),
        Line::from(vec![
            Span::styled("Wind        ", label),
            Span::styled(format!("{:.1} m/s", current.wind_speed_mps), value),
        ]),
        Line::from(vec![
            Span::styled("Visibility  ", label),
            Span::styled(visibility, value),
        ]),
        Line::from(vec![
            Span::styled("Humidity    ", label),
            Span::styled(format!("{}%", current.humidity_pct), value),
        ]),
        Line::from(Span::styled(icon_url(&current.icon), label)),
    ]
}
