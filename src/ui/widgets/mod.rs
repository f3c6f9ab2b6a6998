pub mod current;
pub mod map;
pub mod outlook;
pub mod search;
pub mod temperature;

use ratatui::{
    style::Style,
    widgets::{Block, Borders},
};

use crate::{app::state::AppState, ui::theme::Theme, ui::theme::theme_for_icon};

/// Theme for the city on screen, or the neutral one before the first search.
pub fn state_theme(state: &AppState) -> Theme {
    state
        .current
        .as_ref()
        .map_or_else(Theme::default, |current| theme_for_icon(&current.icon))
}

pub(crate) fn panel(title: impl Into<String>, theme: Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(title.into())
        .border_style(Style::default().fg(theme.border))
}

pub(crate) fn format_temp(celsius: f64) -> String {
    format!("{celsius:.1}°C")
}
