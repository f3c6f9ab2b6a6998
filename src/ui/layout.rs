use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::ui::chart::DrawTarget;

const SEARCH_ROWS: u16 = 3;
const ERROR_ROWS: u16 = 1;
const TOP_ROWS: u16 = 10;
const MIN_CHART_ROWS: u16 = 6;
const OUTLOOK_ROWS: u16 = 7;
const STATUS_ROWS: u16 = 1;

pub const MIN_WIDTH: u16 = 40;
/// Every fixed row at full size, error banner included.
pub const MIN_HEIGHT: u16 =
    SEARCH_ROWS + ERROR_ROWS + TOP_ROWS + MIN_CHART_ROWS + OUTLOOK_ROWS + STATUS_ROWS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardLayout {
    pub search: Rect,
    pub error: Option<Rect>,
    pub current: Rect,
    pub map: Rect,
    pub chart: Rect,
    pub outlook: Rect,
    pub status: Rect,
}

impl DashboardLayout {
    /// `None` when the terminal is too small for the dashboard.
    pub fn for_area(area: Rect, show_error: bool) -> Option<Self> {
        if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            return None;
        }

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(SEARCH_ROWS),
                Constraint::Length(if show_error { ERROR_ROWS } else { 0 }),
                Constraint::Length(TOP_ROWS),
                Constraint::Min(MIN_CHART_ROWS),
                Constraint::Length(OUTLOOK_ROWS),
                Constraint::Length(STATUS_ROWS),
            ])
            .split(area);

        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(rows[2]);

        Some(Self {
            search: rows[0],
            error: show_error.then_some(rows[1]),
            current: top[0],
            map: top[1],
            chart: rows[3],
            outlook: rows[4],
            status: rows[5],
        })
    }

    pub fn chart_target(&self) -> Option<DrawTarget> {
        DrawTarget::mounted(self.chart)
    }
}
