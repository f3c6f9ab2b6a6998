use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{
        Paragraph,
        canvas::{Canvas, Map, MapResolution, Points, Rectangle},
    },
};

use crate::{
    app::state::AppState,
    domain::map::MapViewport,
    ui::{theme::Theme, widgets::panel},
};

/// Degrees of context shown around the viewport box on the world map.
const CONTEXT_DEGREES: f64 = 18.0;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let (Some(current), Some(viewport)) = (state.current.as_ref(), state.map_viewport()) else {
        let placeholder = Paragraph::new(Line::from("No location yet."))
            .style(Style::default().fg(theme.muted_text))
            .block(panel("Map", theme));
        frame.render_widget(placeholder, area);
        return;
    };

    let block = panel(format!("Map · {}", current.city), theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let (x_bounds, y_bounds) = canvas_bounds(&viewport);
    let city = (current.coord.longitude, current.coord.latitude);
    let canvas = Canvas::default()
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(move |ctx| {
            ctx.draw(&Map {
                color: theme.map_land,
                resolution: MapResolution::High,
            });
            ctx.layer();
            ctx.draw(&Rectangle {
                x: viewport.min_lon,
                y: viewport.min_lat,
                width: viewport.width(),
                height: viewport.height(),
                color: theme.accent,
            });
            ctx.draw(&Points {
                coords: &[city],
                color: theme.text,
            });
        });
    frame.render_widget(canvas, rows[0]);

    let url = Paragraph::new(Line::from(Span::styled(
        viewport.embed_url(),
        Style::default().fg(theme.muted_text),
    )));
    frame.render_widget(url, rows[1]);
}

/// World-map window centred on the viewport, clamped to valid coordinates.
pub(crate) fn canvas_bounds(viewport: &MapViewport) -> ([f64; 2], [f64; 2]) {
    let x = [
        (viewport.min_lon - CONTEXT_DEGREES).max(-180.0),
        (viewport.max_lon + CONTEXT_DEGREES).min(180.0),
    ];
    let y = [
        (viewport.min_lat - CONTEXT_DEGREES / 2.0).max(-90.0),
        (viewport.max_lat + CONTEXT_DEGREES / 2.0).min(90.0),
    ];
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::weather::Coordinate;

    #[test]
    fn bounds_surround_viewport() {
        let viewport = MapViewport::around(Coordinate {
            longitude: 2.35,
            latitude: 48.85,
        });
        let (x, y) = canvas_bounds(&viewport);
        assert!(x[0] < viewport.min_lon && x[1] > viewport.max_lon);
        assert!(y[0] < viewport.min_lat && y[1] > viewport.max_lat);
    }

    #[test]
    fn bounds_clamp_near_the_poles_and_antimeridian() {
        let viewport = MapViewport::around(Coordinate {
            longitude: 179.5,
            latitude: 85.0,
        });
        let (x, y) = canvas_bounds(&viewport);
        assert!((x[1] - 180.0).abs() < f64::EPSILON);
        assert!((y[1] - 90.0).abs() < f64::EPSILON);
    }
}
