use crossterm::event::{Event, EventStream};
use futures::StreamExt;

use crate::domain::{error::SearchError, weather::WeatherReport};

#[derive(Debug)]
pub enum AppEvent {
    Bootstrap { city: Option<String> },
    Input(Event),
    SearchCompleted {
        seq: u64,
        result: Result<WeatherReport, SearchError>,
    },
    Quit,
}

pub fn spawn_input_task() -> impl futures::Stream<Item = Event> {
    EventStream::new().filter_map(|event| async move { event.ok() })
}
