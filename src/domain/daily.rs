use crate::domain::{locale::DisplayLocale, weather::ForecastEntry};

/// One forecast entry standing in for a whole day in the outlook strip.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySummary {
    pub day: String,
    pub entry: ForecastEntry,
}

/// Keeps the first entry seen for each weekday label, in first-seen order.
///
/// The key is the rendered weekday name, not the calendar date: two entries a
/// week apart would collapse into one summary. A 40 x 3h window spans at most
/// six days, so this never happens for provider data.
pub fn reduce(forecast: &[ForecastEntry], locale: &DisplayLocale) -> Vec<DailySummary> {
    forecast
        .iter()
        .fold(Vec::<DailySummary>::new(), |mut acc, entry| {
            let day = locale.weekday_label(entry.timestamp);
            if !acc.iter().any(|summary| summary.day == day) {
                acc.push(DailySummary {
                    day,
                    entry: entry.clone(),
                });
            }
            acc
        })
}
