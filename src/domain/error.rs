use thiserror::Error;

/// Every way a search can end without new data. All variants are terminal for
/// the attempt; the message is shown verbatim in the error banner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("Please enter a city name")]
    EmptyQuery,

    #[error("Failed to fetch current conditions (HTTP {status})")]
    CurrentConditionsFailed { status: u16 },

    #[error("Failed to fetch forecast (HTTP {status})")]
    ForecastFailed { status: u16 },

    #[error("Network error: {0}")]
    Transport(String),
}

impl SearchError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyQuery => "empty_query",
            Self::CurrentConditionsFailed { .. } => "current_conditions_failed",
            Self::ForecastFailed { .. } => "forecast_failed",
            Self::Transport(_) => "transport",
        }
    }
}

// Request URLs carry the API key, so they are stripped from the message.
impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.without_url().to_string())
    }
}
