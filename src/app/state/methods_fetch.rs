use super::*;

impl AppState {
    pub(crate) fn submit_search_input(&mut self, tx: &mpsc::Sender<AppEvent>) -> bool {
        let raw = self.search_input.clone();
        self.on_search_submit(&raw, tx)
    }

    /// Starts a search for `raw_input`. Blank input only sets the error and
    /// never reaches the network. Returns whether a fetch was started.
    pub fn on_search_submit(&mut self, raw_input: &str, tx: &mpsc::Sender<AppEvent>) -> bool {
        let query = match CitySearchQuery::parse(raw_input) {
            Ok(query) => query,
            Err(err) => {
                debug!("rejected blank search");
                self.last_error = Some(err.to_string());
                return false;
            }
        };

        self.latest_seq += 1;
        self.phase = SearchPhase::Fetching;
        info!(seq = self.latest_seq, city = %query, "search started");
        Self::spawn_fetch(self.client.clone(), query, self.latest_seq, tx);
        true
    }

    pub(crate) fn spawn_fetch(
        client: WeatherClient,
        query: CitySearchQuery,
        seq: u64,
        tx: &mpsc::Sender<AppEvent>,
    ) {
        let tx2 = tx.clone();
        tokio::spawn(async move {
            let result = client.fetch_weather(&query).await;
            let _ = tx2.send(AppEvent::SearchCompleted { seq, result }).await;
        });
    }

    /// Applies a finished search. Completions from anything but the most
    /// recent submit are dropped. A failure only touches the error field.
    pub fn apply_search_result(&mut self, seq: u64, result: Result<WeatherReport, SearchError>) {
        if seq != self.latest_seq {
            debug!(seq, latest = self.latest_seq, "discarding stale search result");
            return;
        }

        match result {
            Ok(report) => {
                info!(
                    seq,
                    city = %report.current.city,
                    entries = report.forecast.len(),
                    "search succeeded"
                );
                self.current = Some(report.current);
                self.forecast = report.forecast;
                self.last_error = None;
                self.chart_loaded = true;
                self.chart_dirty = true;
                self.phase = SearchPhase::Success;
            }
            Err(err) => {
                warn!(seq, kind = err.kind(), error = %err, "search failed");
                self.last_error = Some(err.to_string());
                self.phase = SearchPhase::Failure;
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn latest_seq(&self) -> u64 {
        self.latest_seq
    }
}
