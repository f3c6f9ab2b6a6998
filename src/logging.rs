use std::{fs::OpenOptions, path::Path, sync::Mutex};

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "info";

/// Where log lines go for this run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink<'a> {
    /// The terminal is owned by the dashboard; nothing is written.
    Silent,
    File(&'a Path),
    Stderr,
}

impl<'a> LogSink<'a> {
    pub fn select(log_file: Option<&'a Path>, one_shot: bool) -> Self {
        match (log_file, one_shot) {
            (Some(path), _) => Self::File(path),
            (None, true) => Self::Stderr,
            (None, false) => Self::Silent,
        }
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init(sink: LogSink<'_>) -> Result<()> {
    if sink == LogSink::Silent {
        return Ok(());
    }
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_layer = match sink {
        LogSink::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        LogSink::Silent | LogSink::Stderr => None,
    };
    let stderr_layer = (sink == LogSink::Stderr).then(|| {
        fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
    });

    // A subscriber may already be installed by an embedding binary or a test.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn file_wins_over_stderr() {
        let path = PathBuf::from("/tmp/weather.log");
        assert_eq!(
            LogSink::select(Some(&path), true),
            LogSink::File(path.as_path())
        );
    }

    #[test]
    fn interactive_without_file_is_silent() {
        assert_eq!(LogSink::select(None, false), LogSink::Silent);
        assert_eq!(LogSink::select(None, true), LogSink::Stderr);
    }

    #[test]
    fn file_sink_creates_log_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("dash.log");
        init(LogSink::File(&path)).expect("init");
        assert!(path.exists());
    }
}
