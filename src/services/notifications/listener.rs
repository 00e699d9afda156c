//! Build log sinks.
//!
//! A host hands a [`BuildListener`] to every dispatch so error lines end up
//! in the build's own log.

use std::sync::Mutex;

/// Severity of a build log line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Warn,
    Error,
}

/// Sink for free-text build log lines
pub trait BuildListener: Send + Sync {
    fn error(&self, line: &str);

    fn warn(&self, line: &str);
}

/// Forwards build log lines to `tracing`
#[derive(Debug, Clone, Default)]
pub struct TracingListener {
    build: Option<String>,
}

impl TracingListener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tags every line with the build it belongs to
    pub fn for_build(build: impl Into<String>) -> Self {
        Self {
            build: Some(build.into()),
        }
    }
}

impl BuildListener for TracingListener {
    fn error(&self, line: &str) {
        match &self.build {
            Some(build) => tracing::error!(build = %build, "{}", line),
            None => tracing::error!("{}", line),
        }
    }

    fn warn(&self, line: &str) {
        match &self.build {
            Some(build) => tracing::warn!(build = %build, "{}", line),
            None => tracing::warn!("{}", line),
        }
    }
}

/// Keeps build log lines in memory
#[derive(Debug, Default)]
pub struct RecordingListener {
    lines: Mutex<Vec<(LogLevel, String)>>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<(LogLevel, String)> {
        self.lines
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|(level, _)| *level == LogLevel::Error)
            .map(|(_, line)| line)
            .collect()
    }

    fn push(&self, level: LogLevel, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((level, line.to_string()));
    }
}

impl BuildListener for RecordingListener {
    fn error(&self, line: &str) {
        self.push(LogLevel::Error, line);
    }

    fn warn(&self, line: &str) {
        self.push(LogLevel::Warn, line);
    }
}
