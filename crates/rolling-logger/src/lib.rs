//! Rolling Logger
//!
//! A `log` backend that keeps the most recent records in a circular buffer
//! and forwards each record to a sink (the browser console in the app).
//! The buffer can be snapshotted for a diagnostics view or dumped to any
//! writer.

use std::collections::VecDeque;
use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, OnceLock};

use chrono::{DateTime, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record};
use thiserror::Error;

/// Milliseconds since the Unix epoch. Injected because `SystemTime` is not
/// available on wasm32-unknown-unknown.
pub type Clock = fn() -> i64;

/// Receives every accepted record after it is buffered
pub type Sink = fn(&LogEntry);

#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:<5} [{}] {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

/// Fixed-capacity ring of log entries; the oldest entry is evicted first
#[derive(Debug)]
pub struct RollingBuffer {
    capacity: usize,
    entries: VecDeque<LogEntry>,
    dropped: u64,
}

impl RollingBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
            dropped: 0,
        }
    }

    pub fn push(&mut self, entry: LogEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
            self.dropped += 1;
        }
        self.entries.push_back(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries evicted since the buffer was created
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        if self.dropped > 0 {
            writeln!(out, "... {} earlier entries dropped", self.dropped)?;
        }
        for entry in &self.entries {
            writeln!(out, "{}", entry)?;
        }
        out.flush()
    }
}

pub struct LoggerConfig {
    pub app_name: &'static str,
    pub capacity: usize,
    pub level: LevelFilter,
    pub clock: Clock,
    pub sink: Option<Sink>,
}

struct RollingLogger {
    app_name: &'static str,
    level: LevelFilter,
    clock: Clock,
    sink: Option<Sink>,
    buffer: Mutex<RollingBuffer>,
}

impl RollingLogger {
    fn entry(&self, record: &Record) -> LogEntry {
        let timestamp = DateTime::from_timestamp_millis((self.clock)()).unwrap_or_default();
        LogEntry {
            timestamp,
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        }
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = self.entry(record);
        if let Some(sink) = self.sink {
            sink(&entry);
        }
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(entry);
        }
    }

    fn flush(&self) {}
}

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

#[derive(Debug, Error)]
pub enum InitError {
    #[error("rolling logger already initialized")]
    AlreadyInitialized,

    #[error("failed to install logger: {0}")]
    SetLogger(#[from] log::SetLoggerError),
}

/// Install the rolling logger as the global `log` backend
pub fn init_logger(config: LoggerConfig) -> Result<(), InitError> {
    let logger = RollingLogger {
        app_name: config.app_name,
        level: config.level,
        clock: config.clock,
        sink: config.sink,
        buffer: Mutex::new(RollingBuffer::new(config.capacity)),
    };
    LOGGER.set(logger).map_err(|_| InitError::AlreadyInitialized)?;
    let installed = LOGGER.get().ok_or(InitError::AlreadyInitialized)?;
    log::set_logger(installed)?;
    log::set_max_level(config.level);
    log::info!("[{}] Logger ready, keeping last {} entries", installed.app_name, config.capacity);
    Ok(())
}

/// Copy of the buffered entries, oldest first. Empty before `init_logger`.
pub fn snapshot() -> Vec<LogEntry> {
    LOGGER
        .get()
        .and_then(|logger| logger.buffer.lock().ok().map(|b| b.entries().cloned().collect()))
        .unwrap_or_default()
}

/// Write the buffered entries to `out`
pub fn dump<W: Write>(out: W) -> io::Result<()> {
    match LOGGER.get() {
        Some(logger) => {
            let buffer = logger
                .buffer
                .lock()
                .map_err(|_| io::Error::new(io::ErrorKind::Other, "log buffer poisoned"))?;
            buffer.write_to(out)
        }
        None => Ok(()),
    }
}

pub fn info(message: &str) {
    log::info!("{}", message);
}

pub fn warn(message: &str) {
    log::warn!("{}", message);
}

pub fn error(message: &str) {
    log::error!("{}", message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn entry(n: i64) -> LogEntry {
        LogEntry {
            timestamp: DateTime::from_timestamp_millis(n * 1000).unwrap(),
            level: Level::Info,
            target: "test".to_string(),
            message: format!("message {}", n),
        }
    }

    #[test]
    fn test_buffer_evicts_oldest() {
        let mut buffer = RollingBuffer::new(3);
        for n in 0..5 {
            buffer.push(entry(n));
        }
        let messages: Vec<_> = buffer.entries().map(|e| e.message.clone()).collect();
        assert_eq!(messages, vec!["message 2", "message 3", "message 4"]);
        assert_eq!(buffer.dropped(), 2);
    }

    #[test]
    fn test_zero_capacity_keeps_one() {
        let mut buffer = RollingBuffer::new(0);
        buffer.push(entry(1));
        buffer.push(entry(2));
        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn test_entry_format() {
        let line = entry(0).to_string();
        assert_eq!(line, "1970-01-01 00:00:00.000 INFO  [test] message 0");
    }

    #[test]
    fn test_write_to_file() {
        let mut buffer = RollingBuffer::new(2);
        for n in 0..3 {
            buffer.push(entry(n));
        }
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portal.log");
        buffer.write_to(fs::File::create(&path).unwrap()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "... 1 earlier entries dropped");
        assert!(lines[2].ends_with("message 2"));
    }

    #[test]
    fn test_init_error_messages() {
        assert_eq!(InitError::AlreadyInitialized.to_string(), "rolling logger already initialized");
        let source: &dyn std::error::Error = &InitError::AlreadyInitialized;
        assert!(source.source().is_none());
    }

    #[test]
    fn test_global_logger_buffers_records() {
        fn fixed_clock() -> i64 {
            86_400_000
        }
        init_logger(LoggerConfig {
            app_name: "test",
            capacity: 16,
            level: LevelFilter::Debug,
            clock: fixed_clock,
            sink: None,
        })
        .unwrap();
        assert!(matches!(
            init_logger(LoggerConfig {
                app_name: "again",
                capacity: 1,
                level: LevelFilter::Debug,
                clock: fixed_clock,
                sink: None,
            }),
            Err(InitError::AlreadyInitialized)
        ));

        warn("disk nearly full");
        log::trace!("filtered out");

        let entries = snapshot();
        assert!(entries.iter().any(|e| e.message == "disk nearly full" && e.level == Level::Warn));
        assert!(entries.iter().all(|e| e.message != "filtered out"));
        assert!(entries.iter().all(|e| e.timestamp.format("%Y-%m-%d").to_string() == "1970-01-02"));

        let mut out = Vec::new();
        dump(&mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("disk nearly full"));
    }
}
