use std::{
    fmt,
    sync::{Arc, RwLock},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Fatal,
    Error,
    Warn,
    Info,
    Debug,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Fatal => write!(f, "fatal"),
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
        }
    }
}

impl From<LogLevel> for log::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Fatal | LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
        }
    }
}

/// Destination for purchase events. Never fails.
pub trait LogSink {
    fn log(&self, level: LogLevel, message: &str);

    fn fatal(&self, message: &str) {
        self.log(LogLevel::Fatal, message)
    }

    fn error(&self, message: &str) {
        self.log(LogLevel::Error, message)
    }

    fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message)
    }

    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message)
    }

    fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message)
    }
}

/// Forwards to the `log` facade.
#[derive(Debug, Default, Clone)]
pub struct LogCrateSink {}

impl LogSink for LogCrateSink {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Fatal => log::error!("FATAL: {message}"),
            _ => log::log!(log::Level::from(level), "{message}"),
        }
    }
}

/// Keeps every event in memory. Clones share the same record.
#[derive(Debug, Default, Clone)]
pub struct MemoryLogSink {
    events: Arc<RwLock<Vec<(LogLevel, String)>>>,
}

impl MemoryLogSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<(LogLevel, String)> {
        self.events.read().expect("log events lock").clone()
    }

    pub fn count(&self, level: LogLevel) -> usize {
        self.events
            .read()
            .expect("log events lock")
            .iter()
            .filter(|(l, _)| *l == level)
            .count()
    }
}

impl LogSink for MemoryLogSink {
    fn log(&self, level: LogLevel, message: &str) {
        self.events
            .write()
            .expect("log events lock")
            .push((level, message.to_string()));
    }
}
