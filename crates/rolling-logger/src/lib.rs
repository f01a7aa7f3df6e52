//! Rolling Logger
//!
//! A `log` backend for browser apps. Records go to the developer console and
//! the newest lines are kept in a bounded buffer so the UI can show them.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of lines kept in memory
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Bounded buffer of formatted lines, oldest first
#[derive(Debug)]
pub struct RollingBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl RollingBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a line, evicting the oldest one when full
    pub fn push(&mut self, line: String) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Console logger with a rolling history
pub struct RollingLogger {
    level: LevelFilter,
    buffer: Mutex<RollingBuffer>,
}

impl RollingLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            buffer: Mutex::new(RollingBuffer::new(capacity)),
        }
    }

    /// Copy of the buffered lines, oldest first
    pub fn snapshot(&self) -> Vec<String> {
        self.buffer
            .lock()
            .map(|buffer| buffer.lines())
            .unwrap_or_default()
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
        let line = format_record(record);
        emit(record.level(), &line);
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(line);
        }
    }

    fn flush(&self) {}
}

/// Install the global logger. Fails if a logger is already set.
pub fn init(level: LevelFilter, capacity: usize) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Buffered lines of the global logger (empty before `init`)
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(RollingLogger::snapshot).unwrap_or_default()
}

/// Format as `[TAG] message`, the tag being the last module of the target
pub fn format_record(record: &Record) -> String {
    format!("[{}] {}", target_tag(record.target()), record.args())
}

fn target_tag(target: &str) -> String {
    target
        .rsplit("::")
        .next()
        .unwrap_or(target)
        .to_uppercase()
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    match level {
        Level::Error => web_sys::console::error_1(&line.into()),
        Level::Warn => web_sys::console::warn_1(&line.into()),
        Level::Info => web_sys::console::info_1(&line.into()),
        Level::Debug | Level::Trace => web_sys::console::log_1(&line.into()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(level: Level, line: &str) {
    eprintln!("{:<5} {}", level, line);
}
