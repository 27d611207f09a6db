//! Rolling Logger
//!
//! `tracing` subscriber that writes each formatted line to the browser
//! console (stderr off wasm) and keeps the last lines in a circular buffer,
//! so a screen can show recent activity without any log file.

use std::collections::VecDeque;
use std::io;
use std::sync::{Mutex, OnceLock};

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::MakeWriter;

/// Lines kept in the in-memory history
pub const HISTORY_CAPACITY: usize = 200;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("a global logger is already installed")]
    AlreadyInitialized,
}

// ========================
// History
// ========================

/// Circular buffer of formatted log lines
#[derive(Debug)]
pub struct LogHistory {
    lines: Mutex<VecDeque<String>>,
    capacity: usize,
}

impl LogHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity: capacity.max(1),
        }
    }

    /// Append a line, evicting the oldest once full
    pub fn push(&self, line: String) {
        let Ok(mut lines) = self.lines.lock() else {
            return;
        };
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Oldest first
    pub fn snapshot(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().map(|lines| lines.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn history() -> &'static LogHistory {
    static HISTORY: OnceLock<LogHistory> = OnceLock::new();
    HISTORY.get_or_init(|| LogHistory::new(HISTORY_CAPACITY))
}

/// The most recent log lines, oldest first
pub fn recent_lines() -> Vec<String> {
    history().snapshot()
}

// ========================
// Writer
// ========================

/// Hands out one [`ConsoleWriter`] per event
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &tracing::Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event; emitted on drop
#[derive(Debug)]
pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buf: Vec::new(),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buf).trim_end().to_string();
        emit(self.level, &line);
        history().push(line);
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let value = JsValue::from_str(line);
    match level {
        Level::ERROR => console::error_1(&value),
        Level::WARN => console::warn_1(&value),
        Level::INFO => console::info_1(&value),
        Level::DEBUG => console::log_1(&value),
        Level::TRACE => console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{line}");
}

// ========================
// Setup
// ========================

/// `HH:MM:SS.mmm` local time
#[derive(Debug, Clone, Copy, Default)]
pub struct ClockTime;

impl FormatTime for ClockTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%H:%M:%S%.3f"))
    }
}

/// Install the global subscriber. Events below `max_level` are dropped.
pub fn init_logger(app_name: &str, max_level: Level) -> Result<(), LoggerError> {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_ansi(false)
        .with_timer(ClockTime)
        .with_target(true)
        .with_writer(ConsoleMakeWriter)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|_| LoggerError::AlreadyInitialized)?;

    tracing::info!(app = app_name, "logger initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_history_evicts_oldest() {
        let history = LogHistory::new(3);
        for n in 1..=5 {
            history.push(format!("line {n}"));
        }
        assert_eq!(history.snapshot(), vec!["line 3", "line 4", "line 5"]);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_zero_capacity_keeps_one() {
        let history = LogHistory::new(0);
        history.push("a".into());
        history.push("b".into());
        assert_eq!(history.snapshot(), vec!["b"]);
    }

    #[test]
    fn test_writer_records_line_on_drop() {
        {
            let mut writer = ConsoleMakeWriter.make_writer();
            writer.write_all(b"writer-test marker\n").unwrap();
        }
        assert!(recent_lines().iter().any(|line| line == "writer-test marker"));
    }

    #[test]
    fn test_init_twice_fails() {
        let _ = init_logger("test", Level::DEBUG);
        let second = init_logger("test", Level::DEBUG);
        assert!(matches!(second, Err(LoggerError::AlreadyInitialized)));
    }
}
