//! Logger capability abstraction
//!
//! Minimal logging capability trait supporting pluggable implementations
//! while keeping the pipeline pure. The CLI wires up a stderr logger,
//! optionally teed into the session log directory; library callers and
//! tests default to `NoOpLogger`.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Local;
use colored::Colorize;
use walkdir::WalkDir;

use crate::config::{LOG_DIR_FORMAT, LOG_RETENTION_DAYS};
use crate::paths;

/// Log level enumeration (expandable if needed)
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

/// Logger capability trait. Implementors should be lightweight & thread-safe.
pub trait Logger: Send + Sync {
    fn log(&self, level: LogLevel, message: &str);

    fn trace(&self, message: &str) {
        self.log(LogLevel::Trace, message);
    }
    fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }
    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }
    fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }
    fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}

/// No-op logger (default for pure contexts)
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpLogger;

impl Logger for NoOpLogger {
    #[inline]
    fn log(&self, _level: LogLevel, _message: &str) {}
}

/// Stderr logger with a minimum level and colored tags
#[derive(Debug, Clone, Copy)]
pub struct StderrLogger {
    pub min: LogLevel,
}

impl StderrLogger {
    #[must_use]
    pub const fn new(min: LogLevel) -> Self {
        Self { min }
    }

    const fn enabled(&self, level: LogLevel) -> bool {
        (level as u8) >= (self.min as u8)
    }
}

impl Logger for StderrLogger {
    fn log(&self, level: LogLevel, message: &str) {
        if !self.enabled(level) {
            return;
        }
        let tag = match level {
            LogLevel::Trace => "trace".dimmed(),
            LogLevel::Debug => "debug".dimmed(),
            LogLevel::Info => "info".green(),
            LogLevel::Warn => "warn".yellow().bold(),
            LogLevel::Error => "error".red().bold(),
        };
        eprintln!("[{tag}] {message}");
    }
}

/// Tees an inner logger into `<session-dir>/luminol.log`
pub struct FileLogger<L: Logger> {
    inner: L,
    file: Mutex<std::fs::File>,
}

impl<L: Logger> FileLogger<L> {
    /// Open (append) the session log file next to the subprocess logs
    pub fn new(inner: L, session_dir: &Path) -> std::io::Result<Self> {
        std::fs::create_dir_all(session_dir)?;
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(session_dir.join("luminol.log"))?;
        Ok(Self {
            inner,
            file: Mutex::new(file),
        })
    }
}

impl<L: Logger> Logger for FileLogger<L> {
    fn log(&self, level: LogLevel, message: &str) {
        self.inner.log(level, message);
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "[{level:?}] {message}");
        }
    }
}

/// Per-run session directory:
/// `$XDG_STATE_HOME/luminol/logs/YYYY-MM-DD_HH-MM-SS/`
#[must_use]
pub fn session_dir() -> PathBuf {
    logs_root().join(Local::now().format(LOG_DIR_FORMAT).to_string())
}

fn logs_root() -> PathBuf {
    paths::state_dir().join("logs")
}

/// Delete session directories older than the retention window
///
/// Advisory startup cleanup; every failure is ignored.
pub fn sweep_stale_logs() {
    sweep_stale_logs_in(&logs_root());
}

fn sweep_stale_logs_in(root: &Path) {
    let cutoff = std::time::SystemTime::now()
        - std::time::Duration::from_secs(60 * 60 * 24 * LOG_RETENTION_DAYS as u64);
    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .flatten()
    {
        if !entry.file_type().is_dir() {
            continue;
        }
        let stale = entry
            .metadata()
            .ok()
            .and_then(|m| m.modified().ok())
            .is_some_and(|modified| modified < cutoff);
        if stale {
            let _ = std::fs::remove_dir_all(entry.path());
        }
    }
}
