use chrono::Local;
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

static LOGGER: once_cell::sync::Lazy<Mutex<Logger>> =
    once_cell::sync::Lazy::new(|| Mutex::new(Logger { path: None }));

#[derive(Debug, Clone, Copy)]
enum LogLevel {
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

struct Logger {
    path: Option<PathBuf>,
}

impl Logger {
    // logging must never break the UI loop, so failures are swallowed
    fn write(&self, level: LogLevel, message: &str) {
        let Some(path) = &self.path else {
            return;
        };
        let line = format!(
            "[{}] {} - {}\n",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            level,
            message
        );
        if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
            let _ = file.write_all(line.as_bytes());
        }
    }
}

fn log(level: LogLevel, message: &str) {
    if let Ok(logger) = LOGGER.lock() {
        logger.write(level, message);
    }
}

pub fn init_logger(log_path: PathBuf) {
    if let Ok(mut logger) = LOGGER.lock() {
        logger.path = Some(log_path);
    }
}

pub fn log_info(message: &str) {
    log(LogLevel::Info, message);
}

pub fn log_warn(message: &str) {
    log(LogLevel::Warn, message);
}

pub fn log_error(message: &str) {
    log(LogLevel::Error, message);
}
