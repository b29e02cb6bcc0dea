use chrono::Utc;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy)]
enum LogLevel {
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn tag(self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    fn ansi_color(self) -> &'static str {
        match self {
            LogLevel::Info => "\x1b[36m",
            LogLevel::Warn => "\x1b[93m",
            LogLevel::Error => "\x1b[91m",
        }
    }
}

/// Writes timestamped diagnostics to a log file and, colored, to stderr.
#[derive(Debug, Clone)]
pub struct Logger {
    log_file: PathBuf,
}

impl Logger {
    /// Creates the log directory if needed and truncates `{name}.log` in it.
    pub fn new(log_dir: &Path, name: &str) -> Result<Self, LoggerError> {
        fs::create_dir_all(log_dir)?;

        let log_file = log_dir.join(format!("{}.log", name));
        OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&log_file)?;

        Ok(Logger { log_file })
    }

    fn log(&self, level: LogLevel, message: &str) -> Result<(), LoggerError> {
        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S");
        let line = format!("[{}] [{}]: {}\n", level.tag(), timestamp, message);

        eprint!("{}{}\x1b[0m", level.ansi_color(), line);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file)?;
        file.write_all(line.as_bytes())?;
        file.flush()?;

        Ok(())
    }

    pub fn info(&self, message: &str) -> Result<(), LoggerError> {
        self.log(LogLevel::Info, message)
    }

    pub fn warn(&self, message: &str) -> Result<(), LoggerError> {
        self.log(LogLevel::Warn, message)
    }

    pub fn error(&self, message: &str) -> Result<(), LoggerError> {
        self.log(LogLevel::Error, message)
    }
}

#[derive(Debug)]
pub enum LoggerError {
    IoError(std::io::Error),
}

impl std::fmt::Display for LoggerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoggerError::IoError(e) => write!(f, "I/O Error: {}", e),
        }
    }
}

impl std::error::Error for LoggerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoggerError::IoError(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for LoggerError {
    fn from(err: std::io::Error) -> Self {
        LoggerError::IoError(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_logger_creation_and_logging() {
        let log_dir = std::env::temp_dir().join("games_map_logger_test");
        fs::create_dir_all(&log_dir).expect("Failed to create test directory");

        let logger = Logger::new(&log_dir, "viewer").expect("Failed to create logger");

        let message = "Test log message.";
        logger.info(message).expect("Failed to log message");
        logger.error("Something broke.").expect("Failed to log error");

        let log_contents =
            fs::read_to_string(log_dir.join("viewer.log")).expect("Failed to read log file");

        assert!(log_contents.contains("[INFO]"), "INFO level missing in log");
        assert!(log_contents.contains("[ERROR]"), "ERROR level missing in log");
        assert!(log_contents.contains(message), "Logged message missing");

        fs::remove_dir_all(&log_dir).expect("Failed to remove test directory");
    }

    #[test]
    fn test_new_creates_missing_directory() {
        let log_dir = std::env::temp_dir().join("games_map_logger_missing_dir");
        let _ = fs::remove_dir_all(&log_dir);

        let result = Logger::new(&log_dir, "viewer");
        assert!(result.is_ok(), "Logger should create the directory");

        fs::remove_dir_all(&log_dir).expect("Failed to remove test directory");
    }
}
