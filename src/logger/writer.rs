//! Standard output log writer
//!
//! INFO lines go to stdout, ERROR lines to stderr, each prefixed with a
//! local timestamp and the severity. Lines are independent appends, so
//! concurrent callers need no coordination.

use chrono::Local;

use super::{Level, Logger};

/// Logger writing timestamped lines to stdout/stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct StdLogger;

impl Logger for StdLogger {
    fn log(&self, level: Level, message: &str) {
        let line = format_line(level, message);
        match level {
            Level::Info => println!("{line}"),
            Level::Error => eprintln!("{line}"),
        }
    }
}

fn format_line(level: Level, message: &str) -> String {
    format!(
        "[{}] [{level}] {message}",
        Local::now().format("%d/%b/%Y:%H:%M:%S %z")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_carries_level_and_message() {
        let line = format_line(Level::Info, "Received request: GET from 127.0.0.1:1");
        assert!(line.contains("[INFO]"));
        assert!(line.ends_with("Received request: GET from 127.0.0.1:1"));
    }

    #[test]
    fn error_level_is_tagged() {
        let line = format_line(Level::Error, "boom");
        assert!(line.contains("[ERROR]"));
    }
}
