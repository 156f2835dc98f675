//! Logger module
//!
//! Logging goes through a `Logger` collaborator that is passed into the
//! accept loop and the request handler, rather than a process-wide global.
//! Tests inject a capturing implementation; the binary uses `StdLogger`.

pub mod writer;

pub use writer::StdLogger;

use hyper::Method;
use std::fmt;
use std::net::SocketAddr;

/// Log severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => f.write_str("INFO"),
            Self::Error => f.write_str("ERROR"),
        }
    }
}

/// Logging collaborator with a single capability
pub trait Logger: Send + Sync {
    fn log(&self, level: Level, message: &str);
}

pub fn log_server_start(logger: &dyn Logger, addr: &SocketAddr) {
    logger.log(
        Level::Info,
        &format!("HTTP Server started at http://localhost:{}", addr.port()),
    );
}

/// One line per served request: method plus remote address.
pub fn log_request(logger: &dyn Logger, method: &Method, peer_addr: SocketAddr) {
    logger.log(
        Level::Info,
        &format!("Received request: {method} from {peer_addr}"),
    );
}

pub fn log_bind_failed(logger: &dyn Logger, addr: &SocketAddr, err: &std::io::Error) {
    logger.log(Level::Error, &format!("Failed to bind {addr}: {err}"));
}

pub fn log_accept_error(logger: &dyn Logger, err: &std::io::Error) {
    logger.log(Level::Error, &format!("Failed to accept connection: {err}"));
}

pub fn log_connection_error(logger: &dyn Logger, err: &impl fmt::Debug) {
    logger.log(Level::Error, &format!("Failed to serve connection: {err:?}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct CaptureLogger {
        lines: Mutex<Vec<(Level, String)>>,
    }

    impl Logger for CaptureLogger {
        fn log(&self, level: Level, message: &str) {
            self.lines.lock().unwrap().push((level, message.to_string()));
        }
    }

    #[test]
    fn request_line_contains_method_and_peer() {
        let capture = CaptureLogger::default();
        let peer: SocketAddr = "192.0.2.7:51324".parse().unwrap();

        log_request(&capture, &Method::GET, peer);

        let lines = capture.lines.lock().unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].0, Level::Info);
        assert!(lines[0].1.contains("GET"));
        assert!(lines[0].1.contains("192.0.2.7:51324"));
    }

    #[test]
    fn server_start_line_uses_bound_port() {
        let capture = CaptureLogger::default();
        let addr: SocketAddr = "0.0.0.0:8080".parse().unwrap();

        log_server_start(&capture, &addr);

        let lines = capture.lines.lock().unwrap();
        assert_eq!(
            lines[0].1,
            "HTTP Server started at http://localhost:8080"
        );
    }

    #[test]
    fn level_display() {
        assert_eq!(Level::Info.to_string(), "INFO");
        assert_eq!(Level::Error.to_string(), "ERROR");
    }
}
