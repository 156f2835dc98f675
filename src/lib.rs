//! Minimal greeting HTTP server
//!
//! Binds a fixed port and answers every request, regardless of method or
//! path, with `Hello, World!`. Each served request produces one INFO log
//! line with the request method and the remote address.

pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
