// Connection handling module
// Accepts connections and serves each one on its own task

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::{TcpListener, TcpStream};

use crate::handler;
use crate::logger::{self, Logger};

/// Accept connections until process exit, dispatching each to its own
/// task. Requests share no mutable state, so in-flight connections need
/// no synchronization.
///
/// Accept errors are logged and the loop continues.
pub async fn run(listener: TcpListener, logger: Arc<dyn Logger>) {
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                handle_connection(stream, peer_addr, Arc::clone(&logger));
            }
            Err(e) => {
                logger::log_accept_error(logger.as_ref(), &e);
            }
        }
    }
}

/// Serve a single connection in a spawned task.
///
/// Per-connection I/O errors (a client hanging up mid-write) are logged
/// and dropped; they never reach the accept loop.
fn handle_connection(stream: TcpStream, peer_addr: SocketAddr, logger: Arc<dyn Logger>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);
        let service_logger = Arc::clone(&logger);

        let conn = http1::Builder::new().serve_connection(
            io,
            service_fn(move |req| {
                handler::handle_request(req, peer_addr, Arc::clone(&service_logger))
            }),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(logger.as_ref(), &err);
        }
    });
}
