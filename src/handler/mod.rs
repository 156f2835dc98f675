//! Request handler module
//!
//! Every request gets the same fixed greeting, whatever the method or
//! path. The handler is stateless, never reads the body, and emits one
//! INFO log line per request through the injected logger.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::http;
use crate::logger::{self, Logger};

/// Fixed response body returned for every request
pub const HELLO_BODY: &str = "Hello, World!";

/// Main entry point for HTTP request handling.
///
/// Generic over the body type; the body is never read.
pub async fn handle_request<B>(
    req: Request<B>,
    peer_addr: SocketAddr,
    logger: Arc<dyn Logger>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let response = http::build_text_response(HELLO_BODY);

    // The connection driver writes the response after we return; this is
    // the last point where the request method is still in scope.
    logger::log_request(logger.as_ref(), req.method(), peer_addr);

    Ok(response)
}
