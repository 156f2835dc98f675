//! HTTP response building module
//!
//! Provides the response builder used by the handler, decoupled from the
//! greeting itself.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build a 200 plain-text response with an explicit `Content-Length`
/// equal to the UTF-8 byte length of `content`.
pub fn build_text_response(content: &'static str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(200)
        .header("Content-Type", "text/plain; charset=utf-8")
        .header("Content-Length", content.len())
        .body(Full::new(Bytes::from_static(content.as_bytes())))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::from_static(content.as_bytes()))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_200() {
        let resp = build_text_response("Hello, World!");
        assert_eq!(resp.status(), 200);
    }

    #[test]
    fn content_length_matches_byte_length() {
        let resp = build_text_response("Hello, World!");
        let len = resp.headers().get("Content-Length").unwrap();
        assert_eq!(len, "13");
    }

    #[test]
    fn content_type_is_plain_text() {
        let resp = build_text_response("Hello, World!");
        let ct = resp.headers().get("Content-Type").unwrap();
        assert_eq!(ct, "text/plain; charset=utf-8");
    }
}
