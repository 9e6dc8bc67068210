//! Content-encoding negotiation.
//!
//! Only gzip is supported. The client's `Accept-Encoding` list is checked
//! for an exact `gzip` token; anything else is ignored.

use std::io::Write;

use flate2::Compression;
use flate2::write::GzEncoder;

use crate::http::error::HttpError;
use crate::http::request::Request;

/// A body after negotiation, plus the `Content-Encoding` value it needs
/// (if any).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Negotiated {
    pub content_encoding: Option<&'static str>,
    pub body: Vec<u8>,
}

/// Returns true if the comma-separated `Accept-Encoding` value lists gzip.
pub fn accepts_gzip(accept_encoding: &str) -> bool {
    accept_encoding.split(',').any(|token| token.trim() == "gzip")
}

/// Applies gzip to `body` at most once if the request accepts it.
pub fn negotiate(request: &Request, body: Vec<u8>) -> Result<Negotiated, HttpError> {
    let wants_gzip = request.header("Accept-Encoding").is_some_and(accepts_gzip);

    if !wants_gzip {
        return Ok(Negotiated {
            content_encoding: None,
            body,
        });
    }

    let compressed = gzip(&body)?;
    tracing::debug!(
        original = body.len(),
        compressed = compressed.len(),
        "Compressed response body with gzip"
    );

    Ok(Negotiated {
        content_encoding: Some("gzip"),
        body: compressed,
    })
}

fn gzip(data: &[u8]) -> Result<Vec<u8>, HttpError> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(data)
        .map_err(HttpError::CompressionError)?;
    encoder.finish().map_err(HttpError::CompressionError)
}
