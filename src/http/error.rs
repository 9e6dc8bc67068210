use std::io;

use thiserror::Error;

/// Failures that abort processing of a single connection.
///
/// None of these produce a response: the connection is closed and the
/// error is logged by the listener.
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("malformed request: {0}")]
    MalformedRequest(String),

    #[error("invalid Content-Length: {0:?}")]
    InvalidContentLength(String),

    #[error("request body truncated: expected {expected} bytes")]
    TruncatedBody { expected: usize },

    #[error("malformed target {target:?}, expected {expected}")]
    MalformedTarget {
        target: String,
        expected: &'static str,
    },

    #[error("failed to read file {name:?}: {source}")]
    FileReadError {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to write file {name:?}: {source}")]
    FileWriteError {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("gzip compression failed: {0}")]
    CompressionError(#[source] io::Error),

    #[error("error reading from connection: {0}")]
    ConnectionReadError(#[source] io::Error),

    #[error("error writing to connection: {0}")]
    ConnectionWriteError(#[source] io::Error),

    #[error("request not received within the read deadline")]
    ReadTimeout,
}
