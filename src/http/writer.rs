use std::io;

use bytes::{BufMut, Bytes, BytesMut};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::error::HttpError;
use crate::http::response::Response;

/// Renders a response as wire bytes: status line, header lines, one blank
/// line, then the body with nothing after it.
pub fn serialize_response(resp: &Response) -> Bytes {
    let status_line = resp.status.to_string();
    let headers_len: usize = resp
        .headers
        .iter()
        .map(|(k, v)| k.len() + v.len() + 4)
        .sum();

    let mut buf = BytesMut::with_capacity(status_line.len() + headers_len + 2 + resp.body.len());

    buf.put_slice(status_line.as_bytes());

    for (k, v) in &resp.headers {
        buf.put_slice(k.as_bytes());
        buf.put_slice(b": ");
        buf.put_slice(v.as_bytes());
        buf.put_slice(b"\r\n");
    }

    // Header/body separator
    buf.put_slice(b"\r\n");

    buf.put_slice(&resp.body);

    buf.freeze()
}

pub struct ResponseWriter {
    buffer: Bytes,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: serialize_response(response),
            written: 0,
        }
    }

    pub async fn write_to_stream<W>(&mut self, stream: &mut W) -> Result<(), HttpError>
    where
        W: AsyncWrite + Unpin,
    {
        while self.written < self.buffer.len() {
            let n = stream
                .write(&self.buffer[self.written..])
                .await
                .map_err(HttpError::ConnectionWriteError)?;

            if n == 0 {
                return Err(HttpError::ConnectionWriteError(io::Error::new(
                    io::ErrorKind::WriteZero,
                    "connection closed while writing",
                )));
            }

            self.written += n;
        }

        stream.flush().await.map_err(HttpError::ConnectionWriteError)
    }
}
