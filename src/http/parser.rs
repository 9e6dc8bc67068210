use std::collections::HashMap;
use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};

use crate::http::error::HttpError;
use crate::http::request::{Method, Request, RequestLine};

/// Reads one request from `reader`.
///
/// The request line and each header line are read up to `\n`; the header
/// block ends at a line that is exactly `"\r\n"`. Only POST requests carry
/// a body, framed by `Content-Length`. Line length and header count are
/// not limited.
pub async fn parse_request<R>(reader: &mut R) -> Result<Request, HttpError>
where
    R: AsyncBufRead + Unpin,
{
    let raw_line = read_line(reader).await?;
    let line = parse_request_line(&raw_line)?;

    tracing::debug!(
        method = line.method.as_str(),
        target = %line.target,
        version = %line.version,
        "Parsed request line"
    );

    let mut headers = HashMap::new();
    loop {
        let raw = read_line(reader).await?;
        if raw == "\r\n" {
            break;
        }

        let (key, value) = parse_header_line(&raw)?;
        headers.insert(key, value);
    }

    tracing::debug!(count = headers.len(), "Parsed headers");

    let body = if line.method == Method::POST {
        read_body(reader, &headers).await?
    } else {
        Vec::new()
    };

    Ok(Request {
        line,
        headers,
        body,
    })
}

/// Splits a request line into exactly three whitespace-separated tokens.
pub fn parse_request_line(raw: &str) -> Result<RequestLine, HttpError> {
    let parts: Vec<&str> = raw.split_whitespace().collect();

    match parts.as_slice() {
        [method, target, version] => Ok(RequestLine {
            method: Method::from(*method),
            target: target.to_string(),
            version: version.to_string(),
        }),
        _ => Err(HttpError::MalformedRequest(format!(
            "request line has {} tokens, expected 3",
            parts.len()
        ))),
    }
}

/// Splits a header line on its first colon, trimming both halves.
pub fn parse_header_line(raw: &str) -> Result<(String, String), HttpError> {
    let (key, value) = raw
        .split_once(':')
        .ok_or_else(|| HttpError::MalformedRequest(format!("header line {:?} has no colon", raw)))?;

    Ok((key.trim().to_string(), value.trim().to_string()))
}

async fn read_line<R>(reader: &mut R) -> Result<String, HttpError>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    reader
        .read_until(b'\n', &mut buf)
        .await
        .map_err(HttpError::ConnectionReadError)?;

    // EOF before the terminating newline
    if buf.last() != Some(&b'\n') {
        return Err(HttpError::ConnectionReadError(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "connection closed before end of line",
        )));
    }

    String::from_utf8(buf)
        .map_err(|_| HttpError::MalformedRequest("line is not valid UTF-8".to_string()))
}

async fn read_body<R>(reader: &mut R, headers: &HashMap<String, String>) -> Result<Vec<u8>, HttpError>
where
    R: AsyncBufRead + Unpin,
{
    let raw_len = headers.get("Content-Length").map(String::as_str).unwrap_or("");
    let content_length: usize = raw_len
        .parse()
        .map_err(|_| HttpError::InvalidContentLength(raw_len.to_string()))?;

    // Grows with the bytes actually received, not with the declared length
    let mut body = Vec::new();
    (&mut *reader)
        .take(content_length as u64)
        .read_to_end(&mut body)
        .await
        .map_err(HttpError::ConnectionReadError)?;

    if body.len() < content_length {
        return Err(HttpError::TruncatedBody {
            expected: content_length,
        });
    }

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn parse_simple_get() {
        let mut req: &[u8] = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";

        let parsed = parse_request(&mut req).await.unwrap();

        assert_eq!(parsed.target(), "/");
        assert_eq!(parsed.headers.get("Host").unwrap(), "example.com");
        assert!(req.is_empty());
    }

    #[tokio::test]
    async fn body_is_ignored_for_non_post() {
        let mut req: &[u8] = b"PUT /x HTTP/1.1\r\nContent-Length: 3\r\n\r\nabc";

        let parsed = parse_request(&mut req).await.unwrap();

        assert!(parsed.body.is_empty());
        assert_eq!(req, b"abc");
    }

    #[test]
    fn header_value_keeps_inner_colons() {
        let (key, value) = parse_header_line("Host: localhost:4221\r\n").unwrap();
        assert_eq!(key, "Host");
        assert_eq!(value, "localhost:4221");
    }
}
