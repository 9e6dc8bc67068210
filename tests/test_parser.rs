use courier::http::error::HttpError;
use courier::http::parser::{parse_header_line, parse_request, parse_request_line};
use courier::http::request::{Method, Request};

async fn parse(raw: &[u8]) -> Result<Request, HttpError> {
    let mut reader = raw;
    parse_request(&mut reader).await
}

#[tokio::test]
async fn test_parse_simple_get_request() {
    let parsed = parse(b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n").await.unwrap();

    assert_eq!(parsed.line.method, Method::GET);
    assert_eq!(parsed.line.target, "/");
    assert_eq!(parsed.line.version, "HTTP/1.1");
    assert_eq!(parsed.headers.get("Host").unwrap(), "example.com");
    assert!(parsed.body.is_empty());
}

#[tokio::test]
async fn test_parse_post_request_with_body() {
    let parsed = parse(b"POST /files/a HTTP/1.1\r\nHost: localhost\r\nContent-Length: 5\r\n\r\nhello")
        .await
        .unwrap();

    assert_eq!(parsed.line.method, Method::POST);
    assert_eq!(parsed.line.target, "/files/a");
    assert_eq!(parsed.body, b"hello".to_vec());
}

#[tokio::test]
async fn test_parse_post_reads_only_content_length_bytes() {
    let mut reader: &[u8] = b"POST /x HTTP/1.1\r\nContent-Length: 3\r\n\r\nabcdef";
    let parsed = parse_request(&mut reader).await.unwrap();

    assert_eq!(parsed.body, b"abc".to_vec());
    assert_eq!(reader, b"def");
}

#[tokio::test]
async fn test_parse_multiple_headers() {
    let parsed = parse(
        b"GET /path HTTP/1.1\r\nHost: example.com\r\nUser-Agent: test-client\r\nAccept: */*\r\n\r\n",
    )
    .await
    .unwrap();

    assert_eq!(parsed.headers.get("Host").unwrap(), "example.com");
    assert_eq!(parsed.headers.get("User-Agent").unwrap(), "test-client");
    assert_eq!(parsed.headers.get("Accept").unwrap(), "*/*");
}

#[tokio::test]
async fn test_parse_duplicate_header_last_wins() {
    let parsed = parse(b"GET / HTTP/1.1\r\nX-A: first\r\nX-A: second\r\n\r\n").await.unwrap();

    assert_eq!(parsed.headers.len(), 1);
    assert_eq!(parsed.headers.get("X-A").unwrap(), "second");
}

#[tokio::test]
async fn test_parse_header_key_and_value_are_trimmed() {
    let parsed = parse(b"GET / HTTP/1.1\r\n  Spaced  :   value here  \r\n\r\n").await.unwrap();

    assert_eq!(parsed.headers.get("Spaced").unwrap(), "value here");
}

#[tokio::test]
async fn test_parse_unknown_method_is_kept() {
    let parsed = parse(b"BREW /echo/tea HTTP/1.1\r\n\r\n").await.unwrap();

    assert_eq!(parsed.line.method, Method::Other("BREW".to_string()));
}

#[tokio::test]
async fn test_parse_request_line_with_two_tokens() {
    let result = parse(b"GET /\r\n\r\n").await;

    assert!(matches!(result, Err(HttpError::MalformedRequest(_))));
}

#[tokio::test]
async fn test_parse_request_line_with_four_tokens() {
    let result = parse(b"GET / HTTP/1.1 extra\r\n\r\n").await;

    assert!(matches!(result, Err(HttpError::MalformedRequest(_))));
}

#[tokio::test]
async fn test_parse_malformed_header() {
    let result = parse(b"GET / HTTP/1.1\r\nBrokenHeader\r\n\r\n").await;

    assert!(matches!(result, Err(HttpError::MalformedRequest(_))));
}

#[tokio::test]
async fn test_parse_missing_blank_line_is_read_error() {
    let result = parse(b"GET / HTTP/1.1\r\nHost: example.com\r\n").await;

    assert!(matches!(result, Err(HttpError::ConnectionReadError(_))));
}

#[tokio::test]
async fn test_parse_empty_stream_is_read_error() {
    let result = parse(b"").await;

    assert!(matches!(result, Err(HttpError::ConnectionReadError(_))));
}

#[tokio::test]
async fn test_parse_post_without_content_length() {
    let result = parse(b"POST /files/a HTTP/1.1\r\n\r\n").await;

    assert!(matches!(result, Err(HttpError::InvalidContentLength(_))));
}

#[tokio::test]
async fn test_parse_post_with_negative_content_length() {
    let result = parse(b"POST /files/a HTTP/1.1\r\nContent-Length: -1\r\n\r\n").await;

    assert!(matches!(result, Err(HttpError::InvalidContentLength(v)) if v == "-1"));
}

#[tokio::test]
async fn test_parse_incomplete_request_partial_body() {
    let result = parse(b"POST /api HTTP/1.1\r\nContent-Length: 10\r\n\r\nhello").await;

    assert!(matches!(result, Err(HttpError::TruncatedBody { expected: 10 })));
}

#[tokio::test]
async fn test_parse_huge_content_length_with_short_body() {
    let result = parse(b"POST /files/a HTTP/1.1\r\nContent-Length: 4611686018427387903\r\n\r\nabc").await;

    assert!(matches!(
        result,
        Err(HttpError::TruncatedBody {
            expected: 4611686018427387903
        })
    ));
}

#[tokio::test]
async fn test_parse_request_with_empty_body() {
    let parsed = parse(b"POST /api HTTP/1.1\r\nContent-Length: 0\r\n\r\n").await.unwrap();

    assert_eq!(parsed.body.len(), 0);
}

#[tokio::test]
async fn test_parse_request_with_binary_body() {
    let parsed = parse(b"POST /upload HTTP/1.1\r\nContent-Length: 4\r\n\r\n\x00\x01\x02\x03")
        .await
        .unwrap();

    assert_eq!(parsed.body, vec![0, 1, 2, 3]);
}

#[tokio::test]
async fn test_parse_header_case_preservation() {
    let parsed = parse(b"GET / HTTP/1.1\r\nContent-Type: application/json\r\n\r\n").await.unwrap();

    // Headers are stored as-is with trimming
    assert!(parsed.headers.contains_key("Content-Type"));
    assert!(!parsed.headers.contains_key("content-type"));
}

#[test]
fn test_parse_request_line_tokens() {
    let line = parse_request_line("GET   /echo/x \t HTTP/1.1\r\n").unwrap();

    assert_eq!(line.method, Method::GET);
    assert_eq!(line.target, "/echo/x");
    assert_eq!(line.version, "HTTP/1.1");
}

#[test]
fn test_parse_header_line_splits_on_first_colon() {
    let (key, value) = parse_header_line("X-Time: 12:30:00\r\n").unwrap();

    assert_eq!(key, "X-Time");
    assert_eq!(value, "12:30:00");
}
