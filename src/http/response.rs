use std::fmt;

/// HTTP status codes produced by the server.
///
/// - `Ok` (200): Request successful
/// - `Created` (201): File written
/// - `NotFound` (404): Unknown route or missing file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 201 Created
    Created,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use courier::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Created => 201,
            StatusCode::NotFound => 404,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Created => "Created",
            StatusCode::NotFound => "Not Found",
        }
    }
}

/// The first line of a response: version, numeric code and reason phrase.
///
/// Handlers pick the code and reason; the version is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    version: String,
    pub code: u16,
    /// May be empty, in which case it is left off the wire entirely
    pub reason: String,
}

impl StatusLine {
    pub fn new(version: impl Into<String>, code: u16, reason: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            code,
            reason: reason.into(),
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

impl Default for StatusLine {
    fn default() -> Self {
        StatusCode::Ok.into()
    }
}

impl From<StatusCode> for StatusLine {
    fn from(status: StatusCode) -> Self {
        Self::new("HTTP/1.1", status.as_u16(), status.reason_phrase())
    }
}

impl fmt::Display for StatusLine {
    /// Renders `"{version} {code} {reason}\r\n"`, or `"{version} {code}\r\n"`
    /// when the reason is empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.reason.is_empty() {
            write!(f, "{} {}\r\n", self.version, self.code)
        } else {
            write!(f, "{} {} {}\r\n", self.version, self.code, self.reason)
        }
    }
}

/// The result of handling one request.
///
/// Headers keep insertion order and are written exactly as given; nothing
/// is added automatically, so handlers own `Content-Length`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: StatusLine,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```
/// # use courier::http::response::{ResponseBuilder, StatusCode};
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .header("Content-Type", "text/plain")
///     .body(b"hi".to_vec())
///     .content_length()
///     .build();
/// assert_eq!(response.header("Content-Length"), Some("2"));
/// ```
pub struct ResponseBuilder {
    status: StatusLine,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl ResponseBuilder {
    pub fn new(status: impl Into<StatusLine>) -> Self {
        Self {
            status: status.into(),
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Appends a header line. Duplicate names are kept.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Appends `Content-Length` for the body as currently set.
    pub fn content_length(self) -> Self {
        let len = self.body.len();
        self.header("Content-Length", len.to_string())
    }

    pub fn build(self) -> Response {
        Response {
            status: self.status,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Response {
    /// 200 OK with no headers and an empty body.
    pub fn ok() -> Self {
        ResponseBuilder::new(StatusCode::Ok).build()
    }

    /// 201 Created with no headers and an empty body.
    pub fn created() -> Self {
        ResponseBuilder::new(StatusCode::Created).build()
    }

    /// 404 Not Found with no headers and an empty body.
    pub fn not_found() -> Self {
        ResponseBuilder::new(StatusCode::NotFound).build()
    }

    /// First header value with the given name.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}
