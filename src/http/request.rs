use std::collections::HashMap;

/// HTTP request methods.
///
/// Only the methods the router distinguishes get their own variant; any
/// other token is kept verbatim in `Other` since the method-agnostic routes
/// still answer it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// POST - Create or submit data
    POST,
    /// Any other method token
    Other(String),
}

impl Method {
    /// Returns the method token as it appears on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::Other(token) => token,
        }
    }
}

impl From<&str> for Method {
    /// Maps a method token to a `Method`. Matching is case-sensitive.
    ///
    /// ```
    /// # use courier::http::request::Method;
    /// assert_eq!(Method::from("GET"), Method::GET);
    /// assert_eq!(Method::from("get"), Method::Other("get".to_string()));
    /// ```
    fn from(s: &str) -> Self {
        match s {
            "GET" => Method::GET,
            "POST" => Method::POST,
            other => Method::Other(other.to_string()),
        }
    }
}

/// The first line of a request: `METHOD SP TARGET SP VERSION`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    pub method: Method,
    /// Request target, e.g. "/echo/abc"
    pub target: String,
    /// HTTP version token, e.g. "HTTP/1.1"
    pub version: String,
}

/// Represents a parsed HTTP request from a client.
///
/// Header names are case-sensitive map keys; a repeated header keeps the
/// last value seen. The body is only ever non-empty for POST requests.
#[derive(Debug, Clone)]
pub struct Request {
    pub line: RequestLine,
    /// Request headers as key-value pairs, both trimmed
    pub headers: HashMap<String, String>,
    /// Request body for POST requests
    pub body: Vec<u8>,
}

/// Builder for constructing Request objects.
pub struct RequestBuilder {
    method: Option<Method>,
    target: Option<String>,
    version: Option<String>,
    headers: HashMap<String, String>,
    body: Vec<u8>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: None,
            target: None,
            version: None,
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    pub fn build(self) -> Result<Request, &'static str> {
        Ok(Request {
            line: RequestLine {
                method: self.method.ok_or("method missing")?,
                target: self.target.ok_or("target missing")?,
                version: self.version.unwrap_or_else(|| "HTTP/1.1".to_string()),
            },
            headers: self.headers,
            body: self.body,
        })
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Request {
    pub fn method(&self) -> &Method {
        &self.line.method
    }

    pub fn target(&self) -> &str {
        &self.line.target
    }

    /// Retrieves a header value by its exact name.
    ///
    /// # Returns
    ///
    /// `Some(&str)` with the header value if present, `None` otherwise.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(|v| v.as_str())
    }
}
