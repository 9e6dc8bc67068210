use crate::http::request::Request;
use crate::http::response::{Response, ResponseBuilder, StatusCode};

/// Echoes the `User-Agent` header back; a missing header is an empty body.
pub fn handle(request: &Request) -> Response {
    let agent = request.header("User-Agent").unwrap_or("");

    ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", "text/plain")
        .body(agent.as_bytes().to_vec())
        .content_length()
        .build()
}
