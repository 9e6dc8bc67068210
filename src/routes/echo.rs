use crate::http::encoding::negotiate;
use crate::http::error::HttpError;
use crate::http::request::Request;
use crate::http::response::{Response, ResponseBuilder, StatusCode};
use crate::routes::single_segment;

/// `/echo/{s}`: responds with `s` as text, gzip-encoded when accepted.
///
/// `Content-Length` is the length of the body after encoding.
pub fn handle(request: &Request) -> Result<Response, HttpError> {
    let segment = single_segment(request.target(), "echo", "/echo/{str}")?;

    let negotiated = negotiate(request, segment.as_bytes().to_vec())?;

    let mut builder = ResponseBuilder::new(StatusCode::Ok).header("Content-Type", "text/plain");
    if let Some(encoding) = negotiated.content_encoding {
        builder = builder.header("Content-Encoding", encoding);
    }

    Ok(builder.body(negotiated.body).content_length().build())
}
