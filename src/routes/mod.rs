//! Request routing and the built-in handlers.
//!
//! Routing is a pure function of (method, target): the rule table is walked
//! in order and the first matching rule wins. Anything unmatched is a 404.
//!
//! | Method | Target          | Handler            |
//! |--------|-----------------|--------------------|
//! | any    | `/`             | empty 200          |
//! | any    | `/echo/{s}`     | [`echo`]           |
//! | any    | `/user-agent`   | [`user_agent`]     |
//! | GET    | `/files/{name}` | [`files::get`]     |
//! | POST   | `/files/{name}` | [`files::post`]    |

pub mod echo;
pub mod files;
pub mod user_agent;

pub use files::ServeDir;

use crate::http::error::HttpError;
use crate::http::request::{Method, Request};
use crate::http::response::Response;

/// The handler selected for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Root,
    Echo,
    UserAgent,
    FileGet,
    FilePost,
    NotFound,
}

struct Rule {
    matches: fn(&Method, &str) -> bool,
    route: Route,
}

const RULES: &[Rule] = &[
    Rule {
        matches: |_, target| target == "/",
        route: Route::Root,
    },
    Rule {
        matches: |_, target| target.starts_with("/echo"),
        route: Route::Echo,
    },
    Rule {
        matches: |_, target| target.starts_with("/user-agent"),
        route: Route::UserAgent,
    },
    Rule {
        matches: |method, target| *method == Method::GET && target.starts_with("/files"),
        route: Route::FileGet,
    },
    Rule {
        matches: |method, target| *method == Method::POST && target.starts_with("/files"),
        route: Route::FilePost,
    },
];

impl Route {
    /// Selects the route for a request.
    pub fn resolve(method: &Method, target: &str) -> Self {
        RULES
            .iter()
            .find(|rule| (rule.matches)(method, target))
            .map(|rule| rule.route)
            .unwrap_or(Route::NotFound)
    }
}

/// Routes `request` and runs the selected handler.
pub async fn dispatch(request: &Request, dir: &ServeDir) -> Result<Response, HttpError> {
    let route = Route::resolve(request.method(), request.target());
    tracing::debug!(?route, target = %request.target(), "Resolved route");

    match route {
        Route::Root => Ok(Response::ok()),
        Route::Echo => echo::handle(request),
        Route::UserAgent => Ok(user_agent::handle(request)),
        Route::FileGet => files::get(request, dir).await,
        Route::FilePost => files::post(request, dir).await,
        Route::NotFound => Ok(Response::not_found()),
    }
}

/// Extracts `{segment}` from a target shaped exactly `/{prefix}/{segment}`.
pub(crate) fn single_segment<'a>(
    target: &'a str,
    prefix: &str,
    expected: &'static str,
) -> Result<&'a str, HttpError> {
    let parts: Vec<&str> = target.split('/').collect();

    match parts.as_slice() {
        ["", p, segment] if *p == prefix => Ok(*segment),
        _ => Err(HttpError::MalformedTarget {
            target: target.to_string(),
            expected,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_requires_exact_shape() {
        assert_eq!(single_segment("/echo/abc", "echo", "").unwrap(), "abc");
        assert_eq!(single_segment("/echo/", "echo", "").unwrap(), "");
        assert!(single_segment("/echo", "echo", "").is_err());
        assert!(single_segment("/echo/a/b", "echo", "").is_err());
        assert!(single_segment("/echoes/a", "echo", "").is_err());
    }
}
