//! Redirect handling: every request becomes a 302.
//!
//! # Responsibilities
//! - Build the Location value: target origin plus path-and-query, verbatim
//! - Answer any method on any path with 302 and an empty body
//! - Log one line per request for operator visibility
//!
//! # Design Decisions
//! - No path rewriting: query strings and odd paths pass through unchanged
//! - Method is ignored; GET and POST get the same answer
//! - Handler is stateless and idempotent; each request is independent

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    response::{IntoResponse, Response},
};

use crate::http::server::AppState;

/// Build the redirect target for a request path.
///
/// Pure concatenation. An empty path-and-query stays empty rather than being
/// normalized to "/".
pub fn redirect_location(origin: &str, path_and_query: &str) -> String {
    format!("{}{}", origin, path_and_query)
}

/// Handler registered for every route: respond 302 with the mapped Location.
pub async fn redirect_handler(
    State(state): State<AppState>,
    request: Request<Body>,
) -> Response {
    let path_and_query = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("");

    let location = redirect_location(&state.target_origin, path_and_query);

    tracing::info!(
        "Redirecting from :{}{} to {}",
        state.listen_port,
        path_and_query,
        location
    );

    match Response::builder()
        .status(StatusCode::FOUND)
        .header(header::LOCATION, location.as_str())
        .body(Body::empty())
    {
        Ok(response) => response,
        Err(e) => {
            // Location came from a URI hyper already parsed; a builder
            // failure here means the value is not a legal header.
            tracing::error!(error = %e, location = %location, "Failed to build redirect response");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_for_root() {
        assert_eq!(
            redirect_location("http://localhost:5000", "/"),
            "http://localhost:5000/"
        );
    }

    #[test]
    fn test_location_preserves_query() {
        assert_eq!(
            redirect_location("http://localhost:5000", "/api/users?id=5"),
            "http://localhost:5000/api/users?id=5"
        );
    }

    #[test]
    fn test_location_for_deep_path() {
        assert_eq!(
            redirect_location("http://localhost:5000", "/a/b/c/d"),
            "http://localhost:5000/a/b/c/d"
        );
    }

    #[test]
    fn test_empty_path_passes_through() {
        assert_eq!(
            redirect_location("http://localhost:5000", ""),
            "http://localhost:5000"
        );
    }
}
