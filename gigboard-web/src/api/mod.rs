//! HTTP handlers
//!
//! Errors are converted at this boundary: not-found becomes the 404 page,
//! mutating-route failures become a flash message and a redirect to a safe
//! page, and anything else becomes the 500 page. Raw errors never reach
//! the client.

pub mod artists;
pub mod health;
pub mod home;
pub mod shows;
pub mod venues;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use gigboard_common::Error;

/// Handler-boundary error, rendered as an error page
#[derive(Debug)]
pub enum PageError {
    NotFound,
    Internal(String),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            PageError::NotFound => (
                StatusCode::NOT_FOUND,
                Html(crate::views::errors::not_found_page()),
            )
                .into_response(),
            PageError::Internal(message) => {
                tracing::error!("request failed: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(crate::views::errors::server_error_page()),
                )
                    .into_response()
            }
        }
    }
}

impl From<Error> for PageError {
    fn from(error: Error) -> Self {
        match error {
            Error::NotFound(_) => PageError::NotFound,
            other => PageError::Internal(other.to_string()),
        }
    }
}

/// Parse a path segment as a record id; anything non-numeric is a 404,
/// same as a numeric id with no matching record
pub(crate) fn parse_id(raw: &str) -> Result<i64, PageError> {
    raw.parse::<i64>().map_err(|_| PageError::NotFound)
}
