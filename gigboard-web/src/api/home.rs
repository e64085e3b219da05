//! Home page and fallback routes

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum_extra::extract::CookieJar;

use crate::flash::take_flash;
use crate::views;

/// GET /
pub async fn index(jar: CookieJar) -> Response {
    let (jar, flash) = take_flash(jar);
    (jar, Html(views::home_page(flash.as_deref()))).into_response()
}

/// Fallback for unknown routes
pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Html(views::errors::not_found_page()),
    )
        .into_response()
}
