//! Show route handlers

use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};
use axum_extra::extract::{CookieJar, Form};
use tracing::error;

use super::PageError;
use crate::db;
use crate::flash::{redirect_with_flash, take_flash};
use crate::forms::ShowForm;
use crate::views;
use crate::AppState;

/// GET /shows — every scheduled show
pub async fn list_shows(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Response, PageError> {
    let shows = db::shows::list_all(&state.db).await?;

    let (jar, flash) = take_flash(jar);
    Ok((jar, Html(views::shows::list_page(&shows, flash.as_deref()))).into_response())
}

/// GET /shows/create — booking form with venue and artist pickers
pub async fn create_show_form(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Response, PageError> {
    let venues = db::venues::list_all(&state.db).await?;
    let artists = db::artists::list_all(&state.db).await?;

    let (jar, flash) = take_flash(jar);
    Ok((
        jar,
        Html(views::shows::new_form_page(&venues, &artists, flash.as_deref())),
    )
        .into_response())
}

/// POST /shows/create — persist and redirect home
pub async fn create_show_submission(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<ShowForm>,
) -> Response {
    let draft = match form.validate() {
        Ok(draft) => draft,
        Err(errors) => {
            return redirect_with_flash(
                jar,
                &format!("Show could not be listed: {}", errors.join("; ")),
                "/shows/create",
            );
        }
    };

    // A dangling venue or artist id fails the schema's foreign keys here
    match db::shows::create(&state.db, &draft).await {
        Ok(_) => redirect_with_flash(jar, "Show was successfully listed!", "/"),
        Err(e) => {
            error!("failed to create show: {}", e);
            redirect_with_flash(jar, "An error occurred. Show could not be listed.", "/")
        }
    }
}
