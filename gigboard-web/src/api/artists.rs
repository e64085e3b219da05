//! Artist route handlers

use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Response};
use axum_extra::extract::{CookieJar, Form};
use chrono::Utc;
use gigboard_common::showtime::partition_by_time;
use tracing::error;

use super::{parse_id, PageError};
use crate::db;
use crate::flash::{redirect_with_flash, take_flash};
use crate::forms::{ArtistForm, SearchForm};
use crate::views;
use crate::AppState;

/// GET /artists — flat listing, alphabetically ascending
pub async fn list_artists(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Response, PageError> {
    let artists = db::artists::list_all(&state.db).await?;

    let (jar, flash) = take_flash(jar);
    Ok((jar, Html(views::artists::list_page(&artists, flash.as_deref()))).into_response())
}

/// POST /artists/search — case-insensitive substring match on name
pub async fn search_artists(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Response, PageError> {
    let results = db::artists::search_by_name(&state.db, &form.search_term).await?;
    Ok(Html(views::artists::search_page(&form.search_term, &results)).into_response())
}

/// GET /artists/:id — detail page with past/upcoming show partition
pub async fn show_artist(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(raw_id): Path<String>,
) -> Result<Response, PageError> {
    let id = parse_id(&raw_id)?;
    let artist = db::artists::get(&state.db, id)
        .await?
        .ok_or(PageError::NotFound)?;

    let shows = db::shows::for_artist(&state.db, id).await?;
    let (upcoming, past) = partition_by_time(shows, Utc::now(), |s| s.start_time);

    let (jar, flash) = take_flash(jar);
    Ok((
        jar,
        Html(views::artists::detail_page(&artist, &upcoming, &past, flash.as_deref())),
    )
        .into_response())
}

/// GET /artists/create — blank form
pub async fn create_artist_form(jar: CookieJar) -> Response {
    let (jar, flash) = take_flash(jar);
    (jar, Html(views::artists::new_form_page(flash.as_deref()))).into_response()
}

/// POST /artists/create
pub async fn create_artist_submission(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<ArtistForm>,
) -> Response {
    let draft = match form.validate() {
        Ok(draft) => draft,
        Err(errors) => {
            return redirect_with_flash(
                jar,
                &format!("Artist could not be listed: {}", errors.join("; ")),
                "/artists/create",
            );
        }
    };

    match db::artists::create(&state.db, &draft).await {
        Ok(id) => redirect_with_flash(
            jar,
            &format!("Artist: {} created successfully", draft.name),
            &format!("/artists/{}", id),
        ),
        Err(e) => {
            error!("failed to create artist {}: {}", draft.name, e);
            redirect_with_flash(
                jar,
                &format!("An error occurred creating the Artist: {}", draft.name),
                "/",
            )
        }
    }
}

/// GET /artists/:id/edit — pre-populated form
pub async fn edit_artist_form(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(raw_id): Path<String>,
) -> Result<Response, PageError> {
    let id = parse_id(&raw_id)?;
    let artist = db::artists::get(&state.db, id)
        .await?
        .ok_or(PageError::NotFound)?;

    let (jar, flash) = take_flash(jar);
    Ok((jar, Html(views::artists::edit_form_page(&artist, flash.as_deref()))).into_response())
}

/// POST /artists/:id/edit
pub async fn edit_artist_submission(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(raw_id): Path<String>,
    Form(form): Form<ArtistForm>,
) -> Result<Response, PageError> {
    let id = parse_id(&raw_id)?;

    let draft = match form.validate() {
        Ok(draft) => draft,
        Err(errors) => {
            return Ok(redirect_with_flash(
                jar,
                &format!("Artist could not be updated: {}", errors.join("; ")),
                &format!("/artists/{}/edit", id),
            ));
        }
    };

    match db::artists::update(&state.db, id, &draft).await {
        Ok(()) => Ok(redirect_with_flash(
            jar,
            &format!("Artist: {} updated successfully", draft.name),
            &format!("/artists/{}", id),
        )),
        Err(gigboard_common::Error::NotFound(_)) => Err(PageError::NotFound),
        Err(e) => {
            error!("failed to update artist {}: {}", id, e);
            Ok(redirect_with_flash(
                jar,
                &format!("An error occurred updating the Artist: {}", draft.name),
                "/",
            ))
        }
    }
}
