//! Venue route handlers

use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Response};
use axum_extra::extract::{CookieJar, Form};
use chrono::Utc;
use gigboard_common::showtime::partition_by_time;
use tracing::error;

use super::{parse_id, PageError};
use crate::db;
use crate::flash::{redirect_with_flash, take_flash};
use crate::forms::{SearchForm, VenueForm};
use crate::views;
use crate::AppState;

/// GET /venues — listing grouped by (city, state)
pub async fn list_venues(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Response, PageError> {
    let mut groups = Vec::new();
    for (city, state_code) in db::venues::distinct_city_states(&state.db).await? {
        let venues = db::venues::find_by_city_state(&state.db, &city, &state_code).await?;
        groups.push(((city, state_code), venues));
    }

    let (jar, flash) = take_flash(jar);
    Ok((jar, Html(views::venues::list_page(&groups, flash.as_deref()))).into_response())
}

/// POST /venues/search — case-insensitive substring match on name
pub async fn search_venues(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Response, PageError> {
    let results = db::venues::search_by_name(&state.db, &form.search_term).await?;
    Ok(Html(views::venues::search_page(&form.search_term, &results)).into_response())
}

/// GET /venues/:id — detail page with past/upcoming show partition
pub async fn show_venue(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(raw_id): Path<String>,
) -> Result<Response, PageError> {
    let id = parse_id(&raw_id)?;
    let venue = db::venues::get(&state.db, id)
        .await?
        .ok_or(PageError::NotFound)?;

    let shows = db::shows::for_venue(&state.db, id).await?;
    let (upcoming, past) = partition_by_time(shows, Utc::now(), |s| s.start_time);

    let (jar, flash) = take_flash(jar);
    Ok((
        jar,
        Html(views::venues::detail_page(&venue, &upcoming, &past, flash.as_deref())),
    )
        .into_response())
}

/// GET /venues/create — blank form
pub async fn create_venue_form(jar: CookieJar) -> Response {
    let (jar, flash) = take_flash(jar);
    (jar, Html(views::venues::new_form_page(flash.as_deref()))).into_response()
}

/// POST /venues/create
pub async fn create_venue_submission(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<VenueForm>,
) -> Response {
    let draft = match form.validate() {
        Ok(draft) => draft,
        Err(errors) => {
            return redirect_with_flash(
                jar,
                &format!("Venue could not be listed: {}", errors.join("; ")),
                "/venues/create",
            );
        }
    };

    match db::venues::create(&state.db, &draft).await {
        Ok(id) => redirect_with_flash(
            jar,
            &format!("Venue: {} created successfully", draft.name),
            &format!("/venues/{}", id),
        ),
        Err(e) => {
            error!("failed to create venue {}: {}", draft.name, e);
            redirect_with_flash(
                jar,
                &format!("An error occurred creating the Venue: {}", draft.name),
                "/",
            )
        }
    }
}

/// GET /venues/:id/edit — pre-populated form
pub async fn edit_venue_form(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(raw_id): Path<String>,
) -> Result<Response, PageError> {
    let id = parse_id(&raw_id)?;
    let venue = db::venues::get(&state.db, id)
        .await?
        .ok_or(PageError::NotFound)?;

    let (jar, flash) = take_flash(jar);
    Ok((jar, Html(views::venues::edit_form_page(&venue, flash.as_deref()))).into_response())
}

/// POST /venues/:id/edit
pub async fn edit_venue_submission(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(raw_id): Path<String>,
    Form(form): Form<VenueForm>,
) -> Result<Response, PageError> {
    let id = parse_id(&raw_id)?;

    let draft = match form.validate() {
        Ok(draft) => draft,
        Err(errors) => {
            return Ok(redirect_with_flash(
                jar,
                &format!("Venue could not be updated: {}", errors.join("; ")),
                &format!("/venues/{}/edit", id),
            ));
        }
    };

    match db::venues::update(&state.db, id, &draft).await {
        Ok(()) => Ok(redirect_with_flash(
            jar,
            &format!("Venue: {} updated successfully", draft.name),
            &format!("/venues/{}", id),
        )),
        Err(gigboard_common::Error::NotFound(_)) => Err(PageError::NotFound),
        Err(e) => {
            error!("failed to update venue {}: {}", id, e);
            Ok(redirect_with_flash(
                jar,
                &format!("An error occurred updating the Venue: {}", draft.name),
                "/",
            ))
        }
    }
}

/// DELETE /venues/:id — shows at the venue cascade away with it
pub async fn delete_venue(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(raw_id): Path<String>,
) -> Result<Response, PageError> {
    let id = parse_id(&raw_id)?;
    // Fetch first so the flash message can name the venue
    let venue = db::venues::get(&state.db, id)
        .await?
        .ok_or(PageError::NotFound)?;

    match db::venues::delete(&state.db, id).await {
        Ok(()) => Ok(redirect_with_flash(
            jar,
            &format!("Venue {} was successfully deleted!", venue.name),
            "/",
        )),
        Err(gigboard_common::Error::NotFound(_)) => Err(PageError::NotFound),
        Err(e) => {
            error!("failed to delete venue {}: {}", id, e);
            Ok(redirect_with_flash(
                jar,
                &format!("An error occurred. Venue {} could not be deleted.", venue.name),
                "/",
            ))
        }
    }
}
