//! Integration tests for the gigboard-web HTTP surface
//!
//! Drives the full router against an in-memory database: list/search/detail
//! pages, create/edit/delete flows, flash messages, the past/upcoming show
//! partition, and the 404/500 error paths.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::{TimeZone, Utc};
use gigboard_common::db::init_memory_database;
use gigboard_web::forms::{ArtistDraft, ShowDraft, VenueDraft};
use gigboard_web::{build_router, db, AppState};
use percent_encoding::percent_decode_str;
use sqlx::SqlitePool;
use tower::util::ServiceExt; // for `oneshot`

/// Test helper: fresh router over an in-memory database
async fn setup() -> (Router, SqlitePool) {
    let pool = init_memory_database().await.expect("memory db");
    let app = build_router(AppState::new(pool.clone()));
    (app, pool)
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn form_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn delete_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf8 body")
}

/// Extract and percent-decode the flash message set on a response
fn flash_message(response: &axum::response::Response) -> Option<String> {
    let set_cookie = response.headers().get(header::SET_COOKIE)?.to_str().ok()?;
    let value = set_cookie
        .strip_prefix("gigboard_flash=")?
        .split(';')
        .next()?;
    Some(percent_decode_str(value).decode_utf8_lossy().to_string())
}

fn location(response: &axum::response::Response) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .expect("location header")
        .to_str()
        .unwrap()
        .to_string()
}

fn venue_draft(name: &str, city: &str, state: &str) -> VenueDraft {
    VenueDraft {
        name: name.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        address: "1015 Folsom Street".to_string(),
        phone: "123-123-1234".to_string(),
        genres: vec!["Jazz".to_string(), "Reggae".to_string()],
        image_link: None,
        website_link: None,
        facebook_link: None,
        seeking_talent: false,
        seeking_description: None,
    }
}

fn artist_draft(name: &str) -> ArtistDraft {
    ArtistDraft {
        name: name.to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        phone: "326-123-5000".to_string(),
        genres: vec!["Rock n Roll".to_string()],
        image_link: None,
        website_link: None,
        facebook_link: None,
        seeking_venue: false,
        seeking_description: None,
    }
}

// =============================================================================
// Basic pages
// =============================================================================

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let (app, _pool) = setup().await;

    let response = app.oneshot(get_request("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["module"], "gigboard-web");
}

#[tokio::test]
async fn home_page_renders() {
    let (app, _pool) = setup().await;

    let response = app.oneshot(get_request("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("Gigboard"));
}

#[tokio::test]
async fn empty_list_pages_render_without_error() {
    let (app, _pool) = setup().await;

    for (uri, empty_text) in [
        ("/venues", "No venues listed yet"),
        ("/artists", "No artists listed yet"),
        ("/shows", "No shows scheduled yet"),
    ] {
        let response = app.clone().oneshot(get_request(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{}", uri);
        assert!(body_string(response).await.contains(empty_text), "{}", uri);
    }
}

// =============================================================================
// Venue create / read
// =============================================================================

#[tokio::test]
async fn venue_create_submission_persists_every_field() {
    let (app, pool) = setup().await;

    let body = "name=The%20Musical%20Hop&city=San%20Francisco&state=CA\
                &address=1015%20Folsom%20Street&phone=123-123-1234\
                &genres=Jazz&genres=Reggae&genres=Classical\
                &website_link=https%3A%2F%2Fwww.themusicalhop.com\
                &seeking_talent=y&seeking_description=Looking%20for%20local%20artists";
    let response = app
        .clone()
        .oneshot(form_request("/venues/create", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let detail_uri = location(&response);
    assert!(detail_uri.starts_with("/venues/"));
    assert_eq!(
        flash_message(&response).as_deref(),
        Some("Venue: The Musical Hop created successfully")
    );

    let id: i64 = detail_uri.rsplit('/').next().unwrap().parse().unwrap();
    let venue = db::venues::get(&pool, id).await.unwrap().expect("created venue");
    assert_eq!(venue.name, "The Musical Hop");
    assert_eq!(venue.city, "San Francisco");
    assert_eq!(venue.state, "CA");
    assert_eq!(venue.address, "1015 Folsom Street");
    assert_eq!(venue.phone, "123-123-1234");
    assert_eq!(venue.genres, vec!["Jazz", "Reggae", "Classical"]);
    assert_eq!(venue.website_link.as_deref(), Some("https://www.themusicalhop.com"));
    assert!(venue.image_link.is_none());
    assert!(venue.seeking_talent);
    assert_eq!(venue.seeking_description.as_deref(), Some("Looking for local artists"));

    // Detail page renders the record
    let response = app.oneshot(get_request(&detail_uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let page = body_string(response).await;
    assert!(page.contains("The Musical Hop"));
    assert!(page.contains("Jazz, Reggae, Classical"));
}

#[tokio::test]
async fn flash_message_survives_redirect_and_is_shown_once() {
    let (app, _pool) = setup().await;

    let body = "name=The%20Musical%20Hop&city=San%20Francisco&state=CA\
                &address=1015%20Folsom%20Street&phone=123-123-1234";
    let response = app
        .clone()
        .oneshot(form_request("/venues/create", body))
        .await
        .unwrap();
    let detail_uri = location(&response);
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string();

    // Following the redirect with the cookie shows the banner once
    let request = Request::builder()
        .uri(&detail_uri)
        .header(header::COOKIE, &cookie)
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    // Cookie is cleared by the render
    let clearing = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("clearing set-cookie")
        .to_str()
        .unwrap()
        .to_string();
    assert!(clearing.starts_with("gigboard_flash="));

    let page = body_string(response).await;
    assert!(page.contains("created successfully"));
}

#[tokio::test]
async fn venue_create_validation_failure_redirects_with_flash() {
    let (app, pool) = setup().await;

    // Name and phone missing
    let response = app
        .oneshot(form_request("/venues/create", "city=Oakland&state=CA&address=1%20Main%20St"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/venues/create");
    let flash = flash_message(&response).unwrap();
    assert!(flash.contains("name is required"));
    assert!(flash.contains("phone is required"));

    assert!(db::venues::list_all(&pool).await.unwrap().is_empty());
}

// =============================================================================
// Search
// =============================================================================

#[tokio::test]
async fn venue_search_is_case_insensitive_substring() {
    let (app, pool) = setup().await;
    db::venues::create(&pool, &venue_draft("The Musical Hop", "San Francisco", "CA"))
        .await
        .unwrap();
    db::venues::create(
        &pool,
        &venue_draft("Park Square Live Music & Coffee", "San Francisco", "CA"),
    )
    .await
    .unwrap();

    // "Hop" matches exactly one
    let response = app
        .clone()
        .oneshot(form_request("/venues/search", "search_term=Hop"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let page = body_string(response).await;
    assert!(page.contains("Found 1 result(s)"));
    assert!(page.contains("The Musical Hop"));
    assert!(!page.contains("Park Square"));

    // "Music" matches both
    let response = app
        .clone()
        .oneshot(form_request("/venues/search", "search_term=Music"))
        .await
        .unwrap();
    let page = body_string(response).await;
    assert!(page.contains("Found 2 result(s)"));

    // Lowercase "hop" still matches
    let response = app
        .oneshot(form_request("/venues/search", "search_term=hop"))
        .await
        .unwrap();
    let page = body_string(response).await;
    assert!(page.contains("Found 1 result(s)"));
}

#[tokio::test]
async fn artist_search_matches_substrings_case_insensitively() {
    let (app, pool) = setup().await;
    for name in ["Guns N Petals", "Matt Quevedo", "The Wild Sax Band"] {
        db::artists::create(&pool, &artist_draft(name)).await.unwrap();
    }

    // "A" is a substring of all three (case-insensitive)
    let response = app
        .clone()
        .oneshot(form_request("/artists/search", "search_term=A"))
        .await
        .unwrap();
    let page = body_string(response).await;
    assert!(page.contains("Found 3 result(s)"));

    // "band" matches only The Wild Sax Band
    let response = app
        .oneshot(form_request("/artists/search", "search_term=band"))
        .await
        .unwrap();
    let page = body_string(response).await;
    assert!(page.contains("Found 1 result(s)"));
    assert!(page.contains("The Wild Sax Band"));
    assert!(!page.contains("Guns N Petals"));
    assert!(!page.contains("Matt Quevedo"));
}

#[tokio::test]
async fn artist_listing_is_sorted_ascending_by_name() {
    let (app, pool) = setup().await;
    for name in ["The Wild Sax Band", "Guns N Petals", "Matt Quevedo"] {
        db::artists::create(&pool, &artist_draft(name)).await.unwrap();
    }

    let response = app.oneshot(get_request("/artists")).await.unwrap();
    let page = body_string(response).await;

    let guns = page.find("Guns N Petals").unwrap();
    let matt = page.find("Matt Quevedo").unwrap();
    let sax = page.find("The Wild Sax Band").unwrap();
    assert!(guns < matt && matt < sax);
}

#[tokio::test]
async fn venue_listing_groups_by_city_and_state() {
    let (app, pool) = setup().await;
    db::venues::create(&pool, &venue_draft("The Musical Hop", "San Francisco", "CA"))
        .await
        .unwrap();
    db::venues::create(&pool, &venue_draft("The Dueling Pianos Bar", "New York", "NY"))
        .await
        .unwrap();
    db::venues::create(
        &pool,
        &venue_draft("Park Square Live Music & Coffee", "San Francisco", "CA"),
    )
    .await
    .unwrap();

    let response = app.oneshot(get_request("/venues")).await.unwrap();
    let page = body_string(response).await;
    assert!(page.contains("San Francisco, CA"));
    assert!(page.contains("New York, NY"));
    // Both SF venues sit under the one group heading
    assert_eq!(page.matches("San Francisco, CA").count(), 1);
}

// =============================================================================
// Not-found and server-error paths
// =============================================================================

#[tokio::test]
async fn nonexistent_detail_pages_return_404() {
    let (app, _pool) = setup().await;

    for uri in ["/venues/999", "/artists/999", "/venues/999/edit", "/artists/999/edit"] {
        let response = app.clone().oneshot(get_request(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", uri);
    }

    // Non-numeric ids and unknown routes are 404 too
    let response = app.clone().oneshot(get_request("/venues/abc")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let response = app.clone().oneshot(get_request("/no/such/route")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(delete_request("/venues/999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn storage_failure_renders_the_server_error_page() {
    let (app, pool) = setup().await;

    // Break the schema out from under the handler
    sqlx::query("DROP TABLE artists").execute(&pool).await.unwrap();

    let response = app.oneshot(get_request("/artists")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let page = body_string(response).await;
    assert!(page.contains("Something went wrong"));
    assert!(page.contains("Back to the home page"));
}

// =============================================================================
// Seeking flag encoding
// =============================================================================

#[tokio::test]
async fn seeking_flag_true_only_when_field_present() {
    let (app, pool) = setup().await;

    // Absent → false
    let base = "name=Guns%20N%20Petals&city=San%20Francisco&state=CA&phone=326-123-5000";
    let response = app
        .clone()
        .oneshot(form_request("/artists/create", base))
        .await
        .unwrap();
    let id: i64 = location(&response).rsplit('/').next().unwrap().parse().unwrap();
    assert!(!db::artists::get(&pool, id).await.unwrap().unwrap().seeking_venue);

    // Present with a "false" value is still true: presence is the signal
    let body = format!("{}&seeking_venue=false", base);
    let response = app
        .oneshot(form_request("/artists/create", &body))
        .await
        .unwrap();
    let id: i64 = location(&response).rsplit('/').next().unwrap().parse().unwrap();
    assert!(db::artists::get(&pool, id).await.unwrap().unwrap().seeking_venue);
}

// =============================================================================
// Shows: creation, partition, cascade
// =============================================================================

async fn seed_venue_and_artist(pool: &SqlitePool) -> (i64, i64) {
    let venue_id = db::venues::create(pool, &venue_draft("The Musical Hop", "San Francisco", "CA"))
        .await
        .unwrap();
    let artist_id = db::artists::create(pool, &artist_draft("Guns N Petals")).await.unwrap();
    (venue_id, artist_id)
}

#[tokio::test]
async fn show_creation_via_form_redirects_home_with_flash() {
    let (app, pool) = setup().await;
    let (venue_id, artist_id) = seed_venue_and_artist(&pool).await;

    let body = format!(
        "venue_id={}&artist_id={}&start_time=2030-06-15T19%3A30",
        venue_id, artist_id
    );
    let response = app
        .clone()
        .oneshot(form_request("/shows/create", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
    assert_eq!(flash_message(&response).as_deref(), Some("Show was successfully listed!"));

    let shows = db::shows::list_all(&pool).await.unwrap();
    assert_eq!(shows.len(), 1);
    assert_eq!(shows[0].venue_name, "The Musical Hop");
    assert_eq!(shows[0].artist_name, "Guns N Petals");

    // Shows list page renders the booking
    let response = app.oneshot(get_request("/shows")).await.unwrap();
    let page = body_string(response).await;
    assert!(page.contains("Guns N Petals"));
    assert!(page.contains("The Musical Hop"));
}

#[tokio::test]
async fn show_with_dangling_reference_is_rejected_and_rolled_back() {
    let (app, pool) = setup().await;
    let (venue_id, _artist_id) = seed_venue_and_artist(&pool).await;

    let body = format!("venue_id={}&artist_id=999&start_time=2030-06-15T19%3A30", venue_id);
    let response = app.oneshot(form_request("/shows/create", &body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
    assert_eq!(
        flash_message(&response).as_deref(),
        Some("An error occurred. Show could not be listed.")
    );

    assert!(db::shows::list_all(&pool).await.unwrap().is_empty());
}

#[tokio::test]
async fn detail_pages_partition_shows_into_past_and_upcoming() {
    let (app, pool) = setup().await;
    let (venue_id, artist_id) = seed_venue_and_artist(&pool).await;

    let past = ShowDraft {
        venue_id,
        artist_id,
        start_time: Utc.with_ymd_and_hms(2019, 5, 21, 21, 30, 0).unwrap(),
    };
    let upcoming1 = ShowDraft {
        venue_id,
        artist_id,
        start_time: Utc.with_ymd_and_hms(2035, 4, 1, 20, 0, 0).unwrap(),
    };
    let upcoming2 = ShowDraft {
        venue_id,
        artist_id,
        start_time: Utc.with_ymd_and_hms(2035, 4, 8, 20, 0, 0).unwrap(),
    };
    for draft in [&past, &upcoming1, &upcoming2] {
        db::shows::create(&pool, draft).await.unwrap();
    }

    let response = app
        .clone()
        .oneshot(get_request(&format!("/venues/{}", venue_id)))
        .await
        .unwrap();
    let page = body_string(response).await;
    assert!(page.contains("Upcoming Shows (2)"));
    assert!(page.contains("Past Shows (1)"));

    let response = app
        .oneshot(get_request(&format!("/artists/{}", artist_id)))
        .await
        .unwrap();
    let page = body_string(response).await;
    assert!(page.contains("Upcoming Shows (2)"));
    assert!(page.contains("Past Shows (1)"));
}

#[tokio::test]
async fn deleting_a_venue_cascades_to_its_shows() {
    let (app, pool) = setup().await;
    let (venue_id, artist_id) = seed_venue_and_artist(&pool).await;

    let draft = ShowDraft {
        venue_id,
        artist_id,
        start_time: Utc.with_ymd_and_hms(2035, 4, 1, 20, 0, 0).unwrap(),
    };
    let show_id = db::shows::create(&pool, &draft).await.unwrap();

    let response = app
        .oneshot(delete_request(&format!("/venues/{}", venue_id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
    assert_eq!(
        flash_message(&response).as_deref(),
        Some("Venue The Musical Hop was successfully deleted!")
    );

    assert!(db::venues::get(&pool, venue_id).await.unwrap().is_none());
    assert!(db::shows::get(&pool, show_id).await.unwrap().is_none());
    // The artist is untouched
    assert!(db::artists::get(&pool, artist_id).await.unwrap().is_some());
}

// =============================================================================
// Edit flows
// =============================================================================

#[tokio::test]
async fn venue_edit_persists_changes_and_redirects_to_detail() {
    let (app, pool) = setup().await;
    let id = db::venues::create(&pool, &venue_draft("The Musical Hop", "San Francisco", "CA"))
        .await
        .unwrap();

    // Edit form is pre-populated
    let response = app
        .clone()
        .oneshot(get_request(&format!("/venues/{}/edit", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("The Musical Hop"));

    let body = "name=The%20Musical%20Hop%20II&city=Oakland&state=CA\
                &address=500%20Broadway&phone=555-000-1111\
                &genres=Blues&seeking_talent=y&seeking_description=New%20owners";
    let response = app
        .oneshot(form_request(&format!("/venues/{}/edit", id), body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), format!("/venues/{}", id));

    let venue = db::venues::get(&pool, id).await.unwrap().unwrap();
    assert_eq!(venue.name, "The Musical Hop II");
    assert_eq!(venue.city, "Oakland");
    assert_eq!(venue.genres, vec!["Blues"]);
    assert!(venue.seeking_talent);
}

#[tokio::test]
async fn artist_edit_clears_seeking_flag_when_checkbox_omitted() {
    let (app, pool) = setup().await;
    let mut draft = artist_draft("Guns N Petals");
    draft.seeking_venue = true;
    let id = db::artists::create(&pool, &draft).await.unwrap();

    // Checkbox omitted from the edit submission → flag goes false
    let body = "name=Guns%20N%20Petals&city=San%20Francisco&state=CA&phone=326-123-5000";
    let response = app
        .oneshot(form_request(&format!("/artists/{}/edit", id), body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let artist = db::artists::get(&pool, id).await.unwrap().unwrap();
    assert!(!artist.seeking_venue);
}

// =============================================================================
// Genre round-trip
// =============================================================================

#[tokio::test]
async fn genres_round_trip_through_storage_in_order() {
    let (_app, pool) = setup().await;

    let mut draft = venue_draft("Park Square Live Music & Coffee", "San Francisco", "CA");
    draft.genres = vec![
        "Rock n Roll".to_string(),
        "R&B".to_string(),
        "Jazz".to_string(),
        "Classical".to_string(),
        "Folk".to_string(),
    ];
    let id = db::venues::create(&pool, &draft).await.unwrap();

    let venue = db::venues::get(&pool, id).await.unwrap().unwrap();
    assert_eq!(venue.genres, draft.genres);
}
