//! Show pages: listing and the booking form

use super::layout::page;
use super::esc;
use gigboard_common::db::models::{Artist, ShowListing, Venue};
use gigboard_common::showtime::format_show_time;

/// GET /shows — every scheduled show, soonest first
pub fn list_page(shows: &[ShowListing], flash: Option<&str>) -> String {
    let mut body = String::from("<h1>Shows</h1>");

    if shows.is_empty() {
        body.push_str("<p>No shows scheduled yet.</p>");
    }
    for show in shows {
        body.push_str(&format!(
            r#"<div class="card">
                <a href="/artists/{artist_id}">{artist}</a>
                at <a href="/venues/{venue_id}">{venue}</a>
                — {time}
            </div>"#,
            artist_id = show.artist_id,
            artist = esc(&show.artist_name),
            venue_id = show.venue_id,
            venue = esc(&show.venue_name),
            time = format_show_time(show.start_time),
        ));
    }

    page("Shows", flash, &body)
}

/// GET /shows/create — booking form with venue and artist pickers
pub fn new_form_page(venues: &[Venue], artists: &[Artist], flash: Option<&str>) -> String {
    let mut venue_options = String::new();
    for venue in venues {
        venue_options.push_str(&format!(
            r#"<option value="{}">{} ({}, {})</option>"#,
            venue.id,
            esc(&venue.name),
            esc(&venue.city),
            esc(&venue.state)
        ));
    }

    let mut artist_options = String::new();
    for artist in artists {
        artist_options.push_str(&format!(
            r#"<option value="{}">{}</option>"#,
            artist.id,
            esc(&artist.name)
        ));
    }

    let body = format!(
        r#"<h1>Book a Show</h1>
        <form method="post" action="/shows/create">
            <label>Venue <select name="venue_id">{venue_options}</select></label>
            <label>Artist <select name="artist_id">{artist_options}</select></label>
            <label>Start Time <input type="datetime-local" name="start_time"></label>
            <button type="submit">Book Show</button>
        </form>"#,
        venue_options = venue_options,
        artist_options = artist_options,
    );

    page("Book a Show", flash, &body)
}
