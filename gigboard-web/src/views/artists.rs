//! Artist pages: flat listing, search results, detail, create/edit forms

use super::layout::{page, search_form};
use super::venues::{link_line, seeking_line, show_section};
use super::esc;
use crate::forms::GENRE_CHOICES;
use gigboard_common::db::models::{Artist, ShowListing};

/// GET /artists — flat listing, ascending by name
pub fn list_page(artists: &[Artist], flash: Option<&str>) -> String {
    let mut body = String::from("<h1>Artists</h1>");
    body.push_str(&search_form("/artists/search", "Find an artist"));

    if artists.is_empty() {
        body.push_str("<p>No artists listed yet.</p>");
    }
    for artist in artists {
        body.push_str(&format!(
            r#"<div class="card"><a href="/artists/{}">{}</a></div>"#,
            artist.id,
            esc(&artist.name)
        ));
    }

    page("Artists", flash, &body)
}

/// POST /artists/search results
pub fn search_page(term: &str, results: &[Artist]) -> String {
    let mut body = format!(
        "<h1>Artist Search</h1><p>Found {} result(s) for \"{}\"</p>",
        results.len(),
        esc(term)
    );
    body.push_str(&search_form("/artists/search", "Find an artist"));
    for artist in results {
        body.push_str(&format!(
            r#"<div class="card"><a href="/artists/{}">{}</a> — {}, {}</div>"#,
            artist.id,
            esc(&artist.name),
            esc(&artist.city),
            esc(&artist.state)
        ));
    }
    page("Artist Search", None, &body)
}

/// GET /artists/:id — detail page with past/upcoming show partition
pub fn detail_page(
    artist: &Artist,
    upcoming: &[ShowListing],
    past: &[ShowListing],
    flash: Option<&str>,
) -> String {
    let mut body = format!("<h1>{}</h1>", esc(&artist.name));

    body.push_str(&format!(
        r#"<div class="card">
            <p>{city}, {state}</p>
            <p>Phone: {phone}</p>
            <p>Genres: {genres}</p>
            {website}
            {facebook}
            {seeking}
        </div>"#,
        city = esc(&artist.city),
        state = esc(&artist.state),
        phone = esc(&artist.phone),
        genres = esc(&artist.genres.join(", ")),
        website = link_line("Website", artist.website_link.as_deref()),
        facebook = link_line("Facebook", artist.facebook_link.as_deref()),
        seeking = seeking_line(
            artist.seeking_venue,
            "Seeking a venue",
            artist.seeking_description.as_deref()
        ),
    ));

    body.push_str(&show_section("Upcoming Shows", upcoming, |s| {
        (s.venue_id, s.venue_name.clone(), "/venues")
    }));
    body.push_str(&show_section("Past Shows", past, |s| {
        (s.venue_id, s.venue_name.clone(), "/venues")
    }));

    body.push_str(&format!(
        r#"<p><a href="/artists/{}/edit">Edit artist</a></p>"#,
        artist.id
    ));

    page(&artist.name, flash, &body)
}

/// GET /artists/create — blank form
pub fn new_form_page(flash: Option<&str>) -> String {
    let body = format!(
        r#"<h1>List an Artist</h1>
        <form method="post" action="/artists/create">{}</form>"#,
        form_fields(None)
    );
    page("New Artist", flash, &body)
}

/// GET /artists/:id/edit — pre-populated form
pub fn edit_form_page(artist: &Artist, flash: Option<&str>) -> String {
    let body = format!(
        r#"<h1>Edit {}</h1>
        <form method="post" action="/artists/{}/edit">{}</form>"#,
        esc(&artist.name),
        artist.id,
        form_fields(Some(artist))
    );
    page("Edit Artist", flash, &body)
}

/// Shared create/edit field set, pre-populated when editing
fn form_fields(artist: Option<&Artist>) -> String {
    let value = |get: fn(&Artist) -> &str| artist.map(get).map(esc).unwrap_or_default();
    let opt_value = |get: fn(&Artist) -> Option<&str>| {
        artist.and_then(get).map(esc).unwrap_or_default()
    };

    let mut genre_boxes = String::from(r#"<div class="checkbox-group">"#);
    for genre in GENRE_CHOICES {
        let checked = artist
            .map(|a| a.genres.iter().any(|g| g == genre))
            .unwrap_or(false);
        genre_boxes.push_str(&format!(
            r#"<label><input type="checkbox" name="genres" value="{genre}"{checked}> {genre}</label>"#,
            genre = esc(genre),
            checked = if checked { " checked" } else { "" },
        ));
    }
    genre_boxes.push_str("</div>");

    let seeking_checked = artist.map(|a| a.seeking_venue).unwrap_or(false);

    format!(
        r#"
        <label>Name <input type="text" name="name" value="{name}"></label>
        <label>City <input type="text" name="city" value="{city}"></label>
        <label>State <input type="text" name="state" value="{state}"></label>
        <label>Phone <input type="text" name="phone" value="{phone}"></label>
        <label>Genres</label>
        {genre_boxes}
        <label>Image Link <input type="text" name="image_link" value="{image_link}"></label>
        <label>Website Link <input type="text" name="website_link" value="{website_link}"></label>
        <label>Facebook Link <input type="text" name="facebook_link" value="{facebook_link}"></label>
        <label><input type="checkbox" name="seeking_venue" value="y"{seeking_checked}> Seeking a venue</label>
        <label>Seeking Description <textarea name="seeking_description">{seeking_description}</textarea></label>
        <button type="submit">Save Artist</button>
        "#,
        name = value(|a| &a.name),
        city = value(|a| &a.city),
        state = value(|a| &a.state),
        phone = value(|a| &a.phone),
        genre_boxes = genre_boxes,
        image_link = opt_value(|a| a.image_link.as_deref()),
        website_link = opt_value(|a| a.website_link.as_deref()),
        facebook_link = opt_value(|a| a.facebook_link.as_deref()),
        seeking_checked = if seeking_checked { " checked" } else { "" },
        seeking_description = opt_value(|a| a.seeking_description.as_deref()),
    )
}
