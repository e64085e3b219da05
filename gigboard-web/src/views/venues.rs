//! Venue pages: grouped listing, search results, detail, create/edit forms

use super::layout::{page, search_form};
use super::esc;
use crate::forms::GENRE_CHOICES;
use gigboard_common::db::models::{ShowListing, Venue};
use gigboard_common::showtime::format_show_time;

/// GET /venues — venues grouped by (city, state)
pub fn list_page(groups: &[((String, String), Vec<Venue>)], flash: Option<&str>) -> String {
    let mut body = String::from("<h1>Venues</h1>");
    body.push_str(&search_form("/venues/search", "Find a venue"));

    if groups.is_empty() {
        body.push_str("<p>No venues listed yet.</p>");
    }
    for ((city, state), venues) in groups {
        body.push_str(&format!(
            "<h2>{}, {}</h2>",
            esc(city),
            esc(state)
        ));
        for venue in venues {
            body.push_str(&format!(
                r#"<div class="card"><a href="/venues/{}">{}</a></div>"#,
                venue.id,
                esc(&venue.name)
            ));
        }
    }

    page("Venues", flash, &body)
}

/// POST /venues/search results
pub fn search_page(term: &str, results: &[Venue]) -> String {
    let mut body = format!(
        "<h1>Venue Search</h1><p>Found {} result(s) for \"{}\"</p>",
        results.len(),
        esc(term)
    );
    body.push_str(&search_form("/venues/search", "Find a venue"));
    for venue in results {
        body.push_str(&format!(
            r#"<div class="card"><a href="/venues/{}">{}</a> — {}, {}</div>"#,
            venue.id,
            esc(&venue.name),
            esc(&venue.city),
            esc(&venue.state)
        ));
    }
    page("Venue Search", None, &body)
}

/// GET /venues/:id — detail page with past/upcoming show partition
pub fn detail_page(
    venue: &Venue,
    upcoming: &[ShowListing],
    past: &[ShowListing],
    flash: Option<&str>,
) -> String {
    let mut body = format!("<h1>{}</h1>", esc(&venue.name));

    body.push_str(&format!(
        r#"<div class="card">
            <p>{address}, {city}, {state}</p>
            <p>Phone: {phone}</p>
            <p>Genres: {genres}</p>
            {website}
            {facebook}
            {seeking}
        </div>"#,
        address = esc(&venue.address),
        city = esc(&venue.city),
        state = esc(&venue.state),
        phone = esc(&venue.phone),
        genres = esc(&venue.genres.join(", ")),
        website = link_line("Website", venue.website_link.as_deref()),
        facebook = link_line("Facebook", venue.facebook_link.as_deref()),
        seeking = seeking_line(
            venue.seeking_talent,
            "Seeking talent",
            venue.seeking_description.as_deref()
        ),
    ));

    body.push_str(&show_section("Upcoming Shows", upcoming, |s| {
        (s.artist_id, s.artist_name.clone(), "/artists")
    }));
    body.push_str(&show_section("Past Shows", past, |s| {
        (s.artist_id, s.artist_name.clone(), "/artists")
    }));

    body.push_str(&format!(
        r#"<p><a href="/venues/{id}/edit">Edit venue</a></p>
        <button onclick="fetch('/venues/{id}', {{method: 'DELETE'}}).then(() => window.location = '/')">Delete venue</button>"#,
        id = venue.id
    ));

    page(&venue.name, flash, &body)
}

/// GET /venues/create — blank form
pub fn new_form_page(flash: Option<&str>) -> String {
    let body = format!(
        r#"<h1>List a Venue</h1>
        <form method="post" action="/venues/create">{}</form>"#,
        form_fields(None)
    );
    page("New Venue", flash, &body)
}

/// GET /venues/:id/edit — pre-populated form
pub fn edit_form_page(venue: &Venue, flash: Option<&str>) -> String {
    let body = format!(
        r#"<h1>Edit {}</h1>
        <form method="post" action="/venues/{}/edit">{}</form>"#,
        esc(&venue.name),
        venue.id,
        form_fields(Some(venue))
    );
    page("Edit Venue", flash, &body)
}

/// Shared create/edit field set, pre-populated when editing
fn form_fields(venue: Option<&Venue>) -> String {
    let value = |get: fn(&Venue) -> &str| venue.map(get).map(esc).unwrap_or_default();
    let opt_value = |get: fn(&Venue) -> Option<&str>| {
        venue.and_then(get).map(esc).unwrap_or_default()
    };

    let mut genre_boxes = String::from(r#"<div class="checkbox-group">"#);
    for genre in GENRE_CHOICES {
        let checked = venue
            .map(|v| v.genres.iter().any(|g| g == genre))
            .unwrap_or(false);
        genre_boxes.push_str(&format!(
            r#"<label><input type="checkbox" name="genres" value="{genre}"{checked}> {genre}</label>"#,
            genre = esc(genre),
            checked = if checked { " checked" } else { "" },
        ));
    }
    genre_boxes.push_str("</div>");

    let seeking_checked = venue.map(|v| v.seeking_talent).unwrap_or(false);

    format!(
        r#"
        <label>Name <input type="text" name="name" value="{name}"></label>
        <label>City <input type="text" name="city" value="{city}"></label>
        <label>State <input type="text" name="state" value="{state}"></label>
        <label>Address <input type="text" name="address" value="{address}"></label>
        <label>Phone <input type="text" name="phone" value="{phone}"></label>
        <label>Genres</label>
        {genre_boxes}
        <label>Image Link <input type="text" name="image_link" value="{image_link}"></label>
        <label>Website Link <input type="text" name="website_link" value="{website_link}"></label>
        <label>Facebook Link <input type="text" name="facebook_link" value="{facebook_link}"></label>
        <label><input type="checkbox" name="seeking_talent" value="y"{seeking_checked}> Seeking talent</label>
        <label>Seeking Description <textarea name="seeking_description">{seeking_description}</textarea></label>
        <button type="submit">Save Venue</button>
        "#,
        name = value(|v| &v.name),
        city = value(|v| &v.city),
        state = value(|v| &v.state),
        address = value(|v| &v.address),
        phone = value(|v| &v.phone),
        genre_boxes = genre_boxes,
        image_link = opt_value(|v| v.image_link.as_deref()),
        website_link = opt_value(|v| v.website_link.as_deref()),
        facebook_link = opt_value(|v| v.facebook_link.as_deref()),
        seeking_checked = if seeking_checked { " checked" } else { "" },
        seeking_description = opt_value(|v| v.seeking_description.as_deref()),
    )
}

pub(super) fn link_line(label: &str, href: Option<&str>) -> String {
    match href {
        Some(href) => format!(
            r#"<p>{}: <a href="{href}">{href}</a></p>"#,
            label,
            href = esc(href)
        ),
        None => String::new(),
    }
}

pub(super) fn seeking_line(flag: bool, label: &str, description: Option<&str>) -> String {
    if !flag {
        return String::new();
    }
    match description {
        Some(description) => format!("<p>{}: {}</p>", label, esc(description)),
        None => format!("<p>{}</p>", label),
    }
}

/// Render a "Upcoming Shows (N)" section with one card per show
pub(super) fn show_section(
    heading: &str,
    shows: &[ShowListing],
    counterpart: impl Fn(&ShowListing) -> (i64, String, &'static str),
) -> String {
    let mut section = format!("<h2>{} ({})</h2>", heading, shows.len());
    for show in shows {
        let (id, name, base) = counterpart(show);
        section.push_str(&format!(
            r#"<div class="card"><a href="{base}/{id}">{name}</a> — {time}</div>"#,
            base = base,
            id = id,
            name = esc(&name),
            time = format_show_time(show.start_time),
        ));
    }
    section
}
