//! Record models for venues, artists, and shows
//!
//! Genres are decoded from their storage encoding at row-mapping time, so
//! the rest of the application only ever sees `Vec<String>`.

use crate::genres::decode_genres;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

/// A location that can host shows
#[derive(Debug, Clone, PartialEq)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub website_link: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl Venue {
    pub fn from_row(row: &SqliteRow) -> Self {
        Self {
            id: row.get("id"),
            name: row.get("name"),
            city: row.get("city"),
            state: row.get("state"),
            address: row.get("address"),
            phone: row.get("phone"),
            genres: decode_genres(row.get::<String, _>("genres").as_str()),
            image_link: row.get("image_link"),
            website_link: row.get("website_link"),
            facebook_link: row.get("facebook_link"),
            seeking_talent: row.get("seeking_talent"),
            seeking_description: row.get("seeking_description"),
        }
    }
}

/// A performer that can be booked into shows
#[derive(Debug, Clone, PartialEq)]
pub struct Artist {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub website_link: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl Artist {
    pub fn from_row(row: &SqliteRow) -> Self {
        Self {
            id: row.get("id"),
            name: row.get("name"),
            city: row.get("city"),
            state: row.get("state"),
            phone: row.get("phone"),
            genres: decode_genres(row.get::<String, _>("genres").as_str()),
            image_link: row.get("image_link"),
            website_link: row.get("website_link"),
            facebook_link: row.get("facebook_link"),
            seeking_venue: row.get("seeking_venue"),
            seeking_description: row.get("seeking_description"),
        }
    }
}

/// A scheduled booking of one artist at one venue
#[derive(Debug, Clone, PartialEq)]
pub struct Show {
    pub id: i64,
    pub venue_id: i64,
    pub artist_id: i64,
    pub start_time: DateTime<Utc>,
}

impl Show {
    pub fn from_row(row: &SqliteRow) -> Self {
        Self {
            id: row.get("id"),
            venue_id: row.get("venue_id"),
            artist_id: row.get("artist_id"),
            start_time: row.get("start_time"),
        }
    }
}

/// A show joined with venue and artist display fields, for list pages
#[derive(Debug, Clone, PartialEq)]
pub struct ShowListing {
    pub id: i64,
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

impl ShowListing {
    pub fn from_row(row: &SqliteRow) -> Self {
        Self {
            id: row.get("id"),
            venue_id: row.get("venue_id"),
            venue_name: row.get("venue_name"),
            artist_id: row.get("artist_id"),
            artist_name: row.get("artist_name"),
            artist_image_link: row.get("artist_image_link"),
            start_time: row.get("start_time"),
        }
    }
}
