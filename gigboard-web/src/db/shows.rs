//! Show database operations
//!
//! Shows are created once and never edited or deleted directly; they go
//! away only when their venue or artist cascades.

use crate::forms::ShowDraft;
use gigboard_common::db::models::{Show, ShowListing};
use gigboard_common::Result;
use sqlx::SqlitePool;

const LISTING_SELECT: &str = r#"
    SELECT s.id, s.venue_id, v.name AS venue_name,
           s.artist_id, a.name AS artist_name,
           a.image_link AS artist_image_link, s.start_time
    FROM shows s
    JOIN venues v ON s.venue_id = v.id
    JOIN artists a ON s.artist_id = a.id
"#;

/// Insert a new show, returning its id.
///
/// A venue_id or artist_id with no matching record violates the schema's
/// foreign keys; the error is rolled back and surfaced to the caller.
pub async fn create(pool: &SqlitePool, draft: &ShowDraft) -> Result<i64> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        "INSERT INTO shows (venue_id, artist_id, start_time) VALUES (?, ?, ?)",
    )
    .bind(draft.venue_id)
    .bind(draft.artist_id)
    .bind(draft.start_time)
    .execute(&mut *tx)
    .await?;

    let id = result.last_insert_rowid();
    tx.commit().await?;
    Ok(id)
}

/// Load show by id
pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Show>> {
    let row = sqlx::query("SELECT * FROM shows WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(|row| Show::from_row(&row)))
}

/// All shows with venue and artist display fields, soonest first
pub async fn list_all(pool: &SqlitePool) -> Result<Vec<ShowListing>> {
    let sql = format!("{} ORDER BY s.start_time ASC", LISTING_SELECT);
    let rows = sqlx::query(&sql).fetch_all(pool).await?;
    Ok(rows.iter().map(ShowListing::from_row).collect())
}

/// Shows booked at a venue
pub async fn for_venue(pool: &SqlitePool, venue_id: i64) -> Result<Vec<ShowListing>> {
    let sql = format!("{} WHERE s.venue_id = ? ORDER BY s.start_time ASC", LISTING_SELECT);
    let rows = sqlx::query(&sql).bind(venue_id).fetch_all(pool).await?;
    Ok(rows.iter().map(ShowListing::from_row).collect())
}

/// Shows booked for an artist
pub async fn for_artist(pool: &SqlitePool, artist_id: i64) -> Result<Vec<ShowListing>> {
    let sql = format!("{} WHERE s.artist_id = ? ORDER BY s.start_time ASC", LISTING_SELECT);
    let rows = sqlx::query(&sql).bind(artist_id).fetch_all(pool).await?;
    Ok(rows.iter().map(ShowListing::from_row).collect())
}
