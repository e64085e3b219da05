//! Artist database operations

use crate::forms::ArtistDraft;
use gigboard_common::db::models::Artist;
use gigboard_common::genres::encode_genres;
use gigboard_common::{Error, Result};
use sqlx::SqlitePool;

/// Insert a new artist, returning its id
pub async fn create(pool: &SqlitePool, draft: &ArtistDraft) -> Result<i64> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        r#"
        INSERT INTO artists (
            name, city, state, phone, genres,
            image_link, website_link, facebook_link,
            seeking_venue, seeking_description
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&draft.name)
    .bind(&draft.city)
    .bind(&draft.state)
    .bind(&draft.phone)
    .bind(encode_genres(&draft.genres))
    .bind(&draft.image_link)
    .bind(&draft.website_link)
    .bind(&draft.facebook_link)
    .bind(draft.seeking_venue)
    .bind(&draft.seeking_description)
    .execute(&mut *tx)
    .await?;

    let id = result.last_insert_rowid();
    tx.commit().await?;
    Ok(id)
}

/// Load artist by id
pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Artist>> {
    let row = sqlx::query("SELECT * FROM artists WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(|row| Artist::from_row(&row)))
}

/// All artists, alphabetically ascending by name
pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Artist>> {
    let rows = sqlx::query("SELECT * FROM artists ORDER BY name ASC")
        .fetch_all(pool)
        .await?;
    Ok(rows.iter().map(Artist::from_row).collect())
}

/// Case-insensitive substring match over the name field
pub async fn search_by_name(pool: &SqlitePool, term: &str) -> Result<Vec<Artist>> {
    let pattern = format!("%{}%", term);
    let rows = sqlx::query("SELECT * FROM artists WHERE name LIKE ? ORDER BY name ASC")
        .bind(pattern)
        .fetch_all(pool)
        .await?;
    Ok(rows.iter().map(Artist::from_row).collect())
}

/// Overwrite an existing artist's fields
pub async fn update(pool: &SqlitePool, id: i64, draft: &ArtistDraft) -> Result<()> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        r#"
        UPDATE artists SET
            name = ?, city = ?, state = ?, phone = ?, genres = ?,
            image_link = ?, website_link = ?, facebook_link = ?,
            seeking_venue = ?, seeking_description = ?
        WHERE id = ?
        "#,
    )
    .bind(&draft.name)
    .bind(&draft.city)
    .bind(&draft.state)
    .bind(&draft.phone)
    .bind(encode_genres(&draft.genres))
    .bind(&draft.image_link)
    .bind(&draft.website_link)
    .bind(&draft.facebook_link)
    .bind(draft.seeking_venue)
    .bind(&draft.seeking_description)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("artist {}", id)));
    }

    tx.commit().await?;
    Ok(())
}
