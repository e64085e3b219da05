//! Venue database operations

use crate::forms::VenueDraft;
use gigboard_common::db::models::Venue;
use gigboard_common::genres::encode_genres;
use gigboard_common::{Error, Result};
use sqlx::SqlitePool;

/// Insert a new venue, returning its id
pub async fn create(pool: &SqlitePool, draft: &VenueDraft) -> Result<i64> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        r#"
        INSERT INTO venues (
            name, city, state, address, phone, genres,
            image_link, website_link, facebook_link,
            seeking_talent, seeking_description
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&draft.name)
    .bind(&draft.city)
    .bind(&draft.state)
    .bind(&draft.address)
    .bind(&draft.phone)
    .bind(encode_genres(&draft.genres))
    .bind(&draft.image_link)
    .bind(&draft.website_link)
    .bind(&draft.facebook_link)
    .bind(draft.seeking_talent)
    .bind(&draft.seeking_description)
    .execute(&mut *tx)
    .await?;

    let id = result.last_insert_rowid();
    tx.commit().await?;
    Ok(id)
}

/// Load venue by id
pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Venue>> {
    let row = sqlx::query("SELECT * FROM venues WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(|row| Venue::from_row(&row)))
}

/// All venues, ascending by name
pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Venue>> {
    let rows = sqlx::query("SELECT * FROM venues ORDER BY name ASC")
        .fetch_all(pool)
        .await?;
    Ok(rows.iter().map(Venue::from_row).collect())
}

/// Distinct (city, state) pairs, for the grouped venues listing
pub async fn distinct_city_states(pool: &SqlitePool) -> Result<Vec<(String, String)>> {
    let pairs = sqlx::query_as::<_, (String, String)>(
        "SELECT DISTINCT city, state FROM venues ORDER BY state ASC, city ASC",
    )
    .fetch_all(pool)
    .await?;
    Ok(pairs)
}

/// Venues in an exact city and state
pub async fn find_by_city_state(pool: &SqlitePool, city: &str, state: &str) -> Result<Vec<Venue>> {
    let rows = sqlx::query("SELECT * FROM venues WHERE city = ? AND state = ? ORDER BY name ASC")
        .bind(city)
        .bind(state)
        .fetch_all(pool)
        .await?;
    Ok(rows.iter().map(Venue::from_row).collect())
}

/// Case-insensitive substring match over the name field
pub async fn search_by_name(pool: &SqlitePool, term: &str) -> Result<Vec<Venue>> {
    let pattern = format!("%{}%", term);
    let rows = sqlx::query("SELECT * FROM venues WHERE name LIKE ? ORDER BY name ASC")
        .bind(pattern)
        .fetch_all(pool)
        .await?;
    Ok(rows.iter().map(Venue::from_row).collect())
}

/// Overwrite an existing venue's fields
pub async fn update(pool: &SqlitePool, id: i64, draft: &VenueDraft) -> Result<()> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        r#"
        UPDATE venues SET
            name = ?, city = ?, state = ?, address = ?, phone = ?, genres = ?,
            image_link = ?, website_link = ?, facebook_link = ?,
            seeking_talent = ?, seeking_description = ?
        WHERE id = ?
        "#,
    )
    .bind(&draft.name)
    .bind(&draft.city)
    .bind(&draft.state)
    .bind(&draft.address)
    .bind(&draft.phone)
    .bind(encode_genres(&draft.genres))
    .bind(&draft.image_link)
    .bind(&draft.website_link)
    .bind(&draft.facebook_link)
    .bind(draft.seeking_talent)
    .bind(&draft.seeking_description)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("venue {}", id)));
    }

    tx.commit().await?;
    Ok(())
}

/// Delete a venue. Shows referencing it are removed by the schema's
/// ON DELETE CASCADE rule.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<()> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query("DELETE FROM venues WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("venue {}", id)));
    }

    tx.commit().await?;
    Ok(())
}
