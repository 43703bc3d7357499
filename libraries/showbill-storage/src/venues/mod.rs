use showbill_core::listing::EntityRef;
use showbill_core::types::{CreateVenue, Venue, VenueId};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::error::{Result, StorageError};

const COLUMNS: &str = "id, name, city, state, address, phone, image_link, facebook_link, \
                       website, genres, seeking_talent, seeking_description";

fn venue_from_row(row: &SqliteRow) -> Result<Venue> {
    let genres: String = row.get("genres");

    Ok(Venue {
        id: row.get("id"),
        name: row.get("name"),
        city: row.get("city"),
        state: row.get("state"),
        address: row.get("address"),
        phone: row.get("phone"),
        image_link: row.get("image_link"),
        facebook_link: row.get("facebook_link"),
        website: row.get("website"),
        genres: serde_json::from_str(&genres)
            .map_err(|e| StorageError::Serialization(e.to_string()))?,
        seeking_talent: row.get("seeking_talent"),
        seeking_description: row.get("seeking_description"),
    })
}

fn encode_genres(genres: &[String]) -> Result<String> {
    serde_json::to_string(genres).map_err(|e| StorageError::Serialization(e.to_string()))
}

pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Venue>> {
    let rows = sqlx::query(&format!(
        "SELECT {COLUMNS} FROM venues ORDER BY city, state, name"
    ))
    .fetch_all(pool)
    .await?;

    rows.iter().map(venue_from_row).collect()
}

pub async fn get_by_id(pool: &SqlitePool, id: VenueId) -> Result<Option<Venue>> {
    let row = sqlx::query(&format!("SELECT {COLUMNS} FROM venues WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(venue_from_row).transpose()
}

/// Venue summaries for counterpart resolution and search
pub async fn get_refs(pool: &SqlitePool) -> Result<Vec<EntityRef>> {
    let rows = sqlx::query("SELECT id, name, image_link FROM venues ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(rows
        .into_iter()
        .map(|row| EntityRef {
            id: row.get("id"),
            name: row.get("name"),
            image_link: row.get("image_link"),
        })
        .collect())
}

pub async fn create(pool: &SqlitePool, venue: &CreateVenue) -> Result<Venue> {
    let genres = encode_genres(&venue.genres)?;

    let result = sqlx::query(
        "INSERT INTO venues (name, city, state, address, phone, image_link, facebook_link, \
         website, genres, seeking_talent, seeking_description)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&venue.name)
    .bind(&venue.city)
    .bind(&venue.state)
    .bind(&venue.address)
    .bind(&venue.phone)
    .bind(&venue.image_link)
    .bind(&venue.facebook_link)
    .bind(&venue.website)
    .bind(&genres)
    .bind(venue.seeking_talent)
    .bind(&venue.seeking_description)
    .execute(pool)
    .await?;

    let id = result.last_insert_rowid();

    get_by_id(pool, id)
        .await?
        .ok_or_else(|| StorageError::Query("failed to retrieve created venue".to_string()))
}

pub async fn update(pool: &SqlitePool, id: VenueId, venue: &CreateVenue) -> Result<Venue> {
    let genres = encode_genres(&venue.genres)?;

    let result = sqlx::query(
        "UPDATE venues SET name = ?, city = ?, state = ?, address = ?, phone = ?, \
         image_link = ?, facebook_link = ?, website = ?, genres = ?, seeking_talent = ?, \
         seeking_description = ? WHERE id = ?",
    )
    .bind(&venue.name)
    .bind(&venue.city)
    .bind(&venue.state)
    .bind(&venue.address)
    .bind(&venue.phone)
    .bind(&venue.image_link)
    .bind(&venue.facebook_link)
    .bind(&venue.website)
    .bind(&genres)
    .bind(venue.seeking_talent)
    .bind(&venue.seeking_description)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(StorageError::not_found("Venue", id));
    }

    get_by_id(pool, id)
        .await?
        .ok_or_else(|| StorageError::Query("failed to retrieve updated venue".to_string()))
}

pub async fn delete(pool: &SqlitePool, id: VenueId) -> Result<()> {
    let result = sqlx::query("DELETE FROM venues WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(StorageError::not_found("Venue", id));
    }

    Ok(())
}
