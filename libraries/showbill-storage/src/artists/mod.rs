use showbill_core::listing::EntityRef;
use showbill_core::types::{Artist, ArtistId, CreateArtist};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::error::{Result, StorageError};

const COLUMNS: &str = "id, name, city, state, phone, image_link, facebook_link, website, \
                       genres, seeking_venue, seeking_description";

fn artist_from_row(row: &SqliteRow) -> Result<Artist> {
    let genres: String = row.get("genres");

    Ok(Artist {
        id: row.get("id"),
        name: row.get("name"),
        city: row.get("city"),
        state: row.get("state"),
        phone: row.get("phone"),
        image_link: row.get("image_link"),
        facebook_link: row.get("facebook_link"),
        website: row.get("website"),
        genres: serde_json::from_str(&genres)
            .map_err(|e| StorageError::Serialization(e.to_string()))?,
        seeking_venue: row.get("seeking_venue"),
        seeking_description: row.get("seeking_description"),
    })
}

fn encode_genres(genres: &[String]) -> Result<String> {
    serde_json::to_string(genres).map_err(|e| StorageError::Serialization(e.to_string()))
}

pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Artist>> {
    let rows = sqlx::query(&format!("SELECT {COLUMNS} FROM artists ORDER BY name"))
        .fetch_all(pool)
        .await?;

    rows.iter().map(artist_from_row).collect()
}

pub async fn get_by_id(pool: &SqlitePool, id: ArtistId) -> Result<Option<Artist>> {
    let row = sqlx::query(&format!("SELECT {COLUMNS} FROM artists WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(artist_from_row).transpose()
}

/// Artist summaries for counterpart resolution and search
pub async fn get_refs(pool: &SqlitePool) -> Result<Vec<EntityRef>> {
    let rows = sqlx::query("SELECT id, name, image_link FROM artists ORDER BY id")
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

pub async fn create(pool: &SqlitePool, artist: &CreateArtist) -> Result<Artist> {
    let genres = encode_genres(&artist.genres)?;

    let result = sqlx::query(
        "INSERT INTO artists (name, city, state, phone, image_link, facebook_link, website, \
         genres, seeking_venue, seeking_description)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&artist.name)
    .bind(&artist.city)
    .bind(&artist.state)
    .bind(&artist.phone)
    .bind(&artist.image_link)
    .bind(&artist.facebook_link)
    .bind(&artist.website)
    .bind(&genres)
    .bind(artist.seeking_venue)
    .bind(&artist.seeking_description)
    .execute(pool)
    .await?;

    let id = result.last_insert_rowid();

    get_by_id(pool, id)
        .await?
        .ok_or_else(|| StorageError::Query("failed to retrieve created artist".to_string()))
}

pub async fn update(pool: &SqlitePool, id: ArtistId, artist: &CreateArtist) -> Result<Artist> {
    let genres = encode_genres(&artist.genres)?;

    let result = sqlx::query(
        "UPDATE artists SET name = ?, city = ?, state = ?, phone = ?, image_link = ?, \
         facebook_link = ?, website = ?, genres = ?, seeking_venue = ?, \
         seeking_description = ? WHERE id = ?",
    )
    .bind(&artist.name)
    .bind(&artist.city)
    .bind(&artist.state)
    .bind(&artist.phone)
    .bind(&artist.image_link)
    .bind(&artist.facebook_link)
    .bind(&artist.website)
    .bind(&genres)
    .bind(artist.seeking_venue)
    .bind(&artist.seeking_description)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(StorageError::not_found("Artist", id));
    }

    get_by_id(pool, id)
        .await?
        .ok_or_else(|| StorageError::Query("failed to retrieve updated artist".to_string()))
}

pub async fn delete(pool: &SqlitePool, id: ArtistId) -> Result<()> {
    let result = sqlx::query("DELETE FROM artists WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(StorageError::not_found("Artist", id));
    }

    Ok(())
}
