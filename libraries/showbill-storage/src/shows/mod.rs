use chrono::{DateTime, Utc};
use showbill_core::types::{ArtistId, CreateShow, Show, ShowId, VenueId};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::error::{Result, StorageError};

/// One row on the all-shows listing page, with both sides of the
/// association resolved by the query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowListing {
    pub venue_id: VenueId,
    pub artist_id: ArtistId,
    pub venue_name: String,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

fn decode_start_time(secs: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| StorageError::Serialization(format!("invalid timestamp: {secs}")))
}

fn show_from_row(row: &SqliteRow) -> Result<Show> {
    Ok(Show {
        id: row.get("id"),
        artist_id: row.get("artist_id"),
        venue_id: row.get("venue_id"),
        start_time: decode_start_time(row.get("start_time"))?,
    })
}

/// Every show with artist and venue names resolved, for the listing page
pub async fn get_all_resolved(pool: &SqlitePool) -> Result<Vec<ShowListing>> {
    let rows = sqlx::query(
        "SELECT s.venue_id, s.artist_id, v.name AS venue_name, a.name AS artist_name, \
         a.image_link AS artist_image_link, s.start_time
         FROM shows s
         INNER JOIN venues v ON v.id = s.venue_id
         INNER JOIN artists a ON a.id = s.artist_id
         ORDER BY s.id",
    )
    .fetch_all(pool)
    .await?;

    rows.iter()
        .map(|row| {
            Ok(ShowListing {
                venue_id: row.get("venue_id"),
                artist_id: row.get("artist_id"),
                venue_name: row.get("venue_name"),
                artist_name: row.get("artist_name"),
                artist_image_link: row.get("artist_image_link"),
                start_time: decode_start_time(row.get("start_time"))?,
            })
        })
        .collect()
}

pub async fn get_by_venue(pool: &SqlitePool, venue_id: VenueId) -> Result<Vec<Show>> {
    let rows = sqlx::query(
        "SELECT id, artist_id, venue_id, start_time FROM shows WHERE venue_id = ? ORDER BY id",
    )
    .bind(venue_id)
    .fetch_all(pool)
    .await?;

    rows.iter().map(show_from_row).collect()
}

pub async fn get_by_artist(pool: &SqlitePool, artist_id: ArtistId) -> Result<Vec<Show>> {
    let rows = sqlx::query(
        "SELECT id, artist_id, venue_id, start_time FROM shows WHERE artist_id = ? ORDER BY id",
    )
    .bind(artist_id)
    .fetch_all(pool)
    .await?;

    rows.iter().map(show_from_row).collect()
}

pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Show>> {
    let rows = sqlx::query("SELECT id, artist_id, venue_id, start_time FROM shows ORDER BY id")
        .fetch_all(pool)
        .await?;

    rows.iter().map(show_from_row).collect()
}

pub async fn create(pool: &SqlitePool, show: CreateShow) -> Result<Show> {
    let result = sqlx::query("INSERT INTO shows (artist_id, venue_id, start_time) VALUES (?, ?, ?)")
        .bind(show.artist_id)
        .bind(show.venue_id)
        .bind(show.start_time.timestamp())
        .execute(pool)
        .await?;

    let id = result.last_insert_rowid();

    // Stored at second precision, so echo back what the row now holds.
    Ok(Show {
        id,
        artist_id: show.artist_id,
        venue_id: show.venue_id,
        start_time: decode_start_time(show.start_time.timestamp())?,
    })
}

pub async fn delete(pool: &SqlitePool, id: ShowId) -> Result<()> {
    let result = sqlx::query("DELETE FROM shows WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(StorageError::not_found("Show", id));
    }

    Ok(())
}
