//! Showbill Storage
//!
//! `SQLite` persistence layer for Showbill.
//!
//! This crate owns the schema and all queries for venues, artists, and
//! shows. Each feature is a vertical slice (its own module with its own
//! queries); all slices are free functions over a shared pool. Rows come
//! back as the plain records defined in `showbill-core` — relationship
//! resolution happens here, never in the core.
//!
//! # Example
//!
//! ```rust,no_run
//! use showbill_storage::{create_pool, run_migrations};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://showbill.db").await?;
//! run_migrations(&pool).await?;
//!
//! let venues = showbill_storage::venues::get_all(&pool).await?;
//! # Ok(())
//! # }
//! ```

mod error;

// Vertical slices
pub mod artists;
pub mod shows;
pub mod venues;

pub use error::{Result, StorageError};

use sqlx::sqlite::SqlitePool;

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date. The migration files are embedded
/// and idempotent, so re-running on an existing database is safe.
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    const MIGRATIONS: &[&str] = &[
        include_str!("../migrations/0001_create_venues.sql"),
        include_str!("../migrations/0002_create_artists.sql"),
        include_str!("../migrations/0003_create_shows.sql"),
    ];

    for migration in MIGRATIONS {
        for statement in migration.split(';').filter(|s| !s.trim().is_empty()) {
            sqlx::query(statement)
                .execute(pool)
                .await
                .map_err(|e| StorageError::Migration(e.to_string()))?;
        }
    }

    Ok(())
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `sqlite://showbill.db`)
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}
