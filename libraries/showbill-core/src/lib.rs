//! Showbill Core
//!
//! Framework-agnostic domain types and listing logic for Showbill.
//!
//! This crate defines:
//! - **Domain Types**: `Venue`, `Artist`, `Show` and their `Create*` inputs
//! - **Listing Aggregation**: past/upcoming partitioning of an entity's shows
//! - **Search Matching**: case-insensitive substring search over names
//! - **Error Handling**: `CoreError` and `Result`
//!
//! Everything here is pure: records come in as plain values already resolved
//! by the persistence boundary, and the reference instant is an explicit
//! parameter, never read from ambient wall-clock time.
//!
//! # Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use showbill_core::listing::{venue_page, EntityRef};
//! use showbill_core::types::{Show, Venue};
//!
//! let venue = Venue::new(1, "The Musical Hop");
//! let artists = vec![EntityRef { id: 4, name: "Guns N Petals".into(), image_link: None }];
//! let shows = vec![Show { id: 1, artist_id: 4, venue_id: 1,
//!     start_time: Utc.with_ymd_and_hms(2019, 5, 21, 21, 30, 0).unwrap() }];
//!
//! let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! let page = venue_page(&venue, &shows, &artists, now).unwrap();
//! assert_eq!(page.past_shows_count, 1);
//! assert_eq!(page.upcoming_shows_count, 0);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod listing;
pub mod search;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use listing::{ArtistPage, EntityRef, ShowSummary, VenuePage};
pub use search::{SearchMatch, SearchResults, SearchSide};
pub use types::{
    Artist, ArtistId, CreateArtist, CreateShow, CreateVenue, Show, ShowId, Venue, VenueId,
};
