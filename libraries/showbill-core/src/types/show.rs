//! Show types

use super::{ArtistId, VenueId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type ShowId = i64;

/// A scheduled performance associating one artist with one venue at a
/// start time. Pure association record; immutable after creation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Show {
    pub id: ShowId,
    pub artist_id: ArtistId,
    pub venue_id: VenueId,
    pub start_time: DateTime<Utc>,
}

/// Data for creating a new show
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CreateShow {
    pub artist_id: ArtistId,
    pub venue_id: VenueId,
    pub start_time: DateTime<Utc>,
}
