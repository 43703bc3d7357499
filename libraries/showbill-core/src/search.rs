//! Search matching
//!
//! Case-insensitive substring search over name-bearing records, with each
//! match annotated by its upcoming-show count. No tokenization, no fuzzy
//! matching, no ranking: match order follows input order.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::listing::{upcoming_show_count, EntityRef};
use crate::types::Show;

/// Which side of the show association is being searched. Determines the
/// foreign key that relates a show to a matched entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchSide {
    Venues,
    Artists,
}

impl SearchSide {
    fn owner_id(self, show: &Show) -> i64 {
        match self {
            SearchSide::Venues => show.venue_id,
            SearchSide::Artists => show.artist_id,
        }
    }
}

/// One matched entity
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SearchMatch {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: usize,
}

/// Search outcome: the match count plus per-match summaries
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<SearchMatch>,
}

/// Return every entity whose name contains `query` as a substring,
/// case-insensitively.
///
/// Case folding is full Unicode lowercasing (`str::to_lowercase`) applied to
/// both the query and each candidate name. An empty query matches every
/// entity. Each match carries the count of its shows strictly after `now`,
/// related through the foreign key for `side`.
pub fn search_entities(
    entities: &[EntityRef],
    shows: &[Show],
    side: SearchSide,
    query: &str,
    now: DateTime<Utc>,
) -> SearchResults {
    let needle = query.to_lowercase();

    let data: Vec<SearchMatch> = entities
        .iter()
        .filter(|entity| entity.name.to_lowercase().contains(&needle))
        .map(|entity| {
            let owned: Vec<Show> = shows
                .iter()
                .filter(|show| side.owner_id(show) == entity.id)
                .copied()
                .collect();

            SearchMatch {
                id: entity.id,
                name: entity.name.clone(),
                num_upcoming_shows: upcoming_show_count(&owned, now),
            }
        })
        .collect();

    SearchResults {
        count: data.len(),
        data,
    }
}
