//! Listing aggregation
//!
//! Partitions an entity's shows into past and upcoming relative to a caller
//! supplied reference instant, resolving each show's counterpart (artist for
//! a venue page, venue for an artist page) from pre-fetched summaries.
//!
//! Single linear scan, no sorting: output order follows input order.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{CoreError, Result};
use crate::types::{Artist, Show, Venue};

/// Counterpart entity summary, pre-resolved by the persistence boundary.
/// The core never fetches data on its own.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EntityRef {
    pub id: i64,
    pub name: String,
    pub image_link: Option<String>,
}

/// One classified show on a detail page, carrying the counterpart entity's
/// id, name, and image link plus the show's start time
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ShowSummary {
    pub counterpart_id: i64,
    pub counterpart_name: String,
    pub counterpart_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

/// View model for a venue detail page
#[derive(Debug, Clone, Serialize)]
pub struct VenuePage {
    pub venue: Venue,
    pub past_shows: Vec<ShowSummary>,
    pub upcoming_shows: Vec<ShowSummary>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// View model for an artist detail page
#[derive(Debug, Clone, Serialize)]
pub struct ArtistPage {
    pub artist: Artist,
    pub past_shows: Vec<ShowSummary>,
    pub upcoming_shows: Vec<ShowSummary>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// Build the view model for a venue page.
///
/// `shows` are the venue's shows; `artists` must contain a summary for every
/// `artist_id` appearing in them. A dangling reference fails the whole
/// aggregation with [`CoreError::BrokenReference`].
pub fn venue_page(
    venue: &Venue,
    shows: &[Show],
    artists: &[EntityRef],
    now: DateTime<Utc>,
) -> Result<VenuePage> {
    let (past_shows, upcoming_shows) =
        partition_shows(shows, artists, "artist", |s| s.artist_id, now)?;

    Ok(VenuePage {
        venue: venue.clone(),
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    })
}

/// Build the view model for an artist page.
///
/// Symmetric to [`venue_page`]: `venues` must resolve every `venue_id` in
/// `shows`.
pub fn artist_page(
    artist: &Artist,
    shows: &[Show],
    venues: &[EntityRef],
    now: DateTime<Utc>,
) -> Result<ArtistPage> {
    let (past_shows, upcoming_shows) =
        partition_shows(shows, venues, "venue", |s| s.venue_id, now)?;

    Ok(ArtistPage {
        artist: artist.clone(),
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    })
}

/// Number of shows strictly after `now`
pub fn upcoming_show_count(shows: &[Show], now: DateTime<Utc>) -> usize {
    shows.iter().filter(|s| s.start_time > now).count()
}

fn partition_shows(
    shows: &[Show],
    counterparts: &[EntityRef],
    entity: &'static str,
    counterpart_id: impl Fn(&Show) -> i64,
    now: DateTime<Utc>,
) -> Result<(Vec<ShowSummary>, Vec<ShowSummary>)> {
    let by_id: HashMap<i64, &EntityRef> = counterparts.iter().map(|r| (r.id, r)).collect();

    let mut past = Vec::new();
    let mut upcoming = Vec::new();

    for show in shows {
        let id = counterpart_id(show);
        let counterpart = by_id
            .get(&id)
            .ok_or_else(|| CoreError::broken_reference(show.id, entity, id))?;

        let summary = ShowSummary {
            counterpart_id: counterpart.id,
            counterpart_name: counterpart.name.clone(),
            counterpart_image_link: counterpart.image_link.clone(),
            start_time: show.start_time,
        };

        // Strict comparisons: a show starting exactly at `now` lands in
        // neither bucket.
        if show.start_time < now {
            past.push(summary);
        } else if show.start_time > now {
            upcoming.push(summary);
        }
    }

    Ok((past, upcoming))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(year: i32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap()
    }

    fn show(id: i64, artist_id: i64, venue_id: i64, start: DateTime<Utc>) -> Show {
        Show {
            id,
            artist_id,
            venue_id,
            start_time: start,
        }
    }

    fn artist_ref(id: i64, name: &str) -> EntityRef {
        EntityRef {
            id,
            name: name.to_string(),
            image_link: Some(format!("https://example.com/{id}.jpg")),
        }
    }

    #[test]
    fn splits_past_and_upcoming() {
        let venue = Venue::new(1, "The Musical Hop");
        let artists = vec![artist_ref(4, "Guns N Petals")];
        let shows = vec![
            show(1, 4, 1, at(2019)),
            show(2, 4, 1, at(2035)),
        ];

        let page = venue_page(&venue, &shows, &artists, at(2024)).unwrap();

        assert_eq!(page.past_shows_count, 1);
        assert_eq!(page.upcoming_shows_count, 1);
        assert_eq!(page.past_shows[0].start_time, at(2019));
        assert_eq!(page.upcoming_shows[0].start_time, at(2035));
        assert_eq!(page.past_shows[0].counterpart_name, "Guns N Petals");
    }

    #[test]
    fn counts_always_match_lengths() {
        let venue = Venue::new(1, "The Musical Hop");
        let artists = vec![artist_ref(4, "Guns N Petals"), artist_ref(5, "Matt Quevado")];
        let shows = vec![
            show(1, 4, 1, at(2015)),
            show(2, 5, 1, at(2016)),
            show(3, 4, 1, at(2030)),
        ];

        let page = venue_page(&venue, &shows, &artists, at(2024)).unwrap();

        assert_eq!(page.past_shows_count, page.past_shows.len());
        assert_eq!(page.upcoming_shows_count, page.upcoming_shows.len());
        assert_eq!(page.past_shows_count, 2);
        assert_eq!(page.upcoming_shows_count, 1);
    }

    #[test]
    fn entity_with_no_shows_is_empty() {
        let venue = Venue::new(1, "The Musical Hop");
        let page = venue_page(&venue, &[], &[], at(2024)).unwrap();

        assert!(page.past_shows.is_empty());
        assert!(page.upcoming_shows.is_empty());
        assert_eq!(page.past_shows_count, 0);
        assert_eq!(page.upcoming_shows_count, 0);
    }

    #[test]
    fn show_exactly_at_now_is_in_neither_bucket() {
        let venue = Venue::new(1, "The Musical Hop");
        let artists = vec![artist_ref(4, "Guns N Petals")];
        let now = at(2024);
        let shows = vec![show(1, 4, 1, now)];

        let page = venue_page(&venue, &shows, &artists, now).unwrap();

        assert_eq!(page.past_shows_count, 0);
        assert_eq!(page.upcoming_shows_count, 0);
    }

    #[test]
    fn output_order_follows_input_order() {
        let venue = Venue::new(1, "The Musical Hop");
        let artists = vec![artist_ref(4, "Guns N Petals"), artist_ref(5, "Matt Quevado")];
        // Deliberately not chronological
        let shows = vec![
            show(1, 4, 1, at(2018)),
            show(2, 5, 1, at(2012)),
            show(3, 4, 1, at(2015)),
        ];

        let page = venue_page(&venue, &shows, &artists, at(2024)).unwrap();

        let starts: Vec<_> = page.past_shows.iter().map(|s| s.start_time).collect();
        assert_eq!(starts, vec![at(2018), at(2012), at(2015)]);
    }

    #[test]
    fn dangling_artist_reference_fails_the_aggregation() {
        let venue = Venue::new(1, "The Musical Hop");
        let shows = vec![show(7, 99, 1, at(2019))];

        let err = venue_page(&venue, &shows, &[], at(2024)).unwrap_err();

        assert_eq!(err, CoreError::broken_reference(7, "artist", 99));
    }

    #[test]
    fn artist_page_resolves_venues() {
        let artist = Artist::new(4, "Guns N Petals");
        let venues = vec![EntityRef {
            id: 1,
            name: "The Musical Hop".to_string(),
            image_link: None,
        }];
        let shows = vec![show(1, 4, 1, at(2019)), show(2, 4, 1, at(2035))];

        let page = artist_page(&artist, &shows, &venues, at(2024)).unwrap();

        assert_eq!(page.past_shows_count, 1);
        assert_eq!(page.upcoming_shows_count, 1);
        assert_eq!(page.upcoming_shows[0].counterpart_id, 1);
        assert_eq!(page.upcoming_shows[0].counterpart_name, "The Musical Hop");
    }

    #[test]
    fn upcoming_show_count_uses_strict_comparison() {
        let now = at(2024);
        let shows = vec![
            show(1, 4, 1, at(2019)),
            show(2, 4, 1, now),
            show(3, 4, 1, at(2035)),
        ];

        assert_eq!(upcoming_show_count(&shows, now), 1);
    }
}
