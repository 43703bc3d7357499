/// Typed form boundary
///
/// Every HTML form on the site deserializes into one of these structs; the
/// conversion into the core's `Create*` records (field trimming, genre
/// splitting, timestamp parsing) happens here and nowhere else.
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::Deserialize;
use showbill_core::types::{CreateArtist, CreateShow, CreateVenue};

use crate::error::{Result, ServerError};

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

#[derive(Debug, Deserialize)]
pub struct VenueForm {
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub image_link: String,
    #[serde(default)]
    pub facebook_link: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub genres: String,
    #[serde(default)]
    pub seeking_talent: Option<String>,
    #[serde(default)]
    pub seeking_description: String,
}

impl VenueForm {
    pub fn into_create(self) -> CreateVenue {
        CreateVenue {
            name: self.name.trim().to_string(),
            city: optional(self.city),
            state: optional(self.state),
            address: optional(self.address),
            phone: optional(self.phone),
            image_link: optional(self.image_link),
            facebook_link: optional(self.facebook_link),
            website: optional(self.website),
            genres: split_genres(&self.genres),
            seeking_talent: checkbox(self.seeking_talent.as_deref()),
            seeking_description: optional(self.seeking_description),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ArtistForm {
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub image_link: String,
    #[serde(default)]
    pub facebook_link: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub genres: String,
    #[serde(default)]
    pub seeking_venue: Option<String>,
    #[serde(default)]
    pub seeking_description: String,
}

impl ArtistForm {
    pub fn into_create(self) -> CreateArtist {
        CreateArtist {
            name: self.name.trim().to_string(),
            city: optional(self.city),
            state: optional(self.state),
            phone: optional(self.phone),
            image_link: optional(self.image_link),
            facebook_link: optional(self.facebook_link),
            website: optional(self.website),
            genres: split_genres(&self.genres),
            seeking_venue: checkbox(self.seeking_venue.as_deref()),
            seeking_description: optional(self.seeking_description),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ShowForm {
    pub artist_id: i64,
    pub venue_id: i64,
    pub start_time: String,
}

impl ShowForm {
    pub fn into_create(self) -> Result<CreateShow> {
        Ok(CreateShow {
            artist_id: self.artist_id,
            venue_id: self.venue_id,
            start_time: parse_start_time(&self.start_time)?,
        })
    }
}

fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// The multi-genre input arrives as one comma-separated field
pub fn split_genres(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

// HTML checkboxes submit a value only when ticked.
fn checkbox(value: Option<&str>) -> bool {
    value.is_some()
}

/// Parse the show form's start time.
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS`, and the `datetime-local` input
/// format `YYYY-MM-DDTHH:MM`. Naive values are taken as UTC.
pub fn parse_start_time(raw: &str) -> Result<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(t) = DateTime::parse_from_rfc3339(raw) {
        return Ok(t.with_timezone(&Utc));
    }

    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }

    Err(ServerError::BadRequest(format!(
        "unrecognized start time: {raw}"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn splits_and_trims_genres() {
        assert_eq!(
            split_genres("Jazz, Reggae ,Swing"),
            vec!["Jazz", "Reggae", "Swing"]
        );
        assert!(split_genres("").is_empty());
        assert!(split_genres(" , ,").is_empty());
    }

    #[test]
    fn parses_the_supported_start_time_formats() {
        let a = parse_start_time("2035-04-01 20:00:00").unwrap();
        let b = parse_start_time("2035-04-01T20:00").unwrap();
        let c = parse_start_time("2035-04-01T20:00:00Z").unwrap();

        assert_eq!(a, c);
        assert_eq!(b.hour(), 20);
    }

    #[test]
    fn rejects_garbage_start_times() {
        assert!(parse_start_time("next tuesday").is_err());
        assert!(parse_start_time("").is_err());
    }

    #[test]
    fn venue_form_maps_empty_fields_to_none() {
        let form = VenueForm {
            name: " The Musical Hop ".to_string(),
            city: "San Francisco".to_string(),
            state: String::new(),
            address: "  ".to_string(),
            phone: String::new(),
            image_link: String::new(),
            facebook_link: String::new(),
            website: String::new(),
            genres: "Jazz,Folk".to_string(),
            seeking_talent: Some("y".to_string()),
            seeking_description: String::new(),
        };

        let create = form.into_create();

        assert_eq!(create.name, "The Musical Hop");
        assert_eq!(create.city, Some("San Francisco".to_string()));
        assert_eq!(create.state, None);
        assert_eq!(create.address, None);
        assert_eq!(create.genres, vec!["Jazz", "Folk"]);
        assert!(create.seeking_talent);
        assert_eq!(create.seeking_description, None);
    }
}
