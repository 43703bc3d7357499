//! Artist types

use serde::{Deserialize, Serialize};

pub type ArtistId = i64;

/// A performer who plays at venues
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Artist {
    pub id: ArtistId,
    pub name: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub genres: Vec<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl Artist {
    /// Create an artist with just an id and a name, all other fields empty
    pub fn new(id: ArtistId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            city: None,
            state: None,
            phone: None,
            image_link: None,
            facebook_link: None,
            website: None,
            genres: Vec::new(),
            seeking_venue: false,
            seeking_description: None,
        }
    }
}

/// Data for creating or updating an artist
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateArtist {
    pub name: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub genres: Vec<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}
