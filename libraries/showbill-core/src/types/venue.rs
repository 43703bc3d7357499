//! Venue types

use serde::{Deserialize, Serialize};

pub type VenueId = i64;

/// A place that hosts performances
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Venue {
    pub id: VenueId,
    pub name: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub genres: Vec<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl Venue {
    /// Create a venue with just an id and a name, all other fields empty
    pub fn new(id: VenueId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            city: None,
            state: None,
            address: None,
            phone: None,
            image_link: None,
            facebook_link: None,
            website: None,
            genres: Vec::new(),
            seeking_talent: false,
            seeking_description: None,
        }
    }
}

/// Data for creating or updating a venue
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateVenue {
    pub name: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub genres: Vec<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}
