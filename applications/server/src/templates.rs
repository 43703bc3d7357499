/// Askama view models for the page handlers
///
/// Handlers hand these structs display-ready values: absent optional fields
/// become empty strings and instants are pre-formatted, so the templates
/// stay free of unwrapping logic.
use askama::Template;
use chrono::{DateTime, Utc};
use showbill_core::listing::{ArtistPage, ShowSummary, VenuePage};
use showbill_core::search::SearchResults;
use showbill_storage::shows::ShowListing;

/// Render an instant the way the listing pages display it
pub fn format_datetime(t: DateTime<Utc>) -> String {
    t.format("%a %b %d, %Y %H:%M").to_string()
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub notice: String,
}

#[derive(Template)]
#[template(path = "errors/404.html")]
pub struct NotFoundTemplate {
    pub message: String,
}

#[derive(Template)]
#[template(path = "errors/500.html")]
pub struct ServerErrorTemplate {
    pub message: String,
}

/// A bare id/name row on the listing pages
pub struct EntityRow {
    pub id: i64,
    pub name: String,
}

/// Venues that share a city/state, for the grouped venues page
pub struct AreaGroup {
    pub city: String,
    pub state: String,
    pub venues: Vec<EntityRow>,
}

#[derive(Template)]
#[template(path = "venues.html")]
pub struct VenuesTemplate {
    pub areas: Vec<AreaGroup>,
}

#[derive(Template)]
#[template(path = "artists.html")]
pub struct ArtistsTemplate {
    pub notice: String,
    pub artists: Vec<EntityRow>,
}

/// One search hit with its upcoming-show count
pub struct MatchRow {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: usize,
}

#[derive(Template)]
#[template(path = "search_venues.html")]
pub struct SearchVenuesTemplate {
    pub search_term: String,
    pub count: usize,
    pub matches: Vec<MatchRow>,
}

#[derive(Template)]
#[template(path = "search_artists.html")]
pub struct SearchArtistsTemplate {
    pub search_term: String,
    pub count: usize,
    pub matches: Vec<MatchRow>,
}

pub fn match_rows(results: SearchResults) -> Vec<MatchRow> {
    results
        .data
        .into_iter()
        .map(|m| MatchRow {
            id: m.id,
            name: m.name,
            num_upcoming_shows: m.num_upcoming_shows,
        })
        .collect()
}

/// One classified show on a detail page
pub struct ShowRow {
    pub counterpart_id: i64,
    pub counterpart_name: String,
    pub counterpart_image_link: String,
    pub start_time: String,
}

impl From<ShowSummary> for ShowRow {
    fn from(summary: ShowSummary) -> Self {
        Self {
            counterpart_id: summary.counterpart_id,
            counterpart_name: summary.counterpart_name,
            counterpart_image_link: summary.counterpart_image_link.unwrap_or_default(),
            start_time: format_datetime(summary.start_time),
        }
    }
}

#[derive(Template)]
#[template(path = "show_venue.html")]
pub struct VenueDetailTemplate {
    pub id: i64,
    pub name: String,
    pub genres: Vec<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub website: String,
    pub facebook_link: String,
    pub image_link: String,
    pub seeking_talent: bool,
    pub seeking_description: String,
    pub past_shows: Vec<ShowRow>,
    pub upcoming_shows: Vec<ShowRow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl From<VenuePage> for VenueDetailTemplate {
    fn from(page: VenuePage) -> Self {
        let venue = page.venue;
        Self {
            id: venue.id,
            name: venue.name,
            genres: venue.genres,
            address: venue.address.unwrap_or_default(),
            city: venue.city.unwrap_or_default(),
            state: venue.state.unwrap_or_default(),
            phone: venue.phone.unwrap_or_default(),
            website: venue.website.unwrap_or_default(),
            facebook_link: venue.facebook_link.unwrap_or_default(),
            image_link: venue.image_link.unwrap_or_default(),
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description.unwrap_or_default(),
            past_shows: page.past_shows.into_iter().map(ShowRow::from).collect(),
            upcoming_shows: page.upcoming_shows.into_iter().map(ShowRow::from).collect(),
            past_shows_count: page.past_shows_count,
            upcoming_shows_count: page.upcoming_shows_count,
        }
    }
}

#[derive(Template)]
#[template(path = "show_artist.html")]
pub struct ArtistDetailTemplate {
    pub id: i64,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub website: String,
    pub facebook_link: String,
    pub image_link: String,
    pub seeking_venue: bool,
    pub seeking_description: String,
    pub past_shows: Vec<ShowRow>,
    pub upcoming_shows: Vec<ShowRow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl From<ArtistPage> for ArtistDetailTemplate {
    fn from(page: ArtistPage) -> Self {
        let artist = page.artist;
        Self {
            id: artist.id,
            name: artist.name,
            genres: artist.genres,
            city: artist.city.unwrap_or_default(),
            state: artist.state.unwrap_or_default(),
            phone: artist.phone.unwrap_or_default(),
            website: artist.website.unwrap_or_default(),
            facebook_link: artist.facebook_link.unwrap_or_default(),
            image_link: artist.image_link.unwrap_or_default(),
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description.unwrap_or_default(),
            past_shows: page.past_shows.into_iter().map(ShowRow::from).collect(),
            upcoming_shows: page.upcoming_shows.into_iter().map(ShowRow::from).collect(),
            past_shows_count: page.past_shows_count,
            upcoming_shows_count: page.upcoming_shows_count,
        }
    }
}

#[derive(Template)]
#[template(path = "new_venue.html")]
pub struct NewVenueTemplate;

#[derive(Template)]
#[template(path = "edit_venue.html")]
pub struct EditVenueTemplate {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub image_link: String,
    pub facebook_link: String,
    pub website: String,
    pub genres: String,
    pub seeking_talent: bool,
    pub seeking_description: String,
}

#[derive(Template)]
#[template(path = "new_artist.html")]
pub struct NewArtistTemplate;

#[derive(Template)]
#[template(path = "edit_artist.html")]
pub struct EditArtistTemplate {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub image_link: String,
    pub facebook_link: String,
    pub website: String,
    pub genres: String,
    pub seeking_venue: bool,
    pub seeking_description: String,
}

/// One row on the all-shows page
pub struct ShowListingRow {
    pub venue_id: i64,
    pub artist_id: i64,
    pub venue_name: String,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: String,
}

impl From<ShowListing> for ShowListingRow {
    fn from(listing: ShowListing) -> Self {
        Self {
            venue_id: listing.venue_id,
            artist_id: listing.artist_id,
            venue_name: listing.venue_name,
            artist_name: listing.artist_name,
            artist_image_link: listing.artist_image_link.unwrap_or_default(),
            start_time: format_datetime(listing.start_time),
        }
    }
}

#[derive(Template)]
#[template(path = "shows.html")]
pub struct ShowsTemplate {
    pub shows: Vec<ShowListingRow>,
}

#[derive(Template)]
#[template(path = "new_show.html")]
pub struct NewShowTemplate;
