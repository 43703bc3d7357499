/// Venue page routes
use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::Form;
use chrono::Utc;
use showbill_core::listing;
use showbill_core::search::{search_entities, SearchSide};
use showbill_core::types::VenueId;

use super::redirect_with_notice;
use crate::error::{Result, ServerError};
use crate::forms::{SearchForm, VenueForm};
use crate::state::AppState;
use crate::templates::{
    self, AreaGroup, EditVenueTemplate, EntityRow, NewVenueTemplate, SearchVenuesTemplate,
    VenueDetailTemplate, VenuesTemplate,
};

/// GET /venues
pub async fn list_venues(State(state): State<AppState>) -> Result<VenuesTemplate> {
    let venues = showbill_storage::venues::get_all(&state.pool).await?;

    // Rows arrive ordered by (city, state), so grouping is a single pass
    // over adjacent rows.
    let mut areas: Vec<AreaGroup> = Vec::new();
    for venue in venues {
        let city = venue.city.unwrap_or_default();
        let state_code = venue.state.unwrap_or_default();
        let row = EntityRow {
            id: venue.id,
            name: venue.name,
        };

        let start_new_group = match areas.last() {
            Some(area) => area.city != city || area.state != state_code,
            None => true,
        };

        if start_new_group {
            areas.push(AreaGroup {
                city,
                state: state_code,
                venues: Vec::new(),
            });
        }

        if let Some(area) = areas.last_mut() {
            area.venues.push(row);
        }
    }

    Ok(VenuesTemplate { areas })
}

/// POST /venues/search
pub async fn search_venues(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<SearchVenuesTemplate> {
    let refs = showbill_storage::venues::get_refs(&state.pool).await?;
    let shows = showbill_storage::shows::get_all(&state.pool).await?;

    let results = search_entities(
        &refs,
        &shows,
        SearchSide::Venues,
        &form.search_term,
        Utc::now(),
    );

    Ok(SearchVenuesTemplate {
        search_term: form.search_term,
        count: results.count,
        matches: templates::match_rows(results),
    })
}

/// GET /venues/:venue_id
pub async fn show_venue(
    State(state): State<AppState>,
    Path(venue_id): Path<VenueId>,
) -> Result<VenueDetailTemplate> {
    let venue = showbill_storage::venues::get_by_id(&state.pool, venue_id)
        .await?
        .ok_or_else(|| ServerError::NotFound(format!("Venue {venue_id}")))?;

    let shows = showbill_storage::shows::get_by_venue(&state.pool, venue_id).await?;
    let artists = showbill_storage::artists::get_refs(&state.pool).await?;

    let page = listing::venue_page(&venue, &shows, &artists, Utc::now())?;

    Ok(page.into())
}

/// GET /venues/create
pub async fn create_venue_form() -> NewVenueTemplate {
    NewVenueTemplate
}

/// POST /venues/create
pub async fn create_venue(
    State(state): State<AppState>,
    Form(form): Form<VenueForm>,
) -> Result<Redirect> {
    let venue = showbill_storage::venues::create(&state.pool, &form.into_create()).await?;

    tracing::info!(venue_id = venue.id, "venue listed");

    Ok(redirect_with_notice(
        "/",
        &format!("Venue {} was successfully listed!", venue.name),
    ))
}

/// GET /venues/:venue_id/edit
pub async fn edit_venue_form(
    State(state): State<AppState>,
    Path(venue_id): Path<VenueId>,
) -> Result<EditVenueTemplate> {
    let venue = showbill_storage::venues::get_by_id(&state.pool, venue_id)
        .await?
        .ok_or_else(|| ServerError::NotFound(format!("Venue {venue_id}")))?;

    Ok(EditVenueTemplate {
        id: venue.id,
        name: venue.name,
        city: venue.city.unwrap_or_default(),
        state: venue.state.unwrap_or_default(),
        address: venue.address.unwrap_or_default(),
        phone: venue.phone.unwrap_or_default(),
        image_link: venue.image_link.unwrap_or_default(),
        facebook_link: venue.facebook_link.unwrap_or_default(),
        website: venue.website.unwrap_or_default(),
        genres: venue.genres.join(", "),
        seeking_talent: venue.seeking_talent,
        seeking_description: venue.seeking_description.unwrap_or_default(),
    })
}

/// POST /venues/:venue_id/edit
pub async fn edit_venue(
    State(state): State<AppState>,
    Path(venue_id): Path<VenueId>,
    Form(form): Form<VenueForm>,
) -> Result<Redirect> {
    showbill_storage::venues::update(&state.pool, venue_id, &form.into_create()).await?;

    Ok(Redirect::to(&format!("/venues/{venue_id}")))
}

/// POST /venues/:venue_id/delete (also mounted as DELETE /venues/:venue_id)
pub async fn delete_venue(
    State(state): State<AppState>,
    Path(venue_id): Path<VenueId>,
) -> Result<Redirect> {
    let venue = showbill_storage::venues::get_by_id(&state.pool, venue_id)
        .await?
        .ok_or_else(|| ServerError::NotFound(format!("Venue {venue_id}")))?;

    showbill_storage::venues::delete(&state.pool, venue_id).await?;

    tracing::info!(venue_id, "venue deleted");

    Ok(redirect_with_notice(
        "/",
        &format!("Venue {} was successfully deleted!", venue.name),
    ))
}
