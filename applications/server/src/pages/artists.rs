/// Artist page routes
use axum::extract::{Path, Query, State};
use axum::response::Redirect;
use axum::Form;
use chrono::Utc;
use showbill_core::listing;
use showbill_core::search::{search_entities, SearchSide};
use showbill_core::types::ArtistId;

use super::{redirect_with_notice, NoticeParams};
use crate::error::{Result, ServerError};
use crate::forms::{ArtistForm, SearchForm};
use crate::state::AppState;
use crate::templates::{
    self, ArtistDetailTemplate, ArtistsTemplate, EditArtistTemplate, EntityRow, NewArtistTemplate,
    SearchArtistsTemplate,
};

/// GET /artists
pub async fn list_artists(
    State(state): State<AppState>,
    Query(params): Query<NoticeParams>,
) -> Result<ArtistsTemplate> {
    let artists = showbill_storage::artists::get_all(&state.pool).await?;

    Ok(ArtistsTemplate {
        notice: params.notice,
        artists: artists
            .into_iter()
            .map(|artist| EntityRow {
                id: artist.id,
                name: artist.name,
            })
            .collect(),
    })
}

/// POST /artists/search
pub async fn search_artists(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<SearchArtistsTemplate> {
    let refs = showbill_storage::artists::get_refs(&state.pool).await?;
    let shows = showbill_storage::shows::get_all(&state.pool).await?;

    let results = search_entities(
        &refs,
        &shows,
        SearchSide::Artists,
        &form.search_term,
        Utc::now(),
    );

    Ok(SearchArtistsTemplate {
        search_term: form.search_term,
        count: results.count,
        matches: templates::match_rows(results),
    })
}

/// GET /artists/:artist_id
pub async fn show_artist(
    State(state): State<AppState>,
    Path(artist_id): Path<ArtistId>,
) -> Result<ArtistDetailTemplate> {
    let artist = showbill_storage::artists::get_by_id(&state.pool, artist_id)
        .await?
        .ok_or_else(|| ServerError::NotFound(format!("Artist {artist_id}")))?;

    let shows = showbill_storage::shows::get_by_artist(&state.pool, artist_id).await?;
    let venues = showbill_storage::venues::get_refs(&state.pool).await?;

    let page = listing::artist_page(&artist, &shows, &venues, Utc::now())?;

    Ok(page.into())
}

/// GET /artists/create
pub async fn create_artist_form() -> NewArtistTemplate {
    NewArtistTemplate
}

/// POST /artists/create
pub async fn create_artist(
    State(state): State<AppState>,
    Form(form): Form<ArtistForm>,
) -> Result<Redirect> {
    let artist = showbill_storage::artists::create(&state.pool, &form.into_create()).await?;

    tracing::info!(artist_id = artist.id, "artist listed");

    Ok(redirect_with_notice(
        "/",
        &format!("Artist {} was successfully listed!", artist.name),
    ))
}

/// GET /artists/:artist_id/edit
pub async fn edit_artist_form(
    State(state): State<AppState>,
    Path(artist_id): Path<ArtistId>,
) -> Result<EditArtistTemplate> {
    let artist = showbill_storage::artists::get_by_id(&state.pool, artist_id)
        .await?
        .ok_or_else(|| ServerError::NotFound(format!("Artist {artist_id}")))?;

    Ok(EditArtistTemplate {
        id: artist.id,
        name: artist.name,
        city: artist.city.unwrap_or_default(),
        state: artist.state.unwrap_or_default(),
        phone: artist.phone.unwrap_or_default(),
        image_link: artist.image_link.unwrap_or_default(),
        facebook_link: artist.facebook_link.unwrap_or_default(),
        website: artist.website.unwrap_or_default(),
        genres: artist.genres.join(", "),
        seeking_venue: artist.seeking_venue,
        seeking_description: artist.seeking_description.unwrap_or_default(),
    })
}

/// POST /artists/:artist_id/edit
pub async fn edit_artist(
    State(state): State<AppState>,
    Path(artist_id): Path<ArtistId>,
    Form(form): Form<ArtistForm>,
) -> Result<Redirect> {
    showbill_storage::artists::update(&state.pool, artist_id, &form.into_create()).await?;

    Ok(Redirect::to(&format!("/artists/{artist_id}")))
}

/// POST /artists/:artist_id/delete (also mounted as DELETE /artists/:artist_id)
pub async fn delete_artist(
    State(state): State<AppState>,
    Path(artist_id): Path<ArtistId>,
) -> Result<Redirect> {
    let artist = showbill_storage::artists::get_by_id(&state.pool, artist_id)
        .await?
        .ok_or_else(|| ServerError::NotFound(format!("Artist {artist_id}")))?;

    showbill_storage::artists::delete(&state.pool, artist_id).await?;

    tracing::info!(artist_id, "artist deleted");

    Ok(redirect_with_notice(
        "/artists",
        &format!("Artist {} was successfully deleted!", artist.name),
    ))
}
