/// Show page routes
use axum::extract::State;
use axum::response::Redirect;
use axum::Form;

use super::redirect_with_notice;
use crate::error::Result;
use crate::forms::ShowForm;
use crate::state::AppState;
use crate::templates::{NewShowTemplate, ShowListingRow, ShowsTemplate};

/// GET /shows
pub async fn list_shows(State(state): State<AppState>) -> Result<ShowsTemplate> {
    let shows = showbill_storage::shows::get_all_resolved(&state.pool).await?;

    Ok(ShowsTemplate {
        shows: shows.into_iter().map(ShowListingRow::from).collect(),
    })
}

/// GET /shows/create
pub async fn create_show_form() -> NewShowTemplate {
    NewShowTemplate
}

/// POST /shows/create
pub async fn create_show(
    State(state): State<AppState>,
    Form(form): Form<ShowForm>,
) -> Result<Redirect> {
    let show = showbill_storage::shows::create(&state.pool, form.into_create()?).await?;

    tracing::info!(show_id = show.id, "show listed");

    Ok(redirect_with_notice("/", "Show was successfully listed!"))
}
