//! Showbill Server Library
//!
//! Server-rendered venue, artist, and show listings over axum + askama.
//!
//! This library exposes the router and its components for testing purposes.

pub mod config;
pub mod error;
pub mod forms;
pub mod pages;
pub mod seed;
pub mod state;
pub mod templates;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use state::AppState;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Build the full route table over the given state
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::home::index))
        .route("/health", get(pages::health::health))
        // Venues
        .route("/venues", get(pages::venues::list_venues))
        .route("/venues/search", post(pages::venues::search_venues))
        .route(
            "/venues/create",
            get(pages::venues::create_venue_form).post(pages::venues::create_venue),
        )
        .route(
            "/venues/:venue_id",
            get(pages::venues::show_venue).delete(pages::venues::delete_venue),
        )
        .route(
            "/venues/:venue_id/edit",
            get(pages::venues::edit_venue_form).post(pages::venues::edit_venue),
        )
        .route("/venues/:venue_id/delete", post(pages::venues::delete_venue))
        // Artists
        .route("/artists", get(pages::artists::list_artists))
        .route("/artists/search", post(pages::artists::search_artists))
        .route(
            "/artists/create",
            get(pages::artists::create_artist_form).post(pages::artists::create_artist),
        )
        .route(
            "/artists/:artist_id",
            get(pages::artists::show_artist).delete(pages::artists::delete_artist),
        )
        .route(
            "/artists/:artist_id/edit",
            get(pages::artists::edit_artist_form).post(pages::artists::edit_artist),
        )
        .route(
            "/artists/:artist_id/delete",
            post(pages::artists::delete_artist),
        )
        // Shows
        .route("/shows", get(pages::shows::list_shows))
        .route(
            "/shows/create",
            get(pages::shows::create_show_form).post(pages::shows::create_show),
        )
        .fallback(pages::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
