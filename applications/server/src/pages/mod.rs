//! Server-rendered page handlers
//!
//! Handlers fetch plain records from storage, capture the reference instant
//! once per request, and hand everything to `showbill-core` for
//! classification and matching. No listing logic lives here.

pub mod artists;
pub mod health;
pub mod home;
pub mod shows;
pub mod venues;

use axum::http::StatusCode;
use axum::response::Redirect;
use serde::Deserialize;

use crate::templates::NotFoundTemplate;

/// Success notice carried on a post-action redirect
#[derive(Debug, Deserialize)]
pub struct NoticeParams {
    #[serde(default)]
    pub notice: String,
}

/// Fallback for unknown paths
pub async fn not_found() -> (StatusCode, NotFoundTemplate) {
    (
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            message: "the page you requested".to_string(),
        },
    )
}

pub(crate) fn redirect_with_notice(path: &str, notice: &str) -> Redirect {
    let query = serde_urlencoded::to_string(&[("notice", notice)]).unwrap_or_default();
    Redirect::to(&format!("{path}?{query}"))
}
