/// Home page
use axum::extract::Query;

use super::NoticeParams;
use crate::templates::HomeTemplate;

/// GET /
pub async fn index(Query(params): Query<NoticeParams>) -> HomeTemplate {
    HomeTemplate {
        notice: params.notice,
    }
}
