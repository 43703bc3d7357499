/// Common test utilities and fixtures
use axum::Router;
use showbill_server::{create_router, AppState};
use sqlx::SqlitePool;
use tempfile::TempDir;

/// A router over a fresh temp-file database
pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    _temp_dir: TempDir,
}

pub async fn create_test_app() -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let db_url = format!("sqlite://{}", db_path.display());

    let pool = showbill_storage::create_pool(&db_url)
        .await
        .expect("Failed to create pool");

    showbill_storage::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    TestApp {
        router: create_router(AppState::new(pool.clone())),
        pool,
        _temp_dir: temp_dir,
    }
}
