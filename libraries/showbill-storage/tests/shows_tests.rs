//! Integration tests for the shows vertical slice
//!
//! Covers the association lifecycle:
//! - Creating shows against existing artists and venues
//! - Foreign key enforcement for dangling references
//! - Cascade deletion when either side is removed
//! - The resolved listing join


use showbill_core::types::CreateShow;
use showbill_storage::StorageError;
use test_helpers::*;

#[tokio::test]
async fn test_create_and_list_shows_for_venue() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let venue_id = create_test_venue(pool, "The Musical Hop", "San Francisco").await;
    let artist_id = create_test_artist(pool, "Guns N Petals").await;

    let when = instant(2019, 5, 21);
    create_test_show(pool, artist_id, venue_id, when).await;

    let shows = showbill_storage::shows::get_by_venue(pool, venue_id)
        .await
        .expect("Failed to list shows");

    assert_eq!(shows.len(), 1);
    assert_eq!(shows[0].artist_id, artist_id);
    assert_eq!(shows[0].venue_id, venue_id);
    assert_eq!(shows[0].start_time, when);
}

#[tokio::test]
async fn test_list_shows_for_artist() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let venue_a = create_test_venue(pool, "The Musical Hop", "San Francisco").await;
    let venue_b = create_test_venue(pool, "The Dueling Pianos Bar", "New York").await;
    let artist_id = create_test_artist(pool, "The Wild Sax Band").await;

    create_test_show(pool, artist_id, venue_a, instant(2019, 5, 21)).await;
    create_test_show(pool, artist_id, venue_b, instant(2035, 4, 1)).await;

    let shows = showbill_storage::shows::get_by_artist(pool, artist_id)
        .await
        .expect("Failed to list shows");

    assert_eq!(shows.len(), 2);
    assert_eq!(shows[0].venue_id, venue_a);
    assert_eq!(shows[1].venue_id, venue_b);
}

#[tokio::test]
async fn test_create_show_with_missing_artist_fails() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let venue_id = create_test_venue(pool, "The Musical Hop", "San Francisco").await;

    let result = showbill_storage::shows::create(
        pool,
        CreateShow {
            artist_id: 9999,
            venue_id,
            start_time: instant(2035, 4, 1),
        },
    )
    .await;

    assert!(result.is_err(), "Dangling artist reference should fail");
}

#[tokio::test]
async fn test_deleting_venue_cascades_to_shows() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let venue_id = create_test_venue(pool, "Park Square Live Music & Coffee", "San Francisco").await;
    let artist_id = create_test_artist(pool, "Matt Quevado").await;
    create_test_show(pool, artist_id, venue_id, instant(2019, 6, 15)).await;

    showbill_storage::venues::delete(pool, venue_id)
        .await
        .expect("Failed to delete venue");

    let orphaned = showbill_storage::shows::get_by_artist(pool, artist_id)
        .await
        .unwrap();
    assert!(orphaned.is_empty(), "Shows should be removed with the venue");
}

#[tokio::test]
async fn test_deleting_artist_cascades_to_shows() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let venue_id = create_test_venue(pool, "The Musical Hop", "San Francisco").await;
    let artist_id = create_test_artist(pool, "Guns N Petals").await;
    create_test_show(pool, artist_id, venue_id, instant(2019, 5, 21)).await;

    showbill_storage::artists::delete(pool, artist_id)
        .await
        .expect("Failed to delete artist");

    let orphaned = showbill_storage::shows::get_by_venue(pool, venue_id)
        .await
        .unwrap();
    assert!(orphaned.is_empty(), "Shows should be removed with the artist");
}

#[tokio::test]
async fn test_resolved_listing_carries_both_names() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let venue_id = create_test_venue(pool, "The Musical Hop", "San Francisco").await;
    let artist_id = create_test_artist(pool, "Guns N Petals").await;
    let when = instant(2019, 5, 21);
    create_test_show(pool, artist_id, venue_id, when).await;

    let listings = showbill_storage::shows::get_all_resolved(pool)
        .await
        .expect("Failed to resolve shows");

    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].venue_name, "The Musical Hop");
    assert_eq!(listings[0].artist_name, "Guns N Petals");
    assert_eq!(listings[0].start_time, when);
}

#[tokio::test]
async fn test_delete_show() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let venue_id = create_test_venue(pool, "The Musical Hop", "San Francisco").await;
    let artist_id = create_test_artist(pool, "Guns N Petals").await;
    let show_id = create_test_show(pool, artist_id, venue_id, instant(2019, 5, 21)).await;

    showbill_storage::shows::delete(pool, show_id)
        .await
        .expect("Failed to delete show");

    let remaining = showbill_storage::shows::get_all(pool).await.unwrap();
    assert!(remaining.is_empty());

    let again = showbill_storage::shows::delete(pool, show_id).await;
    assert!(matches!(again, Err(StorageError::NotFound { .. })));
}
