//! Integration tests for the artists vertical slice


use showbill_core::types::CreateArtist;
use showbill_storage::StorageError;
use test_helpers::*;

#[tokio::test]
async fn test_create_and_get_artist() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let artist = showbill_storage::artists::create(
        pool,
        &CreateArtist {
            name: "Guns N Petals".to_string(),
            city: Some("San Francisco".to_string()),
            state: Some("CA".to_string()),
            phone: Some("326-123-5000".to_string()),
            image_link: Some("https://example.com/petals.jpg".to_string()),
            facebook_link: Some("https://www.facebook.com/GunsNPetals".to_string()),
            website: Some("https://www.gunsnpetalsband.com".to_string()),
            genres: vec!["Rock n Roll".to_string()],
            seeking_venue: true,
            seeking_description: Some("Looking for shows to perform".to_string()),
        },
    )
    .await
    .expect("Failed to create artist");

    assert_eq!(artist.name, "Guns N Petals");
    assert!(artist.seeking_venue);

    let retrieved = showbill_storage::artists::get_by_id(pool, artist.id)
        .await
        .expect("Failed to get artist")
        .expect("Artist not found");

    assert_eq!(retrieved, artist);
    assert_eq!(retrieved.genres, vec!["Rock n Roll"]);
}

#[tokio::test]
async fn test_get_all_artists_sorted_by_name() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    create_test_artist(pool, "The Wild Sax Band").await;
    create_test_artist(pool, "Guns N Petals").await;
    create_test_artist(pool, "Matt Quevado").await;

    let artists = showbill_storage::artists::get_all(pool)
        .await
        .expect("Failed to get artists");

    assert_eq!(artists.len(), 3);
    assert_eq!(artists[0].name, "Guns N Petals");
    assert_eq!(artists[1].name, "Matt Quevado");
    assert_eq!(artists[2].name, "The Wild Sax Band");
}

#[tokio::test]
async fn test_update_artist() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let id = create_test_artist(pool, "Matt Quevado").await;

    let updated = showbill_storage::artists::update(
        pool,
        id,
        &CreateArtist {
            name: "Matt Quevedo".to_string(),
            city: Some("New York".to_string()),
            genres: vec!["Jazz".to_string()],
            ..CreateArtist::default()
        },
    )
    .await
    .expect("Failed to update artist");

    assert_eq!(updated.name, "Matt Quevedo");
    assert_eq!(updated.city, Some("New York".to_string()));
}

#[tokio::test]
async fn test_delete_artist() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let id = create_test_artist(pool, "The Wild Sax Band").await;

    showbill_storage::artists::delete(pool, id)
        .await
        .expect("Failed to delete artist");

    let missing = showbill_storage::artists::get_by_id(pool, id).await.unwrap();
    assert!(missing.is_none());

    let again = showbill_storage::artists::delete(pool, id).await;
    assert!(matches!(again, Err(StorageError::NotFound { .. })));
}

#[tokio::test]
async fn test_artist_with_empty_genres() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let id = create_test_artist(pool, "Solo Act").await;

    let artist = showbill_storage::artists::get_by_id(pool, id)
        .await
        .unwrap()
        .unwrap();

    assert!(artist.genres.is_empty());
    assert!(!artist.seeking_venue);
}
