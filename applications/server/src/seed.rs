/// Demo dataset for local development
use chrono::{DateTime, TimeZone, Utc};
use showbill_core::types::{CreateArtist, CreateShow, CreateVenue};
use sqlx::SqlitePool;

use crate::error::Result;

fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// Insert a handful of venues, artists, and shows to browse against
pub async fn run(pool: &SqlitePool) -> Result<()> {
    let hop = showbill_storage::venues::create(
        pool,
        &CreateVenue {
            name: "The Musical Hop".to_string(),
            city: Some("San Francisco".to_string()),
            state: Some("CA".to_string()),
            address: Some("1015 Folsom Street".to_string()),
            phone: Some("123-123-1234".to_string()),
            image_link: None,
            facebook_link: Some("https://www.facebook.com/TheMusicalHop".to_string()),
            website: Some("https://www.themusicalhop.com".to_string()),
            genres: vec![
                "Jazz".to_string(),
                "Reggae".to_string(),
                "Swing".to_string(),
                "Classical".to_string(),
                "Folk".to_string(),
            ],
            seeking_talent: true,
            seeking_description: Some(
                "We are on the lookout for a local artist to play every two weeks. Please call us."
                    .to_string(),
            ),
        },
    )
    .await?;

    let pianos = showbill_storage::venues::create(
        pool,
        &CreateVenue {
            name: "The Dueling Pianos Bar".to_string(),
            city: Some("New York".to_string()),
            state: Some("NY".to_string()),
            address: Some("335 Delancey Street".to_string()),
            phone: Some("914-003-1132".to_string()),
            website: Some("https://www.theduelingpianos.com".to_string()),
            genres: vec![
                "Classical".to_string(),
                "R&B".to_string(),
                "Hip-Hop".to_string(),
            ],
            ..CreateVenue::default()
        },
    )
    .await?;

    let park_square = showbill_storage::venues::create(
        pool,
        &CreateVenue {
            name: "Park Square Live Music & Coffee".to_string(),
            city: Some("San Francisco".to_string()),
            state: Some("CA".to_string()),
            address: Some("34 Whiskey Moore Ave".to_string()),
            phone: Some("415-000-1234".to_string()),
            website: Some("https://www.parksquarelivemusicandcoffee.com".to_string()),
            genres: vec![
                "Rock n Roll".to_string(),
                "Jazz".to_string(),
                "Classical".to_string(),
                "Folk".to_string(),
            ],
            ..CreateVenue::default()
        },
    )
    .await?;

    let petals = showbill_storage::artists::create(
        pool,
        &CreateArtist {
            name: "Guns N Petals".to_string(),
            city: Some("San Francisco".to_string()),
            state: Some("CA".to_string()),
            phone: Some("326-123-5000".to_string()),
            facebook_link: Some("https://www.facebook.com/GunsNPetals".to_string()),
            website: Some("https://www.gunsnpetalsband.com".to_string()),
            genres: vec!["Rock n Roll".to_string()],
            seeking_venue: true,
            seeking_description: Some(
                "Looking for shows to perform at in the San Francisco Bay Area!".to_string(),
            ),
            ..CreateArtist::default()
        },
    )
    .await?;

    let quevado = showbill_storage::artists::create(
        pool,
        &CreateArtist {
            name: "Matt Quevado".to_string(),
            city: Some("New York".to_string()),
            state: Some("NY".to_string()),
            phone: Some("300-400-5000".to_string()),
            facebook_link: Some("https://www.facebook.com/mattquevado".to_string()),
            genres: vec!["Jazz".to_string()],
            ..CreateArtist::default()
        },
    )
    .await?;

    let sax_band = showbill_storage::artists::create(
        pool,
        &CreateArtist {
            name: "The Wild Sax Band".to_string(),
            city: Some("San Francisco".to_string()),
            state: Some("CA".to_string()),
            phone: Some("432-325-5432".to_string()),
            genres: vec!["Jazz".to_string(), "Classical".to_string()],
            ..CreateArtist::default()
        },
    )
    .await?;

    let shows = [
        (petals.id, hop.id, at(2019, 5, 21, 21)),
        (quevado.id, park_square.id, at(2019, 6, 15, 23)),
        (sax_band.id, park_square.id, at(2035, 4, 1, 20)),
        (sax_band.id, park_square.id, at(2035, 4, 8, 20)),
        (sax_band.id, pianos.id, at(2035, 4, 15, 20)),
    ];

    for (artist_id, venue_id, start_time) in shows {
        showbill_storage::shows::create(
            pool,
            CreateShow {
                artist_id,
                venue_id,
                start_time,
            },
        )
        .await?;
    }

    tracing::info!("seeded 3 venues, 3 artists, 5 shows");

    Ok(())
}
