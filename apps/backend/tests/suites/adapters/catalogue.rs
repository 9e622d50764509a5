use backend::adapters::movies_sea::{self, MovieUpdate};
use backend::adapters::{genres_sea, interpretations_sea};
use time::macros::date;

use super::fresh_db;
use crate::support::factory::{cast, create_actor, create_movie, tag_movie};

#[tokio::test]
async fn empty_update_leaves_movie_untouched() {
    let db = fresh_db().await;
    let movie = create_movie(&db, "Laura").await;

    let unchanged = movies_sea::update_movie(&db, movie.id, MovieUpdate::default())
        .await
        .unwrap();
    assert_eq!(unchanged, Some(movie.clone()));

    let changed = movies_sea::update_movie(
        &db,
        movie.id,
        MovieUpdate {
            title: None,
            release_date: Some(date!(1944 - 10 - 11)),
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(changed.title, "Laura");
    assert_eq!(changed.release_date, date!(1944 - 10 - 11));
}

#[tokio::test]
async fn missing_rows_are_reported_not_raised() {
    let db = fresh_db().await;

    assert!(movies_sea::find_movie_with_genres(&db, 1).await.unwrap().is_none());
    assert!(movies_sea::update_movie(&db, 1, MovieUpdate::default())
        .await
        .unwrap()
        .is_none());
    assert!(!movies_sea::delete_movie(&db, 1).await.unwrap());
    assert!(!interpretations_sea::delete_interpretation(&db, 1).await.unwrap());
}

#[tokio::test]
async fn genres_are_deduplicated_by_name() {
    let db = fresh_db().await;
    let movie = create_movie(&db, "Out Of The Past").await;

    let first = tag_movie(&db, movie.id, "Noir").await;
    let again = tag_movie(&db, movie.id, "Noir").await;
    assert_eq!(first.id, again.id);

    assert_eq!(genres_sea::list_genres(&db).await.unwrap().len(), 1);
    let (_, genres) = movies_sea::find_movie_with_genres(&db, movie.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(genres, vec![first]);
}

#[tokio::test]
async fn cast_lists_only_that_movie_in_insertion_order() {
    let db = fresh_db().await;
    let casablanca = create_movie(&db, "Casablanca").await;
    let sleep = create_movie(&db, "The Big Sleep").await;
    let bogart = create_actor(&db, "Humphrey", "Bogart").await;
    let bacall = create_actor(&db, "Lauren", "Bacall").await;

    cast(&db, sleep.id, bogart.id, "Philip Marlowe").await;
    cast(&db, casablanca.id, bogart.id, "Rick Blaine").await;
    cast(&db, sleep.id, bacall.id, "Vivian Rutledge").await;

    let rows = interpretations_sea::list_cast(&db, sleep.id).await.unwrap();
    let characters: Vec<_> = rows.iter().map(|(i, _)| i.character.as_str()).collect();
    assert_eq!(characters, ["Philip Marlowe", "Vivian Rutledge"]);
    assert_eq!(rows[1].1.as_ref().map(|a| a.id), Some(bacall.id));
}
