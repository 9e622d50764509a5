use actix_web::http::StatusCode;
use actix_web::test;
use backend::adapters::movies_sea;
use serde_json::json;

use super::{auth, build_app};
use crate::common::{assert_error, assert_success};
use crate::support::factory::{create_movie, tag_movie};

#[actix_web::test]
async fn get_movies_with_read_permission() {
    let (app, db) = build_app().await;
    let sleep = create_movie(&db, "The Big Sleep").await;
    create_movie(&db, "Casablanca").await;
    tag_movie(&db, sleep.id, "Noir").await;
    tag_movie(&db, sleep.id, "Crime").await;

    let req = test::TestRequest::get()
        .uri("/movies")
        .insert_header(auth(&["get:movies"]))
        .to_request();
    let body = assert_success(test::call_service(&app, req).await).await;

    let movies = body["movie"].as_array().unwrap();
    assert_eq!(movies.len(), 2);
    assert_eq!(movies[0]["title"], "The Big Sleep");
    assert_eq!(movies[0]["release_date"], "1946-08-23");
    assert_eq!(movies[0]["genres"], json!(["Noir", "Crime"]));
    assert_eq!(movies[1]["title"], "Casablanca");
    assert_eq!(movies[1]["genres"], json!([]));
}

#[actix_web::test]
async fn get_movie_by_id() {
    let (app, db) = build_app().await;
    let movie = create_movie(&db, "Notorious").await;

    let req = test::TestRequest::get()
        .uri(&format!("/movies/{}", movie.id))
        .insert_header(auth(&["get:movies"]))
        .to_request();
    let body = assert_success(test::call_service(&app, req).await).await;
    assert_eq!(body["movie"]["id"], movie.id);
    assert_eq!(body["movie"]["title"], "Notorious");

    let req = test::TestRequest::get()
        .uri("/movies/9999")
        .insert_header(auth(&["get:movies"]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error(resp, StatusCode::NOT_FOUND, "movie_not_found", None).await;
}

#[actix_web::test]
async fn post_movie_needs_post_permission() {
    let (app, db) = build_app().await;

    let req = test::TestRequest::post()
        .uri("/movies/add?title=vertigo")
        .insert_header(auth(&["get:movies"]))
        .to_request();
    let resp = test::call_service(&app, req).await;

    let body = assert_error(resp, StatusCode::UNAUTHORIZED, "forbidden", None).await;
    assert!(!body.success);
    assert!(movies_sea::list_movies(&db).await.unwrap().is_empty());
}

#[actix_web::test]
async fn post_movie_capitalizes_and_persists() {
    let (app, db) = build_app().await;

    let req = test::TestRequest::post()
        .uri("/movies/add?title=the%20maltese%20FALCON&release_date=1941-10-03")
        .insert_header(auth(&["post:movies"]))
        .to_request();
    let body = assert_success(test::call_service(&app, req).await).await;

    let id = body["added"].as_i64().unwrap() as i32;
    let stored = movies_sea::find_movie_by_id(&db, id).await.unwrap().unwrap();
    assert_eq!(stored.title, "The Maltese Falcon");
    assert_eq!(stored.release_date.to_string(), "1941-10-03");
}

#[actix_web::test]
async fn post_movie_defaults_release_date_to_today() {
    let (app, db) = build_app().await;

    let req = test::TestRequest::post()
        .uri("/movies/add?title=rope")
        .insert_header(auth(&["post:movies"]))
        .to_request();
    let body = assert_success(test::call_service(&app, req).await).await;

    let id = body["added"].as_i64().unwrap() as i32;
    let stored = movies_sea::find_movie_by_id(&db, id).await.unwrap().unwrap();
    assert_eq!(stored.release_date, time::OffsetDateTime::now_utc().date());
}

#[actix_web::test]
async fn post_movie_validation() {
    let (app, _db) = build_app().await;

    let req = test::TestRequest::post()
        .uri("/movies/add?release_date=1941-10-03")
        .insert_header(auth(&["post:movies"]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error(resp, StatusCode::BAD_REQUEST, "missing_field", Some("title")).await;

    let req = test::TestRequest::post()
        .uri("/movies/add?title=%20%20")
        .insert_header(auth(&["post:movies"]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error(resp, StatusCode::BAD_REQUEST, "missing_field", Some("title")).await;

    let req = test::TestRequest::post()
        .uri("/movies/add?title=rope&release_date=03/10/1941")
        .insert_header(auth(&["post:movies"]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error(
        resp,
        StatusCode::UNPROCESSABLE_ENTITY,
        "invalid_date",
        Some("YYYY-MM-DD"),
    )
    .await;
}

#[actix_web::test]
async fn patch_movie_updates_only_given_fields() {
    let (app, db) = build_app().await;
    let movie = create_movie(&db, "Spellbound").await;

    let req = test::TestRequest::patch()
        .uri(&format!("/movies/update/{}?release_date=1945-10-31", movie.id))
        .insert_header(auth(&["patch:movies"]))
        .to_request();
    let body = assert_success(test::call_service(&app, req).await).await;
    assert_eq!(body["updated"], movie.id);

    let stored = movies_sea::find_movie_by_id(&db, movie.id).await.unwrap().unwrap();
    assert_eq!(stored.title, "Spellbound");
    assert_eq!(stored.release_date.to_string(), "1945-10-31");

    let req = test::TestRequest::patch()
        .uri(&format!("/movies/update/{}?title=spellbound%20again", movie.id))
        .insert_header(auth(&["patch:movies"]))
        .to_request();
    assert_success(test::call_service(&app, req).await).await;
    let stored = movies_sea::find_movie_by_id(&db, movie.id).await.unwrap().unwrap();
    assert_eq!(stored.title, "Spellbound Again");
    assert_eq!(stored.release_date.to_string(), "1945-10-31");
}

#[actix_web::test]
async fn patch_unknown_movie_is_not_found() {
    let (app, _db) = build_app().await;

    let req = test::TestRequest::patch()
        .uri("/movies/update/404?title=x")
        .insert_header(auth(&["patch:movies"]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error(resp, StatusCode::NOT_FOUND, "movie_not_found", None).await;

    let req = test::TestRequest::patch()
        .uri("/movies/update/not-a-number?title=x")
        .insert_header(auth(&["patch:movies"]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error(resp, StatusCode::NOT_FOUND, "not_found", None).await;
}

#[actix_web::test]
async fn delete_movie_needs_delete_permission() {
    let (app, db) = build_app().await;
    let movie = create_movie(&db, "Rebecca").await;

    let req = test::TestRequest::delete()
        .uri(&format!("/movies/delete/{}", movie.id))
        .insert_header(auth(&["get:movies", "post:movies", "patch:movies"]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error(resp, StatusCode::UNAUTHORIZED, "forbidden", None).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/movies/delete/{}", movie.id))
        .insert_header(auth(&["delete:movies"]))
        .to_request();
    let body = assert_success(test::call_service(&app, req).await).await;
    assert_eq!(body["deleted"], movie.id);
    assert!(movies_sea::find_movie_by_id(&db, movie.id).await.unwrap().is_none());

    // second delete of the same id
    let req = test::TestRequest::delete()
        .uri(&format!("/movies/delete/{}", movie.id))
        .insert_header(auth(&["delete:movies"]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error(resp, StatusCode::NOT_FOUND, "movie_not_found", None).await;
}

#[actix_web::test]
async fn guard_runs_before_routing_on_protected_paths() {
    let (app, _db) = build_app().await;

    let req = test::TestRequest::get().uri("/movies").to_request();
    let resp = test::call_service(&app, req).await;
    assert_error(resp, StatusCode::UNAUTHORIZED, "missing_auth_header", None).await;

    let req = test::TestRequest::get()
        .uri("/movies")
        .insert_header(("Authorization", "Bearer"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error(resp, StatusCode::UNAUTHORIZED, "invalid_auth_header", None).await;

    let req = test::TestRequest::get()
        .uri("/movies")
        .insert_header(("Authorization", "Basic abc123"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error(resp, StatusCode::UNAUTHORIZED, "invalid_auth_header", None).await;
}
