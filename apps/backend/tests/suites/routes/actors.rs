use actix_web::http::StatusCode;
use actix_web::test;
use backend::adapters::actors_sea;

use super::{auth, build_app};
use crate::common::{assert_error, assert_success};
use crate::support::factory::create_actor;

#[actix_web::test]
async fn get_actors_needs_actor_permission() {
    let (app, db) = build_app().await;
    create_actor(&db, "Humphrey", "Bogart").await;

    let req = test::TestRequest::get()
        .uri("/actors")
        .insert_header(auth(&["get:movies"]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error(resp, StatusCode::UNAUTHORIZED, "forbidden", None).await;

    let req = test::TestRequest::get()
        .uri("/actors")
        .insert_header(auth(&["get:actors"]))
        .to_request();
    let body = assert_success(test::call_service(&app, req).await).await;
    let actors = body["actor"].as_array().unwrap();
    assert_eq!(actors.len(), 1);
    assert_eq!(actors[0]["name"], "Humphrey");
    assert_eq!(actors[0]["surname"], "Bogart");
    assert_eq!(actors[0]["dob"], "1899-12-25");
    assert_eq!(actors[0]["gender"], "male");
}

#[actix_web::test]
async fn get_actor_by_id() {
    let (app, db) = build_app().await;
    let actor = create_actor(&db, "Lauren", "Bacall").await;

    let req = test::TestRequest::get()
        .uri(&format!("/actors/{}", actor.id))
        .insert_header(auth(&["get:actors"]))
        .to_request();
    let body = assert_success(test::call_service(&app, req).await).await;
    assert_eq!(body["actor"]["surname"], "Bacall");

    let req = test::TestRequest::get()
        .uri("/actors/31337")
        .insert_header(auth(&["get:actors"]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error(resp, StatusCode::NOT_FOUND, "actor_not_found", None).await;
}

#[actix_web::test]
async fn post_actor_normalizes_input() {
    let (app, db) = build_app().await;

    let req = test::TestRequest::post()
        .uri("/actors/add?name=ingrid&surname=BERGMAN&dob=1915-08-29&gender=female")
        .insert_header(auth(&["post:actors"]))
        .to_request();
    let body = assert_success(test::call_service(&app, req).await).await;

    let id = body["added"].as_i64().unwrap() as i32;
    let stored = actors_sea::find_actor_by_id(&db, id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Ingrid");
    assert_eq!(stored.surname, "Bergman");
    assert_eq!(stored.dob.to_string(), "1915-08-29");
    assert_eq!(stored.gender.as_deref(), Some("female"));
}

#[actix_web::test]
async fn post_actor_requires_name_and_surname() {
    let (app, _db) = build_app().await;

    for (uri, field) in [
        ("/actors/add?surname=Grant", "name"),
        ("/actors/add?name=Cary", "surname"),
        ("/actors/add?name=Cary&surname=", "surname"),
    ] {
        let req = test::TestRequest::post()
            .uri(uri)
            .insert_header(auth(&["post:actors"]))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_error(resp, StatusCode::BAD_REQUEST, "missing_field", Some(field)).await;
    }
}

#[actix_web::test]
async fn post_actor_rejects_bad_dob_and_long_gender() {
    let (app, db) = build_app().await;

    let req = test::TestRequest::post()
        .uri("/actors/add?name=cary&surname=grant&dob=January")
        .insert_header(auth(&["post:actors"]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error(resp, StatusCode::UNPROCESSABLE_ENTITY, "invalid_date", None).await;

    let req = test::TestRequest::post()
        .uri("/actors/add?name=cary&surname=grant&gender=unspecified-value")
        .insert_header(auth(&["post:actors"]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error(resp, StatusCode::UNPROCESSABLE_ENTITY, "unprocessable_entity", None).await;

    assert!(actors_sea::list_actors(&db).await.unwrap().is_empty());
}

#[actix_web::test]
async fn patch_actor_updates_only_given_fields() {
    let (app, db) = build_app().await;
    let actor = create_actor(&db, "Claude", "Rains").await;

    let req = test::TestRequest::patch()
        .uri(&format!("/actors/update/{}?surname=rains%20jr", actor.id))
        .insert_header(auth(&["patch:actors"]))
        .to_request();
    let body = assert_success(test::call_service(&app, req).await).await;
    assert_eq!(body["updated"], actor.id);

    let stored = actors_sea::find_actor_by_id(&db, actor.id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Claude");
    assert_eq!(stored.surname, "Rains Jr");
    assert_eq!(stored.dob, actor.dob);

    let req = test::TestRequest::patch()
        .uri("/actors/update/777?name=x")
        .insert_header(auth(&["patch:actors"]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error(resp, StatusCode::NOT_FOUND, "actor_not_found", None).await;
}

#[actix_web::test]
async fn delete_actor() {
    let (app, db) = build_app().await;
    let actor = create_actor(&db, "Peter", "Lorre").await;

    let req = test::TestRequest::delete()
        .uri(&format!("/actors/delete/{}", actor.id))
        .insert_header(auth(&["delete:movies"]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error(resp, StatusCode::UNAUTHORIZED, "forbidden", None).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/actors/delete/{}", actor.id))
        .insert_header(auth(&["delete:actors"]))
        .to_request();
    let body = assert_success(test::call_service(&app, req).await).await;
    assert_eq!(body["deleted"], actor.id);
    assert!(actors_sea::find_actor_by_id(&db, actor.id).await.unwrap().is_none());
}
