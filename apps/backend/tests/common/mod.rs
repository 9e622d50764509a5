#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::error_body::{assert_error_body_from_service_response, ErrorBodyLike};
use serde_json::Value;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Assert the JSON error contract and return the parsed body.
pub async fn assert_error(
    resp: ServiceResponse,
    expected_status: StatusCode,
    expected_code: &str,
    expected_message_contains: Option<&str>,
) -> ErrorBodyLike {
    let is_unauthorized = resp.status() == StatusCode::UNAUTHORIZED;
    let www_auth = resp.headers().get("WWW-Authenticate").cloned();
    if is_unauthorized {
        // RFC 7235: 401 must have WWW-Authenticate
        assert_eq!(
            www_auth.as_ref().and_then(|v| v.to_str().ok()),
            Some("Bearer"),
            "401 responses must carry WWW-Authenticate: Bearer"
        );
    } else {
        assert!(www_auth.is_none(), "only 401 carries WWW-Authenticate");
    }

    assert_error_body_from_service_response(
        resp,
        expected_status,
        expected_code,
        expected_message_contains,
    )
    .await
}

/// Assert a 200 with `"success": true` and return the JSON body.
pub async fn assert_success(resp: ServiceResponse) -> Value {
    let status = resp.status();
    let body = test::read_body(resp).await;
    assert_eq!(
        status,
        StatusCode::OK,
        "unexpected status, body: {}",
        String::from_utf8_lossy(&body)
    );
    let json: Value = serde_json::from_slice(&body).expect("success body should be JSON");
    assert_eq!(json["success"], Value::Bool(true), "body: {json}");
    json
}
