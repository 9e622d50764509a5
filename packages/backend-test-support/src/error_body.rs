//! Error body test helpers
//!
//! Assertions for the `{"success": false, "error": <status>, ...}` error
//! contract without depending on backend types.

use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Local mirror of the backend's error body.
#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorBodyLike {
    pub success: bool,
    pub error: u16,
    pub code: String,
    pub message: String,
}

/// Assert that raw response parts conform to the error contract.
///
/// Validates:
/// - HTTP status matches expected
/// - body `success` is false and `error` mirrors the status
/// - `code` matches and `message` contains the expected fragment, if any
pub fn assert_error_body_from_parts(
    status: StatusCode,
    body_bytes: &[u8],
    expected_status: StatusCode,
    expected_code: &str,
    expected_message_contains: Option<&str>,
) -> ErrorBodyLike {
    assert_eq!(status, expected_status);

    let body: ErrorBodyLike = serde_json::from_slice(body_bytes)
        .unwrap_or_else(|e| {
            panic!(
                "Response body should be a valid error body ({e}): {}",
                String::from_utf8_lossy(body_bytes)
            )
        });

    assert!(!body.success, "error body must carry success=false");
    assert_eq!(body.error, expected_status.as_u16());
    assert_eq!(body.code, expected_code);

    if let Some(fragment) = expected_message_contains {
        assert!(
            body.message.contains(fragment),
            "Expected message to contain '{}', but got '{}'",
            fragment,
            body.message
        );
    }

    body
}

/// Assert that a `ServiceResponse` conforms to the error contract.
pub async fn assert_error_body_from_service_response(
    resp: actix_web::dev::ServiceResponse,
    expected_status: StatusCode,
    expected_code: &str,
    expected_message_contains: Option<&str>,
) -> ErrorBodyLike {
    let status = resp.status();
    let content_type = resp
        .headers()
        .get(actix_web::http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(
        content_type.starts_with("application/json"),
        "Content-Type must be application/json (got {content_type})"
    );

    let body = actix_web::test::read_body(resp).await;
    assert_error_body_from_parts(
        status,
        &body,
        expected_status,
        expected_code,
        expected_message_contains,
    )
}
