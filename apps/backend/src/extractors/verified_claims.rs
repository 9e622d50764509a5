use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};

use crate::auth::{AuthError, Claims};
use crate::error::AppError;

/// Claims of the token that passed `RequirePermission` for this request.
///
/// Only meaningful on resources wrapped by that middleware; elsewhere the
/// extractor fails with a missing-credential error.
#[derive(Debug, Clone)]
pub struct VerifiedClaims(pub Claims);

impl FromRequest for VerifiedClaims {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let claims = req
            .extensions()
            .get::<Claims>()
            .cloned()
            .map(VerifiedClaims)
            .ok_or(AppError::Auth(AuthError::MissingCredential));
        ready(claims)
    }
}
