use actix_web::http::StatusCode;
use thiserror::Error;

use crate::errors::ErrorCode;

/// Why a credential was rejected as malformed.
///
/// `Unparsable` is the catch-all arm: any verification failure that has no
/// more specific kind lands here so internal detail never reaches the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformed {
    /// Scheme is not `Bearer`
    WrongScheme,
    /// `Bearer` with nothing after it
    MissingToken,
    /// More than one token after the scheme
    ExtraParts,
    /// Token header carries no `kid`
    MissingKeyId,
    /// Token could not be decoded or its signature did not verify
    Unparsable,
    /// Key set could not be fetched from the identity provider
    KeySetUnavailable,
}

/// Typed failure of the authorization guard.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Missing Authorization header.")]
    MissingCredential,
    #[error("{}", .0.description())]
    MalformedCredential(Malformed),
    #[error("Unable to find the appropriate key.")]
    KeyNotFound,
    #[error("Token expired.")]
    TokenExpired,
    #[error("Incorrect claims. Check audience and issuer.")]
    InvalidClaims,
    #[error("Unable to find permissions.")]
    NoCapabilitiesClaim,
    #[error("User does not have required permissions.")]
    Forbidden,
}

impl Malformed {
    pub fn description(&self) -> &'static str {
        match self {
            Malformed::WrongScheme => "Authorization header must start with \"Bearer\".",
            Malformed::MissingToken => "Invalid Authorization header. Must contain a token.",
            Malformed::ExtraParts => {
                "Invalid Authorization header. Must contain exactly one token."
            }
            Malformed::MissingKeyId => "Invalid Authorization header. Must contain a KID.",
            Malformed::Unparsable => "Unable to parse authentication token.",
            Malformed::KeySetUnavailable => "Unable to fetch signing keys.",
        }
    }
}

impl AuthError {
    pub fn malformed(reason: Malformed) -> Self {
        Self::MalformedCredential(reason)
    }

    /// Machine-readable code carried in the error body.
    pub fn code(&self) -> ErrorCode {
        match self {
            AuthError::MissingCredential => ErrorCode::MissingAuthHeader,
            AuthError::MalformedCredential(
                Malformed::WrongScheme
                | Malformed::MissingToken
                | Malformed::ExtraParts
                | Malformed::MissingKeyId,
            ) => ErrorCode::InvalidAuthHeader,
            AuthError::MalformedCredential(Malformed::Unparsable | Malformed::KeySetUnavailable) => {
                ErrorCode::InvalidHeader
            }
            AuthError::KeyNotFound => ErrorCode::InvalidHeader,
            AuthError::TokenExpired => ErrorCode::TokenExpired,
            AuthError::InvalidClaims => ErrorCode::InvalidClaims,
            AuthError::NoCapabilitiesClaim => ErrorCode::InvalidToken,
            AuthError::Forbidden => ErrorCode::Forbidden,
        }
    }

    /// Status the boundary layer should answer with.
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::MalformedCredential(Malformed::MissingKeyId)
            | AuthError::KeyNotFound
            | AuthError::NoCapabilitiesClaim => StatusCode::BAD_REQUEST,
            AuthError::MissingCredential
            | AuthError::MalformedCredential(_)
            | AuthError::TokenExpired
            | AuthError::InvalidClaims
            | AuthError::Forbidden => StatusCode::UNAUTHORIZED,
        }
    }
}
