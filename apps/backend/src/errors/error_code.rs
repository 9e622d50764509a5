//! Error codes for the casting agency API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are lower snake_case and map 1:1 to the `code` field of
//! error responses. The authentication codes are shared with existing
//! clients of the API and must not be renamed.

use core::fmt;

/// Centralized error codes for the casting agency API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication & Authorization
    /// No Authorization header on the request
    MissingAuthHeader,
    /// Authorization header is not `Bearer <token>` or the token lacks a kid
    InvalidAuthHeader,
    /// Token could not be parsed or verified, or no signing key matched
    InvalidHeader,
    /// Token `exp` is in the past
    TokenExpired,
    /// Audience or issuer mismatch
    InvalidClaims,
    /// Token carries no permissions claim
    InvalidToken,
    /// Permission required by the route is not granted
    Forbidden,

    // Request Validation
    /// General bad request error
    BadRequest,
    /// A required query parameter is missing or blank
    MissingField,
    /// Date parameter is not `YYYY-MM-DD`
    InvalidDate,

    // Resource Not Found
    MovieNotFound,
    ActorNotFound,
    GenreNotFound,
    InterpretationNotFound,
    /// General not found error
    NotFound,

    // System Errors
    /// Request could not be processed by the persistence layer
    Unprocessable,
    /// Database not configured or unreachable
    DbUnavailable,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            // Authentication & Authorization
            Self::MissingAuthHeader => "missing_auth_header",
            Self::InvalidAuthHeader => "invalid_auth_header",
            Self::InvalidHeader => "invalid_header",
            Self::TokenExpired => "token_expired",
            Self::InvalidClaims => "invalid_claims",
            Self::InvalidToken => "invalid_token",
            Self::Forbidden => "forbidden",

            // Request Validation
            Self::BadRequest => "bad_request",
            Self::MissingField => "missing_field",
            Self::InvalidDate => "invalid_date",

            // Resource Not Found
            Self::MovieNotFound => "movie_not_found",
            Self::ActorNotFound => "actor_not_found",
            Self::GenreNotFound => "genre_not_found",
            Self::InterpretationNotFound => "interpretation_not_found",
            Self::NotFound => "not_found",

            // System Errors
            Self::Unprocessable => "unprocessable_entity",
            Self::DbUnavailable => "db_unavailable",
            Self::Internal => "internal_error",
            Self::ConfigError => "config_error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
