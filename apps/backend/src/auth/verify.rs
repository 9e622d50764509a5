use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, decode_header};
use tracing::{debug, warn};

use super::claims::Claims;
use super::error::{AuthError, Malformed};
use super::jwks::KeySetSource;
use crate::config::auth::AuthConfig;

/// Verify `token` against the identity provider's key set and decode it.
///
/// The key set is fetched on every call. Failures short-circuit in order:
/// header/kid, key lookup, then signature and claim validation.
pub async fn verify_and_decode(
    token: &str,
    config: &AuthConfig,
    keys: &dyn KeySetSource,
) -> Result<Claims, AuthError> {
    let header = decode_header(token).map_err(|e| {
        debug!(error = %e, "token header could not be decoded");
        AuthError::malformed(Malformed::Unparsable)
    })?;
    let kid = header
        .kid
        .ok_or(AuthError::malformed(Malformed::MissingKeyId))?;

    let key_set = keys.fetch().await.map_err(|e| {
        warn!(error = %e, "key set fetch failed");
        AuthError::malformed(Malformed::KeySetUnavailable)
    })?;
    let jwk = key_set.find(&kid).ok_or_else(|| {
        debug!(kid = %kid, "no published key matches token kid");
        AuthError::KeyNotFound
    })?;
    let decoding_key = jwk.decoding_key()?;

    decode::<Claims>(token, &decoding_key, &config.validation())
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            ErrorKind::InvalidAudience | ErrorKind::InvalidIssuer => AuthError::InvalidClaims,
            ErrorKind::MissingRequiredClaim(claim) if claim == "aud" || claim == "iss" => {
                AuthError::InvalidClaims
            }
            _ => {
                debug!(error = %e, "token failed verification");
                AuthError::malformed(Malformed::Unparsable)
            }
        })
}
