use super::error::{AuthError, Malformed};

/// Extract the raw token from an `Authorization` header value.
///
/// The scheme is matched case-insensitively and exactly one token must
/// follow it.
pub fn extract_bearer(header: Option<&str>) -> Result<&str, AuthError> {
    let value = header
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(AuthError::MissingCredential)?;

    let mut parts = value.split_whitespace();
    let scheme = parts.next().ok_or(AuthError::MissingCredential)?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::malformed(Malformed::WrongScheme));
    }

    let token = parts
        .next()
        .ok_or(AuthError::malformed(Malformed::MissingToken))?;
    if parts.next().is_some() {
        return Err(AuthError::malformed(Malformed::ExtraParts));
    }

    Ok(token)
}
