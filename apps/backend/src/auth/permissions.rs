use super::claims::Claims;
use super::error::AuthError;

/// Require `permission` to be granted by `claims`.
///
/// A claim set without a `permissions` collection is a different failure
/// from one whose collection lacks the permission.
pub fn check_permission(claims: &Claims, permission: &str) -> Result<(), AuthError> {
    let granted = claims
        .permissions
        .as_ref()
        .ok_or(AuthError::NoCapabilitiesClaim)?;

    if granted.iter().any(|p| p == permission) {
        Ok(())
    } else {
        Err(AuthError::Forbidden)
    }
}
