use std::sync::Arc;

use tracing::debug;

use super::bearer::extract_bearer;
use super::claims::Claims;
use super::error::AuthError;
use super::jwks::{HttpKeySet, KeySetSource};
use super::permissions::check_permission;
use super::verify::verify_and_decode;
use crate::config::auth::AuthConfig;
use crate::error::AppError;

/// Per-request authorization: extract, verify, check permission.
///
/// Cheap to clone; holds no per-request state.
#[derive(Debug, Clone)]
pub struct AuthGuard {
    config: Arc<AuthConfig>,
    keys: Arc<dyn KeySetSource>,
}

impl AuthGuard {
    pub fn new(config: AuthConfig, keys: Arc<dyn KeySetSource>) -> Self {
        Self {
            config: Arc::new(config),
            keys,
        }
    }

    /// Guard backed by the identity provider's HTTPS key set endpoint.
    pub fn from_config(config: AuthConfig) -> Result<Self, AppError> {
        let keys = HttpKeySet::new(config.jwks_url(), config.jwks_timeout())
            .map_err(|e| AppError::config(format!("failed to build JWKS client: {e}")))?;
        Ok(Self::new(config, Arc::new(keys)))
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Run the full guard sequence for one request.
    ///
    /// `authorization` is the raw `Authorization` header value, if any.
    pub async fn authorize(
        &self,
        authorization: Option<&str>,
        permission: &str,
    ) -> Result<Claims, AuthError> {
        let token = extract_bearer(authorization)?;
        let claims = verify_and_decode(token, &self.config, self.keys.as_ref()).await?;
        check_permission(&claims, permission)?;

        debug!(
            sub = claims.sub.as_deref().unwrap_or("-"),
            permission, "request authorized"
        );
        Ok(claims)
    }
}
