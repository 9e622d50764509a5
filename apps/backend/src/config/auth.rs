use std::env;
use std::str::FromStr;
use std::time::Duration;

use jsonwebtoken::{Algorithm, Validation};

use super::must_var;
use crate::error::AppError;

const DEFAULT_JWKS_TIMEOUT: Duration = Duration::from_secs(10);

/// Identity provider settings for the authorization guard.
///
/// Construction validates every field, so a value of this type is always
/// usable by the guard.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthConfig {
    domain: String,
    algorithms: Vec<Algorithm>,
    audience: String,
    jwks_timeout: Duration,
}

impl AuthConfig {
    /// Build a config from explicit values.
    ///
    /// `domain` is a bare host such as `tenant.eu.auth0.com`; `algorithms`
    /// must be non-empty and RSA family only since published keys are RSA.
    pub fn new(
        domain: impl Into<String>,
        algorithms: Vec<Algorithm>,
        audience: impl Into<String>,
    ) -> Result<Self, AppError> {
        let domain = domain.into().trim().to_string();
        let audience = audience.into().trim().to_string();

        if domain.is_empty() {
            return Err(AppError::config("Identity provider domain is empty".to_string()));
        }
        if domain.contains("://") || domain.contains('/') || domain.contains(char::is_whitespace)
        {
            return Err(AppError::config(format!(
                "Identity provider domain must be a bare host, got: '{domain}'"
            )));
        }
        if audience.is_empty() {
            return Err(AppError::config("API audience is empty".to_string()));
        }
        if algorithms.is_empty() {
            return Err(AppError::config(
                "At least one signing algorithm is required".to_string(),
            ));
        }
        if let Some(alg) = algorithms.iter().find(|alg| !is_rsa_family(**alg)) {
            return Err(AppError::config(format!(
                "Signing algorithm {alg:?} is not supported; use RS256/RS384/RS512/PS256/PS384/PS512"
            )));
        }

        Ok(Self {
            domain,
            algorithms,
            audience,
            jwks_timeout: DEFAULT_JWKS_TIMEOUT,
        })
    }

    /// Bound the key-set fetch. Zero is rejected.
    pub fn with_jwks_timeout(mut self, timeout: Duration) -> Result<Self, AppError> {
        if timeout.is_zero() {
            return Err(AppError::config("JWKS timeout must be positive".to_string()));
        }
        self.jwks_timeout = timeout;
        Ok(self)
    }

    /// Read `AUTH0_DOMAIN`, `AUTH0_ALGORITHMS`, `AUTH0_API_AUDIENCE` and the
    /// optional `AUTH0_JWKS_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, AppError> {
        let domain = must_var("AUTH0_DOMAIN")?;
        let algorithms = parse_algorithms(&must_var("AUTH0_ALGORITHMS")?)?;
        let audience = must_var("AUTH0_API_AUDIENCE")?;
        let config = Self::new(domain, algorithms, audience)?;

        match env::var("AUTH0_JWKS_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs = raw.trim().parse::<u64>().map_err(|_| {
                    AppError::config(format!(
                        "AUTH0_JWKS_TIMEOUT_SECS must be a whole number of seconds, got: '{raw}'"
                    ))
                })?;
                config.with_jwks_timeout(Duration::from_secs(secs))
            }
            Err(_) => Ok(config),
        }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    pub fn algorithms(&self) -> &[Algorithm] {
        &self.algorithms
    }

    pub fn jwks_timeout(&self) -> Duration {
        self.jwks_timeout
    }

    /// Expected `iss` claim.
    pub fn issuer(&self) -> String {
        format!("https://{}/", self.domain)
    }

    pub fn jwks_url(&self) -> String {
        format!("https://{}/.well-known/jwks.json", self.domain)
    }

    /// Token validation rules: signature algorithm, `exp`, `aud` and `iss`.
    pub fn validation(&self) -> Validation {
        let mut validation = Validation::new(self.algorithms[0]);
        validation.algorithms = self.algorithms.clone();
        validation.validate_exp = true;
        validation.set_audience(&[&self.audience]);
        validation.set_issuer(&[self.issuer()]);
        validation.set_required_spec_claims(&["exp", "aud", "iss"]);
        validation
    }
}

/// Parse a comma-separated algorithm list such as `RS256` or `RS256, PS256`.
pub fn parse_algorithms(raw: &str) -> Result<Vec<Algorithm>, AppError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|name| {
            Algorithm::from_str(name)
                .map_err(|_| AppError::config(format!("Unknown signing algorithm '{name}'")))
        })
        .collect()
}

fn is_rsa_family(alg: Algorithm) -> bool {
    matches!(
        alg,
        Algorithm::RS256
            | Algorithm::RS384
            | Algorithm::RS512
            | Algorithm::PS256
            | Algorithm::PS384
            | Algorithm::PS512
    )
}
