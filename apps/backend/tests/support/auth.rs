//! Signing fixtures and token minting for tests.
//!
//! `fixtures/signing_key.pem` is the private half of the only key in
//! `fixtures/jwks.json` (kid `casting-test-key`). `fixtures/rogue_key.pem`
//! is an unrelated key for forged-signature cases.

use std::sync::Arc;

use backend::auth::{AuthGuard, JsonWebKeySet, KeySetSource, StaticKeySet};
use backend::config::auth::AuthConfig;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::{json, Map, Value};
use time::OffsetDateTime;

pub const TEST_DOMAIN: &str = "casting-test.eu.auth0.com";
pub const TEST_AUDIENCE: &str = "casting";
pub const TEST_KID: &str = "casting-test-key";
pub const TEST_SUB: &str = "auth0|casting-director";

const SIGNING_KEY: &[u8] = include_bytes!("../fixtures/signing_key.pem");
const ROGUE_KEY: &[u8] = include_bytes!("../fixtures/rogue_key.pem");
const JWKS: &str = include_str!("../fixtures/jwks.json");

pub fn test_config() -> AuthConfig {
    AuthConfig::new(TEST_DOMAIN, vec![Algorithm::RS256], TEST_AUDIENCE)
        .expect("test auth config should be valid")
}

pub fn test_key_set() -> JsonWebKeySet {
    serde_json::from_str(JWKS).expect("fixtures/jwks.json should parse")
}

pub fn static_keys() -> Arc<StaticKeySet> {
    Arc::new(StaticKeySet::new(test_key_set()))
}

/// Guard that resolves keys from the fixture key set.
pub fn test_guard() -> AuthGuard {
    AuthGuard::new(test_config(), static_keys())
}

pub fn test_guard_with_keys(keys: Arc<dyn KeySetSource>) -> AuthGuard {
    AuthGuard::new(test_config(), keys)
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

enum SigningKey {
    Fixture,
    Rogue,
    Hmac(&'static [u8]),
}

/// Mints tokens the way the identity provider would, with knobs to break
/// one property at a time.
pub struct TokenBuilder {
    claims: Map<String, Value>,
    kid: Option<String>,
    key: SigningKey,
}

impl TokenBuilder {
    /// Valid for an hour, issued for the test tenant and audience.
    pub fn new(permissions: &[&str]) -> Self {
        let now = OffsetDateTime::now_utc().unix_timestamp();
        let claims = json!({
            "sub": TEST_SUB,
            "iss": format!("https://{TEST_DOMAIN}/"),
            "aud": [TEST_AUDIENCE, format!("https://{TEST_DOMAIN}/userinfo")],
            "iat": now,
            "exp": now + 3600,
            "azp": "casting-frontend",
            "scope": "openid profile email",
            "permissions": permissions,
        });
        let Value::Object(claims) = claims else {
            unreachable!("json! object literal");
        };
        Self {
            claims,
            kid: Some(TEST_KID.to_string()),
            key: SigningKey::Fixture,
        }
    }

    pub fn claim(mut self, name: &str, value: Value) -> Self {
        self.claims.insert(name.to_string(), value);
        self
    }

    pub fn without_claim(mut self, name: &str) -> Self {
        self.claims.remove(name);
        self
    }

    pub fn expired(self) -> Self {
        let now = OffsetDateTime::now_utc().unix_timestamp();
        self.claim("iat", json!(now - 7200))
            .claim("exp", json!(now - 3600))
    }

    pub fn audience(self, aud: &str) -> Self {
        self.claim("aud", json!(aud))
    }

    pub fn issuer(self, iss: &str) -> Self {
        self.claim("iss", json!(iss))
    }

    pub fn without_permissions(self) -> Self {
        self.without_claim("permissions")
    }

    pub fn kid(mut self, kid: &str) -> Self {
        self.kid = Some(kid.to_string());
        self
    }

    pub fn without_kid(mut self) -> Self {
        self.kid = None;
        self
    }

    pub fn signed_with_rogue_key(mut self) -> Self {
        self.key = SigningKey::Rogue;
        self
    }

    pub fn signed_with_hmac(mut self, secret: &'static [u8]) -> Self {
        self.key = SigningKey::Hmac(secret);
        self
    }

    pub fn mint(self) -> String {
        let (alg, key) = match self.key {
            SigningKey::Fixture => (
                Algorithm::RS256,
                EncodingKey::from_rsa_pem(SIGNING_KEY).expect("signing key should load"),
            ),
            SigningKey::Rogue => (
                Algorithm::RS256,
                EncodingKey::from_rsa_pem(ROGUE_KEY).expect("rogue key should load"),
            ),
            SigningKey::Hmac(secret) => (Algorithm::HS256, EncodingKey::from_secret(secret)),
        };
        let mut header = Header::new(alg);
        header.kid = self.kid;
        encode(&header, &Value::Object(self.claims), &key).expect("token should encode")
    }
}
