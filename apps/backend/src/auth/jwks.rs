//! Identity provider key set: wire format and sources.

use std::fmt::Debug;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use jsonwebtoken::DecodingKey;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::error::{AuthError, Malformed};

/// One published signing key (RSA JWK).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonWebKey {
    pub kid: String,
    pub kty: String,
    #[serde(rename = "use", default, skip_serializing_if = "Option::is_none")]
    pub key_use: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alg: Option<String>,
    /// Modulus, base64url without padding
    #[serde(default)]
    pub n: String,
    /// Exponent, base64url without padding
    #[serde(default)]
    pub e: String,
}

/// The `/.well-known/jwks.json` document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JsonWebKeySet {
    pub keys: Vec<JsonWebKey>,
}

impl JsonWebKeySet {
    pub fn find(&self, kid: &str) -> Option<&JsonWebKey> {
        self.keys.iter().find(|key| key.kid == kid)
    }
}

impl JsonWebKey {
    pub fn decoding_key(&self) -> Result<DecodingKey, AuthError> {
        if self.kty != "RSA" {
            return Err(AuthError::malformed(Malformed::Unparsable));
        }
        DecodingKey::from_rsa_components(&self.n, &self.e)
            .map_err(|_| AuthError::malformed(Malformed::Unparsable))
    }
}

#[derive(Debug, Error)]
pub enum KeySetError {
    #[error("key set request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("key set endpoint answered with status {0}")]
    Status(u16),
}

/// Where the guard gets the current key set from.
///
/// Implementations are asked once per verification; nothing is cached
/// between calls.
#[async_trait]
pub trait KeySetSource: Send + Sync + Debug {
    async fn fetch(&self) -> Result<JsonWebKeySet, KeySetError>;
}

/// Fetches the key set over HTTP(S) from the identity provider.
#[derive(Debug, Clone)]
pub struct HttpKeySet {
    client: reqwest::Client,
    url: String,
}

impl HttpKeySet {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, KeySetError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl KeySetSource for HttpKeySet {
    async fn fetch(&self) -> Result<JsonWebKeySet, KeySetError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(KeySetError::Status(status.as_u16()));
        }
        Ok(response.json::<JsonWebKeySet>().await?)
    }
}

/// In-process key set, for tests and offline runs.
#[derive(Debug, Default)]
pub struct StaticKeySet {
    keys: JsonWebKeySet,
    fetches: AtomicUsize,
}

impl StaticKeySet {
    pub fn new(keys: JsonWebKeySet) -> Self {
        Self {
            keys,
            fetches: AtomicUsize::new(0),
        }
    }

    /// Number of times the set has been fetched.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl KeySetSource for StaticKeySet {
    async fn fetch(&self) -> Result<JsonWebKeySet, KeySetError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.keys.clone())
    }
}
