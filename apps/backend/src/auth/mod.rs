//! Token authorization guard.
//!
//! A protected request passes three checks in order: the bearer credential
//! is extracted from the `Authorization` header, the token is verified
//! against the identity provider's published key set, and the decoded
//! claims are checked for the permission the route requires.

pub mod bearer;
pub mod claims;
pub mod error;
pub mod guard;
pub mod jwks;
pub mod permissions;
pub mod verify;

pub use bearer::extract_bearer;
pub use claims::{Audience, Claims};
pub use error::{AuthError, Malformed};
pub use guard::AuthGuard;
pub use jwks::{HttpKeySet, JsonWebKey, JsonWebKeySet, KeySetError, KeySetSource, StaticKeySet};
pub use permissions::check_permission;
pub use verify::verify_and_decode;
