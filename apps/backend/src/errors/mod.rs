//! Error codes for the casting agency backend.

pub mod error_code;

pub use error_code::ErrorCode;
