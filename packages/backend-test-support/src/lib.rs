//! Backend test support utilities
//!
//! Unified logging initialization and helpers for asserting the error body
//! contract, shared by unit and integration tests.

pub mod error_body;
pub mod logging;
