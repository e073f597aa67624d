//! Estimation test support utilities
//!
//! Shared helpers for unit and integration tests of the engine crate,
//! currently the unified logging initialization.

pub mod logging;
