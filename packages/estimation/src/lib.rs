//! Four-player Estimation: bidding, calling, and trick play with
//! multiplier-tag scoring, exposed as a step-driven environment.

pub mod ai;
pub mod config;
pub mod domain;
pub mod encoding;
pub mod env;
pub mod errors;
pub mod legality;
pub mod simulator;
pub mod telemetry;

pub use config::{ConfigError, EngineConfig};
pub use env::{Action, Estimation};
pub use errors::{DomainError, ValidationKind};

#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    estimation_test_support::logging::init();
}
