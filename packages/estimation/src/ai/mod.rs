//! Agents - action providers that drive the environment.
//!
//! This module provides:
//! - The [`Agent`] trait, one method per decision kind
//! - [`RandomAgent`]: random legal moves (seedable for tests)
//! - [`ScriptedAgent`]: replays fixed decisions for deterministic scenarios
//! - [`create_agent`]: construction by name

mod config;
mod random;
mod scripted;
mod trait_def;

pub use config::AgentConfig;
pub use random::RandomAgent;
pub use scripted::ScriptedAgent;
pub use trait_def::{Agent, AgentError};

/// Create an agent from its registered name.
///
/// Currently supports:
/// - "random": [`RandomAgent`] seeded from `config.seed`
///
/// Returns None if `kind` is unrecognized.
pub fn create_agent(kind: &str, config: &AgentConfig) -> Option<Box<dyn Agent>> {
    match kind {
        RandomAgent::NAME => Some(Box::new(RandomAgent::new(config.seed))),
        _ => None,
    }
}
