//! Random agent - samples uniformly among legal actions.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{Agent, AgentError};
use crate::domain::player_view::StepInfo;
use crate::domain::rules::MAX_DASHES;
use crate::domain::state::Phase;
use crate::domain::{Card, Suit};

/// Agent that makes random legal moves.
///
/// Seeded agents are reproducible. A lone caller, left after two dashes, never
/// calls zero.
pub struct RandomAgent {
    /// `Agent` methods take `&self`, so the RNG sits behind a `Mutex`.
    rng: Mutex<StdRng>,
}

impl RandomAgent {
    pub const NAME: &'static str = "random";

    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    fn pick<T: Copy>(&self, options: &[T], what: &str) -> Result<T, AgentError> {
        if options.is_empty() {
            return Err(AgentError::InvalidMove(format!("no legal {what} available")));
        }
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AgentError::Internal(format!("RNG lock poisoned: {e}")))?;
        options
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| AgentError::Internal(format!("failed to choose random {what}")))
    }
}

impl Agent for RandomAgent {
    fn choose_bid(&self, info: &StepInfo) -> Result<u8, AgentError> {
        self.pick(&info.legal_bids(), "bids")
    }

    fn choose_trump(&self, _info: &StepInfo) -> Result<Suit, AgentError> {
        self.pick(&Suit::ALL, "trumps")
    }

    fn choose_call(&self, info: &StepInfo) -> Result<u8, AgentError> {
        let mut calls = info.legal_calls();
        if info.phase == Phase::Calling && info.dash_count >= MAX_DASHES {
            calls.retain(|&c| c > 0);
        }
        self.pick(&calls, "calls")
    }

    fn choose_play(&self, info: &StepInfo) -> Result<Card, AgentError> {
        self.pick(&info.legal_plays(), "plays")
    }
}
