//! Scripted agent - replays a fixed sequence of decisions.

use std::collections::VecDeque;
use std::sync::Mutex;

use super::trait_def::{Agent, AgentError};
use crate::domain::player_view::StepInfo;
use crate::domain::state::Bid;
use crate::domain::{Card, Suit};

/// Agent that answers from pre-recorded queues, one entry per decision.
///
/// Moves are not checked against the legal set; an illegal scripted move is
/// rejected by the environment like any other.
#[derive(Debug, Default)]
pub struct ScriptedAgent {
    bids: Mutex<VecDeque<Bid>>,
    calls: Mutex<VecDeque<u8>>,
    plays: Mutex<VecDeque<Card>>,
    // choose_trump is answered from the bid popped by choose_bid
    pending_trump: Mutex<Option<Suit>>,
}

fn pop<T>(queue: &Mutex<VecDeque<T>>, what: &'static str) -> Result<T, AgentError> {
    queue
        .lock()
        .map_err(|e| AgentError::Internal(format!("script lock poisoned: {e}")))?
        .pop_front()
        .ok_or(AgentError::ScriptExhausted(what))
}

impl ScriptedAgent {
    pub fn new(bids: Vec<Bid>, calls: Vec<u8>, plays: Vec<Card>) -> Self {
        Self {
            bids: Mutex::new(bids.into()),
            calls: Mutex::new(calls.into()),
            plays: Mutex::new(plays.into()),
            pending_trump: Mutex::new(None),
        }
    }

    /// Plays left in the script.
    pub fn remaining_plays(&self) -> usize {
        self.plays.lock().map(|q| q.len()).unwrap_or(0)
    }
}

impl Agent for ScriptedAgent {
    fn choose_bid(&self, _info: &StepInfo) -> Result<u8, AgentError> {
        let bid = pop(&self.bids, "bids")?;
        let mut pending = self
            .pending_trump
            .lock()
            .map_err(|e| AgentError::Internal(format!("script lock poisoned: {e}")))?;
        *pending = Some(bid.trump);
        Ok(bid.estimate)
    }

    fn choose_trump(&self, _info: &StepInfo) -> Result<Suit, AgentError> {
        self.pending_trump
            .lock()
            .map_err(|e| AgentError::Internal(format!("script lock poisoned: {e}")))?
            .take()
            .ok_or(AgentError::ScriptExhausted("trumps"))
    }

    fn choose_call(&self, _info: &StepInfo) -> Result<u8, AgentError> {
        pop(&self.calls, "calls")
    }

    fn choose_play(&self, _info: &StepInfo) -> Result<Card, AgentError> {
        pop(&self.plays, "plays")
    }
}
