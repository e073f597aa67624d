//! Agent trait definition.

use std::fmt;

use crate::domain::player_view::StepInfo;
use crate::domain::state::Phase;
use crate::domain::{token_of, Card, Suit};
use crate::env::Action;

/// Errors that can occur during agent decision-making.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentError {
    /// Agent encountered an internal error
    Internal(String),
    /// Agent could not produce a legal move
    InvalidMove(String),
    /// A scripted agent ran out of moves
    ScriptExhausted(&'static str),
}

impl fmt::Display for AgentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentError::Internal(msg) => write!(f, "agent internal error: {msg}"),
            AgentError::InvalidMove(msg) => write!(f, "agent invalid move: {msg}"),
            AgentError::ScriptExhausted(what) => write!(f, "agent script exhausted: no {what} left"),
        }
    }
}

impl std::error::Error for AgentError {}

/// An action provider for one seat.
///
/// Implementations receive the metadata visible at their decision point and
/// must choose a legal action. Query [`StepInfo::legal_bids`],
/// [`StepInfo::legal_calls`] and [`StepInfo::legal_plays`] for the options.
pub trait Agent: Send + Sync {
    /// Choose a bidding-phase estimate. 0 is a dash.
    fn choose_bid(&self, info: &StepInfo) -> Result<u8, AgentError>;

    /// Choose the trump suit that accompanies the bid.
    fn choose_trump(&self, info: &StepInfo) -> Result<Suit, AgentError>;

    /// Choose a calling-phase estimate.
    fn choose_call(&self, info: &StepInfo) -> Result<u8, AgentError>;

    /// Choose a card to play.
    fn choose_play(&self, info: &StepInfo) -> Result<Card, AgentError>;

    /// Build the environment action for the current phase.
    fn act(&self, info: &StepInfo) -> Result<Action, AgentError> {
        match info.phase {
            Phase::Bidding => {
                let estimate = self.choose_bid(info)?;
                let trump = self.choose_trump(info)?;
                Ok(Action::bid(estimate, trump))
            }
            Phase::Calling => Ok(Action::call(self.choose_call(info)?)),
            Phase::Playing => Ok(Action::play(token_of(self.choose_play(info)?))),
            Phase::Finished => Err(AgentError::InvalidMove("round is finished".into())),
        }
    }
}
