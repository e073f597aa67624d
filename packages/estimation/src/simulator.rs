//! In-memory round simulator: four agents drive the environment to completion.

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::ai::{Agent, AgentError};
use crate::domain::player_view::StepInfo;
use crate::domain::rules::PLAYERS;
use crate::domain::state::PlayerId;
use crate::domain::tags::MultiplierTag;
use crate::encoding::ObservationEncoder;
use crate::env::Estimation;
use crate::errors::DomainError;

/// 4 bids + 3 calls + 52 plays.
pub const MAX_STEPS_PER_ROUND: usize = 59;

#[derive(Debug, Error)]
pub enum SimulatorError {
    #[error("agent error (seat {seat}): {source}")]
    Agent {
        seat: PlayerId,
        #[source]
        source: AgentError,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("round did not finish within {0} steps")]
    StepLimit(usize),
}

/// Outcome of one simulated round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundResult {
    pub scores: [i32; PLAYERS],
    pub scores_total: [i32; PLAYERS],
    pub tricks: [u8; PLAYERS],
    pub estimates: [u8; PLAYERS],
    pub tags: [Vec<MultiplierTag>; PLAYERS],
    pub steps: usize,
}

/// Ask the acting seat's agent for an action and step until the round ends.
pub fn drive_round<E: ObservationEncoder>(
    env: &mut Estimation<E>,
    agents: &[Box<dyn Agent>; PLAYERS],
    mut info: StepInfo,
) -> Result<RoundResult, SimulatorError> {
    let mut steps = 0;
    while !info.done {
        if steps >= MAX_STEPS_PER_ROUND {
            return Err(SimulatorError::StepLimit(MAX_STEPS_PER_ROUND));
        }
        let seat = info
            .current_player
            .ok_or_else(|| DomainError::invariant("unfinished round has no acting player"))?;
        let action = agents[seat as usize]
            .act(&info)
            .map_err(|source| SimulatorError::Agent { seat, source })?;
        let (_, _, next) = env.step(action)?;
        info = next;
        steps += 1;
    }

    let scores = info
        .scores
        .ok_or_else(|| DomainError::invariant("finished round has no scores"))?;
    let result = RoundResult {
        scores,
        scores_total: info.scores_total,
        tricks: std::array::from_fn(|p| info.tricks_won(p as PlayerId)),
        estimates: info.players_estimates.map(|e| e.unwrap_or(0)),
        tags: info.players_tags,
        steps,
    };
    debug!(scores = ?result.scores, steps, "Simulated round");
    Ok(result)
}

/// Runs rounds against one environment, keeping its session scoreboard.
pub struct Simulator<E: ObservationEncoder> {
    env: Estimation<E>,
    agents: [Box<dyn Agent>; PLAYERS],
}

impl<E: ObservationEncoder> Simulator<E> {
    pub fn new(env: Estimation<E>, agents: [Box<dyn Agent>; PLAYERS]) -> Self {
        Self { env, agents }
    }

    /// Deal and play one round.
    pub fn play_round(&mut self) -> Result<RoundResult, SimulatorError> {
        let (_, info) = self.env.reset()?;
        drive_round(&mut self.env, &self.agents, info)
    }

    /// Deal and play `rounds` rounds in sequence.
    pub fn play_session(&mut self, rounds: usize) -> Result<Vec<RoundResult>, SimulatorError> {
        (0..rounds).map(|_| self.play_round()).collect()
    }

    pub fn env(&self) -> &Estimation<E> {
        &self.env
    }
}
