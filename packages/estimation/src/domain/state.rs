use serde::{Deserialize, Serialize};

use crate::domain::deck::Deck;
use crate::domain::round_record::GameRecord;
use crate::domain::rules::PLAYERS;
use crate::domain::seating::TurnOrder;
use crate::domain::tags::MultiplierTag;
use crate::domain::{Card, Suit};
use crate::errors::{DomainError, ValidationKind};

pub type PlayerId = u8; // 0..=3

/// Round progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum Phase {
    /// Each player bids (estimate, trump) in turn order.
    Bidding,
    /// Non-bidders, minus dashed players, declare their own estimates.
    Calling,
    /// Thirteen tricks.
    Playing,
    /// All tricks resolved and scored.
    Finished,
}

/// A bidding-phase bid: tricks the player will take, and the trump they want.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Bid {
    pub estimate: u8,
    pub trump: Suit,
}

impl Bid {
    pub fn new(estimate: u8, trump: Suit) -> Self {
        Self { estimate, trump }
    }

    /// Estimate 0 opts out of the bidding.
    pub fn is_dash(&self) -> bool {
        self.estimate == 0
    }
}

/// Who calls after bidding resolves, as ring indices into the rotated order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallingPlan {
    pub callers: Vec<usize>,
    pub cursor: usize,
}

impl CallingPlan {
    /// Ring index of the caller expected now.
    pub fn current(&self) -> Option<usize> {
        self.callers.get(self.cursor).copied()
    }

    pub fn is_last(&self) -> bool {
        self.cursor + 1 == self.callers.len()
    }
}

/// Per-round state owned by a single game aggregate.
#[derive(Debug, Clone)]
pub struct RoundState {
    /// Raw bidding-phase bids, by seat.
    pub bids: [Option<Bid>; PLAYERS],
    /// Final trick estimates by seat, set once bidding resolves.
    pub estimates: [Option<u8>; PLAYERS],
    /// One 0/1 flag per completed trick, by seat.
    pub tricks: [Vec<u8>; PLAYERS],
    pub tags: [Vec<MultiplierTag>; PLAYERS],
    /// Current trick in play order.
    pub table: Vec<(PlayerId, Card)>,
    pub table_suit: Option<Suit>,
    pub trump: Option<Suit>,
    /// Cards from completed tricks.
    pub played: Vec<Card>,
    /// Running sum of estimates.
    pub total_asked: u8,
    pub bidder: Option<PlayerId>,
    pub highest_bid: Option<Bid>,
    pub dash_players: Vec<PlayerId>,
    pub calling: Option<CallingPlan>,
    /// Terminal scores for this round, once finished.
    pub scores: Option<[i32; PLAYERS]>,
}

impl RoundState {
    pub fn empty() -> Self {
        Self {
            bids: [None; PLAYERS],
            estimates: [None; PLAYERS],
            tricks: Default::default(),
            tags: Default::default(),
            table: Vec::with_capacity(PLAYERS),
            table_suit: None,
            trump: None,
            played: Vec::with_capacity(52),
            total_asked: 0,
            bidder: None,
            highest_bid: None,
            dash_players: Vec::new(),
            calling: None,
            scores: None,
        }
    }

    pub fn tricks_won(&self, who: PlayerId) -> u8 {
        self.tricks[who as usize].iter().sum()
    }

    pub fn tricks_won_all(&self) -> [u8; PLAYERS] {
        std::array::from_fn(|i| self.tricks_won(i as PlayerId))
    }

    pub fn dash_count(&self) -> usize {
        self.bids.iter().flatten().filter(|b| b.is_dash()).count()
    }
}

/// Entire round container, sufficient for pure domain operations.
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: Phase,
    pub order: TurnOrder,
    /// Index into `order` of the player expected to act.
    pub order_index: usize,
    /// Completed tricks, 0..=13.
    pub trick_no: u8,
    pub hands: [Vec<Card>; PLAYERS],
    /// Undealt cards; empty after a full deal.
    pub deck: Deck,
    pub round: RoundState,
    /// Scores accumulated across the session, including this round once finished.
    pub scores_total: [i32; PLAYERS],
    pub record: GameRecord,
}

impl GameState {
    /// Start a round in Bidding with `first_bidder` acting first.
    pub fn new(
        hands: [Vec<Card>; PLAYERS],
        deck: Deck,
        first_bidder: PlayerId,
        scores_total: [i32; PLAYERS],
    ) -> Self {
        Self {
            phase: Phase::Bidding,
            order: TurnOrder::starting_at(first_bidder),
            order_index: 0,
            trick_no: 0,
            hands,
            deck,
            round: RoundState::empty(),
            scores_total,
            record: GameRecord::default(),
        }
    }

    /// Player expected to act, or `None` once finished.
    pub fn current_player(&self) -> Option<PlayerId> {
        match self.phase {
            Phase::Finished => None,
            _ => Some(self.order.at(self.order_index)),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }
}

pub fn require_phase(state: &GameState, expected: Phase) -> Result<(), DomainError> {
    if state.phase == Phase::Finished {
        return Err(DomainError::invalid(
            ValidationKind::GameOver,
            "round is finished",
        ));
    }
    if state.phase != expected {
        return Err(DomainError::invalid(
            ValidationKind::PhaseMismatch,
            format!("expected {expected:?}, round is in {:?}", state.phase),
        ));
    }
    Ok(())
}

pub fn require_turn(state: &GameState, who: PlayerId) -> Result<(), DomainError> {
    match state.current_player() {
        Some(turn) if turn == who => Ok(()),
        Some(turn) => Err(DomainError::invalid(
            ValidationKind::OutOfTurn,
            format!("player {who} acted on player {turn}'s turn"),
        )),
        None => Err(DomainError::invalid(
            ValidationKind::GameOver,
            "round is finished",
        )),
    }
}

pub fn require_estimate(state: &GameState, who: PlayerId) -> Result<u8, DomainError> {
    state.round.estimates[who as usize].ok_or_else(|| {
        DomainError::invariant(format!("estimate for player {who} must be set"))
    })
}

pub fn require_trump(state: &GameState, ctx: &'static str) -> Result<Suit, DomainError> {
    state
        .round
        .trump
        .ok_or_else(|| DomainError::invariant(format!("trump must be set ({ctx})")))
}
