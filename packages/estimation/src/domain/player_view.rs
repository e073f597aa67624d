//! Step metadata: everything visible to the acting player after each step.
//!
//! [`StepInfo`] is what the environment hands to agents and encoders. It is a
//! snapshot; mutating it never affects the round.

use serde::Serialize;

use crate::domain::bidding::{estimates_excluding, illegal_call, is_last_call};
use crate::domain::rules::PLAYERS;
use crate::domain::state::{Bid, GameState, Phase, PlayerId};
use crate::domain::tags::MultiplierTag;
use crate::domain::tricks::legal_from_hand;
use crate::domain::{Card, Suit};

/// Information visible at a decision point.
///
/// # For agent authors
///
/// Use [`legal_bids()`](Self::legal_bids), [`legal_calls()`](Self::legal_calls)
/// and [`legal_plays()`](Self::legal_plays) rather than re-deriving the rules.
/// They honor the dash limit, the last caller's forbidden value, and follow-suit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepInfo {
    pub phase: Phase,
    /// Completed tricks, 0..=13.
    pub round: u8,
    /// Seat expected to act, `None` once the round is finished.
    pub current_player: Option<PlayerId>,
    /// The acting player's hand, sorted.
    pub current_player_cards: Vec<Card>,
    /// Turn order; index 0 leads the current trick (or bids/calls first).
    pub player_order: [PlayerId; PLAYERS],
    /// Position of the acting player in `player_order`.
    pub order_index: usize,
    pub players_cards: [Vec<Card>; PLAYERS],
    /// Raw bidding-phase bids by seat.
    pub players_bids: [Option<Bid>; PLAYERS],
    /// Resolved estimates by seat, after bidding.
    pub players_estimates: [Option<u8>; PLAYERS],
    /// Per-trick 0/1 flags by seat.
    pub players_tricks: [Vec<u8>; PLAYERS],
    pub players_tags: [Vec<MultiplierTag>; PLAYERS],
    pub table: Vec<(PlayerId, Card)>,
    pub table_suit: Option<Suit>,
    pub trump_suit: Option<Suit>,
    pub played_cards: Vec<Card>,
    pub total_asked: u8,
    pub dash_count: usize,
    /// This round's scores, once finished.
    pub scores: Option<[i32; PLAYERS]>,
    /// Session scoreboard.
    pub scores_total: [i32; PLAYERS],
    /// The acting player is the last caller.
    pub last_call: bool,
    /// Value the acting player may not choose: the last caller's forbidden call,
    /// or 0 during bidding once two players have dashed.
    pub illegal_call: Option<u8>,
    pub done: bool,
}

impl StepInfo {
    pub fn from_state(state: &GameState) -> Self {
        let current_player = state.current_player();
        let mut current_player_cards = current_player
            .map(|p| state.hands[p as usize].clone())
            .unwrap_or_default();
        current_player_cards.sort();

        Self {
            phase: state.phase,
            round: state.trick_no,
            current_player,
            current_player_cards,
            player_order: state.order.seats(),
            order_index: state.order_index,
            players_cards: state.hands.clone(),
            players_bids: state.round.bids,
            players_estimates: state.round.estimates,
            players_tricks: state.round.tricks.clone(),
            players_tags: state.round.tags.clone(),
            table: state.round.table.clone(),
            table_suit: state.round.table_suit,
            trump_suit: state.round.trump,
            played_cards: state.round.played.clone(),
            total_asked: state.round.total_asked,
            dash_count: state.round.dash_count(),
            scores: state.round.scores,
            scores_total: state.scores_total,
            last_call: is_last_call(state),
            illegal_call: illegal_call(state),
            done: state.is_finished(),
        }
    }

    /// Estimates the acting player may bid. Empty outside Bidding.
    pub fn legal_bids(&self) -> Vec<u8> {
        if self.phase != Phase::Bidding {
            return Vec::new();
        }
        estimates_excluding(self.illegal_call)
    }

    /// Calls the acting player may make. Empty outside Calling.
    pub fn legal_calls(&self) -> Vec<u8> {
        if self.phase != Phase::Calling {
            return Vec::new();
        }
        estimates_excluding(self.illegal_call)
    }

    /// Cards the acting player may play, sorted. Empty outside Playing.
    pub fn legal_plays(&self) -> Vec<Card> {
        if self.phase != Phase::Playing {
            return Vec::new();
        }
        let mut legal = legal_from_hand(&self.current_player_cards, self.table_suit);
        legal.sort();
        legal
    }

    pub fn tricks_won(&self, who: PlayerId) -> u8 {
        self.players_tricks[who as usize].iter().sum()
    }

    /// Seats in turn order after the acting player, excluding them.
    pub fn others_in_order(&self) -> Vec<PlayerId> {
        (1..PLAYERS)
            .map(|k| self.player_order[(self.order_index + k) % PLAYERS])
            .collect()
    }
}
