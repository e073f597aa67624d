//! Per-round history: bids, trump, every completed trick, and the final scores.

use serde::Serialize;

use crate::domain::rules::PLAYERS;
use crate::domain::state::{Bid, PlayerId};
use crate::domain::{Card, Suit};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrickRecord {
    /// 1-based trick number.
    pub trick_no: u8,
    /// Turn order the trick was played in.
    pub order: [PlayerId; PLAYERS],
    pub plays: Vec<(PlayerId, Card)>,
    pub table_suit: Suit,
    pub winner: PlayerId,
    /// Tricks per seat after this trick.
    pub tricks_after: [u8; PLAYERS],
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    pub bids: [Option<Bid>; PLAYERS],
    pub trump: Option<Suit>,
    /// Estimates once calling completes.
    pub estimates: Option<[u8; PLAYERS]>,
    pub tricks: Vec<TrickRecord>,
    pub scores: Option<[i32; PLAYERS]>,
}

impl GameRecord {
    pub fn winners(&self) -> Vec<PlayerId> {
        self.tricks.iter().map(|t| t.winner).collect()
    }
}
