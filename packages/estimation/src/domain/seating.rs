//! Turn order ring: the four seats in acting order.
//!
//! Rotation is the only mutation. It moves the start index and keeps the
//! cyclic order, so the seat set never changes.

use crate::domain::rules::PLAYERS;
use crate::domain::state::PlayerId;
use crate::errors::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct TurnOrder([PlayerId; PLAYERS]);

impl TurnOrder {
    /// Seats 0, 1, 2, 3.
    pub fn new() -> Self {
        Self([0, 1, 2, 3])
    }

    /// Clockwise order beginning at `first`.
    pub fn starting_at(first: PlayerId) -> Self {
        let mut order = [0; PLAYERS];
        for (i, slot) in order.iter_mut().enumerate() {
            *slot = (first + i as u8) % PLAYERS as u8;
        }
        Self(order)
    }

    pub fn seats(&self) -> [PlayerId; PLAYERS] {
        self.0
    }

    /// Seat at ring index `idx` (taken modulo 4).
    pub fn at(&self, idx: usize) -> PlayerId {
        self.0[idx % PLAYERS]
    }

    pub fn position_of(&self, player: PlayerId) -> Option<usize> {
        self.0.iter().position(|&p| p == player)
    }

    /// Rotate so `player` sits at index 0.
    pub fn rotate_to(&mut self, player: PlayerId) -> Result<(), DomainError> {
        let pos = self.position_of(player).ok_or_else(|| {
            DomainError::invariant(format!("player {player} is not seated"))
        })?;
        self.0.rotate_left(pos);
        Ok(())
    }
}

impl Default for TurnOrder {
    fn default() -> Self {
        Self::new()
    }
}
