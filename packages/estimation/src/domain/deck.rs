//! The 52-card deck and the card <-> token bijection used by every encoder.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::rules::DECK_SIZE;
use crate::domain::{Card, Rank, Suit};
use crate::errors::{DomainError, ValidationKind};

/// Token in `[0, 52)`: suit outer (Clubs..Spades), rank inner (Two..Ace).
pub fn token_of(card: Card) -> u8 {
    card.suit.index() * 13 + card.rank.index()
}

pub fn card_of(token: u8) -> Result<Card, DomainError> {
    let suit = Suit::from_index(token / 13);
    let rank = Rank::from_index(token % 13);
    match (suit, rank) {
        (Some(suit), Some(rank)) => Ok(Card { suit, rank }),
        _ => Err(DomainError::invalid(
            ValidationKind::InvalidToken,
            format!("card token {token} out of range 0..{DECK_SIZE}"),
        )),
    }
}

/// All 52 cards in token order.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// Remaining undealt cards. Dealing takes from the tail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new() -> Self {
        Self { cards: full_deck() }
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    pub fn deal_one(&mut self) -> Result<Card, DomainError> {
        self.cards.pop().ok_or(DomainError::EmptyDeck)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
