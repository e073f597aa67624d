//! Dealing with optional forced re-deals of short-suited hands.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::warn;

use crate::domain::cards_logic::suits_in_hand;
use crate::domain::deck::Deck;
use crate::domain::rules::{HAND_SIZE, PLAYERS};
use crate::domain::state::PlayerId;
use crate::domain::{Card, Suit};
use crate::errors::DomainError;

/// Decides whether a player keeps a hand that is missing at least one suit.
///
/// Only consulted for short-suited hands; a hand holding all four suits is
/// always kept.
pub trait HandReview: Send + Sync {
    fn accept_hand(&self, seat: PlayerId, hand: &[Card]) -> bool;
}

/// Every player keeps every hand.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl HandReview for AcceptAll {
    fn accept_hand(&self, _seat: PlayerId, _hand: &[Card]) -> bool {
        true
    }
}

/// Every player forces a re-deal when missing a suit.
#[derive(Debug, Clone, Copy, Default)]
pub struct RejectShortSuited;

impl HandReview for RejectShortSuited {
    fn accept_hand(&self, _seat: PlayerId, _hand: &[Card]) -> bool {
        false
    }
}

pub fn covers_all_suits(hand: &[Card]) -> bool {
    suits_in_hand(hand).len() == Suit::ALL.len()
}

pub fn missing_suits(hand: &[Card]) -> Vec<Suit> {
    let held = suits_in_hand(hand);
    Suit::ALL
        .into_iter()
        .filter(|s| !held.contains(s))
        .collect()
}

/// A settled deal.
#[derive(Debug, Clone)]
pub struct Deal {
    /// Sorted hands by seat.
    pub hands: [Vec<Card>; PLAYERS],
    /// Leftover deck (empty after a full deal).
    pub deck: Deck,
    /// Number of deals performed, 1 when the first deal was kept.
    pub attempts: u32,
}

/// Shuffle a fresh deck and deal 13 cards to each seat round-robin.
///
/// A short-suited hand the seat's review rejects forces a full re-deal from a
/// fresh deck. At most `max_redeals` re-deals are performed before failing with
/// [`DomainError::RedealLimit`].
pub fn deal_to_players<R: Rng + ?Sized>(
    rng: &mut R,
    review: &dyn HandReview,
    max_redeals: u32,
) -> Result<Deal, DomainError> {
    let mut attempts = 0u32;
    loop {
        attempts += 1;
        let mut deck = Deck::new();
        deck.shuffle(rng);

        let mut hands: [Vec<Card>; PLAYERS] = Default::default();
        for _ in 0..HAND_SIZE {
            for hand in hands.iter_mut() {
                hand.push(deck.deal_one()?);
            }
        }

        let rejected = (0..PLAYERS).find(|&seat| {
            !covers_all_suits(&hands[seat]) && !review.accept_hand(seat as PlayerId, &hands[seat])
        });

        let Some(seat) = rejected else {
            for hand in hands.iter_mut() {
                hand.sort();
            }
            return Ok(Deal {
                hands,
                deck,
                attempts,
            });
        };

        if attempts > max_redeals {
            warn!(attempts, max_redeals, "Re-deal limit reached");
            return Err(DomainError::RedealLimit { attempts });
        }
        warn!(
            seat,
            missing = ?missing_suits(&hands[seat]),
            attempts,
            "Hand rejected, re-dealing"
        );
    }
}

/// Deal four sorted 13-card hands from a seeded shuffle, keeping every hand.
pub fn deal_hands(seed: u64) -> Result<[Vec<Card>; PLAYERS], DomainError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    deal_to_players(&mut rng, &AcceptAll, 0).map(|deal| deal.hands)
}
