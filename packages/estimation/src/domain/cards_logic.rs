//! Card game logic: checking suits in hands, comparing card strength

use super::cards_types::{Card, Suit};

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.suit == suit)
}

/// Suits held at least once, in suit order.
pub fn suits_in_hand(hand: &[Card]) -> Vec<Suit> {
    Suit::ALL
        .into_iter()
        .filter(|&s| hand_has_suit(hand, s))
        .collect()
}

/// Whether `a` beats `b` in a trick led with `lead` under `trump`.
///
/// A trump card beats any non-trump card. Otherwise only cards of the lead suit
/// compete, by rank. Two off-suit cards never beat each other.
pub fn card_beats(a: Card, b: Card, lead: Suit, trump: Option<Suit>) -> bool {
    if let Some(trump) = trump {
        let a_trump = a.suit == trump;
        let b_trump = b.suit == trump;
        if a_trump != b_trump {
            return a_trump;
        }
        if a_trump {
            return a.rank > b.rank;
        }
    }
    let a_follows = a.suit == lead;
    let b_follows = b.suit == lead;
    if a_follows != b_follows {
        return a_follows;
    }
    a_follows && a.rank > b.rank
}
