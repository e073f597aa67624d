use std::collections::HashSet;
use std::sync::Mutex;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::dealing::{
    covers_all_suits, deal_hands, deal_to_players, missing_suits, AcceptAll, HandReview,
    RejectShortSuited,
};
use crate::domain::fixtures::CardFixtures;
use crate::domain::state::PlayerId;
use crate::domain::{Card, Suit};
use crate::errors::DomainError;

fn assert_full_unique_deal(hands: &[Vec<Card>; 4]) {
    let mut seen = HashSet::new();
    for hand in hands {
        assert_eq!(hand.len(), 13);
        for card in hand {
            assert!(seen.insert(*card), "duplicate card {card}");
        }
    }
    assert_eq!(seen.len(), 52);
}

#[test]
fn deal_hands_is_deterministic() {
    assert_eq!(deal_hands(12345).unwrap(), deal_hands(12345).unwrap());
    assert_ne!(deal_hands(12345).unwrap(), deal_hands(54321).unwrap());
}

#[test]
fn seeded_deal_is_stable() {
    let hands = deal_hands(42).unwrap();
    assert_eq!(
        hands[0],
        CardFixtures::parse_hardcoded(&[
            "4C", "TC", "4D", "5D", "8D", "TD", "QD", "2H", "JH", "6S", "7S", "QS", "AS",
        ])
    );
    assert_eq!(
        hands[3],
        CardFixtures::parse_hardcoded(&[
            "3C", "2D", "6D", "7D", "KD", "3H", "5H", "6H", "7H", "8H", "9H", "KH", "AH",
        ])
    );
}

#[test]
fn deal_hands_are_full_unique_and_sorted() {
    let hands = deal_hands(99999).unwrap();
    assert_full_unique_deal(&hands);
    for hand in &hands {
        let mut sorted = hand.clone();
        sorted.sort();
        assert_eq!(hand, &sorted);
    }
}

#[test]
fn accept_all_keeps_the_first_deal() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let deal = deal_to_players(&mut rng, &AcceptAll, 0).unwrap();
    assert_eq!(deal.attempts, 1);
    assert!(deal.deck.is_empty());
    assert_full_unique_deal(&deal.hands);
}

#[test]
fn reject_short_suited_always_ends_with_four_suit_hands() {
    let mut redealt = 0;
    for seed in 0..60 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deal = deal_to_players(&mut rng, &RejectShortSuited, 64).unwrap();
        assert_full_unique_deal(&deal.hands);
        assert!(deal.hands.iter().all(|h| covers_all_suits(h)));
        if deal.attempts > 1 {
            redealt += 1;
        }
    }
    assert!(redealt > 0, "expected at least one forced re-deal");
}

#[test]
fn redeal_cap_is_reported() {
    let limited = (0..200u64)
        .filter_map(|seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            deal_to_players(&mut rng, &RejectShortSuited, 0).err()
        })
        .collect::<Vec<_>>();
    assert!(!limited.is_empty());
    assert!(limited
        .iter()
        .all(|e| *e == DomainError::RedealLimit { attempts: 1 }));
}

/// Records every hand it is asked about, then keeps it.
#[derive(Default)]
struct RecordingReview {
    asked: Mutex<Vec<(PlayerId, Vec<Card>)>>,
}

impl HandReview for RecordingReview {
    fn accept_hand(&self, seat: PlayerId, hand: &[Card]) -> bool {
        if let Ok(mut asked) = self.asked.lock() {
            asked.push((seat, hand.to_vec()));
        }
        true
    }
}

#[test]
fn review_is_only_consulted_for_short_suited_hands() {
    let review = RecordingReview::default();
    for seed in 0..100 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        deal_to_players(&mut rng, &review, 0).unwrap();
    }
    let asked = review.asked.into_inner().unwrap();
    assert!(!asked.is_empty());
    for (seat, hand) in asked {
        assert!(seat < 4);
        assert!(!missing_suits(&hand).is_empty());
    }
}

#[test]
fn missing_suits_lists_voids() {
    let hand = CardFixtures::parse_hardcoded(&["AS", "KS", "2H", "3H"]);
    assert_eq!(missing_suits(&hand), vec![Suit::Clubs, Suit::Diamonds]);
    assert!(!covers_all_suits(&hand));
    let full = CardFixtures::parse_hardcoded(&["AS", "2H", "3C", "4D"]);
    assert!(missing_suits(&full).is_empty());
    assert!(covers_all_suits(&full));
}
