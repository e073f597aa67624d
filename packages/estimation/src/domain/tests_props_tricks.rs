//! Property tests for trick-taking logic.
//!
//! Properties tested:
//! - Trick winner matches an independent pairwise oracle
//! - The winning card is trump whenever trump was played
//! - Cards are conserved through a whole round of legal play
//! - Every seat collects one flag per trick

use std::collections::HashSet;

use proptest::prelude::*;

use crate::domain::bidding::{illegal_call, place_call};
use crate::domain::card_beats;
use crate::domain::rules::TRICKS_PER_ROUND;
use crate::domain::state::{Bid, GameState, Phase};
use crate::domain::test_state_helpers::{bid_all, init_round};
use crate::domain::tricks::{evaluate_winner, legal_moves, play_card};
use crate::domain::{test_gens, test_prelude, Suit};

fn assert_conserved(state: &GameState) -> Result<(), TestCaseError> {
    let mut seen = HashSet::new();
    let all = state
        .hands
        .iter()
        .flatten()
        .chain(state.round.table.iter().map(|(_, c)| c))
        .chain(state.round.played.iter());
    for card in all {
        prop_assert!(seen.insert(*card), "card {} appears twice", card);
    }
    prop_assert_eq!(seen.len(), 52);
    Ok(())
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn prop_trick_winner_matches_oracle(
        (plays, trump, table_suit) in test_gens::complete_trick(),
    ) {
        let winner = evaluate_winner(&plays, trump, table_suit).unwrap();

        let mut best = plays[0];
        for &play in &plays[1..] {
            if card_beats(play.1, best.1, table_suit, Some(trump)) {
                best = play;
            }
        }
        prop_assert_eq!(winner, best.0);

        let winning_card = plays.iter().find(|(p, _)| *p == winner).unwrap().1;
        if plays.iter().any(|(_, c)| c.suit == trump) {
            prop_assert_eq!(winning_card.suit, trump);
        } else {
            prop_assert_eq!(winning_card.suit, table_suit);
        }
    }

    #[test]
    fn prop_cards_conserved_through_a_round(
        hands in test_gens::four_full_hands(),
        picks in prop::collection::vec(any::<u8>(), 52),
    ) {
        let mut state = init_round(hands, 0);
        bid_all(&mut state, [
            Bid::new(4, Suit::Spades),
            Bid::new(3, Suit::Hearts),
            Bid::new(2, Suit::Clubs),
            Bid::new(0, Suit::Clubs),
        ]);
        while state.phase == Phase::Calling {
            let who = state.current_player().unwrap();
            let call = if illegal_call(&state) == Some(2) { 3 } else { 2 };
            place_call(&mut state, who, call).unwrap();
        }
        assert_conserved(&state)?;

        for pick in picks {
            let who = state.current_player().unwrap();
            let legal = legal_moves(&state, who);
            prop_assert!(!legal.is_empty());
            let card = legal[pick as usize % legal.len()];
            play_card(&mut state, who, card).unwrap();
            assert_conserved(&state)?;
        }

        prop_assert_eq!(state.phase, Phase::Finished);
        prop_assert_eq!(state.trick_no, TRICKS_PER_ROUND);
        prop_assert_eq!(state.round.played.len(), 52);
        for flags in &state.round.tricks {
            prop_assert_eq!(flags.len(), TRICKS_PER_ROUND as usize);
        }
        let total: u8 = state.round.tricks_won_all().iter().sum();
        prop_assert_eq!(total, TRICKS_PER_ROUND);
        prop_assert_eq!(state.record.tricks.len(), TRICKS_PER_ROUND as usize);
    }
}
