use crate::domain::bidding::{
    call_tags, illegal_call, legal_bids, legal_calls, place_bid, place_call, select_highest_bid,
};
use crate::domain::player_view::StepInfo;
use crate::domain::state::{Bid, Phase};
use crate::domain::tags::MultiplierTag;
use crate::domain::test_state_helpers::{bid_all, call_all, init_round, sorted_hands};
use crate::domain::Suit;
use crate::errors::ValidationKind;

use MultiplierTag::*;
use Suit::*;

#[test]
fn highest_estimate_wins_regardless_of_trump() {
    let mut state = init_round(sorted_hands(), 0);
    bid_all(
        &mut state,
        [
            Bid::new(5, Clubs),
            Bid::new(4, Spades),
            Bid::new(6, Diamonds),
            Bid::new(5, Spades),
        ],
    );

    assert_eq!(state.phase, Phase::Calling);
    assert_eq!(state.round.bidder, Some(2));
    assert_eq!(state.round.trump, Some(Diamonds));
    assert_eq!(state.round.total_asked, 6);
    assert_eq!(state.order.seats(), [2, 3, 0, 1]);
    assert_eq!(state.round.tags[2], vec![Bidder]);
    assert_eq!(state.round.estimates, [Some(0), Some(0), Some(6), Some(0)]);
    // first caller sits right after the bidder
    assert_eq!(state.current_player(), Some(3));
}

#[test]
fn equal_estimates_break_ties_on_trump_rank() {
    let bids = [
        (0, Bid::new(5, Hearts)),
        (1, Bid::new(5, Spades)),
        (2, Bid::new(5, Clubs)),
        (3, Bid::new(0, Spades)),
    ];
    assert_eq!(select_highest_bid(&bids), Some((1, Bid::new(5, Spades))));

    // identical bids keep the earlier one
    let same = [(2, Bid::new(4, Hearts)), (3, Bid::new(4, Hearts))];
    assert_eq!(select_highest_bid(&same), Some((2, Bid::new(4, Hearts))));
}

#[test]
fn dash_is_tagged_and_skipped_when_calling() {
    let mut state = init_round(sorted_hands(), 0);
    let resolution = {
        let mut last = None;
        for bid in [
            Bid::new(0, Clubs),
            Bid::new(4, Spades),
            Bid::new(6, Diamonds),
            Bid::new(5, Spades),
        ] {
            let who = state.current_player().unwrap();
            last = place_bid(&mut state, who, bid).unwrap();
        }
        last.unwrap()
    };

    assert_eq!(resolution.bidder, 2);
    assert_eq!(resolution.dashes, vec![0]);
    assert_eq!(state.round.tags[0], vec![Dash]);
    assert_eq!(state.round.dash_players, vec![0]);
    // order [2, 3, 0, 1]: seat 0 sits at ring index 2 and is skipped
    assert_eq!(resolution.callers, vec![3, 1]);
    assert_eq!(state.current_player(), Some(3));
}

#[test]
fn third_dash_is_rejected() {
    let mut state = init_round(sorted_hands(), 0);
    place_bid(&mut state, 0, Bid::new(0, Clubs)).unwrap();
    place_bid(&mut state, 1, Bid::new(0, Hearts)).unwrap();

    assert_eq!(illegal_call(&state), Some(0));
    assert!(!legal_bids(&state, 2).contains(&0));

    let err = place_bid(&mut state, 2, Bid::new(0, Spades)).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::TooManyDashes));
    // state untouched: seat 2 still to bid
    assert_eq!(state.current_player(), Some(2));
    assert_eq!(state.round.bids[2], None);
}

#[test]
fn two_dashes_leave_a_single_last_caller() {
    let mut state = init_round(sorted_hands(), 0);
    bid_all(
        &mut state,
        [
            Bid::new(0, Clubs),
            Bid::new(5, Hearts),
            Bid::new(0, Diamonds),
            Bid::new(3, Spades),
        ],
    );
    assert_eq!(state.order.seats(), [1, 2, 3, 0]);
    assert_eq!(state.current_player(), Some(3));
    assert_eq!(illegal_call(&state), Some(8));
    assert!(!legal_calls(&state, 3).contains(&8));

    let err = place_call(&mut state, 3, 8).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::ForbiddenCall));

    let result = place_call(&mut state, 3, 9).unwrap();
    assert_eq!(result.tags, vec![Regular, EightOrMore]);
    assert!(result.calling_complete);
    assert_eq!(state.phase, Phase::Playing);
    assert_eq!(state.current_player(), Some(1));
    assert_eq!(state.round.estimates, [Some(0), Some(5), Some(0), Some(9)]);
}

#[test]
fn calls_accumulate_tags_and_total() {
    let mut state = init_round(sorted_hands(), 0);
    bid_all(
        &mut state,
        [
            Bid::new(5, Spades),
            Bid::new(2, Clubs),
            Bid::new(3, Clubs),
            Bid::new(1, Clubs),
        ],
    );
    call_all(&mut state, &[5, 0]);
    assert_eq!(state.round.tags[1], vec![With]);
    assert_eq!(state.round.tags[2], vec![NoCall]);
    assert_eq!(state.round.total_asked, 10);

    let result = place_call(&mut state, 3, 5).unwrap();
    assert_eq!(result.tags, vec![WithRisk]);
    assert_eq!(result.total_after, 15);
    assert_eq!(state.record.estimates, Some([5, 5, 0, 5]));
}

#[test]
fn last_caller_tags_follow_the_asked_total() {
    // with the bidder's estimate
    assert_eq!(call_tags(5, 5, 4, true), vec![With]);
    assert_eq!(call_tags(5, 5, 10, true), vec![WithRisk]);
    assert_eq!(call_tags(5, 5, 11, true), vec![WithDoubleRisk]);
    // any other non-zero call
    assert_eq!(call_tags(2, 5, 3, true), vec![Regular]);
    assert_eq!(call_tags(6, 5, 9, true), vec![Risk]);
    assert_eq!(call_tags(6, 5, 10, true), vec![DoubleRisk]);
    // zero
    assert_eq!(call_tags(0, 5, 10, true), vec![NoCall]);
}

#[test]
fn earlier_callers_only_tag_with_nocall_and_eight() {
    assert_eq!(call_tags(3, 5, 5, false), Vec::<MultiplierTag>::new());
    assert_eq!(call_tags(5, 5, 5, false), vec![With]);
    assert_eq!(call_tags(0, 5, 5, false), vec![NoCall]);
    assert_eq!(call_tags(8, 4, 4, false), vec![EightOrMore]);
    assert_eq!(call_tags(8, 8, 8, false), vec![With, EightOrMore]);
}

#[test]
fn out_of_turn_and_phase_errors() {
    let mut state = init_round(sorted_hands(), 0);
    let err = place_bid(&mut state, 1, Bid::new(3, Clubs)).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::OutOfTurn));

    let err = place_call(&mut state, 0, 3).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::PhaseMismatch));

    let err = place_bid(&mut state, 0, Bid::new(14, Clubs)).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::InvalidEstimate));
}

#[test]
fn legal_calls_exclude_forbidden_value_only_for_last_caller() {
    let mut state = init_round(sorted_hands(), 0);
    bid_all(
        &mut state,
        [
            Bid::new(4, Hearts),
            Bid::new(2, Clubs),
            Bid::new(2, Clubs),
            Bid::new(2, Clubs),
        ],
    );
    assert_eq!(legal_calls(&state, 1).len(), 14);
    assert_eq!(legal_calls(&state, 2), Vec::<u8>::new());
    assert_eq!(illegal_call(&state), None);

    call_all(&mut state, &[3, 2]);
    // 4 + 3 + 2 asked, seat 3 may not call 4
    assert_eq!(illegal_call(&state), Some(4));
    let calls = legal_calls(&state, 3);
    assert_eq!(calls.len(), 13);
    assert!(!calls.contains(&4));
}

#[test]
fn step_info_options_agree_with_bidding_rules() {
    let mut state = init_round(sorted_hands(), 1);
    let steps: [(u8, Suit); 4] = [(0, Clubs), (0, Hearts), (4, Spades), (6, Diamonds)];
    for (estimate, trump) in steps {
        let who = state.current_player().unwrap();
        let info = StepInfo::from_state(&state);
        assert_eq!(info.legal_bids(), legal_bids(&state, who));
        assert!(info.legal_calls().is_empty());
        place_bid(&mut state, who, Bid::new(estimate, trump)).unwrap();
    }

    while state.phase == Phase::Calling {
        let who = state.current_player().unwrap();
        let info = StepInfo::from_state(&state);
        assert_eq!(info.legal_calls(), legal_calls(&state, who));
        assert!(info.legal_bids().is_empty());
        let call = info.legal_calls()[1];
        place_call(&mut state, who, call).unwrap();
    }
    assert_eq!(state.phase, Phase::Playing);
}
