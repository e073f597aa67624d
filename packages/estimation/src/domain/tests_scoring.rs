use crate::domain::scoring::{assign_outcome_tags, finish_round, score_player};
use crate::domain::state::Phase;
use crate::domain::tags::MultiplierTag;
use crate::domain::test_state_helpers::{init_round, sorted_hands};

use MultiplierTag::*;

#[test]
fn bidder_who_makes_six() {
    assert_eq!(score_player(6, 6, &[Bidder]).total, 26);
}

#[test]
fn eight_or_more_triples_the_sum() {
    let score = score_player(6, 6, &[Bidder, EightOrMore]);
    assert_eq!(score.factor, 2);
    assert_eq!(score.total, 78);

    // the doubling applies to losses as well
    assert_eq!(score_player(8, 6, &[EightOrMore]).total, -6);
}

#[test]
fn base_points_are_the_estimate_or_the_miss() {
    let made = score_player(4, 4, &[]);
    assert!(made.won);
    assert_eq!(made.base, 4);
    let missed = score_player(4, 7, &[]);
    assert!(!missed.won);
    assert_eq!(missed.base, -3);
    assert_eq!(score_player(4, 1, &[]).base, -3);
}

#[test]
fn dash_and_nocall_are_symmetric() {
    assert_eq!(score_player(0, 0, &[Dash]).total, 23);
    assert_eq!(score_player(0, 2, &[Dash]).total, -25);
    assert_eq!(score_player(0, 0, &[NoCall]).total, 10);
    assert_eq!(score_player(0, 1, &[NoCall]).total, -11);
}

#[test]
fn regular_has_no_penalty() {
    assert_eq!(score_player(2, 2, &[Regular]).total, 12);
    assert_eq!(score_player(1, 3, &[Regular]).total, -2);
}

#[test]
fn risk_tags() {
    assert_eq!(score_player(3, 3, &[Risk]).total, 23);
    assert_eq!(score_player(3, 2, &[Risk]).total, -11);
    assert_eq!(score_player(3, 3, &[DoubleRisk]).total, 33);
    assert_eq!(score_player(3, 5, &[DoubleRisk]).total, -22);
    assert_eq!(score_player(5, 5, &[WithDoubleRisk]).total, 45);
    assert_eq!(score_player(5, 4, &[WithDoubleRisk]).total, -31);
}

#[test]
fn withrisk_is_added_outside_the_doubling() {
    let score = score_player(5, 5, &[WithRisk]);
    assert_eq!(score.bonus, 0);
    assert_eq!(score.direct, 30);
    assert_eq!(score.total, 35);

    assert_eq!(score_player(8, 8, &[WithRisk, EightOrMore]).total, 54);
    assert_eq!(score_player(5, 3, &[WithRisk]).total, -22);
}

#[test]
fn only_win_and_only_lose_are_flat() {
    assert_eq!(score_player(2, 2, &[With, OnlyWin]).total, 32);
    assert_eq!(score_player(2, 1, &[With, OnlyWin]).total, -1);
    assert_eq!(score_player(2, 1, &[OnlyLose]).total, -11);
}

#[test]
fn outcome_tags_need_a_lone_winner_or_loser() {
    let mut tags: [Vec<MultiplierTag>; 4] = Default::default();
    assert_eq!(
        assign_outcome_tags(&mut tags, [false, true, false, false]),
        Some((1, OnlyWin))
    );
    assert_eq!(
        assign_outcome_tags(&mut tags, [true, true, false, true]),
        Some((2, OnlyLose))
    );
    assert_eq!(assign_outcome_tags(&mut tags, [true, true, false, false]), None);
    assert_eq!(assign_outcome_tags(&mut tags, [true; 4]), None);
    assert_eq!(assign_outcome_tags(&mut tags, [false; 4]), None);
    assert_eq!(tags[1], vec![OnlyWin]);
    assert_eq!(tags[2], vec![OnlyLose]);
}

#[test]
fn finish_round_scores_and_accumulates() {
    let mut state = init_round(sorted_hands(), 0);
    state.phase = Phase::Playing;
    state.scores_total = [100, 0, -5, 7];
    state.round.estimates = [Some(2), Some(0), Some(1), Some(0)];
    state.round.tags = [vec![Bidder], vec![Dash], vec![Regular], vec![NoCall]];
    state.round.tricks = [vec![1, 1, 0], vec![0, 0, 0], vec![0, 0, 1], vec![0, 0, 0]];

    let scores = finish_round(&mut state).unwrap();
    // every seat made its estimate: no outcome tag
    assert_eq!(scores, [22, 23, 11, 10]);
    assert_eq!(state.scores_total, [122, 23, 6, 17]);
    assert_eq!(state.round.scores, Some(scores));
    assert_eq!(state.record.scores, Some(scores));
    assert_eq!(state.phase, Phase::Finished);
}

#[test]
fn finish_round_requires_estimates() {
    let mut state = init_round(sorted_hands(), 0);
    assert!(finish_round(&mut state).is_err());
}
