use tracing::info;

use crate::domain::rules::PLAYERS;
use crate::domain::state::{require_estimate, GameState, Phase, PlayerId};
use crate::domain::tags::MultiplierTag;
use crate::errors::DomainError;

/// Breakdown of one player's round score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerScore {
    /// `+estimate` when won, else `-|estimate - tricks|`.
    pub base: i32,
    /// Sum of tag bonuses and penalties inside the doubling.
    pub bonus: i32,
    /// 2 after a call of eight or more, else 1.
    pub factor: i32,
    /// Points added outside the doubling.
    pub direct: i32,
    pub won: bool,
    pub total: i32,
}

enum TagPoints {
    Bonus(i32),
    Direct(i32),
    Factor(i32),
}

fn tag_points(tag: MultiplierTag, won: bool) -> TagPoints {
    let pick = |w: i32, l: i32| if won { w } else { l };
    match tag {
        MultiplierTag::Bidder => TagPoints::Bonus(pick(20, -10)),
        MultiplierTag::Dash => TagPoints::Bonus(pick(23, -23)),
        MultiplierTag::Regular => TagPoints::Bonus(pick(10, 0)),
        MultiplierTag::Risk => TagPoints::Bonus(pick(20, -10)),
        MultiplierTag::DoubleRisk => TagPoints::Bonus(pick(30, -20)),
        MultiplierTag::With => TagPoints::Bonus(pick(20, -10)),
        MultiplierTag::WithRisk => TagPoints::Direct(pick(30, -20)),
        MultiplierTag::WithDoubleRisk => TagPoints::Bonus(pick(40, -30)),
        MultiplierTag::NoCall => TagPoints::Bonus(pick(10, -10)),
        MultiplierTag::OnlyWin => TagPoints::Bonus(10),
        MultiplierTag::OnlyLose => TagPoints::Bonus(-10),
        MultiplierTag::EightOrMore => TagPoints::Factor(2),
    }
}

/// Score one player from their estimate, tricks taken, and tags.
///
/// `total = (X + Y) * Z + (X + Y) * (Z - 1) + direct`.
pub fn score_player(estimate: u8, tricks: u8, tags: &[MultiplierTag]) -> PlayerScore {
    let won = estimate == tricks;
    let base = if won {
        i32::from(estimate)
    } else {
        -(i32::from(estimate) - i32::from(tricks)).abs()
    };

    let mut bonus = 0;
    let mut factor = 1;
    let mut direct = 0;
    for &tag in tags {
        match tag_points(tag, won) {
            TagPoints::Bonus(p) => bonus += p,
            TagPoints::Direct(p) => direct += p,
            TagPoints::Factor(z) => factor = z,
        }
    }

    let sum = base + bonus;
    PlayerScore {
        base,
        bonus,
        factor,
        direct,
        won,
        total: sum * factor + sum * (factor - 1) + direct,
    }
}

/// Tag the sole winner `onlywin`, or the sole loser `onlylose`.
pub fn assign_outcome_tags(
    tags: &mut [Vec<MultiplierTag>; PLAYERS],
    won: [bool; PLAYERS],
) -> Option<(PlayerId, MultiplierTag)> {
    let winners = won.iter().filter(|&&w| w).count();
    let (seat, tag) = match winners {
        1 => (won.iter().position(|&w| w)?, MultiplierTag::OnlyWin),
        3 => (won.iter().position(|&w| !w)?, MultiplierTag::OnlyLose),
        _ => return None,
    };
    tags[seat].push(tag);
    Some((seat as PlayerId, tag))
}

/// Close the round: assign outcome tags, score every player, and add the
/// scores to the session totals.
pub fn finish_round(state: &mut GameState) -> Result<[i32; PLAYERS], DomainError> {
    let mut estimates = [0u8; PLAYERS];
    for (p, slot) in estimates.iter_mut().enumerate() {
        *slot = require_estimate(state, p as PlayerId)?;
    }
    let tricks = state.round.tricks_won_all();
    let won: [bool; PLAYERS] = std::array::from_fn(|p| estimates[p] == tricks[p]);

    assign_outcome_tags(&mut state.round.tags, won);

    let scores: [i32; PLAYERS] = std::array::from_fn(|p| {
        score_player(estimates[p], tricks[p], &state.round.tags[p]).total
    });
    for (total, s) in state.scores_total.iter_mut().zip(scores) {
        *total += s;
    }

    state.round.scores = Some(scores);
    state.record.scores = Some(scores);
    state.phase = Phase::Finished;

    info!(
        scores = ?scores,
        scores_total = ?state.scores_total,
        tricks = ?tricks,
        "Round finished"
    );
    Ok(scores)
}
