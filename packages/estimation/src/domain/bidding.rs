//! Bidding and calling: the two phases that fix trump, estimates, and tags.

use tracing::debug;

use crate::domain::rules::{
    forbidden_call, valid_estimate_range, DOUBLING_CALL, MAX_DASHES, MAX_ESTIMATE, PLAYERS,
    RISK_TOTAL,
};
use crate::domain::state::{
    require_phase, require_turn, Bid, CallingPlan, GameState, Phase, PlayerId,
};
use crate::domain::tags::MultiplierTag;
use crate::errors::{DomainError, ValidationKind};

/// Outcome of the bidding phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BidResolution {
    pub bidder: PlayerId,
    pub bid: Bid,
    /// Dashed players in bidding order.
    pub dashes: Vec<PlayerId>,
    /// Turn order after seating the bidder first.
    pub order: [PlayerId; PLAYERS],
    /// Players asked to call, in calling order.
    pub callers: Vec<PlayerId>,
}

/// Outcome of a single call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallResult {
    pub tags: Vec<MultiplierTag>,
    pub total_after: u8,
    /// True when this was the last call and play begins.
    pub calling_complete: bool,
}

/// Estimates 0..=13 except the one [`illegal_call`] rules out.
pub fn estimates_excluding(illegal: Option<u8>) -> Vec<u8> {
    valid_estimate_range()
        .filter(|&e| Some(e) != illegal)
        .collect()
}

/// Estimates `who` may bid right now. Trump is free.
pub fn legal_bids(state: &GameState, who: PlayerId) -> Vec<u8> {
    if state.phase != Phase::Bidding || state.current_player() != Some(who) {
        return Vec::new();
    }
    estimates_excluding(illegal_call(state))
}

/// Calls `who` may make right now.
pub fn legal_calls(state: &GameState, who: PlayerId) -> Vec<u8> {
    if state.phase != Phase::Calling || state.current_player() != Some(who) {
        return Vec::new();
    }
    estimates_excluding(illegal_call(state))
}

/// Record `who`'s bid and advance the turn; the fourth bid resolves the phase.
pub fn place_bid(
    state: &mut GameState,
    who: PlayerId,
    bid: Bid,
) -> Result<Option<BidResolution>, DomainError> {
    require_phase(state, Phase::Bidding)?;
    require_turn(state, who)?;

    if bid.estimate > MAX_ESTIMATE {
        return Err(DomainError::invalid(
            ValidationKind::InvalidEstimate,
            format!("bid of {} exceeds {MAX_ESTIMATE}", bid.estimate),
        ));
    }
    if bid.is_dash() && state.round.dash_count() >= MAX_DASHES {
        return Err(DomainError::invalid(
            ValidationKind::TooManyDashes,
            format!("at most {MAX_DASHES} players may dash"),
        ));
    }

    state.round.bids[who as usize] = Some(bid);
    state.record.bids[who as usize] = Some(bid);

    if state.order_index + 1 < PLAYERS {
        state.order_index += 1;
        return Ok(None);
    }
    resolve_highest_bid(state).map(Some)
}

/// Highest non-dash bid. Ties go to the higher trump suit, then to the earlier bid.
pub fn select_highest_bid(bids: &[(PlayerId, Bid)]) -> Option<(PlayerId, Bid)> {
    let mut best: Option<(PlayerId, Bid)> = None;
    for &(player, bid) in bids {
        if bid.is_dash() {
            continue;
        }
        let better = match best {
            None => true,
            Some((_, b)) => {
                bid.estimate > b.estimate || (bid.estimate == b.estimate && bid.trump > b.trump)
            }
        };
        if better {
            best = Some((player, bid));
        }
    }
    best
}

/// Resolve the four bids: tag dashes and the bidder, fix trump, seat the
/// bidder first, and plan the calling phase.
pub fn resolve_highest_bid(state: &mut GameState) -> Result<BidResolution, DomainError> {
    let seats = state.order.seats();
    let mut in_order = Vec::with_capacity(PLAYERS);
    for p in seats {
        let bid = state.round.bids[p as usize].ok_or_else(|| {
            DomainError::invariant(format!("bid for player {p} must be set before resolution"))
        })?;
        in_order.push((p, bid));
    }

    let mut dashes = Vec::new();
    for &(p, bid) in &in_order {
        if bid.is_dash() && dashes.len() < MAX_DASHES {
            dashes.push(p);
            state.round.tags[p as usize].push(MultiplierTag::Dash);
        }
    }

    let (bidder, best) = select_highest_bid(&in_order)
        .ok_or_else(|| DomainError::invariant("no non-dash bid to resolve"))?;

    state.round.tags[bidder as usize].push(MultiplierTag::Bidder);
    state.round.trump = Some(best.trump);
    state.round.total_asked = best.estimate;
    state.round.bidder = Some(bidder);
    state.round.highest_bid = Some(best);
    state.round.dash_players = dashes.clone();
    state.round.estimates = [Some(0); PLAYERS];
    state.round.estimates[bidder as usize] = Some(best.estimate);
    state.record.trump = Some(best.trump);

    state.order.rotate_to(bidder)?;

    let callers: Vec<usize> = (1..PLAYERS)
        .filter(|&idx| !dashes.contains(&state.order.at(idx)))
        .collect();
    let first = *callers
        .first()
        .ok_or_else(|| DomainError::invariant("calling phase needs at least one caller"))?;
    let caller_ids: Vec<PlayerId> = callers.iter().map(|&idx| state.order.at(idx)).collect();

    state.round.calling = Some(CallingPlan {
        callers,
        cursor: 0,
    });
    state.phase = Phase::Calling;
    state.order_index = first;

    debug!(
        bidder,
        estimate = best.estimate,
        trump = ?best.trump,
        dashes = ?dashes,
        callers = ?caller_ids,
        "Bidding resolved"
    );

    Ok(BidResolution {
        bidder,
        bid: best,
        dashes,
        order: state.order.seats(),
        callers: caller_ids,
    })
}

/// Tags a call earns, given the bidder's estimate and the asked total before it.
pub fn call_tags(call: u8, highest: u8, total_before: u8, is_last: bool) -> Vec<MultiplierTag> {
    let total_after = total_before.saturating_add(call);
    let mut tags = Vec::new();
    if is_last {
        if call == highest {
            tags.push(match total_after.cmp(&RISK_TOTAL) {
                std::cmp::Ordering::Equal => MultiplierTag::WithRisk,
                std::cmp::Ordering::Greater => MultiplierTag::WithDoubleRisk,
                std::cmp::Ordering::Less => MultiplierTag::With,
            });
        } else if call != 0 {
            tags.push(match total_after.cmp(&RISK_TOTAL) {
                std::cmp::Ordering::Equal => MultiplierTag::Risk,
                std::cmp::Ordering::Greater => MultiplierTag::DoubleRisk,
                std::cmp::Ordering::Less => MultiplierTag::Regular,
            });
        }
    } else if call == highest {
        tags.push(MultiplierTag::With);
    }
    if call == 0 {
        tags.push(MultiplierTag::NoCall);
    }
    if call >= DOUBLING_CALL {
        tags.push(MultiplierTag::EightOrMore);
    }
    tags
}

/// Record `who`'s call and advance to the next caller, or to play.
pub fn place_call(
    state: &mut GameState,
    who: PlayerId,
    call: u8,
) -> Result<CallResult, DomainError> {
    require_phase(state, Phase::Calling)?;
    require_turn(state, who)?;

    if call > MAX_ESTIMATE {
        return Err(DomainError::invalid(
            ValidationKind::InvalidEstimate,
            format!("call of {call} exceeds {MAX_ESTIMATE}"),
        ));
    }

    let is_last = state
        .round
        .calling
        .as_ref()
        .map(CallingPlan::is_last)
        .ok_or_else(|| DomainError::invariant("calling plan must be set in Calling"))?;
    let highest = state
        .round
        .highest_bid
        .map(|b| b.estimate)
        .ok_or_else(|| DomainError::invariant("highest bid must be set in Calling"))?;
    let total_before = state.round.total_asked;

    if is_last && forbidden_call(total_before) == Some(call) {
        return Err(DomainError::invalid(
            ValidationKind::ForbiddenCall,
            format!("call of {call} would make the estimates sum to 13"),
        ));
    }

    let tags = call_tags(call, highest, total_before, is_last);
    state.round.tags[who as usize].extend(tags.iter().copied());
    state.round.estimates[who as usize] = Some(call);
    state.round.total_asked = total_before.saturating_add(call);

    let next = state.round.calling.as_mut().and_then(|plan| {
        plan.cursor += 1;
        plan.current()
    });
    match next {
        Some(idx) => state.order_index = idx,
        None => {
            state.phase = Phase::Playing;
            state.order_index = 0;
            state.record.estimates = Some(std::array::from_fn(|i| {
                state.round.estimates[i].unwrap_or(0)
            }));
            debug!(
                total_asked = state.round.total_asked,
                estimates = ?state.round.estimates,
                "Calling complete"
            );
        }
    }

    Ok(CallResult {
        tags,
        total_after: state.round.total_asked,
        calling_complete: next.is_none(),
    })
}

/// Forbidden value advertised to the acting player, if any.
///
/// In Calling this is the last caller's forbidden call. In Bidding, 0 once
/// two dashes have been declared.
pub fn illegal_call(state: &GameState) -> Option<u8> {
    match state.phase {
        Phase::Calling => match &state.round.calling {
            Some(plan) if plan.is_last() => forbidden_call(state.round.total_asked),
            _ => None,
        },
        Phase::Bidding if state.round.dash_count() >= MAX_DASHES => Some(0),
        _ => None,
    }
}

/// Whether the acting player is the last caller.
pub fn is_last_call(state: &GameState) -> bool {
    state.phase == Phase::Calling
        && state
            .round
            .calling
            .as_ref()
            .is_some_and(CallingPlan::is_last)
}
