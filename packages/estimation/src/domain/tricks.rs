use tracing::debug;

use crate::domain::round_record::TrickRecord;
use crate::domain::rules::{PLAYERS, TRICKS_PER_ROUND};
use crate::domain::scoring::finish_round;
use crate::domain::state::{require_phase, require_trump, require_turn, GameState, Phase, PlayerId};
use crate::domain::{hand_has_suit, Card, Suit};
use crate::errors::{DomainError, ValidationKind};

/// Result of playing a card, describing what state changes occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayCardResult {
    /// Whether a trick was completed (4 cards played).
    pub trick_completed: bool,
    /// Winner of the completed trick, if one was completed.
    pub trick_winner: Option<PlayerId>,
    /// Completed tricks after this play.
    pub trick_no_after: u8,
    /// True when this play finished the round.
    pub round_finished: bool,
}

/// Compute legal cards the player may play, independent of turn enforcement.
pub fn legal_moves(state: &GameState, who: PlayerId) -> Vec<Card> {
    if state.phase != Phase::Playing {
        return Vec::new();
    }
    let mut legal = legal_from_hand(&state.hands[who as usize], state.round.table_suit);
    legal.sort();
    legal
}

/// Follow-suit filter: table-suit cards if the hand holds any, else the whole hand.
pub fn legal_from_hand(hand: &[Card], table_suit: Option<Suit>) -> Vec<Card> {
    match table_suit {
        Some(lead) if hand_has_suit(hand, lead) => {
            hand.iter().copied().filter(|c| c.suit == lead).collect()
        }
        _ => hand.to_vec(),
    }
}

/// Winner of a trick.
///
/// When any trump is on the table only trump cards are eligible, otherwise only
/// table-suit cards are. The highest eligible rank wins.
pub fn evaluate_winner(
    table: &[(PlayerId, Card)],
    trump: Suit,
    table_suit: Suit,
) -> Option<PlayerId> {
    let eligible = if table.iter().any(|(_, c)| c.suit == trump) {
        trump
    } else {
        table_suit
    };
    table
        .iter()
        .filter(|(_, c)| c.suit == eligible)
        .max_by_key(|(_, c)| c.rank)
        .map(|&(p, _)| p)
}

/// Play a card into the current trick, enforcing turn, suit-following, and phase.
pub fn play_card(
    state: &mut GameState,
    who: PlayerId,
    card: Card,
) -> Result<PlayCardResult, DomainError> {
    require_phase(state, Phase::Playing)?;
    require_turn(state, who)?;

    let Some(pos) = state.hands[who as usize].iter().position(|&c| c == card) else {
        return Err(DomainError::invalid(
            ValidationKind::CardNotInHand,
            format!("{card} is not in player {who}'s hand"),
        ));
    };

    if !legal_from_hand(&state.hands[who as usize], state.round.table_suit).contains(&card) {
        return Err(DomainError::invalid(
            ValidationKind::MustFollowSuit,
            format!("player {who} must follow suit"),
        ));
    }

    if state.round.table.is_empty() {
        state.round.table_suit = Some(card.suit);
    }
    let removed = state.hands[who as usize].remove(pos);
    state.round.table.push((who, removed));

    if state.round.table.len() < PLAYERS {
        state.order_index += 1;
        return Ok(PlayCardResult {
            trick_completed: false,
            trick_winner: None,
            trick_no_after: state.trick_no,
            round_finished: false,
        });
    }

    let winner = collect_trick(state)?;
    let mut result = PlayCardResult {
        trick_completed: true,
        trick_winner: Some(winner),
        trick_no_after: state.trick_no,
        round_finished: false,
    };

    if state.trick_no >= TRICKS_PER_ROUND {
        finish_round(state)?;
        result.round_finished = true;
    }
    Ok(result)
}

/// Resolve the full table: flag the winner, seat them first, move the cards
/// to the played pile, and record the trick.
fn collect_trick(state: &mut GameState) -> Result<PlayerId, DomainError> {
    let trump = require_trump(state, "collect_trick")?;
    let table_suit = state
        .round
        .table_suit
        .ok_or_else(|| DomainError::invariant("table suit must be set on a full table"))?;
    let winner = evaluate_winner(&state.round.table, trump, table_suit)
        .ok_or_else(|| DomainError::invariant("a full table always has a winner"))?;

    for p in 0..PLAYERS {
        state.round.tricks[p].push(u8::from(p == winner as usize));
    }

    let order_played = state.order.seats();
    state.order.rotate_to(winner)?;
    let plays = std::mem::take(&mut state.round.table);
    state.round.played.extend(plays.iter().map(|&(_, c)| c));
    state.round.table_suit = None;
    state.order_index = 0;
    state.trick_no += 1;

    let tricks_after = state.round.tricks_won_all();
    debug!(
        trick_no = state.trick_no,
        winner,
        tricks = ?tricks_after,
        "Trick resolved"
    );
    state.record.tricks.push(TrickRecord {
        trick_no: state.trick_no,
        order: order_played,
        plays,
        table_suit,
        winner,
        tricks_after,
    });
    Ok(winner)
}

/// For each step i, the tricks won from trick i through the last trick.
pub fn trick_tail_sums(flags: &[u8]) -> Vec<u8> {
    let mut sums = vec![0u8; flags.len()];
    let mut acc = 0u8;
    for (i, &f) in flags.iter().enumerate().rev() {
        acc += f;
        sums[i] = acc;
    }
    sums
}

/// `trick_tail_sums` for every seat.
pub fn tail_sums_by_player(state: &GameState) -> [Vec<u8>; PLAYERS] {
    std::array::from_fn(|p| trick_tail_sums(&state.round.tricks[p]))
}
