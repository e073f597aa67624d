//! Observation encoders: turn step metadata into what an agent consumes.
//!
//! [`FeatureEncoder`] produces the fixed 65-entry numeric vector:
//!
//! | index       | field                                                     |
//! |-------------|-----------------------------------------------------------|
//! | `0..52`     | status of card token i (see [`CardStatus`])               |
//! | `52`, `53`  | acting player's estimate and tricks won                   |
//! | `54..60`    | (estimate, tricks) of the other three, in turn order      |
//! | `60`        | table suit code, 4 when no card is on the table           |
//! | `61`        | trump suit code, 4 before bidding resolves                |
//! | `62`        | total tricks asked                                        |
//! | `63`        | completed tricks                                          |
//! | `64`        | acting player's index in the turn order                   |
//!
//! A missing estimate encodes as 0.

use crate::domain::player_view::StepInfo;
use crate::domain::rules::{DECK_SIZE, PLAYERS};
use crate::domain::{token_of, Card, Suit};
use crate::errors::{DomainError, ValidationKind};

pub const OBSERVATION_LEN: usize = 65;
pub const OWN_FIELDS: usize = DECK_SIZE;
pub const OTHERS_FIELDS: usize = OWN_FIELDS + 2;
pub const TABLE_SUIT_FIELD: usize = 60;
pub const TRUMP_FIELD: usize = 61;
pub const TOTAL_ASKED_FIELD: usize = 62;
pub const ROUND_FIELD: usize = 63;
pub const ORDER_FIELD: usize = 64;

/// Categorical code for "no suit".
pub const NO_SUIT: u8 = 4;

/// Converts step metadata into an observation.
pub trait ObservationEncoder {
    type Observation;

    fn encode(&self, info: &StepInfo) -> Self::Observation;
}

/// Card status from the acting player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStatus {
    /// In another player's hand, or undealt.
    Unseen = 0,
    InHand = 1,
    OnTable = 2,
    Played = 3,
}

/// A non-negative whole number that fits a `u8`; anything else is not a code.
fn integral_code(code: f32) -> Option<u8> {
    if code.fract() == 0.0 && (0.0..=f32::from(u8::MAX)).contains(&code) {
        Some(code as u8)
    } else {
        None
    }
}

impl CardStatus {
    pub fn from_code(code: f32) -> Option<Self> {
        match integral_code(code)? {
            0 => Some(CardStatus::Unseen),
            1 => Some(CardStatus::InHand),
            2 => Some(CardStatus::OnTable),
            3 => Some(CardStatus::Played),
            _ => None,
        }
    }
}

pub fn suit_code(suit: Option<Suit>) -> u8 {
    suit.map_or(NO_SUIT, Suit::index)
}

pub fn suit_from_code(code: f32) -> Option<Suit> {
    integral_code(code).and_then(Suit::from_index)
}

/// The 65-entry numeric encoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureEncoder;

impl ObservationEncoder for FeatureEncoder {
    type Observation = Vec<f32>;

    fn encode(&self, info: &StepInfo) -> Vec<f32> {
        let mut obs = vec![0.0; OBSERVATION_LEN];

        let mark = |obs: &mut Vec<f32>, card: &Card, status: CardStatus| {
            obs[token_of(*card) as usize] = status as u8 as f32;
        };
        for card in &info.current_player_cards {
            mark(&mut obs, card, CardStatus::InHand);
        }
        for (_, card) in &info.table {
            mark(&mut obs, card, CardStatus::OnTable);
        }
        for card in &info.played_cards {
            mark(&mut obs, card, CardStatus::Played);
        }

        let me = info.player_order[info.order_index % PLAYERS];
        let seats = std::iter::once(me).chain(info.others_in_order());
        for (slot, seat) in seats.enumerate() {
            let base = OWN_FIELDS + 2 * slot;
            obs[base] = f32::from(info.players_estimates[seat as usize].unwrap_or(0));
            obs[base + 1] = f32::from(info.tricks_won(seat));
        }

        obs[TABLE_SUIT_FIELD] = f32::from(suit_code(info.table_suit));
        obs[TRUMP_FIELD] = f32::from(suit_code(info.trump_suit));
        obs[TOTAL_ASKED_FIELD] = f32::from(info.total_asked);
        obs[ROUND_FIELD] = f32::from(info.round);
        obs[ORDER_FIELD] = info.order_index as f32;
        obs
    }
}

/// Hands the metadata itself to the agent.
#[derive(Debug, Clone, Copy, Default)]
pub struct InfoEncoder;

impl ObservationEncoder for InfoEncoder {
    type Observation = StepInfo;

    fn encode(&self, info: &StepInfo) -> StepInfo {
        info.clone()
    }
}

/// Read the card-status block back out of a feature vector.
pub fn decode_card_statuses(obs: &[f32]) -> Result<Vec<CardStatus>, DomainError> {
    if obs.len() != OBSERVATION_LEN {
        return Err(DomainError::invalid(
            ValidationKind::Other("observation".into()),
            format!("expected {OBSERVATION_LEN} entries, got {}", obs.len()),
        ));
    }
    obs[..DECK_SIZE]
        .iter()
        .enumerate()
        .map(|(token, &code)| {
            CardStatus::from_code(code).ok_or_else(|| {
                DomainError::invalid(
                    ValidationKind::Other("observation".into()),
                    format!("card {token} has unknown status {code}"),
                )
            })
        })
        .collect()
}
