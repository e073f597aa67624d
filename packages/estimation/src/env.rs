//! Step-driven environment: reset to deal a round, step one action at a time.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::domain::bidding::{place_bid, place_call};
use crate::domain::dealing::{deal_to_players, AcceptAll, HandReview, RejectShortSuited};
use crate::domain::deck::Deck;
use crate::domain::player_view::StepInfo;
use crate::domain::round_record::GameRecord;
use crate::domain::rules::{HAND_SIZE, PLAYERS};
use crate::domain::state::{Bid, GameState, Phase, PlayerId};
use crate::domain::tricks::play_card;
use crate::domain::{card_of, Card, Suit};
use crate::encoding::{FeatureEncoder, ObservationEncoder};
use crate::errors::{DomainError, ValidationKind};

/// One player's action. Only the component relevant to the phase is read:
/// `(call, trump)` while bidding, `call` while calling, `card` while playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// Card token in `[0, 52)`.
    pub card: u8,
    /// Bid or call estimate.
    pub call: u8,
    pub trump: Suit,
}

impl Action {
    pub fn bid(estimate: u8, trump: Suit) -> Self {
        Self {
            card: 0,
            call: estimate,
            trump,
        }
    }

    pub fn call(call: u8) -> Self {
        Self {
            card: 0,
            call,
            trump: Suit::Clubs,
        }
    }

    pub fn play(token: u8) -> Self {
        Self {
            card: token,
            call: 0,
            trump: Suit::Clubs,
        }
    }
}

/// The Estimation environment.
///
/// Owns one round at a time. Scores carry across [`reset`](Self::reset)s into
/// a session scoreboard; a round abandoned before finishing adds nothing.
pub struct Estimation<E: ObservationEncoder = FeatureEncoder> {
    config: EngineConfig,
    encoder: E,
    review: Box<dyn HandReview>,
    rng: ChaCha8Rng,
    state: Option<GameState>,
    scores_total: [i32; PLAYERS],
    round_scores: Vec<[i32; PLAYERS]>,
    rounds_dealt: u32,
}

impl Estimation<FeatureEncoder> {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_encoder(config, FeatureEncoder)
    }
}

impl<E: ObservationEncoder> Estimation<E> {
    pub fn with_encoder(config: EngineConfig, encoder: E) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };
        let review: Box<dyn HandReview> = if config.redeal_short_suited {
            Box::new(RejectShortSuited)
        } else {
            Box::new(AcceptAll)
        };
        Self {
            config,
            encoder,
            review,
            rng,
            state: None,
            scores_total: [0; PLAYERS],
            round_scores: Vec::new(),
            rounds_dealt: 0,
        }
    }

    /// Replace the hand review consulted for short-suited hands.
    pub fn with_hand_review(mut self, review: impl HandReview + 'static) -> Self {
        self.review = Box::new(review);
        self
    }

    /// Shuffle, deal, and start a round in Bidding.
    pub fn reset(&mut self) -> Result<(E::Observation, StepInfo), DomainError> {
        let deal = deal_to_players(&mut self.rng, self.review.as_ref(), self.config.max_redeals)?;
        let first = if self.config.rotate_first_bidder {
            (self.rounds_dealt % PLAYERS as u32) as PlayerId
        } else {
            0
        };
        info!(
            round = self.rounds_dealt + 1,
            first_bidder = first,
            deals = deal.attempts,
            "Round dealt"
        );
        self.start(deal.hands, deal.deck, first)
    }

    /// Start a round from fixed hands, seat 0 bidding first.
    ///
    /// The hands must be four disjoint 13-card hands covering the deck.
    pub fn reset_with_hands(
        &mut self,
        hands: [Vec<Card>; PLAYERS],
    ) -> Result<(E::Observation, StepInfo), DomainError> {
        validate_hands(&hands)?;
        let mut deck = Deck::new();
        while !deck.is_empty() {
            deck.deal_one()?;
        }
        debug!("Round started from fixed hands");
        self.start(hands, deck, 0)
    }

    fn start(
        &mut self,
        hands: [Vec<Card>; PLAYERS],
        deck: Deck,
        first: PlayerId,
    ) -> Result<(E::Observation, StepInfo), DomainError> {
        self.rounds_dealt += 1;
        self.state = Some(GameState::new(hands, deck, first, self.scores_total));
        self.observe()
    }

    /// Apply one action for the acting player.
    ///
    /// Returns the next observation, whether the round is done, and metadata.
    /// Illegal actions are rejected and leave the round unchanged.
    pub fn step(
        &mut self,
        action: Action,
    ) -> Result<(E::Observation, bool, StepInfo), DomainError> {
        let state = self.state.as_mut().ok_or_else(|| {
            DomainError::invalid(ValidationKind::PhaseMismatch, "reset before stepping")
        })?;
        let who = state.current_player().ok_or_else(|| {
            DomainError::invalid(ValidationKind::GameOver, "round is finished")
        })?;

        match state.phase {
            Phase::Bidding => {
                place_bid(state, who, Bid::new(action.call, action.trump))?;
            }
            Phase::Calling => {
                place_call(state, who, action.call)?;
            }
            Phase::Playing => {
                let card = card_of(action.card)?;
                let result = play_card(state, who, card)?;
                if result.round_finished {
                    self.scores_total = state.scores_total;
                    if let Some(scores) = state.round.scores {
                        self.round_scores.push(scores);
                    }
                }
            }
            Phase::Finished => {
                return Err(DomainError::invalid(
                    ValidationKind::GameOver,
                    "round is finished",
                ))
            }
        }

        let (obs, info) = self.observe()?;
        Ok((obs, info.done, info))
    }

    fn observe(&self) -> Result<(E::Observation, StepInfo), DomainError> {
        let info = self.info()?;
        Ok((self.encoder.encode(&info), info))
    }

    /// Metadata for the current round.
    pub fn info(&self) -> Result<StepInfo, DomainError> {
        self.state
            .as_ref()
            .map(StepInfo::from_state)
            .ok_or_else(|| DomainError::invalid(ValidationKind::PhaseMismatch, "no round dealt"))
    }

    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    pub fn record(&self) -> Option<&GameRecord> {
        self.state.as_ref().map(|s| &s.record)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Session scoreboard over finished rounds.
    pub fn scores_total(&self) -> [i32; PLAYERS] {
        self.scores_total
    }

    /// Terminal scores of every finished round, oldest first.
    pub fn round_scores(&self) -> &[[i32; PLAYERS]] {
        &self.round_scores
    }

    pub fn rounds_dealt(&self) -> u32 {
        self.rounds_dealt
    }
}

fn validate_hands(hands: &[Vec<Card>; PLAYERS]) -> Result<(), DomainError> {
    let mut seen = HashSet::new();
    for (seat, hand) in hands.iter().enumerate() {
        if hand.len() != HAND_SIZE {
            return Err(DomainError::invalid(
                ValidationKind::InvalidHands,
                format!("seat {seat} holds {} cards, expected {HAND_SIZE}", hand.len()),
            ));
        }
        for card in hand {
            if !seen.insert(*card) {
                return Err(DomainError::invalid(
                    ValidationKind::InvalidHands,
                    format!("{card} is dealt twice"),
                ));
            }
        }
    }
    Ok(())
}
