//! Legal-action filtering over raw agent scores.
//!
//! An agent that scores every option (52 cards, 14 call values, 4 trumps) can
//! pass those scores through [`process_action`] to zero out illegal entries
//! before choosing. If nothing legal keeps a positive score, every legal entry
//! gets [`FALLBACK_SCORE`] so a choice always exists.

use crate::domain::player_view::StepInfo;
use crate::domain::rules::{DECK_SIZE, MAX_ESTIMATE};
use crate::domain::state::Phase;
use crate::domain::{token_of, Suit};
use crate::env::Action;
use crate::errors::{DomainError, ValidationKind};

pub const CALL_OPTIONS: usize = MAX_ESTIMATE as usize + 1;
pub const FALLBACK_SCORE: f32 = 1.0;

/// Raw per-option scores from an agent.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionScores {
    /// One entry per card token.
    pub cards: Vec<f32>,
    /// One entry per call value 0..=13.
    pub calls: Vec<f32>,
    /// One entry per suit, Clubs..Spades.
    pub trumps: Vec<f32>,
}

impl ActionScores {
    pub fn uniform() -> Self {
        Self {
            cards: vec![1.0; DECK_SIZE],
            calls: vec![1.0; CALL_OPTIONS],
            trumps: vec![1.0; Suit::ALL.len()],
        }
    }

    /// Highest-scoring action for the phase, lowest index on ties.
    pub fn best_action(&self, phase: Phase) -> Option<Action> {
        match phase {
            Phase::Bidding => {
                let estimate = argmax(&self.calls)? as u8;
                let trump = Suit::from_index(argmax(&self.trumps)? as u8)?;
                Some(Action::bid(estimate, trump))
            }
            Phase::Calling => Some(Action::call(argmax(&self.calls)? as u8)),
            Phase::Playing => Some(Action::play(argmax(&self.cards)? as u8)),
            Phase::Finished => None,
        }
    }
}

fn argmax(scores: &[f32]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, &s) in scores.iter().enumerate() {
        match best {
            Some((_, b)) if s <= b => {}
            _ => best = Some((i, s)),
        }
    }
    best.map(|(i, _)| i)
}

fn require_len(scores: &[f32], expected: usize, what: &str) -> Result<(), DomainError> {
    if scores.len() != expected {
        return Err(DomainError::invalid(
            ValidationKind::Other("action scores".into()),
            format!("{what} scores need {expected} entries, got {}", scores.len()),
        ));
    }
    Ok(())
}

/// Zero out every entry whose `legal` flag is false, with the positive fallback.
fn apply_mask(scores: &mut [f32], legal: &[bool]) {
    for (s, &ok) in scores.iter_mut().zip(legal) {
        if !ok {
            *s = 0.0;
        }
    }
    let any_positive = scores.iter().zip(legal).any(|(&s, &ok)| ok && s > 0.0);
    if !any_positive {
        for (s, &ok) in scores.iter_mut().zip(legal) {
            if ok {
                *s = FALLBACK_SCORE;
            }
        }
    }
}

/// Keep only cards the acting player may play.
pub fn filter_legal_cards(scores: &mut [f32], info: &StepInfo) -> Result<(), DomainError> {
    require_len(scores, DECK_SIZE, "card")?;
    let legal_plays = info.legal_plays();
    let mut legal = vec![false; DECK_SIZE];
    for card in legal_plays {
        legal[token_of(card) as usize] = true;
    }
    apply_mask(scores, &legal);
    Ok(())
}

/// Drop the advertised `illegal_call` value, if any.
pub fn filter_legal_calls(scores: &mut [f32], info: &StepInfo) -> Result<(), DomainError> {
    require_len(scores, CALL_OPTIONS, "call")?;
    let legal: Vec<bool> = (0..CALL_OPTIONS)
        .map(|c| info.illegal_call != Some(c as u8))
        .collect();
    apply_mask(scores, &legal);
    Ok(())
}

/// Filter the scores relevant to the current phase.
pub fn process_action(
    mut scores: ActionScores,
    info: &StepInfo,
) -> Result<ActionScores, DomainError> {
    match info.phase {
        Phase::Bidding | Phase::Calling => filter_legal_calls(&mut scores.calls, info)?,
        Phase::Playing => filter_legal_cards(&mut scores.cards, info)?,
        Phase::Finished => {}
    }
    Ok(scores)
}
