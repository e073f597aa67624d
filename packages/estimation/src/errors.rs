//! Engine-level error types.
//!
//! `DomainError` is the single error surfaced by rule operations and by the
//! step-driven environment. Illegal actions are reported as
//! [`DomainError::InvalidAction`] and are never silently coerced; the remaining
//! variants describe states a correct caller cannot reach.

use thiserror::Error;

/// Why an action was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    ParseCard,
    InvalidToken,
    CardNotInHand,
    MustFollowSuit,
    InvalidEstimate,
    TooManyDashes,
    ForbiddenCall,
    OutOfTurn,
    PhaseMismatch,
    GameOver,
    InvalidHands,
    Other(String),
}

/// Central engine error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The acting player supplied an action the rules do not allow.
    #[error("invalid action ({kind:?}): {detail}")]
    InvalidAction { kind: ValidationKind, detail: String },

    /// More cards were dealt than the deck holds.
    #[error("deck is empty")]
    EmptyDeck,

    /// Forced re-deals did not settle within the configured cap.
    #[error("re-deal limit reached after {attempts} deals")]
    RedealLimit { attempts: u32 },

    /// Internal bookkeeping no longer matches the rules.
    #[error("invariant violated: {0}")]
    Invariant(String),
}

impl DomainError {
    pub fn invalid(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::InvalidAction {
            kind,
            detail: detail.into(),
        }
    }

    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::Invariant(detail.into())
    }

    /// The validation kind, when this is a rejected action.
    pub fn kind(&self) -> Option<&ValidationKind> {
        match self {
            DomainError::InvalidAction { kind, .. } => Some(kind),
            _ => None,
        }
    }
}
