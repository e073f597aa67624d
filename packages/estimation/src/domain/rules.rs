use std::ops::RangeInclusive;

pub const PLAYERS: usize = 4;
pub const HAND_SIZE: usize = 13;
pub const TRICKS_PER_ROUND: u8 = 13;
pub const DECK_SIZE: usize = 52;

pub const MAX_ESTIMATE: u8 = 13;
/// At most two players may dash in one round.
pub const MAX_DASHES: usize = 2;
/// The four final estimates may never sum to this.
pub const FORBIDDEN_TOTAL: u8 = 13;
/// Asked total at which the last caller takes a risk.
pub const RISK_TOTAL: u8 = 15;
/// A call of at least this many tricks doubles the caller's score.
pub const DOUBLING_CALL: u8 = 8;

pub const DEFAULT_MAX_REDEALS: u32 = 32;

pub fn valid_estimate_range() -> RangeInclusive<u8> {
    0..=MAX_ESTIMATE
}

/// The call the last caller may not make, given the asked total so far.
///
/// `None` once the total already exceeds 13, since no call can reach it.
pub fn forbidden_call(total_before: u8) -> Option<u8> {
    FORBIDDEN_TOTAL.checked_sub(total_before)
}
