//! Domain layer: pure game logic types and helpers.

pub mod bidding;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod deck;
pub mod fixtures;
pub mod player_view;
pub mod round_record;
pub mod rules;
pub mod scoring;
pub mod seating;
pub mod state;
pub mod tags;
pub mod tricks;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_bidding;
#[cfg(test)]
mod tests_domain_dealing;
#[cfg(test)]
mod tests_props_tricks;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use bidding::{place_bid, place_call, resolve_highest_bid, select_highest_bid};
pub use cards_logic::{card_beats, hand_has_suit};
pub use cards_types::{Card, Rank, Suit};
pub use dealing::{deal_hands, deal_to_players, AcceptAll, HandReview, RejectShortSuited};
pub use deck::{card_of, token_of, Deck};
pub use player_view::StepInfo;
pub use round_record::{GameRecord, TrickRecord};
pub use seating::TurnOrder;
pub use state::{Bid, GameState, Phase, PlayerId};
pub use tags::MultiplierTag;
pub use tricks::{evaluate_winner, play_card, tail_sums_by_player, trick_tail_sums};
