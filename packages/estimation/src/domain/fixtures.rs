use super::Card;

/// Helper for parsing hardcoded card tokens in fixtures and scripted scenarios.
pub struct CardFixtures;

impl CardFixtures {
    /// Parse hardcoded card tokens (e.g. `["AS", "2C", "TH"]`) into cards.
    ///
    /// Only for literals known to be valid; use
    /// [`try_parse_cards`](super::cards_parsing::try_parse_cards) for input.
    pub fn parse_hardcoded(tokens: &[&str]) -> Vec<Card> {
        tokens
            .iter()
            .map(|s| {
                #[allow(clippy::expect_used)]
                s.parse::<Card>().expect("hardcoded valid card token")
            })
            .collect()
    }

    /// Parse one hardcoded card token.
    pub fn card(token: &str) -> Card {
        #[allow(clippy::expect_used)]
        token.parse::<Card>().expect("hardcoded valid card token")
    }
}
