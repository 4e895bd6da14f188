use super::Card;

/// Parsing of hardcoded card tokens for tests and scenario hands.
pub struct CardFixtures;

impl CardFixtures {
    /// Parse hardcoded tokens such as `["3S", "TD", "2H"]`.
    pub fn parse_hardcoded(tokens: &[&str]) -> Vec<Card> {
        tokens
            .iter()
            .map(|s| {
                #[allow(clippy::expect_used)]
                s.parse::<Card>().expect("hardcoded valid card token")
            })
            .collect()
    }

    pub fn card(token: &str) -> Card {
        #[allow(clippy::expect_used)]
        token.parse::<Card>().expect("hardcoded valid card token")
    }

    /// Hands for a list of seats.
    pub fn hands(seats: &[&[&str]]) -> Vec<Vec<Card>> {
        seats.iter().map(|t| Self::parse_hardcoded(t)).collect()
    }
}
