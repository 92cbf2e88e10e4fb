//! Hand and round construction helpers shared by the integration tests
#![allow(dead_code)] // Test utilities may not all be used in every test

use poker_hand_verifier::game::{deal_random_round, parse_round_line};
use poker_hand_verifier::Hand;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ============================================================================
// Card Creation Macro
// ============================================================================

#[macro_export]
macro_rules! cards {
    ($($rank:ident $suit:ident),* $(,)?) => {
        vec![$(poker_hand_verifier::Card::new(
            poker_hand_verifier::Rank::$rank,
            poker_hand_verifier::Suit::$suit,
        )),*]
    };
}

/// Parse a hand in the two-character card format, e.g. `"2C2D5H9SKC"`.
pub fn hand(s: &str) -> Hand {
    Hand::from_string(s).unwrap_or_else(|e| panic!("bad test hand {}: {}", s, e))
}

/// Deal `count` independent rounds from freshly shuffled decks.
pub fn sample_rounds(seed: u64, count: usize) -> Vec<(Hand, Hand)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| deal_random_round(&mut rng).expect("a fresh deck always deals a round"))
        .collect()
}

// ============================================================================
// Round Setup Utilities
// ============================================================================

pub struct RoundBuilder {
    first: Option<Hand>,
    second: Option<Hand>,
}

impl RoundBuilder {
    pub fn new() -> Self {
        Self {
            first: None,
            second: None,
        }
    }

    /// Both hands from one manual-entry line; panics on invalid input
    pub fn from_line(line: &str) -> Self {
        let (first, second) = parse_round_line(line).unwrap();
        Self {
            first: Some(first),
            second: Some(second),
        }
    }

    pub fn first(mut self, s: &str) -> Self {
        self.first = Some(hand(s));
        self
    }

    pub fn second(mut self, s: &str) -> Self {
        self.second = Some(hand(s));
        self
    }

    pub fn build(self) -> (Hand, Hand) {
        (
            self.first.expect("first hand not set"),
            self.second.expect("second hand not set"),
        )
    }
}

impl Default for RoundBuilder {
    fn default() -> Self {
        Self::new()
    }
}
