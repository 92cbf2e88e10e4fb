use std::fmt;

use thiserror::Error;

use super::basic::Card;

pub const HAND_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandError {
    #[error("A hand must contain exactly 5 cards, got {found}")]
    InvalidHandShape { found: usize },
    #[error("Invalid card: {0}")]
    InvalidCard(String),
}

/// Exactly five cards in the order they were supplied.
///
/// Duplicate cards within a hand are not detected here. Callers building
/// hands from user input are expected to reject them first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    pub fn new(cards: [Card; HAND_SIZE]) -> Self {
        Self { cards }
    }

    pub fn from_cards(cards: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; HAND_SIZE] = cards
            .try_into()
            .map_err(|_| HandError::InvalidHandShape { found: cards.len() })?;
        Ok(Self::new(cards))
    }

    /// Parses five concatenated two-character cards, e.g. `"2C2D5H9SKC"`.
    pub fn from_string(s: &str) -> Result<Self, HandError> {
        if !s.is_ascii() {
            return Err(HandError::InvalidCard(s.to_string()));
        }
        if s.len() % 2 == 1 {
            return Err(HandError::InvalidCard(s[s.len() - 1..].to_string()));
        }
        if s.len() != HAND_SIZE * 2 {
            return Err(HandError::InvalidHandShape { found: s.len() / 2 });
        }

        let cards = (0..HAND_SIZE)
            .map(|i| Card::from_string(&s[i * 2..i * 2 + 2]))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_cards(&cards)
    }

    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// Returns the same cards ordered by ascending rank.
    ///
    /// The sort is stable, so cards of equal rank keep their input order.
    pub fn sorted(&self) -> Hand {
        let mut cards = self.cards;
        cards.sort_by_key(|card| card.rank);
        Hand { cards }
    }

    pub fn is_sorted(&self) -> bool {
        self.cards.windows(2).all(|pair| pair[0].rank <= pair[1].rank)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}
