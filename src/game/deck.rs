use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;
use tracing::debug;

use crate::game::cards::{Card, Hand, HAND_SIZE};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("Deck exhausted: needed {needed} cards, {remaining} left")]
    Exhausted { needed: usize, remaining: usize },
}

/// A single 52-card deck shared by both hands of a round.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn standard() -> Self {
        Self {
            cards: Card::all_cards(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deal two hands one card at a time, alternating between them, and
    /// return both sorted.
    pub fn deal_round(&mut self) -> Result<(Hand, Hand), DeckError> {
        let needed = HAND_SIZE * 2;
        if self.cards.len() < needed {
            return Err(DeckError::Exhausted {
                needed,
                remaining: self.cards.len(),
            });
        }

        let dealt: Vec<Card> = self.cards.drain(..needed).collect();
        let first = Hand::new(std::array::from_fn(|i| dealt[i * 2]));
        let second = Hand::new(std::array::from_fn(|i| dealt[i * 2 + 1]));

        debug!(
            first = %first,
            second = %second,
            remaining = self.cards.len(),
            "Dealt round"
        );

        Ok((first.sorted(), second.sorted()))
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
