// A round is two five-card hands drawn from one deck. This module produces
// them, either from a fresh shuffled deck or from a manually entered line,
// and is where cards shared between the two hands are rejected.

use std::collections::HashSet;

use rand::Rng;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::game::cards::{Card, Hand, HAND_SIZE};
use crate::game::deck::{Deck, DeckError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please input two hands separated by a space.")]
    WrongShape,
    #[error("Invalid characters for card detected: {0}")]
    InvalidCard(String),
    #[error("Duplicate card detected: {0}")]
    DuplicateCard(Card),
}

/// Shuffle a fresh deck and deal both hands from it.
pub fn deal_random_round<R: Rng + ?Sized>(rng: &mut R) -> Result<(Hand, Hand), DeckError> {
    let mut deck = Deck::standard();
    deck.shuffle(rng);
    deck.deal_round()
}

/// Parse a line such as `2C2D5H9SKC 3C3D4H8SKD` into two sorted hands.
#[instrument]
pub fn parse_round_line(line: &str) -> Result<(Hand, Hand), InputError> {
    let line = line.trim();
    let hand_width = HAND_SIZE * 2;

    let mut parts = line.split(' ');
    let (Some(first), Some(second), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(InputError::WrongShape);
    };
    if !line.is_ascii() || first.len() != hand_width || second.len() != hand_width {
        return Err(InputError::WrongShape);
    }

    let first = parse_hand(first)?;
    let second = parse_hand(second)?;

    let mut seen = HashSet::with_capacity(HAND_SIZE * 2);
    for card in first.cards().iter().chain(second.cards()) {
        if !seen.insert(*card) {
            debug!(card = %card, "Rejected duplicate card");
            return Err(InputError::DuplicateCard(*card));
        }
    }

    Ok((first.sorted(), second.sorted()))
}

/// Expects ten ASCII characters.
fn parse_hand(s: &str) -> Result<Hand, InputError> {
    let cards = (0..HAND_SIZE)
        .map(|i| {
            let text = &s[i * 2..i * 2 + 2];
            Card::from_string(text).map_err(|_| InputError::InvalidCard(text.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Hand::from_cards(&cards).map_err(|_| InputError::WrongShape)
}
