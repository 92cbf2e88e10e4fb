// Public API
pub use cards::{
    classify, classify_cards, Card, Category, Classification, Hand, HandError, Rank, Suit,
    HAND_SIZE,
};
pub use deck::{Deck, DeckError};
pub use judge::{judge, judge_cards, resolve_tie, RoundOutcome, Verdict};
pub use round::{deal_random_round, parse_round_line, InputError};

pub mod cards;
pub mod deck;
pub mod judge;
pub mod round;
