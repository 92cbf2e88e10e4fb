// Library crate for the poker hand verifier
// The core engine lives in `game`; `console` and `config` drive it interactively.

pub mod config;
pub mod console;
pub mod game;
pub mod shared;

// Re-export commonly used types for easier access in tests
pub use config::{OutputFormat, VerifierConfig};
pub use console::Console;
pub use game::{
    classify, judge, Card, Category, Classification, Hand, Rank, RoundOutcome, Suit, Verdict,
};
pub use shared::AppError;
