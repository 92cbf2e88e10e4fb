use thiserror::Error;

use crate::game::DeckError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Deck error: {0}")]
    Deck(#[from] DeckError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
