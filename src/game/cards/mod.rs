pub mod basic;
pub mod category;
pub mod classify;
pub mod hands;


pub use basic::{Card, Rank, Suit};
pub use category::Category;
pub use classify::{classify, classify_cards, Classification};
pub use hands::{Hand, HandError, HAND_SIZE};
