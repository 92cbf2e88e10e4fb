use std::cmp::Ordering;
use std::fmt;

use tracing::debug;

use crate::game::cards::{classify, Card, Category, Classification, Hand, HandError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Verdict {
    PlayerA,
    PlayerB,
    Tie,
}

impl Verdict {
    /// The verdict seen from the other seat.
    pub fn swapped(self) -> Self {
        match self {
            Verdict::PlayerA => Verdict::PlayerB,
            Verdict::PlayerB => Verdict::PlayerA,
            Verdict::Tie => Verdict::Tie,
        }
    }

    fn from_ordering(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => Verdict::PlayerA,
            Ordering::Less => Verdict::PlayerB,
            Ordering::Equal => Verdict::Tie,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Verdict::PlayerA => "Player A wins",
                Verdict::PlayerB => "Player B wins",
                Verdict::Tie => "Tie",
            }
        )
    }
}

/// Result of one round. `category` is the winning category, or the shared
/// category when the round is tied.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RoundOutcome {
    pub verdict: Verdict,
    pub category: Category,
    pub player_a: Classification,
    pub player_b: Classification,
}

/// Compare two classifications of the same category by their tie-break keys.
pub fn resolve_tie(a: &Classification, b: &Classification) -> Verdict {
    debug_assert_eq!(a.category, b.category);
    Verdict::from_ordering(a.tie_break.cmp(&b.tie_break))
}

/// Decide a round between two hands. Stateless: every call stands alone.
pub fn judge(hand_a: &Hand, hand_b: &Hand) -> RoundOutcome {
    let player_a = classify(hand_a);
    let player_b = classify(hand_b);

    let verdict = match player_a.category.cmp(&player_b.category) {
        Ordering::Equal => resolve_tie(&player_a, &player_b),
        other => Verdict::from_ordering(other),
    };

    let category = match verdict {
        Verdict::PlayerB => player_b.category,
        Verdict::PlayerA | Verdict::Tie => player_a.category,
    };

    debug!(
        hand_a = %hand_a,
        hand_b = %hand_b,
        category_a = %player_a.category,
        category_b = %player_b.category,
        verdict = %verdict,
        "Judged round"
    );

    RoundOutcome {
        verdict,
        category,
        player_a,
        player_b,
    }
}

/// Like [`judge`], but checks that both card slices hold exactly five cards.
pub fn judge_cards(cards_a: &[Card], cards_b: &[Card]) -> Result<RoundOutcome, HandError> {
    let hand_a = Hand::from_cards(cards_a)?;
    let hand_b = Hand::from_cards(cards_b)?;
    Ok(judge(&hand_a, &hand_b))
}
