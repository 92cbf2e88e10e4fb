use super::basic::{Card, Rank};
use super::category::Category;
use super::hands::{Hand, HandError, HAND_SIZE};

/// What a hand is, and the ranks that decide it against a hand of the same
/// category. `tie_break` is compared lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Classification {
    pub category: Category,
    pub tie_break: Vec<Rank>,
    /// Cards forming the primary grouping, ascending by rank.
    pub cards: Vec<Card>,
}

/// A run of equal ranks in a sorted hand.
#[derive(Debug, Clone)]
struct RankGroup {
    rank: Rank,
    count: usize,
}

/// Classify a hand. The hand is sorted first, so any card order is accepted.
pub fn classify(hand: &Hand) -> Classification {
    classify_sorted(&hand.sorted())
}

/// Classify a slice of cards, rejecting anything that is not exactly five cards.
pub fn classify_cards(cards: &[Card]) -> Result<Classification, HandError> {
    Hand::from_cards(cards).map(|hand| classify(&hand))
}

fn classify_sorted(hand: &Hand) -> Classification {
    debug_assert!(hand.is_sorted());
    let cards = hand.cards();
    let is_straight = is_straight(cards);
    let is_flush = is_flush(cards);
    let top = cards[HAND_SIZE - 1].rank;

    if is_straight && is_flush {
        let category = if top == Rank::Ace {
            Category::RoyalFlush
        } else {
            Category::StraightFlush
        };
        return Classification {
            category,
            tie_break: vec![top],
            cards: cards.to_vec(),
        };
    }

    if is_flush {
        return Classification {
            category: Category::Flush,
            tie_break: cards.iter().rev().map(|card| card.rank).collect(),
            cards: cards.to_vec(),
        };
    }

    if is_straight {
        // Consecutive ranks, so the top card alone orders straights
        return Classification {
            category: Category::Straight,
            tie_break: vec![top],
            cards: cards.to_vec(),
        };
    }

    let groups = group_ranks(cards);
    let pattern: Vec<usize> = groups.iter().map(|group| group.count).collect();
    let tie_break: Vec<Rank> = groups.iter().map(|group| group.rank).collect();

    let category = match pattern.as_slice() {
        [4, 1] => Category::FourOfAKind,
        [3, 2] => Category::FullHouse,
        [3, 1, 1] => Category::ThreeOfAKind,
        [2, 2, 1] => Category::TwoPair,
        [2, 1, 1, 1] => Category::OnePair,
        // [1, 1, 1, 1, 1]; five of one rank cannot come from a standard deck
        _ => Category::HighCard,
    };

    let primary_cards = match category {
        Category::FullHouse => cards.to_vec(),
        Category::HighCard => vec![cards[HAND_SIZE - 1]],
        _ => {
            let grouped: Vec<Rank> = groups
                .iter()
                .filter(|group| group.count > 1)
                .map(|group| group.rank)
                .collect();
            cards
                .iter()
                .filter(|card| grouped.contains(&card.rank))
                .copied()
                .collect()
        }
    };

    Classification {
        category,
        tie_break,
        cards: primary_cards,
    }
}

fn is_straight(cards: &[Card]) -> bool {
    cards
        .windows(2)
        .all(|pair| pair[1].rank.is_successor_of(pair[0].rank))
}

fn is_flush(cards: &[Card]) -> bool {
    cards.iter().all(|card| card.suit == cards[0].suit)
}

/// Collapse adjacent equal ranks, then order by group size and rank, both
/// descending. Requires `cards` sorted by rank.
fn group_ranks(cards: &[Card]) -> Vec<RankGroup> {
    let mut groups: Vec<RankGroup> = Vec::with_capacity(HAND_SIZE);
    for card in cards {
        match groups.last_mut() {
            Some(group) if group.rank == card.rank => group.count += 1,
            _ => groups.push(RankGroup {
                rank: card.rank,
                count: 1,
            }),
        }
    }

    groups.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| b.rank.cmp(&a.rank)));
    groups
}
