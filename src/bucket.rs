use std::fmt;

use crate::cards::Card;
use crate::hand_evaluator::{HandCategory, HandResult};

/// Draw potential credited to a four-flush.
pub const FLUSH_DRAW_POTENTIAL: f64 = 0.6;
/// Draw potential of everything else.
pub const BASE_POTENTIAL: f64 = 0.1;
/// Minimum potential for a hand to count as a strong draw.
pub const STRONG_DRAW_THRESHOLD: f64 = 0.4;

/// Discretized hand strength, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandBucket {
    Trash = 0,
    WeakDraw = 1,
    StrongDraw = 2,
    MarginalMade = 3,
    StrongMade = 4,
    Monster = 5,
}

pub const ALL_BUCKETS: [HandBucket; 6] = [
    HandBucket::Trash,
    HandBucket::WeakDraw,
    HandBucket::StrongDraw,
    HandBucket::MarginalMade,
    HandBucket::StrongMade,
    HandBucket::Monster,
];

impl HandBucket {
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Coarse win probability: ordinal / 6.
    pub fn win_probability(self) -> f64 {
        self.ordinal() as f64 / ALL_BUCKETS.len() as f64
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HandBucket::Trash => "Trash",
            HandBucket::WeakDraw => "WeakDraw",
            HandBucket::StrongDraw => "StrongDraw",
            HandBucket::MarginalMade => "MarginalMade",
            HandBucket::StrongMade => "StrongMade",
            HandBucket::Monster => "Monster",
        }
    }

    pub fn from_name(name: &str) -> Option<HandBucket> {
        ALL_BUCKETS
            .iter()
            .copied()
            .find(|b| b.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for HandBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Largest number of cards sharing a suit among hole and community cards.
pub fn max_suit_count(hole_cards: &[Card], community: &[Card]) -> usize {
    let mut counts = [0usize; 4];
    for c in hole_cards.iter().chain(community) {
        counts[c.suit.index()] += 1;
    }
    counts.into_iter().max().unwrap_or(0)
}

/// Flush-draw heuristic, not an equity calculation.
pub fn draw_potential(hole_cards: &[Card], community: &[Card]) -> f64 {
    if max_suit_count(hole_cards, community) >= 4 {
        FLUSH_DRAW_POTENTIAL
    } else {
        BASE_POTENTIAL
    }
}

pub fn bucketize(hole_cards: &[Card], community: &[Card], hand: &HandResult) -> HandBucket {
    match hand.category {
        c if c >= HandCategory::FullHouse => HandBucket::Monster,
        c if c >= HandCategory::ThreeOfAKind => HandBucket::StrongMade,
        c if c >= HandCategory::OnePair => HandBucket::MarginalMade,
        _ => {
            if draw_potential(hole_cards, community) >= STRONG_DRAW_THRESHOLD {
                HandBucket::StrongDraw
            } else {
                HandBucket::Trash
            }
        }
    }
}
