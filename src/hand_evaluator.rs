use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

use itertools::Itertools;

use crate::cards::Card;
use crate::error::{AgentError, AgentResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl HandCategory {
    /// Strongest category; the denominator of the river equity proxy.
    pub const MAX: HandCategory = HandCategory::RoyalFlush;

    pub fn ordinal(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandCategory::HighCard => write!(f, "High Card"),
            HandCategory::OnePair => write!(f, "One Pair"),
            HandCategory::TwoPair => write!(f, "Two Pair"),
            HandCategory::ThreeOfAKind => write!(f, "Three of a Kind"),
            HandCategory::Straight => write!(f, "Straight"),
            HandCategory::Flush => write!(f, "Flush"),
            HandCategory::FullHouse => write!(f, "Full House"),
            HandCategory::FourOfAKind => write!(f, "Four of a Kind"),
            HandCategory::StraightFlush => write!(f, "Straight Flush"),
            HandCategory::RoyalFlush => write!(f, "Royal Flush"),
        }
    }
}

/// Best five-card hand found in a card set. The decision core only reads
/// `category`; `kickers` break ties between equal categories.
#[derive(Debug, Clone)]
pub struct HandResult {
    pub category: HandCategory,
    pub kickers: Vec<u8>,
    pub cards: Vec<Card>,
}

impl HandResult {
    pub fn new(category: HandCategory, kickers: Vec<u8>, cards: Vec<Card>) -> Self {
        HandResult {
            category,
            kickers,
            cards,
        }
    }

    /// A result carrying only a category, for callers that rank hands elsewhere.
    pub fn from_category(category: HandCategory) -> Self {
        HandResult::new(category, Vec::new(), Vec::new())
    }
}

impl fmt::Display for HandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)
    }
}

impl PartialEq for HandResult {
    fn eq(&self, other: &Self) -> bool {
        self.category == other.category && self.kickers == other.kickers
    }
}

impl Eq for HandResult {}

impl PartialOrd for HandResult {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandResult {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| self.kickers.cmp(&other.kickers))
    }
}

/// Ranks a 5-7 card combination. The engine takes one of these so the
/// orchestrator can plug in a faster lookup evaluator.
pub trait HandEvaluator: Send + Sync {
    fn evaluate(&self, cards: &[Card]) -> AgentResult<HandResult>;
}

/// Best-five-of-N evaluator over every 5-card combination.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardEvaluator;

impl HandEvaluator for StandardEvaluator {
    fn evaluate(&self, cards: &[Card]) -> AgentResult<HandResult> {
        evaluate_cards(cards)
    }
}

fn is_flush(cards: &[Card]) -> bool {
    cards.windows(2).all(|w| w[0].suit == w[1].suit)
}

fn straight_high(values: &[u8]) -> Option<u8> {
    let unique: Vec<u8> = values
        .iter()
        .copied()
        .collect::<BTreeSet<u8>>()
        .into_iter()
        .rev()
        .collect();

    if unique.len() != 5 {
        return None;
    }
    if unique[0] - unique[4] == 4 {
        return Some(unique[0]);
    }
    // Wheel: A-2-3-4-5
    if unique == [14, 5, 4, 3, 2] {
        return Some(5);
    }
    None
}

fn evaluate_five(cards: &[Card]) -> HandResult {
    let mut values: Vec<u8> = cards.iter().map(|c| c.value()).collect();
    values.sort_unstable_by(|a, b| b.cmp(a));

    let flush = is_flush(cards);
    let straight = straight_high(&values);

    if flush {
        if let Some(high) = straight {
            let category = if high == 14 {
                HandCategory::RoyalFlush
            } else {
                HandCategory::StraightFlush
            };
            return HandResult::new(category, vec![high], cards.to_vec());
        }
    }

    let mut counts = [0u8; 15];
    for &v in &values {
        counts[v as usize] += 1;
    }

    // (count, value) sorted by count desc, then value desc
    let mut freq: Vec<(u8, u8)> = (2..=14u8)
        .rev()
        .filter(|&v| counts[v as usize] > 0)
        .map(|v| (counts[v as usize], v))
        .collect();
    freq.sort_by(|a, b| b.0.cmp(&a.0).then(b.1.cmp(&a.1)));

    let kickers_without = |skip: &[u8]| -> Vec<u8> {
        values.iter().copied().filter(|v| !skip.contains(v)).collect()
    };

    if freq[0].0 == 4 {
        let quad = freq[0].1;
        let mut kickers = vec![quad];
        kickers.extend(kickers_without(&[quad]));
        return HandResult::new(HandCategory::FourOfAKind, kickers, cards.to_vec());
    }

    if freq[0].0 == 3 && freq.len() > 1 && freq[1].0 == 2 {
        return HandResult::new(
            HandCategory::FullHouse,
            vec![freq[0].1, freq[1].1],
            cards.to_vec(),
        );
    }

    if flush {
        return HandResult::new(HandCategory::Flush, values.clone(), cards.to_vec());
    }

    if let Some(high) = straight {
        return HandResult::new(HandCategory::Straight, vec![high], cards.to_vec());
    }

    if freq[0].0 == 3 {
        let trips = freq[0].1;
        let mut kickers = vec![trips];
        kickers.extend(kickers_without(&[trips]));
        return HandResult::new(HandCategory::ThreeOfAKind, kickers, cards.to_vec());
    }

    let pairs: Vec<u8> = freq.iter().filter(|(n, _)| *n == 2).map(|(_, v)| *v).collect();

    if pairs.len() == 2 {
        let mut kickers = pairs.clone();
        kickers.extend(kickers_without(&pairs));
        return HandResult::new(HandCategory::TwoPair, kickers, cards.to_vec());
    }

    if pairs.len() == 1 {
        let mut kickers = vec![pairs[0]];
        kickers.extend(kickers_without(&pairs));
        return HandResult::new(HandCategory::OnePair, kickers, cards.to_vec());
    }

    HandResult::new(HandCategory::HighCard, values, cards.to_vec())
}

/// Evaluate the best five-card hand out of 5 or more cards.
pub fn evaluate_cards(cards: &[Card]) -> AgentResult<HandResult> {
    if cards.len() < 5 {
        return Err(AgentError::NotEnoughCards {
            need: 5,
            got: cards.len(),
        });
    }

    cards
        .iter()
        .copied()
        .combinations(5)
        .map(|five| evaluate_five(&five))
        .max()
        .ok_or(AgentError::NotEnoughCards {
            need: 5,
            got: cards.len(),
        })
}

pub fn evaluate_hand(hole_cards: &[Card], board: &[Card]) -> AgentResult<HandResult> {
    let mut all_cards: Vec<Card> = Vec::with_capacity(hole_cards.len() + board.len());
    all_cards.extend_from_slice(hole_cards);
    all_cards.extend_from_slice(board);
    evaluate_cards(&all_cards)
}
