//! Preflop range engine: heuristic 169-class open and defense tables plus a
//! single uniform draw per decision.

use std::fmt;

use rand::Rng;

use crate::action::Decision;
use crate::cards::{hand_class, Card};
use crate::sizing::clamp_to_stack;

/// Share of the defense probability that 3-bets instead of calling.
pub const THREE_BET_SHARE: f64 = 0.2;
/// A 3-bet is this multiple of the bet faced.
pub const THREE_BET_MULTIPLIER: u32 = 3;

// ---------------------------------------------------------------------------
// Hand class
// ---------------------------------------------------------------------------

/// Two hole cards reduced to (high rank, low rank, suited).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PreflopHand {
    pub high: u8,
    pub low: u8,
    pub suited: bool,
}

impl PreflopHand {
    pub fn new(c1: Card, c2: Card) -> Self {
        let (high, low) = if c1.value() >= c2.value() {
            (c1.value(), c2.value())
        } else {
            (c2.value(), c1.value())
        };
        PreflopHand {
            high,
            low,
            suited: c1.suit == c2.suit,
        }
    }

    pub fn from_ranks(high: u8, low: u8, suited: bool) -> Self {
        PreflopHand {
            high: high.max(low),
            low: high.min(low),
            suited,
        }
    }

    pub fn is_pair(&self) -> bool {
        self.high == self.low
    }

    pub fn gap(&self) -> u8 {
        self.high - self.low
    }

    fn is_broadway(&self) -> bool {
        self.low >= 10
    }
}

impl fmt::Display for PreflopHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}{}", self.high, self.low, if self.suited { "s" } else { "" })
    }
}

// ---------------------------------------------------------------------------
// Probability tables
// ---------------------------------------------------------------------------

/// Probability of opening this hand when first in.
pub fn open_probability(hand: &PreflopHand) -> f64 {
    if hand.is_pair() {
        return if hand.high >= 7 { 1.0 } else { 0.85 };
    }
    if hand.suited {
        if hand.is_broadway() {
            1.0
        } else if hand.high == 14 {
            0.95
        } else if hand.gap() <= 1 && hand.low >= 4 {
            0.8
        } else if hand.high >= 12 {
            0.75
        } else {
            0.45
        }
    } else if hand.is_broadway() {
        0.9
    } else if hand.high == 14 {
        0.75
    } else if hand.high >= 12 && hand.low >= 7 {
        0.55
    } else if hand.gap() == 1 && hand.low >= 6 {
        0.45
    } else {
        0.2
    }
}

/// Size of the raise being faced, in big blinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BetSizeBucket {
    /// Up to 3bb.
    Small,
    /// Up to 6bb.
    Medium,
    Large,
}

impl BetSizeBucket {
    pub fn from_bet(bet: u32, big_blind: u32) -> Self {
        let bb = big_blind.max(1);
        if bet <= bb.saturating_mul(3) {
            BetSizeBucket::Small
        } else if bet <= bb.saturating_mul(6) {
            BetSizeBucket::Medium
        } else {
            BetSizeBucket::Large
        }
    }

    fn scale(self) -> f64 {
        match self {
            BetSizeBucket::Small => 1.0,
            BetSizeBucket::Medium => 0.8,
            BetSizeBucket::Large => 0.6,
        }
    }
}

/// Probability of continuing (3-bet or call) against a raise.
pub fn defense_probability(hand: &PreflopHand, size: BetSizeBucket) -> f64 {
    let base = if hand.is_pair() {
        if hand.high >= 10 {
            1.0
        } else if hand.high >= 6 {
            0.85
        } else {
            0.6
        }
    } else if hand.is_broadway() {
        if hand.suited {
            0.95
        } else {
            0.85
        }
    } else if hand.high == 14 {
        if hand.suited {
            0.8
        } else {
            0.6
        }
    } else if hand.suited && hand.gap() <= 1 && hand.low >= 5 {
        0.6
    } else if hand.high >= 12 {
        if hand.suited {
            0.55
        } else {
            0.45
        }
    } else if hand.high <= 9 {
        0.15
    } else {
        0.3
    };

    // Big pairs never tighten against size.
    if hand.is_pair() && hand.high >= 12 {
        return base;
    }
    base * size.scale()
}

// ---------------------------------------------------------------------------
// Decision
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct PreflopSpot {
    pub hole_cards: [Card; 2],
    pub current_min_bet: u32,
    /// Chips the hero already has in on this street.
    pub current_bet: u32,
    pub call_cost: u32,
    pub stack: u32,
    pub big_blind: u32,
    pub open_size_bb: u32,
}

impl PreflopSpot {
    /// No raise beyond the big blind has been made yet.
    pub fn is_opening(&self) -> bool {
        self.current_min_bet <= self.big_blind
    }

    /// Chips needed to bring the street total up to `target`, capped by the stack.
    fn raise_to(&self, target: u32) -> Decision {
        let put_in = target.saturating_sub(self.current_bet) as f64;
        Decision::raise(clamp_to_stack(put_in, self.stack))
    }
}

pub fn preflop_decision<R: Rng>(spot: &PreflopSpot, rng: &mut R) -> Decision {
    let hand = PreflopHand::new(spot.hole_cards[0], spot.hole_cards[1]);
    let label = hand_class(spot.hole_cards[0], spot.hole_cards[1]);
    let u: f64 = rng.gen();

    if spot.is_opening() {
        let p = open_probability(&hand);
        log::debug!("preflop open {} p={:.2} draw={:.3}", label, p, u);
        if u < p {
            return spot.raise_to(spot.open_size_bb.saturating_mul(spot.big_blind));
        }
        return Decision::check();
    }

    let size = BetSizeBucket::from_bet(spot.current_min_bet, spot.big_blind);
    let p = defense_probability(&hand, size);
    log::debug!(
        "preflop defend {} vs {} ({:?}) p={:.2} draw={:.3}",
        label,
        spot.current_min_bet,
        size,
        p,
        u
    );

    if u < THREE_BET_SHARE * p {
        spot.raise_to(THREE_BET_MULTIPLIER.saturating_mul(spot.current_min_bet))
    } else if u < p {
        Decision::call()
    } else if spot.call_cost == 0 {
        Decision::check()
    } else {
        Decision::fold()
    }
}
