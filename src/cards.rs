use std::collections::HashSet;
use std::fmt;

use crate::error::{AgentError, AgentResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    pub fn from_char(c: char) -> AgentResult<Rank> {
        match c.to_ascii_uppercase() {
            '2' => Ok(Rank::Two),
            '3' => Ok(Rank::Three),
            '4' => Ok(Rank::Four),
            '5' => Ok(Rank::Five),
            '6' => Ok(Rank::Six),
            '7' => Ok(Rank::Seven),
            '8' => Ok(Rank::Eight),
            '9' => Ok(Rank::Nine),
            'T' => Ok(Rank::Ten),
            'J' => Ok(Rank::Jack),
            'Q' => Ok(Rank::Queen),
            'K' => Ok(Rank::King),
            'A' => Ok(Rank::Ace),
            _ => Err(AgentError::InvalidRank(c)),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    pub fn value(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    pub fn from_char(c: char) -> AgentResult<Suit> {
        match c.to_ascii_lowercase() {
            's' => Ok(Suit::Spades),
            'h' => Ok(Suit::Hearts),
            'd' => Ok(Suit::Diamonds),
            'c' => Ok(Suit::Clubs),
            _ => Err(AgentError::InvalidSuit(c)),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Suit::Spades => 's',
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Spades => "\u{2660}",
            Suit::Hearts => "\u{2665}",
            Suit::Diamonds => "\u{2666}",
            Suit::Clubs => "\u{2663}",
        }
    }

    /// Dense 0..4 index, used for per-suit counting.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// An immutable playing card. Ordered by rank, then suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    pub fn value(&self) -> u8 {
        self.rank.value()
    }

    pub fn pretty(&self) -> String {
        format!("{}{}", self.rank.to_char(), self.suit.symbol())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.to_char(), self.suit.to_char())
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.suit.cmp(&other.suit))
    }
}

pub fn parse_card(notation: &str) -> AgentResult<Card> {
    let notation = notation.trim();
    let chars: Vec<char> = notation.chars().collect();
    if chars.len() != 2 {
        return Err(AgentError::InvalidCardNotation(notation.to_string()));
    }
    let rank = Rank::from_char(chars[0])?;
    let suit = Suit::from_char(chars[1])?;
    Ok(Card::new(rank, suit))
}

pub fn parse_board(notation: &str) -> AgentResult<Vec<Card>> {
    let notation = notation.trim().replace([' ', ','], "");
    if notation.len() % 2 != 0 || !notation.is_ascii() {
        return Err(AgentError::InvalidBoardNotation(notation));
    }
    let chars: Vec<char> = notation.chars().collect();
    chars
        .chunks(2)
        .map(|pair| parse_card(&pair.iter().collect::<String>()))
        .collect()
}

/// Parse exactly two hole cards, e.g. "AsKd".
pub fn parse_hole_cards(notation: &str) -> AgentResult<[Card; 2]> {
    let cards = parse_board(notation)?;
    if cards.len() != 2 {
        return Err(AgentError::InvalidHandSize(cards.len()));
    }
    if cards[0] == cards[1] {
        return Err(AgentError::DuplicateCard(cards[0].to_string()));
    }
    Ok([cards[0], cards[1]])
}

/// Returns the first card that appears more than once, if any.
pub fn find_duplicate<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Option<Card> {
    let mut seen = HashSet::new();
    cards.into_iter().find(|c| !seen.insert(**c)).copied()
}

/// Canonical 169-class label for two hole cards: "AA", "AKs", "T9o".
pub fn hand_class(c1: Card, c2: Card) -> String {
    let (hi, lo) = if c1.rank >= c2.rank { (c1, c2) } else { (c2, c1) };
    if hi.rank == lo.rank {
        return format!("{}{}", hi.rank.to_char(), lo.rank.to_char());
    }
    let suffix = if hi.suit == lo.suit { 's' } else { 'o' };
    format!("{}{}{}", hi.rank.to_char(), lo.rank.to_char(), suffix)
}

pub fn cards_to_string(cards: &[Card]) -> String {
    cards.iter().map(|c| c.to_string()).collect()
}
