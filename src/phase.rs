use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Street {
    pub fn as_str(&self) -> &'static str {
        match self {
            Street::Preflop => "Preflop",
            Street::Flop => "Flop",
            Street::Turn => "Turn",
            Street::River => "River",
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Betting street from the number of community cards. Anything at or past
/// five cards is the river; counts between streets round down.
pub fn classify_street(community_cards: usize) -> Street {
    match community_cards {
        0..=2 => Street::Preflop,
        3 => Street::Flop,
        4 => Street::Turn,
        _ => Street::River,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_street() {
        assert_eq!(classify_street(0), Street::Preflop);
        assert_eq!(classify_street(3), Street::Flop);
        assert_eq!(classify_street(4), Street::Turn);
        assert_eq!(classify_street(5), Street::River);
        assert_eq!(classify_street(7), Street::River);
    }

    #[test]
    fn test_street_ordering() {
        assert!(Street::Preflop < Street::Flop);
        assert!(Street::Turn < Street::River);
    }
}
