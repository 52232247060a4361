use std::fmt;

use crate::cards::Card;

/// Board wetness. Only Dry and Wet are produced today; Paired and Monotone
/// are reserved for a finer classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardTexture {
    Dry,
    Wet,
    Paired,
    Monotone,
}

pub const ALL_TEXTURES: [BoardTexture; 4] = [
    BoardTexture::Dry,
    BoardTexture::Wet,
    BoardTexture::Paired,
    BoardTexture::Monotone,
];

impl BoardTexture {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoardTexture::Dry => "Dry",
            BoardTexture::Wet => "Wet",
            BoardTexture::Paired => "Paired",
            BoardTexture::Monotone => "Monotone",
        }
    }

    pub fn from_name(name: &str) -> Option<BoardTexture> {
        ALL_TEXTURES
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for BoardTexture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Wet when three cards share a suit or two adjacent sorted ranks are
/// within one of each other (paired ranks count). Otherwise Dry.
pub fn classify_texture(community: &[Card]) -> BoardTexture {
    let mut suit_counts = [0u8; 4];
    for c in community {
        suit_counts[c.suit.index()] += 1;
    }
    if suit_counts.iter().any(|&n| n >= 3) {
        return BoardTexture::Wet;
    }

    let mut values: Vec<u8> = community.iter().map(|c| c.value()).collect();
    values.sort_unstable();
    if values.windows(2).any(|w| w[1] - w[0] <= 1) {
        return BoardTexture::Wet;
    }

    BoardTexture::Dry
}
