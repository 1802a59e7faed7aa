use crate::model::rank::Rank;
use crate::model::suit::Suit;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub const fn points(self, trump: Suit) -> u32 {
        if self.suit as u8 == trump as u8 {
            self.rank.trump_points()
        } else {
            self.rank.plain_points()
        }
    }

    /// Parse a whitespace or comma separated list such as `J♦ 9♦, 10♠`.
    pub fn parse_list(text: &str) -> Result<Vec<Card>, CardParseError> {
        text.split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(str::parse)
            .collect()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardParseError {
    #[error("card code '{0}' has no suit glyph")]
    MissingSuit(String),
    #[error("unknown suit in card code '{0}'")]
    UnknownSuit(String),
    #[error("unknown rank in card code '{0}'")]
    UnknownRank(String),
}

impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let code = code.trim();
        let Some(glyph) = code.chars().last() else {
            return Err(CardParseError::MissingSuit(code.to_string()));
        };
        let rank_part = &code[..code.len() - glyph.len_utf8()];
        let suit =
            Suit::from_glyph(glyph).ok_or_else(|| CardParseError::UnknownSuit(code.to_string()))?;
        let rank = Rank::from_symbol(rank_part)
            .ok_or_else(|| CardParseError::UnknownRank(code.to_string()))?;
        Ok(Card::new(rank, suit))
    }
}
