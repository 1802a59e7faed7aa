use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    Spades = 0,
    Hearts = 1,
    Diamonds = 2,
    Clubs = 3,
}

impl Suit {
    /// Order used by the calculator report.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    pub const fn glyph(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }

    pub const fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '♠' => Some(Suit::Spades),
            '♥' => Some(Suit::Hearts),
            '♦' => Some(Suit::Diamonds),
            '♣' => Some(Suit::Clubs),
            _ => None,
        }
    }

    /// Romanian name shown on the table and in the calculator report.
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Spades => "Verde",
            Suit::Hearts => "Roșu",
            Suit::Diamonds => "Dobă",
            Suit::Clubs => "Cruce",
        }
    }

    /// Resolve a trump name as the table prints it. `Rosu` is accepted
    /// alongside `Roșu`; everything else must match exactly.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "Verde" => Some(Suit::Spades),
            "Roșu" | "Rosu" => Some(Suit::Hearts),
            "Dobă" => Some(Suit::Diamonds),
            "Cruce" => Some(Suit::Clubs),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
