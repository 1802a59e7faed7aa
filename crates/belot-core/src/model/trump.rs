use crate::model::suit::Suit;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{Level, event};

static TRUMP_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Cozul: (.*)").expect("trump label pattern compiles"));

/// Trump suit as announced on the table, keeping the spelling that was shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrumpCall {
    pub suit: Suit,
    pub name: String,
}

impl TrumpCall {
    pub fn new(suit: Suit) -> Self {
        Self {
            suit,
            name: suit.name().to_string(),
        }
    }

    /// Read a `Cozul: <name>` label. Returns `None` while the label is missing
    /// or names a suit we do not know; callers treat that as "not ready yet".
    pub fn from_label(text: &str) -> Option<Self> {
        let captures = TRUMP_LABEL.captures(text)?;
        let name = captures.get(1)?.as_str().trim();
        if name.is_empty() {
            return None;
        }
        let Some(suit) = Suit::from_name(name) else {
            event!(
                target: "belot_core::trump",
                Level::DEBUG,
                trump_name = name,
                "unrecognised trump name"
            );
            return None;
        };
        Some(Self {
            suit,
            name: name.to_string(),
        })
    }
}
