use super::{POINTS_HEADER, REPORT_MARKER};
use crate::model::card::Card;
use crate::model::score::SuitPoints;
use crate::model::suit::Suit;

/// Render the calculator block for a set of collected cards.
pub fn render(cards: &[Card]) -> String {
    let points = SuitPoints::from_cards(cards);
    let codes: Vec<String> = cards.iter().map(Card::to_string).collect();

    let mut out = format!(
        "{REPORT_MARKER}\nCards: {}\n{}\n\n{POINTS_HEADER}\n",
        cards.len(),
        codes.join(" ")
    );
    for suit in Suit::ALL {
        out.push_str(&format!(
            "{} ({}): {} points\n",
            suit.name(),
            suit.glyph(),
            points.trump_base(suit)
        ));
    }
    out.push('\n');
    out
}
