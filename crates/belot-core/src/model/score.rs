use crate::model::card::Card;
use crate::model::suit::Suit;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Point total per candidate trump suit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuitPoints {
    totals: BTreeMap<Suit, u32>,
}

impl SuitPoints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: &[Card]) -> Self {
        let mut points = Self::new();
        for trump in Suit::ALL.iter().copied() {
            let total = cards.iter().map(|card| card.points(trump)).sum();
            points.set(trump, total);
        }
        points
    }

    pub fn set(&mut self, suit: Suit, points: u32) {
        self.totals.insert(suit, points);
    }

    pub fn get(&self, suit: Suit) -> Option<u32> {
        self.totals.get(&suit).copied()
    }

    /// Base points when `trump` is called; an unreported suit counts as zero.
    pub fn trump_base(&self, trump: Suit) -> u32 {
        self.get(trump).unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Suit, u32)> + '_ {
        self.totals.iter().map(|(suit, points)| (*suit, *points))
    }
}

#[cfg(test)]
mod tests {
    use super::SuitPoints;
    use crate::model::card::Card;
    use crate::model::suit::Suit;

    #[test]
    fn missing_suit_defaults_to_zero() {
        let mut points = SuitPoints::new();
        points.set(Suit::Diamonds, 77);
        assert_eq!(points.trump_base(Suit::Diamonds), 77);
        assert_eq!(points.trump_base(Suit::Clubs), 0);
        assert_eq!(points.get(Suit::Clubs), None);
    }

    #[test]
    fn set_overwrites_existing_entry() {
        let mut points = SuitPoints::new();
        points.set(Suit::Hearts, 10);
        points.set(Suit::Hearts, 12);
        assert_eq!(points.len(), 1);
        assert_eq!(points.get(Suit::Hearts), Some(12));
    }

    #[test]
    fn from_cards_scores_every_trump_choice() {
        let cards = Card::parse_list("J♦ 9♦ A♠ 10♣ K♥").unwrap();
        let points = SuitPoints::from_cards(&cards);
        // J♦ 2 + 9♦ 0 + A♠ 11 + 10♣ 10 + K♥ 4
        assert_eq!(points.get(Suit::Spades), Some(27));
        assert_eq!(points.get(Suit::Hearts), Some(27));
        // J♦ 20 + 9♦ 14 + 11 + 10 + 4
        assert_eq!(points.get(Suit::Diamonds), Some(59));
        assert_eq!(points.get(Suit::Clubs), Some(27));
    }

    #[test]
    fn iteration_follows_report_order() {
        let mut points = SuitPoints::new();
        points.set(Suit::Clubs, 1);
        points.set(Suit::Spades, 2);
        let order: Vec<_> = points.iter().map(|(suit, _)| suit).collect();
        assert_eq!(order, vec![Suit::Spades, Suit::Clubs]);
    }
}
