use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{Level, event};

use super::{POINTS_HEADER, REPORT_MARKER};
use crate::model::score::SuitPoints;
use crate::model::suit::Suit;

static POINTS_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(.*) \(([♠♥♦♣])\): ([0-9]+) points").expect("points line pattern compiles")
});

pub fn contains_marker(text: &str) -> bool {
    text.contains(REPORT_MARKER)
}

/// Collect `<label> (<glyph>): <n> points` lines from the section that starts
/// after the points header and runs to the first blank line. No header means
/// an empty map.
pub fn parse_suit_points(text: &str) -> SuitPoints {
    let mut points = SuitPoints::new();
    let mut in_section = false;

    for line in text.lines() {
        if line.contains(POINTS_HEADER) {
            in_section = true;
            continue;
        }
        if !in_section {
            continue;
        }
        if line.trim().is_empty() {
            break;
        }

        let Some(captures) = POINTS_LINE.captures(line) else {
            continue;
        };
        let Some(suit) = captures[2].chars().next().and_then(Suit::from_glyph) else {
            event!(
                target: "belot_core::report",
                Level::DEBUG,
                line,
                "skipping unreadable points line"
            );
            continue;
        };
        // Only digits reach here, so a parse failure is overflow.
        let value = captures[3].parse::<u32>().unwrap_or_else(|_| {
            event!(
                target: "belot_core::report",
                Level::WARN,
                line,
                "points total out of range; saturating"
            );
            u32::MAX
        });
        points.set(suit, value);
    }

    points
}

#[cfg(test)]
mod tests {
    use super::{contains_marker, parse_suit_points};
    use crate::model::suit::Suit;

    const BLOCK: &str = "=== BELOT CARD CALCULATOR ===
Cards: 3
J♦ 9♦ A♠

POINTS BY TRUMP SUIT:
Verde (♠): 13 points
Roșu (♥): 13 points
Dobă (♦): 45 points
Cruce (♣): 13 points

Verde (♠): 999 points
";

    #[test]
    fn reads_every_suit_in_section() {
        let points = parse_suit_points(BLOCK);
        assert_eq!(points.len(), 4);
        assert_eq!(points.get(Suit::Diamonds), Some(45));
        assert_eq!(points.get(Suit::Spades), Some(13));
    }

    #[test]
    fn stops_at_first_blank_line() {
        let points = parse_suit_points(BLOCK);
        assert_ne!(points.get(Suit::Spades), Some(999));
    }

    #[test]
    fn ignores_lines_before_header() {
        let text = "Doba (♦): 50 points\nPOINTS BY TRUMP SUIT:\nCruce (♣): 7 points\n";
        let points = parse_suit_points(text);
        assert_eq!(points.get(Suit::Diamonds), None);
        assert_eq!(points.get(Suit::Clubs), Some(7));
    }

    #[test]
    fn missing_header_yields_empty_map() {
        assert!(parse_suit_points("Verde (♠): 10 points").is_empty());
        assert!(parse_suit_points("").is_empty());
    }

    #[test]
    fn malformed_lines_inside_section_are_skipped() {
        let text = "POINTS BY TRUMP SUIT:\nVerde: 10 points\nRoșu (♥): ten points\nCruce (♣): 4 points\n\n";
        let points = parse_suit_points(text);
        assert_eq!(points.len(), 1);
        assert_eq!(points.get(Suit::Clubs), Some(4));
    }

    #[test]
    fn oversized_total_saturates() {
        let text = "POINTS BY TRUMP SUIT:\nDobă (♦): 99999999999 points\nCruce (♣): 4 points\n\n";
        let points = parse_suit_points(text);
        assert_eq!(points.get(Suit::Diamonds), Some(u32::MAX));
        assert_eq!(points.get(Suit::Clubs), Some(4));
    }

    #[test]
    fn later_line_for_same_suit_wins() {
        let text = "POINTS BY TRUMP SUIT:\nDobă (♦): 1 points\nDoba (♦): 2 points\n";
        assert_eq!(parse_suit_points(text).get(Suit::Diamonds), Some(2));
    }

    #[test]
    fn crlf_text_is_handled() {
        let text = "POINTS BY TRUMP SUIT:\r\nDobă (♦): 77 points\r\n\r\nCruce (♣): 1 points\r\n";
        let points = parse_suit_points(text);
        assert_eq!(points.get(Suit::Diamonds), Some(77));
        assert_eq!(points.get(Suit::Clubs), None);
    }

    #[test]
    fn marker_detection() {
        assert!(contains_marker(BLOCK));
        assert!(!contains_marker("POINTS BY TRUMP SUIT:"));
    }
}
