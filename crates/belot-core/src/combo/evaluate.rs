use tracing::{Level, event};

use super::fold::fold_text;
use super::rules::{CombinationRule, RULES};
use super::{FOUR_EIGHTS_REASON, FOUR_SEVENS_REASON, NO_COMBINATIONS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombinationOutcome {
    /// Rules found in the text, in table order. Empty when nothing matched.
    Scored {
        matched: Vec<&'static CombinationRule>,
    },
    /// Four eights: every combination is worth nothing, the round still counts.
    Voided,
    /// Four sevens: the round is void.
    RoundCanceled,
}

impl CombinationOutcome {
    pub fn points(&self) -> u32 {
        match self {
            CombinationOutcome::Scored { matched } => {
                matched.iter().map(|rule| rule.points).sum()
            }
            CombinationOutcome::Voided | CombinationOutcome::RoundCanceled => 0,
        }
    }

    pub fn is_canceled(&self) -> bool {
        matches!(self, CombinationOutcome::RoundCanceled)
    }

    /// Human-readable part of the breakdown, e.g. `Bella: +20, O Sută: +100`.
    pub fn details(&self) -> String {
        match self {
            CombinationOutcome::Scored { matched } if matched.is_empty() => {
                NO_COMBINATIONS.to_string()
            }
            CombinationOutcome::Scored { matched } => matched
                .iter()
                .map(|rule| format!("{}: +{}", rule.name, rule.points))
                .collect::<Vec<_>>()
                .join(", "),
            CombinationOutcome::Voided => FOUR_EIGHTS_REASON.to_string(),
            CombinationOutcome::RoundCanceled => FOUR_SEVENS_REASON.to_string(),
        }
    }
}

// Besides `sapte`, the digit spelling `carti de 7` also counts as four sevens.
fn signals_four_sevens(folded: &str) -> bool {
    folded.contains("patru") && (folded.contains("sapte") || folded.contains("carti de 7"))
}

fn signals_four_eights(folded: &str) -> bool {
    folded.contains("patru") && folded.contains("opt")
}

/// Classify the combinations label. Matching is plain substring containment
/// on folded text, so overlapping phrases may award more than one rule.
pub fn evaluate_combinations(text: &str) -> CombinationOutcome {
    if text.trim().is_empty() {
        return CombinationOutcome::Scored {
            matched: Vec::new(),
        };
    }

    let folded = fold_text(text);

    if signals_four_sevens(&folded) {
        event!(
            target: "belot_core::combo",
            Level::INFO,
            text,
            "four sevens announced; round canceled"
        );
        return CombinationOutcome::RoundCanceled;
    }

    if signals_four_eights(&folded) {
        event!(
            target: "belot_core::combo",
            Level::INFO,
            text,
            "four eights announced; combinations voided"
        );
        return CombinationOutcome::Voided;
    }

    let matched: Vec<&'static CombinationRule> = RULES
        .iter()
        .filter(|rule| rule.matches_folded(&folded))
        .collect();

    event!(
        target: "belot_core::combo",
        Level::DEBUG,
        text,
        matched = matched.len(),
        "combinations evaluated"
    );

    CombinationOutcome::Scored { matched }
}

#[cfg(test)]
mod tests {
    use super::{CombinationOutcome, evaluate_combinations};
    use crate::combo::{FOUR_EIGHTS_REASON, NO_COMBINATIONS};

    fn names(outcome: &CombinationOutcome) -> Vec<&'static str> {
        match outcome {
            CombinationOutcome::Scored { matched } => matched.iter().map(|r| r.name).collect(),
            _ => Vec::new(),
        }
    }

    #[test]
    fn blank_text_means_no_combinations() {
        for text in ["", "   ", "\n\t"] {
            let outcome = evaluate_combinations(text);
            assert_eq!(outcome.points(), 0);
            assert_eq!(outcome.details(), NO_COMBINATIONS);
        }
    }

    #[test]
    fn unknown_text_scores_nothing() {
        let outcome = evaluate_combinations("nimic interesant");
        assert_eq!(outcome.points(), 0);
        assert_eq!(outcome.details(), NO_COMBINATIONS);
    }

    #[test]
    fn single_bella() {
        let outcome = evaluate_combinations("Bella");
        assert_eq!(outcome.points(), 20);
        assert_eq!(outcome.details(), "Bella: +20");
    }

    #[test]
    fn multiple_rules_add_up_in_table_order() {
        let outcome = evaluate_combinations("O Sută, Bella");
        assert_eq!(names(&outcome), vec!["Bella", "O Sută"]);
        assert_eq!(outcome.points(), 120);
        assert_eq!(outcome.details(), "Bella: +20, O Sută: +100");
    }

    #[test]
    fn four_sevens_cancels_regardless_of_other_text() {
        for text in [
            "Patru cărți de șapte",
            "Bella, Patru cărți de șapte, O Sută",
            "PATRU CARTI DE SAPTE",
            "Patru cărți de 7",
        ] {
            let outcome = evaluate_combinations(text);
            assert!(outcome.is_canceled(), "{text}");
            assert_eq!(outcome.points(), 0);
        }
    }

    #[test]
    fn four_eights_voids_but_does_not_cancel() {
        let outcome = evaluate_combinations("Bella, Patru cărți de opt");
        assert_eq!(outcome, CombinationOutcome::Voided);
        assert!(!outcome.is_canceled());
        assert_eq!(outcome.points(), 0);
        assert_eq!(outcome.details(), FOUR_EIGHTS_REASON);
    }

    #[test]
    fn sevens_take_precedence_over_eights() {
        let outcome = evaluate_combinations("Patru de opt și patru de șapte");
        assert!(outcome.is_canceled());
    }

    #[test]
    fn matching_ignores_case_and_diacritics() {
        for text in ["Tărț", "tert", "TART"] {
            assert_eq!(names(&evaluate_combinations(text)), vec!["Tărț"], "{text}");
        }
    }

    #[test]
    fn half_hundred_phrase_also_contains_hundred() {
        // "jumate de suta" contains "suta"; containment semantics award both.
        let outcome = evaluate_combinations("Jumate de Sută");
        assert_eq!(names(&outcome), vec!["Jumate de Sută", "O Sută"]);
        assert_eq!(outcome.points(), 150);
    }

    #[test]
    fn four_jacks() {
        let outcome = evaluate_combinations("Patru cărți de J");
        assert_eq!(names(&outcome), vec!["Patru cărți de J"]);
        assert_eq!(outcome.points(), 200);
    }
}
