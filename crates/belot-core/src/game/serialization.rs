use super::compose::{EvaluationResult, RoundEvaluation};
use crate::model::score::SuitPoints;
use crate::model::suit::Suit;
use serde::{Deserialize, Serialize};

/// Record of one trigger cycle handed to display sinks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EvaluationSnapshot {
    pub cycle: u64,
    pub trump_suit: Suit,
    pub trump_name: String,
    pub suit_points: SuitPoints,
    #[serde(default)]
    pub combinations: String,
    pub result: EvaluationResult,
}

impl EvaluationSnapshot {
    pub fn capture(cycle: u64, evaluation: &RoundEvaluation) -> Self {
        EvaluationSnapshot {
            cycle,
            trump_suit: evaluation.trump.suit,
            trump_name: evaluation.trump.name.clone(),
            suit_points: evaluation.points.clone(),
            combinations: evaluation.combinations_text.clone(),
            result: evaluation.result.clone(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::EvaluationSnapshot;
    use crate::game::compose::{EvaluationResult, RoundInputs, evaluate_round};
    use crate::model::suit::Suit;

    fn sample() -> EvaluationSnapshot {
        let inputs = RoundInputs {
            report: "POINTS BY TRUMP SUIT:\nDobă (♦): 77 points\nCruce (♣): 12 points\n\n"
                .to_string(),
            trump_label: "Cozul: Dobă".to_string(),
            combinations: "Bella".to_string(),
        };
        EvaluationSnapshot::capture(3, &evaluate_round(&inputs).unwrap())
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let json = sample().to_json().unwrap();
        assert!(json.contains("\"cycle\": 3"));
        assert!(json.contains("\"kind\": \"scored\""));
        assert!(json.contains("\"score\": 97"));
        assert!(json.contains("\"Diamonds\": 77"));
    }

    #[test]
    fn snapshot_roundtrip_preserves_result() {
        let snapshot = sample();
        let restored = EvaluationSnapshot::from_json(&snapshot.to_json().unwrap()).unwrap();
        assert_eq!(restored, snapshot);
        assert_eq!(restored.suit_points.get(Suit::Clubs), Some(12));
    }

    #[test]
    fn snapshot_from_json_accepts_missing_combinations() {
        let json = r#"{
            "cycle": 1,
            "trump_suit": "Hearts",
            "trump_name": "Roșu",
            "suit_points": {},
            "result": { "kind": "canceled", "label": "ANULAT", "reason": "Jocul este anulat (Patru de șapte)" }
        }"#;
        let snapshot = EvaluationSnapshot::from_json(json).unwrap();
        assert!(snapshot.combinations.is_empty());
        assert!(matches!(snapshot.result, EvaluationResult::Canceled { .. }));
    }
}
