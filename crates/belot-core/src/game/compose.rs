use serde::{Deserialize, Serialize};
use tracing::{Level, event};

use crate::combo::{CombinationOutcome, evaluate_combinations};
use crate::model::score::SuitPoints;
use crate::model::trump::TrumpCall;
use crate::report::parse_suit_points;

pub const CANCELED_LABEL: &str = "ANULAT";

/// Final outcome of one round's scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EvaluationResult {
    Scored { score: u32, breakdown: String },
    Canceled { label: String, reason: String },
}

impl EvaluationResult {
    pub fn score(&self) -> Option<u32> {
        match self {
            EvaluationResult::Scored { score, .. } => Some(*score),
            EvaluationResult::Canceled { .. } => None,
        }
    }

    pub fn is_canceled(&self) -> bool {
        matches!(self, EvaluationResult::Canceled { .. })
    }

    /// Large figure shown on the result card: the score or the cancel label.
    pub fn headline(&self) -> String {
        match self {
            EvaluationResult::Scored { score, .. } => score.to_string(),
            EvaluationResult::Canceled { label, .. } => label.clone(),
        }
    }

    pub fn details(&self) -> &str {
        match self {
            EvaluationResult::Scored { breakdown, .. } => breakdown.as_str(),
            EvaluationResult::Canceled { reason, .. } => reason.as_str(),
        }
    }
}

/// Combine the trump suit's base points with the combination outcome.
pub fn compose_final(
    points: &SuitPoints,
    trump: &TrumpCall,
    combinations: &CombinationOutcome,
) -> EvaluationResult {
    if combinations.is_canceled() {
        return EvaluationResult::Canceled {
            label: CANCELED_LABEL.to_string(),
            reason: combinations.details(),
        };
    }

    let base = points.trump_base(trump.suit);
    let bonus = combinations.points();
    let score = base.saturating_add(bonus);

    event!(
        target: "belot_core::compose",
        Level::INFO,
        trump = %trump.suit,
        base,
        bonus,
        score,
        "final score composed"
    );

    EvaluationResult::Scored {
        score,
        breakdown: format!(
            "Coz: {} ({}) + {} = {}",
            trump.name,
            base,
            combinations.details(),
            score
        ),
    }
}

/// Raw texts gathered for one trigger cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundInputs {
    pub report: String,
    pub trump_label: String,
    pub combinations: String,
}

/// Everything the evaluation derived from [`RoundInputs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundEvaluation {
    pub trump: TrumpCall,
    pub points: SuitPoints,
    pub combinations_text: String,
    pub result: EvaluationResult,
}

/// Run the whole evaluator. `None` when the trump suit cannot be read yet.
pub fn evaluate_round(inputs: &RoundInputs) -> Option<RoundEvaluation> {
    let Some(trump) = TrumpCall::from_label(&inputs.trump_label) else {
        event!(
            target: "belot_core::compose",
            Level::WARN,
            label = inputs.trump_label.as_str(),
            "could not determine trump suit"
        );
        return None;
    };

    let points = parse_suit_points(&inputs.report);
    let combinations_text = inputs.combinations.trim().to_string();
    let outcome = evaluate_combinations(&combinations_text);
    let result = compose_final(&points, &trump, &outcome);

    Some(RoundEvaluation {
        trump,
        points,
        combinations_text,
        result,
    })
}
