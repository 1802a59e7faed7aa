//! Combination announcements read from the table's free-text label.

mod evaluate;
mod fold;
mod rules;

pub use evaluate::{CombinationOutcome, evaluate_combinations};
pub use fold::fold_text;
pub use rules::{CombinationRule, RULES};

pub const NO_COMBINATIONS: &str = "Fără combinații";
pub const FOUR_SEVENS_REASON: &str = "Jocul este anulat (Patru de șapte)";
pub const FOUR_EIGHTS_REASON: &str = "Toate combinațiile anulate (Patru cărți de opt)";
