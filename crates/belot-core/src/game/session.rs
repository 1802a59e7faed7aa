use tracing::{Level, event};

use super::compose::{RoundInputs, evaluate_round};
use super::serialization::EvaluationSnapshot;

/// Where a finished evaluation is shown.
pub trait ResultSink {
    type Error;

    fn present(&mut self, snapshot: &EvaluationSnapshot) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentStatus {
    Presented,
    AlreadyPresented,
    NothingToPresent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionState {
    Pending,
    Evaluated(EvaluationSnapshot),
    Presented(EvaluationSnapshot),
}

/// Scoring state for one trigger cycle. A new trigger starts a new session,
/// which is the only way the "already shown" state is cleared.
#[derive(Debug, Clone)]
pub struct ScoringSession {
    cycle: u64,
    state: SessionState,
}

impl ScoringSession {
    pub fn begin(cycle: u64) -> Self {
        event!(target: "belot_core::session", Level::DEBUG, cycle, "scoring cycle started");
        Self {
            cycle,
            state: SessionState::Pending,
        }
    }

    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Evaluate once per cycle. Later calls return the stored snapshot; a
    /// call that finds no trump suit leaves the session pending.
    pub fn evaluate(&mut self, inputs: &RoundInputs) -> Option<&EvaluationSnapshot> {
        if matches!(self.state, SessionState::Pending) {
            let evaluation = evaluate_round(inputs)?;
            self.state = SessionState::Evaluated(EvaluationSnapshot::capture(self.cycle, &evaluation));
        }
        self.snapshot()
    }

    pub fn snapshot(&self) -> Option<&EvaluationSnapshot> {
        match &self.state {
            SessionState::Pending => None,
            SessionState::Evaluated(snapshot) | SessionState::Presented(snapshot) => Some(snapshot),
        }
    }

    pub fn is_presented(&self) -> bool {
        matches!(self.state, SessionState::Presented(_))
    }

    /// Hand the result to `sink` at most once. A failed delivery keeps the
    /// session in the evaluated state so it can be retried.
    pub fn present<S: ResultSink>(&mut self, sink: &mut S) -> Result<PresentStatus, S::Error> {
        let snapshot = match &self.state {
            SessionState::Pending => return Ok(PresentStatus::NothingToPresent),
            SessionState::Presented(_) => {
                event!(
                    target: "belot_core::session",
                    Level::DEBUG,
                    cycle = self.cycle,
                    "result already shown for this cycle"
                );
                return Ok(PresentStatus::AlreadyPresented);
            }
            SessionState::Evaluated(snapshot) => snapshot.clone(),
        };

        sink.present(&snapshot)?;
        self.state = SessionState::Presented(snapshot);
        Ok(PresentStatus::Presented)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        shown: Vec<EvaluationSnapshot>,
        fail_next: bool,
    }

    impl ResultSink for RecordingSink {
        type Error = &'static str;

        fn present(&mut self, snapshot: &EvaluationSnapshot) -> Result<(), Self::Error> {
            if std::mem::take(&mut self.fail_next) {
                return Err("sink unavailable");
            }
            self.shown.push(snapshot.clone());
            Ok(())
        }
    }

    fn inputs(label: &str) -> RoundInputs {
        RoundInputs {
            report: "POINTS BY TRUMP SUIT:\nDobă (♦): 77 points\n\n".to_string(),
            trump_label: label.to_string(),
            combinations: "Bella".to_string(),
        }
    }

    #[test]
    fn presents_exactly_once_per_cycle() {
        let mut session = ScoringSession::begin(1);
        let mut sink = RecordingSink::default();
        session.evaluate(&inputs("Cozul: Dobă")).unwrap();

        assert_eq!(session.present(&mut sink), Ok(PresentStatus::Presented));
        assert_eq!(session.present(&mut sink), Ok(PresentStatus::AlreadyPresented));
        assert_eq!(sink.shown.len(), 1);
        assert_eq!(sink.shown[0].result.score(), Some(97));
    }

    #[test]
    fn evaluation_is_not_repeated() {
        let mut session = ScoringSession::begin(1);
        let first = session.evaluate(&inputs("Cozul: Dobă")).cloned().unwrap();
        let mut other = inputs("Cozul: Cruce");
        other.combinations = "O Sută".to_string();
        let second = session.evaluate(&other).cloned().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn pending_session_has_nothing_to_show() {
        let mut session = ScoringSession::begin(2);
        let mut sink = RecordingSink::default();
        assert!(session.evaluate(&inputs("")).is_none());
        assert_eq!(session.present(&mut sink), Ok(PresentStatus::NothingToPresent));
        assert!(sink.shown.is_empty());

        assert!(session.evaluate(&inputs("Cozul: Dobă")).is_some());
        assert_eq!(session.present(&mut sink), Ok(PresentStatus::Presented));
    }

    #[test]
    fn failed_delivery_can_be_retried() {
        let mut session = ScoringSession::begin(4);
        let mut sink = RecordingSink {
            fail_next: true,
            ..RecordingSink::default()
        };
        session.evaluate(&inputs("Cozul: Dobă"));
        assert_eq!(session.present(&mut sink), Err("sink unavailable"));
        assert!(!session.is_presented());
        assert_eq!(session.present(&mut sink), Ok(PresentStatus::Presented));
        assert_eq!(sink.shown.len(), 1);
    }

    #[test]
    fn new_cycle_shows_again() {
        let mut sink = RecordingSink::default();
        for cycle in 1..=2 {
            let mut session = ScoringSession::begin(cycle);
            session.evaluate(&inputs("Cozul: Dobă"));
            session.present(&mut sink).unwrap();
        }
        let cycles: Vec<_> = sink.shown.iter().map(|s| s.cycle).collect();
        assert_eq!(cycles, vec![1, 2]);
    }
}
