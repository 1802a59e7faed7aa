//! One trigger: capture, wait for the report, evaluate, show.

use belot_core::game::compose::RoundInputs;
use belot_core::game::serialization::EvaluationSnapshot;
use belot_core::game::session::{ResultSink, ScoringSession};
use tracing::{Level, event};

use crate::capture::CaptureProvider;
use crate::clipboard::{CancelToken, ClipboardSource, WaitOutcome, WaitPolicy, wait_for_report};
use crate::error::PipelineError;
use crate::page::PageSource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    Presented(EvaluationSnapshot),
    /// The trump label could not be read; nothing was shown.
    NotReady,
    TimedOut,
    Canceled,
}

pub struct Pipeline<S> {
    capture: Box<dyn CaptureProvider>,
    clipboard: Box<dyn ClipboardSource>,
    page: Box<dyn PageSource>,
    sink: S,
    policy: WaitPolicy,
    cancel: CancelToken,
    cycles: u64,
}

impl<S> Pipeline<S>
where
    S: ResultSink<Error = PipelineError>,
{
    pub fn new(
        capture: Box<dyn CaptureProvider>,
        clipboard: Box<dyn ClipboardSource>,
        page: Box<dyn PageSource>,
        sink: S,
        policy: WaitPolicy,
    ) -> Self {
        Self {
            capture,
            clipboard,
            page,
            sink,
            policy,
            cancel: CancelToken::new(),
            cycles: 0,
        }
    }

    /// Token that aborts the clipboard wait of the trigger in progress, or of
    /// the next trigger when none is waiting. A cancel is consumed by one wait.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Run one trigger cycle end to end. Each call starts a fresh session, so a
    /// result is shown at most once per call.
    pub fn trigger(&mut self) -> Result<PipelineOutcome, PipelineError> {
        self.cycles += 1;
        let cycle = self.cycles;
        let mut session = ScoringSession::begin(cycle);

        event!(target: "belot_cli::pipeline", Level::INFO, cycle, "trigger received; capturing");
        self.capture.capture()?;

        let waited = wait_for_report(self.clipboard.as_mut(), self.policy, &self.cancel);
        self.cancel.reset();
        let report = match waited {
            WaitOutcome::Ready(text) => text,
            WaitOutcome::TimedOut => return Ok(PipelineOutcome::TimedOut),
            WaitOutcome::Canceled => return Ok(PipelineOutcome::Canceled),
        };

        let labels = self.page.read_labels()?;
        let inputs = RoundInputs {
            report,
            trump_label: labels.trump_label,
            combinations: labels.combinations,
        };

        let Some(snapshot) = session.evaluate(&inputs).cloned() else {
            return Ok(PipelineOutcome::NotReady);
        };
        session.present(&mut self.sink)?;

        event!(
            target: "belot_cli::pipeline",
            Level::INFO,
            cycle,
            headline = %snapshot.result.headline(),
            "result presented"
        );
        Ok(PipelineOutcome::Presented(snapshot))
    }
}
