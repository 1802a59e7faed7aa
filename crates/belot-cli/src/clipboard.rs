//! Waiting for the calculator's text to show up on the clipboard.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use belot_core::report::contains_marker;
use tracing::{Level, event};

use crate::config::ClipboardConfig;
use crate::error::PipelineError;

pub trait ClipboardSource {
    /// Current clipboard text, or `None` when there is none.
    fn read_text(&mut self) -> Result<Option<String>, PipelineError>;
}

/// Clipboard stand-in backed by a file that the calculator overwrites.
#[derive(Debug, Clone)]
pub struct FileClipboard {
    path: PathBuf,
}

impl FileClipboard {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ClipboardSource for FileClipboard {
    fn read_text(&mut self) -> Result<Option<String>, PipelineError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(PipelineError::Io {
                context: "reading clipboard file",
                path: self.path.clone(),
                source,
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitPolicy {
    pub interval: Duration,
    pub timeout: Duration,
}

impl WaitPolicy {
    pub fn from_config(config: &ClipboardConfig) -> Self {
        Self {
            interval: config.poll_interval(),
            timeout: config.timeout(),
        }
    }
}

/// Shared flag that stops a pending wait from another thread.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    canceled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.canceled.store(true, Ordering::SeqCst);
    }

    pub fn is_canceled(&self) -> bool {
        self.canceled.load(Ordering::SeqCst)
    }

    pub fn reset(&self) {
        self.canceled.store(false, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaitOutcome {
    Ready(String),
    TimedOut,
    Canceled,
}

/// Poll `source` until its text carries the calculator marker, the policy's
/// timeout elapses, or `cancel` is set. Read errors are logged and polling
/// continues.
pub fn wait_for_report(
    source: &mut dyn ClipboardSource,
    policy: WaitPolicy,
    cancel: &CancelToken,
) -> WaitOutcome {
    let start = Instant::now();
    let mut polls = 0u32;

    loop {
        if cancel.is_canceled() {
            event!(target: "belot_cli::clipboard", Level::INFO, polls, "clipboard wait canceled");
            return WaitOutcome::Canceled;
        }

        polls += 1;
        match source.read_text() {
            Ok(Some(text)) if contains_marker(&text) => {
                event!(
                    target: "belot_cli::clipboard",
                    Level::INFO,
                    polls,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "calculator results detected on clipboard"
                );
                return WaitOutcome::Ready(text);
            }
            Ok(_) => {}
            Err(err) => {
                event!(
                    target: "belot_cli::clipboard",
                    Level::WARN,
                    error = %err,
                    "error reading clipboard"
                );
            }
        }

        let elapsed = start.elapsed();
        if elapsed >= policy.timeout {
            event!(
                target: "belot_cli::clipboard",
                Level::INFO,
                polls,
                timeout_ms = policy.timeout.as_millis() as u64,
                "clipboard monitoring timed out"
            );
            return WaitOutcome::TimedOut;
        }
        thread::sleep(policy.interval.min(policy.timeout - elapsed));
    }
}
