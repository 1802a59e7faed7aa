use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Failures of the collaborators around the evaluator.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("{context} {path:?}: {source}")]
    Io {
        context: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to start capture command '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("capture command '{command}' exited with {status}")]
    CaptureStatus { command: String, status: ExitStatus },
    #[error("failed to encode result: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write result to console: {0}")]
    Console(#[source] std::io::Error),
}
