use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use belot_core::game::serialization::EvaluationSnapshot;
use belot_core::game::session::ResultSink;
use tracing::{Level, event};

use crate::error::PipelineError;

/// Prints the result card in the same shape the table page shows it.
pub struct ConsoleSink<W: Write> {
    out: W,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_card(&mut self, snapshot: &EvaluationSnapshot) -> io::Result<()> {
        let headline = match snapshot.result.score() {
            Some(score) => format!("{score} puncte"),
            None => snapshot.result.headline(),
        };
        writeln!(self.out, "Rezultat Final")?;
        writeln!(self.out, "{headline}")?;
        writeln!(self.out, "{}", snapshot.result.details())?;
        self.out.flush()
    }
}

impl<W: Write> ResultSink for ConsoleSink<W> {
    type Error = PipelineError;

    fn present(&mut self, snapshot: &EvaluationSnapshot) -> Result<(), PipelineError> {
        self.write_card(snapshot).map_err(PipelineError::Console)
    }
}

/// Writes the snapshot as pretty JSON, standing in for the page's score input.
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ResultSink for JsonFileSink {
    type Error = PipelineError;

    fn present(&mut self, snapshot: &EvaluationSnapshot) -> Result<(), PipelineError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| PipelineError::Io {
                context: "creating result directory",
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let json = snapshot.to_json()?;
        fs::write(&self.path, json).map_err(|source| PipelineError::Io {
            context: "writing result file",
            path: self.path.clone(),
            source,
        })?;
        event!(
            target: "belot_cli::sink",
            Level::INFO,
            path = %self.path.display(),
            "result written"
        );
        Ok(())
    }
}

/// Delivers to every sink in order, stopping at the first failure.
#[derive(Default)]
pub struct SinkSet {
    sinks: Vec<Box<dyn ResultSink<Error = PipelineError>>>,
}

impl SinkSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, sink: impl ResultSink<Error = PipelineError> + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl ResultSink for SinkSet {
    type Error = PipelineError;

    fn present(&mut self, snapshot: &EvaluationSnapshot) -> Result<(), PipelineError> {
        for sink in self.sinks.iter_mut() {
            sink.present(snapshot)?;
        }
        Ok(())
    }
}
