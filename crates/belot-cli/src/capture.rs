use std::process::{Command, Stdio};
use std::time::Instant;

use tracing::{Level, event};

use crate::config::CaptureConfig;
use crate::error::PipelineError;

/// Produces the card image (and, downstream, the calculator report) for a trigger.
pub trait CaptureProvider {
    fn capture(&mut self) -> Result<(), PipelineError>;
}

/// Used when nothing needs to run; the report is expected to appear on its own.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCapture;

impl CaptureProvider for NoopCapture {
    fn capture(&mut self) -> Result<(), PipelineError> {
        Ok(())
    }
}

/// Runs an external program and waits for it to exit successfully.
#[derive(Debug, Clone)]
pub struct CommandCapture {
    command: String,
    options: CaptureConfig,
}

impl CommandCapture {
    pub fn new(command: String, options: CaptureConfig) -> Self {
        Self { command, options }
    }
}

impl CaptureProvider for CommandCapture {
    fn capture(&mut self) -> Result<(), PipelineError> {
        let mut cmd = Command::new(&self.command);
        if !self.options.args.is_empty() {
            cmd.args(&self.options.args);
        }
        if let Some(dir) = &self.options.working_dir {
            cmd.current_dir(dir);
        }
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::inherit());

        let start = Instant::now();
        let status = cmd.status().map_err(|source| PipelineError::Spawn {
            command: self.command.clone(),
            source,
        })?;

        event!(
            target: "belot_cli::capture",
            Level::DEBUG,
            command = %self.command,
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            success = status.success(),
            "capture command finished"
        );

        if !status.success() {
            return Err(PipelineError::CaptureStatus {
                command: self.command.clone(),
                status,
            });
        }
        Ok(())
    }
}

/// Pick the capture provider described by the configuration.
pub fn from_config(config: &CaptureConfig) -> Box<dyn CaptureProvider> {
    match &config.command {
        Some(command) => Box::new(CommandCapture::new(command.clone(), config.clone())),
        None => {
            event!(
                target: "belot_cli::capture",
                Level::DEBUG,
                "no capture command configured; waiting for clipboard only"
            );
            Box::new(NoopCapture)
        }
    }
}
