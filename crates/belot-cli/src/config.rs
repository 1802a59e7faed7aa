use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::Level;

const DEFAULT_POLL_INTERVAL_MS: u64 = 1_000;
const DEFAULT_TIMEOUT_MS: u64 = 20_000;
const DEFAULT_CLIPBOARD_PATH: &str = "belot/clipboard.txt";
const DEFAULT_TRUMP_LABEL_PATH: &str = "belot/page/coz.txt";
const DEFAULT_COMBINATIONS_PATH: &str = "belot/page/combinations.txt";
const DEFAULT_RESULT_JSON: &str = "belot/out/{run_id}/result.json";
const DEFAULT_LOG_DIR: &str = "belot/out/{run_id}";
const RUN_ID_ALLOWED: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789._-";

/// Root configuration for the score reader, loaded from YAML.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BelotConfig {
    pub run_id: String,
    #[serde(default)]
    pub clipboard: ClipboardConfig,
    #[serde(default)]
    pub page: PageConfig,
    #[serde(default)]
    pub capture: CaptureConfig,
    #[serde(default)]
    pub outputs: OutputsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl BelotConfig {
    /// Load configuration from a YAML file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let path_buf = path.to_path_buf();
        let file = File::open(path).map_err(|source| ConfigError::Read {
            source,
            path: path_buf.clone(),
        })?;
        let reader = BufReader::new(file);
        let mut cfg: BelotConfig =
            serde_yaml::from_reader(reader).map_err(|source| ConfigError::Parse {
                source,
                path: path_buf.clone(),
            })?;
        cfg.validate().map_err(|source| ConfigError::Invalid {
            path: path_buf,
            source,
        })?;
        Ok(cfg)
    }

    /// Configuration used when no file is given on the command line.
    pub fn fallback() -> Self {
        Self {
            run_id: "default".to_string(),
            clipboard: ClipboardConfig::default(),
            page: PageConfig::default(),
            capture: CaptureConfig::default(),
            outputs: OutputsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    /// Validate the configuration without performing I/O.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        validate_run_id(&self.run_id)?;
        self.clipboard.validate()?;
        self.page.validate()?;
        self.capture.validate()?;
        self.outputs.validate(&self.run_id)?;
        self.logging.normalize();
        Ok(())
    }

    /// Resolve output templates (e.g., `{run_id}` placeholders) into concrete paths.
    pub fn resolved_outputs(&self) -> ResolvedOutputs {
        ResolvedOutputs {
            result_json: resolve_template(&self.run_id, &self.outputs.result_json),
            log_dir: resolve_template(&self.run_id, &self.logging.log_dir),
        }
    }
}

/// Where the external calculator leaves its text, and how long to wait for it.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ClipboardConfig {
    #[serde(default = "default_clipboard_path")]
    pub path: PathBuf,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            path: default_clipboard_path(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ClipboardConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_path("clipboard.path", &self.path)?;

        if self.poll_interval_ms == 0 {
            return Err(ValidationError::InvalidField {
                field: "clipboard.poll_interval_ms".to_string(),
                message: "poll interval must be greater than zero".to_string(),
            });
        }

        if self.timeout_ms < self.poll_interval_ms {
            return Err(ValidationError::InvalidField {
                field: "clipboard.timeout_ms".to_string(),
                message: "timeout must be at least one poll interval".to_string(),
            });
        }

        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

fn default_clipboard_path() -> PathBuf {
    PathBuf::from(DEFAULT_CLIPBOARD_PATH)
}

fn default_poll_interval_ms() -> u64 {
    DEFAULT_POLL_INTERVAL_MS
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

/// Files that mirror the two labels shown on the table page.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PageConfig {
    #[serde(default = "default_trump_label_path")]
    pub trump_label_path: PathBuf,
    #[serde(default = "default_combinations_path")]
    pub combinations_path: PathBuf,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            trump_label_path: default_trump_label_path(),
            combinations_path: default_combinations_path(),
        }
    }
}

impl PageConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_path("page.trump_label_path", &self.trump_label_path)?;
        validate_path("page.combinations_path", &self.combinations_path)
    }
}

fn default_trump_label_path() -> PathBuf {
    PathBuf::from(DEFAULT_TRUMP_LABEL_PATH)
}

fn default_combinations_path() -> PathBuf {
    PathBuf::from(DEFAULT_COMBINATIONS_PATH)
}

/// Optional program run at the start of each trigger to produce the report.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CaptureConfig {
    #[serde(default)]
    pub command: Option<String>,
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default)]
    pub working_dir: Option<PathBuf>,
}

impl CaptureConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(command) = &self.command
            && command.trim().is_empty()
        {
            return Err(ValidationError::InvalidField {
                field: "capture.command".to_string(),
                message: "command must not be empty when set".to_string(),
            });
        }
        Ok(())
    }
}

/// Output artifact configuration.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OutputsConfig {
    #[serde(default = "default_result_json")]
    pub result_json: String,
}

impl Default for OutputsConfig {
    fn default() -> Self {
        Self {
            result_json: default_result_json(),
        }
    }
}

impl OutputsConfig {
    fn validate(&self, run_id: &str) -> Result<(), ValidationError> {
        if self.result_json.trim().is_empty() {
            return Err(ValidationError::InvalidField {
                field: "outputs.result_json".to_string(),
                message: "path must not be empty".to_string(),
            });
        }

        let resolved = resolve_template(run_id, &self.result_json);
        if resolved.file_name().is_none() {
            return Err(ValidationError::InvalidField {
                field: "outputs.result_json".to_string(),
                message: "resolved path does not name a file".to_string(),
            });
        }
        Ok(())
    }
}

fn default_result_json() -> String {
    DEFAULT_RESULT_JSON.to_string()
}

/// Logging configuration defaults to human-readable stderr output.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enable_structured: bool,
    #[serde(default = "default_tracing_level")]
    pub tracing_level: String,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enable_structured: false,
            tracing_level: default_tracing_level(),
            log_dir: default_log_dir(),
        }
    }
}

impl LoggingConfig {
    fn normalize(&mut self) {
        if self.tracing_level.trim().is_empty() {
            self.tracing_level = default_tracing_level();
        }
        if self.log_dir.trim().is_empty() {
            self.log_dir = default_log_dir();
        }
    }

    pub fn level(&self) -> Option<Level> {
        match self.tracing_level.to_ascii_lowercase().as_str() {
            "trace" => Some(Level::TRACE),
            "debug" => Some(Level::DEBUG),
            "info" => Some(Level::INFO),
            "warn" | "warning" => Some(Level::WARN),
            "error" => Some(Level::ERROR),
            _ => None,
        }
    }
}

fn default_tracing_level() -> String {
    "info".to_string()
}

fn default_log_dir() -> String {
    DEFAULT_LOG_DIR.to_string()
}

fn validate_run_id(run_id: &str) -> Result<(), ValidationError> {
    if run_id.trim().is_empty() {
        return Err(ValidationError::InvalidField {
            field: "run_id".to_string(),
            message: "run_id must not be empty".to_string(),
        });
    }

    if !run_id.chars().all(|c| RUN_ID_ALLOWED.contains(c)) {
        return Err(ValidationError::InvalidField {
            field: "run_id".to_string(),
            message: "run_id may only contain alphanumeric characters, '.', '_' or '-'".to_string(),
        });
    }

    Ok(())
}

fn validate_path(field: &str, path: &Path) -> Result<(), ValidationError> {
    if path.as_os_str().is_empty() {
        return Err(ValidationError::InvalidField {
            field: field.to_string(),
            message: "path must not be empty".to_string(),
        });
    }
    Ok(())
}

fn resolve_template(run_id: &str, template: &str) -> PathBuf {
    let replaced = template.replace("{run_id}", run_id);
    PathBuf::from(replaced)
}

/// Fully resolved output paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOutputs {
    pub result_json: PathBuf,
    pub log_dir: PathBuf,
}

/// Errors surfaced when loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        #[source]
        source: serde_yaml::Error,
        path: PathBuf,
    },
    #[error("invalid configuration in {path:?}: {source}")]
    Invalid {
        path: PathBuf,
        source: ValidationError,
    },
}

/// Validation failures captured with contextual metadata.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{field}: {message}")]
    InvalidField { field: String, message: String },
}
