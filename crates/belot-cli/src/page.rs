use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::PageConfig;
use crate::error::PipelineError;

/// Labels shown on the table page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLabels {
    pub trump_label: String,
    pub combinations: String,
}

pub trait PageSource {
    fn read_labels(&mut self) -> Result<PageLabels, PipelineError>;
}

/// Page labels mirrored into two text files. A missing file reads as empty.
#[derive(Debug, Clone)]
pub struct FilePage {
    trump_label_path: PathBuf,
    combinations_path: PathBuf,
}

impl FilePage {
    pub fn new(trump_label_path: impl Into<PathBuf>, combinations_path: impl Into<PathBuf>) -> Self {
        Self {
            trump_label_path: trump_label_path.into(),
            combinations_path: combinations_path.into(),
        }
    }

    pub fn from_config(config: &PageConfig) -> Self {
        Self::new(&config.trump_label_path, &config.combinations_path)
    }
}

impl PageSource for FilePage {
    fn read_labels(&mut self) -> Result<PageLabels, PipelineError> {
        Ok(PageLabels {
            trump_label: read_optional(&self.trump_label_path, "reading trump label")?,
            combinations: read_optional(&self.combinations_path, "reading combinations label")?,
        })
    }
}

fn read_optional(path: &Path, context: &'static str) -> Result<String, PipelineError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(String::new()),
        Err(source) => Err(PipelineError::Io {
            context,
            path: path.to_path_buf(),
            source,
        }),
    }
}
