//! Run configuration for writing operation results

use std::path::{Path, PathBuf};

/// Directory results are written to unless configured otherwise
pub const DEFAULT_OUTPUT_DIR: &str = "resultsOutputs";

/// Encoding used for result files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// The `rows=`/`cols=` coordinate text format
    #[default]
    Text,
    /// Pretty-printed JSON
    #[cfg(feature = "serde")]
    Json,
}

impl OutputFormat {
    /// File extension for results in this format
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            #[cfg(feature = "serde")]
            OutputFormat::Json => "json",
        }
    }
}

/// Configuration for writing operation results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Directory result files are written to, created on demand
    pub output_dir: PathBuf,
    /// Encoding of result files
    pub format: OutputFormat,
}

impl RunConfig {
    /// Set the output directory
    pub fn with_output_dir<P: Into<PathBuf>>(mut self, output_dir: P) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Set the output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            format: OutputFormat::Text,
        }
    }
}
