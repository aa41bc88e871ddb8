//! CLI error taxonomy
//!
//! Everything fatal funnels into [`CliError`] and is reported once at the
//! top level. Output is only ever written after a file's full rewritten
//! text exists in memory, so none of these can leave a truncated file.

use declsort_config::ConfigError;
use std::path::PathBuf;

#[derive(Debug)]
pub enum CliError {
    /// Policy loading or validation failed; aborts before any file is
    /// processed
    Config(ConfigError),
    /// A declared input path does not exist
    InputNotFound(PathBuf),
    /// An input exists but could not be read
    Read { path: PathBuf, message: String },
    /// Writing the output or its backup failed
    OutputPath { path: PathBuf, message: String },
    /// `--output` names one target but several inputs were given
    OutputWithManyInputs,
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Config(err) => write!(f, "{}", err),
            CliError::InputNotFound(path) => {
                write!(f, "Input file not found: {}", path.display())
            }
            CliError::Read { path, message } => {
                write!(f, "Could not read {}: {}", path.display(), message)
            }
            CliError::OutputPath { path, message } => {
                write!(f, "Could not write {}: {}", path.display(), message)
            }
            CliError::OutputWithManyInputs => {
                write!(f, "--output takes a single input file")
            }
        }
    }
}

impl std::error::Error for CliError {}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::Config(err)
    }
}
