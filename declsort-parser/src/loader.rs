//! Source loading utilities
//!
//! `SourceLoader` reads source text from a file or a string and parses it
//! into a [`SourceFile`]. Used by both production code and tests.

use crate::assembling::assemble;
use crate::node::SourceNode;
use crate::scanner::tokenize_with_spans;
use std::fs;
use std::path::Path;

/// Error that can occur when loading source files
#[derive(Debug, Clone)]
pub enum LoaderError {
    /// IO error when reading the file
    IoError(String),
}

impl std::fmt::Display for LoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoaderError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for LoaderError {}

impl From<std::io::Error> for LoaderError {
    fn from(err: std::io::Error) -> Self {
        LoaderError::IoError(err.to_string())
    }
}

/// A parsed source file: the original text plus its top-level nodes
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub source: String,
    pub nodes: Vec<SourceNode>,
}

impl SourceFile {
    /// Tokenize and assemble source text into its top-level nodes
    pub fn parse(source: impl Into<String>) -> SourceFile {
        let source = source.into();
        let tokens = tokenize_with_spans(&source);
        let nodes = assemble(&tokens, &source);
        SourceFile { source, nodes }
    }
}

/// Source loader
///
/// # Example
///
/// ```rust
/// use declsort_parser::SourceLoader;
///
/// let file = SourceLoader::from_string("const a = 1;\n").parse();
/// assert_eq!(file.nodes.len(), 1);
/// ```
pub struct SourceLoader {
    source: String,
}

impl SourceLoader {
    /// Load from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let source = fs::read_to_string(path)?;
        Ok(SourceLoader { source })
    }

    /// Load from a string
    pub fn from_string(source: impl Into<String>) -> Self {
        SourceLoader {
            source: source.into(),
        }
    }

    /// Parse the loaded text into a [`SourceFile`]
    pub fn parse(self) -> SourceFile {
        SourceFile::parse(self.source)
    }
}
