//! Top-level declaration scanner
//!
//! This crate splits a TypeScript-flavoured source file into its top-level
//! statements: each [`SourceNode`] carries a structural category, the byte
//! span of the statement, the spans of the comments directly above it, the
//! marker flags found among its head modifiers (`export`, `const`,
//! `declare`), and the declared name. The scanner is purely lexical: it
//! never validates syntax and never fails; unrecognized statements come
//! back as [`NodeCategory::Unknown`] and still carry their text.

pub mod assembling;
pub mod loader;
pub mod node;
pub mod scanner;
pub mod token;

pub use loader::{LoaderError, SourceFile, SourceLoader};
pub use node::{NodeCategory, SourceNode};
pub use token::Token;

/// Parse source text into its top-level nodes
pub fn parse(source: &str) -> SourceFile {
    SourceFile::parse(source)
}
