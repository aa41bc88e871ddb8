//! Top-level node model
//!
//! A [`SourceNode`] is one top-level statement of a source file, carrying
//! its byte span, the spans of the comments directly above it, the marker
//! flags found among its head modifiers, and its declared name. Nodes only
//! hold offsets; text is sliced from the owning source on demand.

use std::ops::Range;

/// Structural category of a top-level statement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeCategory {
    Import,
    Variable,
    Function,
    Class,
    Interface,
    TypeAlias,
    Enumeration,
    /// Trailing comments at the end of the file with no statement below them
    CommentOnly,
    /// Anything the scanner does not recognize (expression statements,
    /// namespaces, re-export lists). Still ordered, by its other traits.
    Unknown,
}

/// One top-level statement with its attached leading trivia
#[derive(Debug, Clone)]
pub struct SourceNode {
    pub category: NodeCategory,
    /// Span of the statement proper, excluding leading comments
    pub span: Range<usize>,
    /// Spans of the comments directly above the statement, in source order
    pub leading_comments: Vec<Range<usize>>,
    /// An `export` modifier is present
    pub exported: bool,
    /// A `const` keyword is present among the head tokens
    pub constant: bool,
    /// A `declare` modifier is present
    pub declared: bool,
    /// Import statement carrying a `type` marker anywhere in its body
    pub type_only: bool,
    /// Declared name, resolved per category (module specifier for imports,
    /// first binding for variables, declared identifier otherwise)
    pub name: Option<String>,
}

impl SourceNode {
    /// Text of the statement proper
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.span.clone()]
    }

    /// Span from the first leading comment to the end of the statement
    pub fn full_span(&self) -> Range<usize> {
        let start = self
            .leading_comments
            .first()
            .map(|c| c.start)
            .unwrap_or(self.span.start);
        start..self.span.end
    }

    /// Text including the leading comments
    pub fn full_text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.full_span()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_span_starts_at_first_comment() {
        let node = SourceNode {
            category: NodeCategory::Variable,
            span: 10..20,
            leading_comments: vec![0..4, 5..9],
            exported: false,
            constant: true,
            declared: false,
            type_only: false,
            name: Some("x".to_string()),
        };
        assert_eq!(node.full_span(), 0..20);
    }

    #[test]
    fn test_full_span_without_comments_is_the_statement_span() {
        let node = SourceNode {
            category: NodeCategory::Unknown,
            span: 3..7,
            leading_comments: Vec::new(),
            exported: false,
            constant: false,
            declared: false,
            type_only: false,
            name: None,
        };
        assert_eq!(node.full_span(), 3..7);
    }
}
