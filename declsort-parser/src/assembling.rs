//! Assembly of the token stream into top-level nodes
//!
//! The scanner produces a flat token stream; this pass groups it into
//! statements. Comments seen between statements accumulate as pending
//! trivia and attach to the next statement as its leading comments. A
//! statement closes at a depth-zero semicolon, at the closing brace of a
//! braced-body declaration, at a line break followed by the start of a new
//! declaration, at a blank line, or at end of input. The pass is purely
//! lexical; it never rejects input.

use crate::node::{NodeCategory, SourceNode};
use crate::token::Token;
use std::ops::Range;

type Spanned = (Token, Range<usize>);

/// Group a token stream into top-level nodes
pub fn assemble(tokens: &[Spanned], source: &str) -> Vec<SourceNode> {
    let mut nodes = Vec::new();
    let mut pending: Vec<Range<usize>> = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        let (token, span) = &tokens[i];
        if matches!(token, Token::Whitespace | Token::Newline) {
            i += 1;
        } else if token.is_comment() {
            pending.push(span.clone());
            i += 1;
        } else {
            let (node, next) = read_statement(tokens, i, source, std::mem::take(&mut pending));
            nodes.push(node);
            i = next;
        }
    }

    if let (Some(first), Some(last)) = (pending.first(), pending.last()) {
        nodes.push(SourceNode {
            category: NodeCategory::CommentOnly,
            span: first.start..last.end,
            leading_comments: Vec::new(),
            exported: false,
            constant: false,
            declared: false,
            type_only: false,
            name: None,
        });
    }

    nodes
}

fn read_statement(
    tokens: &[Spanned],
    start: usize,
    source: &str,
    leading: Vec<Range<usize>>,
) -> (SourceNode, usize) {
    let (category, braced) = head(tokens, start);
    let (next, end) = boundary(tokens, start, braced);
    let stmt = &tokens[start..next];

    let exported = head_has(stmt, Token::KwExport);
    let declared = head_has(stmt, Token::KwDeclare);
    let constant = head_has(stmt, Token::KwConst);
    let type_only = matches!(category, NodeCategory::Import)
        && stmt.iter().any(|(t, _)| matches!(t, Token::KwType));
    let name = resolve_name(category, stmt, source);

    let node = SourceNode {
        category,
        span: tokens[start].1.start..end,
        leading_comments: leading,
        exported,
        constant,
        declared,
        type_only,
        name,
    };
    (node, next)
}

/// Classify the statement from its head tokens, skipping modifiers.
/// Returns the category and whether the statement body is brace-delimited
/// (so a closing brace back at depth zero ends it).
fn head(tokens: &[Spanned], start: usize) -> (NodeCategory, bool) {
    let mut saw_const = false;
    for (token, _) in &tokens[start..] {
        if token.is_trivia() || token.is_modifier() {
            continue;
        }
        match token {
            Token::KwConst if !saw_const => saw_const = true,
            Token::KwEnum => return (NodeCategory::Enumeration, true),
            Token::KwImport => return (NodeCategory::Import, false),
            Token::KwLet | Token::KwVar => return (NodeCategory::Variable, false),
            Token::KwFunction => return (NodeCategory::Function, true),
            Token::KwClass => return (NodeCategory::Class, true),
            Token::KwInterface => return (NodeCategory::Interface, true),
            Token::KwType => return (NodeCategory::TypeAlias, false),
            Token::KwNamespace | Token::KwModule => return (NodeCategory::Unknown, true),
            _ => break,
        }
    }
    if saw_const {
        (NodeCategory::Variable, false)
    } else {
        (NodeCategory::Unknown, false)
    }
}

/// Find the end of the statement opening at `start`.
/// Returns the exclusive token index and the end byte offset.
fn boundary(tokens: &[Spanned], start: usize, braced: bool) -> (usize, usize) {
    let mut depth = 0usize;
    let mut end = tokens[start].1.end;
    let mut i = start;

    while i < tokens.len() {
        let (token, span) = &tokens[i];
        match token {
            Token::LBrace | Token::LParen | Token::LBracket => {
                depth += 1;
                end = span.end;
                i += 1;
            }
            Token::RBrace => {
                depth = depth.saturating_sub(1);
                end = span.end;
                i += 1;
                if depth == 0 && braced {
                    return close_braced(tokens, i, end);
                }
            }
            Token::RParen | Token::RBracket => {
                depth = depth.saturating_sub(1);
                end = span.end;
                i += 1;
            }
            Token::Semicolon if depth == 0 => {
                end = span.end;
                i += 1;
                return absorb_trailing_comment(tokens, i, end);
            }
            Token::Newline if depth == 0 => {
                if line_break_ends_statement(tokens, i + 1) {
                    return (i, end);
                }
                i += 1;
            }
            Token::Whitespace | Token::Newline => {
                i += 1;
            }
            _ => {
                end = span.end;
                i += 1;
            }
        }
    }

    (i, end)
}

/// After the closing brace of a braced body: absorb an immediately
/// following semicolon, then any same-line trailing comment.
fn close_braced(tokens: &[Spanned], i: usize, end: usize) -> (usize, usize) {
    let mut j = i;
    while j < tokens.len() && matches!(tokens[j].0, Token::Whitespace) {
        j += 1;
    }
    if j < tokens.len() && matches!(tokens[j].0, Token::Semicolon) {
        return absorb_trailing_comment(tokens, j + 1, tokens[j].1.end);
    }
    absorb_trailing_comment(tokens, i, end)
}

/// Absorb comments on the same line as a just-closed statement, so that
/// `const x = 1; // note` travels as one node.
fn absorb_trailing_comment(tokens: &[Spanned], i: usize, end: usize) -> (usize, usize) {
    let mut close = i;
    let mut end = end;
    let mut j = i;
    loop {
        while j < tokens.len() && matches!(tokens[j].0, Token::Whitespace) {
            j += 1;
        }
        if j < tokens.len() && tokens[j].0.is_comment() {
            end = tokens[j].1.end;
            j += 1;
            close = j;
        } else {
            return (close, end);
        }
    }
}

/// A depth-zero line break closes the open statement when a blank line
/// follows, when the next line starts a new declaration or comment, or at
/// end of input.
fn line_break_ends_statement(tokens: &[Spanned], mut i: usize) -> bool {
    while i < tokens.len() {
        match tokens[i].0 {
            Token::Whitespace => i += 1,
            Token::Newline => return true,
            token => return token.is_declaration_start(),
        }
    }
    true
}

/// Marker lookup over the statement head: trivia is skipped, modifiers and
/// the `const` keyword are looked through, anything else ends the head.
fn head_has(stmt: &[Spanned], wanted: Token) -> bool {
    for (token, _) in stmt {
        if token.is_trivia() {
            continue;
        }
        if *token == wanted {
            return true;
        }
        if token.is_modifier() || matches!(token, Token::KwConst) {
            continue;
        }
        return false;
    }
    false
}

fn resolve_name(category: NodeCategory, stmt: &[Spanned], source: &str) -> Option<String> {
    match category {
        NodeCategory::Import => stmt
            .iter()
            .find(|(t, _)| matches!(t, Token::StringLiteral | Token::TemplateLiteral))
            .map(|(_, span)| strip_quotes(&source[span.clone()]).to_string()),
        NodeCategory::Variable => {
            ident_after(stmt, &[Token::KwConst, Token::KwLet, Token::KwVar], source)
        }
        NodeCategory::Function => ident_after(stmt, &[Token::KwFunction], source),
        NodeCategory::Class => ident_after(stmt, &[Token::KwClass], source),
        NodeCategory::Interface => ident_after(stmt, &[Token::KwInterface], source),
        NodeCategory::Enumeration => ident_after(stmt, &[Token::KwEnum], source),
        NodeCategory::TypeAlias => ident_after(stmt, &[Token::KwType], source),
        NodeCategory::CommentOnly | NodeCategory::Unknown => None,
    }
}

/// First identifier after one of `keywords`, looking through destructuring
/// brackets. Anything else (an opening paren of an anonymous function, an
/// operator) means the statement declares no usable name.
fn ident_after(stmt: &[Spanned], keywords: &[Token], source: &str) -> Option<String> {
    let mut seen = false;
    for (token, span) in stmt {
        if seen {
            match token {
                t if t.is_trivia() => continue,
                Token::Identifier => return Some(source[span.clone()].to_string()),
                Token::LBrace | Token::LBracket => continue,
                _ => return None,
            }
        } else if keywords.contains(token) {
            seen = true;
        }
    }
    None
}

fn strip_quotes(literal: &str) -> &str {
    let mut chars = literal.chars();
    match (chars.next(), literal.len()) {
        (Some('"' | '\'' | '`'), n) if n >= 2 => &literal[1..n - 1],
        _ => literal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::tokenize_with_spans;

    fn nodes_of(source: &str) -> Vec<SourceNode> {
        let tokens = tokenize_with_spans(source);
        assemble(&tokens, source)
    }

    #[test]
    fn test_semicolon_closes_statement() {
        let source = "const a = 1;\nconst b = 2;\n";
        let nodes = nodes_of(source);
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].text(source), "const a = 1;");
        assert_eq!(nodes[1].text(source), "const b = 2;");
    }

    #[test]
    fn test_braced_body_closes_statement() {
        let source = "function f() {\n  return 1;\n}\nconst a = 1;\n";
        let nodes = nodes_of(source);
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].text(source), "function f() {\n  return 1;\n}");
        assert_eq!(nodes[0].category, NodeCategory::Function);
    }

    #[test]
    fn test_import_braces_do_not_close_the_statement() {
        let source = "import { a, b } from \"m\";\n";
        let nodes = nodes_of(source);
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].category, NodeCategory::Import);
        assert_eq!(nodes[0].name.as_deref(), Some("m"));
    }

    #[test]
    fn test_leading_comments_attach_to_the_next_statement() {
        let source = "// doc\nconst a = 1;\n";
        let nodes = nodes_of(source);
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].leading_comments.len(), 1);
        assert_eq!(nodes[0].full_text(source), "// doc\nconst a = 1;");
    }

    #[test]
    fn test_trailing_same_line_comment_is_absorbed() {
        let source = "const a = 1; // note\nconst b = 2;\n";
        let nodes = nodes_of(source);
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].text(source), "const a = 1; // note");
    }

    #[test]
    fn test_statement_without_semicolon_ends_before_next_declaration() {
        let source = "type A = string\nconst b = 2;\n";
        let nodes = nodes_of(source);
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].text(source), "type A = string");
        assert_eq!(nodes[0].category, NodeCategory::TypeAlias);
    }

    #[test]
    fn test_blank_line_closes_unterminated_statement() {
        let source = "run()\n\nstop()\n";
        let nodes = nodes_of(source);
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].text(source), "run()");
        assert_eq!(nodes[1].text(source), "stop()");
    }

    #[test]
    fn test_trailing_comments_become_a_comment_only_node() {
        let source = "const a = 1;\n\n// the end\n";
        let nodes = nodes_of(source);
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[1].category, NodeCategory::CommentOnly);
        assert_eq!(nodes[1].text(source), "// the end");
    }

    #[test]
    fn test_const_enum_is_an_enumeration() {
        let source = "const enum Color { Red }\n";
        let nodes = nodes_of(source);
        assert_eq!(nodes[0].category, NodeCategory::Enumeration);
        assert!(nodes[0].constant);
        assert_eq!(nodes[0].name.as_deref(), Some("Color"));
    }

    #[test]
    fn test_markers() {
        let source = "export declare const x: number;\n";
        let nodes = nodes_of(source);
        assert!(nodes[0].exported);
        assert!(nodes[0].declared);
        assert!(nodes[0].constant);
        assert_eq!(nodes[0].category, NodeCategory::Variable);
        assert_eq!(nodes[0].name.as_deref(), Some("x"));
    }

    #[test]
    fn test_type_only_import() {
        let source = "import type { A } from \"m\";\n";
        let nodes = nodes_of(source);
        assert!(nodes[0].type_only);
        assert_eq!(nodes[0].name.as_deref(), Some("m"));
    }

    #[test]
    fn test_destructured_binding_uses_the_first_name() {
        let source = "const { first, second } = pair;\n";
        let nodes = nodes_of(source);
        assert_eq!(nodes[0].name.as_deref(), Some("first"));
    }

    #[test]
    fn test_anonymous_default_export_has_no_name() {
        let source = "export default function () {\n  return 0;\n}\n";
        let nodes = nodes_of(source);
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].name, None);
        assert!(nodes[0].exported);
    }

    #[test]
    fn test_braced_body_with_trailing_semicolon() {
        let source = "enum E { A };\nconst x = 1;\n";
        let nodes = nodes_of(source);
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].text(source), "enum E { A };");
    }
}
