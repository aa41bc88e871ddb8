//! Scanning wrappers around the logos lexer
//!
//! Tokenization is handled entirely by logos; these helpers collect the
//! token stream. The catch-all [`Token::Other`] rule makes the token set
//! total, so the error branch is only a belt against pathological input.

use crate::token::Token;
use logos::Logos;

/// Tokenize a string and collect all tokens
pub fn tokenize(source: &str) -> Vec<Token> {
    tokenize_with_spans(source)
        .into_iter()
        .map(|(token, _)| token)
        .collect()
}

/// Tokenize a string and collect tokens with their byte spans
pub fn tokenize_with_spans(source: &str) -> Vec<(Token, logos::Span)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let token = result.unwrap_or(Token::Other);
        tokens.push((token, lexer.span()));
    }

    tokens
}
