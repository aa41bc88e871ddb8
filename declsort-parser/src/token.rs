//! Token definitions for the top-level scanner
//!
//! The tokens are defined using the logos derive macro. The scanner only
//! needs enough lexical structure to find statement boundaries and classify
//! statement heads: comments, string literals (so braces and semicolons
//! inside them are not mistaken for structure), declaration keywords,
//! brackets, and semicolons. Everything else falls through to
//! [`Token::Other`], so any input scans to completion.

use logos::Logos;

/// All tokens produced by the top-level scanner
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    // Trivia
    #[regex(r"//[^\n]*")]
    LineComment,
    #[regex(r"/\*[^*]*\*+([^/*][^*]*\*+)*/")]
    BlockComment,
    #[token("\n")]
    Newline,
    #[regex(r"[ \t\r]+")]
    Whitespace,

    // Literals
    #[regex(r#""([^"\\\n]|\\.)*""#)]
    #[regex(r"'([^'\\\n]|\\.)*'")]
    StringLiteral,
    // Template literals may span lines and carry escapes
    #[regex(r"`([^`\\]|\\[\s\S])*`")]
    TemplateLiteral,
    #[regex(r"[0-9][0-9A-Za-z_.]*")]
    Number,

    // Declaration keywords
    #[token("import")]
    KwImport,
    #[token("export")]
    KwExport,
    #[token("const")]
    KwConst,
    #[token("let")]
    KwLet,
    #[token("var")]
    KwVar,
    #[token("function")]
    KwFunction,
    #[token("class")]
    KwClass,
    #[token("interface")]
    KwInterface,
    #[token("type")]
    KwType,
    #[token("enum")]
    KwEnum,
    #[token("declare")]
    KwDeclare,
    #[token("default")]
    KwDefault,
    #[token("async")]
    KwAsync,
    #[token("abstract")]
    KwAbstract,
    #[token("namespace")]
    KwNamespace,
    #[token("module")]
    KwModule,

    #[regex(r"[A-Za-z_$][A-Za-z0-9_$]*")]
    Identifier,

    // Structure
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(";")]
    Semicolon,

    /// Any other non-whitespace character (operators, punctuation, ...).
    /// Lowest priority, so it only fires when nothing longer matches.
    #[regex(r"[^\s]", priority = 0)]
    Other,
}

impl Token {
    /// Whitespace, newlines, and comments
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            Token::Whitespace | Token::Newline | Token::LineComment | Token::BlockComment
        )
    }

    /// Line or block comment
    pub fn is_comment(&self) -> bool {
        matches!(self, Token::LineComment | Token::BlockComment)
    }

    /// Modifier keywords that may precede the defining keyword of a statement
    pub fn is_modifier(&self) -> bool {
        matches!(
            self,
            Token::KwExport
                | Token::KwDeclare
                | Token::KwDefault
                | Token::KwAsync
                | Token::KwAbstract
        )
    }

    /// Tokens that can begin a new top-level declaration. Comments count:
    /// a comment after a line break belongs to the next declaration.
    pub fn is_declaration_start(&self) -> bool {
        self.is_modifier()
            || self.is_comment()
            || matches!(
                self,
                Token::KwImport
                    | Token::KwConst
                    | Token::KwLet
                    | Token::KwVar
                    | Token::KwFunction
                    | Token::KwClass
                    | Token::KwInterface
                    | Token::KwType
                    | Token::KwEnum
                    | Token::KwNamespace
                    | Token::KwModule
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::tokenize;

    #[test]
    fn test_keywords_and_identifiers() {
        let tokens = tokenize("export const exported");
        assert_eq!(
            tokens,
            vec![
                Token::KwExport,
                Token::Whitespace,
                Token::KwConst,
                Token::Whitespace,
                Token::Identifier,
            ]
        );
    }

    #[test]
    fn test_comments() {
        let tokens = tokenize("// line\n/* block */");
        assert_eq!(
            tokens,
            vec![Token::LineComment, Token::Newline, Token::BlockComment]
        );
    }

    #[test]
    fn test_multiline_block_comment() {
        let tokens = tokenize("/* a\n * b\n */");
        assert_eq!(tokens, vec![Token::BlockComment]);
    }

    #[test]
    fn test_string_literals() {
        let tokens = tokenize(r#""double" 'single' `template`"#);
        assert_eq!(
            tokens,
            vec![
                Token::StringLiteral,
                Token::Whitespace,
                Token::StringLiteral,
                Token::Whitespace,
                Token::TemplateLiteral,
            ]
        );
    }

    #[test]
    fn test_braces_inside_strings_are_opaque() {
        let tokens = tokenize(r#""{" `}`"#);
        assert_eq!(
            tokens,
            vec![
                Token::StringLiteral,
                Token::Whitespace,
                Token::TemplateLiteral,
            ]
        );
    }

    #[test]
    fn test_unknown_characters_become_other() {
        let tokens = tokenize("= =>");
        assert!(tokens.contains(&Token::Other));
        assert!(!tokens.is_empty());
    }

    #[test]
    fn test_statement_punctuation() {
        let tokens = tokenize("{ } ( ) [ ] ;");
        let significant: Vec<Token> = tokens.into_iter().filter(|t| !t.is_trivia()).collect();
        assert_eq!(
            significant,
            vec![
                Token::LBrace,
                Token::RBrace,
                Token::LParen,
                Token::RParen,
                Token::LBracket,
                Token::RBracket,
                Token::Semicolon,
            ]
        );
    }
}
