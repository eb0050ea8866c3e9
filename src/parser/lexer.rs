//! Lexer (tokenizer)
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the parser.
//! Whitespace, newlines and `//` comments are dropped; everything else is
//! either a token or a fatal [`LexError`].

use super::token::{Token, TokenKind};
use thiserror::Error;
use tracing::{debug, trace};

/// An unexpected character. Lexing stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[line {line}] Error: Unexpected character '{character}'.")]
pub struct LexError {
    pub character: char,
    pub line: usize,
}

/// Lexer over a single source string
pub struct Lexer {
    input: Vec<char>,
    /// Offset of the first character of the token being scanned
    start: usize,
    /// Offset of the next character to consume
    position: usize,
    line: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            start: 0,
            position: 0,
            line: 1,
        }
    }

    /// Tokenize the entire input.
    ///
    /// The returned vector always ends with exactly one [`TokenKind::Eof`].
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        while !self.is_at_end() {
            self.start = self.position;
            if let Some(token) = self.scan_token()? {
                trace!(kind = ?token.kind, text = %token.text, line = token.line, "token");
                tokens.push(token);
            }
        }

        tokens.push(Token::new(TokenKind::Eof, "", self.line));
        debug!(tokens = tokens.len(), lines = self.line, "tokenized source");
        Ok(tokens)
    }

    /// Scan one lexeme starting at `self.start`. Trivia yields `None`.
    fn scan_token(&mut self) -> Result<Option<Token>, LexError> {
        let ch = self.advance();

        let kind = match ch {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            ';' => TokenKind::Semicolon,
            '=' => TokenKind::Equals,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => {
                if self.peek() == Some('/') {
                    self.skip_line_comment();
                    return Ok(None);
                }
                TokenKind::Slash
            }

            ' ' | '\t' | '\r' => return Ok(None),
            '\n' => {
                self.line += 1;
                return Ok(None);
            }

            '0'..='9' => self.number_literal(),
            'a'..='z' | 'A'..='Z' | '_' => self.identifier_or_keyword(),

            _ => {
                return Err(LexError {
                    character: ch,
                    line: self.line,
                })
            }
        };

        Ok(Some(self.make_token(kind)))
    }

    /// Consume the rest of a numeric literal (digits, then an optional fraction)
    fn number_literal(&mut self) -> TokenKind {
        self.consume_digits();

        // A '.' is only part of the number when a digit follows it
        if self.peek() == Some('.') && self.peek_ahead(1).is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            self.consume_digits();
        }

        TokenKind::Number
    }

    fn consume_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }

    /// Consume the rest of a word and classify it
    fn identifier_or_keyword(&mut self) -> TokenKind {
        while self.peek().is_some_and(|c| c.is_ascii_alphanumeric() || c == '_') {
            self.advance();
        }

        TokenKind::keyword(&self.lexeme()).unwrap_or(TokenKind::Identifier)
    }

    /// Skip a `//` comment up to, but not including, the newline
    fn skip_line_comment(&mut self) {
        while self.peek().is_some_and(|c| c != '\n') {
            self.advance();
        }
    }

    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.lexeme(), self.line)
    }

    fn lexeme(&self) -> String {
        self.input[self.start..self.position].iter().collect()
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Peek ahead n characters
    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }

    /// Advance to next character. Only called when not at the end.
    fn advance(&mut self) -> char {
        let ch = self.input[self.position];
        self.position += 1;
        ch
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_simple_tokens() {
        let tokens = Lexer::new("declarar x = 1;").tokenize().unwrap();

        assert_eq!(tokens.len(), 6);
        assert_eq!(tokens[0].kind, TokenKind::Declare);
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].text, "x");
        assert_eq!(tokens[2].kind, TokenKind::Equals);
        assert_eq!(tokens[3].kind, TokenKind::Number);
        assert_eq!(tokens[3].text, "1");
        assert_eq!(tokens[4].kind, TokenKind::Semicolon);
        assert_eq!(tokens[5].kind, TokenKind::Eof);
        assert_eq!(tokens[5].text, "");
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            kinds("= + - * / ( ) ;"),
            vec![
                TokenKind::Equals,
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Star,
                TokenKind::Slash,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_empty_source_is_just_eof() {
        let tokens = Lexer::new("").tokenize().unwrap();
        assert_eq!(tokens, vec![Token::new(TokenKind::Eof, "", 1)]);
    }

    #[test]
    fn test_numbers() {
        let tokens = Lexer::new("42 3.14 007").tokenize().unwrap();
        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["42", "3.14", "007", ""]);
        assert!(tokens[..3].iter().all(|t| t.kind == TokenKind::Number));
    }

    #[test]
    fn test_trailing_dot_is_not_part_of_number() {
        let err = Lexer::new("imprimir(1.);").tokenize().unwrap_err();
        assert_eq!(err, LexError { character: '.', line: 1 });
    }

    #[test]
    fn test_identifiers_and_keywords() {
        let tokens = Lexer::new("imprimir _tmp1 declarar_x declarar").tokenize().unwrap();

        assert_eq!(tokens[0].kind, TokenKind::Print);
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].text, "_tmp1");
        assert_eq!(tokens[2].kind, TokenKind::Identifier);
        assert_eq!(tokens[2].text, "declarar_x");
        assert_eq!(tokens[3].kind, TokenKind::Declare);
    }

    #[test]
    fn test_comments_stop_at_newline() {
        let tokens = Lexer::new("declarar x = 1; // declarar y = 2;\nimprimir(x);")
            .tokenize()
            .unwrap();

        assert_eq!(tokens[5].kind, TokenKind::Print);
        assert_eq!(tokens[5].line, 2);
        assert!(tokens.iter().all(|t| t.text != "y"));
    }

    #[test]
    fn test_comment_at_end_of_input() {
        assert_eq!(kinds("1 // trailing"), vec![TokenKind::Number, TokenKind::Eof]);
    }

    #[test]
    fn test_single_slash_is_division() {
        assert_eq!(
            kinds("a / b"),
            vec![TokenKind::Identifier, TokenKind::Slash, TokenKind::Identifier, TokenKind::Eof]
        );
    }

    #[test]
    fn test_line_numbers() {
        let tokens = Lexer::new("a\n\r\n  b\n").tokenize().unwrap();
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[1].line, 3);
        assert_eq!(tokens[2].kind, TokenKind::Eof);
        assert_eq!(tokens[2].line, 4);
    }

    #[test]
    fn test_unexpected_character() {
        let err = Lexer::new("declarar x = 1;\nx = x # 2;").tokenize().unwrap_err();
        assert_eq!(err.character, '#');
        assert_eq!(err.line, 2);
        assert_eq!(err.to_string(), "[line 2] Error: Unexpected character '#'.");
    }

    #[test]
    fn test_non_ascii_letter_is_rejected() {
        let err = Lexer::new("declarar é = 1;").tokenize().unwrap_err();
        assert_eq!(err.character, 'é');
    }
}
