//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including error types, token-cursor helpers, and the main parse entry point.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with the following organization:
//! - This module: Parser struct, helper methods, error recovery
//! - `statements`: declarations, print statements, assignments
//! - `expressions`: `term`, `factor` and `primary`
//!
//! Parser methods are split across these files using `impl Parser` blocks.
//!
//! # Error recovery
//!
//! A syntax error does not stop the parse. The error is recorded, the parser
//! skips to the next statement boundary (see [`Parser::synchronize`]) and
//! keeps going, so one run reports every independent error. The program is
//! only returned if no error was recorded at all.

use crate::parser::ast::*;
use crate::parser::lexer::{LexError, Lexer};
use crate::parser::token::{Token, TokenKind};
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// A single syntax error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ParseError {
    pub line: usize,
    /// Text of the offending token, empty at end of file
    pub lexeme: String,
    pub message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lexeme.is_empty() {
            write!(f, "[line {}] Error at end: {}", self.line, self.message)
        } else {
            write!(
                f,
                "[line {}] Error at '{}': {}",
                self.line, self.lexeme, self.message
            )
        }
    }
}

/// Every syntax error found in one parse, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ParseErrors(pub Vec<ParseError>);

impl ParseErrors {
    pub fn errors(&self) -> &[ParseError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ParseErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}

/// Recursive descent parser
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
    errors: Vec<ParseError>,
}

impl Parser {
    /// Build a parser over an already tokenized source.
    ///
    /// A missing trailing EOF token is added so the cursor helpers never run
    /// off the end.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if !tokens.last().is_some_and(|t| t.is(TokenKind::Eof)) {
            let line = tokens.last().map_or(1, |t| t.line);
            tokens.push(Token::new(TokenKind::Eof, "", line));
        }
        Self {
            tokens,
            position: 0,
            errors: Vec::new(),
        }
    }

    /// Tokenize `source` and build a parser over the result.
    pub fn from_source(source: &str) -> Result<Self, LexError> {
        let tokens = Lexer::new(source).tokenize()?;
        Ok(Self::new(tokens))
    }

    /// Parse the entire program
    pub fn parse_program(mut self) -> Result<Program, ParseErrors> {
        let mut program = Program::new();

        while !self.is_at_end() {
            if let Some(stmt) = self.statement() {
                program.statements.push(stmt);
            }
        }

        if self.errors.is_empty() {
            debug!(statements = program.statements.len(), "parsed program");
            Ok(program)
        } else {
            debug!(errors = self.errors.len(), "parse failed");
            Err(ParseErrors(self.errors))
        }
    }

    /// Parse one statement, recovering on error. `None` means it was dropped.
    fn statement(&mut self) -> Option<Stmt> {
        match self.parse_statement() {
            Ok(stmt) => Some(stmt),
            Err(err) => {
                debug!(line = err.line, lexeme = %err.lexeme, message = %err.message, "syntax error");
                self.errors.push(err);
                self.synchronize();
                None
            }
        }
    }

    /// Skip tokens until a likely statement boundary.
    ///
    /// Steps past the token that caused the error, then stops right after a
    /// `;`, right before `declarar`/`imprimir`, or at end of file.
    fn synchronize(&mut self) {
        self.advance();

        while !self.is_at_end() {
            if self.previous().is(TokenKind::Semicolon) {
                return;
            }
            if matches!(self.peek().kind, TokenKind::Declare | TokenKind::Print) {
                return;
            }
            self.advance();
        }
    }

    // ===== Helper methods =====

    /// Consume the current token if it has one of `kinds`.
    pub(crate) fn match_kind(&mut self, kinds: &[TokenKind]) -> bool {
        if kinds.iter().any(|&kind| self.check(kind)) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.peek().is(kind)
    }

    pub(crate) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.position += 1;
        }
        self.previous()
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.peek().is(TokenKind::Eof)
    }

    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.position]
    }

    /// The most recently consumed token (the current one before any advance).
    pub(crate) fn previous(&self) -> &Token {
        &self.tokens[self.position.saturating_sub(1)]
    }

    /// Consume a token of `kind` or fail at the current token with `message`.
    pub(crate) fn consume(&mut self, kind: TokenKind, message: &str) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance().clone())
        } else {
            Err(Self::error_at(self.peek(), message))
        }
    }

    pub(crate) fn error_at(token: &Token, message: &str) -> ParseError {
        ParseError {
            line: token.line,
            lexeme: token.text.clone(),
            message: message.to_string(),
        }
    }
}
