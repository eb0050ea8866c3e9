//! Expression parsing implementation
//!
//! Two precedence levels, both left-associative:
//!
//! ```text
//! expression := term
//! term       := factor ( ("+" | "-") factor )*
//! factor     := primary ( ("*" | "/") primary )*
//! primary    := NUMBER | IDENTIFIER | "(" expression ")"
//! ```

use crate::parser::ast::*;
use crate::parser::parse::{ParseError, Parser};
use crate::parser::token::TokenKind;

impl Parser {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_term()
    }

    /// Parse additive operators (+, -)
    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_factor()?;

        while self.match_kind(&[TokenKind::Plus, TokenKind::Minus]) {
            let operator = self.previous().clone();
            let op = if operator.is(TokenKind::Plus) {
                BinOp::Add
            } else {
                BinOp::Sub
            };
            let right = self.parse_factor()?;
            left = Expr::binary(left, op, operator, right);
        }

        Ok(left)
    }

    /// Parse multiplicative operators (*, /)
    fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_primary()?;

        while self.match_kind(&[TokenKind::Star, TokenKind::Slash]) {
            let operator = self.previous().clone();
            let op = if operator.is(TokenKind::Star) {
                BinOp::Mul
            } else {
                BinOp::Div
            };
            let right = self.parse_primary()?;
            left = Expr::binary(left, op, operator, right);
        }

        Ok(left)
    }

    /// Parse literals, variables and parenthesized expressions
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        if self.match_kind(&[TokenKind::Number]) {
            let token = self.previous();
            let value = token
                .text
                .parse::<f64>()
                .map_err(|_| Self::error_at(token, "Invalid number literal."))?;
            return Ok(Expr::Number(value));
        }

        if self.match_kind(&[TokenKind::Identifier]) {
            let token = self.previous();
            return Ok(Expr::Variable {
                name: token.text.clone(),
                line: token.line,
            });
        }

        if self.match_kind(&[TokenKind::LParen]) {
            let expr = self.parse_expression()?;
            self.consume(TokenKind::RParen, "Expected ')' after expression.")?;
            return Ok(expr);
        }

        Err(Self::error_at(self.peek(), "Expected expression."))
    }
}
