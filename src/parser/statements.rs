//! Statement parsing implementation
//!
//! ```text
//! statement := declStmt | printStmt | exprStmt
//! declStmt  := "declarar" IDENT "=" expression ";"
//! printStmt := "imprimir" "(" expression ")" ";"
//! exprStmt  := expression ( "=" expression )? ";"
//! ```
//!
//! Assignment is a statement form, not an expression: the left side is parsed
//! as a whole expression first and only afterwards checked to be a bare
//! variable.

use crate::parser::ast::*;
use crate::parser::parse::{ParseError, Parser};
use crate::parser::token::TokenKind;

impl Parser {
    /// Parse a single statement
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        if self.match_kind(&[TokenKind::Declare]) {
            return self.parse_declaration();
        }
        if self.match_kind(&[TokenKind::Print]) {
            return self.parse_print();
        }
        self.parse_expression_statement()
    }

    /// Parse the rest of `declarar name = expr;`
    fn parse_declaration(&mut self) -> Result<Stmt, ParseError> {
        let name = self.consume(TokenKind::Identifier, "Expected variable name.")?;
        self.consume(TokenKind::Equals, "Expected '=' after variable name.")?;
        let initializer = self.parse_expression()?;
        self.consume(TokenKind::Semicolon, "Expected ';' after declaration.")?;

        Ok(Stmt::Declaration {
            name: name.text,
            initializer,
            line: name.line,
        })
    }

    /// Parse the rest of `imprimir(expr);`
    fn parse_print(&mut self) -> Result<Stmt, ParseError> {
        let line = self.previous().line;
        self.consume(TokenKind::LParen, "Expected '(' after 'imprimir'.")?;
        let expression = self.parse_expression()?;
        self.consume(TokenKind::RParen, "Expected ')' after expression.")?;
        self.consume(TokenKind::Semicolon, "Expected ';' after print statement.")?;

        Ok(Stmt::Print { expression, line })
    }

    /// Parse `expr;` or `name = expr;`
    fn parse_expression_statement(&mut self) -> Result<Stmt, ParseError> {
        let line = self.peek().line;
        let expr = self.parse_expression()?;

        if self.match_kind(&[TokenKind::Equals]) {
            let Expr::Variable { name, line } = expr else {
                return Err(Self::error_at(self.previous(), "Invalid assignment target."));
            };
            let value = self.parse_expression()?;
            self.consume(TokenKind::Semicolon, "Expected ';' after assignment.")?;
            return Ok(Stmt::Assignment { name, value, line });
        }

        self.consume(TokenKind::Semicolon, "Expected ';' after expression.")?;
        Ok(Stmt::ExpressionStatement {
            expression: expr,
            line,
        })
    }
}
