//! Source code parser
//!
//! This module transforms source text into an Abstract Syntax Tree (AST):
//! - [`token`]: Token vocabulary
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parsing (tokens → AST), with `statements` and `expressions`
//!   extending the [`parse::Parser`]
//! - [`ast`]: AST node definitions
//!
//! # Language
//!
//! - `declarar name = expr;` declares a variable
//! - `name = expr;` assigns to a declared variable
//! - `imprimir(expr);` prints a value
//! - Expressions: number literals, variables, `+ - * /`, parentheses
//! - `//` line comments
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with one token of lookahead.
//! No external parser generator dependencies.

pub mod ast;
mod expressions;
pub mod lexer;
pub mod parse;
mod statements;
pub mod token;
