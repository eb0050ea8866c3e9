//! # Introduction
//!
//! declang lexes, parses and executes a tiny language with one data type
//! (double-precision numbers), variable declarations, assignments and a print
//! statement:
//!
//! ```text
//! declarar largura = 3;
//! declarar altura = 4.5;
//! largura = largura + 1;   // now 4
//! imprimir(largura * altura);
//! ```
//!
//! ## Execution pipeline
//!
//! ```text
//! Source → Lexer → Parser → AST → Interpreter → Terminal
//! ```
//!
//! 1. [`parser`] — tokenises the source and builds an AST, collecting every
//!    syntax error it can recover from.
//! 2. [`interpreter`] — walks the AST against a per-run symbol table and stops
//!    at the first runtime error.
//! 3. [`terminal`] — where `imprimir` output goes: captured in memory by
//!    [`terminal::MockTerminal`] or written out by
//!    [`terminal::WriterTerminal`].
//!
//! [`run_source`] chains all three stages.

pub mod interpreter;
pub mod parser;
pub mod terminal;

use interpreter::engine::Interpreter;
use interpreter::errors::RuntimeError;
use parser::lexer::LexError;
use parser::parse::{ParseErrors, Parser};
use terminal::Terminal;
use thiserror::Error;

/// Any failure from one of the three stages
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Lex(#[from] LexError),

    #[error("{0}")]
    Parse(#[from] ParseErrors),

    #[error("Runtime error: {0}")]
    Runtime(#[from] RuntimeError),
}

/// Lex, parse and run `source`, printing to `terminal`.
///
/// Nothing executes unless the whole source lexes and parses cleanly. Pass
/// `&mut terminal` to keep the terminal (and any output printed before a
/// runtime error) after the call.
pub fn run_source<T: Terminal>(source: &str, terminal: T) -> Result<(), Error> {
    let program = Parser::from_source(source)?.parse_program()?;
    let mut interpreter = Interpreter::new(terminal);
    interpreter.run(&program)?;
    Ok(())
}
