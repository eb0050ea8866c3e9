//! Runtime error types for the interpreter
//!
//! This module defines [`RuntimeError`], which represents all errors that can occur
//! during program execution (as opposed to lex or parse errors).
//!
//! All runtime errors are fatal - the first one halts execution.

use thiserror::Error;

/// Runtime errors that can occur during execution
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    /// `declarar` of a name that already exists
    #[error("variable '{name}' is already declared [line {line}]")]
    AlreadyDeclared { name: String, line: usize },

    /// Read of or assignment to a name that was never declared
    #[error("variable '{name}' is not declared [line {line}]")]
    UndeclaredVariable { name: String, line: usize },

    /// Division with a divisor of exactly zero
    #[error("division by zero [line {line}]")]
    DivisionByZero { line: usize },

    /// The terminal rejected a printed line
    #[error("could not write output [line {line}]: {message}")]
    Output { message: String, line: usize },
}

impl RuntimeError {
    pub fn line(&self) -> usize {
        match self {
            RuntimeError::AlreadyDeclared { line, .. }
            | RuntimeError::UndeclaredVariable { line, .. }
            | RuntimeError::DivisionByZero { line }
            | RuntimeError::Output { line, .. } => *line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = RuntimeError::AlreadyDeclared {
            name: "x".to_string(),
            line: 2,
        };
        assert_eq!(err.to_string(), "variable 'x' is already declared [line 2]");
        assert_eq!(
            RuntimeError::DivisionByZero { line: 7 }.to_string(),
            "division by zero [line 7]"
        );
        assert_eq!(err.line(), 2);
    }
}
