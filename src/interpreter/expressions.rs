//! Expression evaluation
//!
//! Every expression evaluates to an `f64`. Binary operands are evaluated
//! left first, then right.

use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeError;
use crate::parser::ast::*;
use crate::terminal::Terminal;

impl<T: Terminal> Interpreter<T> {
    /// Evaluate an expression to its numeric value
    pub(crate) fn evaluate_expr(&self, expr: &Expr) -> Result<f64, RuntimeError> {
        match expr {
            Expr::Number(value) => Ok(*value),
            Expr::Variable { name, line } => self.symbols.lookup(name, *line),
            Expr::BinaryOp {
                left,
                op,
                operator,
                right,
            } => {
                let lhs = self.evaluate_expr(left)?;
                let rhs = self.evaluate_expr(right)?;
                apply_binary(*op, lhs, rhs, operator.line)
            }
        }
    }
}

/// Apply an arithmetic operator. Only `/` by exactly zero can fail.
pub(crate) fn apply_binary(op: BinOp, lhs: f64, rhs: f64, line: usize) -> Result<f64, RuntimeError> {
    match op {
        BinOp::Add => Ok(lhs + rhs),
        BinOp::Sub => Ok(lhs - rhs),
        BinOp::Mul => Ok(lhs * rhs),
        BinOp::Div => {
            if rhs == 0.0 {
                return Err(RuntimeError::DivisionByZero { line });
            }
            Ok(lhs / rhs)
        }
    }
}
