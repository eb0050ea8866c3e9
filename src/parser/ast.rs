// AST (Abstract Syntax Tree) definitions for the interpreter

use super::token::Token;

/// Arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

/// Expression nodes
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Variable {
        name: String,
        line: usize,
    },
    BinaryOp {
        left: Box<Expr>,
        op: BinOp,
        /// The operator token as scanned, kept for its line
        operator: Token,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn binary(left: Expr, op: BinOp, operator: Token, right: Expr) -> Self {
        Expr::BinaryOp {
            left: Box::new(left),
            op,
            operator,
            right: Box::new(right),
        }
    }

    /// The arithmetic operator of a binary node.
    pub fn op(&self) -> Option<BinOp> {
        match self {
            Expr::BinaryOp { op, .. } => Some(*op),
            _ => None,
        }
    }
}

/// Statement nodes
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `declarar name = initializer;`
    Declaration {
        name: String,
        initializer: Expr,
        line: usize,
    },
    /// `name = value;`
    Assignment {
        name: String,
        value: Expr,
        line: usize,
    },
    /// `imprimir(expression);`
    Print { expression: Expr, line: usize },
    /// An expression evaluated for its errors only
    ExpressionStatement { expression: Expr, line: usize },
}

impl Stmt {
    /// Line the statement starts on
    pub fn line(&self) -> usize {
        match self {
            Stmt::Declaration { line, .. }
            | Stmt::Assignment { line, .. }
            | Stmt::Print { line, .. }
            | Stmt::ExpressionStatement { line, .. } => *line,
        }
    }
}

/// Top-level program structure
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }
}
