//! Program execution engine
//!
//! This module provides the core execution logic:
//! - [`engine`]: Main interpreter driving a [`Program`](crate::parser::ast::Program)
//! - [`symbols`]: The flat variable store
//! - [`errors`]: Runtime error types
//!
//! # Execution Model
//!
//! The interpreter walks the AST and executes statements one at a time, in
//! source order. Statement execution and expression evaluation extend the
//! [`engine::Interpreter`] from the `statements` and `expressions` modules.

pub mod engine;
pub mod errors;
mod expressions;
mod statements;
pub mod symbols;
