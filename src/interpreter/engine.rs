// Execution engine for the interpreter

use crate::interpreter::errors::RuntimeError;
use crate::interpreter::symbols::SymbolTable;
use crate::parser::ast::*;
use crate::terminal::Terminal;
use tracing::{debug, trace};

/// Tree-walking interpreter for a parsed [`Program`]
///
/// Each interpreter owns a fresh [`SymbolTable`] and the terminal its print
/// statements write to. Running two programs through the same interpreter
/// shares the table between them, which is rarely what you want; create one
/// interpreter per run instead.
pub struct Interpreter<T: Terminal> {
    /// Variable name -> current value
    pub(crate) symbols: SymbolTable,

    /// Sink for `imprimir` output
    pub(crate) terminal: T,

    /// Number of statements completed so far
    executed: usize,
}

impl<T: Terminal> Interpreter<T> {
    /// Create a new interpreter writing to `terminal`
    pub fn new(terminal: T) -> Self {
        Interpreter {
            symbols: SymbolTable::new(),
            terminal,
            executed: 0,
        }
    }

    /// Run the program from start to finish.
    ///
    /// Stops at the first runtime error. Effects of the statements before it
    /// (declarations, assignments, printed lines) are kept.
    pub fn run(&mut self, program: &Program) -> Result<(), RuntimeError> {
        debug!(statements = program.statements.len(), "executing program");

        for stmt in &program.statements {
            trace!(line = stmt.line(), "executing statement");
            self.execute_statement(stmt)?;
            self.executed += 1;
        }

        debug!(executed = self.executed, variables = self.symbols.len(), "execution finished");
        Ok(())
    }

    /// The variables as left by the last run
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    pub fn into_terminal(self) -> T {
        self.terminal
    }

    /// How many statements have completed successfully
    pub fn executed_statements(&self) -> usize {
        self.executed
    }
}
