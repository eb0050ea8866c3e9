//! Statement execution implementation
//!
//! All statement execution methods are implemented as `pub(crate)` methods
//! on the [`Interpreter`] struct, giving them access to the symbol table and
//! the terminal.

use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeError;
use crate::parser::ast::*;
use crate::terminal::Terminal;

impl<T: Terminal> Interpreter<T> {
    /// Execute a single statement
    pub(crate) fn execute_statement(&mut self, stmt: &Stmt) -> Result<(), RuntimeError> {
        match stmt {
            Stmt::Declaration {
                name,
                initializer,
                line,
            } => self.execute_declaration(name, initializer, *line),
            Stmt::Assignment { name, value, line } => self.execute_assignment(name, value, *line),
            Stmt::Print { expression, line } => self.execute_print(expression, *line),
            Stmt::ExpressionStatement { expression, .. } => {
                self.evaluate_expr(expression)?;
                Ok(())
            }
        }
    }

    /// The initializer runs before the duplicate check, so its own errors win.
    fn execute_declaration(
        &mut self,
        name: &str,
        initializer: &Expr,
        line: usize,
    ) -> Result<(), RuntimeError> {
        let value = self.evaluate_expr(initializer)?;
        self.symbols.declare(name, value, line)
    }

    /// The target must exist before the right-hand side is evaluated.
    fn execute_assignment(&mut self, name: &str, value: &Expr, line: usize) -> Result<(), RuntimeError> {
        if !self.symbols.contains(name) {
            return Err(RuntimeError::UndeclaredVariable {
                name: name.to_string(),
                line,
            });
        }
        let value = self.evaluate_expr(value)?;
        self.symbols.assign(name, value, line)
    }

    fn execute_print(&mut self, expression: &Expr, line: usize) -> Result<(), RuntimeError> {
        let value = self.evaluate_expr(expression)?;
        self.terminal
            .print_line(&format_number(value), line)
            .map_err(|e| RuntimeError::Output {
                message: e.to_string(),
                line,
            })
    }
}

/// Shortest round-trip rendering, with no trailing `.0` on whole numbers.
pub(crate) fn format_number(value: f64) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse::Parser;
    use crate::terminal::MockTerminal;

    fn run(source: &str) -> (Interpreter<MockTerminal>, Result<(), RuntimeError>) {
        let program = Parser::from_source(source).unwrap().parse_program().unwrap();
        let mut interpreter = Interpreter::new(MockTerminal::new());
        let result = interpreter.run(&program);
        (interpreter, result)
    }

    #[test]
    fn test_redeclaration_fails_on_second() {
        let (interpreter, result) = run("declarar x = 1;\ndeclarar x = 2;");

        assert!(matches!(result, Err(RuntimeError::AlreadyDeclared { ref name, line: 2 }) if name == "x"));
        assert_eq!(interpreter.symbols().get("x"), Some(1.0));
    }

    #[test]
    fn test_assignment_to_undeclared_fails() {
        let (interpreter, result) = run("x = 5;");

        assert!(matches!(result, Err(RuntimeError::UndeclaredVariable { ref name, line: 1 }) if name == "x"));
        assert!(interpreter.symbols().is_empty());
    }

    #[test]
    fn test_assignment_checks_target_before_rhs() {
        // Both the target and the RHS are bad; the target is reported
        let (_, result) = run("x = 1 / 0;");
        assert!(matches!(result, Err(RuntimeError::UndeclaredVariable { .. })));
    }

    #[test]
    fn test_declaration_evaluates_initializer_first() {
        let (_, result) = run("declarar x = 1;\ndeclarar x = y;");
        assert!(matches!(result, Err(RuntimeError::UndeclaredVariable { ref name, .. }) if name == "y"));
    }

    #[test]
    fn test_declaration_can_not_read_itself() {
        let (interpreter, result) = run("declarar x = x + 1;");
        assert!(matches!(result, Err(RuntimeError::UndeclaredVariable { .. })));
        assert!(!interpreter.symbols().contains("x"));
    }

    #[test]
    fn test_expression_statement_is_evaluated() {
        let (interpreter, result) = run("1 + 2;");
        assert!(result.is_ok());
        assert!(interpreter.terminal().get_output().is_empty());

        let (_, result) = run("declarar x = 1;\nx / 0;");
        assert_eq!(result, Err(RuntimeError::DivisionByZero { line: 2 }));
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(14.0), "14");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(-3.0), "-3");
    }
}
