//! Flat variable store
//!
//! One [`SymbolTable`] belongs to one interpreter run. There is no scoping:
//! every name lives in the same map from its declaration until the run ends.

use crate::interpreter::errors::RuntimeError;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    values: FxHashMap<String, f64>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new name. Fails if it is already declared.
    pub fn declare(&mut self, name: &str, value: f64, line: usize) -> Result<(), RuntimeError> {
        if self.values.contains_key(name) {
            return Err(RuntimeError::AlreadyDeclared {
                name: name.to_string(),
                line,
            });
        }
        self.values.insert(name.to_string(), value);
        Ok(())
    }

    /// Overwrite an existing name. Fails if it was never declared.
    pub fn assign(&mut self, name: &str, value: f64, line: usize) -> Result<(), RuntimeError> {
        match self.values.get_mut(name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(undeclared(name, line)),
        }
    }

    /// Read a name, failing if it was never declared.
    pub fn lookup(&self, name: &str, line: usize) -> Result<f64, RuntimeError> {
        self.values
            .get(name)
            .copied()
            .ok_or_else(|| undeclared(name, line))
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn undeclared(name: &str, line: usize) -> RuntimeError {
    RuntimeError::UndeclaredVariable {
        name: name.to_string(),
        line,
    }
}
