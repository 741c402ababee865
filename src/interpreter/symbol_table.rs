use std::collections::HashMap;

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// The flat, global binding environment of a session.
///
/// Bindings are created once by [`SymbolTable::declare`], overwritten by
/// [`SymbolTable::assign`] and never removed.
///
/// # Example
/// ```
/// use intscript::{error::RuntimeError, interpreter::symbol_table::SymbolTable};
///
/// let mut table = SymbolTable::new();
/// table.declare("x", 5, 1).unwrap();
/// table.assign("x", 6, 2).unwrap();
///
/// assert_eq!(table.lookup("x", 3), Ok(6));
/// assert!(matches!(table.declare("x", 7, 4),
///                  Err(RuntimeError::AlreadyDeclared { .. })));
/// assert!(matches!(table.assign("y", 1, 5), Err(RuntimeError::NotDeclared { .. })));
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    variables: HashMap<String, i64>,
}

impl SymbolTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new binding.
    ///
    /// # Errors
    /// `AlreadyDeclared` if `name` is already bound; the table is unchanged.
    pub fn declare(&mut self, name: &str, value: i64, line: usize) -> EvalResult<()> {
        if self.variables.contains_key(name) {
            return Err(RuntimeError::AlreadyDeclared { name: name.to_string(),
                                                       line });
        }
        self.variables.insert(name.to_string(), value);
        Ok(())
    }

    /// Overwrites an existing binding.
    ///
    /// # Errors
    /// `NotDeclared` if `name` has never been declared.
    pub fn assign(&mut self, name: &str, value: i64, line: usize) -> EvalResult<()> {
        match self.variables.get_mut(name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            },
            None => Err(RuntimeError::NotDeclared { name: name.to_string(),
                                                    line }),
        }
    }

    /// Reads a binding.
    ///
    /// # Errors
    /// `NotDeclared` if `name` has never been declared.
    pub fn lookup(&self, name: &str, line: usize) -> EvalResult<i64> {
        self.get(name)
            .ok_or_else(|| RuntimeError::NotDeclared { name: name.to_string(),
                                                       line })
    }

    /// Reads a binding without producing an error.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<i64> {
        self.variables.get(name).copied()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// All bindings, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        let mut bindings = self.variables
                               .iter()
                               .map(|(name, value)| (name.as_str(), *value))
                               .collect::<Vec<_>>();
        bindings.sort_unstable_by(|a, b| a.0.cmp(b.0));
        bindings.into_iter()
    }
}
