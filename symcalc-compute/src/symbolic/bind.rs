//! The table that maps every name in an expression to what it refers to.

use levenshtein::levenshtein;
use std::collections::HashMap;
use super::expr::{Constant, Func, SymExpr};

/// What a name refers to.
#[derive(Debug, Clone, PartialEq)]
pub enum Binding {
    /// A fixed function, such as `sin`.
    Function(Func),

    /// A fixed constant, such as `pi`.
    Constant(Constant),

    /// A previously computed value, substituted wherever the name appears.
    Value(SymExpr),

    /// A free symbol with the given name.
    Symbol(String),
}

/// A map from names to their [`Binding`]s.
///
/// A table always contains the fixed functions and constants, and they cannot be replaced: the
/// insertion methods only add names that are not bound yet.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolTable {
    bindings: HashMap<String, Binding>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    /// Creates a table containing only the fixed functions and constants.
    pub fn new() -> Self {
        let functions = Func::ALL
            .into_iter()
            .map(|func| (func.name().to_string(), Binding::Function(func)));
        let constants = Constant::ALL
            .into_iter()
            .map(|constant| (constant.name().to_string(), Binding::Constant(constant)));

        Self {
            bindings: functions.chain(constants).collect(),
        }
    }

    /// Returns the binding of the given name, if there is one.
    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }

    /// Returns true if the given name is bound.
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Binds the given name, unless it is already bound. Returns true if the binding was added.
    pub fn bind(&mut self, name: impl Into<String>, binding: Binding) -> bool {
        let name = name.into();
        if self.bindings.contains_key(&name) {
            return false;
        }

        self.bindings.insert(name, binding);
        true
    }

    /// Binds the given name to a free symbol of the same name, unless it is already bound.
    /// Returns true if the binding was added.
    pub fn bind_symbol(&mut self, name: &str) -> bool {
        self.bind(name, Binding::Symbol(name.to_string()))
    }

    /// Returns all functions in the table with a name similar to the given name, sorted.
    pub fn similar_functions(&self, name: &str) -> Vec<&str> {
        let mut similar = self.bindings
            .iter()
            .filter(|(n, binding)| matches!(binding, Binding::Function(_)) && levenshtein(n, name) < 2)
            .map(|(n, _)| n.as_str())
            .collect::<Vec<_>>();
        similar.sort_unstable();
        similar
    }

    /// Returns the number of bound names.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns true if no name is bound. This is never the case for a table created with
    /// [`SymbolTable::new`].
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
