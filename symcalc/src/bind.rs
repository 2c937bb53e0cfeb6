//! Resolution of the names in normalized text.
//!
//! Binding happens in two phases: the text is scanned for identifiers, then a [`SymbolTable`] is
//! built in which the fixed functions and constants always win, `Ans` refers to the previous
//! answer if there is one, and every other name becomes a free symbol.

use crate::{answer::Answer, engine::Engine, normalize::Normalized};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use symcalc_compute::{Binding, SymExpr, SymbolTable};
use symcalc_error::Error;

/// The name the previous answer is bound to.
pub const ANSWER_NAME: &str = "Ans";

static IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z_][A-Za-z0-9_]*").expect("valid regex")
});

/// Returns the distinct identifiers in the text, in sorted order.
pub fn identifiers(text: &str) -> BTreeSet<&str> {
    IDENTIFIER.find_iter(text)
        .map(|m| m.as_str())
        .collect()
}

/// Builds the symbol table for the normalized text.
pub fn symbol_table(norm: &Normalized, answer: &Answer) -> SymbolTable {
    let mut table = SymbolTable::new();

    if let Some(value) = answer.value() {
        table.bind(ANSWER_NAME, Binding::Value(value.clone()));
    }

    let free = identifiers(norm)
        .into_iter()
        .filter(|name| table.bind_symbol(name))
        .collect::<Vec<_>>();
    debug!("free symbols: {:?}", free);

    table
}

/// Binds every name in the normalized text and parses it with the engine.
pub fn bind<E: Engine + ?Sized>(engine: &E, norm: &Normalized, answer: &Answer) -> Result<SymExpr, Error> {
    let table = symbol_table(norm, answer);
    engine.parse(norm, &table)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::normalize::normalize;
    use symcalc_compute::{symbolic::expr::Constant, Cas};
    use super::*;

    #[test]
    fn scan() {
        let found = identifiers("sin(x_1) + Ans*2 - log(x_1, y)");
        assert_eq!(found.into_iter().collect::<Vec<_>>(), vec!["Ans", "log", "sin", "x_1", "y"]);
    }

    #[test]
    fn exponents_are_not_names() {
        let found = identifiers("1e5 + 2.5E-3*x");
        assert_eq!(found.into_iter().collect::<Vec<_>>(), vec!["x"]);
    }

    #[test]
    fn fixed_names_win() {
        let table = symbol_table(&normalize("pi + sin(E) + x"), &Answer::new(SymExpr::integer(3)));
        assert_eq!(table.get("pi"), Some(&Binding::Constant(Constant::Pi)));
        assert_eq!(table.get("x"), Some(&Binding::Symbol("x".to_string())));
        assert_eq!(table.get("Ans"), Some(&Binding::Value(SymExpr::integer(3))));
    }

    #[test]
    fn answer_without_value_is_free() {
        let expr = bind(&Cas, &normalize("Ans + 1"), &Answer::empty()).unwrap();
        assert_eq!(expr, SymExpr::symbol("Ans") + SymExpr::integer(1));
    }

    #[test]
    fn answer_is_substituted() {
        let expr = bind(&Cas, &normalize("Ans + 1"), &Answer::new(SymExpr::integer(4))).unwrap();
        assert_eq!(expr, SymExpr::integer(5));
    }
}
