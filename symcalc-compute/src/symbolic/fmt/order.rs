//! The order terms and factors are printed in.

use crate::primitive::rational;
use crate::symbolic::expr::{Primary, SymExpr};
use rug::Rational;
use std::cmp::{Ordering, Reverse};

/// Returns the total degree of the expression in its free symbols. Powers with a non-numeric
/// exponent, calls, constants and numbers have degree zero.
///
/// - `x` -> `1`
/// - `x^2*y` -> `3`
/// - `x^2 + x` -> `2`
pub fn degree(expr: &SymExpr) -> Rational {
    match expr {
        SymExpr::Primary(Primary::Symbol(_)) => rational(1),
        SymExpr::Primary(_) => rational(0),
        SymExpr::Add(terms) => terms.iter()
            .map(degree)
            .max()
            .unwrap_or_else(|| rational(0)),
        SymExpr::Mul(factors) => factors.iter()
            .map(degree)
            .fold(rational(0), |sum, d| sum + d),
        SymExpr::Exp(base, exponent) => match exponent.as_rational() {
            Some(exponent) => degree(base) * exponent,
            None => rational(0),
        },
    }
}

/// The key a term of a sum is sorted by: descending degree, then alphabetically, with numbers
/// last. Only the non-numeric part of the term is compared.
pub fn term_key(rest: &SymExpr) -> (bool, Reverse<Rational>, String) {
    (rest.is_one(), Reverse(degree(rest)), rest.to_string())
}

/// Sorts the terms of a sum: by descending degree, then alphabetically, with numbers last.
pub fn sort_terms(terms: &mut [&SymExpr]) {
    terms.sort_by_cached_key(|term| term_key(&term.split_coefficient().1));
}

/// The position of a factor in a product, before comparing the factors textually.
fn factor_rank(expr: &SymExpr) -> u8 {
    match expr {
        SymExpr::Primary(Primary::Rational(_) | Primary::Float(_)) => 0,
        SymExpr::Primary(Primary::Constant(_)) => 1,
        SymExpr::Primary(Primary::Symbol(_)) => 2,
        SymExpr::Primary(Primary::Call(..)) => 3,
        SymExpr::Add(_) => 4,
        SymExpr::Mul(_) => 5,
        SymExpr::Exp(base, _) => factor_rank(base),
    }
}

/// The key a factor is sorted by. Sums with the same non-constant part are ordered by their
/// constant term, so that `(x - 1)` comes before `(x + 1)`.
fn factor_key(expr: &SymExpr) -> (u8, String, Rational) {
    let (base, _) = expr.split_power();
    match base {
        SymExpr::Add(terms) => {
            let (numbers, rest): (Vec<&SymExpr>, Vec<&SymExpr>) = terms.iter()
                .partition(|term| term.is_number());
            let constant = numbers.iter()
                .filter_map(|n| n.as_rational())
                .fold(rational(0), |sum, n| sum + n);
            let rest = SymExpr::Add(rest.into_iter().cloned().collect()).downgrade();
            (factor_rank(base), rest.to_string(), constant)
        },
        _ => (factor_rank(base), base.to_string(), rational(0)),
    }
}

/// Sorts the factors of a product: numbers first, then constants, symbols, calls and sums.
pub fn sort_factors(factors: &mut [&SymExpr]) {
    factors.sort_by_cached_key(|factor| factor_key(factor));
}

/// Compares two expressions by the order they would be printed in as factors.
pub fn cmp_factors(lhs: &SymExpr, rhs: &SymExpr) -> Ordering {
    factor_key(lhs).cmp(&factor_key(rhs))
}
