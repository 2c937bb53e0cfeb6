//! Formatting of [`SymExpr`]s, as plain text through [`std::fmt::Display`] and as LaTeX through
//! the [`Latex`] trait.
//!
//! Both formats print terms and factors in a canonical order (see [`order`]), rather than the
//! order the simplifier happened to leave them in. Products are split into a numerator and a
//! denominator, so `x*y**-1` prints as `x/y`, and sums print negative terms with a minus sign.

mod display;
mod latex;
pub mod order;

pub use latex::{Latex, LatexFormatter};
pub use order::degree;

use crate::primitive::rational;
use rug::Float;
use super::expr::{Number, SymExpr};

/// Formats a float the same way in both formats.
fn fmt_float(value: &Float) -> String {
    format!("{:?}", value.to_f64())
}

/// If the expression is a power with a negative numeric exponent, returns the expression it is the
/// reciprocal of.
fn reciprocal(expr: &SymExpr) -> Option<SymExpr> {
    let SymExpr::Exp(base, exponent) = expr else {
        return None;
    };
    let exponent = exponent.as_number().filter(Number::is_negative)?;
    let exponent = -exponent;
    if exponent.is_one() {
        Some((**base).clone())
    } else {
        Some((**base).clone().pow(exponent.into_expr()))
    }
}

/// Returns true if the exponent prints as a square root.
fn is_one_half(exponent: &SymExpr) -> bool {
    exponent.as_rational().map_or(false, |r| *r.numer() == 1 && *r.denom() == 2)
}

/// Returns true if the term of a sum should be printed with a leading minus sign.
fn is_negative_term(term: &SymExpr) -> bool {
    match term {
        SymExpr::Primary(_) | SymExpr::Mul(_) => term.split_coefficient().0.is_negative(),
        _ => false,
    }
}

/// A product, split into the parts printed above and below the fraction bar.
struct Product<'a> {
    negative: bool,

    /// The absolute value of the numeric coefficient.
    coefficient: Number,

    numerator: Vec<&'a SymExpr>,
    denominator: Vec<SymExpr>,
}

impl<'a> Product<'a> {
    fn new(factors: impl IntoIterator<Item = &'a SymExpr>) -> Self {
        let mut coefficient = Number::Rational(rational(1));
        let mut numerator = Vec::new();
        let mut denominator = Vec::new();
        for factor in factors {
            if let Some(n) = factor.as_number() {
                coefficient = coefficient * n;
            } else if let Some(inverse) = reciprocal(factor) {
                denominator.push(inverse);
            } else {
                numerator.push(factor);
            }
        }

        order::sort_factors(&mut numerator);
        denominator.sort_by(order::cmp_factors);

        Self {
            negative: coefficient.is_negative(),
            coefficient: coefficient.abs(),
            numerator,
            denominator,
        }
    }

    /// Returns how the coefficient is printed above and below the fraction bar. A coefficient of
    /// one is only printed if there is nothing else above the bar.
    fn coefficient_parts(&self) -> (Option<String>, Option<String>) {
        match &self.coefficient {
            Number::Rational(r) => (
                (*r.numer() != 1 || self.numerator.is_empty()).then(|| r.numer().to_string()),
                (*r.denom() != 1).then(|| r.denom().to_string()),
            ),
            Number::Float(value) => (
                (!self.coefficient.is_one() || self.numerator.is_empty()).then(|| fmt_float(value)),
                None,
            ),
        }
    }
}
