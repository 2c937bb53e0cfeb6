//! Numeric approximation of expressions.

use crate::primitive::float;
use rug::{ops::Pow, Float};
use super::expr::{Func, Primary, SymExpr};

/// Approximates the value of an expression that contains no free symbols.
///
/// Returns [`None`] if the expression contains a free symbol, or if the value is not a finite real
/// number.
pub fn approximate(expr: &SymExpr) -> Option<Float> {
    approximate_with(expr, &[])
}

/// Approximates the value of an expression, substituting the given values for free symbols.
pub fn approximate_with(expr: &SymExpr, vars: &[(&str, Float)]) -> Option<Float> {
    let value = match expr {
        SymExpr::Primary(Primary::Rational(r)) => float(r),
        SymExpr::Primary(Primary::Float(f)) => f.clone(),
        SymExpr::Primary(Primary::Constant(constant)) => constant.approximate(),
        SymExpr::Primary(Primary::Symbol(name)) => vars.iter()
            .find(|(var, _)| *var == name.as_str())
            .map(|(_, value)| value.clone())?,
        SymExpr::Primary(Primary::Call(func, args)) => match (func, args.as_slice()) {
            (Func::Log, [arg, base]) => {
                approximate_with(arg, vars)?.ln() / approximate_with(base, vars)?.ln()
            },
            (func, [arg]) => func.approximate(approximate_with(arg, vars)?),
            _ => return None,
        },
        SymExpr::Add(terms) => {
            let mut sum = float(0);
            for term in terms {
                sum += approximate_with(term, vars)?;
            }
            sum
        },
        SymExpr::Mul(factors) => {
            let mut product = float(1);
            for factor in factors {
                product *= approximate_with(factor, vars)?;
            }
            product
        },
        SymExpr::Exp(base, exponent) => {
            approximate_with(base, vars)?.pow(approximate_with(exponent, vars)?)
        },
    };

    if value.is_finite() {
        Some(value)
    } else {
        None
    }
}
