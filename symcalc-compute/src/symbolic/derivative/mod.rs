//! Symbolic differentiation.
//!
//! [`derivative`] builds the derivative with the sum, product, power and chain rules. The result is
//! only lightly cleaned up while it is built (products with a zero factor vanish, factors of one
//! and terms of zero are dropped); callers are expected to [`evaluate`](crate::symbolic::evaluate)
//! it afterwards.

mod function;

use crate::primitive::rational;
use crate::symbolic::expr::{Func, Number, Primary, SymExpr};
use std::fmt;

/// Returns `true` if the given [`SymExpr`] is "clearly" zero. This is intended to clean up the
/// result and is not mathematically rigorous.
fn is_trivially_zero(e: &SymExpr) -> bool {
    match e {
        SymExpr::Primary(Primary::Float(f)) => f.is_zero(),
        SymExpr::Primary(Primary::Rational(r)) => *r == 0,
        SymExpr::Add(sum) => sum.iter().all(is_trivially_zero),
        SymExpr::Mul(mul) => mul.iter().any(is_trivially_zero),
        SymExpr::Exp(base, exponent) => is_trivially_zero(base) && !is_trivially_zero(exponent),
        _ => false,
    }
}

/// Returns `true` if the given [`SymExpr`] is "clearly" one. This is intended to clean up the
/// result and is not mathematically rigorous.
fn is_trivially_unity(e: &SymExpr) -> bool {
    match e {
        SymExpr::Primary(Primary::Float(f)) => *f == 1,
        SymExpr::Primary(Primary::Rational(r)) => *r == 1,
        SymExpr::Mul(factors) => factors.iter().all(is_trivially_unity),
        SymExpr::Exp(base, exponent) => is_trivially_zero(exponent) || is_trivially_unity(base),
        SymExpr::Add(terms) => terms.len() == 1 && is_trivially_unity(&terms[0]),
        _ => false,
    }
}

/// Helper struct to build a product of expressions while applying basic simplification rules. If
/// any of the expressions are zero, the product is reduced to zero.
#[derive(Default)]
struct MultBuilder(Vec<SymExpr>);

impl From<MultBuilder> for SymExpr {
    fn from(value: MultBuilder) -> Self {
        SymExpr::Mul(value.0).downgrade()
    }
}

impl MultBuilder {
    fn mult(&mut self, e: SymExpr) {
        if is_trivially_zero(&e) || self.0.first().is_some_and(is_trivially_zero) {
            self.0 = vec![SymExpr::integer(0)];
            return;
        }

        if !is_trivially_unity(&e) {
            self.0.push(e)
        }
    }
}

/// Helper struct to build a summation of expressions while applying basic simplification rules.
/// Only non-zero expressions are added to the sum.
#[derive(Default)]
struct SumBuilder(Vec<SymExpr>);

impl From<SumBuilder> for SymExpr {
    fn from(value: SumBuilder) -> Self {
        SymExpr::Add(value.0).downgrade()
    }
}

impl SumBuilder {
    fn add(&mut self, e: SymExpr) {
        if !is_trivially_zero(&e) {
            self.0.push(e)
        }
    }
}

/// `(f + g)' = f' + g'`
fn sum_rule(terms: &[SymExpr], with: &str) -> Result<SymExpr, SymbolicDerivativeError> {
    let mut sum = SumBuilder::default();
    for term in terms {
        sum.add(derivative(term, with)?);
    }
    Ok(sum.into())
}

/// `(f * g * h)' = f' * g * h + f * g' * h + f * g * h'`
fn product_rule(product: &[SymExpr], with: &str) -> Result<SymExpr, SymbolicDerivativeError> {
    let mut outer_sum = SumBuilder::default();

    for derivative_index in 0..product.len() {
        let mut inner_mult = MultBuilder::default();
        for (term_index, factor) in product.iter().enumerate() {
            let term = if derivative_index == term_index {
                derivative(factor, with)?
            } else {
                factor.clone()
            };

            inner_mult.mult(term);
        }

        outer_sum.add(inner_mult.into());
    }

    Ok(outer_sum.into())
}

/// `(u^v)'`, with three cases depending on where the variable appears:
///
/// - `v` is constant: `v * u^(v - 1) * u'`
/// - `u` is constant: `u^v * log(u) * v'`
/// - otherwise: `u^v * (v' * log(u) + v * u' / u)`
fn power_rule(base: &SymExpr, exponent: &SymExpr, with: &str) -> Result<SymExpr, SymbolicDerivativeError> {
    let power = base.clone().pow(exponent.clone());
    let mut mult_group = MultBuilder::default();

    if !exponent.contains_symbol(with) {
        let lowered = match exponent.as_number() {
            Some(n) => (n + Number::Rational(rational(-1))).into_expr(),
            None => exponent.clone() + SymExpr::integer(-1),
        };
        mult_group.mult(exponent.clone());
        mult_group.mult(base.clone().pow(lowered));
        mult_group.mult(derivative(base, with)?);
    } else if !base.contains_symbol(with) {
        mult_group.mult(power);
        mult_group.mult(SymExpr::call(Func::Log, base.clone()));
        mult_group.mult(derivative(exponent, with)?);
    } else {
        let mut inner = SumBuilder::default();

        let mut exponent_part = MultBuilder::default();
        exponent_part.mult(derivative(exponent, with)?);
        exponent_part.mult(SymExpr::call(Func::Log, base.clone()));
        inner.add(exponent_part.into());

        let mut base_part = MultBuilder::default();
        base_part.mult(exponent.clone());
        base_part.mult(derivative(base, with)?);
        base_part.mult(base.clone().recip());
        inner.add(base_part.into());

        mult_group.mult(power);
        mult_group.mult(inner.into());
    }

    Ok(mult_group.into())
}

/// An error that occurs while differentiating an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum SymbolicDerivativeError {
    /// The function may be differentiable, but its derivative is not computed symbolically when
    /// it is called with this many arguments.
    Unsupported {
        func: Func,
        args: usize,
    },
}

impl fmt::Display for SymbolicDerivativeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported { func, args } => write!(
                f,
                "cannot differentiate `{}` called with {} argument(s)",
                func,
                args,
            ),
        }
    }
}

impl std::error::Error for SymbolicDerivativeError {}

/// Computes the derivative of the given expression with respect to the free symbol `with`. Every
/// other free symbol is treated as a constant. Returns [`Err`] if the derivative could not be
/// symbolically computed.
pub fn derivative(f: &SymExpr, with: &str) -> Result<SymExpr, SymbolicDerivativeError> {
    if is_trivially_zero(f) || !f.contains_symbol(with) {
        return Ok(SymExpr::integer(0));
    }

    let expr = match f {
        SymExpr::Primary(Primary::Symbol(_)) => Ok(SymExpr::integer(1)),
        SymExpr::Primary(Primary::Call(func, args)) => function::function_derivative(*func, args, with),
        SymExpr::Primary(_) => Ok(SymExpr::integer(0)),
        SymExpr::Add(terms) => sum_rule(terms, with),
        SymExpr::Mul(factors) => product_rule(factors, with),
        SymExpr::Exp(base, exponent) => power_rule(base, exponent, with),
    }?;

    if is_trivially_zero(&expr) {
        Ok(SymExpr::integer(0))
    } else {
        Ok(expr)
    }
}

#[cfg(test)]
pub mod tests {
    use assert_float_eq::assert_float_relative_eq;
    use crate::primitive::float;
    use crate::symbolic::{approx::approximate_with, convert, SymbolTable};
    use symcalc_parser::parser::{ast::Expr, Parser};
    use super::*;

    fn parse(source: &str) -> SymExpr {
        let mut table = SymbolTable::new();
        table.bind_symbol("x");
        table.bind_symbol("y");
        let ast = Parser::new(source).try_parse_full::<Expr>().unwrap();
        convert(&ast, &table).unwrap()
    }

    /// Evaluates the expression with `x` substituted.
    fn eval_x(expr: &SymExpr, x: f64) -> f64 {
        approximate_with(expr, &[("x", float(x)), ("y", float(0.75))])
            .expect("expression should have a finite value")
            .to_f64()
    }

    /// Approximates the derivative of the expression with a central difference.
    fn finite_difference(expr: &SymExpr, x: f64) -> f64 {
        const DX: f64 = 1e-6;
        (eval_x(expr, x + DX) - eval_x(expr, x - DX)) / (2.0 * DX)
    }

    fn test_for_function(function: &'static str, points: impl IntoIterator<Item = f64>) {
        let expr = parse(function);
        let symbolic = derivative(&expr, "x")
            .unwrap_or_else(|err| panic!("derivative of \"{function}\" failed: {err}"));

        for point in points {
            let symbolically_computed = eval_x(&symbolic, point);
            let numerically_computed = finite_difference(&expr, point);
            assert_float_relative_eq!(symbolically_computed, numerically_computed, 1e-4);
        }
    }

    #[test]
    fn power_rule() {
        test_for_function("x**2 + x + 1", [0.5, 1.0, 2.0, 5.0, 8.0]);
        test_for_function("x**(1/3)", [0.5, 1.0, 8.0]);
        test_for_function("1/x", [0.5, 2.0, -3.0]);
    }

    #[test]
    fn product_and_chain() {
        test_for_function("x*sin(x)*cos(2*x)", [0.3, 1.0, 2.5]);
        test_for_function("exp(x**2)", [0.1, 0.5, 1.2]);
        test_for_function("log(x**2 + 1)", [0.5, 1.0, 3.0]);
    }

    #[test]
    fn trigonometric() {
        test_for_function("tan(x)", [0.2, 0.7, 1.1]);
        test_for_function("cot(x)", [0.3, 1.0, 2.0]);
        test_for_function("sin(pi*(x)/180)", [30.0, 45.0, 60.0]);
    }

    #[test]
    fn variable_exponent() {
        test_for_function("2**x", [0.5, 1.0, 3.0]);
        test_for_function("E**x", [0.5, 1.0, 2.0]);
        test_for_function("x**x", [0.5, 1.0, 2.0]);
    }

    #[test]
    fn other_symbols_are_constant() {
        test_for_function("x*y + y**2", [0.5, 1.0]);
        assert_eq!(derivative(&parse("y**2 + sin(y)"), "x"), Ok(SymExpr::integer(0)));
    }

    #[test]
    fn trivial_cases() {
        assert_eq!(derivative(&parse("5"), "x"), Ok(SymExpr::integer(0)));
        assert_eq!(derivative(&parse("x"), "x"), Ok(SymExpr::integer(1)));
        assert_eq!(derivative(&parse("3*x"), "x"), Ok(SymExpr::integer(3)));
    }
}
