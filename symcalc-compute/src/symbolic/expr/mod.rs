//! A representation of mathematical expressions that is easier to manipulate than an AST.
//!
//! The [`Expr`](symcalc_parser::parser::ast::Expr) type from `symcalc_parser` is a recursive
//! `enum` that represents the AST of an expression. It's convenient for parsing, but not so much
//! for algebraic manipulation.
//!
//! This module defines [`SymExpr`], which flattens the AST into a sum of products: `x + (y + z)`
//! is one [`SymExpr::Add`] with three terms, `a - b` is `a + (-1)*b`, and `a / b` is `a * b**-1`.
//! Names are no longer plain strings either: every name is resolved to a fixed function, a fixed
//! constant, or a free symbol when the expression is bound (see [`super::bind`]).
//!
//! # Strict equality
//!
//! Determining whether two expressions are mathematically equal is hard: `x**2 + 2*x + 1` and
//! `(x + 1)**2` are equal, but only after expanding one of them. The simplifier still needs an
//! equality to decide which terms / factors can be combined, so we define a cheaper subset of
//! semantic equality, called **strict equality**. Two expressions are strictly equal if:
//!
//! - They are the same type of expression (i.e. both [`SymExpr::Primary`], both
//!   [`SymExpr::Add`], etc.).
//! - If both are [`SymExpr::Primary`], both expressions must have equal values.
//! - If both are [`SymExpr::Add`] or [`SymExpr::Mul`], both expressions must have strictly equal
//!   terms / factors, in any order.
//! - If both are [`SymExpr::Exp`], both expressions must have strictly equal base and exponent.
//!
//! Strict equality can never report false positives, and it does not depend on any
//! simplification to work. The [`PartialEq`] implementation for [`SymExpr`] implements strict
//! equality.

mod builtin;
mod iter;
mod number;

pub use builtin::{Constant, Func};
pub use iter::ExprIter;
pub use number::Number;

use crate::primitive::{float, int, rational};
use rug::{Float, Integer, Rational};
use std::{mem, ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub}};

/// A single leaf of an expression, or a call of a fixed function.
#[derive(Debug, Clone, PartialEq)]
pub enum Primary {
    /// An exact number.
    Rational(Rational),

    /// An approximate number, produced by decimal literals.
    Float(Float),

    /// A fixed constant.
    Constant(Constant),

    /// A free symbol.
    Symbol(String),

    /// A call of a fixed function.
    Call(Func, Vec<SymExpr>),
}

/// A symbolic expression. See the [module-level documentation](self) for more information.
#[derive(Debug, Clone)]
pub enum SymExpr {
    /// A single leaf or call.
    Primary(Primary),

    /// Multiple terms added together.
    Add(Vec<SymExpr>),

    /// Multiple factors multiplied together.
    Mul(Vec<SymExpr>),

    /// An expression raised to the power of another expression.
    Exp(Box<SymExpr>, Box<SymExpr>),
}

impl SymExpr {
    /// Creates an exact integer.
    pub fn integer<T>(n: T) -> Self
    where
        Integer: From<T>,
    {
        Self::Primary(Primary::Rational(Rational::from(int(n))))
    }

    /// Creates the exact fraction `numer / denom`. The fraction is reduced.
    ///
    /// `denom` must not be zero.
    pub fn rational(numer: i64, denom: i64) -> Self {
        Self::Primary(Primary::Rational(rational((numer, denom))))
    }

    /// Creates a float.
    pub fn float(value: f64) -> Self {
        Self::Primary(Primary::Float(float(value)))
    }

    /// Creates a free symbol.
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Primary(Primary::Symbol(name.into()))
    }

    /// Creates a fixed constant.
    pub fn constant(constant: Constant) -> Self {
        Self::Primary(Primary::Constant(constant))
    }

    /// Creates a call of a fixed function with a single argument.
    pub fn call(func: Func, arg: SymExpr) -> Self {
        Self::Primary(Primary::Call(func, vec![arg]))
    }

    /// Creates `self ** exponent`. No simplification is done.
    pub fn pow(self, exponent: SymExpr) -> Self {
        Self::Exp(Box::new(self), Box::new(exponent))
    }

    /// Creates `self ** -1`. No simplification is done.
    pub fn recip(self) -> Self {
        self.pow(Self::integer(-1))
    }

    /// Returns the square root of this expression. No simplification is done.
    pub fn sqrt(self) -> Self {
        self.pow(Self::rational(1, 2))
    }

    /// Returns the exact value of this expression, if it is an exact number.
    pub fn as_rational(&self) -> Option<&Rational> {
        match self {
            Self::Primary(Primary::Rational(r)) => Some(r),
            _ => None,
        }
    }

    /// Returns the value of this expression if it is an exact integer.
    pub fn as_integer(&self) -> Option<&Integer> {
        self.as_rational()
            .filter(|r| *r.denom() == 1)
            .map(|r| r.numer())
    }

    /// Returns the value of this expression if it is a number, exact or not.
    pub fn as_number(&self) -> Option<Number> {
        Number::from_expr(self)
    }

    /// Returns the name of this expression if it is a free symbol.
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Self::Primary(Primary::Symbol(sym)) => Some(sym),
            _ => None,
        }
    }

    /// Returns the function and arguments if this expression is a call.
    pub fn as_call(&self) -> Option<(Func, &[SymExpr])> {
        match self {
            Self::Primary(Primary::Call(func, args)) => Some((*func, args)),
            _ => None,
        }
    }

    /// Returns true if this expression is a number, exact or not.
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Primary(Primary::Rational(_) | Primary::Float(_)))
    }

    /// Returns true if this expression is the exact number zero.
    pub fn is_zero(&self) -> bool {
        self.as_rational().map_or(false, |r| *r == 0)
    }

    /// Returns true if this expression is the number zero, exact or not.
    pub fn is_numeric_zero(&self) -> bool {
        self.as_number().map_or(false, |n| n.is_zero())
    }

    /// Returns true if this expression is the exact number one.
    pub fn is_one(&self) -> bool {
        self.as_rational().map_or(false, |r| *r == 1)
    }

    /// Returns true if this expression is a float.
    pub fn is_float(&self) -> bool {
        matches!(self, Self::Primary(Primary::Float(_)))
    }

    /// Returns true if the given free symbol appears anywhere in this expression.
    pub fn contains_symbol(&self, name: &str) -> bool {
        self.iter().any(|expr| expr.as_symbol() == Some(name))
    }

    /// Returns true if no free symbol appears in this expression.
    pub fn is_constant(&self) -> bool {
        self.iter().all(|expr| expr.as_symbol().is_none())
    }

    /// Returns true if a float appears anywhere in this expression.
    pub fn contains_float(&self) -> bool {
        self.iter().any(SymExpr::is_float)
    }

    /// Splits this expression into its numeric coefficient and the remaining factors.
    ///
    /// - `5` -> `(5, 1)`
    /// - `3*a` -> `(3, a)`
    /// - `1/4*a*b` -> `(1/4, a*b)`
    /// - `a` -> `(1, a)`
    pub fn split_coefficient(&self) -> (Number, SymExpr) {
        match self {
            Self::Primary(Primary::Rational(_) | Primary::Float(_)) => {
                (Number::from_expr(self).unwrap_or(Number::Rational(rational(1))), Self::integer(1))
            },
            Self::Mul(factors) => {
                let mut coefficient = Number::Rational(rational(1));
                let mut rest = Vec::with_capacity(factors.len());
                for factor in factors {
                    match Number::from_expr(factor) {
                        Some(n) => coefficient = coefficient * n,
                        None => rest.push(factor.clone()),
                    }
                }
                (coefficient, Self::Mul(rest).downgrade())
            },
            _ => (Number::Rational(rational(1)), self.clone()),
        }
    }

    /// Splits this expression into a base and an exponent. Expressions that are not powers have
    /// an exponent of one.
    pub fn split_power(&self) -> (&SymExpr, SymExpr) {
        match self {
            Self::Exp(base, exponent) => (base, (**exponent).clone()),
            _ => (self, Self::integer(1)),
        }
    }

    /// Trivially downgrades the expression into a simpler form.
    ///
    /// Some operations may result in an [`SymExpr::Add`] with zero / one term, or an
    /// [`SymExpr::Mul`] with zero / one factor. This function checks for these cases and
    /// simplifies the expression into the single term / factor, or the integer 0 or 1.
    pub fn downgrade(self) -> Self {
        match self {
            Self::Add(mut terms) => {
                if terms.is_empty() {
                    Self::integer(0)
                } else if terms.len() == 1 {
                    terms.remove(0)
                } else {
                    Self::Add(terms)
                }
            },
            Self::Mul(mut factors) => {
                if factors.is_empty() {
                    Self::integer(1)
                } else if factors.len() == 1 {
                    factors.remove(0)
                } else {
                    Self::Mul(factors)
                }
            },
            _ => self,
        }
    }

    /// Returns an iterator that traverses the tree of expressions in pre-order.
    pub fn iter(&self) -> ExprIter<'_> {
        ExprIter::new(self)
    }
}

/// Checks if two multisets of expressions are strictly equal, ignoring order.
fn same_elements(lhs: &[SymExpr], rhs: &[SymExpr]) -> bool {
    if lhs.len() != rhs.len() {
        return false;
    }

    let mut used = vec![false; rhs.len()];
    lhs.iter().all(|item| {
        let found = rhs.iter()
            .enumerate()
            .position(|(i, candidate)| !used[i] && candidate == item);
        match found {
            Some(i) => {
                used[i] = true;
                true
            },
            None => false,
        }
    })
}

/// Checks if two expressions are **strictly** equal.
///
/// For more information about strict equality, see the [module-level documentation](self).
impl PartialEq for SymExpr {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Primary(lhs), Self::Primary(rhs)) => lhs == rhs,
            (Self::Add(lhs), Self::Add(rhs)) | (Self::Mul(lhs), Self::Mul(rhs)) => {
                same_elements(lhs, rhs)
            },
            (Self::Exp(lhs_base, lhs_exp), Self::Exp(rhs_base, rhs_exp)) => {
                lhs_base == rhs_base && lhs_exp == rhs_exp
            },
            _ => false,
        }
    }
}

impl From<Number> for SymExpr {
    fn from(number: Number) -> Self {
        number.into_expr()
    }
}

/// Adds two [`SymExpr`]s together. No simplification is done, except that operands which are
/// themselves sums are flattened into one list of terms.
impl Add for SymExpr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Add(mut terms), Self::Add(rhs_terms)) => {
                terms.extend(rhs_terms);
                Self::Add(terms)
            },
            (Self::Add(mut terms), other) | (other, Self::Add(mut terms)) => {
                terms.push(other);
                Self::Add(terms)
            },
            (lhs, rhs) => Self::Add(vec![lhs, rhs]),
        }
    }
}

/// Adds two [`SymExpr`]s together. The behavior is the same as [`Add`], except we can reuse the
/// allocated memory of `self` if possible.
impl AddAssign for SymExpr {
    fn add_assign(&mut self, rhs: Self) {
        match (self, rhs) {
            (Self::Add(terms), Self::Add(rhs_terms)) => terms.extend(rhs_terms),
            (Self::Add(terms), other) => terms.push(other),
            (lhs, rhs) => {
                let owned = mem::replace(lhs, Self::Add(Vec::new()));
                *lhs = owned + rhs;
            },
        }
    }
}

/// Subtracts two [`SymExpr`]s, by adding the negation of the right-hand side.
impl Sub for SymExpr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + -rhs
    }
}

/// Multiplies two [`SymExpr`]s together. No simplification is done, except that operands which
/// are themselves products are flattened into one list of factors.
impl Mul for SymExpr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Mul(mut factors), Self::Mul(other)) => {
                factors.extend(other);
                Self::Mul(factors)
            },
            (Self::Mul(mut factors), other) | (other, Self::Mul(mut factors)) => {
                factors.push(other);
                Self::Mul(factors)
            },
            (lhs, rhs) => Self::Mul(vec![lhs, rhs]),
        }
    }
}

impl MulAssign for SymExpr {
    fn mul_assign(&mut self, rhs: Self) {
        match (self, rhs) {
            (Self::Mul(factors), Self::Mul(rhs_factors)) => factors.extend(rhs_factors),
            (Self::Mul(factors), other) => factors.push(other),
            (lhs, rhs) => {
                let owned = mem::replace(lhs, Self::Mul(Vec::new()));
                *lhs = owned * rhs;
            },
        }
    }
}

/// Divides two [`SymExpr`]s, by multiplying with the reciprocal of the right-hand side.
impl Div for SymExpr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        self * rhs.recip()
    }
}

/// Multiplies this expression by -1. No simplification is done, except for the case where the
/// expression is a number, in which case the number is negated.
impl Neg for SymExpr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Self::Primary(Primary::Rational(r)) => Self::Primary(Primary::Rational(-r)),
            Self::Primary(Primary::Float(f)) => Self::Primary(Primary::Float(-f)),
            expr => Self::integer(-1) * expr,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> SymExpr {
        SymExpr::symbol("x")
    }

    fn y() -> SymExpr {
        SymExpr::symbol("y")
    }

    #[test]
    fn strict_equality_ignores_order() {
        assert_eq!(x() + y(), y() + x());
        assert_eq!(SymExpr::integer(2) * x(), x() * SymExpr::integer(2));
        assert_ne!(x().pow(y()), y().pow(x()));
    }

    #[test]
    fn strict_equality_counts_duplicates() {
        let a = SymExpr::Add(vec![x(), x(), y()]);
        let b = SymExpr::Add(vec![x(), y(), y()]);
        assert_ne!(a, b);
    }

    #[test]
    fn operators_flatten() {
        let expr = x() + y() + SymExpr::integer(1);
        assert_eq!(expr, SymExpr::Add(vec![x(), y(), SymExpr::integer(1)]));

        let expr = x() * (y() * SymExpr::integer(3));
        assert_eq!(expr, SymExpr::Mul(vec![x(), y(), SymExpr::integer(3)]));
    }

    #[test]
    fn negation_of_numbers() {
        assert_eq!(-SymExpr::integer(4), SymExpr::integer(-4));
        assert_eq!(-x(), SymExpr::Mul(vec![SymExpr::integer(-1), x()]));
    }

    #[test]
    fn coefficient_split() {
        let expr = SymExpr::Mul(vec![SymExpr::rational(1, 4), x(), y()]);
        let (coefficient, rest) = expr.split_coefficient();
        assert_eq!(coefficient, Number::Rational(rational((1, 4))));
        assert_eq!(rest, x() * y());
    }

    #[test]
    fn symbols_inside_calls() {
        let expr = SymExpr::call(Func::Sin, x() + SymExpr::integer(1));
        assert!(expr.contains_symbol("x"));
        assert!(!expr.contains_symbol("y"));
        assert!(!expr.is_constant());
        assert!(SymExpr::call(Func::Cos, SymExpr::constant(Constant::Pi)).is_constant());
    }
}
