use crate::primitive::float;
use rug::{Float, Rational};
use std::ops::{Add, Mul, Neg};
use super::{Primary, SymExpr};

/// A numeric value: either exact, or a floating-point approximation.
///
/// Arithmetic between two exact values stays exact; as soon as a float is involved, the result
/// is a float.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    Rational(Rational),
    Float(Float),
}

impl Number {
    /// Extracts the number from an expression, if it is one.
    pub fn from_expr(expr: &SymExpr) -> Option<Self> {
        match expr {
            SymExpr::Primary(Primary::Rational(r)) => Some(Number::Rational(r.clone())),
            SymExpr::Primary(Primary::Float(f)) => Some(Number::Float(f.clone())),
            _ => None,
        }
    }

    /// Converts the number into an expression.
    pub fn into_expr(self) -> SymExpr {
        match self {
            Number::Rational(r) => SymExpr::Primary(Primary::Rational(r)),
            Number::Float(f) => SymExpr::Primary(Primary::Float(f)),
        }
    }

    /// Returns the number as a float.
    pub fn to_float(&self) -> Float {
        match self {
            Number::Rational(r) => float(r),
            Number::Float(f) => f.clone(),
        }
    }

    /// Returns the exact value, if the number is exact.
    pub fn as_rational(&self) -> Option<&Rational> {
        match self {
            Number::Rational(r) => Some(r),
            Number::Float(_) => None,
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Number::Rational(r) => *r == 0,
            Number::Float(f) => f.is_zero(),
        }
    }

    pub fn is_one(&self) -> bool {
        match self {
            Number::Rational(r) => *r == 1,
            Number::Float(f) => *f == 1,
        }
    }

    pub fn is_negative(&self) -> bool {
        match self {
            Number::Rational(r) => *r < 0,
            Number::Float(f) => *f < 0,
        }
    }

    /// Returns the absolute value of the number.
    pub fn abs(self) -> Self {
        match self {
            Number::Rational(r) => Number::Rational(r.abs()),
            Number::Float(f) => Number::Float(f.abs()),
        }
    }
}

impl Add for Number {
    type Output = Number;

    fn add(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Number::Rational(a), Number::Rational(b)) => Number::Rational(a + b),
            (a, b) => Number::Float(a.to_float() + b.to_float()),
        }
    }
}

impl Mul for Number {
    type Output = Number;

    fn mul(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Number::Rational(a), Number::Rational(b)) => Number::Rational(a * b),
            (a, b) => Number::Float(a.to_float() * b.to_float()),
        }
    }
}

impl Neg for Number {
    type Output = Number;

    fn neg(self) -> Number {
        match self {
            Number::Rational(r) => Number::Rational(-r),
            Number::Float(f) => Number::Float(-f),
        }
    }
}
