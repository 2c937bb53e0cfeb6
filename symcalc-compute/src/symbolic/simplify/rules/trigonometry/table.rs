//! Exact values of the trigonometric functions at angles that are multiples of `1/12` or `1/8` of
//! a full turn.
//!
//! The tables are keyed by the angle divided by `2pi`, reduced to the range `[0, 1)`. Dividing by
//! a full turn lets every function share the same set of keys. Each table is generated from the
//! values in the first quadrant using the symmetries of the function.

use crate::primitive::rational;
use crate::symbolic::expr::SymExpr;
use once_cell::sync::Lazy;
use rug::Rational;
use std::collections::HashMap;

pub static ZERO: Lazy<SymExpr> = Lazy::new(|| SymExpr::integer(0));

pub static ONE: Lazy<SymExpr> = Lazy::new(|| SymExpr::integer(1));

pub static ONE_HALF: Lazy<SymExpr> = Lazy::new(|| SymExpr::rational(1, 2));

/// `sqrt(2)/2`
pub static SQRT_TWO_HALF: Lazy<SymExpr> = Lazy::new(|| SymExpr::Mul(vec![
    SymExpr::rational(1, 2),
    SymExpr::integer(2).sqrt(),
]));

/// `sqrt(3)/2`
pub static SQRT_THREE_HALF: Lazy<SymExpr> = Lazy::new(|| SymExpr::Mul(vec![
    SymExpr::rational(1, 2),
    SymExpr::integer(3).sqrt(),
]));

/// `sqrt(3)`
pub static SQRT_THREE: Lazy<SymExpr> = Lazy::new(|| SymExpr::integer(3).sqrt());

/// `sqrt(3)/3`
pub static SQRT_THREE_THIRD: Lazy<SymExpr> = Lazy::new(|| SymExpr::Mul(vec![
    SymExpr::rational(1, 3),
    SymExpr::integer(3).sqrt(),
]));

/// The output of a trigonometric function.
#[derive(Debug, Clone, Copy)]
pub struct TrigOut {
    /// The absolute value of the output.
    pub output: &'static SymExpr,

    /// Whether the output is negated.
    pub neg: bool,
}

impl TrigOut {
    /// Returns the output as an expression.
    pub fn to_expr(self) -> SymExpr {
        if self.neg && !self.output.is_zero() {
            -SymExpr::clone(self.output)
        } else {
            SymExpr::clone(self.output)
        }
    }
}

/// Reduces a fraction of a turn to the range `[0, 1)`.
pub fn reduce(turns: Rational) -> Rational {
    let floor = turns.clone().floor();
    turns - floor
}

/// Builds a table from the values in the first quadrant.
///
/// `mirror_neg` is true if `f(1/2 - t) = -f(t)`, and `shift_neg` is true if `f(t + 1/2) = -f(t)`.
/// Every function here is either odd or even, which determines `f(1 - t)`.
fn build(
    quadrant: &[((i32, i32), &'static SymExpr)],
    mirror_neg: bool,
    shift_neg: bool,
) -> HashMap<Rational, TrigOut> {
    let half = rational((1, 2));
    let mut table = HashMap::new();
    for &(angle, output) in quadrant {
        let t = rational(angle);
        let symmetric = [
            (t.clone(), false),
            (half.clone() - &t, mirror_neg),
            (half.clone() + &t, shift_neg),
            (rational(1) - &t, mirror_neg != shift_neg),
        ];
        for (angle, neg) in symmetric {
            table.entry(reduce(angle)).or_insert(TrigOut { output, neg });
        }
    }
    table
}

/// `sin(x)`
pub static SIN_TABLE: Lazy<HashMap<Rational, TrigOut>> = Lazy::new(|| build(&[
    ((0, 1), &*ZERO),
    ((1, 12), &*ONE_HALF),
    ((1, 8), &*SQRT_TWO_HALF),
    ((1, 6), &*SQRT_THREE_HALF),
    ((1, 4), &*ONE),
], false, true));

/// `tan(x)`; the angle `1/4` (and `3/4`) is undefined.
pub static TAN_TABLE: Lazy<HashMap<Rational, TrigOut>> = Lazy::new(|| build(&[
    ((0, 1), &*ZERO),
    ((1, 12), &*SQRT_THREE_THIRD),
    ((1, 8), &*ONE),
    ((1, 6), &*SQRT_THREE),
], true, false));

/// `cot(x)`; the angle `0` (and `1/2`) is undefined.
pub static COT_TABLE: Lazy<HashMap<Rational, TrigOut>> = Lazy::new(|| build(&[
    ((1, 12), &*SQRT_THREE),
    ((1, 8), &*ONE),
    ((1, 6), &*SQRT_THREE_THIRD),
    ((1, 4), &*ZERO),
], true, false));
