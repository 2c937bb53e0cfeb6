//! Simplification rules for roots, i.e. rational powers of numbers.

use crate::primitive::{int, rational};
use crate::symbolic::{
    expr::{Primary, SymExpr},
    simplify::{rules::do_power, step::Step},
    step_collector::StepCollector,
};
use rug::{ops::Pow, Integer, Rational};

/// Integers with more bits than this are not searched for perfect powers.
const MAX_BITS: u32 = 64;

/// Largest trial divisor used when searching for perfect powers.
const MAX_DIVISOR: u32 = 10_000;

/// Splits `n` into `a^q * m`, where `a` is as large as possible among the trial divisors.
fn extract_power(n: &Integer, q: u32) -> (Integer, Integer) {
    let mut outside = int(1);
    let mut inside = n.clone();
    let mut d = int(2);

    while d <= MAX_DIVISOR && d.clone().pow(q) <= inside {
        let d_q = d.clone().pow(q);
        while inside.is_divisible(&d_q) {
            inside /= &d_q;
            outside *= &d;
        }
        d += 1;
    }

    (outside, inside)
}

/// Extracts perfect powers from roots of positive integers.
///
/// `12^(1/2) = 2*3^(1/2)`
/// `8^(2/3) = 4`
/// `2^(-1/2) = 1/2*2^(1/2)`
pub fn extract_root(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_power(expr, |base, exponent| {
        let n = base.as_integer()?;
        let exponent = exponent.as_rational()?;
        if *n <= 1 || n.significant_bits() > MAX_BITS || *exponent.denom() == 1 {
            return None;
        }

        let p = exponent.numer().to_i32()?;
        let q = exponent.denom().to_i32()?;

        // p = k*q + r, 0 < r < q
        let k = p.div_euclid(q);
        let r = p.rem_euclid(q);
        let (outside, inside) = extract_power(n, q as u32);
        if k == 0 && outside == 1 {
            return None;
        }

        let coefficient = Rational::from(n.clone()).pow(k) * Rational::from(outside.pow(r as u32));
        let coefficient = SymExpr::Primary(Primary::Rational(coefficient));
        if inside == 1 {
            Some(coefficient)
        } else {
            Some(SymExpr::Mul(vec![
                coefficient,
                SymExpr::integer(inside).pow(SymExpr::Primary(Primary::Rational(rational((r, q))))),
            ]))
        }
    })?;

    step_collector.push(Step::ExtractRoot);
    Some(opt)
}

/// Splits non-integer rational powers of positive fractions.
///
/// `(2/3)^(1/2) = 2^(1/2) * 3^(-1/2)`
pub fn split_fraction_power(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_power(expr, |base, exponent| {
        let base = base.as_rational()?;
        let exponent_value = exponent.as_rational()?;
        if *base <= 0 || *base.denom() == 1 || *exponent_value.denom() == 1 {
            return None;
        }

        Some(SymExpr::Mul(vec![
            SymExpr::integer(base.numer().clone()).pow(exponent.clone()),
            SymExpr::integer(base.denom().clone()).pow(-exponent.clone()),
        ]))
    })?;

    step_collector.push(Step::SplitFractionPower);
    Some(opt)
}

/// Applies all root rules.
pub fn all(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    extract_root(expr, step_collector)
        .or_else(|| split_fraction_power(expr, step_collector))
}
