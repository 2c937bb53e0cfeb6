//! Factoring of sums.
//!
//! A sum is factored in three steps:
//!
//! 1. The rational content is pulled out: the GCD of the numerators of the coefficients divided by
//!    the LCM of their denominators. The content takes the sign of the term printed first, so the
//!    remaining sum always starts with a positive coefficient.
//! 2. Factors that appear in every term with a positive integer exponent are pulled out, with the
//!    smallest exponent they appear with.
//! 3. If what remains is a polynomial in a single variable, it is split into linear factors using
//!    the rational root theorem (see [`poly`]).
//!
//! Products and integer powers are factored by factoring each of their parts.

pub mod poly;

use crate::primitive::int;
use crate::symbolic::{
    expand::expand,
    expr::{Primary, SymExpr},
    fmt::order::term_key,
    simplify::evaluate,
};
use log::trace;
use poly::Polynomial;
use rug::{Integer, Rational};

/// Splits a term into its factors, each with an exponent.
fn term_factors(rest: &SymExpr) -> Vec<(SymExpr, SymExpr)> {
    let factors = match rest {
        SymExpr::Mul(factors) => factors.as_slice(),
        one if one.is_one() => &[][..],
        other => std::slice::from_ref(other),
    };
    factors.iter()
        .map(|factor| {
            let (base, exponent) = factor.split_power();
            (base.clone(), exponent)
        })
        .collect()
}

/// Returns the factors common to every term, with the smallest positive integer exponent they
/// appear with.
fn common_factors(terms: &[Vec<(SymExpr, SymExpr)>]) -> Vec<(SymExpr, Integer)> {
    let Some((first, others)) = terms.split_first() else {
        return Vec::new();
    };

    first.iter()
        .filter_map(|(base, exponent)| {
            let mut min = exponent.as_integer().filter(|n| **n > 0)?.clone();
            for other in others {
                let found = other.iter()
                    .find(|(other_base, _)| other_base == base)
                    .and_then(|(_, other_exponent)| other_exponent.as_integer())
                    .filter(|n| **n > 0)?;
                if *found < min {
                    min = found.clone();
                }
            }
            Some((base.clone(), min))
        })
        .collect()
}

/// Divides a term by the common factors.
fn remove_common(factors: Vec<(SymExpr, SymExpr)>, common: &[(SymExpr, Integer)]) -> SymExpr {
    let remaining = factors.into_iter()
        .filter_map(|(base, exponent)| {
            let Some((_, min)) = common.iter().find(|(common_base, _)| *common_base == base) else {
                return Some(base.pow(exponent));
            };
            let exponent = exponent.as_integer().map(|n| n.clone() - min)?;
            if exponent == 0 {
                None
            } else {
                Some(base.pow(SymExpr::integer(exponent)))
            }
        })
        .collect::<Vec<_>>();
    SymExpr::Mul(remaining).downgrade()
}

/// Factors a sum. Returns [`None`] if a coefficient is not exact, or if nothing but the sign
/// could be pulled out.
fn factor_sum(terms: &[SymExpr]) -> Option<SymExpr> {
    // 1. rational content
    let split = terms.iter()
        .map(|term| {
            let (coefficient, rest) = term.split_coefficient();
            coefficient.as_rational().cloned().map(|c| (c, rest))
        })
        .collect::<Option<Vec<_>>>()?;

    let (numer_gcd, denom_lcm) = split.iter()
        .fold((int(0), int(1)), |(gcd, lcm), (c, _)| {
            (gcd.gcd(c.numer()), lcm.lcm(c.denom()))
        });
    if numer_gcd == 0 {
        return None;
    }
    let mut content = Rational::from((numer_gcd, denom_lcm));
    let leading_negative = split.iter()
        .min_by_key(|(_, rest)| term_key(rest))
        .map_or(false, |(c, _)| *c < 0);
    if leading_negative {
        content = -content;
    }

    // 2. common factors
    let factored_terms = split.iter()
        .map(|(_, rest)| term_factors(rest))
        .collect::<Vec<_>>();
    let common = common_factors(&factored_terms);

    let remaining_terms = split.iter()
        .zip(factored_terms)
        .map(|((c, _), factors)| {
            let c = SymExpr::Primary(Primary::Rational(c.clone() / &content));
            evaluate(&(c * remove_common(factors, &common)))
        })
        .collect::<Vec<_>>();

    // 3. linear factors
    let mut progress = *content.denom() != 1 || *content.numer().as_abs() != 1 || !common.is_empty();
    let mut result = vec![SymExpr::Primary(Primary::Rational(content))];
    result.extend(common.into_iter().map(|(base, exponent)| base.pow(SymExpr::integer(exponent))));

    match Polynomial::from_terms(&remaining_terms) {
        Some(polynomial) => {
            let var = polynomial.var.clone();
            let (linear, rest) = polynomial.linear_factors();
            trace!("factor: {} linear factor(s) of a polynomial in {}", linear.len(), var);
            progress |= !linear.is_empty();
            result.extend(linear.iter().map(|factor| {
                factor.to_expr(&var).pow(SymExpr::integer(factor.multiplicity))
            }));
            result.push(rest.into_expr());
        },
        None => result.push(SymExpr::Add(remaining_terms).downgrade()),
    }

    // a sign alone is not a factorization
    if !progress {
        return None;
    }

    Some(evaluate(&SymExpr::Mul(result)))
}

/// Factors the given expression.
///
/// `x^2 - 1 = (x - 1)*(x + 1)`
/// `2x^2 + 4x = 2x*(x + 2)`
/// `x^2 + 1` is left unchanged, since it has no rational roots.
pub fn factor(expr: &SymExpr) -> SymExpr {
    match evaluate(expr) {
        SymExpr::Mul(factors) => {
            evaluate(&SymExpr::Mul(factors.iter().map(factor).collect()))
        },
        SymExpr::Exp(base, exponent) if exponent.as_integer().is_some() => {
            evaluate(&factor(&base).pow(*exponent))
        },
        other => {
            let expanded = expand(&other);
            if expanded.contains_float() {
                return other;
            }
            let factored = match &expanded {
                SymExpr::Add(terms) => factor_sum(terms),
                _ => return other,
            };
            factored.unwrap_or(expanded)
        },
    }
}
