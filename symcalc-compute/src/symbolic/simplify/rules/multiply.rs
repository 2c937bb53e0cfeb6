//! Simplification rules for expressions involving multiplication, including combining like
//! factors.

use crate::primitive::rational;
use crate::symbolic::{
    expr::{Number, SymExpr},
    simplify::{rules::do_multiply, step::Step},
    step_collector::StepCollector,
};

/// `(a*b)*c = a*b*c`
pub fn flatten(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_multiply(expr, |factors| {
        if !factors.iter().any(|factor| matches!(factor, SymExpr::Mul(_))) {
            return None;
        }

        let new_factors = factors.iter()
            .flat_map(|factor| match factor {
                SymExpr::Mul(inner) => inner.clone(),
                other => vec![other.clone()],
            })
            .collect::<Vec<_>>();
        Some(SymExpr::Mul(new_factors).downgrade())
    })?;

    step_collector.push(Step::Flatten);
    Some(opt)
}

/// `0*a = 0`
/// `a*0 = 0`
pub fn multiply_zero(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_multiply(expr, |factors| {
        if factors.iter().any(SymExpr::is_zero) {
            Some(SymExpr::integer(0))
        } else {
            None
        }
    })?;

    step_collector.push(Step::MultiplyZero);
    Some(opt)
}

/// Multiplies all numeric factors into a single coefficient, and removes a coefficient of exactly
/// one.
///
/// `2*3*a = 6a`
/// `1*a = a`
pub fn multiply_numbers(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_multiply(expr, |factors| {
        let numbers = factors.iter().filter(|factor| factor.is_number()).count();
        let has_exact_one = factors.iter().any(SymExpr::is_one);
        if numbers < 2 && !has_exact_one {
            return None;
        }

        let mut coefficient = Number::Rational(rational(1));
        let mut rest = Vec::with_capacity(factors.len());
        for factor in factors {
            match factor.as_number() {
                Some(n) => coefficient = coefficient * n,
                None => rest.push(factor.clone()),
            }
        }

        if coefficient.is_zero() {
            return Some(SymExpr::integer(0));
        }
        if coefficient.as_rational().map_or(true, |r| *r != 1) {
            rest.insert(0, coefficient.into_expr());
        }
        Some(SymExpr::Mul(rest).downgrade())
    })?;

    step_collector.push(Step::MultiplyNumbers);
    Some(opt)
}

/// Combines like factors, adding up their exponents. Plain numbers are left alone; they are
/// combined by [`multiply_numbers`].
///
/// `a*a = a^2`
/// `a^2*a^3 = a^(2+3)`
/// `a*a^-1 = a^(1-1)`
/// etc.
pub fn combine_like_factors(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_multiply(expr, |factors| {
        let mut numbers = Vec::new();
        let mut groups: Vec<(&SymExpr, Vec<SymExpr>)> = Vec::with_capacity(factors.len());
        for factor in factors {
            if factor.is_number() {
                numbers.push(factor.clone());
                continue;
            }

            let (base, exponent) = factor.split_power();
            match groups.iter_mut().find(|(other, _)| *other == base) {
                Some((_, exponents)) => exponents.push(exponent),
                None => groups.push((base, vec![exponent])),
            }
        }

        if numbers.len() + groups.len() == factors.len() {
            return None;
        }

        let new_factors = numbers.into_iter()
            .chain(groups.into_iter().map(|(base, exponents)| {
                if exponents.len() == 1 && exponents[0].is_one() {
                    base.clone()
                } else {
                    base.clone().pow(SymExpr::Add(exponents).downgrade())
                }
            }))
            .collect::<Vec<_>>();
        Some(SymExpr::Mul(new_factors).downgrade())
    })?;

    step_collector.push(Step::CombineLikeFactors);
    Some(opt)
}

/// Combines powers of positive integers with the same non-integer exponent.
///
/// `2^(1/2)*3^(1/2) = 6^(1/2)`
pub fn combine_roots(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_multiply(expr, |factors| {
        fn integer_root(factor: &SymExpr) -> Option<(&SymExpr, &SymExpr)> {
            match factor {
                SymExpr::Exp(base, exponent)
                    if base.as_integer().map_or(false, |n| *n > 1)
                        && exponent.as_rational().map_or(false, |r| *r.denom() != 1) => {
                    Some((base, exponent))
                },
                _ => None,
            }
        }

        let mut new_factors: Vec<SymExpr> = Vec::with_capacity(factors.len());
        let mut combined = false;
        for factor in factors {
            if let Some((base, exponent)) = integer_root(factor) {
                let existing = new_factors.iter_mut().find(|other| {
                    integer_root(other).map_or(false, |(_, other_exponent)| other_exponent == exponent)
                });
                if let Some(existing) = existing {
                    if let SymExpr::Exp(existing_base, _) = existing {
                        let product = existing_base.as_integer()
                            .zip(base.as_integer())
                            .map(|(a, b)| SymExpr::integer(a.clone() * b));
                        if let Some(product) = product {
                            **existing_base = product;
                            combined = true;
                            continue;
                        }
                    }
                }
            }
            new_factors.push(factor.clone());
        }

        if combined {
            Some(SymExpr::Mul(new_factors).downgrade())
        } else {
            None
        }
    })?;

    step_collector.push(Step::CombineRoots);
    Some(opt)
}

/// Applies all multiplication rules.
///
/// All multiplication rules will reduce the complexity of the expression.
pub fn all(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    flatten(expr, step_collector)
        .or_else(|| multiply_zero(expr, step_collector))
        .or_else(|| multiply_numbers(expr, step_collector))
        .or_else(|| combine_like_factors(expr, step_collector))
        .or_else(|| combine_roots(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> SymExpr {
        SymExpr::symbol("x")
    }

    #[test]
    fn zero_factor() {
        let expr = SymExpr::Mul(vec![x(), SymExpr::integer(0), SymExpr::symbol("y")]);
        assert_eq!(multiply_zero(&expr, &mut ()), Some(SymExpr::integer(0)));
    }

    #[test]
    fn numbers_move_to_the_front() {
        let expr = SymExpr::Mul(vec![x(), SymExpr::integer(2), SymExpr::rational(3, 4)]);
        assert_eq!(
            multiply_numbers(&expr, &mut ()),
            Some(SymExpr::Mul(vec![SymExpr::rational(3, 2), x()])),
        );

        let expr = SymExpr::Mul(vec![SymExpr::integer(1), x()]);
        assert_eq!(multiply_numbers(&expr, &mut ()), Some(x()));
    }

    #[test]
    fn like_factors() {
        let expr = SymExpr::Mul(vec![x(), SymExpr::integer(3), x()]);
        assert_eq!(
            combine_like_factors(&expr, &mut ()),
            Some(SymExpr::Mul(vec![
                SymExpr::integer(3),
                x().pow(SymExpr::Add(vec![SymExpr::integer(1), SymExpr::integer(1)])),
            ])),
        );
    }

    #[test]
    fn roots_with_same_exponent() {
        let expr = SymExpr::integer(2).sqrt() * SymExpr::integer(3).sqrt();
        assert_eq!(combine_roots(&expr, &mut ()), Some(SymExpr::integer(6).sqrt()));
    }
}
