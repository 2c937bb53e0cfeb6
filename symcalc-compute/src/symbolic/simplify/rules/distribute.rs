//! Simplification rules related to the distributive property. These rules make expressions
//! larger, so they are only applied by [`expand`](crate::symbolic::expand()).

use crate::symbolic::{
    expr::SymExpr,
    simplify::{rules::{do_multiply, do_power}, step::Step},
    step_collector::StepCollector,
};

/// The largest power of a sum that is multiplied out.
const MAX_EXPANDED_POWER: u32 = 32;

/// Multiplies out the product of two sums, without simplifying.
fn multiply_sums(lhs: &[SymExpr], rhs: &[SymExpr]) -> Vec<SymExpr> {
    lhs.iter()
        .flat_map(|a| rhs.iter().map(move |b| a.clone() * b.clone()))
        .collect()
}

/// `a*(b+c) = a*b + a*c`
pub fn distributive_property(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_multiply(expr, |factors| {
        // find the first `SymExpr::Add`, and distribute every other factor over it
        let mut factors_to_distribute = factors.to_vec();
        let idx = factors_to_distribute.iter()
            .position(|factor| matches!(factor, SymExpr::Add(_)))?;
        let SymExpr::Add(add_factor_terms) = factors_to_distribute.swap_remove(idx) else {
            return None;
        };

        let new_terms = add_factor_terms.into_iter()
            .map(|term| SymExpr::Mul(factors_to_distribute.clone()) * term)
            .collect::<Vec<_>>();
        Some(SymExpr::Add(new_terms))
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::DistributiveProperty);
    Some(opt)
}

/// Multiplies out integer powers of sums.
///
/// `(a+b)^2 = a*a + a*b + b*a + b*b`
/// `(a+b)^-2 = (a*a + a*b + b*a + b*b)^-1`
pub fn expand_power(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_power(expr, |base, exponent| {
        let SymExpr::Add(terms) = base else {
            return None;
        };
        let n = exponent.as_integer()?.to_i32()?;
        let power = n.unsigned_abs();
        if power < 2 || power > MAX_EXPANDED_POWER {
            return None;
        }

        let mut product = terms.clone();
        for _ in 1..power {
            product = multiply_sums(&product, terms);
        }

        let expanded = SymExpr::Add(product);
        if n < 0 {
            Some(expanded.recip())
        } else {
            Some(expanded)
        }
    })?;

    step_collector.push(Step::ExpandPower);
    Some(opt)
}

/// Applies all distribution rules.
///
/// The distributive property may or may not reduce the complexity of the expression, since it can
/// introduce additional operations. However, it may be necessary for future rules to apply.
pub fn all(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    distributive_property(expr, step_collector)
        .or_else(|| expand_power(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> SymExpr {
        SymExpr::symbol("x")
    }

    #[test]
    fn distribute_over_sum() {
        let expr = SymExpr::integer(2) * (x() + SymExpr::integer(1));
        assert_eq!(
            distributive_property(&expr, &mut ()),
            Some(SymExpr::Add(vec![
                SymExpr::integer(2) * x(),
                SymExpr::integer(2) * SymExpr::integer(1),
            ])),
        );
    }

    #[test]
    fn square_of_sum() {
        let expr = (x() + SymExpr::integer(1)).pow(SymExpr::integer(2));
        let Some(SymExpr::Add(terms)) = expand_power(&expr, &mut ()) else {
            panic!("expected a sum");
        };
        assert_eq!(terms.len(), 4);
    }

    #[test]
    fn negative_power_of_sum() {
        let expr = (x() + SymExpr::integer(1)).pow(SymExpr::integer(-2));
        let expanded = expand_power(&expr, &mut ()).unwrap();
        assert!(matches!(expanded, SymExpr::Exp(_, exponent) if exponent.as_integer().map_or(false, |n| *n == -1)));
    }

    #[test]
    fn reciprocal_of_sum_is_left_alone() {
        let expr = (x() + SymExpr::integer(1)).recip();
        assert_eq!(all(&expr, &mut ()), None);
    }
}
