//! Identities applied by [`simplify`](crate::symbolic::simplify()), but not during evaluation.

use crate::symbolic::{
    expr::{Func, SymExpr},
    simplify::{rules::{do_add, do_call, do_multiply}, step::Step},
    step_collector::StepCollector,
};

/// If the expression is `f(a)^2`, returns `a`.
fn squared_call(expr: &SymExpr, target: Func) -> Option<&SymExpr> {
    let SymExpr::Exp(base, exponent) = expr else {
        return None;
    };
    if exponent.as_integer().map_or(true, |n| *n != 2) {
        return None;
    }
    match base.as_call()? {
        (func, [arg]) if func == target => Some(arg),
        _ => None,
    }
}

/// `sin(a)^2 + cos(a)^2 = 1`
/// `c*sin(a)^2 + c*cos(a)^2 = c`
pub fn pythagorean(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_add(expr, |terms| {
        let split = terms.iter()
            .map(SymExpr::split_coefficient)
            .collect::<Vec<_>>();

        for (i, (sin_coefficient, sin_rest)) in split.iter().enumerate() {
            let Some(arg) = squared_call(sin_rest, Func::Sin) else {
                continue;
            };

            let cos_idx = split.iter().position(|(cos_coefficient, cos_rest)| {
                cos_coefficient == sin_coefficient
                    && squared_call(cos_rest, Func::Cos).map_or(false, |other| other == arg)
            });
            if let Some(j) = cos_idx {
                let mut new_terms = terms.iter()
                    .enumerate()
                    .filter(|(k, _)| *k != i && *k != j)
                    .map(|(_, term)| term.clone())
                    .collect::<Vec<_>>();
                new_terms.push(sin_coefficient.clone().into_expr());
                return Some(SymExpr::Add(new_terms).downgrade());
            }
        }

        None
    })?;

    step_collector.push(Step::PythagoreanIdentity);
    Some(opt)
}

/// `exp(a)*exp(b) = exp(a+b)`
pub fn combine_exp(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_multiply(expr, |factors| {
        let (exps, mut rest): (Vec<_>, Vec<_>) = factors.iter()
            .cloned()
            .partition(|factor| matches!(factor.as_call(), Some((Func::Exp, [_]))));
        if exps.len() < 2 {
            return None;
        }

        let sum = exps.into_iter()
            .filter_map(|factor| match factor.as_call() {
                Some((_, [arg])) => Some(arg.clone()),
                _ => None,
            })
            .collect::<Vec<_>>();
        rest.push(SymExpr::call(Func::Exp, SymExpr::Add(sum)));
        Some(SymExpr::Mul(rest).downgrade())
    })?;

    step_collector.push(Step::CombineExp);
    Some(opt)
}

/// `log(a^n) = n*log(a)`, for a positive number `a`
pub fn log_power(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_call(expr, Func::Log, |args| {
        let [SymExpr::Exp(base, exponent)] = args else {
            return None;
        };
        let positive = base.as_number().map_or(false, |n| !n.is_negative() && !n.is_zero());
        if !positive {
            return None;
        }

        Some((**exponent).clone() * SymExpr::call(Func::Log, (**base).clone()))
    })?;

    step_collector.push(Step::LogPower);
    Some(opt)
}

/// Applies all identities.
pub fn all(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    pythagorean(expr, step_collector)
        .or_else(|| combine_exp(expr, step_collector))
        .or_else(|| log_power(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> SymExpr {
        SymExpr::symbol("x")
    }

    fn squared(func: Func, arg: SymExpr) -> SymExpr {
        SymExpr::call(func, arg).pow(SymExpr::integer(2))
    }

    #[test]
    fn pythagorean_with_coefficients() {
        let expr = SymExpr::Add(vec![
            SymExpr::integer(3) * squared(Func::Sin, x()),
            x(),
            SymExpr::integer(3) * squared(Func::Cos, x()),
        ]);
        assert_eq!(
            pythagorean(&expr, &mut ()),
            Some(SymExpr::Add(vec![x(), SymExpr::integer(3)])),
        );
    }

    #[test]
    fn pythagorean_needs_matching_arguments() {
        let expr = squared(Func::Sin, x()) + squared(Func::Cos, SymExpr::symbol("y"));
        assert_eq!(pythagorean(&expr, &mut ()), None);
    }

    #[test]
    fn exponentials() {
        let expr = SymExpr::call(Func::Exp, x()) * SymExpr::call(Func::Exp, SymExpr::integer(2));
        assert_eq!(
            combine_exp(&expr, &mut ()),
            Some(SymExpr::call(Func::Exp, SymExpr::Add(vec![x(), SymExpr::integer(2)]))),
        );
    }

    #[test]
    fn logarithm_of_power() {
        let expr = SymExpr::call(Func::Log, SymExpr::integer(2).sqrt());
        assert_eq!(
            log_power(&expr, &mut ()),
            Some(SymExpr::rational(1, 2) * SymExpr::call(Func::Log, SymExpr::integer(2))),
        );
    }
}
