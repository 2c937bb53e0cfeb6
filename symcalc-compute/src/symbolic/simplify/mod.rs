//! Rule-based simplification of expressions.
//!
//! A rule is a function that accepts an expression and returns `Some(expr)` if it applies. The
//! driver in this module applies a set of rules bottom-up: the children of an expression are
//! brought to a fixed point first, then the rules are tried on the expression itself, and the
//! process repeats on whatever the rule produced, until no rule applies anymore.
//!
//! There are three sets of rules, see [`RuleSet`]:
//!
//! - [`evaluate`] runs on every expression the engine builds.
//! - [`simplify`] additionally applies identities, and chooses among several rewritten forms of
//!   the expression the one with the lowest [complexity](default_complexity).
//! - The expansion rules are used by [`expand`](crate::symbolic::expand()).

pub mod rules;
pub mod step;

use log::trace;
use crate::symbolic::{
    expand::expand,
    expr::{Primary, SymExpr},
    factor::factor,
    step_collector::StepCollector,
};
use step::Step;

/// Upper bound on the number of rules applied to a single node, guarding against rules that
/// undo each other.
const MAX_PASSES: usize = 256;

/// A set of rules to bring an expression to a fixed point with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleSet {
    /// Rules that never increase complexity.
    Evaluate,

    /// [`RuleSet::Evaluate`], plus identities.
    Simplify,

    /// Distribution over sums and expansion of powers of sums, plus [`RuleSet::Evaluate`].
    Expand,
}

impl RuleSet {
    fn apply(self, expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
        match self {
            RuleSet::Evaluate => rules::evaluate(expr, step_collector),
            RuleSet::Simplify => rules::simplify(expr, step_collector),
            RuleSet::Expand => rules::expand(expr, step_collector),
        }
    }
}

/// Brings every child of the expression to a fixed point.
fn simplify_children(expr: SymExpr, rules: RuleSet, step_collector: &mut dyn StepCollector<Step>) -> SymExpr {
    match expr {
        SymExpr::Primary(Primary::Call(func, args)) => SymExpr::Primary(Primary::Call(
            func,
            args.iter()
                .map(|arg| apply_rules(arg, rules, step_collector))
                .collect(),
        )),
        SymExpr::Primary(_) => expr,
        SymExpr::Add(terms) => SymExpr::Add(
            terms.iter()
                .map(|term| apply_rules(term, rules, step_collector))
                .collect(),
        ),
        SymExpr::Mul(factors) => SymExpr::Mul(
            factors.iter()
                .map(|factor| apply_rules(factor, rules, step_collector))
                .collect(),
        ),
        SymExpr::Exp(base, exponent) => SymExpr::Exp(
            Box::new(apply_rules(&base, rules, step_collector)),
            Box::new(apply_rules(&exponent, rules, step_collector)),
        ),
    }
}

/// Applies the rules to the expression and all of its children until none of them applies.
pub fn apply_rules(expr: &SymExpr, rules: RuleSet, step_collector: &mut dyn StepCollector<Step>) -> SymExpr {
    let mut expr = simplify_children(expr.clone(), rules, step_collector);

    for _ in 0..MAX_PASSES {
        let mut steps = Vec::new();
        match rules.apply(&expr, &mut steps) {
            Some(new_expr) => {
                trace!("{:?}: {:?} -> {:?}", steps, expr, new_expr);
                for step in steps {
                    step_collector.push(step);
                }
                expr = simplify_children(new_expr, rules, step_collector);
            },
            None => break,
        }
    }

    expr
}

/// Brings the expression to the form the engine stores: numbers are folded, like terms and
/// factors are combined, and known values of the fixed functions are substituted.
pub fn evaluate(expr: &SymExpr) -> SymExpr {
    apply_rules(expr, RuleSet::Evaluate, &mut ())
}

/// Returns the complexity of the expression. Lower is simpler.
pub fn default_complexity(expr: &SymExpr) -> usize {
    match expr {
        SymExpr::Primary(Primary::Rational(r)) => {
            if *r.denom() == 1 {
                1
            } else {
                3
            }
        },
        SymExpr::Primary(Primary::Float(_) | Primary::Constant(_)) => 1,
        SymExpr::Primary(Primary::Symbol(name)) => name.len(),
        SymExpr::Primary(Primary::Call(func, args)) => {
            func.name().len() + args.iter().map(default_complexity).sum::<usize>()
        },
        SymExpr::Add(terms) => {
            terms.iter().map(default_complexity).sum::<usize>() + 3 * terms.len().saturating_sub(1)
        },
        SymExpr::Mul(factors) => {
            factors.iter().map(default_complexity).sum::<usize>() + 2 * factors.len().saturating_sub(1)
        },
        SymExpr::Exp(base, exponent) => default_complexity(base) + default_complexity(exponent) + 1,
    }
}

/// Applies [`factor`] to every sum in the expression.
fn factor_sums(expr: &SymExpr) -> SymExpr {
    match expr {
        SymExpr::Primary(Primary::Call(func, args)) => {
            SymExpr::Primary(Primary::Call(*func, args.iter().map(factor_sums).collect()))
        },
        SymExpr::Primary(_) => expr.clone(),
        SymExpr::Add(_) => factor(expr),
        SymExpr::Mul(factors) => SymExpr::Mul(factors.iter().map(factor_sums).collect()),
        SymExpr::Exp(base, exponent) => factor_sums(base).pow(factor_sums(exponent)),
    }
}

fn inner_simplify_with(
    expr: &SymExpr,
    complexity: fn(&SymExpr) -> usize,
    step_collector: &mut dyn StepCollector<Step>,
) -> SymExpr {
    let direct = apply_rules(expr, RuleSet::Simplify, step_collector);

    // the alternatives are only used if they win, so their steps are not collected
    let candidates = [
        apply_rules(&expand(expr), RuleSet::Simplify, &mut ()),
        apply_rules(&factor_sums(expr), RuleSet::Simplify, &mut ()),
    ];

    let mut best = direct;
    let mut best_complexity = complexity(&best);
    for candidate in candidates {
        let candidate_complexity = complexity(&candidate);
        if candidate_complexity < best_complexity {
            trace!("simplify: picked {:?} ({} < {})", candidate, candidate_complexity, best_complexity);
            best = candidate;
            best_complexity = candidate_complexity;
        }
    }

    best
}

/// Simplifies the given expression.
///
/// See the [module-level documentation](self) for more information.
pub fn simplify(expr: &SymExpr) -> SymExpr {
    inner_simplify_with(expr, default_complexity, &mut ())
}

/// Simplifies the given expression, returning the steps taken to reach the result.
pub fn simplify_with_steps(expr: &SymExpr) -> (SymExpr, Vec<Step>) {
    let mut steps = Vec::new();
    let simplified = inner_simplify_with(expr, default_complexity, &mut steps);
    (simplified, steps)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::symbolic::expr::{Constant, Func};
    use super::*;

    fn x() -> SymExpr {
        SymExpr::symbol("x")
    }

    #[test]
    fn like_terms() {
        assert_eq!(evaluate(&(x() + x())), SymExpr::integer(2) * x());
        assert_eq!(evaluate(&(x() + x() + x() - x())), SymExpr::integer(2) * x());
        assert_eq!(evaluate(&(x() - x())), SymExpr::integer(0));
    }

    #[test]
    fn like_factors() {
        assert_eq!(evaluate(&(x() * x())), x().pow(SymExpr::integer(2)));
        assert_eq!(evaluate(&(x() / x())), SymExpr::integer(1));
    }

    #[test]
    fn numbers() {
        let expr = SymExpr::integer(2) + SymExpr::integer(3) * SymExpr::integer(4);
        assert_eq!(evaluate(&expr), SymExpr::integer(14));

        let expr = SymExpr::integer(1) / SymExpr::integer(3) + SymExpr::rational(1, 6);
        assert_eq!(evaluate(&expr), SymExpr::rational(1, 2));

        let expr = SymExpr::integer(2).pow(SymExpr::integer(10));
        assert_eq!(evaluate(&expr), SymExpr::integer(1024));
    }

    #[test]
    fn floats_are_contagious() {
        let expr = SymExpr::float(0.5) + SymExpr::integer(1);
        assert_eq!(evaluate(&expr), SymExpr::float(1.5));
    }

    #[test]
    fn roots() {
        let expr = SymExpr::integer(12).sqrt();
        assert_eq!(
            evaluate(&expr),
            SymExpr::integer(2) * SymExpr::integer(3).sqrt(),
        );
        assert_eq!(evaluate(&SymExpr::integer(16).sqrt()), SymExpr::integer(4));
        assert_eq!(
            evaluate(&SymExpr::integer(8).pow(SymExpr::rational(2, 3))),
            SymExpr::integer(4),
        );
    }

    #[test]
    fn trigonometry() {
        let pi = SymExpr::constant(Constant::Pi);
        let expr = SymExpr::call(Func::Sin, pi.clone() / SymExpr::integer(6))
            + SymExpr::call(Func::Cos, pi.clone() / SymExpr::integer(3));
        assert_eq!(evaluate(&expr), SymExpr::integer(1));

        let expr = SymExpr::call(Func::Sin, pi);
        assert_eq!(evaluate(&expr), SymExpr::integer(0));
    }

    #[test]
    fn pythagorean_identity() {
        let expr = SymExpr::call(Func::Sin, x()).pow(SymExpr::integer(2))
            + SymExpr::call(Func::Cos, x()).pow(SymExpr::integer(2));
        assert_eq!(simplify(&expr), SymExpr::integer(1));

        let (_, steps) = simplify_with_steps(&expr);
        assert!(steps.contains(&Step::PythagoreanIdentity));
    }

    #[test]
    fn cancel_common_factor() {
        // (x^2 - 1) / (x - 1) = x + 1
        let numerator = x().pow(SymExpr::integer(2)) - SymExpr::integer(1);
        let denominator = x() - SymExpr::integer(1);
        let expr = evaluate(&(numerator / denominator));
        assert_eq!(simplify(&expr), x() + SymExpr::integer(1));
    }

    #[test]
    fn complexity() {
        assert!(default_complexity(&(SymExpr::integer(2) * x())) < default_complexity(&(x() + x())));
    }
}
