//! Simplification rules for expressions involving addition, including combining like terms.

use crate::symbolic::{
    expr::{Number, SymExpr},
    simplify::{rules::do_add, step::Step},
    step_collector::StepCollector,
};

/// `(a+b)+c = a+b+c`
pub fn flatten(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_add(expr, |terms| {
        if !terms.iter().any(|term| matches!(term, SymExpr::Add(_))) {
            return None;
        }

        let new_terms = terms.iter()
            .flat_map(|term| match term {
                SymExpr::Add(inner) => inner.clone(),
                other => vec![other.clone()],
            })
            .collect::<Vec<_>>();
        Some(SymExpr::Add(new_terms).downgrade())
    })?;

    step_collector.push(Step::Flatten);
    Some(opt)
}

/// `0+a = a`
/// `a+0 = a`
pub fn add_zero(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_add(expr, |terms| {
        let new_terms = terms.iter()
            .filter(|term| !term.is_zero())
            .cloned()
            .collect::<Vec<_>>();

        if new_terms.len() == terms.len() {
            None
        } else {
            Some(SymExpr::Add(new_terms).downgrade())
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::AddZero);
    Some(opt)
}

/// Combines like terms. Numbers are like terms of each other.
///
/// `a+a = 2a`
/// `2a+3a = 5a`
/// `1+2 = 3`
/// etc.
pub fn combine_like_terms(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_add(expr, |terms| {
        // this is O(n^2) worst case, due to scanning every group for each term
        let mut groups: Vec<(Number, SymExpr)> = Vec::with_capacity(terms.len());
        for term in terms {
            let (coefficient, rest) = term.split_coefficient();
            match groups.iter_mut().find(|(_, other)| *other == rest) {
                Some((sum, _)) => *sum = sum.clone() + coefficient,
                None => groups.push((coefficient, rest)),
            }
        }

        if groups.len() == terms.len() {
            return None;
        }

        let new_terms = groups.into_iter()
            .filter(|(coefficient, _)| !coefficient.is_zero())
            .map(|(coefficient, rest)| {
                if rest.is_one() {
                    coefficient.into_expr()
                } else if coefficient.as_rational().map_or(false, |r| *r == 1) {
                    rest
                } else {
                    coefficient.into_expr() * rest
                }
            })
            .collect::<Vec<_>>();
        Some(SymExpr::Add(new_terms).downgrade())
    })?;

    step_collector.push(Step::CombineLikeTerms);
    Some(opt)
}

/// Applies all addition rules.
///
/// All addition rules will reduce the complexity of the expression.
pub fn all(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    flatten(expr, step_collector)
        .or_else(|| add_zero(expr, step_collector))
        .or_else(|| combine_like_terms(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> SymExpr {
        SymExpr::symbol("x")
    }

    #[test]
    fn zero_terms() {
        let expr = SymExpr::Add(vec![x(), SymExpr::integer(0)]);
        assert_eq!(add_zero(&expr, &mut ()), Some(x()));
    }

    #[test]
    fn like_terms_with_coefficients() {
        let expr = SymExpr::Add(vec![
            SymExpr::integer(2) * x(),
            SymExpr::symbol("y"),
            SymExpr::integer(3) * x(),
        ]);
        let mut steps = Vec::new();
        assert_eq!(
            combine_like_terms(&expr, &mut steps),
            Some(SymExpr::Add(vec![SymExpr::integer(5) * x(), SymExpr::symbol("y")])),
        );
        assert_eq!(steps, vec![Step::CombineLikeTerms]);
    }

    #[test]
    fn nothing_to_combine() {
        let expr = SymExpr::Add(vec![x(), SymExpr::integer(1)]);
        assert_eq!(all(&expr, &mut ()), None);
    }
}
