//! Numeric evaluation of function calls with approximate arguments.

use crate::symbolic::{
    approx::approximate,
    expr::{Primary, SymExpr},
    simplify::step::Step,
    step_collector::StepCollector,
};

/// Evaluates a call numerically if its arguments contain no free symbols and at least one float.
///
/// `sin(0.5) = 0.479...`
/// `log(2.0*pi) = 1.837...`
pub fn approximate_call(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let SymExpr::Primary(Primary::Call(_, args)) = expr else {
        return None;
    };
    if !args.iter().all(SymExpr::is_constant) || !args.iter().any(SymExpr::contains_float) {
        return None;
    }

    let value = approximate(expr)?;
    step_collector.push(Step::Approximate);
    Some(SymExpr::Primary(Primary::Float(value)))
}

/// Applies all approximation rules.
pub fn all(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    approximate_call(expr, step_collector)
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_relative_eq;
    use crate::symbolic::expr::Func;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn float_arguments() {
        let expr = SymExpr::call(Func::Sin, SymExpr::float(0.5));
        let Some(SymExpr::Primary(Primary::Float(value))) = approximate_call(&expr, &mut ()) else {
            panic!("expected a float");
        };
        assert_float_relative_eq!(value.to_f64(), 0.5_f64.sin());
    }

    #[test]
    fn exact_arguments_are_kept() {
        let expr = SymExpr::call(Func::Sin, SymExpr::integer(2));
        assert_eq!(approximate_call(&expr, &mut ()), None);

        let expr = SymExpr::call(Func::Sin, SymExpr::float(0.5) * SymExpr::symbol("x"));
        assert_eq!(approximate_call(&expr, &mut ()), None);
    }
}
