//! Simplification rules for `log` and `exp`.

use crate::symbolic::{
    expr::{Constant, Func, SymExpr},
    simplify::{rules::do_call, step::Step},
    step_collector::StepCollector,
};

/// `log(1) = 0`
/// `log(E) = 1`
pub fn log_constant(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_call(expr, Func::Log, |args| match args {
        [arg] if arg.is_one() => Some(SymExpr::integer(0)),
        [arg] if *arg == SymExpr::constant(Constant::E) => Some(SymExpr::integer(1)),
        _ => None,
    })?;

    step_collector.push(Step::LogConstant);
    Some(opt)
}

/// `exp(0) = 1`
/// `exp(1) = E`
pub fn exp_constant(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_call(expr, Func::Exp, |args| match args {
        [arg] if arg.is_zero() => Some(SymExpr::integer(1)),
        [arg] if arg.is_one() => Some(SymExpr::constant(Constant::E)),
        _ => None,
    })?;

    step_collector.push(Step::ExpConstant);
    Some(opt)
}

/// `log(exp(a)) = a`
/// `exp(log(a)) = a`
pub fn inverse(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    fn unwrap_call(args: &[SymExpr], inner: Func) -> Option<SymExpr> {
        match args {
            [arg] => match arg.as_call()? {
                (func, [inner_arg]) if func == inner => Some(inner_arg.clone()),
                _ => None,
            },
            _ => None,
        }
    }

    let opt = do_call(expr, Func::Log, |args| unwrap_call(args, Func::Exp))
        .or_else(|| do_call(expr, Func::Exp, |args| unwrap_call(args, Func::Log)))?;

    step_collector.push(Step::LogExpInverse);
    Some(opt)
}

/// Applies all logarithm rules.
pub fn all(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    log_constant(expr, step_collector)
        .or_else(|| exp_constant(expr, step_collector))
        .or_else(|| inverse(expr, step_collector))
}
