//! Simplification rules for trigonometric functions.

mod table;

use crate::primitive::rational;
use crate::symbolic::{
    expr::{Constant, Func, Primary, SymExpr},
    simplify::{rules::do_call, step::Step},
    step_collector::StepCollector,
};
use rug::Rational;
use std::collections::HashMap;
use table::{reduce, TrigOut};

/// If the expression is an exact rational multiple of `pi`, returns the multiple.
fn pi_multiple(expr: &SymExpr) -> Option<Rational> {
    let pi = SymExpr::constant(Constant::Pi);
    if expr.is_zero() {
        return Some(rational(0));
    }
    if *expr == pi {
        return Some(rational(1));
    }

    match expr {
        SymExpr::Mul(factors) if factors.len() == 2 => {
            let (coefficient, rest) = expr.split_coefficient();
            if rest == pi {
                coefficient.as_rational().cloned()
            } else {
                None
            }
        },
        _ => None,
    }
}

/// Looks up the value of a trigonometric function in the given table, where the argument is
/// offset by the given fraction of a turn.
fn simplify_trig(arg: &SymExpr, offset: Rational, table: &HashMap<Rational, TrigOut>) -> Option<SymExpr> {
    // example: compute sin(pi/6)
    // fraction of a full turn: (pi/6) / (2pi) = 1/12
    let turns = pi_multiple(arg)? / rational(2) + offset;
    table.get(&reduce(turns)).map(|out| out.to_expr())
}

/// `sin(x)`
pub fn sin(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_call(expr, Func::Sin, |args| {
        simplify_trig(args.first()?, rational(0), &table::SIN_TABLE)
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::Sin);
    Some(opt)
}

/// `cos(x) = sin(x + pi/2)`
pub fn cos(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_call(expr, Func::Cos, |args| {
        simplify_trig(args.first()?, rational((1, 4)), &table::SIN_TABLE)
    })?;

    step_collector.push(Step::Cos);
    Some(opt)
}

/// `tan(x)`
pub fn tan(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_call(expr, Func::Tan, |args| {
        simplify_trig(args.first()?, rational(0), &table::TAN_TABLE)
    })?;

    step_collector.push(Step::Tan);
    Some(opt)
}

/// `cot(x)`
pub fn cot(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_call(expr, Func::Cot, |args| {
        simplify_trig(args.first()?, rational(0), &table::COT_TABLE)
    })?;

    step_collector.push(Step::Cot);
    Some(opt)
}

/// Moves the sign of the argument out of the function.
///
/// `sin(-a) = -sin(a)`
/// `cos(-a) = cos(a)`
/// `tan(-a) = -tan(a)`
/// `cot(-a) = -cot(a)`
pub fn parity(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let SymExpr::Primary(Primary::Call(func, args)) = expr else {
        return None;
    };
    let odd = match func {
        Func::Sin | Func::Tan | Func::Cot => true,
        Func::Cos => false,
        Func::Log | Func::Exp => return None,
    };
    let [arg] = args.as_slice() else {
        return None;
    };
    if !arg.split_coefficient().0.is_negative() {
        return None;
    }

    let call = SymExpr::call(*func, -arg.clone());
    step_collector.push(Step::TrigParity);
    if odd {
        Some(-call)
    } else {
        Some(call)
    }
}

/// Applies all trigonometric rules.
///
/// All trigonometric rules will reduce the complexity of the expression.
pub fn all(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    sin(expr, step_collector)
        .or_else(|| cos(expr, step_collector))
        .or_else(|| tan(expr, step_collector))
        .or_else(|| cot(expr, step_collector))
        .or_else(|| parity(expr, step_collector))
}
