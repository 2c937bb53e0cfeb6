//! Symbolic derivatives of the fixed functions.

use crate::symbolic::expr::{Func, SymExpr};
use super::{derivative, MultBuilder, SymbolicDerivativeError};

/// Computes the derivative of a call of a fixed function and applies the chain rule.
pub(super) fn function_derivative(func: Func, args: &[SymExpr], with: &str) -> Result<SymExpr, SymbolicDerivativeError> {
    let [arg] = args else {
        return Err(SymbolicDerivativeError::Unsupported { func, args: args.len() });
    };

    let mut mult_group = MultBuilder::default();
    mult_group.mult(derivative(arg, with)?);

    match func {
        // sin(u)' = cos(u) * u'
        Func::Sin => mult_group.mult(SymExpr::call(Func::Cos, arg.clone())),
        // cos(u)' = -sin(u) * u'
        Func::Cos => {
            mult_group.mult(SymExpr::integer(-1));
            mult_group.mult(SymExpr::call(Func::Sin, arg.clone()));
        },
        // tan(u)' = (1 + tan(u)^2) * u'
        Func::Tan => mult_group.mult(SymExpr::Add(vec![
            SymExpr::integer(1),
            SymExpr::call(Func::Tan, arg.clone()).pow(SymExpr::integer(2)),
        ])),
        // cot(u)' = (-1 - cot(u)^2) * u'
        Func::Cot => mult_group.mult(SymExpr::Add(vec![
            SymExpr::integer(-1),
            -SymExpr::call(Func::Cot, arg.clone()).pow(SymExpr::integer(2)),
        ])),
        // log(u)' = u' / u
        Func::Log => mult_group.mult(arg.clone().recip()),
        // exp(u)' = exp(u) * u'
        Func::Exp => mult_group.mult(SymExpr::call(Func::Exp, arg.clone())),
    }

    Ok(mult_group.into())
}
