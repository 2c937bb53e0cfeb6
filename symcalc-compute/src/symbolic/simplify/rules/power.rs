//! Simplification rules for powers.

use crate::symbolic::{
    expr::{Constant, Func, Number, Primary, SymExpr},
    simplify::{rules::do_power, step::Step},
    step_collector::StepCollector,
};
use rug::ops::Pow;

/// The largest exponent a rational number is raised to exactly.
const MAX_EXACT_EXPONENT: i32 = 4096;

/// `a^0 = 1`
pub fn power_zero(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_power(expr, |_, exponent| {
        exponent.is_zero().then(|| SymExpr::integer(1))
    })?;

    step_collector.push(Step::PowerZero);
    Some(opt)
}

/// `a^1 = a`
pub fn power_one(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_power(expr, |base, exponent| {
        exponent.is_one().then(|| base.clone())
    })?;

    step_collector.push(Step::PowerOne);
    Some(opt)
}

/// `1^a = 1`
pub fn power_of_one(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_power(expr, |base, _| {
        base.is_one().then(|| SymExpr::integer(1))
    })?;

    step_collector.push(Step::PowerOfOne);
    Some(opt)
}

/// `0^a = 0`, for positive `a`
pub fn power_of_zero(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_power(expr, |base, exponent| {
        let positive = exponent.as_number().map_or(false, |n| !n.is_negative() && !n.is_zero());
        (base.is_zero() && positive).then(|| SymExpr::integer(0))
    })?;

    step_collector.push(Step::PowerOfZero);
    Some(opt)
}

/// `(a^b)^c = a^(b*c)`, for integer `c`
pub fn power_of_power(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_power(expr, |base, exponent| {
        match base {
            SymExpr::Exp(inner_base, inner_exponent) if exponent.as_integer().is_some() => {
                Some((**inner_base).clone().pow((**inner_exponent).clone() * exponent.clone()))
            },
            _ => None,
        }
    })?;

    step_collector.push(Step::PowerOfPower);
    Some(opt)
}

/// Raises numbers to numeric powers.
///
/// `2^3 = 8`
/// `(2/3)^-2 = 9/4`
/// `2^0.5 = 1.414...`
pub fn evaluate_power(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_power(expr, |base, exponent| {
        let base = base.as_number()?;
        let exponent = exponent.as_number()?;

        match (&base, &exponent) {
            (Number::Rational(base), Number::Rational(exponent)) => {
                if *exponent.denom() != 1 {
                    return None;
                }
                let n = exponent.numer().to_i32()?;
                if n.abs() > MAX_EXACT_EXPONENT || (*base == 0 && n < 0) {
                    return None;
                }
                Some(SymExpr::Primary(Primary::Rational(base.clone().pow(n))))
            },
            _ => {
                let integer_exponent = match &exponent {
                    Number::Rational(r) => *r.denom() == 1,
                    Number::Float(f) => f.is_integer(),
                };
                if base.is_negative() && !integer_exponent {
                    return None;
                }

                let value = base.to_float().pow(exponent.to_float());
                value.is_finite().then(|| SymExpr::Primary(Primary::Float(value)))
            },
        }
    })?;

    step_collector.push(Step::EvaluatePower);
    Some(opt)
}

/// `E^a = exp(a)`
pub fn power_of_e(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_power(expr, |base, exponent| {
        (*base == SymExpr::constant(Constant::E))
            .then(|| SymExpr::call(Func::Exp, exponent.clone()))
    })?;

    step_collector.push(Step::PowerOfE);
    Some(opt)
}

/// `(a*b)^c = a^c * b^c`, for integer `c`
pub fn distribute_power(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_power(expr, |base, exponent| {
        exponent.as_integer()?;
        if let SymExpr::Mul(factors) = base {
            let new_factors = factors.iter()
                .map(|factor| factor.clone().pow(exponent.clone()))
                .collect::<Vec<_>>();
            return Some(SymExpr::Mul(new_factors));
        }

        None
    })?;

    step_collector.push(Step::DistributePower);
    Some(opt)
}

/// Applies all power rules.
///
/// All power rules will reduce the complexity of the expression.
pub fn all(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    power_zero(expr, step_collector)
        .or_else(|| power_one(expr, step_collector))
        .or_else(|| power_of_one(expr, step_collector))
        .or_else(|| power_of_zero(expr, step_collector))
        .or_else(|| power_of_power(expr, step_collector))
        .or_else(|| evaluate_power(expr, step_collector))
        .or_else(|| power_of_e(expr, step_collector))
        .or_else(|| distribute_power(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_relative_eq;
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> SymExpr {
        SymExpr::symbol("x")
    }

    #[test]
    fn trivial_exponents() {
        assert_eq!(power_zero(&x().pow(SymExpr::integer(0)), &mut ()), Some(SymExpr::integer(1)));
        assert_eq!(power_one(&x().pow(SymExpr::integer(1)), &mut ()), Some(x()));
        assert_eq!(power_of_one(&SymExpr::integer(1).pow(x()), &mut ()), Some(SymExpr::integer(1)));
    }

    #[test]
    fn exact_powers() {
        let expr = SymExpr::rational(2, 3).pow(SymExpr::integer(-2));
        assert_eq!(evaluate_power(&expr, &mut ()), Some(SymExpr::rational(9, 4)));
    }

    #[test]
    fn zero_to_a_negative_power_is_left_alone() {
        let expr = SymExpr::integer(0).pow(SymExpr::integer(-1));
        assert_eq!(all(&expr, &mut ()), None);
    }

    #[test]
    fn float_powers() {
        let expr = SymExpr::integer(2).pow(SymExpr::float(0.5));
        let value = evaluate_power(&expr, &mut ()).unwrap();
        let SymExpr::Primary(Primary::Float(value)) = value else {
            panic!("expected a float");
        };
        assert_float_relative_eq!(value.to_f64(), 2.0_f64.sqrt(), 1e-12);
    }

    #[test]
    fn nested_powers() {
        let expr = x().pow(SymExpr::rational(1, 2)).pow(SymExpr::integer(2));
        assert_eq!(
            power_of_power(&expr, &mut ()),
            Some(x().pow(SymExpr::rational(1, 2) * SymExpr::integer(2))),
        );

        // (x^2)^(1/2) is |x|, not x
        let expr = x().pow(SymExpr::integer(2)).pow(SymExpr::rational(1, 2));
        assert_eq!(power_of_power(&expr, &mut ()), None);
    }

    #[test]
    fn powers_of_e() {
        let expr = SymExpr::constant(Constant::E).pow(x());
        assert_eq!(power_of_e(&expr, &mut ()), Some(SymExpr::call(Func::Exp, x())));
    }
}
