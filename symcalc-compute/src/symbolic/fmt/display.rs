use crate::symbolic::expr::{Primary, SymExpr};
use std::fmt;
use super::{fmt_float, is_negative_term, is_one_half, order, reciprocal, Product};

impl fmt::Display for Primary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rational(r) => write!(f, "{}", r),
            Self::Float(value) => f.write_str(&fmt_float(value)),
            Self::Constant(constant) => write!(f, "{}", constant),
            Self::Symbol(name) => f.write_str(name),
            Self::Call(func, args) => {
                write!(f, "{}(", func)?;
                let mut iter = args.iter();
                if let Some(arg) = iter.next() {
                    write!(f, "{}", arg)?;
                    for arg in iter {
                        write!(f, ", {}", arg)?;
                    }
                }
                write!(f, ")")
            },
        }
    }
}

/// Returns true if the expression must be wrapped in parentheses when it is the base or the
/// exponent of a power.
fn needs_parens_in_power(expr: &SymExpr) -> bool {
    match expr {
        SymExpr::Primary(Primary::Rational(r)) => *r < 0 || *r.denom() != 1,
        SymExpr::Primary(Primary::Float(value)) => *value < 0,
        SymExpr::Primary(_) => false,
        SymExpr::Add(_) | SymExpr::Mul(_) | SymExpr::Exp(..) => true,
    }
}

fn fmt_in_power(f: &mut fmt::Formatter<'_>, expr: &SymExpr) -> fmt::Result {
    if needs_parens_in_power(expr) {
        write!(f, "({})", expr)
    } else {
        write!(f, "{}", expr)
    }
}

/// Formats a factor of a product.
fn factor_string(expr: &SymExpr) -> String {
    match expr {
        SymExpr::Add(_) | SymExpr::Mul(_) => format!("({})", expr),
        _ => expr.to_string(),
    }
}

fn fmt_sum(f: &mut fmt::Formatter<'_>, terms: &[SymExpr]) -> fmt::Result {
    let mut sorted = terms.iter().collect::<Vec<_>>();
    order::sort_terms(&mut sorted);

    let mut iter = sorted.into_iter();
    if let Some(first) = iter.next() {
        write!(f, "{}", first)?;
    }
    for term in iter {
        if is_negative_term(term) {
            write!(f, " - {}", -term.clone())?;
        } else {
            write!(f, " + {}", term)?;
        }
    }
    Ok(())
}

fn fmt_product(f: &mut fmt::Formatter<'_>, product: &Product<'_>) -> fmt::Result {
    if product.negative {
        f.write_str("-")?;
    }

    let (numer, denom) = product.coefficient_parts();
    let upper = numer.into_iter()
        .chain(product.numerator.iter().map(|factor| factor_string(factor)))
        .collect::<Vec<_>>();
    let lower = denom.into_iter()
        .chain(product.denominator.iter().map(factor_string))
        .collect::<Vec<_>>();

    f.write_str(&upper.join("*"))?;
    match lower.as_slice() {
        [] => Ok(()),
        [single] => write!(f, "/{}", single),
        parts => write!(f, "/({})", parts.join("*")),
    }
}

/// Formats the expression as plain text, in the same syntax expressions are written in.
///
/// - `x**2 + 2*x + 1`
/// - `3*x/2`
/// - `-(x - 1)*(x + 1)`
/// - `sqrt(3)/2`
impl fmt::Display for SymExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary(primary) => write!(f, "{}", primary),
            Self::Add(terms) => fmt_sum(f, terms),
            Self::Mul(factors) => fmt_product(f, &Product::new(factors)),
            Self::Exp(base, exponent) => {
                if reciprocal(self).is_some() {
                    return fmt_product(f, &Product::new(std::iter::once(self)));
                }

                if is_one_half(exponent) {
                    return write!(f, "sqrt({})", base);
                }

                fmt_in_power(f, base)?;
                f.write_str("**")?;
                fmt_in_power(f, exponent)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::symbolic::expr::{Constant, Func};
    use super::*;

    fn x() -> SymExpr {
        SymExpr::symbol("x")
    }

    fn y() -> SymExpr {
        SymExpr::symbol("y")
    }

    #[test]
    fn polynomial() {
        let expr = SymExpr::Add(vec![
            SymExpr::integer(1),
            SymExpr::integer(2) * x(),
            x().pow(SymExpr::integer(2)),
        ]);
        assert_eq!(expr.to_string(), "x**2 + 2*x + 1");
    }

    #[test]
    fn negative_terms() {
        let expr = SymExpr::Add(vec![SymExpr::integer(-1), x().pow(SymExpr::integer(2))]);
        assert_eq!(expr.to_string(), "x**2 - 1");

        let expr = SymExpr::Add(vec![SymExpr::integer(-3) * x(), SymExpr::rational(-1, 2)]);
        assert_eq!(expr.to_string(), "-3*x - 1/2");
    }

    #[test]
    fn fractions() {
        assert_eq!((x() / SymExpr::integer(2)).to_string(), "x/2");
        assert_eq!((SymExpr::rational(3, 2) * x()).to_string(), "3*x/2");
        assert_eq!((x() / (SymExpr::integer(2) * y())).to_string(), "x/(2*y)");
        assert_eq!(x().recip().to_string(), "1/x");
        assert_eq!(x().pow(SymExpr::integer(-2)).to_string(), "1/x**2");
        assert_eq!((SymExpr::rational(1, 2) * SymExpr::integer(3).sqrt()).to_string(), "sqrt(3)/2");
        assert_eq!((-x()).to_string(), "-x");
    }

    #[test]
    fn powers() {
        assert_eq!(x().pow(SymExpr::rational(1, 3)).to_string(), "x**(1/3)");
        assert_eq!(SymExpr::integer(-2).pow(x()).to_string(), "(-2)**x");
        assert_eq!((x() + SymExpr::integer(1)).pow(SymExpr::integer(2)).to_string(), "(x + 1)**2");
        assert_eq!(SymExpr::call(Func::Sin, x()).pow(SymExpr::integer(2)).to_string(), "sin(x)**2");
    }

    #[test]
    fn factored_product() {
        let minus = SymExpr::Add(vec![x(), SymExpr::integer(-1)]);
        let plus = SymExpr::Add(vec![x(), SymExpr::integer(1)]);
        assert_eq!((plus.clone() * minus.clone()).to_string(), "(x - 1)*(x + 1)");
        assert_eq!(
            SymExpr::Mul(vec![SymExpr::integer(-1), plus, minus]).to_string(),
            "-(x - 1)*(x + 1)",
        );
    }

    #[test]
    fn leaves() {
        assert_eq!(SymExpr::constant(Constant::Pi).to_string(), "pi");
        assert_eq!(SymExpr::constant(Constant::E).to_string(), "E");
        assert_eq!(SymExpr::float(0.5).to_string(), "0.5");
        assert_eq!((SymExpr::float(2.5) * x()).to_string(), "2.5*x");
        assert_eq!(SymExpr::call(Func::Log, x() + SymExpr::integer(2)).to_string(), "log(x + 2)");
    }
}
