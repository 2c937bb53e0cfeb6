use crate::symbolic::expr::{Constant, Func, Primary, SymExpr};
use std::fmt::{Display, Formatter, Result};
use super::{fmt_float, is_negative_term, is_one_half, order, reciprocal, Product};

/// A trait for types that can be formatted as LaTeX.
pub trait Latex {
    /// Format the value as LaTeX.
    fn fmt_latex(&self, f: &mut Formatter) -> Result;

    /// Wraps the value in a [`LatexFormatter`], which implements [`Display`].
    fn as_display(&self) -> LatexFormatter<'_, Self> {
        LatexFormatter(self)
    }
}

/// A wrapper type that implements [`Display`] for any type that implements [`Latex`].
pub struct LatexFormatter<'a, T: ?Sized>(&'a T);

impl<T: ?Sized> Display for LatexFormatter<'_, T>
where
    T: Latex,
{
    fn fmt(&self, f: &mut Formatter) -> Result {
        self.0.fmt_latex(f)
    }
}

fn latex_string(expr: &SymExpr) -> String {
    expr.as_display().to_string()
}

/// Formats the argument list of a named function, such as `\sin{\left(x \right)}`.
fn fmt_call_args(f: &mut Formatter, args: &[SymExpr]) -> Result {
    write!(f, "{{\\left(")?;
    let mut iter = args.iter();
    if let Some(arg) = iter.next() {
        arg.fmt_latex(f)?;
        for arg in iter {
            write!(f, ", ")?;
            arg.fmt_latex(f)?;
        }
    }
    write!(f, " \\right)}}")
}

impl Latex for Primary {
    fn fmt_latex(&self, f: &mut Formatter) -> Result {
        match self {
            Self::Rational(r) if *r.denom() == 1 => write!(f, "{}", r.numer()),
            Self::Rational(r) => {
                if *r < 0 {
                    write!(f, "-")?;
                }
                write!(f, "\\frac{{{}}}{{{}}}", r.numer().clone().abs(), r.denom())
            },
            Self::Float(value) => f.write_str(&fmt_float(value)),
            Self::Constant(Constant::Pi) => write!(f, "\\pi"),
            Self::Constant(Constant::E) => write!(f, "e"),
            Self::Symbol(name) => f.write_str(name),
            Self::Call(Func::Exp, args) if args.len() == 1 => {
                write!(f, "e^{{")?;
                args[0].fmt_latex(f)?;
                write!(f, "}}")
            },
            Self::Call(func, args) => {
                write!(f, "\\{}", func)?;
                fmt_call_args(f, args)
            },
        }
    }
}

/// Joins the factors of a product. Two factors are separated by a space, or by `\cdot` if the
/// second one starts with a digit.
fn join_factors(parts: &[String]) -> String {
    let mut out = String::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            if part.starts_with(|c: char| c.is_ascii_digit()) {
                out.push_str(" \\cdot ");
            } else {
                out.push(' ');
            }
        }
        out.push_str(part);
    }
    out
}

/// Formats one factor of a product with other factors next to it.
fn factor_string(expr: &SymExpr) -> String {
    match expr {
        SymExpr::Add(_) | SymExpr::Mul(_) => format!("\\left({}\\right)", latex_string(expr)),
        _ => latex_string(expr),
    }
}

fn fmt_product(f: &mut Formatter, product: &Product<'_>) -> Result {
    if product.negative {
        write!(f, "-")?;
    }

    let (numer, denom) = product.coefficient_parts();
    let numer_parts = product.numerator.iter()
        .map(|factor| factor_string(factor))
        .collect::<Vec<_>>();
    let denom_parts = product.denominator.iter()
        .map(factor_string)
        .collect::<Vec<_>>();

    let upper = if numer.is_none() && numer_parts.len() == 1 {
        latex_string(product.numerator[0])
    } else {
        join_factors(&numer.into_iter().chain(numer_parts).collect::<Vec<_>>())
    };

    if denom.is_none() && denom_parts.is_empty() {
        return f.write_str(&upper);
    }

    let lower = if denom.is_none() && denom_parts.len() == 1 {
        latex_string(&product.denominator[0])
    } else {
        join_factors(&denom.into_iter().chain(denom_parts).collect::<Vec<_>>())
    };
    write!(f, "\\frac{{{}}}{{{}}}", upper, lower)
}

fn fmt_sum(f: &mut Formatter, terms: &[SymExpr]) -> Result {
    let mut sorted = terms.iter().collect::<Vec<_>>();
    order::sort_terms(&mut sorted);

    let mut iter = sorted.into_iter();
    if let Some(first) = iter.next() {
        first.fmt_latex(f)?;
    }
    for term in iter {
        if is_negative_term(term) {
            write!(f, " - ")?;
            (-term.clone()).fmt_latex(f)?;
        } else {
            write!(f, " + ")?;
            term.fmt_latex(f)?;
        }
    }
    Ok(())
}

/// Returns true if the base of a power must be wrapped in `\left( \right)`.
fn needs_parens_as_base(base: &SymExpr) -> bool {
    match base {
        SymExpr::Primary(Primary::Rational(r)) => *r < 0 || *r.denom() != 1,
        SymExpr::Primary(Primary::Float(value)) => *value < 0,
        SymExpr::Primary(Primary::Call(Func::Exp, _)) => true,
        SymExpr::Primary(_) => false,
        SymExpr::Add(_) | SymExpr::Mul(_) | SymExpr::Exp(..) => true,
    }
}

/// Formats a power with a non-negative exponent.
///
/// Powers of named functions are written with the exponent on the function name, as in
/// `\sin^{2}{\left(x \right)}`.
fn fmt_power(f: &mut Formatter, base: &SymExpr, exponent: &SymExpr) -> Result {
    if let Some((func, args)) = base.as_call() {
        if func != Func::Exp && exponent.as_integer().is_some() {
            write!(f, "\\{}^{{", func)?;
            exponent.fmt_latex(f)?;
            write!(f, "}}")?;
            return fmt_call_args(f, args);
        }
    }

    if needs_parens_as_base(base) {
        write!(f, "\\left(")?;
        base.fmt_latex(f)?;
        write!(f, "\\right)")?;
    } else {
        base.fmt_latex(f)?;
    }
    write!(f, "^{{")?;
    exponent.fmt_latex(f)?;
    write!(f, "}}")
}

impl Latex for SymExpr {
    fn fmt_latex(&self, f: &mut Formatter) -> Result {
        match self {
            Self::Primary(primary) => primary.fmt_latex(f),
            Self::Add(terms) => fmt_sum(f, terms),
            Self::Mul(factors) => fmt_product(f, &Product::new(factors)),
            Self::Exp(base, exponent) => {
                if reciprocal(self).is_some() {
                    return fmt_product(f, &Product::new(std::iter::once(self)));
                }

                if is_one_half(exponent) {
                    write!(f, "\\sqrt{{")?;
                    base.fmt_latex(f)?;
                    return write!(f, "}}");
                }

                fmt_power(f, base, exponent)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> SymExpr {
        SymExpr::symbol("x")
    }

    fn latex(expr: &SymExpr) -> String {
        expr.as_display().to_string()
    }

    #[test]
    fn polynomial() {
        let expr = SymExpr::Add(vec![
            SymExpr::integer(-1),
            SymExpr::integer(2) * x(),
            x().pow(SymExpr::integer(2)),
        ]);
        assert_eq!(latex(&expr), "x^{2} + 2 x - 1");
    }

    #[test]
    fn fractions() {
        assert_eq!(latex(&SymExpr::rational(-1, 2)), "-\\frac{1}{2}");
        assert_eq!(latex(&(SymExpr::rational(3, 2) * x())), "\\frac{3 x}{2}");
        assert_eq!(latex(&x().recip()), "\\frac{1}{x}");
        assert_eq!(
            latex(&(x() + SymExpr::integer(1)).recip()),
            "\\frac{1}{x + 1}",
        );
        assert_eq!(latex(&SymExpr::integer(3).sqrt()), "\\sqrt{3}");
    }

    #[test]
    fn functions() {
        assert_eq!(latex(&SymExpr::call(Func::Sin, x())), "\\sin{\\left(x \\right)}");
        assert_eq!(latex(&SymExpr::call(Func::Exp, x())), "e^{x}");
        assert_eq!(
            latex(&SymExpr::call(Func::Cos, x()).pow(SymExpr::integer(2))),
            "\\cos^{2}{\\left(x \\right)}",
        );
        assert_eq!(
            latex(&(SymExpr::integer(2) * SymExpr::call(Func::Log, x()))),
            "2 \\log{\\left(x \\right)}",
        );
    }

    #[test]
    fn products() {
        let sum = SymExpr::Add(vec![x(), SymExpr::integer(1)]);
        assert_eq!(latex(&(x() * sum)), "x \\left(x + 1\\right)");
        assert_eq!(
            latex(&(SymExpr::constant(Constant::Pi) * SymExpr::integer(2).sqrt())),
            "\\sqrt{2} \\pi",
        );
        assert_eq!(
            latex(&(SymExpr::integer(2).pow(x()) * SymExpr::integer(3).pow(x()))),
            "2^{x} \\cdot 3^{x}",
        );
    }
}
