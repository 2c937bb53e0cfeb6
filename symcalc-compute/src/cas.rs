use crate::error::DivisionByZero;
use crate::symbolic::{
    convert,
    derivative,
    evaluate,
    expand,
    factor,
    fmt::Latex,
    simplify,
    SymExpr,
    SymbolTable,
    SymbolicDerivativeError,
};
use log::debug;
use symcalc_error::Error;
use symcalc_parser::parser::{ast::Expr, Parser};

/// Returns true if the expression divides by zero somewhere, which is left behind as `0**n` with a
/// negative `n`.
fn divides_by_zero(expr: &SymExpr) -> bool {
    expr.iter().any(|node| match node {
        SymExpr::Exp(base, exponent) => {
            base.is_numeric_zero() && exponent.as_number().map_or(false, |n| n.is_negative())
        },
        _ => false,
    })
}

/// The symbolic engine.
///
/// Every transformation takes an already evaluated expression and returns an evaluated one, so the
/// results of two operations can be fed into each other directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cas;

impl Cas {
    /// Parses the source, resolves its names through the table, and evaluates the result.
    ///
    /// Evaluation applies the rules that never make the expression more complex: numbers are
    /// combined, like terms and factors are merged, and known values of the fixed functions are
    /// substituted.
    pub fn parse(&self, source: &str, table: &SymbolTable) -> Result<SymExpr, Error> {
        let ast = Parser::new(source).try_parse_full::<Expr>()?;
        let expr = evaluate(&convert(&ast, table)?);
        if divides_by_zero(&expr) {
            return Err(Error::new(vec![0..source.len()], DivisionByZero));
        }
        debug!("parsed `{}` into `{}`", source, expr);
        Ok(expr)
    }

    /// Differentiates the expression with respect to the free symbol `var`.
    pub fn differentiate(&self, expr: &SymExpr, var: &str) -> Result<SymExpr, SymbolicDerivativeError> {
        let result = evaluate(&derivative(expr, var)?);
        debug!("d/d{}({}) = {}", var, expr, result);
        Ok(result)
    }

    /// Returns the least complex form of the expression that was found.
    pub fn simplify(&self, expr: &SymExpr) -> SymExpr {
        simplify(expr)
    }

    /// Multiplies out every product of sums and every integer power of a sum.
    pub fn expand(&self, expr: &SymExpr) -> SymExpr {
        expand(expr)
    }

    /// Factors polynomials over the rationals.
    pub fn factor(&self, expr: &SymExpr) -> SymExpr {
        factor(expr)
    }

    /// Renders the expression as plain text.
    pub fn render_display(&self, expr: &SymExpr) -> String {
        expr.to_string()
    }

    /// Renders the expression as LaTeX.
    pub fn render_markup(&self, expr: &SymExpr) -> String {
        expr.as_display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn table() -> SymbolTable {
        let mut table = SymbolTable::new();
        table.bind_symbol("x");
        table.bind_symbol("y");
        table
    }

    fn parse(source: &str) -> SymExpr {
        Cas.parse(source, &table()).unwrap()
    }

    #[test]
    fn parse_evaluates() {
        assert_eq!(Cas.render_display(&parse("2 + 3*4")), "14");
        assert_eq!(Cas.render_display(&parse("x + x")), "2*x");
        assert_eq!(Cas.render_display(&parse("sin(pi*(30)/180)")), "1/2");
        assert_eq!(Cas.render_display(&parse("y*x**2 + 2*x + 1 - 1")), "x**2*y + 2*x");
    }

    #[test]
    fn parse_errors() {
        let err = Cas.parse("2 +", &table()).unwrap_err();
        assert!(!err.message().is_empty());

        let err = Cas.parse("1/(x - x)", &table()).unwrap_err();
        assert_eq!(err.message(), "division by zero");

        let err = Cas.parse("x/0.0", &table()).unwrap_err();
        assert_eq!(err.message(), "division by zero");

        let err = Cas.parse("foo(x)", &table()).unwrap_err();
        assert_eq!(err.spans, vec![0..6]);
    }

    #[test]
    fn transformations() {
        let square = parse("(x + 1)**2");
        let expanded = Cas.expand(&square);
        assert_eq!(Cas.render_display(&expanded), "x**2 + 2*x + 1");
        assert_eq!(Cas.factor(&expanded), square);

        let expr = parse("x**2 - 1");
        assert_eq!(Cas.render_display(&Cas.factor(&expr)), "(x - 1)*(x + 1)");
        assert_eq!(Cas.render_display(&Cas.simplify(&parse("sin(x)**2 + cos(x)**2"))), "1");
    }

    #[test]
    fn differentiation() {
        let expr = parse("x**2");
        let derivative = Cas.differentiate(&expr, "x").unwrap();
        assert_eq!(Cas.render_display(&derivative), "2*x");
        assert_eq!(Cas.render_markup(&expr), "x^{2}");
        assert_eq!(Cas.render_markup(&derivative), "2 x");

        let derivative = Cas.differentiate(&parse("sin(x)"), "x").unwrap();
        assert_eq!(Cas.render_display(&derivative), "cos(x)");
    }
}
