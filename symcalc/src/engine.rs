use symcalc_compute::{
    symbolic::SymbolicDerivativeError,
    Cas,
    SymExpr,
    SymbolTable,
};
use symcalc_error::Error;

/// The symbolic engine the pipeline runs on.
///
/// [`Cas`] is the engine used by [`apply`](crate::apply); other implementations can be passed to
/// [`apply_with`](crate::apply_with).
pub trait Engine {
    /// Parses the text, resolving every name through the table.
    fn parse(&self, text: &str, table: &SymbolTable) -> Result<SymExpr, Error>;

    /// Differentiates the expression with respect to the free symbol `var`.
    fn differentiate(&self, expr: &SymExpr, var: &str) -> Result<SymExpr, SymbolicDerivativeError>;

    fn simplify(&self, expr: &SymExpr) -> SymExpr;

    fn expand(&self, expr: &SymExpr) -> SymExpr;

    fn factor(&self, expr: &SymExpr) -> SymExpr;

    /// Renders the expression as plain text.
    fn render_display(&self, expr: &SymExpr) -> String;

    /// Renders the expression as LaTeX.
    fn render_markup(&self, expr: &SymExpr) -> String;
}

impl Engine for Cas {
    fn parse(&self, text: &str, table: &SymbolTable) -> Result<SymExpr, Error> {
        Cas::parse(self, text, table)
    }

    fn differentiate(&self, expr: &SymExpr, var: &str) -> Result<SymExpr, SymbolicDerivativeError> {
        Cas::differentiate(self, expr, var)
    }

    fn simplify(&self, expr: &SymExpr) -> SymExpr {
        Cas::simplify(self, expr)
    }

    fn expand(&self, expr: &SymExpr) -> SymExpr {
        Cas::expand(self, expr)
    }

    fn factor(&self, expr: &SymExpr) -> SymExpr {
        Cas::factor(self, expr)
    }

    fn render_display(&self, expr: &SymExpr) -> String {
        Cas::render_display(self, expr)
    }

    fn render_markup(&self, expr: &SymExpr) -> String {
        Cas::render_markup(self, expr)
    }
}
