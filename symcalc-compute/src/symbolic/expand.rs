//! Expansion of products and powers of sums.

use super::{
    expr::SymExpr,
    simplify::{apply_rules, RuleSet},
};

/// Expands the expression: products are distributed over sums, and integer powers of sums are
/// multiplied out. Like terms are combined afterwards.
///
/// `(x+1)^2 = x^2 + 2x + 1`
/// `2*(x+y) = 2x + 2y`
pub fn expand(expr: &SymExpr) -> SymExpr {
    apply_rules(expr, RuleSet::Expand, &mut ())
}
