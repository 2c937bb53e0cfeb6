//! Algebraic manipulation of expressions.
//!
//! # Expression representation
//!
//! Expressions in this module are trees of [`SymExpr`] nodes. A [`SymExpr`] is built from a
//! parsed [`symcalc_parser::parser::ast::Expr`] by [`convert()`], which resolves every name
//! through a [`SymbolTable`] and **flattens** the tree: `x + (y + z)` is a single
//! [`SymExpr::Add`] with three terms. Combining like terms and like factors is much easier when
//! they all sit at the same level of the tree.
//!
//! ```
//! use symcalc_compute::symbolic::{convert, SymExpr, SymbolTable};
//! use symcalc_parser::parser::{ast::Expr, Parser};
//!
//! let mut table = SymbolTable::new();
//! for name in ["x", "y", "z"] {
//!     table.bind_symbol(name);
//! }
//!
//! let ast = Parser::new("x + (y + z)").try_parse_full::<Expr>().unwrap();
//! let expr = convert(&ast, &table).unwrap();
//! assert_eq!(expr, SymExpr::Add(vec![
//!     SymExpr::symbol("x"),
//!     SymExpr::symbol("y"),
//!     SymExpr::symbol("z"),
//! ]));
//! ```
//!
//! # Transformations
//!
//! Every transformation is a set of rules applied repeatedly until none of them applies (see
//! [`mod@simplify`]). [`evaluate()`] runs the rules that never make an expression more complex,
//! and is applied to every freshly built expression. [`simplify()`] adds identities such as
//! `sin(a)**2 + cos(a)**2 = 1`, and picks the least complex of several candidate forms.
//! [`expand()`] distributes products over sums, [`factor()`] undoes that for polynomials, and
//! [`derivative()`] differentiates with respect to a free symbol.

pub mod approx;
pub mod bind;
pub mod convert;
pub mod derivative;
pub mod expand;
pub mod expr;
pub mod factor;
pub mod fmt;
pub mod simplify;
pub mod step_collector;

pub use bind::{Binding, SymbolTable};
pub use convert::convert;
pub use derivative::{derivative, SymbolicDerivativeError};
pub use expand::expand;
pub use expr::SymExpr;
pub use factor::factor;
pub use simplify::{evaluate, simplify, simplify_with_steps};
pub use step_collector::StepCollector;
