//! The symbolic engine used by `symcalc`.
//!
//! The engine turns parsed expressions into [`SymExpr`] trees, resolving every name through a
//! [`SymbolTable`], and offers the transformations the calculator exposes: automatic evaluation,
//! simplification, expansion, factoring and differentiation, together with plain-text and LaTeX
//! rendering. [`Cas`] bundles all of these behind one value.

mod cas;
pub mod consts;
pub mod error;
pub mod primitive;
pub mod symbolic;

pub use cas::Cas;
pub use symbolic::{Binding, SymExpr, SymbolTable};
