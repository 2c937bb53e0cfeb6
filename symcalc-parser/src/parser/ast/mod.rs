//! The abstract syntax tree produced by the parser.
//!
//! Every node keeps the region of the source code it was parsed from, so that later stages can
//! point back into the input when reporting errors.

pub mod binary;
pub mod call;
pub mod expr;
pub mod literal;
pub mod paren;
pub mod unary;

pub use binary::Binary;
pub use call::Call;
pub use expr::Expr;
pub use literal::{LitFloat, LitInt, LitSym, Literal};
pub use paren::Paren;
pub use unary::Unary;
