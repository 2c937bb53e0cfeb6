//! Tokenizer and recursive-descent parser for the expressions accepted by `symcalc`.
//!
//! The grammar is the usual arithmetic one: integer and decimal literals, names, calls such as
//! `sin(x)` or `log(x, 2)`, parentheses, unary `+` / `-`, and the binary operators `+`, `-`, `*`,
//! `/` and `**` (right-associative). Unary minus binds looser than `**`, so `-x**2` is
//! `-(x**2)`. There is no implicit multiplication.
//!
//! ```
//! use symcalc_parser::parser::{ast::Expr, Parser};
//!
//! let mut parser = Parser::new("2*x**2 + sin(x)");
//! let expr = parser.try_parse_full::<Expr>().unwrap();
//! assert_eq!(expr.to_string(), "2 * x ** 2 + sin(x)");
//! ```

pub mod parser;
pub mod tokenizer;
