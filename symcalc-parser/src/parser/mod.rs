pub mod ast;
pub mod error;
pub mod token;

use crate::tokenizer::{tokenize_complete, Token, TokenKind};
use std::ops::Range;
use symcalc_error::{Error, ErrorKind};

/// A high-level parser for expressions. This is the type to use to parse an arbitrary piece of
/// text into an abstract syntax tree.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
        }
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns the current token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the end of the stream.
    pub fn current_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor)
    }

    /// Advances the cursor past any whitespace tokens.
    pub fn advance_past_whitespace(&mut self) {
        while let Some(token) = self.tokens.get(self.cursor) {
            if token.is_whitespace() {
                self.cursor += 1;
            } else {
                break;
            }
        }
    }

    /// Returns the kind of the next non-whitespace token without consuming anything.
    pub fn peek_kind(&self) -> Option<TokenKind> {
        self.tokens[self.cursor.min(self.tokens.len())..]
            .iter()
            .find(|token| !token.is_whitespace())
            .map(|token| token.kind)
    }

    /// Returns the next token to be parsed, then advances the cursor. Whitespace tokens are
    /// skipped.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        while self.cursor < self.tokens.len() {
            let token = &self.tokens[self.cursor];
            self.cursor += 1;
            if token.is_whitespace() {
                continue;
            } else {
                // cloning is cheap: only Range<_> is cloned
                return Ok(token.clone());
            }
        }

        Err(self.error(error::UnexpectedEof))
    }

    /// Speculatively parses a value from the given stream of tokens. This function can be used
    /// in the [`Parse::parse`] implementation of a type with the given [`Parser`], as it will
    /// automatically backtrack the cursor position if parsing fails.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse<T: Parse>(&mut self) -> Result<T, Error> {
        self.try_parse_with_fn(T::parse)
    }

    /// Speculatively parses a value from the given stream of tokens, using a custom parsing
    /// function to parse the value.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse_with_fn<T, F>(&mut self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Parser<'source>) -> Result<T, Error>,
    {
        let start = self.cursor;
        match f(self) {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Parses multiple values (at least one) from the given stream of tokens, each delimited by
    /// the given token kind.
    pub fn try_parse_delimited<T: Parse>(&mut self, delimiter: TokenKind) -> Result<Vec<T>, Error> {
        let mut values = vec![T::parse(self)?];

        while self.peek_kind() == Some(delimiter) {
            self.next_token()?;
            values.push(T::parse(self)?);
        }

        Ok(values)
    }

    /// Attempts to parse a value from the given stream of tokens. All the tokens must be consumed
    /// by the parser; if not, an error is returned.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        let value = T::parse(self)?;
        self.advance_past_whitespace();

        match self.current_token() {
            None => Ok(value),
            Some(token) if token.kind == TokenKind::CloseParen => {
                Err(self.error(error::UnclosedParenthesis { opening: false }))
            },
            Some(token) => {
                let start = token.span.start;
                let end = self.eof_span().end;
                Err(Error::new(vec![start..end], error::ExpectedEof))
            },
        }
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

/// The associativity of a binary or unary operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Associativity {
    /// The binary / unary operation is left-associative.
    ///
    /// For binary operations, this means `a op b op c` is evaluated as `(a op b) op c`.
    Left,

    /// The binary / unary operation is right-associative.
    ///
    /// For binary operations, this means `a op b op c` is evaluated as `a op (b op c)`. For unary
    /// operations, this means `op op a` is evaluated as `op (op a)`.
    Right,
}

/// The precedence of an operation, in order from lowest precedence (evaluated last) to highest
/// precedence (evaluated first).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Precedence {
    /// Any precedence.
    Any,

    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term,

    /// Precedence of multiplication (`*`) and division (`/`), which separate factors.
    Factor,

    /// Precedence of unary negation (`-`) and unary plus (`+`).
    Neg,

    /// Precedence of exponentiation (`**`).
    Exp,
}

impl PartialOrd for Precedence {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        let left = *self as u8;
        let right = *other as u8;
        left.partial_cmp(&right)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use ast::{
        binary::Binary,
        call::Call,
        expr::Expr,
        literal::{LitFloat, LitInt, LitSym, Literal},
        paren::Paren,
        unary::Unary,
    };
    use token::op::{BinOp, BinOpKind, UnaryOp, UnaryOpKind};

    fn int(value: &str, span: Range<usize>) -> Expr {
        Expr::Literal(Literal::Integer(LitInt { value: value.to_string(), span }))
    }

    fn sym(name: &str, span: Range<usize>) -> Expr {
        Expr::Literal(Literal::Symbol(LitSym { name: name.to_string(), span }))
    }

    fn parse(input: &str) -> Result<Expr, Error> {
        Parser::new(input).try_parse_full::<Expr>()
    }

    #[test]
    fn literal_int() {
        assert_eq!(parse("16").unwrap(), int("16", 0..2));
    }

    #[test]
    fn literal_float() {
        assert_eq!(parse(" 3.25 ").unwrap(), Expr::Literal(Literal::Float(LitFloat {
            value: "3.25".to_string(),
            span: 1..5,
        })));
    }

    #[test]
    fn literal_float_with_exponent() {
        assert_eq!(parse("2.5e3").unwrap(), Expr::Literal(Literal::Float(LitFloat {
            value: "2.5e3".to_string(),
            span: 0..5,
        })));
        assert!(parse("1e").is_err());
    }

    #[test]
    fn binary_precedence() {
        let expr = parse("1 + 2 * 3").unwrap();
        assert_eq!(expr, Expr::Binary(Binary {
            lhs: Box::new(int("1", 0..1)),
            op: BinOp { kind: BinOpKind::Add, span: 2..3 },
            rhs: Box::new(Expr::Binary(Binary {
                lhs: Box::new(int("2", 4..5)),
                op: BinOp { kind: BinOpKind::Mul, span: 6..7 },
                rhs: Box::new(int("3", 8..9)),
                span: 4..9,
            })),
            span: 0..9,
        }));
    }

    #[test]
    fn left_associative() {
        let expr = parse("8-4-2").unwrap();
        assert_eq!(expr, Expr::Binary(Binary {
            lhs: Box::new(Expr::Binary(Binary {
                lhs: Box::new(int("8", 0..1)),
                op: BinOp { kind: BinOpKind::Sub, span: 1..2 },
                rhs: Box::new(int("4", 2..3)),
                span: 0..3,
            })),
            op: BinOp { kind: BinOpKind::Sub, span: 3..4 },
            rhs: Box::new(int("2", 4..5)),
            span: 0..5,
        }));
    }

    #[test]
    fn power_right_associative() {
        let expr = parse("2**3**2").unwrap();
        assert_eq!(expr, Expr::Binary(Binary {
            lhs: Box::new(int("2", 0..1)),
            op: BinOp { kind: BinOpKind::Exp, span: 1..3 },
            rhs: Box::new(Expr::Binary(Binary {
                lhs: Box::new(int("3", 3..4)),
                op: BinOp { kind: BinOpKind::Exp, span: 4..6 },
                rhs: Box::new(int("2", 6..7)),
                span: 3..7,
            })),
            span: 0..7,
        }));
    }

    #[test]
    fn negation_binds_looser_than_power() {
        let expr = parse("-x**2").unwrap();
        assert_eq!(expr, Expr::Unary(Unary {
            operand: Box::new(Expr::Binary(Binary {
                lhs: Box::new(sym("x", 1..2)),
                op: BinOp { kind: BinOpKind::Exp, span: 2..4 },
                rhs: Box::new(int("2", 4..5)),
                span: 1..5,
            })),
            op: UnaryOp { kind: UnaryOpKind::Neg, span: 0..1 },
            span: 0..5,
        }));
    }

    #[test]
    fn negative_exponent() {
        let expr = parse("x**-1").unwrap();
        assert_eq!(expr.to_string(), "x ** -1");
    }

    #[test]
    fn call_with_arguments() {
        let expr = parse("log(x, 2)").unwrap();
        assert_eq!(expr, Expr::Call(Call {
            name: LitSym { name: "log".to_string(), span: 0..3 },
            args: vec![sym("x", 4..5), int("2", 7..8)],
            span: 0..9,
            paren_span: 3..9,
        }));
    }

    #[test]
    fn call_with_space_before_paren() {
        let expr = parse("log (2)").unwrap();
        assert!(matches!(expr, Expr::Call(_)));
    }

    #[test]
    fn parenthesized() {
        let expr = parse("(x+1)*2").unwrap();
        assert_eq!(expr.to_string(), "(x + 1) * 2");
        let Expr::Binary(binary) = expr else { panic!("expected binary") };
        assert!(matches!(*binary.lhs, Expr::Paren(Paren { .. })));
    }

    #[test]
    fn incomplete_binary() {
        let err = parse("2+").unwrap_err();
        assert_eq!(err.message(), "unexpected end of input");
    }

    #[test]
    fn unclosed_paren() {
        let err = parse("(x+1").unwrap_err();
        assert_eq!(err.message(), "unclosed parenthesis");
        assert_eq!(err.spans, vec![0..1]);
    }

    #[test]
    fn unclosed_call() {
        let err = parse("sin(x").unwrap_err();
        assert_eq!(err.message(), "unclosed parenthesis");
        assert_eq!(err.spans, vec![3..4]);
    }

    #[test]
    fn unopened_paren() {
        let err = parse("x+1)").unwrap_err();
        assert_eq!(err.message(), "unclosed parenthesis");
        assert_eq!(err.spans, vec![3..4]);
    }

    #[test]
    fn empty_paren() {
        let err = parse("()").unwrap_err();
        assert_eq!(err.message(), "missing expression inside parenthesis");
    }

    #[test]
    fn caret_is_not_an_operator() {
        let err = parse("2^3").unwrap_err();
        assert_eq!(err.message(), "expected end of input");
        assert_eq!(err.spans, vec![1..3]);
    }

    #[test]
    fn no_implicit_multiplication() {
        assert!(parse("2 x").is_err());
    }
}
