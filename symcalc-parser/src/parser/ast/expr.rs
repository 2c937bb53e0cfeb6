use crate::{
    parser::{
        ast::{binary::Binary, call::Call, literal::Literal, paren::Paren, unary::Unary},
        error,
        Parse,
        Parser,
        Precedence,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};
use symcalc_error::Error;

/// Represents a general expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A literal value.
    Literal(Literal),

    /// A parenthesized expression, such as `(1 + 2)`.
    Paren(Paren),

    /// A function call, such as `sin(x)`.
    Call(Call),

    /// A unary operation, such as `-1`.
    Unary(Unary),

    /// A binary operation, such as `1 + 2`.
    Binary(Binary),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Expr::Literal(literal) => literal.span(),
            Expr::Paren(paren) => paren.span.clone(),
            Expr::Call(call) => call.span.clone(),
            Expr::Unary(unary) => unary.span.clone(),
            Expr::Binary(binary) => binary.span.clone(),
        }
    }

    /// If this expression is an [`Expr::Paren`], returns the innermost expression in the
    /// parenthesized expression. Otherwise, returns `self`.
    pub fn innermost(&self) -> &Expr {
        let mut inner = self;
        while let Expr::Paren(paren) = inner {
            inner = &paren.expr;
        }
        inner
    }

    /// Parses a primary expression: a literal, a call, or a parenthesized expression.
    ///
    /// A name directly followed by `(` is always parsed as a call, so that errors inside the
    /// argument list are reported as such instead of as trailing input.
    pub(crate) fn parse_primary(input: &mut Parser) -> Result<Self, Error> {
        match input.peek_kind() {
            Some(TokenKind::Name) => {
                let mut input_ahead = input.clone();
                input_ahead.next_token()?;
                if input_ahead.peek_kind() == Some(TokenKind::OpenParen) {
                    Call::parse(input).map(Self::Call)
                } else {
                    Literal::parse(input).map(Self::Literal)
                }
            },
            Some(TokenKind::Int | TokenKind::Float) => Literal::parse(input).map(Self::Literal),
            Some(TokenKind::OpenParen) => Paren::parse(input).map(Self::Paren),
            Some(_) => {
                let token = input.next_token()?;
                Err(Error::new(vec![token.span], error::UnexpectedToken {
                    expected: &[
                        TokenKind::Int,
                        TokenKind::Float,
                        TokenKind::Name,
                        TokenKind::OpenParen,
                        TokenKind::Sub,
                    ],
                    found: token.kind,
                }))
            },
            None => Err(Error::new(vec![input.eof_span()], error::UnexpectedEof)),
        }
    }
}

impl Parse for Expr {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let lhs = Unary::parse_or_lower(input)?;
        Binary::parse_expr(input, lhs, Precedence::Any)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(literal) => literal.fmt(f),
            Expr::Paren(paren) => paren.fmt(f),
            Expr::Call(call) => call.fmt(f),
            Expr::Unary(unary) => unary.fmt(f),
            Expr::Binary(binary) => binary.fmt(f),
        }
    }
}
