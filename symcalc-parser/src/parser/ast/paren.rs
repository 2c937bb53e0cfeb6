use crate::{
    parser::{
        ast::expr::Expr,
        error,
        token::{CloseParen, OpenParen},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};
use symcalc_error::Error;

/// A parenthesized expression. A [`Paren`] can only contain a single expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paren {
    /// The inner expression.
    pub expr: Box<Expr>,

    /// The region of the source code that this [`Paren`] was parsed from.
    pub span: Range<usize>,
}

impl Parse for Paren {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let open = OpenParen::parse_token(input)?;

        if input.peek_kind() == Some(TokenKind::CloseParen) {
            let close = CloseParen::parse_token(input)?;
            return Err(Error::new(vec![open.span.start..close.span.end], error::EmptyParenthesis));
        }

        let expr = Expr::parse(input)?;
        if input.peek_kind() != Some(TokenKind::CloseParen) {
            return Err(Error::new(vec![open.span], error::UnclosedParenthesis { opening: true }));
        }
        let close = CloseParen::parse_token(input)?;

        Ok(Self {
            expr: Box::new(expr),
            span: open.span.start..close.span.end,
        })
    }
}

impl fmt::Display for Paren {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.expr)
    }
}
