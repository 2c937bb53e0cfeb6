use crate::{
    parser::{
        ast::{binary::Binary, expr::Expr},
        token::op::UnaryOp,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};
use symcalc_error::Error;

/// A prefix unary operation, such as `-x` or `+2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unary {
    /// The operand of the unary operation.
    pub operand: Box<Expr>,

    /// The operator of the unary operation.
    pub op: UnaryOp,

    /// The region of the source code that this unary operation was parsed from.
    pub span: Range<usize>,
}

impl Unary {
    /// Parses a unary operation, or falls back to a primary expression if there is no unary
    /// operator at the cursor.
    ///
    /// The operand absorbs every following operator that binds tighter than the unary operator
    /// itself, which is only `**`.
    pub fn parse_or_lower(input: &mut Parser) -> Result<Expr, Error> {
        match input.peek_kind() {
            Some(TokenKind::Sub | TokenKind::Add) => {
                let op = input.try_parse::<UnaryOp>()?;
                let operand = Self::parse_or_lower(input)?;
                let operand = Binary::parse_expr(input, operand, op.precedence())?;
                let span = op.span.start..operand.span().end;

                Ok(Expr::Unary(Self {
                    operand: Box::new(operand),
                    op,
                    span,
                }))
            },
            _ => Expr::parse_primary(input),
        }
    }
}

impl fmt::Display for Unary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.op.kind, self.operand)
    }
}
