use crate::{
    parser::{error, Parse, Parser},
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};
use symcalc_error::Error;

/// An integer literal, such as `16`. The digits are kept as written; conversion to a number is
/// left to the consumer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LitInt {
    /// The digits of the integer literal.
    pub value: String,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

/// A decimal literal, such as `3.25`, `3.` or `.5`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LitFloat {
    /// The text of the decimal literal.
    pub value: String,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

/// A symbol / identifier literal, such as `x` or `pi`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LitSym {
    /// The name of the symbol.
    pub name: String,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

/// Represents a literal value in an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    /// An integer literal.
    Integer(LitInt),

    /// A decimal literal.
    Float(LitFloat),

    /// A symbol / identifier literal.
    Symbol(LitSym),
}

impl Literal {
    /// Returns the span of the literal.
    pub fn span(&self) -> Range<usize> {
        match self {
            Literal::Integer(int) => int.span.clone(),
            Literal::Float(float) => float.span.clone(),
            Literal::Symbol(sym) => sym.span.clone(),
        }
    }
}

impl Parse for Literal {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token()?;
        match token.kind {
            TokenKind::Int => Ok(Literal::Integer(LitInt {
                value: token.lexeme.to_owned(),
                span: token.span,
            })),
            TokenKind::Float => Ok(Literal::Float(LitFloat {
                value: token.lexeme.to_owned(),
                span: token.span,
            })),
            TokenKind::Name => Ok(Literal::Symbol(LitSym {
                name: token.lexeme.to_owned(),
                span: token.span,
            })),
            _ => Err(Error::new(vec![token.span], error::UnexpectedToken {
                expected: &[TokenKind::Int, TokenKind::Float, TokenKind::Name],
                found: token.kind,
            })),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Integer(int) => write!(f, "{}", int.value),
            Literal::Float(float) => write!(f, "{}", float.value),
            Literal::Symbol(sym) => write!(f, "{}", sym.name),
        }
    }
}
