use crate::{
    parser::{
        ast::{expr::Expr, literal::LitSym},
        error,
        token::{CloseParen, Name, OpenParen},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};
use symcalc_error::Error;

/// A function call, such as `sin(x)` or `log(x, 2)`.
///
/// Whether the name refers to a function at all is decided later, when names are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    /// The name of the function being called.
    pub name: LitSym,

    /// The arguments to the function, possibly empty.
    pub args: Vec<Expr>,

    /// The region of the source code that this function call was parsed from.
    pub span: Range<usize>,

    /// The span of the parentheses that surround the arguments.
    pub paren_span: Range<usize>,
}

impl Parse for Call {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let name = Name::parse_token(input)?;
        let open = OpenParen::parse_token(input)?;

        let args = if input.peek_kind() == Some(TokenKind::CloseParen) {
            Vec::new()
        } else {
            input.try_parse_delimited::<Expr>(TokenKind::Comma)?
        };

        if input.peek_kind() != Some(TokenKind::CloseParen) {
            return Err(Error::new(vec![open.span], error::UnclosedParenthesis { opening: true }));
        }
        let close = CloseParen::parse_token(input)?;

        Ok(Self {
            name: LitSym {
                name: name.lexeme.to_owned(),
                span: name.span.clone(),
            },
            args,
            span: name.span.start..close.span.end,
            paren_span: open.span.start..close.span.end,
        })
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name.name)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", arg)?;
        }
        write!(f, ")")
    }
}
