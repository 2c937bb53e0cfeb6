pub mod op;

use crate::{
    parser::{error, Parser},
    tokenizer::TokenKind,
};
use std::ops::Range;
use symcalc_error::Error;

/// Generates a unit struct for each token kind, as well as a simple [`Parse`] implementation for
/// each token kind. This enables the parser to request token kinds as a type.
///
/// The [`Parse`](crate::parser::Parse) trait does not carry the source lifetime, so these tokens
/// expose an inherent `parse_token` method instead.
macro_rules! token_kinds {
    ($($name:ident)*) => {
        $(
            #[derive(Clone, Debug, PartialEq)]
            pub struct $name<'source> {
                pub lexeme: &'source str,
                pub span: Range<usize>,
            }

            impl<'source> $name<'source> {
                /// Parses this token, keeping the lexeme borrowed from the source.
                pub fn parse_token(input: &mut Parser<'source>) -> Result<Self, Error> {
                    let token = input.next_token()?;

                    if token.kind == TokenKind::$name {
                        Ok(Self {
                            lexeme: token.lexeme,
                            span: token.span,
                        })
                    } else {
                        Err(Error::new(vec![token.span], error::UnexpectedToken {
                            expected: &[TokenKind::$name],
                            found: token.kind,
                        }))
                    }
                }
            }
        )*
    };
}

token_kinds!(
    Name
    OpenParen
    CloseParen
);
