//! The kinds of errors the parser can produce.

use ariadne::{Fmt, Report};
use crate::tokenizer::TokenKind;
use std::ops::Range;
use symcalc_error::{build_report, ErrorKind, EXPR};

/// The end of the source code was reached unexpectedly.
#[derive(Debug, Clone, PartialEq)]
pub struct UnexpectedEof;

impl ErrorKind for UnexpectedEof {
    fn message(&self) -> String {
        "unexpected end of input".to_string()
    }

    fn build_report<'a>(&self, src_id: &'a str, spans: &[Range<usize>]) -> Report<'_, (&'a str, Range<usize>)> {
        build_report(
            src_id,
            spans,
            self.message(),
            &[format!("you might need to add another {} here", "expression".fg(EXPR))],
            None,
        )
    }
}

/// The end of the source code was expected, but something else was found.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpectedEof;

impl ErrorKind for ExpectedEof {
    fn message(&self) -> String {
        "expected end of input".to_string()
    }

    fn build_report<'a>(&self, src_id: &'a str, spans: &[Range<usize>]) -> Report<'_, (&'a str, Range<usize>)> {
        build_report(
            src_id,
            spans,
            self.message(),
            &[format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
            Some(format!(
                "operators must be written explicitly, e.g. {} for multiplication and {} for powers",
                "*".fg(EXPR),
                "**".fg(EXPR),
            )),
        )
    }
}

/// An unexpected token was encountered.
#[derive(Debug, Clone, PartialEq)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

impl ErrorKind for UnexpectedToken {
    fn message(&self) -> String {
        format!("unexpected token: found {}", self.found)
    }

    fn build_report<'a>(&self, src_id: &'a str, spans: &[Range<usize>]) -> Report<'_, (&'a str, Range<usize>)> {
        let expected = self.expected.iter()
            .map(|kind| kind.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        build_report(
            src_id,
            spans,
            "unexpected token",
            &[format!("expected one of: {}", expected)],
            Some(format!("found {}", self.found)),
        )
    }
}

/// A parenthesis was not closed.
#[derive(Debug, Clone, PartialEq)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

impl ErrorKind for UnclosedParenthesis {
    fn message(&self) -> String {
        "unclosed parenthesis".to_string()
    }

    fn build_report<'a>(&self, src_id: &'a str, spans: &[Range<usize>]) -> Report<'_, (&'a str, Range<usize>)> {
        let help = if self.opening {
            "add a closing parenthesis `)` somewhere after this"
        } else {
            "add an opening parenthesis `(` somewhere before this"
        };
        build_report(
            src_id,
            spans,
            self.message(),
            &["this parenthesis is not closed".to_string()],
            Some(help.to_string()),
        )
    }
}

/// There was no expression inside a pair of parentheses.
#[derive(Debug, Clone, PartialEq)]
pub struct EmptyParenthesis;

impl ErrorKind for EmptyParenthesis {
    fn message(&self) -> String {
        "missing expression inside parenthesis".to_string()
    }

    fn build_report<'a>(&self, src_id: &'a str, spans: &[Range<usize>]) -> Report<'_, (&'a str, Range<usize>)> {
        build_report(src_id, spans, self.message(), &["add an expression here".to_string()], None)
    }
}
