//! Errors raised while resolving a parsed expression into a [`SymExpr`](crate::SymExpr).

use ariadne::{Fmt, Report};
use std::ops::Range;
use symcalc_error::{build_report, ErrorKind, EXPR};

/// Formats a list of suggestions into a help message, if there are any.
fn suggestion_help(suggestions: &[String]) -> Option<String> {
    match suggestions {
        [] => None,
        [single] => Some(format!("did you mean the `{}` function?", single.as_str().fg(EXPR))),
        many => Some(format!(
            "did you mean one of these functions? {}",
            many.iter()
                .map(|name| format!("`{}`", name.as_str().fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", "),
        )),
    }
}

/// A name that is not one of the fixed functions was called like a function.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownFunction {
    /// The name that was called.
    pub name: String,

    /// Fixed function names that are spelled similarly.
    pub suggestions: Vec<String>,
}

impl ErrorKind for UnknownFunction {
    fn message(&self) -> String {
        match self.suggestions.first() {
            Some(suggestion) => format!("`{}` is not a function (did you mean `{}`?)", self.name, suggestion),
            None => format!("`{}` is not a function", self.name),
        }
    }

    fn build_report<'a>(&self, src_id: &'a str, spans: &[Range<usize>]) -> Report<'_, (&'a str, Range<usize>)> {
        build_report(
            src_id,
            spans,
            format!("`{}` is not a function", self.name),
            &["this call".to_string()],
            suggestion_help(&self.suggestions)
                .or_else(|| Some("the available functions are: sin, cos, tan, cot, log, exp".to_string())),
        )
    }
}

/// A fixed function was used as a value, without calling it.
#[derive(Debug, Clone, PartialEq)]
pub struct MissingCall {
    /// The name of the function.
    pub name: String,
}

impl ErrorKind for MissingCall {
    fn message(&self) -> String {
        format!("the `{}` function must be called with an argument", self.name)
    }

    fn build_report<'a>(&self, src_id: &'a str, spans: &[Range<usize>]) -> Report<'_, (&'a str, Range<usize>)> {
        build_report(
            src_id,
            spans,
            self.message(),
            &["this function".to_string()],
            Some(format!("to call it, type: {}", format!("{}(x)", self.name).fg(EXPR))),
        )
    }
}

/// A fixed function was called with the wrong number of arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct WrongArgumentCount {
    /// The name of the function.
    pub name: String,

    /// A description of the accepted argument counts.
    pub expected: &'static str,

    /// The number of arguments given.
    pub given: usize,
}

impl ErrorKind for WrongArgumentCount {
    fn message(&self) -> String {
        format!(
            "the `{}` function takes {} argument(s), but {} were given",
            self.name,
            self.expected,
            self.given,
        )
    }

    fn build_report<'a>(&self, src_id: &'a str, spans: &[Range<usize>]) -> Report<'_, (&'a str, Range<usize>)> {
        build_report(
            src_id,
            spans,
            self.message(),
            &["this call".to_string()],
            None,
        )
    }
}

/// An expression was divided by something that evaluates to zero.
#[derive(Debug, Clone, PartialEq)]
pub struct DivisionByZero;

impl ErrorKind for DivisionByZero {
    fn message(&self) -> String {
        "division by zero".to_string()
    }

    fn build_report<'a>(&self, src_id: &'a str, spans: &[Range<usize>]) -> Report<'_, (&'a str, Range<usize>)> {
        build_report(
            src_id,
            spans,
            self.message(),
            &["this divisor evaluates to zero".to_string()],
            None,
        )
    }
}

/// A name appeared in the expression without an entry in the symbol table.
#[derive(Debug, Clone, PartialEq)]
pub struct UnboundName {
    /// The name without a binding.
    pub name: String,
}

impl ErrorKind for UnboundName {
    fn message(&self) -> String {
        format!("`{}` is not defined", self.name)
    }

    fn build_report<'a>(&self, src_id: &'a str, spans: &[Range<usize>]) -> Report<'_, (&'a str, Range<usize>)> {
        build_report(src_id, spans, self.message(), &["this name".to_string()], None)
    }
}

/// A numeric literal could not be converted into a number.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidNumber {
    /// The literal as written.
    pub literal: String,
}

impl ErrorKind for InvalidNumber {
    fn message(&self) -> String {
        format!("`{}` is not a valid number", self.literal)
    }

    fn build_report<'a>(&self, src_id: &'a str, spans: &[Range<usize>]) -> Report<'_, (&'a str, Range<usize>)> {
        build_report(src_id, spans, self.message(), &["this literal".to_string()], None)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn unknown_function_message() {
        let err = UnknownFunction {
            name: "son".to_string(),
            suggestions: vec!["sin".to_string()],
        };
        assert_eq!(err.message(), "`son` is not a function (did you mean `sin`?)");

        let err = UnknownFunction { name: "f".to_string(), suggestions: vec![] };
        assert_eq!(err.message(), "`f` is not a function");
    }

    #[test]
    fn argument_count_message() {
        let err = WrongArgumentCount { name: "sin".to_string(), expected: "1", given: 2 };
        assert_eq!(err.message(), "the `sin` function takes 1 argument(s), but 2 were given");
    }
}
