use std::{fmt, io};
use symcalc_error::Error as EngineError;

/// The source id used when rendering reports.
const SRC_ID: &str = "input";

/// Errors that can occur while applying an operation.
///
/// None of them is fatal: the caller's [`Answer`](crate::Answer) is left as it was, and the next
/// request can proceed normally.
#[derive(Debug)]
pub enum Error {
    /// The normalized text could not be parsed or resolved into an expression.
    Parse {
        /// The text as the user typed it.
        raw: String,

        /// The text after normalization. The spans of `error` point into this text.
        normalized: String,

        /// The engine's message.
        message: String,

        /// The engine's error, with the regions of `normalized` it originated from.
        error: EngineError,
    },

    /// The operation key is not one of the known keys.
    UnknownOperation {
        key: String,

        /// The closest known key, if it is a likely typo.
        suggestion: Option<&'static str>,
    },

    /// The engine could not differentiate the expression symbolically.
    Derivative {
        raw: String,
        message: String,
    },
}

impl Error {
    pub(crate) fn parse(raw: &str, normalized: &str, error: EngineError) -> Self {
        Self::Parse {
            raw: raw.to_string(),
            normalized: normalized.to_string(),
            message: error.message(),
            error,
        }
    }

    /// Writes a report of this error into `out`. Parse errors are rendered with [`ariadne`]
    /// against the normalized text; other errors are written as a single line.
    ///
    /// [`ariadne`]: https://docs.rs/ariadne
    pub fn write_report(&self, mut out: impl io::Write) -> io::Result<()> {
        match self {
            Self::Parse { normalized, error, .. } => error.write_report(SRC_ID, normalized, out),
            other => writeln!(out, "Error: {}", other),
        }
    }

    /// Report this error to stderr.
    ///
    /// The `ariadne` crate's [`Report`] type does not have a `Display` implementation, so we can
    /// only use its `eprint` method to print to stderr.
    ///
    /// [`Report`]: https://docs.rs/ariadne/latest/ariadne/struct.Report.html
    pub fn report_to_stderr(&self) -> io::Result<()> {
        match self {
            Self::Parse { normalized, error, .. } => error.report_to_stderr(SRC_ID, normalized),
            other => other.write_report(io::stderr()),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse { raw, message, .. } => write!(f, "cannot parse `{}`: {}", raw, message),
            Self::UnknownOperation { key, suggestion: Some(suggestion) } => {
                write!(f, "unknown operation `{}` (did you mean `{}`?)", key, suggestion)
            },
            Self::UnknownOperation { key, suggestion: None } => {
                write!(f, "unknown operation `{}`", key)
            },
            Self::Derivative { raw, message } => {
                write!(f, "cannot differentiate `{}`: {}", raw, message)
            },
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse { error, .. } => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::{apply, Answer, Operation, Options};
    use super::*;

    fn report(err: &Error) -> String {
        let mut buf = Vec::new();
        err.write_report(&mut buf).unwrap();
        String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap()
    }

    #[test]
    fn parse_error_points_into_normalized_text() {
        let err = apply(Operation::Evaluate, "son(2^2)", &Answer::empty(), &Options::default())
            .unwrap_err();
        let Error::Parse { raw, normalized, message, .. } = &err else {
            panic!("expected a parse error, got {:?}", err);
        };
        assert_eq!(raw, "son(2^2)");
        assert_eq!(normalized, "son(2**2)");
        assert!(message.contains("son"));

        let report = report(&err);
        assert!(report.contains("son(2**2)"));
        assert!(report.contains("sin"));
    }

    #[test]
    fn single_line_errors() {
        let err = "fctor".parse::<Operation>().unwrap_err();
        assert_eq!(err.to_string(), "unknown operation `fctor` (did you mean `factor`?)");
        assert_eq!(report(&err), "Error: unknown operation `fctor` (did you mean `factor`?)\n");
    }
}
