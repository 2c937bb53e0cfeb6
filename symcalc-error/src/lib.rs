//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages.
//!
//! Every error produced while resolving an expression carries the regions of the source code it
//! originated from. The [`Error`] type pairs those regions with a boxed [`ErrorKind`], which knows
//! how to describe itself both as a one-line message and as a full [`ariadne`] report.

use ariadne::{Color, Label, Report, ReportKind, Source};
use std::{fmt::{self, Debug}, io, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send + Sync {
    /// A one-line description of the error, without any source context.
    fn message(&self) -> String;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'_, (&'a str, Range<usize>)>;
}

/// Builds a report in the style shared by every error kind: the message as the title, one label
/// per span (in order), and an optional help line.
///
/// Extra labels are ignored; spans without a label are still highlighted.
pub fn build_report<'a, 'r>(
    src_id: &'a str,
    spans: &[Range<usize>],
    message: impl ToString,
    labels: &[String],
    help: Option<String>,
) -> Report<'r, (&'a str, Range<usize>)> {
    let offset = spans.first().map_or(0, |span| span.start);
    let mut builder = Report::build(ReportKind::Error, src_id, offset)
        .with_message(message)
        .with_labels(spans.iter().enumerate().map(|(i, span)| {
            let label = Label::new((src_id, span.clone())).with_color(EXPR);
            match labels.get(i) {
                Some(text) if !text.is_empty() => label.with_message(text),
                _ => label,
            }
        }));

    if let Some(help) = help {
        builder.set_help(help);
    }

    builder.finish()
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Returns the one-line message of this error.
    pub fn message(&self) -> String {
        self.kind.message()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<'_, (&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Writes the report of this error, rendered against the given source, into `out`.
    pub fn write_report(&self, src_id: &str, input: &str, out: impl io::Write) -> io::Result<()> {
        self.build_report(src_id).write((src_id, Source::from(input)), out)
    }

    /// Prints the report of this error to stderr.
    ///
    /// The `ariadne` crate's [`Report`] type does not have a `Display` implementation, so we can
    /// only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        self.build_report(src_id).eprint((src_id, Source::from(input)))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.message())
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[derive(Debug)]
    struct MissingOperand;

    impl ErrorKind for MissingOperand {
        fn message(&self) -> String {
            "missing operand".to_string()
        }

        fn build_report<'a>(
            &self,
            src_id: &'a str,
            spans: &[Range<usize>],
        ) -> Report<'_, (&'a str, Range<usize>)> {
            build_report(
                src_id,
                spans,
                self.message(),
                &["add an operand here".to_string()],
                Some("every operator needs two operands".to_string()),
            )
        }
    }

    fn render(err: &Error, input: &str) -> String {
        let mut buf = Vec::new();
        err.write_report("input", input, &mut buf).unwrap();
        String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap()
    }

    #[test]
    fn display_uses_message() {
        let err = Error::new(vec![2..3], MissingOperand);
        assert_eq!(err.to_string(), "missing operand");
    }

    #[test]
    fn report_contains_label_and_help() {
        let err = Error::new(vec![1..2], MissingOperand);
        let rendered = render(&err, "2+");

        assert!(rendered.contains("missing operand"), "{rendered}");
        assert!(rendered.contains("add an operand here"), "{rendered}");
        assert!(rendered.contains("every operator needs two operands"), "{rendered}");
    }
}
