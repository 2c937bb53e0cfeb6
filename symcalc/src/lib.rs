//! The core of `symcalc`: turns a line of user input into the result of an operation.
//!
//! A request goes through three stages:
//!
//! 1. The [`normalize`] stage rewrites the raw text into the syntax the parser accepts: `^` becomes
//!    `**`, `ln(` becomes `log(`, and trigonometric calls with a bare number as their argument
//!    take that number in degrees.
//! 2. The [`bind`] stage resolves every name: the fixed functions and constants, `Ans` for the
//!    previous answer, and a free symbol for everything else. The engine then parses and
//!    evaluates the text.
//! 3. The dispatcher, [`apply`], runs the selected [`Operation`] on the result.
//!
//! The previous answer is explicit state. [`apply`] borrows the caller's [`Answer`] and returns
//! the updated one on success, so a failed request can never change it. [`Session`] bundles the
//! answer with the [`Options`] for callers that do not want to thread it through themselves.
//!
//! ```
//! use symcalc::{Answer, Operation, Options};
//!
//! let options = Options::default();
//! let first = symcalc::apply(Operation::Evaluate, "2+2", &Answer::empty(), &options).unwrap();
//! assert_eq!(first.display, "4");
//!
//! let second = symcalc::apply(Operation::Evaluate, "Ans+1", &first.answer, &options).unwrap();
//! assert_eq!(second.display, "5");
//! ```

mod answer;
pub mod bind;
mod engine;
pub mod error;
pub mod normalize;
pub mod operation;
pub mod options;

pub use answer::Answer;
pub use engine::Engine;
pub use error::Error;
pub use normalize::{normalize, Normalized};
pub use operation::Operation;
pub use options::{ClearPolicy, Options, OptionsBuilder};
pub use symcalc_compute::{Cas, SymExpr};

use log::debug;

/// The outcome of a successful [`apply`].
#[derive(Debug, Clone, PartialEq)]
pub struct Applied {
    /// The result of the operation. [`None`] for [`Operation::Clear`].
    pub value: Option<SymExpr>,

    /// The plain-text rendering of `value`, or an empty string if there is none.
    pub display: String,

    /// A LaTeX explanation of how the result was obtained. Only differentiation has one.
    pub explanation: Option<String>,

    /// The answer the next request should be applied with.
    pub answer: Answer,
}

/// Builds the explanation of a derivative: `\frac{d}{dx}\left(f\right) = f'`.
fn explain_derivative<E: Engine + ?Sized>(engine: &E, var: &str, expr: &SymExpr, derivative: &SymExpr) -> String {
    format!(
        "\\frac{{d}}{{d{}}}\\left({}\\right) = {}",
        var,
        engine.render_markup(expr),
        engine.render_markup(derivative),
    )
}

/// Applies the operation to the raw text with the [`Cas`] engine.
///
/// See [`apply_with`] for details.
pub fn apply(op: Operation, raw: &str, answer: &Answer, options: &Options) -> Result<Applied, Error> {
    apply_with(&Cas, op, raw, answer, options)
}

/// Applies the operation to the raw text with the given engine.
///
/// Every operation but [`Operation::Clear`] normalizes the text, binds it against the answer, and
/// transforms the result; the result becomes the new answer. [`Operation::Clear`] parses nothing,
/// and keeps or empties the answer depending on [`Options::clear_policy`].
pub fn apply_with<E: Engine + ?Sized>(
    engine: &E,
    op: Operation,
    raw: &str,
    answer: &Answer,
    options: &Options,
) -> Result<Applied, Error> {
    debug!("applying `{}` to `{}`", op, raw);

    let bound = || {
        let normalized = normalize(raw);
        debug!("normalized: `{}`", normalized);
        bind::bind(engine, &normalized, answer)
            .map_err(|err| Error::parse(raw, &normalized, err))
    };

    let (value, explanation) = match op {
        Operation::Clear => {
            let answer = match options.clear_policy {
                ClearPolicy::KeepAnswer => answer.clone(),
                ClearPolicy::ResetAnswer => Answer::empty(),
            };
            return Ok(Applied {
                value: None,
                display: String::new(),
                explanation: None,
                answer,
            });
        },
        Operation::Evaluate => (bound()?, None),
        Operation::Differentiate { var } => {
            let expr = bound()?;
            let derivative = engine.differentiate(&expr, &var)
                .map_err(|err| Error::Derivative {
                    raw: raw.to_string(),
                    message: err.to_string(),
                })?;
            let explanation = explain_derivative(engine, &var, &expr, &derivative);
            (derivative, Some(explanation))
        },
        Operation::Simplify => (engine.simplify(&bound()?), None),
        Operation::Expand => (engine.expand(&bound()?), None),
        Operation::Factor => (engine.factor(&bound()?), None),
    };

    let display = engine.render_display(&value);
    debug!("result: `{}`", display);
    Ok(Applied {
        display,
        explanation,
        answer: Answer::new(value.clone()),
        value: Some(value),
    })
}

/// The state a shell keeps between requests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub answer: Answer,
    pub options: Options,
}

impl Session {
    /// Creates a session with an empty answer.
    pub fn new(options: Options) -> Self {
        Self {
            answer: Answer::empty(),
            options,
        }
    }

    /// Parses an operation key with this session's options.
    pub fn operation(&self, key: &str) -> Result<Operation, Error> {
        self.options.operation(key)
    }

    /// Applies the operation, and stores the new answer if it succeeds.
    pub fn apply(&mut self, op: Operation, raw: &str) -> Result<Applied, Error> {
        let applied = apply(op, raw, &self.answer, &self.options)?;
        self.answer = applied.answer.clone();
        Ok(applied)
    }
}
