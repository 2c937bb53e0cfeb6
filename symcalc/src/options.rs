//! Options that change how operations are applied.

use crate::{error::Error, operation::Operation};

/// The variable `differentiate` is taken with respect to, unless configured otherwise.
pub const DEFAULT_VARIABLE: &str = "x";

/// What the `clear` operation does with the stored answer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ClearPolicy {
    /// Clearing resets the input and output, but `Ans` keeps referring to the last result.
    ///
    /// This is the default option.
    #[default]
    KeepAnswer,

    /// Clearing also forgets the last result, so `Ans` becomes a free symbol again.
    ResetAnswer,
}

/// Options that change how operations are applied.
///
/// To create an [`Options`] struct, use [`OptionsBuilder`] or [`Options::default`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// What `clear` does with the stored answer. See [`ClearPolicy`].
    pub clear_policy: ClearPolicy,

    /// The variable the `differentiate` and `diff` keys differentiate with respect to, when keys
    /// are parsed with [`Options::operation`]. Defaults to `x`. A `d/d<name>` key always uses the
    /// variable it names.
    pub variable: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            clear_policy: ClearPolicy::default(),
            variable: DEFAULT_VARIABLE.to_string(),
        }
    }
}

impl Options {
    /// Parses an operation key, binding the configured variable to `differentiate`.
    pub fn operation(&self, key: &str) -> Result<Operation, Error> {
        Operation::parse_with_variable(key, &self.variable)
    }
}

/// Helper struct to build an [`Options`] struct.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OptionsBuilder(Options);

impl OptionsBuilder {
    /// Creates a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets what `clear` does with the stored answer. See [`ClearPolicy`] for more information.
    pub fn clear_policy(mut self, clear_policy: ClearPolicy) -> Self {
        self.0.clear_policy = clear_policy;
        self
    }

    /// Sets the variable to differentiate with respect to.
    pub fn variable(mut self, variable: impl Into<String>) -> Self {
        self.0.variable = variable.into();
        self
    }

    /// Builds the [`Options`] struct.
    pub fn build(self) -> Options {
        self.0
    }
}
