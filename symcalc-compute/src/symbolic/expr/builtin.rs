//! The fixed functions and constants every expression can refer to.

use crate::consts;
use rug::Float;
use std::fmt;

/// A fixed function. These names are always bound and can never be shadowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Func {
    Sin,
    Cos,
    Tan,
    Cot,

    /// The natural logarithm. `log(a, b)` is accepted as the base-`b` logarithm, and is rewritten
    /// to `log(a)/log(b)` when it is bound.
    Log,

    Exp,
}

impl Func {
    /// Every fixed function.
    pub const ALL: [Func; 6] = [Func::Sin, Func::Cos, Func::Tan, Func::Cot, Func::Log, Func::Exp];

    /// The name of the function, as written in expressions.
    pub fn name(self) -> &'static str {
        match self {
            Func::Sin => "sin",
            Func::Cos => "cos",
            Func::Tan => "tan",
            Func::Cot => "cot",
            Func::Log => "log",
            Func::Exp => "exp",
        }
    }

    /// Finds the function with the given name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|func| func.name() == name)
    }

    /// Returns true if the function accepts the given number of arguments.
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Func::Log => count == 1 || count == 2,
            _ => count == 1,
        }
    }

    /// A description of the accepted argument counts, for error messages.
    pub fn arity(self) -> &'static str {
        match self {
            Func::Log => "1 or 2",
            _ => "1",
        }
    }

    /// Evaluates the function numerically.
    pub fn approximate(self, arg: Float) -> Float {
        match self {
            Func::Sin => arg.sin(),
            Func::Cos => arg.cos(),
            Func::Tan => arg.tan(),
            Func::Cot => arg.cot(),
            Func::Log => arg.ln(),
            Func::Exp => arg.exp(),
        }
    }
}

impl fmt::Display for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A fixed constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Constant {
    /// The ratio of a circle's circumference to its diameter.
    Pi,

    /// Euler's number.
    E,
}

impl Constant {
    /// Every fixed constant.
    pub const ALL: [Constant; 2] = [Constant::Pi, Constant::E];

    /// The name of the constant, as written in expressions.
    pub fn name(self) -> &'static str {
        match self {
            Constant::Pi => "pi",
            Constant::E => "E",
        }
    }

    /// Finds the constant with the given name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|constant| constant.name() == name)
    }

    /// The numeric value of the constant.
    pub fn approximate(self) -> Float {
        match self {
            Constant::Pi => consts::PI.clone(),
            Constant::E => consts::E.clone(),
        }
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
