//! The operations a user can apply to an expression.

use crate::{error::Error, options::DEFAULT_VARIABLE};
use levenshtein::levenshtein;
use std::{fmt, str::FromStr};

/// An operation applied to the bound expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Returns the bound expression, which the engine has already evaluated.
    Evaluate,

    /// Differentiates with respect to the free symbol `var`.
    Differentiate { var: String },

    Simplify,
    Expand,
    Factor,

    /// Clears the input and output. No expression is parsed.
    Clear,
}

/// Every accepted key, with the operation it selects. The canonical key of each operation comes
/// first. `d/d<var>` is accepted as well, see [`Operation::parse_with_variable`].
const KEYS: [(&str, OperationKind); 13] = [
    ("evaluate", OperationKind::Evaluate),
    ("differentiate", OperationKind::Differentiate),
    ("simplify", OperationKind::Simplify),
    ("expand", OperationKind::Expand),
    ("factor", OperationKind::Factor),
    ("clear", OperationKind::Clear),
    ("=", OperationKind::Evaluate),
    ("eval", OperationKind::Evaluate),
    ("diff", OperationKind::Differentiate),
    ("упростить", OperationKind::Simplify),
    ("раскрыть", OperationKind::Expand),
    ("разложить", OperationKind::Factor),
    ("очистить", OperationKind::Clear),
];

/// The largest edit distance between an unknown key and a suggested one.
const MAX_SUGGESTION_DISTANCE: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OperationKind {
    Evaluate,
    Differentiate,
    Simplify,
    Expand,
    Factor,
    Clear,
}

/// Returns the accepted key closest to `key`, if it is close enough to be a likely typo.
fn suggest(key: &str) -> Option<&'static str> {
    KEYS.iter()
        .map(|(candidate, _)| (levenshtein(candidate, key), *candidate))
        .filter(|(distance, _)| *distance <= MAX_SUGGESTION_DISTANCE)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate)
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().map_or(false, |c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl Operation {
    /// Parses an operation key. `differentiate` and `diff` differentiate with respect to `var`,
    /// while `d/d<name>` names its own variable: `d/dt` always differentiates with respect to `t`.
    pub fn parse_with_variable(key: &str, var: &str) -> Result<Self, Error> {
        let key = key.trim();
        if let Some(name) = key.strip_prefix("d/d").filter(|name| is_identifier(name)) {
            return Ok(Self::Differentiate { var: name.to_string() });
        }

        let kind = KEYS.iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(key))
            .map(|(_, kind)| *kind)
            .ok_or_else(|| Error::UnknownOperation {
                key: key.to_string(),
                suggestion: suggest(&key.to_ascii_lowercase()),
            })?;

        Ok(match kind {
            OperationKind::Evaluate => Self::Evaluate,
            OperationKind::Differentiate => Self::Differentiate { var: var.to_string() },
            OperationKind::Simplify => Self::Simplify,
            OperationKind::Expand => Self::Expand,
            OperationKind::Factor => Self::Factor,
            OperationKind::Clear => Self::Clear,
        })
    }

    /// Returns the canonical key of the operation.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Evaluate => "evaluate",
            Self::Differentiate { .. } => "differentiate",
            Self::Simplify => "simplify",
            Self::Expand => "expand",
            Self::Factor => "factor",
            Self::Clear => "clear",
        }
    }
}

/// Parses an operation key, differentiating with respect to `x`.
impl FromStr for Operation {
    type Err = Error;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Self::parse_with_variable(key, DEFAULT_VARIABLE)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Differentiate { var } => write!(f, "d/d{}", var),
            other => f.write_str(other.key()),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn canonical_keys() {
        for op in [
            Operation::Evaluate,
            Operation::Differentiate { var: "x".to_string() },
            Operation::Simplify,
            Operation::Expand,
            Operation::Factor,
            Operation::Clear,
        ] {
            assert_eq!(op.key().parse::<Operation>().unwrap(), op);
        }
    }

    #[test]
    fn aliases() {
        assert_eq!("=".parse::<Operation>().unwrap(), Operation::Evaluate);
        assert_eq!("EVAL".parse::<Operation>().unwrap(), Operation::Evaluate);
        assert_eq!(
            "d/dx".parse::<Operation>().unwrap(),
            Operation::Differentiate { var: "x".to_string() },
        );
        assert_eq!("разложить".parse::<Operation>().unwrap(), Operation::Factor);
    }

    #[test]
    fn derivative_keys_name_their_variable() {
        let op = Operation::parse_with_variable("d/dt", "x").unwrap();
        assert_eq!(op, Operation::Differentiate { var: "t".to_string() });
        assert_eq!(op.to_string().parse::<Operation>().unwrap(), op);

        assert_eq!(
            Operation::parse_with_variable("diff", "t").unwrap(),
            Operation::Differentiate { var: "t".to_string() },
        );
        assert!("d/d2".parse::<Operation>().is_err());
        assert!("d/d".parse::<Operation>().is_err());
    }

    #[test]
    fn unknown_key_with_suggestion() {
        match "simplfy".parse::<Operation>() {
            Err(Error::UnknownOperation { key, suggestion }) => {
                assert_eq!(key, "simplfy");
                assert_eq!(suggestion, Some("simplify"));
            },
            other => panic!("expected an unknown operation, got {:?}", other),
        }
    }

    #[test]
    fn unknown_key_without_suggestion() {
        match "integrate".parse::<Operation>() {
            Err(Error::UnknownOperation { suggestion, .. }) => assert_eq!(suggestion, None),
            other => panic!("expected an unknown operation, got {:?}", other),
        }
    }
}
