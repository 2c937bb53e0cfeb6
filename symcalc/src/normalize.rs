//! Rewrites raw input into the syntax the parser accepts.

use once_cell::sync::Lazy;
use regex::Regex;
use std::{fmt, ops::Deref};

/// `ln(` as a whole word, with optional whitespace before the parenthesis.
static LN_CALL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bln\s*\(").expect("valid regex")
});

/// A trigonometric function applied to a single, optionally signed, decimal literal.
static DEGREE_CALL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(sin|cos|tan|cot)\(\s*([+-]?\d+(?:\.\d+)?)\s*\)").expect("valid regex")
});

/// Normalized expression text.
///
/// The text contains no `^` (powers are written `**`), no call of `ln` (it is written `log`), and
/// no trigonometric call whose argument is a bare number: those arguments are taken to be degrees
/// and converted to radians, so `sin(30)` becomes `sin(pi*(30)/180)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Normalized(String);

impl Normalized {
    /// Returns the normalized text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Normalized {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Normalized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalizes raw input. The rewrites are applied in this order:
///
/// 1. Leading and trailing whitespace is trimmed.
/// 2. `^` is replaced with `**`.
/// 3. `ln(` is replaced with `log(`, unless `ln` is the end of a longer name.
/// 4. `sin`, `cos`, `tan` and `cot` applied to a bare number `N` are rewritten to take
///    `pi*(N)/180`.
///
/// None of the rewrites produces text that an earlier one would match, so normalizing twice gives
/// the same result as normalizing once. Normalization never fails; text that is not a valid
/// expression is left for the parser to reject.
pub fn normalize(raw: &str) -> Normalized {
    let text = raw.trim().replace('^', "**");
    let text = LN_CALL.replace_all(&text, "log(");
    let text = DEGREE_CALL.replace_all(&text, "${1}(pi*(${2})/180)");
    Normalized(text.into_owned())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn trims_and_rewrites_powers() {
        assert_eq!(normalize("  2^3 ").as_str(), "2**3");
        assert_eq!(normalize("x^2^3").as_str(), "x**2**3");
    }

    #[test]
    fn natural_log_alias() {
        assert_eq!(normalize("ln(2)").as_str(), "log(2)");
        assert_eq!(normalize("ln (x) + 1").as_str(), "log(x) + 1");
        assert_eq!(normalize("2*ln(x)").as_str(), "2*log(x)");

        // only whole words
        assert_eq!(normalize("kln(x)").as_str(), "kln(x)");
        assert_eq!(normalize("ln2(x)").as_str(), "ln2(x)");
    }

    #[test]
    fn degree_arguments() {
        assert_eq!(normalize("sin(30)").as_str(), "sin(pi*(30)/180)");
        assert_eq!(normalize("cos( -45.5 )").as_str(), "cos(pi*(-45.5)/180)");
        assert_eq!(
            normalize("sin(30)+cos(60)").as_str(),
            "sin(pi*(30)/180)+cos(pi*(60)/180)",
        );
        assert_eq!(normalize("tan(+15)*cot(15)").as_str(), "tan(pi*(+15)/180)*cot(pi*(15)/180)");
    }

    #[test]
    fn non_literal_arguments_are_untouched() {
        assert_eq!(normalize("sin(x)").as_str(), "sin(x)");
        assert_eq!(normalize("sin(x+30)").as_str(), "sin(x+30)");
        assert_eq!(normalize("sin(30+x)").as_str(), "sin(30+x)");
        assert_eq!(normalize("sin (30)").as_str(), "sin (30)");
        assert_eq!(normalize("asin(30)").as_str(), "asin(30)");
        assert_eq!(normalize("sin(sin(30)*2)").as_str(), "sin(sin(pi*(30)/180)*2)");
    }

    #[test]
    fn idempotent() {
        let sources = [
            "sin(30) + ln(x)^2",
            "  cos(-60)*tan(45.0) ",
            "ln (ln(2))",
            "x^y^z",
            "",
        ];
        for source in sources {
            let once = normalize(source);
            let twice = normalize(&once);
            assert_eq!(once, twice);
        }
    }
}
