//! Functions to construct [`Integer`]s, [`Rational`]s and [`Float`]s from various types.

use rug::{Assign, Float, Integer, Rational};

/// The number of digits of precision to use when computing values.
pub const PRECISION: u32 = 1 << 9;

/// Creates an [`Integer`] with the given value.
pub fn int<T>(n: T) -> Integer
where
    Integer: From<T>,
{
    Integer::from(n)
}

/// Creates a [`Rational`] with the given value.
pub fn rational<T>(n: T) -> Rational
where
    Rational: From<T>,
{
    Rational::from(n)
}

/// Creates a [`Float`] with the given value.
pub fn float<T>(n: T) -> Float
where
    Float: Assign<T>,
{
    Float::with_val(PRECISION, n)
}

/// Creates a [`Rational`] from a string of decimal digits.
pub fn rational_from_digits(s: &str) -> Option<Rational> {
    Integer::from_str_radix(s, 10).ok().map(Rational::from)
}

/// Creates a [`Float`] from a decimal literal, with an optional exponent. Literals such as `3.`,
/// `.5` and `3.e2` are accepted.
pub fn float_from_str(s: &str) -> Option<Float> {
    let (mantissa, exponent) = match s.find(['e', 'E']) {
        Some(i) => s.split_at(i),
        None => (s, ""),
    };

    let mut text = mantissa.to_string();
    if text.starts_with('.') {
        text.insert(0, '0');
    }
    if text.ends_with('.') {
        text.push('0');
    }
    text.push_str(exponent);

    Float::parse(&text).ok().map(|parsed| Float::with_val(PRECISION, parsed))
}
