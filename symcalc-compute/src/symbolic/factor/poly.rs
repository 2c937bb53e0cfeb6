//! Univariate polynomials with integer coefficients, and their linear factors over the rationals.

use crate::primitive::{int, rational};
use crate::symbolic::expr::{Primary, SymExpr};
use rug::{Integer, Rational};

/// Coefficients with a larger magnitude than this are not searched for rational roots.
const MAX_ROOT_SEARCH: u64 = 1_000_000_000_000;

/// A univariate polynomial with integer coefficients.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    /// The name of the variable.
    pub var: String,

    /// `coeffs[i]` is the coefficient of `var^i`. The last coefficient is non-zero.
    pub coeffs: Vec<Integer>,
}

/// A factor `q*var - p` of a polynomial, where `p/q` is a rational root in lowest terms.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearFactor {
    pub root: Rational,
    pub multiplicity: u32,
}

impl Polynomial {
    /// Builds a polynomial from the terms of a sum. Every term must be an integer multiple of a
    /// non-negative integer power of the same free symbol.
    pub fn from_terms(terms: &[SymExpr]) -> Option<Self> {
        let mut var: Option<String> = None;
        let mut coeffs: Vec<Integer> = Vec::new();

        for term in terms {
            let (coefficient, rest) = term.split_coefficient();
            let coefficient = coefficient.as_rational()?;
            if *coefficient.denom() != 1 {
                return None;
            }

            let (name, power) = if rest.is_one() {
                (None, 0)
            } else {
                let (base, exponent) = rest.split_power();
                let power = exponent.as_integer()?.to_usize()?;
                (Some(base.as_symbol()?.to_string()), power)
            };

            if let Some(name) = name {
                match &var {
                    Some(existing) if *existing != name => return None,
                    Some(_) => (),
                    None => var = Some(name),
                }
            }

            if coeffs.len() <= power {
                coeffs.resize(power + 1, int(0));
            }
            coeffs[power] += coefficient.numer();
        }

        while coeffs.last().map_or(false, |c| *c == 0) {
            coeffs.pop();
        }

        Some(Self {
            var: var?,
            coeffs,
        })
    }

    /// Returns the degree of the polynomial.
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    /// Evaluates the polynomial at the given value.
    pub fn eval(&self, x: &Rational) -> Rational {
        // Horner's method
        self.coeffs.iter()
            .rev()
            .fold(rational(0), |acc, c| acc * x + Rational::from(c))
    }

    /// Divides the polynomial by `q*var - p`, where `root = p/q` is a root of the polynomial.
    /// Returns [`None`] if the result does not have integer coefficients.
    fn divide_root(&self, root: &Rational) -> Option<Self> {
        // synthetic division by `var - root`, from the highest coefficient down
        let mut quotient = vec![rational(0); self.degree()];
        let mut carry = rational(0);
        for (i, c) in self.coeffs.iter().enumerate().rev().take(self.degree()) {
            carry = carry * root + Rational::from(c);
            quotient[i - 1] = carry.clone();
        }

        // the quotient by `var - root` is `q` times the quotient by `q*var - p`
        let q = Rational::from(root.denom().clone());
        let coeffs = quotient.into_iter()
            .map(|c| {
                let c = c / &q;
                (*c.denom() == 1).then(|| c.numer().clone())
            })
            .collect::<Option<Vec<_>>>()?;

        Some(Self { var: self.var.clone(), coeffs })
    }

    /// Returns the candidate rational roots `±p/q`, where `p` divides the constant coefficient and
    /// `q` divides the leading coefficient, in increasing order.
    fn candidate_roots(&self) -> Vec<Rational> {
        let (Some(constant), Some(leading)) = (self.coeffs.first(), self.coeffs.last()) else {
            return Vec::new();
        };
        if *constant == 0 {
            return vec![rational(0)];
        }

        let (Some(ps), Some(qs)) = (divisors(constant), divisors(leading)) else {
            return Vec::new();
        };

        let mut candidates = Vec::new();
        for p in &ps {
            for q in &qs {
                let r = Rational::from((p.clone(), q.clone()));
                candidates.push(-r.clone());
                candidates.push(r);
            }
        }
        candidates.sort();
        candidates.dedup();
        candidates
    }

    /// Splits the polynomial into linear factors over the rationals, and the remaining factor that
    /// has no rational roots.
    pub fn linear_factors(mut self) -> (Vec<LinearFactor>, Polynomial) {
        let mut factors = Vec::new();
        for root in self.candidate_roots() {
            let mut multiplicity = 0;
            while self.degree() >= 1 && self.eval(&root) == 0 {
                match self.divide_root(&root) {
                    Some(quotient) => {
                        self = quotient;
                        multiplicity += 1;
                    },
                    None => break,
                }
            }

            if multiplicity > 0 {
                factors.push(LinearFactor { root, multiplicity });
            }
        }

        (factors, self)
    }

    /// Converts the polynomial into a sum.
    pub fn into_expr(self) -> SymExpr {
        let var = SymExpr::symbol(self.var);
        let terms = self.coeffs.into_iter()
            .enumerate()
            .filter(|(_, c)| *c != 0)
            .map(|(power, c)| {
                let monomial = match power {
                    0 => return SymExpr::integer(c),
                    1 => var.clone(),
                    _ => var.clone().pow(SymExpr::integer(power as u64)),
                };
                if c == 1 {
                    monomial
                } else {
                    SymExpr::integer(c) * monomial
                }
            })
            .collect::<Vec<_>>();
        SymExpr::Add(terms).downgrade()
    }
}

impl LinearFactor {
    /// Builds the factor `q*var - p` as an expression.
    pub fn to_expr(&self, var: &str) -> SymExpr {
        let var = SymExpr::symbol(var);
        let q = self.root.denom();
        let p = self.root.numer();
        let lead = if *q == 1 {
            var
        } else {
            SymExpr::integer(q.clone()) * var
        };
        if *p == 0 {
            lead
        } else {
            SymExpr::Add(vec![lead, SymExpr::Primary(Primary::Rational(Rational::from(-p.clone())))])
        }
    }
}

/// Returns the positive divisors of `n`, or [`None`] if `n` is too large to search.
fn divisors(n: &Integer) -> Option<Vec<Integer>> {
    let n = n.clone().abs().to_u64().filter(|n| *n <= MAX_ROOT_SEARCH)?;
    let mut small = Vec::new();
    let mut large = Vec::new();
    let mut d = 1;
    while d * d <= n {
        if n % d == 0 {
            small.push(int(d));
            if d * d != n {
                large.push(int(n / d));
            }
        }
        d += 1;
    }
    small.extend(large.into_iter().rev());
    Some(small)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> SymExpr {
        SymExpr::symbol("x")
    }

    fn poly(coeffs: &[i32]) -> Polynomial {
        Polynomial {
            var: "x".to_string(),
            coeffs: coeffs.iter().map(|c| int(*c)).collect(),
        }
    }

    #[test]
    fn from_sum() {
        let terms = [
            x().pow(SymExpr::integer(2)),
            SymExpr::integer(-3) * x(),
            SymExpr::integer(2),
        ];
        assert_eq!(Polynomial::from_terms(&terms), Some(poly(&[2, -3, 1])));

        let terms = [x(), SymExpr::symbol("y")];
        assert_eq!(Polynomial::from_terms(&terms), None);
    }

    #[test]
    fn divisors_of_twelve() {
        let expected = [1, 2, 3, 4, 6, 12].map(int).to_vec();
        assert_eq!(divisors(&int(-12)), Some(expected));
    }

    #[test]
    fn distinct_roots() {
        // x^2 - 3x + 2 = (x - 1)(x - 2)
        let (factors, rest) = poly(&[2, -3, 1]).linear_factors();
        assert_eq!(factors, vec![
            LinearFactor { root: rational(1), multiplicity: 1 },
            LinearFactor { root: rational(2), multiplicity: 1 },
        ]);
        assert_eq!(rest, poly(&[1]));
    }

    #[test]
    fn repeated_and_fractional_roots() {
        // 2x^3 - 3x^2 + 1 = (x - 1)^2 (2x + 1)
        let (factors, rest) = poly(&[1, 0, -3, 2]).linear_factors();
        assert_eq!(factors, vec![
            LinearFactor { root: rational((-1, 2)), multiplicity: 1 },
            LinearFactor { root: rational(1), multiplicity: 2 },
        ]);
        assert_eq!(rest, poly(&[1]));
        assert_eq!(
            factors[0].to_expr("x"),
            SymExpr::Add(vec![SymExpr::integer(2) * x(), SymExpr::integer(1)]),
        );
    }

    #[test]
    fn irreducible() {
        // x^2 + 1 has no rational roots
        let (factors, rest) = poly(&[1, 0, 1]).linear_factors();
        assert!(factors.is_empty());
        assert_eq!(rest.into_expr(), SymExpr::Add(vec![SymExpr::integer(1), x().pow(SymExpr::integer(2))]));
    }
}
