/// A rule that was applied while transforming an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `(a+b)+c = a+b+c`, `(a*b)*c = a*b*c`
    Flatten,

    /// `a+0 = a`
    AddZero,

    /// `2a+3a = 5a`, `1+2 = 3`
    CombineLikeTerms,

    /// `a*0 = 0`
    MultiplyZero,

    /// `2*3*a = 6a`, `1*a = a`
    MultiplyNumbers,

    /// `a*a = a^2`
    CombineLikeFactors,

    /// `2^(1/2)*3^(1/2) = 6^(1/2)`
    CombineRoots,

    /// `a^0 = 1`
    PowerZero,

    /// `a^1 = a`
    PowerOne,

    /// `1^a = 1`
    PowerOfOne,

    /// `0^a = 0`, for positive `a`
    PowerOfZero,

    /// `(a^b)^c = a^(b*c)`, for integer `c`
    PowerOfPower,

    /// `2^3 = 8`
    EvaluatePower,

    /// `E^a = exp(a)`
    PowerOfE,

    /// `(a*b)^c = a^c * b^c`, for integer `c`
    DistributePower,

    /// `12^(1/2) = 2*3^(1/2)`
    ExtractRoot,

    /// `(2/3)^a = 2^a * 3^-a`
    SplitFractionPower,

    /// Exact values of `sin`.
    Sin,

    /// Exact values of `cos`.
    Cos,

    /// Exact values of `tan`.
    Tan,

    /// Exact values of `cot`.
    Cot,

    /// `sin(-a) = -sin(a)`, `cos(-a) = cos(a)`, etc.
    TrigParity,

    /// `log(1) = 0`, `log(E) = 1`
    LogConstant,

    /// `log(exp(a)) = a`, `exp(log(a)) = a`
    LogExpInverse,

    /// `exp(0) = 1`, `exp(1) = E`
    ExpConstant,

    /// A function call with approximate arguments was evaluated numerically.
    Approximate,

    /// `sin(a)^2 + cos(a)^2 = 1`
    PythagoreanIdentity,

    /// `exp(a)*exp(b) = exp(a+b)`
    CombineExp,

    /// `log(a^n) = n*log(a)`
    LogPower,

    /// `a*(b+c) = a*b + a*c`
    DistributiveProperty,

    /// `(a+b)^2 = a^2 + 2ab + b^2`
    ExpandPower,
}
