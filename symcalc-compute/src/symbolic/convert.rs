//! Conversion of a parsed [`Expr`] into a [`SymExpr`], resolving every name through a
//! [`SymbolTable`].

use crate::error::{DivisionByZero, InvalidNumber, MissingCall, UnboundName, UnknownFunction, WrongArgumentCount};
use crate::primitive::{float_from_str, rational_from_digits};
use std::ops::Range;
use symcalc_error::Error;
use symcalc_parser::parser::{
    ast::{Binary, Call, Expr, LitSym, Literal, Unary},
    token::op::{BinOpKind, UnaryOpKind},
};
use super::{
    bind::{Binding, SymbolTable},
    expr::{Func, Primary, SymExpr},
    simplify::evaluate,
};

/// Converts the given AST into a [`SymExpr`].
///
/// Every name in the AST must have an entry in the table. Names bound to a
/// [`Binding::Value`] are replaced by a copy of the value.
pub fn convert(expr: &Expr, table: &SymbolTable) -> Result<SymExpr, Error> {
    match expr {
        Expr::Literal(literal) => convert_literal(literal, table),
        Expr::Paren(paren) => convert(&paren.expr, table),
        Expr::Call(call) => convert_call(call, table),
        Expr::Unary(unary) => convert_unary(unary, table),
        Expr::Binary(binary) => convert_binary(binary, table),
    }
}

fn convert_literal(literal: &Literal, table: &SymbolTable) -> Result<SymExpr, Error> {
    match literal {
        Literal::Integer(int) => rational_from_digits(&int.value)
            .map(|r| SymExpr::Primary(Primary::Rational(r)))
            .ok_or_else(|| Error::new(vec![int.span.clone()], InvalidNumber {
                literal: int.value.clone(),
            })),
        Literal::Float(float) => float_from_str(&float.value)
            .map(|f| SymExpr::Primary(Primary::Float(f)))
            .ok_or_else(|| Error::new(vec![float.span.clone()], InvalidNumber {
                literal: float.value.clone(),
            })),
        Literal::Symbol(sym) => convert_name(sym, table),
    }
}

fn convert_name(sym: &LitSym, table: &SymbolTable) -> Result<SymExpr, Error> {
    match table.get(&sym.name) {
        Some(Binding::Function(func)) => Err(Error::new(vec![sym.span.clone()], MissingCall {
            name: func.name().to_string(),
        })),
        Some(Binding::Constant(constant)) => Ok(SymExpr::constant(*constant)),
        Some(Binding::Value(value)) => Ok(value.clone()),
        Some(Binding::Symbol(name)) => Ok(SymExpr::symbol(name.as_str())),
        None => Err(Error::new(vec![sym.span.clone()], UnboundName {
            name: sym.name.clone(),
        })),
    }
}

fn convert_unary(unary: &Unary, table: &SymbolTable) -> Result<SymExpr, Error> {
    let operand = convert(&unary.operand, table)?;
    match unary.op.kind {
        UnaryOpKind::Neg => Ok(-operand),
        UnaryOpKind::Pos => Ok(operand),
    }
}

/// Returns an error if the given divisor evaluates to zero.
fn check_divisor(divisor: &SymExpr, span: Range<usize>) -> Result<(), Error> {
    if evaluate(divisor).is_numeric_zero() {
        Err(Error::new(vec![span], DivisionByZero))
    } else {
        Ok(())
    }
}

fn convert_binary(binary: &Binary, table: &SymbolTable) -> Result<SymExpr, Error> {
    let lhs = convert(&binary.lhs, table)?;
    let rhs = convert(&binary.rhs, table)?;
    match binary.op.kind {
        BinOpKind::Add => Ok(lhs + rhs),
        BinOpKind::Sub => Ok(lhs - rhs),
        BinOpKind::Mul => Ok(lhs * rhs),
        BinOpKind::Div => {
            check_divisor(&rhs, binary.rhs.span())?;
            Ok(lhs / rhs)
        },
        BinOpKind::Exp => {
            let negative_exponent = evaluate(&rhs)
                .as_number()
                .map_or(false, |n| n.is_negative());
            if negative_exponent {
                check_divisor(&lhs, binary.lhs.span())?;
            }
            Ok(lhs.pow(rhs))
        },
    }
}

fn convert_call(call: &Call, table: &SymbolTable) -> Result<SymExpr, Error> {
    let func = match table.get(&call.name.name) {
        Some(Binding::Function(func)) => *func,
        _ => {
            return Err(Error::new(vec![call.span.clone()], UnknownFunction {
                name: call.name.name.clone(),
                suggestions: table.similar_functions(&call.name.name)
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            }));
        },
    };

    if !func.accepts(call.args.len()) {
        return Err(Error::new(vec![call.span.clone()], WrongArgumentCount {
            name: func.name().to_string(),
            expected: func.arity(),
            given: call.args.len(),
        }));
    }

    let mut args = call.args.iter()
        .map(|arg| convert(arg, table))
        .collect::<Result<Vec<_>, _>>()?;

    match (func, args.len()) {
        // log(a, b) = log(a) / log(b)
        (Func::Log, 2) => {
            let base = SymExpr::call(Func::Log, args.remove(1));
            check_divisor(&base, call.args[1].span())?;
            Ok(SymExpr::call(Func::Log, args.remove(0)) / base)
        },
        _ => Ok(SymExpr::Primary(Primary::Call(func, args))),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use symcalc_parser::parser::Parser;
    use super::*;

    fn convert_str(input: &str) -> Result<SymExpr, Error> {
        let mut table = SymbolTable::new();
        table.bind_symbol("x");
        table.bind_symbol("y");
        let ast = Parser::new(input).try_parse_full::<Expr>()?;
        convert(&ast, &table)
    }

    #[test]
    fn flattens_sums() {
        let expr = convert_str("x + (y + 2)").unwrap();
        assert_eq!(expr, SymExpr::Add(vec![
            SymExpr::symbol("x"),
            SymExpr::symbol("y"),
            SymExpr::integer(2),
        ]));
    }

    #[test]
    fn subtraction_and_division() {
        let expr = convert_str("x - y/2").unwrap();
        assert_eq!(
            expr,
            SymExpr::symbol("x") + -(SymExpr::symbol("y") * SymExpr::integer(2).recip()),
        );
    }

    #[test]
    fn two_argument_log() {
        let expr = convert_str("log(x, 2)").unwrap();
        assert_eq!(
            expr,
            SymExpr::call(Func::Log, SymExpr::symbol("x"))
                * SymExpr::call(Func::Log, SymExpr::integer(2)).recip(),
        );
    }

    #[test]
    fn values_are_substituted() {
        let mut table = SymbolTable::new();
        table.bind("Ans", Binding::Value(SymExpr::integer(4)));
        let ast = Parser::new("Ans").try_parse_full::<Expr>().unwrap();
        assert_eq!(convert(&ast, &table).unwrap(), SymExpr::integer(4));
    }

    #[test]
    fn unknown_function() {
        let err = convert_str("son(x)").unwrap_err();
        assert_eq!(err.message(), "`son` is not a function (did you mean `sin`?)");
        assert_eq!(err.spans, vec![0..6]);
    }

    #[test]
    fn function_without_call() {
        let err = convert_str("sin + 1").unwrap_err();
        assert_eq!(err.spans, vec![0..3]);
        assert_eq!(err.message(), "the `sin` function must be called with an argument");
    }

    #[test]
    fn wrong_argument_count() {
        let err = convert_str("cos(x, y)").unwrap_err();
        assert_eq!(err.message(), "the `cos` function takes 1 argument(s), but 2 were given");
    }

    #[test]
    fn division_by_zero() {
        let err = convert_str("1/0").unwrap_err();
        assert_eq!(err.spans, vec![2..3]);

        let err = convert_str("x/(2-2)").unwrap_err();
        assert_eq!(err.message(), "division by zero");

        assert!(convert_str("0**-1").is_err());
        assert!(convert_str("1/0.0").is_err());
        assert!(convert_str("x/(0.5-0.5)").is_err());
        assert!(convert_str("0.0**-1").is_err());
        assert!(convert_str("log(x, 1)").is_err());
    }

    #[test]
    fn unbound_name() {
        let table = SymbolTable::new();
        let ast = Parser::new("z").try_parse_full::<Expr>().unwrap();
        let err = convert(&ast, &table).unwrap_err();
        assert_eq!(err.message(), "`z` is not defined");
    }
}
