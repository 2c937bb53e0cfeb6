use pretty_assertions::assert_eq;
use symcalc::{
    apply,
    normalize,
    Answer,
    ClearPolicy,
    Error,
    Operation,
    Options,
    OptionsBuilder,
    Session,
    SymExpr,
};

fn evaluate(raw: &str, answer: &Answer) -> Result<symcalc::Applied, Error> {
    apply(Operation::Evaluate, raw, answer, &Options::default())
}

fn display(op: Operation, raw: &str) -> String {
    apply(op, raw, &Answer::empty(), &Options::default())
        .unwrap_or_else(|err| panic!("`{}` failed: {}", raw, err))
        .display
}

#[test]
fn power_syntax() {
    assert_eq!(normalize("2^3").as_str(), "2**3");
    assert_eq!(display(Operation::Evaluate, "2^3"), "8");
}

#[test]
fn scientific_notation() {
    assert_eq!(display(Operation::Evaluate, "1e5"), "100000.0");
    assert_eq!(display(Operation::Evaluate, "2.5e3*x"), "2500.0*x");
}

#[test]
fn degree_trigonometry() {
    let normalized = normalize("sin(30)+cos(60)");
    assert_eq!(normalized.as_str(), "sin(pi*(30)/180)+cos(pi*(60)/180)");
    assert_eq!(display(Operation::Evaluate, "sin(30)+cos(60)"), "1");
    assert_eq!(display(Operation::Evaluate, "tan(45)"), "1");
}

#[test]
fn natural_logarithm() {
    let normalized = normalize("ln(2)");
    assert!(normalized.contains("log(2)"));
    assert!(!normalized.contains("ln("));
    assert_eq!(display(Operation::Evaluate, "ln(E)"), "1");
}

#[test]
fn fixed_names_ignore_the_answer() {
    let answer = Answer::new(SymExpr::integer(7));
    assert_eq!(evaluate("pi", &answer).unwrap().display, "pi");
    assert_eq!(evaluate("pi", &Answer::empty()).unwrap().display, "pi");
}

#[test]
fn answer_is_threaded_through() {
    let answer = Answer::empty();
    assert_eq!(evaluate("Ans", &answer).unwrap().display, "Ans");

    let first = evaluate("2+2", &answer).unwrap();
    assert_eq!(first.display, "4");
    let second = evaluate("Ans+1", &first.answer).unwrap();
    assert_eq!(second.display, "5");
}

#[test]
fn failure_leaves_the_answer_alone() {
    let mut session = Session::default();
    session.apply(Operation::Evaluate, "3").unwrap();

    let err = session.apply(Operation::Evaluate, "2+").unwrap_err();
    match err {
        Error::Parse { raw, .. } => assert_eq!(raw, "2+"),
        other => panic!("expected a parse error, got {:?}", other),
    }
    assert_eq!(session.answer, Answer::new(SymExpr::integer(3)));

    let err = session.apply(Operation::Evaluate, "1/(x-x)").unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
    assert_eq!(session.answer, Answer::new(SymExpr::integer(3)));

    for raw in ["1/0.0", "x/0.0", "0.0**-1"] {
        let err = session.apply(Operation::Evaluate, raw).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }), "{}: {:?}", raw, err);
        assert_eq!(session.answer, Answer::new(SymExpr::integer(3)));
    }
}

#[test]
fn differentiation_with_explanation() {
    let applied = apply(
        Operation::Differentiate { var: "x".to_string() },
        "x**2",
        &Answer::empty(),
        &Options::default(),
    ).unwrap();
    assert_eq!(applied.display, "2*x");

    let explanation = applied.explanation.unwrap();
    assert!(explanation.starts_with("\\frac{d}{dx}\\left("));
    assert!(explanation.contains("x^{2}"));
    assert!(explanation.contains("2 x"));
    assert_eq!(explanation, "\\frac{d}{dx}\\left(x^{2}\\right) = 2 x");
}

#[test]
fn differentiation_of_functions() {
    let op = || "d/dx".parse::<Operation>().unwrap();
    assert_eq!(display(op(), "sin(x)"), "cos(x)");
    assert_eq!(display(op(), "ln(x)"), "1/x");
    assert_eq!(display(op(), "exp(2*x)"), "2*exp(2*x)");
    assert_eq!(display(op(), "y*x"), "y");
}

#[test]
fn algebraic_operations() {
    assert_eq!(display(Operation::Simplify, "x + x"), "2*x");
    assert_eq!(display(Operation::Simplify, "sin(x)^2 + cos(x)^2"), "1");
    assert_eq!(display(Operation::Expand, "(x+1)**2"), "x**2 + 2*x + 1");
    assert_eq!(display(Operation::Factor, "x**2 - 1"), "(x - 1)*(x + 1)");
    assert_eq!(display(Operation::Factor, "2*x^2 + 4*x"), "2*x*(x + 2)");
    assert_eq!(display(Operation::Factor, "x**2 - y**2"), "x**2 - y**2");
}

#[test]
fn only_evaluating_operations_get_no_explanation() {
    for op in [Operation::Evaluate, Operation::Simplify, Operation::Expand, Operation::Factor] {
        let applied = apply(op, "x*(x+1)", &Answer::empty(), &Options::default()).unwrap();
        assert_eq!(applied.explanation, None);
        assert_eq!(applied.answer, Answer::from(applied.value.clone()));
    }
}

#[test]
fn clear_policy() {
    let answer = Answer::new(SymExpr::integer(2));

    let kept = apply(Operation::Clear, "ignored (", &answer, &Options::default()).unwrap();
    assert_eq!(kept.value, None);
    assert_eq!(kept.display, "");
    assert_eq!(kept.answer, answer);

    let options = OptionsBuilder::new()
        .clear_policy(ClearPolicy::ResetAnswer)
        .build();
    let reset = apply(Operation::Clear, "", &answer, &options).unwrap();
    assert!(reset.answer.is_empty());
}

#[test]
fn session_operations_from_keys() {
    let mut session = Session::default();
    let op = session.operation("=").unwrap();
    session.apply(op, "x^2 + 1").unwrap();

    let op = session.operation("diff").unwrap();
    let applied = session.apply(op, "Ans").unwrap();
    assert_eq!(applied.display, "2*x");

    assert!(matches!(session.operation("expnd"), Err(Error::UnknownOperation { suggestion: Some("expand"), .. })));
}
