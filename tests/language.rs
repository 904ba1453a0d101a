use std::{collections::HashMap, fs};

use float_cmp::approx_eq;
use formula_dispersion::{
    ErrorKind, EvaluationContext, Expr, FormulaError, ParseError, RuntimeError, evaluate,
    evaluate_formula, parse_formula,
};
use ndarray::{Array1, array};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, block) in extract_formula_blocks(&content).into_iter().enumerate() {
            count += 1;
            let example = BookExample::parse(&block);
            let result = evaluate_formula(&example.formula,
                                          &example.axis_name,
                                          &Array1::from_vec(example.axis_values.clone()),
                                          &example.constants,
                                          &example.lists);

            match (&example.expected, result) {
                (Expected::Values(expected), Ok(actual)) => {
                    assert_close(&actual, expected, &format!("example {} in {path:?}", i + 1));
                },
                (Expected::Error(kind), Err(e)) => {
                    assert_eq!(e.kind(),
                               *kind,
                               "example {} in {path:?} failed with the wrong kind: {e}",
                               i + 1);
                },
                (expected, actual) => {
                    panic!("Formula example {} in {:?} failed:\n{}\nExpected {:?}, got {:?}",
                           i + 1,
                           path,
                           block,
                           expected,
                           actual);
                },
            }
        }
    }

    assert!(count > 0, "No formula examples found in book/src");
}

fn extract_formula_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```formula") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

#[derive(Debug)]
enum Expected {
    Values(Vec<f64>),
    Error(ErrorKind),
}

struct BookExample {
    axis_name:   String,
    axis_values: Vec<f64>,
    constants:   HashMap<String, f64>,
    lists:       HashMap<String, Vec<f64>>,
    formula:     String,
    expected:    Expected,
}

impl BookExample {
    fn parse(block: &str) -> Self {
        let mut axis = None;
        let mut constants = HashMap::new();
        let mut lists = HashMap::new();
        let mut formula = None;
        let mut expected = None;

        for line in block.lines().map(str::trim).filter(|l| !l.is_empty()) {
            if let Some(rest) = line.strip_prefix("axis ") {
                let (name, values) = split_binding(rest);
                axis = Some((name, parse_numbers(values)));
            } else if let Some(rest) = line.strip_prefix("const ") {
                let (name, value) = split_binding(rest);
                let value = value.parse().unwrap_or_else(|e| panic!("bad constant {line:?}: {e}"));
                constants.insert(name, value);
            } else if let Some(rest) = line.strip_prefix("list ") {
                let (name, values) = split_binding(rest);
                lists.insert(name, parse_numbers(values));
            } else if let Some(rest) = line.strip_prefix("expect-error ") {
                expected = Some(Expected::Error(parse_kind(rest.trim())));
            } else if let Some(rest) = line.strip_prefix("expect ") {
                expected = Some(Expected::Values(parse_numbers(rest)));
            } else {
                assert!(formula.is_none(), "more than one formula in block:\n{block}");
                formula = Some(line.to_string());
            }
        }

        let (axis_name, axis_values) = axis.unwrap_or_else(|| panic!("no axis in block:\n{block}"));
        Self { axis_name,
               axis_values,
               constants,
               lists,
               formula: formula.unwrap_or_else(|| panic!("no formula in block:\n{block}")),
               expected: expected.unwrap_or_else(|| panic!("no expectation in block:\n{block}")) }
    }
}

fn split_binding(rest: &str) -> (String, &str) {
    let (name, values) = rest.split_once('=')
                             .unwrap_or_else(|| panic!("binding without '=': {rest:?}"));
    (name.trim().to_string(), values.trim())
}

fn parse_numbers(values: &str) -> Vec<f64> {
    values.split(',')
          .map(str::trim)
          .filter(|v| !v.is_empty())
          .map(|v| v.parse().unwrap_or_else(|e| panic!("bad number {v:?}: {e}")))
          .collect()
}

fn parse_kind(name: &str) -> ErrorKind {
    match name {
        "MalformedInput" => ErrorKind::MalformedInput,
        "Syntax" => ErrorKind::Syntax,
        "UnknownSymbol" => ErrorKind::UnknownSymbol,
        "ShapeMismatch" => ErrorKind::ShapeMismatch,
        "Domain" => ErrorKind::Domain,
        other => panic!("unknown error kind {other:?}"),
    }
}

fn assert_close(actual: &Array1<f64>, expected: &[f64], what: &str) {
    assert_eq!(actual.len(), expected.len(), "{what}: length differs");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(approx_eq!(f64, *a, *e, epsilon = 1e-12, ulps = 4),
                "{what}: sample {i} is {a}, expected {e}");
    }
}

fn eval(formula: &str,
        x: &[f64],
        constants: &[(&str, f64)],
        lists: &[(&str, &[f64])])
        -> Result<Array1<f64>, FormulaError> {
    let constants = constants.iter()
                             .map(|(name, value)| ((*name).to_string(), *value))
                             .collect();
    let lists = lists.iter()
                     .map(|(name, values)| ((*name).to_string(), values.to_vec()))
                     .collect();
    evaluate_formula(formula, "x", &Array1::from_vec(x.to_vec()), &constants, &lists)
}

fn assert_values(formula: &str,
                 x: &[f64],
                 constants: &[(&str, f64)],
                 lists: &[(&str, &[f64])],
                 expected: &[f64]) {
    match eval(formula, x, constants, lists) {
        Ok(actual) => assert_close(&actual, expected, formula),
        Err(e) => panic!("Formula {formula:?} failed: {e}"),
    }
}

fn assert_failure(formula: &str,
                  x: &[f64],
                  constants: &[(&str, f64)],
                  lists: &[(&str, &[f64])],
                  kind: ErrorKind) {
    match eval(formula, x, constants, lists) {
        Ok(v) => panic!("Formula {formula:?} succeeded with {v} but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), kind, "Formula {formula:?} failed with {e}"),
    }
}

#[test]
fn basic_arithmetic() {
    assert_values("3 * 3 * x", &[1.0, 2.0, 3.0], &[], &[], &[9.0, 18.0, 27.0]);
    assert_values("x ** 3", &[1.0, 2.0, 3.0], &[], &[], &[1.0, 8.0, 27.0]);
    assert_values("x - 1 - 1", &[5.0], &[], &[], &[3.0]);
    assert_values("x / 2 / 2", &[8.0], &[], &[], &[2.0]);
    assert_values("1 + 2 * x", &[1.0, 2.0], &[], &[], &[3.0, 5.0]);
    assert_values("(1 + 2) * x", &[1.0, 2.0], &[], &[], &[3.0, 6.0]);
}

#[test]
fn constant_formulas_are_broadcast() {
    assert_values("n = 22 * 44 + 66", &[1.0, 2.0, 3.0], &[], &[], &[1034.0; 3]);
    assert_values("(22)", &[0.0, 0.0], &[], &[], &[22.0, 22.0]);
    assert_values("a", &[1.0, 2.0], &[("a", 1.5)], &[], &[1.5, 1.5]);
}

#[test]
fn empty_axis_gives_empty_result() {
    assert_values("x * 2 + 1", &[], &[], &[], &[]);
    assert_values("22", &[], &[], &[], &[]);
}

#[test]
fn unary_minus_and_exponent_precedence() {
    assert_values("-x ** 2", &[1.0, 2.0, 3.0], &[], &[], &[-1.0, -4.0, -9.0]);
    assert_values("(-x) ** 2", &[1.0, 2.0, 3.0], &[], &[], &[1.0, 4.0, 9.0]);
    assert_values("--x", &[1.0, -2.0], &[], &[], &[1.0, -2.0]);
    assert_values("2 * -x", &[1.0, 2.0], &[], &[], &[-2.0, -4.0]);
    assert_values("2 ** -x", &[1.0, 2.0], &[], &[], &[0.5, 0.25]);
    assert_values("2 ** 3 ** 2", &[0.0], &[], &[], &[512.0]);
    assert_values("(2 ** 3) ** 2", &[0.0], &[], &[], &[64.0]);
    assert_values("(-2) ** 3", &[0.0], &[], &[], &[-8.0]);
}

#[test]
fn assignment_target_is_cosmetic() {
    let with = eval("eps = x * 2", &[1.0, 2.0], &[], &[]).unwrap();
    let without = eval("x * 2", &[1.0, 2.0], &[], &[]).unwrap();
    assert_eq!(with, without);

    assert_values("x = x * 2", &[1.0, 2.0], &[], &[], &[2.0, 4.0]);
}

#[test]
fn symbol_resolution() {
    assert_failure("a * b * x", &[1.0, 2.0, 3.0], &[], &[], ErrorKind::UnknownSymbol);
    assert_failure("x + c", &[1.0], &[("b", 1.0)], &[], ErrorKind::UnknownSymbol);
    assert_failure("lbda", &[1.0], &[], &[], ErrorKind::UnknownSymbol);

    // The independent variable takes precedence over a constant of the same name.
    assert_values("x", &[1.0, 2.0], &[("x", 10.0)], &[], &[1.0, 2.0]);
}

#[test]
fn unknown_symbol_names_the_symbol() {
    let err = eval("2 * x + beta", &[1.0], &[], &[]).unwrap_err();
    assert_eq!(err,
               FormulaError::Runtime(RuntimeError::UnknownSymbol { name:     "beta".to_string(),
                                                                   position: 8, }));
    assert_eq!(err.to_string(),
               "Error at position 8: Unknown symbol 'beta'.");
}

#[test]
fn list_parameters_outside_sum_are_rejected() {
    let err = eval("a + x", &[1.0], &[], &[("a", &[1.0])]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownSymbol);
    assert!(matches!(err,
                     FormulaError::Runtime(RuntimeError::ListOutsideSum { ref name, position: 0 })
                     if name == "a"));
}

#[test]
fn sum_aggregates() {
    assert_values("3 * sum[x * w]",
                  &[1.0, 2.0, 3.0],
                  &[],
                  &[("w", &[1.0, 2.0, 3.0])],
                  &[18.0, 36.0, 54.0]);
    assert_values("sum[a]", &[1.0, 2.0], &[], &[("a", &[1.0, 2.0, 3.0])], &[6.0, 6.0]);
    assert_values("sum[a * b]",
                  &[0.0],
                  &[],
                  &[("a", &[1.0, 2.0]), ("b", &[3.0, 4.0])],
                  &[11.0]);
    assert_values("1 + sum[a * x] + sum[b]",
                  &[1.0, 2.0],
                  &[],
                  &[("a", &[1.0, 1.0]), ("b", &[5.0])],
                  &[8.0, 10.0]);
}

#[test]
fn sum_body_sees_constants_and_independent_variable() {
    assert_values("sum[c * a / x]",
                  &[1.0, 2.0],
                  &[("c", 2.0)],
                  &[("a", &[1.0, 3.0])],
                  &[8.0, 4.0]);
}

#[test]
fn sum_lists_shadow_constants_inside_the_body() {
    assert_values("a + sum[a]", &[0.0], &[("a", 100.0)], &[("a", &[1.0, 2.0])], &[103.0]);
}

#[test]
fn sum_with_empty_lists_is_zero() {
    assert_values("1 + sum[a * x]", &[1.0, 2.0], &[], &[("a", &[])], &[1.0, 1.0]);
    assert_failure("sum[q * w]", &[1.0, 2.0], &[], &[("w", &[])], ErrorKind::UnknownSymbol);
}

#[test]
fn sum_body_symbols_are_resolved_before_any_term() {
    assert_failure("x + sum[q]", &[1.0, 2.0], &[], &[], ErrorKind::UnknownSymbol);
    assert_failure("sum[q * x]", &[1.0, 2.0], &[], &[], ErrorKind::UnknownSymbol);
    assert_failure("sum[a * q]", &[1.0], &[], &[("a", &[1.0, 2.0])], ErrorKind::UnknownSymbol);

    let err = eval("x + sum[w * sqrt(q)]", &[1.0], &[], &[("w", &[1.0])]).unwrap_err();
    assert_eq!(err,
               FormulaError::Runtime(RuntimeError::UnknownSymbol { name:     "q".to_string(),
                                                                   position: 17, }));
}

#[test]
fn sum_errors() {
    assert_failure("sum[a * b]",
                   &[1.0],
                   &[],
                   &[("a", &[1.0, 2.0]), ("b", &[1.0])],
                   ErrorKind::ShapeMismatch);
    assert_failure("sum[x * 2]", &[1.0], &[], &[], ErrorKind::ShapeMismatch);
    assert_failure("sum[c]", &[1.0], &[("c", 1.0)], &[], ErrorKind::ShapeMismatch);
}

#[test]
fn list_length_mismatch_names_both_lists() {
    let err = eval("sum[a * b]", &[1.0], &[], &[("a", &[1.0, 2.0]), ("b", &[1.0])]).unwrap_err();
    assert_eq!(err,
               FormulaError::Runtime(RuntimeError::ListLengthMismatch { first:     "a".to_string(),
                                                                        first_len: 2,
                                                                        other:     "b".to_string(),
                                                                        other_len: 1,
                                                                        position:  0, }));
}

#[test]
fn sum_is_reserved() {
    assert_failure("sum + x", &[1.0], &[], &[], ErrorKind::Syntax);
    assert_failure("sum = x", &[1.0], &[], &[], ErrorKind::Syntax);
    assert_failure("sum(x)", &[1.0], &[], &[], ErrorKind::Syntax);
    assert_failure("sum", &[1.0], &[("sum", 1.0)], &[], ErrorKind::Syntax);
}

#[test]
fn aggregates_are_checked_against_lists_only_at_evaluation() {
    assert!(parse_formula("n = sum[2 * 3] + sum[4*5]").is_ok());
    assert!(parse_formula("n = ((((22))))").is_ok());
    assert!(parse_formula("something = ((22)").is_err());

    assert_failure("n = sum[2 * 3] + sum[4*5]", &[1.0], &[], &[], ErrorKind::ShapeMismatch);
}

#[test]
fn nested_sum_is_rejected() {
    let err = parse_formula("n = sum[sum [ 2 * lbda ] * 3] + sum[4*5]").unwrap_err();
    assert_eq!(err, ParseError::NestedSum { position: 8 });
    assert_eq!(err.kind(), ErrorKind::Syntax);
}

#[test]
fn division_by_zero_is_a_domain_error() {
    assert_failure("x / 0", &[1.0, 2.0], &[], &[], ErrorKind::Domain);

    let err = eval("1 + 1 / x", &[2.0, 1.0, 0.0, 0.0], &[], &[]).unwrap_err();
    assert_eq!(err,
               FormulaError::Runtime(RuntimeError::DivisionByZero { expr:     "(1 / x)".to_string(),
                                                                    sample:   2,
                                                                    position: 6, }));
}

#[test]
fn undefined_powers_are_domain_errors() {
    assert_failure("x ** 0.5", &[4.0, -1.0], &[], &[], ErrorKind::Domain);
    assert_failure("x ** -1", &[1.0, 0.0], &[], &[], ErrorKind::Domain);
    assert_values("x ** 0.5", &[4.0, 9.0], &[], &[], &[2.0, 3.0]);
    assert_values("x ** 0", &[0.0, -3.0], &[], &[], &[1.0, 1.0]);
}

#[test]
fn overflow_is_a_domain_error() {
    assert_failure("x ** 1000", &[10.0], &[], &[], ErrorKind::Domain);
    assert_failure("exp(x)", &[1000.0], &[], &[], ErrorKind::Domain);
    assert_failure("x * x", &[1e200], &[], &[], ErrorKind::Domain);
}

#[test]
fn non_finite_inputs_never_reach_the_output() {
    let huge = format!("1{}", "0".repeat(400));
    assert_failure(&huge, &[1.0, 2.0], &[], &[], ErrorKind::Domain);
    assert_failure("x", &[1.0, f64::NAN], &[], &[], ErrorKind::Domain);
    assert_failure("2 * x", &[f64::INFINITY], &[], &[], ErrorKind::Domain);
    assert_failure("c + x", &[1.0], &[("c", f64::NEG_INFINITY)], &[], ErrorKind::Domain);
    assert_failure("sum[a] + x", &[1.0], &[], &[("a", &[1.0, f64::NAN])], ErrorKind::Domain);

    let err = eval("1 + x", &[0.0, 1.0, f64::NAN], &[], &[]).unwrap_err();
    assert_eq!(err,
               FormulaError::Runtime(RuntimeError::NonFinite { expr:     "x".to_string(),
                                                               sample:   2,
                                                               position: 4, }));
}

#[test]
fn builtin_functions() {
    assert_values("sin(x)", &[0.0], &[], &[], &[0.0]);
    assert_values("cos(x)", &[0.0], &[], &[], &[1.0]);
    assert_values("tan(0)", &[0.0], &[], &[], &[0.0]);
    assert_values("exp(0) + ln(1)", &[0.0], &[], &[], &[1.0]);
    assert_values("sqrt(x)", &[4.0, 9.0], &[], &[], &[2.0, 3.0]);
    assert_values("log(x)", &[10.0, 1000.0], &[], &[], &[1.0, 3.0]);
    assert_values("heaviside(x)", &[-1.0, 0.0, 2.0], &[], &[], &[0.0, 0.0, 1.0]);
    assert_values("sqrt(sqrt(x)) * 2", &[16.0], &[], &[], &[4.0]);
}

#[test]
fn dawson_integral() {
    let result = eval("dawsn(x)", &[0.0, 1.0, -1.0], &[], &[]).unwrap();
    let expected = [0.0, 0.538_079_506_912_768_4, -0.538_079_506_912_768_4];

    for (actual, expected) in result.iter().zip(expected) {
        assert!(approx_eq!(f64, *actual, expected, epsilon = 1e-10),
                "dawsn gave {actual}, expected {expected}");
    }
}

#[test]
fn builtin_domain_errors() {
    assert_failure("sqrt(x)", &[1.0, -1.0], &[], &[], ErrorKind::Domain);
    assert_failure("ln(x)", &[0.0], &[], &[], ErrorKind::Domain);
    assert_failure("log(x - 1)", &[1.0], &[], &[], ErrorKind::Domain);

    let err = eval("2 + sqrt(x)", &[1.0, 4.0, -9.0], &[], &[]).unwrap_err();
    assert_eq!(err,
               FormulaError::Runtime(RuntimeError::InvalidArgument { function: "sqrt".to_string(),
                                                                     value:    -9.0,
                                                                     expr:     "sqrt(x)".to_string(),
                                                                     sample:   2,
                                                                     position: 4, }));
}

#[test]
fn function_call_errors() {
    assert_failure("foo(x)", &[1.0], &[], &[], ErrorKind::Syntax);
    assert_failure("sqrt(x, 2)", &[1.0], &[], &[], ErrorKind::Syntax);
    assert_failure("sqrt()", &[1.0], &[], &[], ErrorKind::Syntax);
    assert_failure("sqrt(x", &[1.0], &[], &[], ErrorKind::Syntax);
}

#[test]
fn function_names_are_ordinary_symbols_without_call() {
    assert_values("sin * x", &[1.0, 2.0], &[("sin", 3.0)], &[], &[3.0, 6.0]);
    assert_failure("exp", &[1.0], &[], &[], ErrorKind::UnknownSymbol);
}

#[test]
fn syntax_errors() {
    assert_failure("eps = ((22)", &[1.0], &[], &[], ErrorKind::Syntax);
    assert_failure("", &[1.0], &[], &[], ErrorKind::Syntax);
    assert_failure("   ", &[1.0], &[], &[], ErrorKind::Syntax);
    assert_failure("x +", &[1.0], &[], &[], ErrorKind::Syntax);
    assert_failure("x x", &[1.0], &[], &[], ErrorKind::Syntax);
    assert_failure("(x))", &[1.0], &[], &[], ErrorKind::Syntax);
    assert_failure("sum[x", &[1.0], &[], &[("x", &[1.0])], ErrorKind::Syntax);
    assert_failure("x * * 2", &[1.0], &[], &[], ErrorKind::Syntax);
    assert_failure("n = ", &[1.0], &[], &[], ErrorKind::Syntax);
    assert_failure("a = b = x", &[1.0], &[], &[], ErrorKind::Syntax);
    assert_failure("1.2.3", &[1.0], &[], &[], ErrorKind::Syntax);
}

#[test]
fn malformed_input() {
    assert_failure("x % 2", &[1.0], &[], &[], ErrorKind::MalformedInput);
    assert_failure("x ^ 2", &[1.0], &[], &[], ErrorKind::MalformedInput);
    assert_failure("λ * 2", &[1.0], &[], &[], ErrorKind::MalformedInput);

    let err = parse_formula("2 * x $ 3").unwrap_err();
    assert_eq!(err,
               ParseError::MalformedInput { fragment: "$".to_string(),
                                            position: 6, });
}

#[test]
fn rank_mismatch_is_checked_first() {
    let empty = HashMap::new();
    let no_lists = HashMap::new();

    let err = evaluate_formula("x", "x", &array![[1.0, 2.0], [3.0, 4.0]], &empty, &no_lists).unwrap_err();
    assert_eq!(err, FormulaError::Runtime(RuntimeError::RankMismatch { found: 2 }));

    // Even a formula that does not tokenize reports the shape first.
    let err = evaluate_formula("x % %", "x", &array![[1.0]], &empty, &no_lists).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ShapeMismatch);

    let scalar = ndarray::arr0(1.0);
    let err = evaluate_formula("x", "x", &scalar, &empty, &no_lists).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
}

#[test]
fn dynamic_rank_one_input_is_accepted() {
    let values = array![1.0, 2.0].into_dyn();
    let result = evaluate_formula("x * 2", "x", &values, &HashMap::new(), &HashMap::new()).unwrap();
    assert_eq!(result, array![2.0, 4.0]);
}

#[test]
fn parsed_tree_can_be_reused() {
    let expr = parse_formula("n = a + sum[w * x]").unwrap();

    let first = EvaluationContext::from_slice("x", &[1.0, 2.0]).with_constant("a", 1.0)
                                                               .with_list("w", vec![1.0, 2.0]);
    let second = EvaluationContext::from_slice("x", &[10.0]).with_constant("a", -1.0)
                                                            .with_list("w", vec![0.5]);

    assert_eq!(evaluate(&expr, &first).unwrap(), array![4.0, 7.0]);
    assert_eq!(evaluate(&expr, &second).unwrap(), array![4.0]);
    assert_eq!(evaluate(&expr, &first).unwrap(), array![4.0, 7.0]);
}

#[test]
fn context_can_be_shared_between_threads() {
    let context = EvaluationContext::from_slice("x", &[1.0, 2.0, 3.0]).with_constant("k", 2.0);
    let formulas = ["k * x", "x ** 2", "k + sqrt(x * x)"];

    std::thread::scope(|s| {
        let handles = formulas.iter()
                              .map(|f| {
                                  let context = &context;
                                  s.spawn(move || {
                                       let expr = parse_formula(f).unwrap();
                                       context.evaluate(&expr).unwrap()
                                   })
                              })
                              .collect::<Vec<_>>();

        let results = handles.into_iter()
                             .map(|h| h.join().unwrap())
                             .collect::<Vec<_>>();
        assert_eq!(results,
                   vec![array![2.0, 4.0, 6.0],
                        array![1.0, 4.0, 9.0],
                        array![3.0, 4.0, 5.0]]);
    });
}

#[test]
fn display_is_fully_parenthesized() {
    let cases = [("n = 22 * 44 + 66", "n = ((22 * 44) + 66)"),
                 ("-x ** 2", "(-(x ** 2))"),
                 ("2 ** 3 ** 2", "(2 ** (3 ** 2))"),
                 ("a - b - c", "((a - b) - c)"),
                 ("eps = sum[x * w]", "eps = sum[(x * w)]"),
                 ("sqrt(x / 2)", "sqrt((x / 2))"),
                 ("(22)", "22"),
                 ("1.5 * .5", "(1.5 * 0.5)")];

    for (source, rendered) in cases {
        assert_eq!(parse_formula(source).unwrap().to_string(), rendered);
    }
}

#[test]
fn parse_tree_structure_and_positions() {
    let expr = parse_formula("n = 2 * x").unwrap();

    let expected =
        Expr::Assignment { target:   "n".to_string(),
                           value:    Box::new(Expr::BinaryOp { left:     Box::new(Expr::Literal { value:    2.0,
                                                                                                  position: 4, }),
                                                               op:       formula_dispersion::BinaryOperator::Mul,
                                                               right:    Box::new(Expr::Variable { name:     "x".to_string(),
                                                                                                   position: 8, }),
                                                               position: 6, }),
                           position: 0, };
    assert_eq!(expr, expected);
}

#[test]
fn error_positions() {
    assert_eq!(parse_formula("eps = ((22)").unwrap_err(),
               ParseError::ExpectedClosing { delimiter: ')',
                                             found:     "end of input".to_string(),
                                             position:  11, });
    assert_eq!(parse_formula("x y").unwrap_err(),
               ParseError::UnexpectedTrailingTokens { token:    "identifier 'y'".to_string(),
                                                      position: 2, });
    assert_eq!(parse_formula("  ").unwrap_err(),
               ParseError::EmptyExpression { position: 2 });
    assert_eq!(parse_formula("x + sum").unwrap_err(),
               ParseError::IdentifierReserved { name:     "sum".to_string(),
                                                position: 4, });
    assert_eq!(parse_formula("1 + gamma(x)").unwrap_err(),
               ParseError::UnknownFunction { name:     "gamma".to_string(),
                                             position: 4, });
    assert_eq!(parse_formula("cos(x, x)").unwrap_err(),
               ParseError::ArgumentCountMismatch { name:     "cos".to_string(),
                                                   expected: 1,
                                                   found:    2,
                                                   position: 0, });
}
