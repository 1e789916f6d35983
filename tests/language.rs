use thisfunc::{
    error::{Error, RuntimeError},
    interpreter::{evaluator::core::Interpreter, value::Value},
    run_source,
};

fn output(source: &str) -> Option<String> {
    run_source(source).unwrap_or_else(|e| panic!("Script failed: {source}\nError: {e}"))
}

fn assert_output(source: &str, expected: &str) {
    assert_eq!(output(source).as_deref(), Some(expected), "source: {source}");
}

fn assert_failure(source: &str) {
    assert!(run_source(source).is_err(),
            "Script succeeded but was expected to fail: {source}");
}

#[test]
fn numeric_literals() {
    assert_output("42", "42");
    assert_output("0", "0");
    assert_output("3.25", "3.25");
    assert_output("-12", "-12");
    assert_output("-0.5", "-0.5");
    // A trailing dot with no fractional digits reads as the integer part.
    assert_output("1.", "1");
    assert_output("-3.", "-3");
    assert_output("add(2., 3)", "5");
}

#[test]
fn literal_round_trips() {
    // Whatever a literal renders to must lex and evaluate back to itself.
    for literal in ["0", "7", "3.25", "-12", "-0.5", "120", "1024"] {
        let first = output(literal).unwrap();
        let second = output(&first).unwrap();
        assert_eq!(first, second, "literal: {literal}");
    }
}

#[test]
fn basic_arithmetic() {
    assert_output("add(3, 4)", "7");
    assert_output("sub(10, 4)", "6");
    assert_output("mul(3, 5)", "15");
    assert_output("div(10, 4)", "2.5");
    assert_output("pow(2, 10)", "1024");
}

#[test]
fn unary_builtins() {
    assert_output("sqrt(16)", "4");
    assert_output("sin(0)", "0");
    assert_output("cos(0)", "1");
}

#[test]
fn division_by_zero_is_error() {
    match run_source("div(10, 0)") {
        Err(Error::Runtime(RuntimeError::DivisionByZero)) => {},
        other => panic!("expected division by zero, got {other:?}"),
    }
}

#[test]
fn comparisons_and_nand() {
    assert_output("eq(1, 1)", "1");
    assert_output("eq(1, 2)", "0");
    assert_output("le(1, 2)", "1");
    assert_output("le(2, 1)", "0");
    // le is strict less-than.
    assert_output("le(2, 2)", "0");
    assert_output("nand(1, 1)", "0");
    assert_output("nand(0, 1)", "1");
    assert_output("nand(5, 0)", "1");
    assert_output("nand(0, 0)", "1");
}

#[test]
fn nested_operands_evaluate_left_to_right() {
    assert_output("add(mul(2, 3), sub(10, 4))", "12");
    assert_output("mul(add(1, 1), add(2, 2))", "8");
}

#[test]
fn declarations_emit_nothing() {
    assert_eq!(output("double<-mul(#0, 2)"), None);
    assert_eq!(output(""), None);
    assert_eq!(output("   \t  "), None);
}

#[test]
fn user_functions_and_calls() {
    assert_output("double<-mul(#0, 2)\ndouble(21)", "42");
    assert_output("addboth<-add(#0, #1)\naddboth(2, 5)", "7");
    // N-ary calls open one frame holding all arguments.
    assert_output("addthree<-add(#0, add(#1, #2))\naddthree(1, 2, 3)", "6");
}

#[test]
fn recursive_factorial() {
    let source = "fact<-if(le(#0,1),1,mul(#0,fact(sub(#0,1))))\nfact(5)";
    assert_output(source, "120");

    let source = "fact<-if(le(#0,1),1,mul(#0,fact(sub(#0,1))))\nfact(10)";
    assert_output(source, "3628800");
}

#[test]
fn nested_calls_see_only_their_own_frame() {
    // g calls f and must still see its own #0 afterwards.
    let source = "f<-mul(#0, 2)\ng<-add(f(#0), #0)\ng(5)";
    assert_output(source, "15");

    // Recursive fibonacci exercises two nested calls per frame.
    let source = "fib<-if(le(#0,1),#0,add(fib(sub(#0,1)),fib(sub(#0,2))))\nfib(10)";
    assert_output(source, "55");
}

#[test]
fn bare_reference_runs_under_the_current_frame() {
    // h has no arguments of its own; referenced from u's body it sees u's #0.
    assert_output("h<-#0\nu<-add(h, #0)\nu(3)", "6");
    // A bare reference and an explicit zero-argument call are the same thing.
    assert_output("one<-1\none", "1");
    assert_output("one<-1\none()", "1");
}

#[test]
fn conditionals_short_circuit() {
    assert_output("if(eq(1, 1), 10, 20)", "10");
    assert_output("if(eq(1, 2), 10, 20)", "20");
    // The untaken branch is never evaluated, so the undefined call is fine.
    assert_output("if(eq(1, 1), 10, boom(1))", "10");
    assert_output("if(eq(1, 2), boom(1), 20)", "20");
    // Any nonzero condition counts as true.
    assert_output("if(7, 1, 2)", "1");
}

#[test]
fn if_with_wrong_arity_is_an_unknown_function() {
    assert_failure("if(1, 2)");
    assert_failure("if(1, 2, 3, 4)");
}

#[test]
fn lists_render_in_source_order() {
    assert_output("list(1, 2, 3)", "[1, 2, 3]");
    assert_output("list(5)", "[5]");
    assert_output("list()", "[]");
    assert_output("list(add(1, 1), mul(2, 3))", "[2, 6]");
}

#[test]
fn concat_preserves_order_and_length() {
    assert_output("concat(list(1, 2), list(3, 4, 5))", "[1, 2, 3, 4, 5]");
    assert_output("concat(list(), list(9))", "[9]");

    match run_source("concat(list(1, 2), 3)") {
        Err(Error::Runtime(RuntimeError::ExpectedList { .. })) => {},
        other => panic!("expected a list type error, got {other:?}"),
    }
}

#[test]
fn map_applies_the_functor_in_order() {
    let source = "sq<-mul(#0, #0)\nnums<-list(1, 2, 3)\nmap sq nums";
    assert_output(source, "[1, 4, 9]");

    // Either operand order resolves: the list-valued definition is the list.
    let source = "sq<-mul(#0, #0)\nnums<-list(1, 2, 3)\nmap nums sq";
    assert_output(source, "[1, 4, 9]");
}

#[test]
fn map_operands_must_be_registered_names() {
    assert_failure("sq<-mul(#0, #0)\nmap sq nums");
    assert_failure("nums<-list(1, 2)\nmap sq nums");

    match run_source("nums<-list(1, 2)\nmap mul(#0, 2) nums") {
        Err(Error::Runtime(RuntimeError::MapOperandNotAName)) => {},
        other => panic!("expected a map operand error, got {other:?}"),
    }

    // Two scalar-valued functions leave map without a list.
    match run_source("a<-1\nb<-2\nmap a b") {
        Err(Error::Runtime(RuntimeError::MapListNotFound)) => {},
        other => panic!("expected a missing list error, got {other:?}"),
    }
}

#[test]
fn duplicate_declaration_is_rejected_and_first_survives() {
    match run_source("f<-1\nf<-2") {
        Err(Error::Runtime(RuntimeError::FunctionAlreadyDefined { name })) => {
            assert_eq!(name, "f");
        },
        other => panic!("expected a duplicate declaration error, got {other:?}"),
    }

    // The failing second declaration leaves the first one callable.
    let source = "f<-1\ng<-add(f, 1)\ng";
    assert_output(source, "2");
}

#[test]
fn self_referential_declaration_is_never_registered() {
    let mut interpreter = Interpreter::new();

    match interpreter.eval_line("loop<-loop(1)") {
        Err(Error::Runtime(RuntimeError::SelfReference { name })) => assert_eq!(name, "loop"),
        other => panic!("expected a self-reference error, got {other:?}"),
    }

    // The rejected name was never registered, so it is free to redeclare.
    assert!(interpreter.eval_line("loop<-1").unwrap().is_none());
    assert_eq!(interpreter.eval_line("loop").unwrap(), Some(Value::Number(1.0)));

    // The guard is shallow: a self-call under `if` registers fine.
    assert_output("fact<-if(le(#0,1),1,mul(#0,fact(sub(#0,1))))\nfact(3)", "6");
}

#[test]
fn missing_argument_is_a_runtime_error() {
    match run_source("c<-#0\nc") {
        Err(Error::Runtime(RuntimeError::MissingArgument { index: 0 })) => {},
        other => panic!("expected a missing argument error, got {other:?}"),
    }

    match run_source("second<-#1\nsecond(5)") {
        Err(Error::Runtime(RuntimeError::MissingArgument { index: 1 })) => {},
        other => panic!("expected a missing argument error, got {other:?}"),
    }
}

#[test]
fn unknown_function_is_a_runtime_error() {
    match run_source("missing(1)") {
        Err(Error::Runtime(RuntimeError::UnknownFunction { name })) => {
            assert_eq!(name, "missing");
        },
        other => panic!("expected an unknown function error, got {other:?}"),
    }

    assert_failure("missing");
    // Builtins have fixed arity; three arguments fall through to the
    // registry.
    assert_failure("add(1, 2, 3)");
}

#[test]
fn lists_are_not_scalars() {
    match run_source("add(list(1, 2), 3)") {
        Err(Error::Runtime(RuntimeError::ExpectedNumber { .. })) => {},
        other => panic!("expected a number type error, got {other:?}"),
    }

    assert_failure("sqrt(list(4))");
    assert_failure("if(list(1), 1, 2)");
}

#[test]
fn illegal_characters_point_at_their_column() {
    let error = run_source("1 $ 2").unwrap_err();
    assert_eq!(error.to_string(), "1 $ 2\n  ^\nIllegal Character: '$'");

    assert_failure("add(1, 2);");
    assert_failure("1.2.3");
    assert_failure("< 5");
    assert_failure("# 0");
    assert_failure("x_y");
}

#[test]
fn unbalanced_brackets_fail_lexing() {
    let error = run_source("add(1, 2").unwrap_err();
    assert_eq!(error.to_string(), "Lexical error: Expected ')'");

    // A closing bracket with nothing open is an illegal character.
    assert_failure(")");
    assert_failure("add(1, 2))");
    assert_failure("list(1, 2");
}

#[test]
fn failed_statements_leave_no_partial_state() {
    let mut interpreter = Interpreter::new();

    // The declaration line fails to lex, so the name must stay unknown.
    assert!(interpreter.eval_line("bad<-add(1, 2").is_err());
    assert!(matches!(interpreter.eval_line("bad"),
                     Err(Error::Runtime(RuntimeError::UnknownFunction { .. }))));

    // A failed call does not disturb the registry; later statements work.
    assert!(interpreter.eval_line("f<-mul(#0, 3)").unwrap().is_none());
    assert!(interpreter.eval_line("div(1, 0)").is_err());
    assert_eq!(interpreter.eval_line("f(4)").unwrap(), Some(Value::Number(12.0)));
}

#[test]
fn syntax_errors_stop_the_statement() {
    assert_failure("add(1 2)");
    assert_failure("add(,1)");
    assert_failure("list 1, 2");
    assert_failure("add(1, <- )");
    // Declarations exist only at statement level.
    assert_failure("add(f<-1, 2)");
}

#[test]
fn runaway_recursion_is_cut_off() {
    // Indirect self-reference passes the shallow guard but hits the depth
    // limit instead of the native stack.
    match run_source("a<-b\nb<-a(1)\na(1)") {
        Err(Error::Runtime(RuntimeError::RecursionLimit)) => {},
        other => panic!("expected the recursion limit, got {other:?}"),
    }
}
