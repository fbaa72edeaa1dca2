use std::{fs, rc::Rc};

use jipl::{
    error::{Error, RuntimeError},
    get_result,
    interpreter::{
        evaluator::{EvalResult, Evaluator, function::core::BUILTIN_FUNCTIONS},
        value::{Arity, Builtin, Environment, Object},
    },
    parse, tokenize,
};
use walkdir::WalkDir;

#[test]
fn script_files_evaluate_to_true() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "jipl"))
    {
        let path = entry.path();
        let script =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        match run(&script) {
            Ok(Object::Boolean(true)) => {},
            Ok(other) => panic!("Script {path:?} evaluated to {other} instead of true"),
            Err(e) => panic!("Script {path:?} failed:\n{script}\nError: {e}"),
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

#[test]
fn readme_examples_work() {
    let content = fs::read_to_string("README.md").expect("missing README.md");
    let blocks = extract_jipl_blocks(&content);

    assert!(!blocks.is_empty(), "No jipl examples found in README.md");
    for (i, code) in blocks.iter().enumerate() {
        if let Err(e) = run(code) {
            panic!("README example {} failed:\n{}\nError: {}", i + 1, code, e);
        }
    }
}

fn extract_jipl_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```jipl") {
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

fn run(src: &str) -> Result<Object, Error> {
    get_result(src, &Environment::new_root())
}

fn assert_value(src: &str, expected: impl Into<Object>) {
    match run(src) {
        Ok(value) => assert_eq!(value, expected.into(), "script: {src}"),
        Err(e) => panic!("Script failed: {e}\n{src}"),
    }
}

fn assert_integer(src: &str, expected: i64) {
    assert_value(src, Object::Integer(expected));
}

fn runtime_error(src: &str) -> RuntimeError {
    match run(src) {
        Err(Error::Runtime(e)) => e,
        Err(Error::Parse(errors)) => panic!("Script did not parse: {errors:?}"),
        Ok(value) => panic!("Script succeeded with {value} but was expected to fail"),
    }
}

#[test]
fn definition_and_basic_arithmetic() {
    assert_integer("def x = 5; x + 3;", 8);
    assert_integer("def x = 7 * 9; x;", 63);
    assert_integer("8 - 5;", 3);
    assert_integer("2 + 3 * 4;", 14);
    assert_integer("(2 + 3) * 4;", 20);
}

#[test]
fn division_and_modulo() {
    assert_integer("10 / 3;", 3);
    assert_integer("10 % 3;", 1);
    assert_integer("-7 / 2;", -3);
    assert_integer("-7 % 2;", -1);
}

#[test]
fn division_by_zero_is_error() {
    assert!(matches!(runtime_error("1 / 0;"), RuntimeError::DivisionByZero { line: 1 }));
    assert!(matches!(runtime_error("5 % 0;"), RuntimeError::DivisionByZero { .. }));
}

#[test]
fn integer_overflow_is_error() {
    assert!(matches!(runtime_error("9223372036854775807 + 1;"), RuntimeError::Overflow { .. }));
    assert!(matches!(runtime_error("def m = 9223372036854775807; m * 2;"),
                     RuntimeError::Overflow { .. }));
}

#[test]
fn type_mismatch_is_error() {
    let error = runtime_error("5 + true;");

    assert!(matches!(error, RuntimeError::TypeMismatch { .. }));
    assert_eq!(error.to_string(), "Error on line 1: Type mismatch: INTEGER + BOOLEAN.");
}

#[test]
fn unknown_operators_are_errors() {
    assert!(matches!(runtime_error("\"a\" - \"b\";"), RuntimeError::UnknownOperator { .. }));
    assert!(matches!(runtime_error("true + true;"), RuntimeError::UnknownOperator { .. }));
    assert!(matches!(runtime_error("-true;"), RuntimeError::UnknownOperator { .. }));
    assert!(matches!(runtime_error("!5;"), RuntimeError::UnknownOperator { .. }));
    assert!(matches!(runtime_error("1 && 2;"), RuntimeError::UnknownOperator { .. }));
}

#[test]
fn comparisons_and_logic() {
    assert_value("2 < 3;", true);
    assert_value("3 <= 2;", false);
    assert_value("3 >= 3;", true);
    assert_value("2 != 3;", true);
    assert_value("!false;", true);
    assert_value("true == false;", false);
    assert_value("true && false;", false);
    assert_value("false || true;", true);
}

#[test]
fn logical_operators_evaluate_both_operands() {
    assert_integer("def n = 0; def bump = function() { n = n + 1; true; }; false && bump(); n;",
                   1);
    assert_integer("def n = 0; def bump = function() { n = n + 1; false; }; true || bump(); n;",
                   1);
}

#[test]
fn strings() {
    assert_value("\"foo\" + \"bar\";", "foobar");
    assert_value("\"a\" == \"a\";", true);
    assert_value("\"a\" != \"a\";", false);
    assert_integer("length(\"héllo\");", 5);
    assert_value("\"héllo\"[1];", "é");
}

#[test]
fn prefix_and_postfix() {
    assert_integer("-5;", -5);
    assert_value("!true;", false);
    assert_integer("777++;", 778);
    assert_integer("3--;", 2);
}

#[test]
fn postfix_does_not_mutate_outside_loops() {
    assert_integer("def x = 1; x++; x;", 1);
}

#[test]
fn if_else() {
    assert_integer("if (1 < 2) { 10; } else { 20; };", 10);
    assert_integer("if (1 > 2) { 10; } else { 20; };", 20);
    assert_value("if (1 > 2) { 10; };", Object::Undefined);
}

#[test]
fn only_true_is_truthy() {
    assert_integer("if (1) { 10; } else { 20; };", 20);
    assert_integer("if (\"yes\") { 10; } else { 20; };", 20);
}

#[test]
fn if_shares_the_enclosing_scope() {
    assert_integer("if (true) { def inner = 3; }; inner;", 3);
}

#[test]
fn for_loop_runs_and_leaves_variable_visible() {
    assert_integer("for(def i=0;i<=3;i++){ }; i;", 4);
    assert_integer("def count = 0; for (def i = 0; i <= 3; i++) { count = count + 1; } count;",
                   4);
    assert_value("for (def i = 0; i < 5; i++) { }", Object::Undefined);
}

#[test]
fn for_loop_counts_down() {
    assert_integer("def total = 0; for (def i = 3; i > 0; i--) { total = total + i; } total;",
                   6);
}

#[test]
fn return_inside_loop_leaves_the_function() {
    assert_integer("def find = function() { for (def i = 0; i < 10; i++) { if (i == 3) { return i; } } 99; }; find();",
                   3);
}

#[test]
fn closures_capture_their_defining_scope() {
    assert_integer("def make=function(){def n=1; function(){n;};}; def f=make(); f();",
                   1);
    assert_integer("def adder = function(a) { function(b) { a + b; }; }; def add2 = adder(2); add2(40);",
                   42);
}

#[test]
fn closures_from_one_literal_share_its_body() {
    let env = Environment::new_root();
    get_result("def make = function() { function(x) { x + 1; }; }; def a = make(); def b = make();",
               &env).unwrap();

    match (env.get("a"), env.get("b")) {
        (Some(Object::Function(a)), Some(Object::Function(b))) => {
            assert!(!Rc::ptr_eq(&a, &b));
            assert!(Rc::ptr_eq(&a.body, &b.body));
        },
        other => panic!("expected two closures, got {other:?}"),
    }
}

#[test]
fn scoping_is_lexical() {
    assert_integer("def x = 10; def get = function() { x; }; def other = function() { def x = 20; get(); }; other();",
                   10);
}

#[test]
fn definitions_stay_local_and_assignment_rebinds() {
    assert_integer("def x = 1; def f = function() { def x = 2; x; }; f(); x;", 1);
    assert_integer("def x = 1; def set = function() { x = 2; }; set(); x;", 2);
    assert!(matches!(runtime_error("x = 5;"), RuntimeError::UnknownIdentifier { .. }));
}

#[test]
fn named_functions_recurse() {
    assert_integer("function fib(n) { if (n < 2) { return n; } return fib(n - 1) + fib(n - 2); } fib(10);",
                   55);
}

#[test]
fn call_results() {
    assert_integer("def f = function() { return 5; 6; }; f();", 5);
    assert_integer("def f = function() { 6; }; f();", 6);
    assert_value("def f = function() { }; f();", Object::Undefined);
    assert_value("def f = function() { return; }; f();", Object::Undefined);
}

#[test]
fn return_inside_an_operand_leaves_the_function() {
    assert_integer("def g = function() { 1 + if (true) { return 2; }; }; g();", 2);
    assert_integer("def g = function() { -if (true) { return 6; }; }; g();", 6);
    assert_integer("def g = function() { if (true) { return 9; }++; }; g();", 9);
}

#[test]
fn return_inside_call_arguments_leaves_the_function() {
    assert_integer("def id = function(x) { x; }; def f = function() { id(if (true) { return 7; }); 99; }; f();",
                   7);
    assert_integer("def f = function() { (if (true) { return 1; })(2); 99; }; f();", 1);
}

#[test]
fn return_inside_array_and_index_leaves_the_function() {
    assert_integer("def f = function() { [if (true) { return 3; }]; 99; }; f();", 3);
    assert_integer("def f = function() { [1, 2][if (true) { return 4; }]; 99; }; f();", 4);
    assert_integer("def f = function() { (if (true) { return 5; })[0]; 99; }; f();", 5);
}

#[test]
fn return_inside_conditions_leaves_the_function() {
    assert_integer("def f = function() { if (if (true) { return 5; }) { 1; } else { 0; }; 99; }; f();",
                   5);
    assert_integer("def f = function() { for (def i = 0; if (true) { return 8; }; i++) { } 99; }; f();",
                   8);
    assert_integer("def f = function() { for (def i = 0; i < 3; if (true) { return 10; }) { } 99; }; f();",
                   10);
}

#[test]
fn return_outside_function_is_error() {
    assert!(matches!(runtime_error("return 5;"), RuntimeError::ReturnOutsideFunction { .. }));
}

#[test]
fn calling_errors() {
    assert!(matches!(runtime_error("y;"), RuntimeError::UnknownIdentifier { .. }));
    assert!(matches!(runtime_error("5(1);"), RuntimeError::NotAFunction { .. }));
    assert!(matches!(runtime_error("def f = function(a) { a; }; f(1, 2);"),
                     RuntimeError::ArgumentCountMismatch { expected: 1,
                                                           found: 2,
                                                           .. }));
    assert!(matches!(runtime_error("length();"), RuntimeError::ArgumentCountMismatch { .. }));
}

#[test]
fn arrays_and_indexing() {
    assert_integer("def a = [1, 2, 3]; a[1];", 2);
    assert_integer("[[1, 2], [3, 4]][1][0];", 3);
    assert_integer("length([1, 2, 3]);", 3);
    assert_value("[];", Vec::<Object>::new());
    assert!(matches!(runtime_error("[1, 2][2];"),
                     RuntimeError::IndexOutOfBounds { len: 2,
                                                      found: 2,
                                                      .. }));
    assert!(matches!(runtime_error("[1, 2][-1];"), RuntimeError::IndexOutOfBounds { .. }));
    assert!(matches!(runtime_error("5[0];"), RuntimeError::TypeError { .. }));
    assert!(matches!(runtime_error("[1][true];"), RuntimeError::TypeError { .. }));
}

#[test]
fn builtins() {
    assert_value("out(1, \"two\", [3]);", Object::Undefined);
    assert!(matches!(runtime_error("length(1);"), RuntimeError::InvalidArgument { .. }));
}

#[test]
fn standard_builtin_names() {
    assert_eq!(BUILTIN_FUNCTIONS, &["out", "length"]);
}

fn answer(_: &[Object], _: usize) -> EvalResult<Object> {
    Ok(Object::Integer(42))
}

static CUSTOM_BUILTINS: &[Builtin] = &[Builtin { name:  "answer",
                                                 arity: Arity::Exact(0),
                                                 func:  answer, }];

#[test]
fn custom_builtin_registry() {
    let evaluator = Evaluator::with_builtins(CUSTOM_BUILTINS);
    let env = Environment::new_root();

    let (program, errors) = parse(tokenize("answer() + 1;"));
    assert!(errors.is_empty());
    assert_eq!(evaluator.eval_program(&program, &env).unwrap(), Object::Integer(43));

    let (program, _) = parse(tokenize("length(\"abc\");"));
    assert!(matches!(evaluator.eval_program(&program, &env),
                     Err(RuntimeError::UnknownIdentifier { .. })));
}

#[test]
fn user_definitions_shadow_builtins() {
    assert_integer("def length = function(x) { 42; }; length(\"abc\");", 42);
}

#[test]
fn empty_program_is_undefined() {
    assert_value("", Object::Undefined);
}

#[test]
fn environment_persists_between_programs() {
    let env = Environment::new_root();

    assert_eq!(get_result("def square = function(x) { x * x; };", &env).map(|v| v.to_string())
                                                                        .unwrap(),
               "function(x){(x*x)}");
    assert_eq!(get_result("square(7);", &env).unwrap(), Object::Integer(49));
}

#[test]
fn parse_errors_stop_evaluation() {
    let env = Environment::new_root();

    match get_result("def y = 1; def = 5;", &env) {
        Err(Error::Parse(errors)) => assert!(!errors.is_empty()),
        other => panic!("expected parse errors, got {other:?}"),
    }
    assert_eq!(env.get("y"), None);
}

#[test]
fn runtime_errors_report_their_line() {
    let error = runtime_error("def a = 1;\ndef b = 2;\na + missing;");

    assert_eq!(error.to_string(), "Error on line 3: Identifier not found: missing.");
}
