use std::fs;

use monkey::{error::MonkeyError, interpreter::value::core::Value, run};
use walkdir::WalkDir;

fn eval(source: &str) -> Value {
    run(source).unwrap_or_else(|error| panic!("script failed: {source}\n{error}"))
}

fn assert_value(source: &str, expected: Value) {
    assert_eq!(eval(source), expected, "source: {source}");
}

fn assert_runtime_error(source: &str, message: &str) {
    match run(source) {
        Err(MonkeyError::Runtime(error)) => {
            assert_eq!(error.to_string(), message, "source: {source}");
        },
        other => panic!("expected runtime error for {source}, got {other:?}"),
    }
}

#[test]
fn script_files_produce_expected_values() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| {
                                         e.path().extension().is_some_and(|ext| ext == "monkey")
                                     })
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = source.lines()
                             .find_map(|line| line.trim().strip_prefix("// expect: "))
                             .unwrap_or_else(|| panic!("{path:?} has no `// expect:` header"));

        let value = run(&source).unwrap_or_else(|e| panic!("script {path:?} failed:\n{e}"));
        assert_eq!(value.to_string(), expected, "script: {path:?}");
        count += 1;
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

#[test]
fn integer_arithmetic() {
    assert_value("5", Value::Integer(5));
    assert_value("-10", Value::Integer(-10));
    assert_value("5 + 5 + 5 + 5 - 10", Value::Integer(10));
    assert_value("2 * 2 * 2 * 2 * 2", Value::Integer(32));
    assert_value("5 + 5 * 2", Value::Integer(15));
    assert_value("(5 + 5) * 2", Value::Integer(20));
    assert_value("50 / 2 * 2 + 10", Value::Integer(60));
    assert_value("7 / 2", Value::Integer(3));
    assert_value("-7 / 2", Value::Integer(-3));
    assert_value("3 * (3 * 3) + 10", Value::Integer(37));
}

#[test]
fn float_arithmetic_and_promotion() {
    assert_value("2.5 + 1.5", Value::Float(4.0));
    assert_value("1.5 + 1", Value::Float(2.5));
    assert_value("2 * 3.25", Value::Float(6.5));
    assert_value("1.0 / 2", Value::Float(0.5));
    assert_value("2.0 == 2", Value::Bool(true));
    assert_value("2 < 2.5", Value::Bool(true));
    assert_value("3.5 >= 3", Value::Bool(true));
    // Float equality is bitwise, so accumulated rounding shows through.
    assert_value("0.1 + 0.2 == 0.3", Value::Bool(false));
}

#[test]
fn comparison_operators() {
    assert_value("1 < 2", Value::Bool(true));
    assert_value("1 > 2", Value::Bool(false));
    assert_value("1 <= 1", Value::Bool(true));
    assert_value("2 >= 3", Value::Bool(false));
    assert_value("1 == 1", Value::Bool(true));
    assert_value("1 != 1", Value::Bool(false));
    assert_value("true == true", Value::Bool(true));
    assert_value("true != false", Value::Bool(true));
    assert_value("(1 < 2) == true", Value::Bool(true));
}

#[test]
fn bang_operator_negates_truthiness() {
    assert_value("!true", Value::Bool(false));
    assert_value("!false", Value::Bool(true));
    assert_value("!5", Value::Bool(false));
    assert_value("!0", Value::Bool(true));
    assert_value("!0.0", Value::Bool(true));
    assert_value("!!true", Value::Bool(true));
    assert_value("!\"\"", Value::Bool(false));
}

#[test]
fn if_expressions() {
    assert_value("if (true) { 10 }", Value::Integer(10));
    assert_value("if (false) { 10 }", Value::Null);
    assert_value("if (1) { 10 }", Value::Integer(10));
    assert_value("if (0) { 10 } else { 20 }", Value::Integer(20));
    assert_value("if (0.0) { 10 } else { 20 }", Value::Integer(20));
    assert_value("if (1 < 2) { 10 } else { 20 }", Value::Integer(10));
}

#[test]
fn return_statements() {
    assert_value("9; return 2 * 5; 9;", Value::Integer(10));
    assert_value("if (1 < 2) { if (10 > 1) { return 10; } return 1; }", Value::Integer(10));
}

#[test]
fn return_exits_the_callee_only() {
    let source = "let inner = fn() { return 10; 99 };
                  let outer = fn() { inner(); 1 };
                  outer();";
    assert_value(source, Value::Integer(1));
}

#[test]
fn let_bindings() {
    assert_value("let x = 5; x", Value::Integer(5));
    assert_value("let x = 5; let y = x * 2; y + 3;", Value::Integer(13));
    assert_value("let a = 1; let f = fn() { let a = 2; a }; f() + a;", Value::Integer(3));
    assert_runtime_error("let a = 1; let a = 2;", "identifier exist: a");
}

#[test]
fn assignment_walks_the_environment_spine() {
    assert_value("let a = 1; a = a + 1; a;", Value::Integer(2));
    assert_value("let a = 1; let b = 2; a = b = 7; a + b;", Value::Integer(14));
    assert_runtime_error("b = 1;", "illegal assign, symbol not exist: b");
    assert_runtime_error("let a = [1]; a[0] = 2;", "illegal assign, unsupported target");
}

#[test]
fn closures_capture_their_environment() {
    let adder = "let adder = fn(x) { fn(y) { x + y } };
                 let add2 = adder(2);
                 add2(40);";
    assert_value(adder, Value::Integer(42));

    let counter = "let counter = fn() { let n = 0; fn() { n = n + 1; n } };
                   let c = counter();
                   c(); c(); c();";
    assert_value(counter, Value::Integer(3));
}

#[test]
fn closures_see_later_updates_to_captured_frames() {
    assert_value("let x = 1; let f = fn() { x }; x = 5; f();", Value::Integer(5));

    let siblings = "let make = fn() {
                        let n = 0;
                        [fn() { n = n + 1; n }, fn() { n }]
                    };
                    let pair = make();
                    let inc = pair[0];
                    let get = pair[1];
                    inc(); inc(); get();";
    assert_value(siblings, Value::Integer(2));
}

#[test]
fn function_declarations_and_recursion() {
    assert_value("fn double(x) { x * 2 } double(21);", Value::Integer(42));

    let fib = "fn fib(n) { if (n < 2) { return n; } fib(n - 1) + fib(n - 2) } fib(10);";
    assert_value(fib, Value::Integer(55));

    assert_runtime_error("fn f() { 1 } fn f() { 2 }", "identifier exist: f");
    assert_runtime_error("let g = 1; fn g() { 1 }", "identifier exist: g");
}

#[test]
fn functions_are_first_class() {
    let source = "let apply = fn(f, x) { f(x) };
                  apply(fn(n) { n * n }, 8);";
    assert_value(source, Value::Integer(64));
}

#[test]
fn call_errors() {
    assert_runtime_error("5(1);", "not a function: INTEGER");
    assert_runtime_error("let f = fn(x) { x }; f(1, 2);",
                         "args number mismatch, expect length: 1, but got: 2");
    assert_runtime_error("let f = fn(x, y) { x }; f(1);",
                         "args number mismatch, expect length: 2, but got: 1");
}

#[test]
fn string_operations() {
    assert_value("\"Hello\" + \" \" + \"World!\"", Value::from("Hello World!"));
    assert_value("\"a\" == \"a\"", Value::Bool(true));
    assert_value("\"a\" != \"b\"", Value::Bool(true));
    assert_runtime_error("\"a\" < \"b\"", "unknown operator: STRING < STRING");
    assert_runtime_error("\"a\" - \"b\"", "unknown operator: STRING - STRING");
}

#[test]
fn string_indexing_is_by_character() {
    assert_value("\"héllo\"[1]", Value::from("é"));
    assert_value("\"abc\"[0]", Value::from("a"));
    assert_value("\"abc\"[3]", Value::Null);
    assert_value("\"abc\"[-1]", Value::Null);
    assert_value("len(\"héllo\")", Value::Integer(5));
}

#[test]
fn array_literals_and_indexing() {
    assert_value("[1, 2 * 2, 3 + 3][1]", Value::Integer(4));
    assert_value("let a = [1, 2, 3]; a[0] + a[1] + a[2];", Value::Integer(6));
    assert_value("[1, 2, 3][3]", Value::Null);
    assert_value("[1, 2, 3][-1]", Value::Null);
    assert_runtime_error("5[0]", "index operator not supported: INTEGER");
}

#[test]
fn array_builtins() {
    assert_value("len([1, 2, 3])", Value::Integer(3));
    assert_value("len([])", Value::Integer(0));
    assert_value("first([7, 8])", Value::Integer(7));
    assert_value("first([])", Value::Null);
    assert_value("last([7, 8])", Value::Integer(8));
    assert_value("last([])", Value::Null);
    assert_value("rest([1, 2, 3])[0]", Value::Integer(2));
    assert_value("len(rest([1, 2, 3]))", Value::Integer(2));
    assert_value("rest([])", Value::Null);
    assert_value("push([1], 2)[1]", Value::Integer(2));
}

#[test]
fn push_is_non_destructive() {
    assert_value("let a = [1, 2, 3]; push(a, 4); len(a);", Value::Integer(3));
    assert_value("let a = [1, 2, 3]; len(push(a, 4));", Value::Integer(4));
}

#[test]
fn builtin_errors() {
    assert_runtime_error("len(1)", "argument to `len` not supported, got INTEGER");
    assert_runtime_error("len()", "wrong number of arguments. got=0, want=1");
    assert_runtime_error("len(\"a\", \"b\")", "wrong number of arguments. got=2, want=1");
    assert_runtime_error("first(1)", "argument to `first` must be ARRAY, got INTEGER");
    assert_runtime_error("rest(\"abc\")", "argument to `rest` must be ARRAY, got STRING");
    assert_runtime_error("push(1, 1)", "argument to `push` must be ARRAY, got INTEGER");
}

#[test]
fn hash_literals_and_indexing() {
    let hash = "let h = {\"one\": 1, 2: \"two\", true: 3};";
    assert_value(&format!("{hash} h[\"one\"]"), Value::Integer(1));
    assert_value(&format!("{hash} h[2]"), Value::from("two"));
    assert_value(&format!("{hash} h[true]"), Value::Integer(3));
    assert_value(&format!("{hash} h[\"missing\"]"), Value::Null);
    assert_value("{\"a\": 1, \"a\": 2}[\"a\"]", Value::Integer(2));
}

#[test]
fn hash_keys_are_tagged_by_type() {
    // Integer 1 and float 1.0 are distinct keys.
    assert_value("{1: \"int\"}[1.0]", Value::Null);
    assert_value("{1.0: \"float\"}[1.0]", Value::from("float"));
    assert_value("{1: \"int\"}[1]", Value::from("int"));
}

#[test]
fn unusable_hash_keys() {
    assert_runtime_error("{}[fn(x) { x }]", "unusable as hash key: FUNCTION");
    assert_runtime_error("{[1]: 2}", "unusable as hash key: ARRAY");
}

#[test]
fn type_and_operator_errors() {
    assert_runtime_error("5 + true;", "type mismatch: INTEGER + BOOLEAN");
    assert_runtime_error("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN");
    assert_runtime_error("true + false;", "unknown operator: BOOLEAN + BOOLEAN");
    assert_runtime_error("-true;", "unknown operator: -BOOLEAN");
    assert_runtime_error("foobar;", "identifier not found: foobar");
    assert_runtime_error("\"a\" + 1;", "type mismatch: STRING + INTEGER");
}

#[test]
fn integer_division_by_zero_is_an_error_value() {
    assert_runtime_error("5 / 0;", "division by zero");
    assert_runtime_error("let x = 10; x / (5 - 5);", "division by zero");
    // Float division follows IEEE-754 instead.
    assert_value("5.0 / 0.0", Value::Float(f64::INFINITY));
}

#[test]
fn the_first_error_short_circuits() {
    // The left operand fails before the division is ever evaluated.
    assert_runtime_error("nonexistent + (1 / 0);", "identifier not found: nonexistent");
    // Arguments evaluate left to right; the first failure wins.
    assert_runtime_error("len(nonexistent, 1 / 0);", "identifier not found: nonexistent");
}

#[test]
fn printable_forms() {
    assert_eq!(eval("7").to_string(), "7");
    assert_eq!(eval("2.5").to_string(), "2.500000");
    assert_eq!(eval("true").to_string(), "true");
    assert_eq!(eval("\"raw text\"").to_string(), "raw text");
    assert_eq!(eval("if (false) { 1 }").to_string(), "null");
    assert_eq!(eval("[1, \"two\", 3.0]").to_string(), "[1, two, 3.000000]");
    assert_eq!(eval("len").to_string(), "builtin function");
    assert_eq!(eval("fn(x) { x; }").to_string(), "fn(x) {\nx;\n}");
    assert_eq!(eval("{\"one\": 1}").to_string(), "{one: 1}");
}

#[test]
fn runaway_recursion_is_an_error_not_a_crash() {
    assert_runtime_error("fn spin(n) { spin(n + 1) } spin(0);",
                         "maximum recursion depth exceeded");
}

#[test]
fn comments_are_skipped() {
    assert_value("let x = 5; // trailing\n// a full-line comment\nx", Value::Integer(5));
}
