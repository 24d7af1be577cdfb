//! # monkey
//!
//! monkey is a tree-walking interpreter for Monkey, a small dynamically-typed,
//! expression-oriented scripting language with first-class functions, lexical
//! closures, integers, floats, booleans, strings, arrays, and hashes.
//!
//! Source text flows through three stages: the lexer turns characters into
//! tokens, a Pratt parser turns tokens into an abstract syntax tree, and the
//! evaluator walks the tree to a value.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::MonkeyError,
    interpreter::{
        environment::{Env, Environment},
        evaluator::core::eval_program,
        lexer::Lexer,
        parser::core::Parser,
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the statement and expression enums that represent
/// source code as a tree, together with a canonical printable form:
/// rendering a tree and re-parsing the output yields an equal tree.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Keeps statements and expressions apart at the type level.
/// - Provides the printable form used by diagnostics and tests.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or evaluating code. Parse errors accumulate; runtime errors propagate and
/// short-circuit.
///
/// # Responsibilities
/// - Defines error enums for all failure modes.
/// - Renders the exact diagnostic message for each.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, and environments to provide a complete runtime for
/// source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and values.
/// - Provides the environment chain that scopes bindings and closures.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// The interactive read-evaluate-print loop.
///
/// Reads lines from an input, evaluates them against a session-long
/// environment, and writes each result's printable form.
pub mod repl;
/// General utilities shared across the interpreter.
///
/// # Responsibilities
/// - FNV-1a hashing for the string hash-key rule.
/// - Index conversions between language integers and host sizes.
pub mod util;

/// Evaluates a source text in a fresh environment and returns its value.
///
/// The text is lexed and parsed first; if any parse errors were collected
/// the program is not evaluated and the errors are returned together.
/// Otherwise the program runs to either its final value or its first
/// runtime error.
///
/// # Errors
/// Returns [`MonkeyError::Parse`] when the source does not parse, and
/// [`MonkeyError::Runtime`] when evaluation fails.
///
/// # Examples
/// ```
/// use monkey::interpreter::value::core::Value;
///
/// let value = monkey::run("let x = 5; let y = x * 2; y + 3;").unwrap();
/// assert_eq!(value, Value::Integer(13));
///
/// // An unbound identifier is a runtime error.
/// let error = monkey::run("foobar;").unwrap_err();
/// assert_eq!(error.to_string(), "ERROR: identifier not found: foobar");
/// ```
pub fn run(source: &str) -> Result<Value, MonkeyError> {
    let env = Environment::new();
    eval_source(source, &env)
}

/// Evaluates a source text against an existing environment.
///
/// Bindings created by the text persist in `env`, which is how the REPL
/// carries state from line to line.
///
/// # Errors
/// Returns [`MonkeyError::Parse`] when the source does not parse, and
/// [`MonkeyError::Runtime`] when evaluation fails.
///
/// # Example
/// ```
/// use monkey::interpreter::{environment::Environment, value::core::Value};
///
/// let env = Environment::new();
/// monkey::eval_source("let greeting = \"hello\";", &env).unwrap();
///
/// let value = monkey::eval_source("greeting + \" world\"", &env).unwrap();
/// assert_eq!(value, Value::from("hello world"));
/// ```
pub fn eval_source(source: &str, env: &Env) -> Result<Value, MonkeyError> {
    let (program, errors) = Parser::new(Lexer::new(source)).parse_program();
    if !errors.is_empty() {
        return Err(MonkeyError::Parse(errors));
    }
    Ok(eval_program(&program, env)?)
}
