/// The evaluator module executes AST nodes and computes values.
///
/// The evaluator walks the tree produced by the parser, resolves
/// identifiers against the environment chain, applies operators and
/// functions, and propagates `return` values and runtime errors.
///
/// # Responsibilities
/// - Evaluates statements and expressions in source order.
/// - Implements closures via shared captured environments.
/// - Reports runtime errors such as type mismatches or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens,
/// each corresponding to a meaningful language element such as a number,
/// identifier, operator, delimiter, or keyword.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Handles numeric and string literals, identifiers, and operators.
/// - Produces `ILLEGAL` tokens for malformed input instead of halting.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a Pratt (operator-precedence) recursive-descent parser: a
/// prefix rule per token kind starts an expression, and infix rules extend
/// it while the next operator binds tighter than the current context.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Applies the precedence and associativity rules of the language.
/// - Accumulates parse errors instead of aborting.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all the value variants used during execution, such
/// as integers, floats, booleans, strings, arrays, hashes, and functions,
/// together with the hash-key protocol and the printable forms used by the
/// REPL.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements truthiness, type tags, and hash keys.
/// - Provides the printable form of every value.
pub mod value;

/// The environment module implements lexically nested symbol tables.
///
/// An environment maps names to values and links to the environment of the
/// enclosing scope. Function values hold a shared handle to the environment
/// in which their literal was evaluated, which is what makes closures work.
pub mod environment;
