/// Core parser state and the Pratt expression loop.
///
/// Declares the `Parser` struct, token lookahead, the precedence table, and
/// the prefix/infix dispatch driving expression parsing.
pub mod core;

/// Expression parse rules.
///
/// One handler per construct: literals, prefix operators, grouped
/// expressions, conditionals, function literals, arrays, hashes, calls,
/// indexing, and assignment.
pub mod expression;

/// Statement parse rules.
///
/// Dispatches on the leading token to `let`, `return`, function
/// declarations, or expression statements, and parses brace-delimited
/// blocks.
pub mod statement;
