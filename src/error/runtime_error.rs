use crate::ast::{InfixOperator, PrefixOperator};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can be raised during evaluation.
///
/// A runtime error short-circuits the remainder of the current statement and
/// propagates through blocks and function calls to the program top, where it
/// is printed as `ERROR: <message>`.
pub enum RuntimeError {
    /// An identifier was neither bound nor a builtin.
    IdentifierNotFound {
        /// The unresolved name.
        name: String,
    },
    /// A `let` or `fn` declaration re-used a name already bound in the
    /// current frame. Shadowing an outer frame is allowed; redefinition in
    /// the same frame is not.
    IdentifierExists {
        /// The re-declared name.
        name: String,
    },
    /// An assignment named a binding that does not exist in any frame.
    SymbolNotFound {
        /// The unresolved name.
        name: String,
    },
    /// The assignment target was not an identifier.
    UnsupportedAssignTarget,
    /// A binary operator was applied to operands of different kinds.
    TypeMismatch {
        /// The left operand's type tag.
        left:     &'static str,
        /// The operator.
        operator: InfixOperator,
        /// The right operand's type tag.
        right:    &'static str,
    },
    /// A binary operator has no meaning for its operand kinds.
    UnknownInfixOperator {
        /// The left operand's type tag.
        left:     &'static str,
        /// The operator.
        operator: InfixOperator,
        /// The right operand's type tag.
        right:    &'static str,
    },
    /// A prefix operator has no meaning for its operand kind.
    UnknownPrefixOperator {
        /// The operator.
        operator: PrefixOperator,
        /// The operand's type tag.
        right:    &'static str,
    },
    /// The callee of a call expression is not callable.
    NotAFunction {
        /// The callee's type tag.
        kind: &'static str,
    },
    /// A function was called with the wrong number of arguments.
    ArityMismatch {
        /// The function's parameter count.
        expected: usize,
        /// The number of arguments supplied.
        got:      usize,
    },
    /// A builtin was called with the wrong number of arguments.
    WrongArgumentCount {
        /// The number of arguments supplied.
        got:  usize,
        /// The number of arguments the builtin requires.
        want: usize,
    },
    /// A builtin that only operates on arrays received something else.
    ArgumentMustBeArray {
        /// The builtin's name.
        builtin: &'static str,
        /// The offending argument's type tag.
        got:     &'static str,
    },
    /// A builtin received an argument kind it has no behavior for.
    ArgumentNotSupported {
        /// The builtin's name.
        builtin: &'static str,
        /// The offending argument's type tag.
        got:     &'static str,
    },
    /// A hash was built or indexed with a key kind that is not hashable.
    UnusableHashKey {
        /// The key's type tag.
        kind: &'static str,
    },
    /// The index operator was applied to a value that is not indexable.
    IndexNotSupported {
        /// The indexed value's type tag.
        kind: &'static str,
    },
    /// Integer division by zero.
    DivisionByZero,
    /// The call stack grew past the evaluator's depth limit.
    RecursionLimitExceeded,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IdentifierNotFound { name } => write!(f, "identifier not found: {name}"),
            Self::IdentifierExists { name } => write!(f, "identifier exist: {name}"),
            Self::SymbolNotFound { name } => {
                write!(f, "illegal assign, symbol not exist: {name}")
            },
            Self::UnsupportedAssignTarget => write!(f, "illegal assign, unsupported target"),
            Self::TypeMismatch { left,
                                 operator,
                                 right, } => {
                write!(f, "type mismatch: {left} {operator} {right}")
            },
            Self::UnknownInfixOperator { left,
                                         operator,
                                         right, } => {
                write!(f, "unknown operator: {left} {operator} {right}")
            },
            Self::UnknownPrefixOperator { operator, right } => {
                write!(f, "unknown operator: {operator}{right}")
            },
            Self::NotAFunction { kind } => write!(f, "not a function: {kind}"),
            Self::ArityMismatch { expected, got } => {
                write!(f, "args number mismatch, expect length: {expected}, but got: {got}")
            },
            Self::WrongArgumentCount { got, want } => {
                write!(f, "wrong number of arguments. got={got}, want={want}")
            },
            Self::ArgumentMustBeArray { builtin, got } => {
                write!(f, "argument to `{builtin}` must be ARRAY, got {got}")
            },
            Self::ArgumentNotSupported { builtin, got } => {
                write!(f, "argument to `{builtin}` not supported, got {got}")
            },
            Self::UnusableHashKey { kind } => write!(f, "unusable as hash key: {kind}"),
            Self::IndexNotSupported { kind } => {
                write!(f, "index operator not supported: {kind}")
            },
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::RecursionLimitExceeded => write!(f, "maximum recursion depth exceeded"),
        }
    }
}

impl std::error::Error for RuntimeError {}
