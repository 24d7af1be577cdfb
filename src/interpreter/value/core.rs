use std::{collections::HashMap, fmt, rc::Rc};

use crate::{
    ast::BlockStatement,
    interpreter::{environment::Env, evaluator::builtin::Builtin, value::hash_key::HashKey},
};

/// Represents a runtime value in the interpreter.
///
/// This enum models every type a program can produce. Composite values are
/// reference-counted and immutable after construction, so cloning a value is
/// cheap and sharing is free of aliasing surprises.
///
/// `Returned` never escapes the evaluator: blocks forward it upward and it
/// is unwrapped at function application and at the program top.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A 64-bit floating-point number.
    Float(f64),
    /// A boolean, `true` or `false`.
    Bool(bool),
    /// An immutable string.
    Str(Rc<String>),
    /// The absence of a value, e.g. an `if` without a taken branch.
    Null,
    /// An ordered sequence of values.
    Array(Rc<Vec<Value>>),
    /// A mapping from hash keys to key/value pairs. The original key is
    /// stored next to the value so iteration can reproduce it.
    Hash(Rc<HashMap<HashKey, HashPair>>),
    /// A first-class function together with its captured environment.
    Function(Rc<FunctionValue>),
    /// A native builtin function.
    Builtin(Builtin),
    /// The return sentinel wrapping the value of a `return` statement.
    Returned(Box<Value>),
}

/// One key/value entry of a hash.
#[derive(Debug, Clone, PartialEq)]
pub struct HashPair {
    /// The key as written, for display and iteration.
    pub key:   Value,
    /// The stored value.
    pub value: Value,
}

/// A user-defined function value.
///
/// The environment handle is shared with the scope the literal was
/// evaluated in; every application encloses it, which is how closures see
/// later updates to their captured frame.
#[derive(Clone)]
pub struct FunctionValue {
    /// The parameter names, in order.
    pub parameters: Vec<String>,
    /// The function body.
    pub body:       BlockStatement,
    /// The environment captured at the literal's evaluation.
    pub env:        Env,
}

// The captured environment can reach this function again through a binding,
// so a derived `Debug` would recurse forever.
impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
         .field("parameters", &self.parameters)
         .field("body", &self.body)
         .finish_non_exhaustive()
    }
}

impl Value {
    /// Returns the type tag used in error messages and hash keys.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(1).type_name(), "INTEGER");
    /// assert_eq!(Value::Null.type_name(), "NULL");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::Float(_) => "FLOAT",
            Self::Bool(_) => "BOOLEAN",
            Self::Str(_) => "STRING",
            Self::Null => "NULL",
            Self::Array(_) => "ARRAY",
            Self::Hash(_) => "HASH",
            Self::Function(_) => "FUNCTION",
            Self::Builtin(_) => "BUILTIN",
            Self::Returned(_) => "RETURN_VALUE",
        }
    }

    /// Returns the truthiness used by `if` conditions and the `!` operator.
    ///
    /// `null`, `false`, integer `0`, and float `0.0` are false; every other
    /// value, including empty strings and arrays, is true.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::value::core::Value;
    ///
    /// assert!(!Value::Integer(0).is_truthy());
    /// assert!(Value::Integer(7).is_truthy());
    /// assert!(!Value::Null.is_truthy());
    /// assert!(Value::from("").is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null | Self::Bool(false) => false,
            Self::Bool(true) => true,
            Self::Integer(value) => *value != 0,
            Self::Float(value) => *value != 0.0,
            _ => true,
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(Rc::new(value.to_owned()))
    }
}

impl From<Vec<Self>> for Value {
    fn from(elements: Vec<Self>) -> Self {
        Self::Array(Rc::new(elements))
    }
}

// Float equality is over raw IEEE-754 bits, matching the hash-key rule.
// Functions compare by identity; structural comparison would have to
// traverse captured environments, which may reach the function itself.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(l), Self::Integer(r)) => l == r,
            (Self::Float(l), Self::Float(r)) => l.to_bits() == r.to_bits(),
            (Self::Bool(l), Self::Bool(r)) => l == r,
            (Self::Str(l), Self::Str(r)) => l == r,
            (Self::Null, Self::Null) => true,
            (Self::Array(l), Self::Array(r)) => l == r,
            (Self::Hash(l), Self::Hash(r)) => l == r,
            (Self::Function(l), Self::Function(r)) => Rc::ptr_eq(l, r),
            (Self::Builtin(l), Self::Builtin(r)) => l.name() == r.name(),
            (Self::Returned(l), Self::Returned(r)) => l == r,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value:.6}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Str(value) => write!(f, "{value}"),
            Self::Null => write!(f, "null"),
            Self::Array(elements) => {
                write!(f, "[")?;
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, "]")
            },
            Self::Hash(pairs) => {
                write!(f, "{{")?;
                for (index, pair) in pairs.values().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", pair.key, pair.value)?;
                }
                write!(f, "}}")
            },
            Self::Function(function) => {
                write!(f, "fn(")?;
                for (index, parameter) in function.parameters.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{parameter}")?;
                }
                write!(f, ") {{\n{}\n}}", function.body)
            },
            Self::Builtin(_) => write!(f, "builtin function"),
            Self::Returned(value) => write!(f, "{value}"),
        }
    }
}
