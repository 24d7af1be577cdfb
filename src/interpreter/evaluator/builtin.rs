use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the slice of evaluated argument values, already
/// checked against the registered arity.
type BuiltinFn = fn(&[Value]) -> EvalResult<Value>;

/// One entry of the builtin registry: a name, the required argument count,
/// and the native handler.
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    name:  &'static str,
    arity: usize,
    func:  BuiltinFn,
}

impl Builtin {
    /// Returns the name the builtin is registered under.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

/// Defines the builtin registry.
///
/// Each entry provides a string name, the exact arity, and a function
/// pointer implementing the builtin. The macro produces the static lookup
/// table behind [`lookup`].
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[Builtin] = &[
            $(
                Builtin { name: $name, arity: $arity, func: $func },
            )*
        ];
    };
}

builtin_functions! {
    "len"   => { arity: 1, func: len },
    "first" => { arity: 1, func: first },
    "last"  => { arity: 1, func: last },
    "rest"  => { arity: 1, func: rest },
    "push"  => { arity: 2, func: push },
}

/// Looks a name up in the builtin registry.
///
/// Identifier resolution consults this after the environment chain, so a
/// user binding may shadow a builtin.
///
/// # Example
/// ```
/// use monkey::interpreter::evaluator::builtin::lookup;
///
/// assert!(lookup("len").is_some());
/// assert!(lookup("missing").is_none());
/// ```
#[must_use]
pub fn lookup(name: &str) -> Option<Value> {
    BUILTIN_TABLE.iter()
                 .find(|builtin| builtin.name == name)
                 .copied()
                 .map(Value::Builtin)
}

/// Applies a builtin after checking the argument count against the
/// registered arity.
pub(crate) fn apply(builtin: Builtin, args: &[Value]) -> EvalResult<Value> {
    if args.len() != builtin.arity {
        return Err(RuntimeError::WrongArgumentCount { got:  args.len(),
                                                      want: builtin.arity, });
    }
    (builtin.func)(args)
}

/// Requires an array argument, or reports which builtin was misused.
fn expect_array<'a>(builtin: &'static str, value: &'a Value) -> EvalResult<&'a [Value]> {
    match value {
        Value::Array(elements) => Ok(elements),
        other => Err(RuntimeError::ArgumentMustBeArray { builtin,
                                                         got: other.type_name() }),
    }
}

/// `len(x)`: the character count of a string or the element count of an
/// array.
#[allow(clippy::cast_possible_wrap)]
fn len(args: &[Value]) -> EvalResult<Value> {
    match &args[0] {
        Value::Str(text) => Ok(Value::Integer(text.chars().count() as i64)),
        Value::Array(elements) => Ok(Value::Integer(elements.len() as i64)),
        other => Err(RuntimeError::ArgumentNotSupported { builtin: "len",
                                                          got:     other.type_name(), }),
    }
}

/// `first(array)`: the first element, or `null` when empty.
fn first(args: &[Value]) -> EvalResult<Value> {
    let elements = expect_array("first", &args[0])?;
    Ok(elements.first().cloned().unwrap_or(Value::Null))
}

/// `last(array)`: the last element, or `null` when empty.
fn last(args: &[Value]) -> EvalResult<Value> {
    let elements = expect_array("last", &args[0])?;
    Ok(elements.last().cloned().unwrap_or(Value::Null))
}

/// `rest(array)`: a new array of everything but the first element, or
/// `null` when empty.
fn rest(args: &[Value]) -> EvalResult<Value> {
    let elements = expect_array("rest", &args[0])?;
    if elements.is_empty() {
        return Ok(Value::Null);
    }
    Ok(Value::from(elements[1..].to_vec()))
}

/// `push(array, value)`: a new array equal to the first argument with the
/// second appended. The original array is untouched.
fn push(args: &[Value]) -> EvalResult<Value> {
    let elements = expect_array("push", &args[0])?;
    let mut pushed = Vec::with_capacity(elements.len() + 1);
    pushed.extend_from_slice(elements);
    pushed.push(args[1].clone());
    Ok(Value::from(pushed))
}
