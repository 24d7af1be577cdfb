use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::num::i64_to_index,
};

/// Evaluates an index expression over an already-evaluated container and
/// index.
///
/// - Arrays take an integer index; negative or out-of-range indices yield
///   `null`, not an error.
/// - Hashes take any hashable key; a missing key yields `null`, an
///   unhashable one is an error.
/// - Strings take an integer index counted in characters (Unicode scalars)
///   and yield a one-character string, or `null` out of range.
///
/// Anything else is not indexable.
///
/// # Example
/// ```
/// use monkey::interpreter::{evaluator::index::eval_index, value::core::Value};
///
/// let array = Value::from(vec![Value::Integer(10), Value::Integer(20)]);
///
/// assert_eq!(eval_index(&array, &Value::Integer(1)).unwrap(), Value::Integer(20));
/// assert_eq!(eval_index(&array, &Value::Integer(9)).unwrap(), Value::Null);
/// assert_eq!(eval_index(&array, &Value::Integer(-1)).unwrap(), Value::Null);
/// ```
pub fn eval_index(left: &Value, index: &Value) -> EvalResult<Value> {
    match (left, index) {
        (Value::Array(elements), Value::Integer(position)) => {
            let element = i64_to_index(*position).and_then(|position| elements.get(position));
            Ok(element.cloned().unwrap_or(Value::Null))
        },
        (Value::Hash(pairs), key) => {
            let hash_key = key.hash_key()
                              .ok_or(RuntimeError::UnusableHashKey { kind: key.type_name(), })?;
            Ok(pairs.get(&hash_key)
                    .map_or(Value::Null, |pair| pair.value.clone()))
        },
        (Value::Str(text), Value::Integer(position)) => {
            let character =
                i64_to_index(*position).and_then(|position| text.chars().nth(position));
            Ok(character.map_or(Value::Null, |character| {
                            Value::from(character.to_string().as_str())
                        }))
        },
        _ => Err(RuntimeError::IndexNotSupported { kind: left.type_name(), }),
    }
}
