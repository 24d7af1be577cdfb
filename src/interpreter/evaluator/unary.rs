use crate::{
    ast::PrefixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates a prefix operator applied to a value.
///
/// `!` negates truthiness and accepts every operand, so `!0` is `true` and
/// `!5` is `false`. `-` negates integers (wrapping on `i64::MIN`) and
/// floats; any other operand kind is an unknown-operator error.
///
/// # Example
/// ```
/// use monkey::{
///     ast::PrefixOperator,
///     interpreter::{evaluator::unary::eval_prefix, value::core::Value},
/// };
///
/// let negated = eval_prefix(PrefixOperator::Negative, &Value::Integer(5)).unwrap();
/// assert_eq!(negated, Value::Integer(-5));
///
/// let truthy = eval_prefix(PrefixOperator::Not, &Value::Integer(0)).unwrap();
/// assert_eq!(truthy, Value::Bool(true));
/// ```
pub fn eval_prefix(operator: PrefixOperator, right: &Value) -> EvalResult<Value> {
    match operator {
        PrefixOperator::Not => Ok(Value::Bool(!right.is_truthy())),
        PrefixOperator::Negative => match right {
            Value::Integer(value) => Ok(Value::Integer(value.wrapping_neg())),
            Value::Float(value) => Ok(Value::Float(-value)),
            _ => Err(RuntimeError::UnknownPrefixOperator { operator,
                                                           right: right.type_name(), }),
        },
    }
}
