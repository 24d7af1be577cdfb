use std::rc::Rc;

use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates a binary operator applied to two values.
///
/// Dispatch is on the operand kinds:
/// - two integers use integer arithmetic and ordering;
/// - floats, or an integer mixed with a float, promote to float;
/// - two booleans support only `==` and `!=`;
/// - two strings support `+` (concatenation), `==`, and `!=`.
///
/// Operands of different kinds are a type mismatch; same-kind operands
/// without a matching rule are an unknown operator.
///
/// # Example
/// ```
/// use monkey::{
///     ast::InfixOperator,
///     interpreter::{evaluator::binary::eval_infix, value::core::Value},
/// };
///
/// let sum = eval_infix(InfixOperator::Add, &Value::Integer(2), &Value::Float(0.5)).unwrap();
/// assert_eq!(sum, Value::Float(2.5));
///
/// let err = eval_infix(InfixOperator::Add, &Value::Integer(5), &Value::Bool(true)).unwrap_err();
/// assert_eq!(err.to_string(), "type mismatch: INTEGER + BOOLEAN");
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn eval_infix(operator: InfixOperator, left: &Value, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_infix(operator, *l, *r),
        (Value::Float(l), Value::Float(r)) => Ok(eval_float_infix(operator, *l, *r)),
        (Value::Integer(l), Value::Float(r)) => Ok(eval_float_infix(operator, *l as f64, *r)),
        (Value::Float(l), Value::Integer(r)) => Ok(eval_float_infix(operator, *l, *r as f64)),
        (Value::Bool(l), Value::Bool(r)) => eval_bool_infix(operator, *l, *r),
        (Value::Str(l), Value::Str(r)) => eval_string_infix(operator, l, r),
        _ if left.type_name() != right.type_name() => {
            Err(RuntimeError::TypeMismatch { left: left.type_name(),
                                             operator,
                                             right: right.type_name() })
        },
        _ => Err(RuntimeError::UnknownInfixOperator { left: left.type_name(),
                                                      operator,
                                                      right: right.type_name() }),
    }
}

/// Integer arithmetic and ordering.
///
/// Arithmetic wraps on overflow; division truncates toward zero, and a zero
/// divisor is an error value rather than a host trap.
fn eval_integer_infix(operator: InfixOperator, left: i64, right: i64) -> EvalResult<Value> {
    let value = match operator {
        InfixOperator::Add => Value::Integer(left.wrapping_add(right)),
        InfixOperator::Sub => Value::Integer(left.wrapping_sub(right)),
        InfixOperator::Mul => Value::Integer(left.wrapping_mul(right)),
        InfixOperator::Div => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            Value::Integer(left.wrapping_div(right))
        },
        InfixOperator::Lt => Value::Bool(left < right),
        InfixOperator::Lte => Value::Bool(left <= right),
        InfixOperator::Gt => Value::Bool(left > right),
        InfixOperator::Gte => Value::Bool(left >= right),
        InfixOperator::Eq => Value::Bool(left == right),
        InfixOperator::NotEq => Value::Bool(left != right),
    };
    Ok(value)
}

/// Float arithmetic and ordering.
///
/// Division follows IEEE-754, so a zero divisor produces an infinity or NaN
/// instead of an error. Equality compares raw bit patterns, the same rule
/// the hash keys use.
fn eval_float_infix(operator: InfixOperator, left: f64, right: f64) -> Value {
    match operator {
        InfixOperator::Add => Value::Float(left + right),
        InfixOperator::Sub => Value::Float(left - right),
        InfixOperator::Mul => Value::Float(left * right),
        InfixOperator::Div => Value::Float(left / right),
        InfixOperator::Lt => Value::Bool(left < right),
        InfixOperator::Lte => Value::Bool(left <= right),
        InfixOperator::Gt => Value::Bool(left > right),
        InfixOperator::Gte => Value::Bool(left >= right),
        InfixOperator::Eq => Value::Bool(left.to_bits() == right.to_bits()),
        InfixOperator::NotEq => Value::Bool(left.to_bits() != right.to_bits()),
    }
}

/// Boolean operands support equality only.
fn eval_bool_infix(operator: InfixOperator, left: bool, right: bool) -> EvalResult<Value> {
    match operator {
        InfixOperator::Eq => Ok(Value::Bool(left == right)),
        InfixOperator::NotEq => Ok(Value::Bool(left != right)),
        _ => Err(RuntimeError::UnknownInfixOperator { left: "BOOLEAN",
                                                      operator,
                                                      right: "BOOLEAN" }),
    }
}

/// String operands support concatenation and equality.
fn eval_string_infix(operator: InfixOperator, left: &str, right: &str) -> EvalResult<Value> {
    match operator {
        InfixOperator::Add => Ok(Value::Str(Rc::new(format!("{left}{right}")))),
        InfixOperator::Eq => Ok(Value::Bool(left == right)),
        InfixOperator::NotEq => Ok(Value::Bool(left != right)),
        _ => Err(RuntimeError::UnknownInfixOperator { left: "STRING",
                                                      operator,
                                                      right: "STRING" }),
    }
}
