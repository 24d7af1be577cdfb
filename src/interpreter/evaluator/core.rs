use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{BlockStatement, Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Env,
        evaluator::{binary, builtin, function, index, unary},
        value::core::{FunctionValue, HashPair, Value},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure. The `?` operator is the single
/// propagation point: any sub-evaluation that fails short-circuits its
/// caller before the caller inspects the value.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a whole program in the given environment.
///
/// Statements run in source order; the program's value is the last
/// statement's value. A `return` at the top level stops execution and the
/// wrapped value — unwrapped here — becomes the program's value.
///
/// # Parameters
/// - `program`: The parsed program.
/// - `env`: The root environment; reused across calls by the REPL.
///
/// # Returns
/// The program's final value, or the first runtime error raised.
///
/// # Example
/// ```
/// use monkey::interpreter::{
///     environment::Environment,
///     evaluator::core::eval_program,
///     lexer::Lexer,
///     parser::core::Parser,
///     value::core::Value,
/// };
///
/// let (program, errors) = Parser::new(Lexer::new("let x = 5; x * 2;")).parse_program();
/// assert!(errors.is_empty());
///
/// let env = Environment::new();
/// let value = eval_program(&program, &env).unwrap();
///
/// assert_eq!(value, Value::Integer(10));
/// ```
pub fn eval_program(program: &Program, env: &Env) -> EvalResult<Value> {
    let mut result = Value::Null;
    for statement in &program.statements {
        result = eval_statement(statement, env)?;
        if let Value::Returned(value) = result {
            // The program is the outermost block; nothing above it needs to
            // observe the sentinel, so it is unwrapped here.
            return Ok(*value);
        }
    }
    Ok(result)
}

/// Evaluates the statements of a block.
///
/// Identical to [`eval_program`] except that a `return` value is forwarded
/// still wrapped: blocks nest, and only the function boundary (or the
/// program top) may strip the sentinel. Unwrapping here would make a
/// `return` inside a nested block resume the outer block instead of exiting
/// the function.
pub(crate) fn eval_block(block: &BlockStatement, env: &Env) -> EvalResult<Value> {
    let mut result = Value::Null;
    for statement in &block.statements {
        result = eval_statement(statement, env)?;
        if matches!(result, Value::Returned(_)) {
            return Ok(result);
        }
    }
    Ok(result)
}

/// Evaluates a single statement.
///
/// `let` and `fn` declarations bind into the current frame and yield
/// `null`; `return` wraps its value in the return sentinel; an expression
/// statement yields the expression's value.
fn eval_statement(statement: &Statement, env: &Env) -> EvalResult<Value> {
    match statement {
        Statement::Let { name, value } => {
            let value = eval_expression(value, env)?;
            if env.borrow().get_local(name).is_some() {
                return Err(RuntimeError::IdentifierExists { name: name.clone() });
            }
            env.borrow_mut().set(name, value);
            Ok(Value::Null)
        },
        Statement::FunctionDeclaration { name,
                                         parameters,
                                         body, } => {
            if env.borrow().get_local(name).is_some() {
                return Err(RuntimeError::IdentifierExists { name: name.clone() });
            }
            // The captured environment is the one the name lands in, which
            // is what makes self-recursion resolve.
            let function = Value::Function(Rc::new(FunctionValue { parameters:
                                                                      parameters.clone(),
                                                                  body: body.clone(),
                                                                  env: Rc::clone(env), }));
            env.borrow_mut().set(name, function);
            Ok(Value::Null)
        },
        Statement::Return { value } => {
            let value = eval_expression(value, env)?;
            Ok(Value::Returned(Box::new(value)))
        },
        Statement::Expression { expr } => eval_expression(expr, env),
    }
}

/// Evaluates a single expression.
///
/// This is the heart of the tree walk: literals map directly to values,
/// identifiers resolve against the environment chain and then the builtin
/// registry, and compound expressions recurse, propagating the first error.
pub(crate) fn eval_expression(expr: &Expr, env: &Env) -> EvalResult<Value> {
    match expr {
        Expr::Identifier { name } => eval_identifier(name, env),
        Expr::IntegerLiteral { value } => Ok(Value::Integer(*value)),
        Expr::FloatLiteral { value } => Ok(Value::Float(*value)),
        Expr::BooleanLiteral { value } => Ok(Value::Bool(*value)),
        Expr::StringLiteral { value } => Ok(Value::from(value.as_str())),
        Expr::ArrayLiteral { elements } => {
            let elements = eval_expressions(elements, env)?;
            Ok(Value::from(elements))
        },
        Expr::HashLiteral { pairs } => eval_hash_literal(pairs, env),
        Expr::FunctionLiteral { parameters, body } => {
            Ok(Value::Function(Rc::new(FunctionValue { parameters: parameters.clone(),
                                                       body:       body.clone(),
                                                       env:        Rc::clone(env), })))
        },
        Expr::Prefix { operator, right } => {
            let right = eval_expression(right, env)?;
            unary::eval_prefix(*operator, &right)
        },
        Expr::Infix { left,
                      operator,
                      right, } => {
            let left = eval_expression(left, env)?;
            let right = eval_expression(right, env)?;
            binary::eval_infix(*operator, &left, &right)
        },
        Expr::If { condition,
                   consequence,
                   alternative, } => {
            let condition = eval_expression(condition, env)?;
            if condition.is_truthy() {
                eval_block(consequence, env)
            } else if let Some(alternative) = alternative {
                eval_block(alternative, env)
            } else {
                Ok(Value::Null)
            }
        },
        Expr::Call { function, arguments } => {
            let callee = eval_expression(function, env)?;
            let arguments = eval_expressions(arguments, env)?;
            function::apply_function(&callee, arguments)
        },
        Expr::Index { left, index } => {
            let left = eval_expression(left, env)?;
            let index = eval_expression(index, env)?;
            index::eval_index(&left, &index)
        },
        Expr::Assign { target, value } => eval_assign(target, value, env),
    }
}

/// Resolves an identifier: environment chain first, builtins second.
fn eval_identifier(name: &str, env: &Env) -> EvalResult<Value> {
    if let Some(value) = env.borrow().get(name) {
        return Ok(value);
    }
    builtin::lookup(name).ok_or_else(|| RuntimeError::IdentifierNotFound { name: name.to_owned() })
}

/// Evaluates a list of expressions left to right, stopping at the first
/// error. Used for array elements and call arguments.
fn eval_expressions(exprs: &[Expr], env: &Env) -> EvalResult<Vec<Value>> {
    let mut values = Vec::with_capacity(exprs.len());
    for expr in exprs {
        values.push(eval_expression(expr, env)?);
    }
    Ok(values)
}

/// Evaluates a hash literal.
///
/// Pairs evaluate in source order, key before value; a later pair with an
/// equal key overwrites the earlier one.
fn eval_hash_literal(pairs: &[(Expr, Expr)], env: &Env) -> EvalResult<Value> {
    let mut map = HashMap::with_capacity(pairs.len());
    for (key_expr, value_expr) in pairs {
        let key = eval_expression(key_expr, env)?;
        let hash_key =
            key.hash_key()
               .ok_or(RuntimeError::UnusableHashKey { kind: key.type_name(), })?;
        let value = eval_expression(value_expr, env)?;
        map.insert(hash_key, HashPair { key, value });
    }
    Ok(Value::Hash(Rc::new(map)))
}

/// Evaluates an assignment expression.
///
/// The right-hand side evaluates first. Identifier targets overwrite the
/// binding in whichever frame of the environment spine owns it; every other
/// target the parser let through is rejected here, values being immutable
/// after construction.
fn eval_assign(target: &Expr, value: &Expr, env: &Env) -> EvalResult<Value> {
    let value = eval_expression(value, env)?;
    match target {
        Expr::Identifier { name } => {
            if env.borrow_mut().assign(name, value.clone()) {
                Ok(value)
            } else {
                Err(RuntimeError::SymbolNotFound { name: name.clone() })
            }
        },
        _ => Err(RuntimeError::UnsupportedAssignTarget),
    }
}
