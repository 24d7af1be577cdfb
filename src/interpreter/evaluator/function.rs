use std::cell::Cell;

use crate::{
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{
            builtin,
            core::{EvalResult, eval_block},
        },
        value::core::Value,
    },
};

/// Deepest chain of user-function applications the evaluator will follow.
///
/// Evaluation is a direct recursive walk on the native stack; runaway
/// recursion must surface as an evaluation error before the host stack
/// overflows. The limit leaves ample headroom even on the 2 MiB default
/// stacks of spawned threads.
const MAX_CALL_DEPTH: usize = 200;

thread_local! {
    static CALL_DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Applies a callee to already-evaluated arguments.
///
/// Builtins check their arity against the registry and run natively. User
/// functions bind each parameter to its argument in a fresh environment
/// enclosed by the function's captured scope, then evaluate the body there.
///
/// This is the one place in the call chain where the return sentinel is
/// stripped: a `return` exits the function being applied and nothing above
/// it. Blocks forward the sentinel untouched; stripping it anywhere else
/// would let a callee's `return` unwind its caller.
pub fn apply_function(callee: &Value, arguments: Vec<Value>) -> EvalResult<Value> {
    match callee {
        Value::Builtin(builtin) => builtin::apply(*builtin, &arguments),
        Value::Function(function) => {
            if arguments.len() != function.parameters.len() {
                return Err(RuntimeError::ArityMismatch { expected: function.parameters.len(),
                                                         got:      arguments.len(), });
            }

            let env = Environment::new_enclosed(&function.env);
            for (parameter, argument) in function.parameters.iter().zip(arguments) {
                env.borrow_mut().set(parameter, argument);
            }

            if CALL_DEPTH.with(|depth| depth.replace(depth.get() + 1)) >= MAX_CALL_DEPTH {
                CALL_DEPTH.with(|depth| depth.set(depth.get() - 1));
                return Err(RuntimeError::RecursionLimitExceeded);
            }
            let result = eval_block(&function.body, &env);
            CALL_DEPTH.with(|depth| depth.set(depth.get() - 1));

            match result? {
                Value::Returned(value) => Ok(*value),
                value => Ok(value),
            }
        },
        _ => Err(RuntimeError::NotAFunction { kind: callee.type_name(), }),
    }
}
