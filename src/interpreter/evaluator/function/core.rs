use std::io::Write;

use tracing::debug;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Interpreter, resolve},
            environment::Environment,
            function::native::{self, NativeDef},
        },
        token::{Position, Token},
        value::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Evaluates a call.
    ///
    /// The callee is looked up as a user function through the environment
    /// chain first, then in the native table. Only once a callee is found
    /// are the arguments resolved, in the caller's environment.
    ///
    /// For a user function, every argument is resolved before the callee's
    /// environment exists. The body then runs
    /// in a fresh environment enclosed by the caller's, with each parameter
    /// bound to the argument in the same position. That environment is
    /// dropped when the body finishes, whether or not it succeeded; calls
    /// never produce a value.
    ///
    /// # Parameters
    /// - `env`: The caller's environment.
    /// - `callee`: Function name.
    /// - `position`: Where the call appears, for error reporting.
    /// - `args`: Argument tokens.
    ///
    /// # Errors
    /// - `ArityMismatch` if the argument count differs from the parameter
    ///   count.
    /// - `UnknownFunction` if the name is neither a user nor a native
    ///   function.
    /// - `UndefinedName` for unbound identifier arguments.
    /// - Any error raised while executing the body.
    pub fn call<'a>(&mut self,
                    env: &Environment<'a>,
                    callee: &str,
                    position: Position,
                    args: &[Token])
                    -> EvalResult<()> {
        let Some(function) = env.function(callee) else {
            let Some(native) = native::lookup(callee) else {
                return Err(RuntimeError::UnknownFunction { name: callee.to_owned(),
                                                           position });
            };
            let values = resolve_all(env, args)?;
            return self.call_native(native, callee, position, &values);
        };

        let values = resolve_all(env, args)?;

        if function.params.len() != values.len() {
            return Err(RuntimeError::ArityMismatch { name: callee.to_owned(),
                                                     expected: function.params.len(),
                                                     found: values.len(),
                                                     position });
        }

        debug!(%callee, %position, depth = env.depth() + 1, "calling function");

        let mut local = Environment::enclosed(env);
        for (param, value) in function.params.iter().zip(values) {
            local.define_variable(param, value);
        }
        self.execute(&mut local, function.body)
    }

    /// Runs a native function against the interpreter's output.
    fn call_native(&mut self,
                   native: NativeDef,
                   callee: &str,
                   position: Position,
                   args: &[Value])
                   -> EvalResult<()> {
        debug!(%callee, %position, args = args.len(), "calling native function");

        (native.func)(args, &mut self.out).map_err(|e| RuntimeError::Output { details: e.to_string(),
                                                                              position })
    }
}

fn resolve_all(env: &Environment<'_>, args: &[Token]) -> EvalResult<Vec<Value>> {
    args.iter().map(|arg| resolve(env, arg)).collect()
}
