//! User function calls
//!
//! Parameters are global symbols. A call evaluates the required arguments
//! first, then binds them through an [`Activation`](crate::Activation)
//! that restores the previous values when the body finishes.

use super::Evaluate;
use crate::ast::UserCall;
use crate::error::EvalError;
use crate::Interpreter;

impl Evaluate for UserCall {
    fn eval(&self, interp: &mut Interpreter) -> f64 {
        interp.call_user(self)
    }
}

impl Interpreter {
    /// Invoke a user-defined function.
    ///
    /// Reports `UndefinedFunction` if the symbol has no body and
    /// `TooFewArguments` if fewer argument expressions than parameters are
    /// supplied; both yield `0.0` without evaluating any argument. Extra
    /// arguments are ignored and never evaluated.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn call_user(&mut self, call: &UserCall) -> f64 {
        let symbol = &self.symbols()[call.func];
        let Some(function) = symbol.function().cloned() else {
            let name = symbol.name().to_string();
            self.report(EvalError::UndefinedFunction { name });
            return 0.0;
        };

        let arity = function.arity();
        let args = call.arguments();
        if args.len() < arity {
            let name = symbol.name().to_string();
            self.report(EvalError::TooFewArguments {
                name,
                expected: arity,
                got: args.len(),
            });
            return 0.0;
        }

        // Evaluate everything before binding anything, so arguments see the
        // caller's values even when they mention the callee's parameters.
        let values: Vec<f64> = args[..arity].iter().map(|arg| arg.eval(self)).collect();

        tracing::trace!(
            function = self.symbols()[call.func].name(),
            arity,
            ignored = args.len() - arity,
            depth = self.call_depth(),
            "calling"
        );

        let mut frame = self.activate(&function.params, &values);
        frame.eval(&function.body)
    }
}
