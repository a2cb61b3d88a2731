//! Built-in function dispatch

use super::Evaluate;
use crate::ast::{Builtin, BuiltinCall};
use crate::error::EvalError;
use crate::Interpreter;

impl Builtin {
    /// Apply the numeric part of this built-in; `print` is the identity.
    ///
    /// No domain checks: `sqrt(-1)` and `log(-1)` are NaN, `log(0)` is
    /// negative infinity.
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Builtin::Sqrt => value.sqrt(),
            Builtin::Exp => value.exp(),
            Builtin::Log => value.ln(),
            Builtin::Print => value,
        }
    }
}

impl Evaluate for BuiltinCall {
    fn eval(&self, interp: &mut Interpreter) -> f64 {
        let value = self.arg.eval(interp);

        match Builtin::try_from(self.func) {
            Ok(Builtin::Print) => {
                interp.print(value);
                value
            }
            Ok(builtin) => builtin.apply(value),
            Err(id) => {
                interp.report(EvalError::UnknownBuiltin { id });
                0.0
            }
        }
    }
}
