//! RAII activation record for user function calls

use super::Interpreter;
use crate::symbol::SymbolId;

/// Parameter bindings for one call, undone when dropped.
///
/// Parameters are ordinary global symbols. Binding saves each symbol's
/// current value and overwrites it with the argument; dropping the guard
/// writes the saved values back in declaration order, on every exit path.
/// Each nested call holds its own guard on the native stack, so recursive
/// calls restore exactly the values visible at their own entry.
///
/// # Example
///
/// ```
/// use sapling::Interpreter;
///
/// let mut interp = Interpreter::new();
/// let n = interp.lookup("n").unwrap();
/// interp.set_value(n, 1.0);
///
/// {
///     let frame = interp.activate(&[n], &[5.0]);
///     assert_eq!(frame.value(n), 5.0);
/// }
/// assert_eq!(interp.value(n), 1.0);
/// ```
pub struct Activation<'a> {
    interp: &'a mut Interpreter,
    saved: Vec<(SymbolId, f64)>,
}

impl Interpreter {
    /// Bind `values` to `params` pairwise and return the guard undoing it.
    ///
    /// Extra entries on either side are ignored.
    pub fn activate(&mut self, params: &[SymbolId], values: &[f64]) -> Activation<'_> {
        let mut saved = Vec::with_capacity(params.len());
        for (&param, &value) in params.iter().zip(values) {
            let cell = &mut self.symbols[param].value;
            saved.push((param, *cell));
            *cell = value;
        }
        self.call_depth += 1;

        Activation {
            interp: self,
            saved,
        }
    }
}

impl Activation<'_> {
    /// The saved `(parameter, prior value)` pairs, in declaration order.
    pub fn saved(&self) -> &[(SymbolId, f64)] {
        &self.saved
    }
}

impl Drop for Activation<'_> {
    fn drop(&mut self) {
        for &(param, value) in &self.saved {
            self.interp.symbols[param].value = value;
        }
        self.interp.call_depth = self.interp.call_depth.saturating_sub(1);
    }
}

impl std::ops::Deref for Activation<'_> {
    type Target = Interpreter;

    fn deref(&self) -> &Self::Target {
        self.interp
    }
}

impl std::ops::DerefMut for Activation<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interp
    }
}
