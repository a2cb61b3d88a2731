//! Interpreter instance: symbol table, configuration and side channels

mod activation;

pub use activation::Activation;

use std::fmt;

use crate::ast::Node;
use crate::context::EvalContext;
use crate::error::{Diagnostic, EvalError, Result};
use crate::format::format_general;
use crate::report::{DiagnosticSink, OutputSink, SourceLine, StderrSink, StdoutSink};
use crate::symbol::{SymbolId, SymbolTable};

/// One interpreter instance.
///
/// Owns its own symbol table, so separate instances never share variables
/// or functions. Not thread-safe: evaluation mutates symbols in place.
///
/// # Example
///
/// ```
/// use sapling::{ArithOp, Interpreter, Node};
///
/// let mut interp = Interpreter::new();
/// let x = interp.lookup("x").unwrap();
///
/// let tree = Node::assign(x, Node::binary(ArithOp::Mul, Node::number(6.0), Node::number(7.0)));
/// assert_eq!(interp.evaluate(Some(&tree)), 42.0);
/// interp.release_tree(tree);
///
/// assert_eq!(interp.value(x), 42.0);
/// ```
pub struct Interpreter {
    symbols: SymbolTable,
    ctx: EvalContext,
    output: Box<dyn OutputSink>,
    diagnostics: Box<dyn DiagnosticSink>,
    line: SourceLine,
    call_depth: usize,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Interpreter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interpreter")
            .field("symbols", &self.symbols.len())
            .field("ctx", &self.ctx)
            .field("line", &self.line.get())
            .field("call_depth", &self.call_depth)
            .finish()
    }
}

impl Interpreter {
    /// Create an interpreter with default settings, printing to stdout and
    /// reporting to stderr.
    pub fn new() -> Self {
        Self::with_context(EvalContext::default())
    }

    /// Create an interpreter with a custom configuration.
    pub fn with_context(ctx: EvalContext) -> Self {
        Self {
            symbols: SymbolTable::new(ctx.symbol_capacity),
            ctx,
            output: Box::new(StdoutSink),
            diagnostics: Box::new(StderrSink),
            line: SourceLine::new(1),
            call_depth: 0,
        }
    }

    /// Replace the sink receiving `print` output.
    pub fn with_output(mut self, sink: impl OutputSink + 'static) -> Self {
        self.output = Box::new(sink);
        self
    }

    /// Replace the sink receiving diagnostics.
    pub fn with_diagnostics(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.diagnostics = Box::new(sink);
        self
    }

    /// Use a line counter shared with a lexer.
    pub fn with_source_line(mut self, line: SourceLine) -> Self {
        self.line = line;
        self
    }

    // ═══════════════════════════════════════════════════════════════════
    // Accessors
    // ═══════════════════════════════════════════════════════════════════

    /// The configuration this instance was built with.
    pub fn context(&self) -> &EvalContext {
        &self.ctx
    }

    /// The symbol table.
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Mutable access to the symbol table.
    pub fn symbols_mut(&mut self) -> &mut SymbolTable {
        &mut self.symbols
    }

    /// A handle to the line counter used in diagnostics.
    pub fn source_line(&self) -> SourceLine {
        self.line.clone()
    }

    /// Number of user function calls currently in progress.
    pub fn call_depth(&self) -> usize {
        self.call_depth
    }

    /// Current value of a symbol.
    pub fn value(&self, id: SymbolId) -> f64 {
        self.symbols[id].value
    }

    /// Overwrite the value of a symbol.
    pub fn set_value(&mut self, id: SymbolId, value: f64) {
        self.symbols[id].value = value;
    }

    // ═══════════════════════════════════════════════════════════════════
    // Driver Operations
    // ═══════════════════════════════════════════════════════════════════

    /// Intern `name`, returning its symbol.
    ///
    /// # Errors
    ///
    /// `SymbolTableOverflow` when the table is full. The overflow is also
    /// reported to the diagnostic sink; the caller must stop using this
    /// interpreter.
    pub fn lookup(&mut self, name: &str) -> Result<SymbolId> {
        match self.symbols.lookup(name) {
            Ok(id) => Ok(id),
            Err(error) => {
                self.report(error.clone());
                Err(error)
            }
        }
    }

    /// Define (or redefine) `func` with the given parameters and body.
    pub fn define(&mut self, func: SymbolId, params: Vec<SymbolId>, body: Node) {
        tracing::debug!(
            function = self.symbols[func].name(),
            arity = params.len(),
            redefined = self.symbols[func].is_function(),
            "defining function"
        );
        self.symbols.define(func, params, body);
    }

    /// Evaluate a top-level tree.
    ///
    /// An absent tree is reported as `NullExpression` and yields `0.0`.
    pub fn evaluate(&mut self, tree: Option<&Node>) -> f64 {
        let Some(tree) = tree else {
            self.report(EvalError::NullExpression);
            return 0.0;
        };

        if self.ctx.dump_trees {
            tracing::debug!(tree = %tree.dump(&self.symbols), "evaluating");
        }
        self.eval(tree)
    }

    /// Release a top-level tree after evaluation.
    ///
    /// Owned children are released depth-first; symbols the tree refers to
    /// stay in the table.
    pub fn release_tree(&mut self, tree: Node) {
        tracing::trace!(kind = tree.kind_name(), "releasing tree");
        drop(tree);
    }

    // ═══════════════════════════════════════════════════════════════════
    // Side Channels
    // ═══════════════════════════════════════════════════════════════════

    /// Report an error at the current source line.
    pub(crate) fn report(&mut self, error: EvalError) {
        let diagnostic = Diagnostic::new(self.line.get(), error);
        tracing::debug!(line = diagnostic.line, error = %diagnostic.error, "reporting");
        self.diagnostics.report(&diagnostic);
    }

    /// Write `= <value>` to the output sink.
    pub(crate) fn print(&mut self, value: f64) {
        let text = format_general(value, self.ctx.print_precision, self.ctx.print_width);
        self.output.write_line(&format!("= {}", text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Capture;

    #[test]
    fn test_lookup_is_idempotent() {
        let mut interp = Interpreter::new();
        let a = interp.lookup("alpha").unwrap();
        let b = interp.lookup("alpha").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_lookup_overflow_is_reported() {
        let diagnostics: Capture<Diagnostic> = Capture::new();
        let mut interp = Interpreter::with_context(EvalContext::with_symbol_capacity(1))
            .with_diagnostics(diagnostics.clone());

        interp.lookup("a").unwrap();
        let err = interp.lookup("b").unwrap_err();

        assert!(err.is_fatal());
        assert_eq!(
            diagnostics.rendered(),
            vec!["1: error: symbol table overflow (1 slots in use)"]
        );
    }

    #[test]
    fn test_null_tree_reports_and_yields_zero() {
        let diagnostics: Capture<Diagnostic> = Capture::new();
        let mut interp = Interpreter::new().with_diagnostics(diagnostics.clone());
        interp.source_line().set(7);

        assert_eq!(interp.evaluate(None), 0.0);
        assert_eq!(
            diagnostics.snapshot(),
            vec![Diagnostic::new(7, EvalError::NullExpression)]
        );
    }

    #[test]
    fn test_release_tree_keeps_symbols() {
        let mut interp = Interpreter::new();
        let x = interp.lookup("x").unwrap();
        let tree = Node::assign(x, Node::number(3.0));

        interp.evaluate(Some(&tree));
        interp.release_tree(tree);

        assert_eq!(interp.symbols().get("x"), Some(x));
        assert_eq!(interp.value(x), 3.0);
    }
}
