//! # Sapling
//!
//! A tree-walking evaluator for a small imperative expression language.
//!
//! Every value is an `f64`. Programs are trees built by an external parser
//! through the [`Node`] constructors; the [`Interpreter`] evaluates them
//! against a fixed-capacity table of global symbols.
//!
//! ## Architecture
//!
//! - **Symbol Table**: interns names to mutable value cells ([`SymbolTable`])
//! - **AST**: a closed enum of node kinds with exclusively owned children
//!   and non-owning [`SymbolId`] references ([`Node`])
//! - **Evaluator**: recursive interpretation of each node kind ([`Evaluate`])
//! - **Call Protocol**: user functions bind parameters by saving and
//!   restoring global symbols ([`Activation`])
//! - **Built-ins**: `sqrt`, `exp`, `log` and `print` ([`Builtin`])
//!
//! ## Example
//!
//! ```
//! use sapling::{ArithOp, Capture, CmpOp, Interpreter, Node};
//!
//! let output = Capture::<String>::new();
//! let mut interp = Interpreter::new().with_output(output.clone());
//!
//! // def fact(n) = if n <= 1 then 1 else n * fact(n - 1)
//! let fact = interp.lookup("fact").unwrap();
//! let n = interp.lookup("n").unwrap();
//! let body = Node::if_then(
//!     Node::compare(CmpOp::Le, Node::reference(n), Node::number(1.0)),
//!     Some(Node::number(1.0)),
//!     Some(Node::binary(
//!         ArithOp::Mul,
//!         Node::reference(n),
//!         Node::call(
//!             fact,
//!             Some(Node::binary(ArithOp::Sub, Node::reference(n), Node::number(1.0))),
//!         ),
//!     )),
//! );
//! interp.define(fact, vec![n], body);
//!
//! let tree = Node::call(fact, Some(Node::number(5.0)));
//! assert_eq!(interp.evaluate(Some(&tree)), 120.0);
//! interp.release_tree(tree);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod context;
pub mod error;
pub mod eval;
pub mod format;
pub mod interpreter;
pub mod report;
pub mod symbol;

// Re-export main types
pub use ast::{
    ArithOp, Assignment, BinaryExpr, Builtin, BuiltinCall, BuiltinId, CmpOp, CompareExpr, IfExpr,
    Node, SequenceExpr, TreeDump, UserCall, WhileExpr,
};
pub use context::EvalContext;
pub use error::{Diagnostic, EvalError, Result, Severity};
pub use eval::Evaluate;
pub use interpreter::{Activation, Interpreter};
pub use report::{Capture, DiagnosticSink, OutputSink, SourceLine, StderrSink, StdoutSink};
pub use symbol::{Function, Symbol, SymbolId, SymbolTable};

/// Sapling version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }
}
