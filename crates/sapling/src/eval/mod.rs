//! Expression evaluation
//!
//! Evaluation recurses on the native stack: its depth is the tree's nesting
//! depth plus the language-level call depth, and nothing bounds it. A
//! runaway recursive program overflows the host stack.

pub mod arith;
pub mod assign;
pub mod builtin;
pub mod call;
pub mod control;

use crate::ast::Node;
use crate::Interpreter;

/// Trait for evaluating AST nodes to values.
///
/// Every node evaluates to an `f64`. Recoverable errors are reported to the
/// interpreter's diagnostic sink and evaluate to `0.0`; they never unwind.
pub trait Evaluate {
    /// Evaluate this node against the interpreter's symbols.
    fn eval(&self, interp: &mut Interpreter) -> f64;
}

// ═══════════════════════════════════════════════════════════════════════
// Main Expression Dispatcher
// ═══════════════════════════════════════════════════════════════════════

impl Evaluate for Node {
    fn eval(&self, interp: &mut Interpreter) -> f64 {
        match self {
            Node::Number(value) => *value,
            Node::Reference(symbol) => interp.value(*symbol),
            Node::Assign(expr) => expr.eval(interp),
            Node::Binary(expr) => expr.eval(interp),
            Node::Neg(operand) => -operand.eval(interp),
            Node::Abs(operand) => operand.eval(interp).abs(),
            Node::Compare(expr) => expr.eval(interp),
            Node::Sequence(expr) => expr.eval(interp),
            Node::If(expr) => expr.eval(interp),
            Node::While(expr) => expr.eval(interp),
            Node::Builtin(expr) => expr.eval(interp),
            Node::Call(expr) => expr.eval(interp),
        }
    }
}

impl Interpreter {
    /// Evaluate a node (convenience wrapper).
    pub fn eval(&mut self, node: &Node) -> f64 {
        node.eval(self)
    }
}

/// Truthiness: any nonzero value (including NaN) is true.
pub fn is_truthy(value: f64) -> bool {
    value != 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness() {
        assert!(is_truthy(1.0));
        assert!(is_truthy(-0.5));
        assert!(is_truthy(f64::NAN));
        assert!(!is_truthy(0.0));
        assert!(!is_truthy(-0.0));
    }

    #[test]
    fn test_literal_and_unary() {
        let mut interp = Interpreter::new();
        assert_eq!(interp.eval(&Node::number(2.5)), 2.5);
        assert_eq!(interp.eval(&Node::neg(Node::number(2.5))), -2.5);
        assert_eq!(interp.eval(&Node::abs(Node::number(-4.0))), 4.0);
        assert_eq!(interp.eval(&Node::abs(Node::number(4.0))), 4.0);
    }
}
