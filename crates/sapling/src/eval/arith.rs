//! Arithmetic and comparison evaluation
//!
//! Plain IEEE-754 semantics: division by zero yields an infinity or NaN
//! and is not reported.

use super::Evaluate;
use crate::ast::{ArithOp, BinaryExpr, CmpOp, CompareExpr};
use crate::Interpreter;

impl Evaluate for BinaryExpr {
    fn eval(&self, interp: &mut Interpreter) -> f64 {
        let left = self.left.eval(interp);
        let right = self.right.eval(interp);
        apply_arith(self.op, left, right)
    }
}

impl Evaluate for CompareExpr {
    fn eval(&self, interp: &mut Interpreter) -> f64 {
        let left = self.left.eval(interp);
        let right = self.right.eval(interp);
        if apply_cmp(self.op, left, right) {
            1.0
        } else {
            0.0
        }
    }
}

/// Apply an arithmetic operator.
pub fn apply_arith(op: ArithOp, left: f64, right: f64) -> f64 {
    match op {
        ArithOp::Add => left + right,
        ArithOp::Sub => left - right,
        ArithOp::Mul => left * right,
        ArithOp::Div => left / right,
    }
}

/// Apply a comparison operator.
pub fn apply_cmp(op: CmpOp, left: f64, right: f64) -> bool {
    match op {
        CmpOp::Lt => left < right,
        CmpOp::Gt => left > right,
        CmpOp::Ne => left != right,
        CmpOp::Eq => left == right,
        CmpOp::Ge => left >= right,
        CmpOp::Le => left <= right,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Node;

    #[test]
    fn test_arith_ops() {
        assert_eq!(apply_arith(ArithOp::Add, 2.0, 3.0), 5.0);
        assert_eq!(apply_arith(ArithOp::Sub, 2.0, 3.0), -1.0);
        assert_eq!(apply_arith(ArithOp::Mul, 2.0, 3.0), 6.0);
        assert_eq!(apply_arith(ArithOp::Div, 3.0, 2.0), 1.5);
    }

    #[test]
    fn test_division_by_zero_propagates() {
        assert_eq!(apply_arith(ArithOp::Div, 1.0, 0.0), f64::INFINITY);
        assert_eq!(apply_arith(ArithOp::Div, -1.0, 0.0), f64::NEG_INFINITY);
        assert!(apply_arith(ArithOp::Div, 0.0, 0.0).is_nan());
    }

    #[test]
    fn test_nan_comparisons() {
        assert!(!apply_cmp(CmpOp::Eq, f64::NAN, f64::NAN));
        assert!(apply_cmp(CmpOp::Ne, f64::NAN, f64::NAN));
        assert!(!apply_cmp(CmpOp::Lt, f64::NAN, 1.0));
    }

    #[test]
    fn test_compare_yields_one_or_zero() {
        let mut interp = Interpreter::new();
        let cases = [
            (CmpOp::Lt, 1.0, 2.0, 1.0),
            (CmpOp::Gt, 1.0, 2.0, 0.0),
            (CmpOp::Ne, 1.0, 1.0, 0.0),
            (CmpOp::Eq, 1.0, 1.0, 1.0),
            (CmpOp::Ge, 2.0, 2.0, 1.0),
            (CmpOp::Le, 3.0, 2.0, 0.0),
        ];
        for (op, l, r, expected) in cases {
            let node = Node::compare(op, Node::number(l), Node::number(r));
            assert_eq!(interp.eval(&node), expected, "{} {} {}", l, op.symbol(), r);
        }
    }

    #[test]
    fn test_binary_evaluates_left_before_right() {
        let mut interp = Interpreter::new();
        let x = interp.lookup("x").unwrap();
        // (x = 2) - (x = x * 10)  ->  2 - 20
        let node = Node::binary(
            ArithOp::Sub,
            Node::assign(x, Node::number(2.0)),
            Node::assign(
                x,
                Node::binary(ArithOp::Mul, Node::reference(x), Node::number(10.0)),
            ),
        );
        assert_eq!(interp.eval(&node), -18.0);
        assert_eq!(interp.value(x), 20.0);
    }
}
