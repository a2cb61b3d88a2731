//! Sequencing, conditionals and loops
//!
//! No construct here introduces a scope: every symbol is global.

use super::{is_truthy, Evaluate};
use crate::ast::{IfExpr, SequenceExpr, WhileExpr};
use crate::Interpreter;

impl Evaluate for SequenceExpr {
    fn eval(&self, interp: &mut Interpreter) -> f64 {
        self.first.eval(interp);
        self.second.eval(interp)
    }
}

impl Evaluate for IfExpr {
    fn eval(&self, interp: &mut Interpreter) -> f64 {
        let branch = if is_truthy(self.cond.eval(interp)) {
            &self.then_branch
        } else {
            &self.else_branch
        };

        match branch {
            Some(node) => node.eval(interp),
            None => 0.0,
        }
    }
}

impl Evaluate for WhileExpr {
    fn eval(&self, interp: &mut Interpreter) -> f64 {
        // A loop without a body never looks at its condition.
        let Some(body) = &self.body else {
            return 0.0;
        };

        let mut last = 0.0;
        while is_truthy(self.cond.eval(interp)) {
            last = body.eval(interp);
        }
        last
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{ArithOp, CmpOp, Node};
    use crate::Interpreter;

    #[test]
    fn test_sequence_returns_second() {
        let mut interp = Interpreter::new();
        let x = interp.lookup("x").unwrap();
        let node = Node::sequence(Node::assign(x, Node::number(1.0)), Node::number(2.0));

        assert_eq!(interp.eval(&node), 2.0);
        assert_eq!(interp.value(x), 1.0);
    }

    #[test]
    fn test_if_picks_branch_by_truthiness() {
        let mut interp = Interpreter::new();
        let pick = |cond: f64| {
            Node::if_then(
                Node::number(cond),
                Some(Node::number(10.0)),
                Some(Node::number(20.0)),
            )
        };

        assert_eq!(interp.eval(&pick(1.0)), 10.0);
        assert_eq!(interp.eval(&pick(-3.0)), 10.0);
        assert_eq!(interp.eval(&pick(0.0)), 20.0);
    }

    #[test]
    fn test_while_counts_down() {
        let mut interp = Interpreter::new();
        let i = interp.lookup("i").unwrap();
        let acc = interp.lookup("acc").unwrap();
        interp.set_value(i, 4.0);

        // while i > 0 do acc = acc + i; i = i - 1
        let node = Node::while_loop(
            Node::compare(CmpOp::Gt, Node::reference(i), Node::number(0.0)),
            Node::args([
                Node::assign(
                    acc,
                    Node::binary(ArithOp::Add, Node::reference(acc), Node::reference(i)),
                ),
                Node::assign(
                    i,
                    Node::binary(ArithOp::Sub, Node::reference(i), Node::number(1.0)),
                ),
            ]),
        );

        // Last body value is the final `i = i - 1`.
        assert_eq!(interp.eval(&node), 0.0);
        assert_eq!(interp.value(acc), 10.0);
        assert_eq!(interp.value(i), 0.0);
    }

    #[test]
    fn test_while_returns_last_body_value() {
        let mut interp = Interpreter::new();
        let i = interp.lookup("i").unwrap();

        // while i < 3 do (i = i + 1) * 100
        let node = Node::while_loop(
            Node::compare(CmpOp::Lt, Node::reference(i), Node::number(3.0)),
            Some(Node::binary(
                ArithOp::Mul,
                Node::assign(
                    i,
                    Node::binary(ArithOp::Add, Node::reference(i), Node::number(1.0)),
                ),
                Node::number(100.0),
            )),
        );

        assert_eq!(interp.eval(&node), 300.0);
    }

    #[test]
    fn test_while_never_entered_yields_zero() {
        let mut interp = Interpreter::new();
        let node = Node::while_loop(Node::number(0.0), Some(Node::number(5.0)));
        assert_eq!(interp.eval(&node), 0.0);
    }
}
