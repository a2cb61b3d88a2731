//! Assignment evaluation

use super::Evaluate;
use crate::ast::Assignment;
use crate::Interpreter;

impl Evaluate for Assignment {
    fn eval(&self, interp: &mut Interpreter) -> f64 {
        let value = self.value.eval(interp);
        interp.set_value(self.symbol, value);
        value
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::Node;
    use crate::Interpreter;

    #[test]
    fn test_assignment_chains() {
        let mut interp = Interpreter::new();
        let a = interp.lookup("a").unwrap();
        let b = interp.lookup("b").unwrap();

        // a = b = 7
        let node = Node::assign(a, Node::assign(b, Node::number(7.0)));
        assert_eq!(interp.eval(&node), 7.0);
        assert_eq!(interp.value(a), 7.0);
        assert_eq!(interp.value(b), 7.0);
    }
}
