//! Abstract syntax tree for the expression language
//!
//! Every child node is exclusively owned by its parent (`Box`), so dropping
//! a tree releases it depth-first. Symbol references are [`SymbolId`]
//! handles into the interpreter's table and are never released with the
//! tree.

mod dump;

pub use dump::TreeDump;

use std::fmt;

use crate::symbol::SymbolId;

/// Arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl ArithOp {
    /// Source spelling of the operator.
    pub fn symbol(self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
        }
    }
}

/// Comparison operators. All of them evaluate to exactly `1.0` or `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<>`
    Ne,
    /// `==`
    Eq,
    /// `>=`
    Ge,
    /// `<=`
    Le,
}

impl CmpOp {
    /// Decode the lexer's comparison code (1 through 6).
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(CmpOp::Lt),
            2 => Some(CmpOp::Gt),
            3 => Some(CmpOp::Ne),
            4 => Some(CmpOp::Eq),
            5 => Some(CmpOp::Ge),
            6 => Some(CmpOp::Le),
            _ => None,
        }
    }

    /// Source spelling of the operator.
    pub fn symbol(self) -> &'static str {
        match self {
            CmpOp::Lt => "<",
            CmpOp::Gt => ">",
            CmpOp::Ne => "<>",
            CmpOp::Eq => "==",
            CmpOp::Ge => ">=",
            CmpOp::Le => "<=",
        }
    }
}

/// The fixed set of native unary functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    /// Square root
    Sqrt = 1,
    /// Natural exponential
    Exp = 2,
    /// Natural logarithm
    Log = 3,
    /// Write the value to the output sink and return it
    Print = 4,
}

impl Builtin {
    /// Resolve a built-in by its keyword.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sqrt" => Some(Builtin::Sqrt),
            "exp" => Some(Builtin::Exp),
            "log" => Some(Builtin::Log),
            "print" => Some(Builtin::Print),
            _ => None,
        }
    }

    /// The keyword naming this built-in.
    pub fn name(self) -> &'static str {
        match self {
            Builtin::Sqrt => "sqrt",
            Builtin::Exp => "exp",
            Builtin::Log => "log",
            Builtin::Print => "print",
        }
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw built-in id as produced by the parser.
///
/// Resolved to a [`Builtin`] only at evaluation time; ids outside the table
/// are reported then.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinId(pub u32);

impl From<Builtin> for BuiltinId {
    fn from(builtin: Builtin) -> Self {
        BuiltinId(builtin as u32)
    }
}

impl TryFrom<BuiltinId> for Builtin {
    type Error = u32;

    fn try_from(id: BuiltinId) -> Result<Self, u32> {
        match id.0 {
            1 => Ok(Builtin::Sqrt),
            2 => Ok(Builtin::Exp),
            3 => Ok(Builtin::Log),
            4 => Ok(Builtin::Print),
            other => Err(other),
        }
    }
}

/// `symbol = value`
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// Target symbol
    pub symbol: SymbolId,
    /// Value expression
    pub value: Box<Node>,
}

/// `left op right` for arithmetic operators
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    /// Operator
    pub op: ArithOp,
    /// Left operand
    pub left: Box<Node>,
    /// Right operand
    pub right: Box<Node>,
}

/// `left op right` for comparison operators
#[derive(Debug, Clone, PartialEq)]
pub struct CompareExpr {
    /// Operator
    pub op: CmpOp,
    /// Left operand
    pub left: Box<Node>,
    /// Right operand
    pub right: Box<Node>,
}

/// Two expressions evaluated in order; the second one's value is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceExpr {
    /// Evaluated for effect
    pub first: Box<Node>,
    /// Evaluated for the result
    pub second: Box<Node>,
}

/// `if cond then ... else ...`; both branches may be absent.
#[derive(Debug, Clone, PartialEq)]
pub struct IfExpr {
    /// Condition, true when nonzero
    pub cond: Box<Node>,
    /// Taken when the condition is nonzero
    pub then_branch: Option<Box<Node>>,
    /// Taken when the condition is zero
    pub else_branch: Option<Box<Node>>,
}

/// `while cond do body`; the body may be absent.
#[derive(Debug, Clone, PartialEq)]
pub struct WhileExpr {
    /// Condition, re-evaluated before each iteration
    pub cond: Box<Node>,
    /// Loop body
    pub body: Option<Box<Node>>,
}

/// Call of a native function.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltinCall {
    /// Which built-in
    pub func: BuiltinId,
    /// The single argument
    pub arg: Box<Node>,
}

/// Call of a user-defined function.
#[derive(Debug, Clone, PartialEq)]
pub struct UserCall {
    /// The function symbol
    pub func: SymbolId,
    /// Arguments as a right-nested sequence chain, absent for `f()`
    pub args: Option<Box<Node>>,
}

impl UserCall {
    /// Flatten the argument chain into argument expressions, left to right.
    ///
    /// `Sequence(a, Sequence(b, c))` yields `[a, b, c]`.
    pub fn arguments(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        let mut next = self.args.as_deref();
        while let Some(node) = next {
            match node {
                Node::Sequence(seq) => {
                    out.push(seq.first.as_ref());
                    next = Some(seq.second.as_ref());
                }
                last => {
                    out.push(last);
                    next = None;
                }
            }
        }
        out
    }
}

/// One expression or statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Numeric literal
    Number(f64),
    /// Read of a symbol's value
    Reference(SymbolId),
    /// Assignment, itself an expression
    Assign(Assignment),
    /// Arithmetic
    Binary(BinaryExpr),
    /// Unary minus
    Neg(Box<Node>),
    /// Absolute value, `|x|`
    Abs(Box<Node>),
    /// Comparison
    Compare(CompareExpr),
    /// Statement list / argument list link
    Sequence(SequenceExpr),
    /// Conditional
    If(IfExpr),
    /// Loop
    While(WhileExpr),
    /// Built-in call
    Builtin(BuiltinCall),
    /// User function call
    Call(UserCall),
}

// ═══════════════════════════════════════════════════════════════════════
// Constructors
// ═══════════════════════════════════════════════════════════════════════

impl Node {
    /// Numeric literal.
    pub fn number(value: f64) -> Self {
        Node::Number(value)
    }

    /// Symbol reference.
    pub fn reference(symbol: SymbolId) -> Self {
        Node::Reference(symbol)
    }

    /// Assignment of `value` to `symbol`.
    pub fn assign(symbol: SymbolId, value: Node) -> Self {
        Node::Assign(Assignment {
            symbol,
            value: Box::new(value),
        })
    }

    /// Arithmetic operation.
    pub fn binary(op: ArithOp, left: Node, right: Node) -> Self {
        Node::Binary(BinaryExpr {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Comparison.
    pub fn compare(op: CmpOp, left: Node, right: Node) -> Self {
        Node::Compare(CompareExpr {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Unary minus.
    pub fn neg(operand: Node) -> Self {
        Node::Neg(Box::new(operand))
    }

    /// Absolute value.
    pub fn abs(operand: Node) -> Self {
        Node::Abs(Box::new(operand))
    }

    /// Sequence of two expressions.
    pub fn sequence(first: Node, second: Node) -> Self {
        Node::Sequence(SequenceExpr {
            first: Box::new(first),
            second: Box::new(second),
        })
    }

    /// Conditional.
    pub fn if_then(cond: Node, then_branch: Option<Node>, else_branch: Option<Node>) -> Self {
        Node::If(IfExpr {
            cond: Box::new(cond),
            then_branch: then_branch.map(Box::new),
            else_branch: else_branch.map(Box::new),
        })
    }

    /// Loop.
    pub fn while_loop(cond: Node, body: Option<Node>) -> Self {
        Node::While(WhileExpr {
            cond: Box::new(cond),
            body: body.map(Box::new),
        })
    }

    /// Built-in call; `func` may be a [`Builtin`] or a raw [`BuiltinId`].
    pub fn builtin(func: impl Into<BuiltinId>, arg: Node) -> Self {
        Node::Builtin(BuiltinCall {
            func: func.into(),
            arg: Box::new(arg),
        })
    }

    /// User function call.
    pub fn call(func: SymbolId, args: Option<Node>) -> Self {
        Node::Call(UserCall {
            func,
            args: args.map(Box::new),
        })
    }

    /// Chain expressions into a right-nested sequence.
    ///
    /// Returns `None` for an empty iterator. Used for argument lists and
    /// multi-statement bodies.
    pub fn args(items: impl IntoIterator<Item = Node>) -> Option<Self> {
        let mut items: Vec<Node> = items.into_iter().collect();
        let mut chain = items.pop()?;
        while let Some(prev) = items.pop() {
            chain = Node::sequence(prev, chain);
        }
        Some(chain)
    }

    /// Short name of the node kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Number(_) => "number",
            Node::Reference(_) => "reference",
            Node::Assign(_) => "assignment",
            Node::Binary(_) => "binary operation",
            Node::Neg(_) => "unary minus",
            Node::Abs(_) => "absolute value",
            Node::Compare(_) => "comparison",
            Node::Sequence(_) => "sequence",
            Node::If(_) => "if",
            Node::While(_) => "while",
            Node::Builtin(_) => "built-in call",
            Node::Call(_) => "function call",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::SymbolTable;

    #[test]
    fn test_args_builds_right_nested_chain() {
        let chain = Node::args([Node::number(1.0), Node::number(2.0), Node::number(3.0)]);
        let expected = Node::sequence(
            Node::number(1.0),
            Node::sequence(Node::number(2.0), Node::number(3.0)),
        );
        assert_eq!(chain, Some(expected));
        assert_eq!(Node::args(Vec::new()), None);
    }

    #[test]
    fn test_arguments_flatten_left_to_right() {
        let mut table = SymbolTable::new(7);
        let f = table.lookup("f").unwrap();
        let call = UserCall {
            func: f,
            args: Node::args([Node::number(1.0), Node::number(2.0), Node::number(3.0)])
                .map(Box::new),
        };

        let values: Vec<_> = call
            .arguments()
            .into_iter()
            .map(|n| match n {
                Node::Number(v) => *v,
                other => panic!("unexpected {}", other.kind_name()),
            })
            .collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_arguments_empty_call() {
        let mut table = SymbolTable::new(7);
        let f = table.lookup("f").unwrap();
        let call = UserCall { func: f, args: None };
        assert!(call.arguments().is_empty());
    }

    #[test]
    fn test_builtin_ids_round_trip() {
        for builtin in [Builtin::Sqrt, Builtin::Exp, Builtin::Log, Builtin::Print] {
            assert_eq!(Builtin::try_from(BuiltinId::from(builtin)), Ok(builtin));
            assert_eq!(Builtin::from_name(builtin.name()), Some(builtin));
        }
        assert_eq!(Builtin::try_from(BuiltinId(0)), Err(0));
        assert_eq!(Builtin::from_name("sin"), None);
    }

    #[test]
    fn test_cmp_codes() {
        assert_eq!(CmpOp::from_code(1), Some(CmpOp::Lt));
        assert_eq!(CmpOp::from_code(4), Some(CmpOp::Eq));
        assert_eq!(CmpOp::from_code(6), Some(CmpOp::Le));
        assert_eq!(CmpOp::from_code(0), None);
        assert_eq!(CmpOp::from_code(7), None);
    }
}
