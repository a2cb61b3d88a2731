//! Indented tree dump for debugging

use std::fmt;

use super::{Builtin, Node};
use crate::format::format_general;
use crate::symbol::SymbolTable;

/// Displayable dump of a tree, one node per line, two spaces per level.
///
/// # Example
///
/// ```
/// use sapling::{ArithOp, Node, SymbolTable};
///
/// let mut table = SymbolTable::new(16);
/// let x = table.lookup("x").unwrap();
/// let tree = Node::assign(x, Node::binary(ArithOp::Add, Node::number(1.0), Node::number(2.5)));
///
/// assert_eq!(
///     tree.dump(&table).to_string(),
///     "assign x\n  binop +\n    number 1\n    number 2.5\n"
/// );
/// ```
pub struct TreeDump<'a> {
    node: &'a Node,
    symbols: &'a SymbolTable,
}

impl Node {
    /// Dump this tree, resolving symbol names through `symbols`.
    pub fn dump<'a>(&'a self, symbols: &'a SymbolTable) -> TreeDump<'a> {
        TreeDump {
            node: self,
            symbols,
        }
    }
}

impl fmt::Display for TreeDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self.symbols, Some(self.node), 0)
    }
}

fn write_node(
    f: &mut fmt::Formatter<'_>,
    symbols: &SymbolTable,
    node: Option<&Node>,
    level: usize,
) -> fmt::Result {
    let indent = level * 2;
    let Some(node) = node else {
        return writeln!(f, "{:indent$}(none)", "");
    };

    match node {
        Node::Number(value) => writeln!(f, "{:indent$}number {}", "", format_general(*value, 4, 0)),
        Node::Reference(id) => writeln!(f, "{:indent$}ref {}", "", symbols[*id].name()),
        Node::Assign(assign) => {
            writeln!(f, "{:indent$}assign {}", "", symbols[assign.symbol].name())?;
            write_node(f, symbols, Some(&*assign.value), level + 1)
        }
        Node::Binary(bin) => {
            writeln!(f, "{:indent$}binop {}", "", bin.op.symbol())?;
            write_node(f, symbols, Some(&*bin.left), level + 1)?;
            write_node(f, symbols, Some(&*bin.right), level + 1)
        }
        Node::Neg(operand) => {
            writeln!(f, "{:indent$}neg", "")?;
            write_node(f, symbols, Some(&**operand), level + 1)
        }
        Node::Abs(operand) => {
            writeln!(f, "{:indent$}abs", "")?;
            write_node(f, symbols, Some(&**operand), level + 1)
        }
        Node::Compare(cmp) => {
            writeln!(f, "{:indent$}cmp {}", "", cmp.op.symbol())?;
            write_node(f, symbols, Some(&*cmp.left), level + 1)?;
            write_node(f, symbols, Some(&*cmp.right), level + 1)
        }
        Node::Sequence(seq) => {
            writeln!(f, "{:indent$}seq", "")?;
            write_node(f, symbols, Some(&*seq.first), level + 1)?;
            write_node(f, symbols, Some(&*seq.second), level + 1)
        }
        Node::If(flow) => {
            writeln!(f, "{:indent$}if", "")?;
            write_node(f, symbols, Some(&*flow.cond), level + 1)?;
            write_node(f, symbols, flow.then_branch.as_deref(), level + 1)?;
            write_node(f, symbols, flow.else_branch.as_deref(), level + 1)
        }
        Node::While(flow) => {
            writeln!(f, "{:indent$}while", "")?;
            write_node(f, symbols, Some(&*flow.cond), level + 1)?;
            write_node(f, symbols, flow.body.as_deref(), level + 1)
        }
        Node::Builtin(call) => {
            match Builtin::try_from(call.func) {
                Ok(builtin) => writeln!(f, "{:indent$}builtin {}", "", builtin)?,
                Err(id) => writeln!(f, "{:indent$}builtin #{}", "", id)?,
            }
            write_node(f, symbols, Some(&*call.arg), level + 1)
        }
        Node::Call(call) => {
            writeln!(f, "{:indent$}call {}", "", symbols[call.func].name())?;
            write_node(f, symbols, call.args.as_deref(), level + 1)
        }
    }
}
