//! Fixed-capacity symbol table interning names to value cells
//!
//! Every name a program mentions lives in one global namespace: variables,
//! functions and parameters all share it. A symbol is created on first
//! lookup and lives as long as the table.

use std::ops::{Index, IndexMut};
use std::rc::Rc;

use crate::ast::Node;
use crate::error::{EvalError, Result};

/// Handle to an interned symbol.
///
/// Trees hold these instead of the symbol itself, so tearing a tree down
/// never touches the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolId(usize);

impl SymbolId {
    /// The table slot this symbol occupies.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A user-defined function installed on a symbol.
#[derive(Debug)]
pub struct Function {
    // Field order is drop order: the body is released before the params.
    /// The function body
    pub body: Node,

    /// Parameter symbols in declaration order
    pub params: Vec<SymbolId>,
}

impl Function {
    /// Number of declared parameters.
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// One named storage cell, optionally callable.
#[derive(Debug)]
pub struct Symbol {
    name: String,

    /// Current value
    pub value: f64,

    /// Installed function, shared with in-flight calls
    function: Option<Rc<Function>>,
}

impl Symbol {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            value: 0.0,
            function: None,
        }
    }

    /// The interned name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The installed function, if any.
    pub fn function(&self) -> Option<&Rc<Function>> {
        self.function.as_ref()
    }

    /// Whether a function body is installed.
    pub fn is_function(&self) -> bool {
        self.function.is_some()
    }

    /// Declared arity, if this symbol is a function.
    pub fn arity(&self) -> Option<usize> {
        self.function.as_ref().map(|f| f.arity())
    }
}

/// Open-addressing hash table of symbols with linear probing.
///
/// The capacity is fixed at construction. Once every slot holds a distinct
/// name, interning another name fails with
/// [`EvalError::SymbolTableOverflow`].
///
/// # Example
///
/// ```
/// use sapling::SymbolTable;
///
/// let mut table = SymbolTable::new(16);
/// let x = table.lookup("x").unwrap();
/// table[x].value = 2.5;
///
/// assert_eq!(table.lookup("x").unwrap(), x);
/// assert_eq!(table[x].value, 2.5);
/// ```
#[derive(Debug)]
pub struct SymbolTable {
    slots: Vec<Option<Symbol>>,
    len: usize,
}

impl SymbolTable {
    /// Create an empty table with `capacity` slots.
    pub fn new(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self { slots, len: 0 }
    }

    /// Hash a name: `hash = hash * 9 ^ byte` over its bytes, wrapping.
    pub fn hash(name: &str) -> u32 {
        name.bytes()
            .fold(0u32, |hash, byte| hash.wrapping_mul(9) ^ u32::from(byte))
    }

    /// Return the symbol for `name`, interning it with value `0.0` if absent.
    ///
    /// # Errors
    ///
    /// `SymbolTableOverflow` if the name is new and no slot is free. This is
    /// fatal for the owning interpreter.
    pub fn lookup(&mut self, name: &str) -> Result<SymbolId> {
        let capacity = self.capacity();
        match self.probe(name) {
            Probe::Found(id) => Ok(id),
            Probe::Vacant(slot) => {
                self.slots[slot] = Some(Symbol::new(name));
                self.len += 1;
                tracing::debug!(symbol = name, slot, "interned symbol");
                Ok(SymbolId(slot))
            }
            Probe::Full => Err(EvalError::SymbolTableOverflow { capacity }),
        }
    }

    /// Find an existing symbol without interning.
    pub fn get(&self, name: &str) -> Option<SymbolId> {
        match self.probe(name) {
            Probe::Found(id) => Some(id),
            Probe::Vacant(_) | Probe::Full => None,
        }
    }

    /// Scan at most `capacity` slots, wrapping, starting at the name's home slot.
    fn probe(&self, name: &str) -> Probe {
        let capacity = self.capacity();
        if capacity == 0 {
            return Probe::Full;
        }

        let start = Self::hash(name) as usize % capacity;
        for step in 0..capacity {
            let slot = (start + step) % capacity;
            match &self.slots[slot] {
                Some(symbol) if symbol.name == name => return Probe::Found(SymbolId(slot)),
                Some(_) => {}
                None => return Probe::Vacant(slot),
            }
        }
        Probe::Full
    }

    /// Install `params` and `body` as the function of `id`.
    ///
    /// Any previous definition is released first: its body, then its
    /// parameter list. A call already running the old definition keeps it
    /// alive until that call returns.
    pub fn define(&mut self, id: SymbolId, params: Vec<SymbolId>, body: Node) {
        let symbol = &mut self[id];
        if let Some(previous) = symbol.function.take() {
            drop(previous);
        }
        symbol.function = Some(Rc::new(Function { body, params }));
    }

    /// Number of interned symbols.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no symbol has been interned yet.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Iterate over interned symbols in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (SymbolId, &Symbol)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, symbol)| symbol.as_ref().map(|s| (SymbolId(slot), s)))
    }
}

enum Probe {
    Found(SymbolId),
    Vacant(usize),
    Full,
}

impl Index<SymbolId> for SymbolTable {
    type Output = Symbol;

    /// # Panics
    ///
    /// If `id` was not produced by this table.
    fn index(&self, id: SymbolId) -> &Symbol {
        match self.slots.get(id.0) {
            Some(Some(symbol)) => symbol,
            _ => panic!("symbol id {} does not belong to this table", id.0),
        }
    }
}

impl IndexMut<SymbolId> for SymbolTable {
    fn index_mut(&mut self, id: SymbolId) -> &mut Symbol {
        match self.slots.get_mut(id.0) {
            Some(Some(symbol)) => symbol,
            _ => panic!("symbol id {} does not belong to this table", id.0),
        }
    }
}
