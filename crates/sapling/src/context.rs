//! Evaluation context configuration

/// Default number of symbol table slots.
pub const DEFAULT_SYMBOL_CAPACITY: usize = 9997;

/// Configuration for an interpreter instance.
///
/// Fixed at construction; the symbol table never resizes, so
/// `symbol_capacity` bounds the number of distinct names a program may use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalContext {
    /// Number of slots in the symbol table
    pub symbol_capacity: usize,

    /// Significant digits used by `print`
    pub print_precision: usize,

    /// Minimum field width used by `print` (right-aligned)
    pub print_width: usize,

    /// Log an indented dump of each top-level tree before evaluating it
    pub dump_trees: bool,
}

impl Default for EvalContext {
    fn default() -> Self {
        Self {
            symbol_capacity: DEFAULT_SYMBOL_CAPACITY,
            print_precision: 4,
            print_width: 4,
            dump_trees: false,
        }
    }
}

impl EvalContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with a custom symbol table capacity.
    pub fn with_symbol_capacity(capacity: usize) -> Self {
        Self {
            symbol_capacity: capacity,
            ..Default::default()
        }
    }

    /// Set the number of significant digits `print` renders.
    pub fn print_precision(mut self, digits: usize) -> Self {
        self.print_precision = digits;
        self
    }

    /// Set the minimum field width `print` renders.
    pub fn print_width(mut self, width: usize) -> Self {
        self.print_width = width;
        self
    }

    /// Enable or disable tree dumps.
    pub fn dump_trees(mut self, enabled: bool) -> Self {
        self.dump_trees = enabled;
        self
    }
}
